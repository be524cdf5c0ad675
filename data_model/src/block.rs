//! Committed blocks: the append-only log the query engine reads from.

use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};

use crate::hash::{Hash, HashOf};
use crate::transaction::Transaction;

/// `{ height >= 1, prev_hash, created_time, transactions }`.
///
/// `prev_hash` of the block at height 1 is [`Hash::zero`]; every later block's
/// `prev_hash` equals the hash of the block directly below it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub struct Block {
    pub height: u64,
    pub hash: HashOf<Block>,
    pub prev_hash: Hash,
    pub created_time_ms: u64,
    pub transactions: Vec<Transaction>,
}

impl Block {
    /// The genesis height; blocks are numbered from 1, never 0.
    pub const GENESIS_HEIGHT: u64 = 1;

    #[must_use]
    pub fn is_genesis(&self) -> bool {
        self.height == Self::GENESIS_HEIGHT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genesis_height_is_one() {
        assert_eq!(Block::GENESIS_HEIGHT, 1);
    }
}
