//! Random access to the committed block log: blocks by height, transactions
//! by hash, and the two per-account scans the transaction-history queries
//! page over.

use dashmap::DashMap;
use ledger_data_model::prelude::*;

/// An error surfaced by a block-store read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BlockStoreError {
    #[error("height is out of range")]
    InvalidHeight,
}

/// Read-only access to the append-only committed-block log.
pub trait BlockStoreReader {
    /// Height of the most recently committed block, `0` if the chain is empty.
    fn current_height(&self) -> u64;

    /// `height = 0` or `height > current_height` is [`BlockStoreError::InvalidHeight`].
    fn get_block(&self, height: u64) -> Result<Block, BlockStoreError>;

    /// A committed transaction and the `(height, index_within_block)` it lives at.
    fn get_tx(&self, hash: Hash) -> Option<(Transaction, u64, u32)>;

    /// Every committed transaction created by `account`, ascending by
    /// `(height, index_within_block)`.
    fn account_txs(&self, account: &AccountId) -> Vec<(u64, u32, Transaction)>;

    /// Every committed transaction that moves `asset` and touches `account`
    /// as sender or recipient, ascending by `(height, index_within_block)`.
    fn account_asset_txs(&self, account: &AccountId, asset: &AssetId) -> Vec<(u64, u32, Transaction)>;
}

/// An in-memory [`BlockStoreReader`] used to build fixtures in tests.
#[derive(Debug, Default)]
pub struct InMemoryBlockStore {
    blocks: Vec<Block>,
    tx_index: DashMap<Hash, (u64, u32)>,
}

impl InMemoryBlockStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `block` as the next committed block. Heights must be supplied
    /// contiguously starting at 1; callers build fixtures, not real chains.
    pub fn commit(&mut self, block: Block) {
        let height = block.height;
        for (index, tx) in block.transactions.iter().enumerate() {
            self.tx_index
                .insert(tx.plain_hash(), (height, index as u32));
        }
        self.blocks.push(block);
    }
}

impl BlockStoreReader for InMemoryBlockStore {
    fn current_height(&self) -> u64 {
        self.blocks.last().map_or(0, |block| block.height)
    }

    fn get_block(&self, height: u64) -> Result<Block, BlockStoreError> {
        if height == 0 || height > self.current_height() {
            return Err(BlockStoreError::InvalidHeight);
        }
        self.blocks
            .get((height - 1) as usize)
            .cloned()
            .ok_or(BlockStoreError::InvalidHeight)
    }

    fn get_tx(&self, hash: Hash) -> Option<(Transaction, u64, u32)> {
        let (height, index) = *self.tx_index.get(&hash)?;
        let block = self.blocks.get((height - 1) as usize)?;
        let tx = block.transactions.get(index as usize)?.clone();
        Some((tx, height, index))
    }

    fn account_txs(&self, account: &AccountId) -> Vec<(u64, u32, Transaction)> {
        let mut out = Vec::new();
        for block in &self.blocks {
            for (index, tx) in block.transactions.iter().enumerate() {
                if &tx.creator_account_id == account {
                    out.push((block.height, index as u32, tx.clone()));
                }
            }
        }
        out
    }

    fn account_asset_txs(&self, account: &AccountId, asset: &AssetId) -> Vec<(u64, u32, Transaction)> {
        let mut out = Vec::new();
        for block in &self.blocks {
            for (index, tx) in block.transactions.iter().enumerate() {
                if tx
                    .commands
                    .iter()
                    .any(|command| command.touches_asset_and_account(asset, account))
                {
                    out.push((block.height, index as u32, tx.clone()));
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(creator: &str, commands: Vec<Command>) -> Transaction {
        Transaction {
            hash: HashOf::from_hash(Hash::new(creator.as_bytes())),
            creator_account_id: creator.parse().unwrap(),
            created_time_ms: 0,
            commands,
            signatures: vec![],
        }
    }

    #[test]
    fn get_block_rejects_height_zero_and_beyond_tip() {
        let mut store = InMemoryBlockStore::new();
        store.commit(Block {
            height: 1,
            hash: HashOf::from_hash(Hash::new(b"block1")),
            prev_hash: Hash::zero(),
            created_time_ms: 0,
            transactions: vec![],
        });
        assert_eq!(store.get_block(0), Err(BlockStoreError::InvalidHeight));
        assert_eq!(store.get_block(2), Err(BlockStoreError::InvalidHeight));
        assert!(store.get_block(1).is_ok());
    }

    #[test]
    fn account_txs_preserve_committed_order() {
        let mut store = InMemoryBlockStore::new();
        store.commit(Block {
            height: 1,
            hash: HashOf::from_hash(Hash::new(b"block1")),
            prev_hash: Hash::zero(),
            created_time_ms: 0,
            transactions: vec![tx("alice@wonderland", vec![]), tx("bob@wonderland", vec![])],
        });
        let alice: AccountId = "alice@wonderland".parse().unwrap();
        let found = store.account_txs(&alice);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].0, 1);
        assert_eq!(found[0].1, 0);
    }
}
