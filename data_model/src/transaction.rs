//! Transactions and the commands inside them.

use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};

use crate::crypto::Signature;
use crate::hash::{Hash, HashOf};
use crate::ids::{AccountId, AssetId};
use crate::model::AssetQuantity;

/// An asset-moving instruction, the subset of commands the query engine
/// needs to recognize in order to answer account-asset-transaction queries.
/// Any other instruction kind (register, grant, revoke, ...) is opaque to
/// the read path and carried as [`Command::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub enum Command {
    TransferAsset {
        asset_id: AssetId,
        source_id: AccountId,
        destination_id: AccountId,
        amount: AssetQuantity,
    },
    MintAsset {
        asset_id: AssetId,
        destination_id: AccountId,
        amount: AssetQuantity,
    },
    BurnAsset {
        asset_id: AssetId,
        source_id: AccountId,
        amount: AssetQuantity,
    },
    /// A command with no bearing on asset-transaction queries.
    Other,
}

impl Command {
    /// Whether this command moves `asset_id` and touches `account` as either
    /// sender or recipient — the predicate behind `GetAccountAssetTransactions`.
    #[must_use]
    pub fn touches_asset_and_account(&self, asset_id: &AssetId, account: &AccountId) -> bool {
        match self {
            Self::TransferAsset {
                asset_id: a,
                source_id,
                destination_id,
                ..
            } => a == asset_id && (source_id == account || destination_id == account),
            Self::MintAsset {
                asset_id: a,
                destination_id,
                ..
            } => a == asset_id && destination_id == account,
            Self::BurnAsset {
                asset_id: a,
                source_id,
                ..
            } => a == asset_id && source_id == account,
            Self::Other => false,
        }
    }
}

/// `{ creator_account_id, created_time_ms, commands, signatures, hash }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub struct Transaction {
    pub hash: HashOf<Transaction>,
    pub creator_account_id: AccountId,
    pub created_time_ms: u64,
    pub commands: Vec<Command>,
    pub signatures: Vec<Signature>,
}

impl Transaction {
    /// A transaction's hash as a plain [`Hash`], for use as a pagination cursor.
    #[must_use]
    pub fn plain_hash(&self) -> Hash {
        self.hash.into_hash()
    }
}
