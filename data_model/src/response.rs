//! Response values and the stateful error taxonomy.
//!
//! Every response, success or error, carries the `query_hash` of the request
//! that produced it. Error codes are stable wire constants; see
//! `CODE_*` below.

use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::crypto::PublicKey;
use crate::hash::Hash;
use crate::ids::{AccountId, AssetId, RoleId};
use crate::model::{Account, Asset, AssetQuantity, Peer};
use crate::permission::RolePermissionSet;
use crate::transaction::Transaction;

/// No stateful error occurred.
pub const CODE_NO_STATEFUL_ERROR: u32 = 0;
/// The caller lacks the permission the query requires.
pub const CODE_NO_PERMISSIONS: u32 = 2;
/// `GetBlock` was asked for height `0` or a height beyond the chain tip.
pub const CODE_INVALID_HEIGHT: u32 = 3;
/// A pagination cursor did not match any item in the stream it paginates.
pub const CODE_INVALID_PAGINATION: u32 = 4;
/// An account id is well-formed but names no existing account.
pub const CODE_INVALID_ACCOUNT_ID: u32 = 5;
/// An asset id is well-formed but names no existing asset.
pub const CODE_INVALID_ASSET_ID: u32 = 6;

/// A page of `items`, with the cursor of the first unreturned matching item
/// (`next`, absent when the stream is exhausted) and the total match count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub struct Page<T, C> {
    pub items: Vec<T>,
    pub next: Option<C>,
    pub total: u64,
}

/// One entry of a paginated account-assets listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub struct AccountAssetEntry {
    pub asset_id: AssetId,
    pub quantity: AssetQuantity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub struct AccountResponse {
    pub account: Account,
    pub roles: Vec<RoleId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub struct SignatoriesResponse {
    pub keys: Vec<PublicKey>,
}

pub type AccountAssetsResponse = Page<AccountAssetEntry, AssetId>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub struct AccountDetailResponse {
    pub detail: JsonValue,
    pub next_record: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub struct AssetResponse {
    pub asset: Asset,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub struct RolesResponse {
    pub roles: Vec<RoleId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub struct RolePermissionsResponse {
    pub permissions: RolePermissionSet,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub struct PeersResponse {
    pub peers: Vec<Peer>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub struct BlockResponse {
    pub block: crate::block::Block,
}

pub type TransactionsPageResponse = Page<Transaction, Hash>;
pub type PendingTxsResponse = Page<Transaction, Hash>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub struct TransactionsResponse {
    pub txs: Vec<Transaction>,
}

/// The successful outcome of one query, tagged by kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub enum QuerySuccess {
    Account(AccountResponse),
    Signatories(SignatoriesResponse),
    AccountAssets(AccountAssetsResponse),
    AccountDetail(AccountDetailResponse),
    Asset(AssetResponse),
    Roles(RolesResponse),
    RolePermissions(RolePermissionsResponse),
    Peers(PeersResponse),
    Block(BlockResponse),
    AccountTransactions(TransactionsPageResponse),
    AccountAssetTransactions(TransactionsPageResponse),
    Transactions(TransactionsResponse),
    PendingTransactions(PendingTxsResponse),
}

/// The sub-kind of a failed query. `StatefulFailed` is the generic carrier for
/// the numeric codes; the `No*` kinds always carry [`CODE_NO_STATEFUL_ERROR`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub enum StatefulErrorKind {
    StatefulFailed,
    NoAccount,
    NoSignatories,
    NoAccountAssets,
    NoAccountDetail,
    NoRoles,
    NoAsset,
    NotSupported,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub struct ErrorQueryResponse {
    pub query_hash: Hash,
    pub code: u32,
    pub kind: StatefulErrorKind,
}

/// The wire-level outcome of dispatching one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub enum QueryResponse {
    Success { query_hash: Hash, payload: QuerySuccess },
    Error(ErrorQueryResponse),
}

impl QueryResponse {
    #[must_use]
    pub const fn query_hash(&self) -> Hash {
        match self {
            Self::Success { query_hash, .. } | Self::Error(ErrorQueryResponse { query_hash, .. }) => {
                *query_hash
            }
        }
    }
}

/// The error a handler or the authorizer can raise while answering a query.
///
/// Distinct from [`ErrorQueryResponse`]: this is the in-process error type
/// handlers return via `Result`; the factory turns it into the wire form by
/// attaching the query's hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("caller lacks the permission this query requires")]
    NoPermissions,
    #[error("height is out of range")]
    InvalidHeight,
    #[error("pagination cursor does not match any item in this stream")]
    InvalidPagination,
    #[error("account id does not reference an existing account")]
    InvalidAccountId,
    #[error("asset id does not reference an existing asset")]
    InvalidAssetId,
    #[error("account not found")]
    NoAccount,
    #[error("asset not found")]
    NoAsset,
    #[error("role not found")]
    NoRoles,
    #[error("account has no signatories")]
    NoSignatories,
    #[error("account detail subtree not found")]
    NoAccountDetail,
    #[error("account has no matching assets")]
    NoAccountAssets,
    #[error("query kind is disabled by policy")]
    NotSupported,
}

impl QueryError {
    /// Attach `query_hash` and project this error onto its stable wire code
    /// and [`StatefulErrorKind`].
    #[must_use]
    pub const fn into_response(self, query_hash: Hash) -> ErrorQueryResponse {
        let (code, kind) = match self {
            Self::NoPermissions => (CODE_NO_PERMISSIONS, StatefulErrorKind::StatefulFailed),
            Self::InvalidHeight => (CODE_INVALID_HEIGHT, StatefulErrorKind::StatefulFailed),
            Self::InvalidPagination => (CODE_INVALID_PAGINATION, StatefulErrorKind::StatefulFailed),
            Self::InvalidAccountId => (CODE_INVALID_ACCOUNT_ID, StatefulErrorKind::StatefulFailed),
            Self::InvalidAssetId => (CODE_INVALID_ASSET_ID, StatefulErrorKind::StatefulFailed),
            Self::NoAccount => (CODE_NO_STATEFUL_ERROR, StatefulErrorKind::NoAccount),
            Self::NoAsset => (CODE_NO_STATEFUL_ERROR, StatefulErrorKind::NoAsset),
            Self::NoRoles => (CODE_NO_STATEFUL_ERROR, StatefulErrorKind::NoRoles),
            Self::NoSignatories => (CODE_NO_STATEFUL_ERROR, StatefulErrorKind::NoSignatories),
            Self::NoAccountDetail => (CODE_NO_STATEFUL_ERROR, StatefulErrorKind::NoAccountDetail),
            Self::NoAccountAssets => (CODE_NO_STATEFUL_ERROR, StatefulErrorKind::NoAccountAssets),
            Self::NotSupported => (CODE_NO_STATEFUL_ERROR, StatefulErrorKind::NotSupported),
        };
        ErrorQueryResponse {
            query_hash,
            code,
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_permissions_carries_code_two() {
        let response = QueryError::NoPermissions.into_response(Hash::zero());
        assert_eq!(response.code, CODE_NO_PERMISSIONS);
        assert_eq!(response.kind, StatefulErrorKind::StatefulFailed);
    }

    #[test]
    fn entity_absence_carries_code_zero() {
        let response = QueryError::NoAccount.into_response(Hash::zero());
        assert_eq!(response.code, CODE_NO_STATEFUL_ERROR);
        assert_eq!(response.kind, StatefulErrorKind::NoAccount);
    }
}
