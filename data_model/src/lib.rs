//! Data model for the ledger's read path: identifiers, permissions, world-state
//! entities, blocks, transactions, queries and responses.
//!
//! This crate has no knowledge of storage or execution; it only defines the
//! values the query engine passes between its components.

pub mod block;
pub mod crypto;
pub mod hash;
pub mod ids;
pub mod model;
pub mod permission;
pub mod query;
pub mod response;
pub mod transaction;

pub mod prelude {
    pub use crate::block::Block;
    pub use crate::crypto::{PublicKey, Signature};
    pub use crate::hash::{Hash, HashOf, HashParseError};
    pub use crate::ids::{AccountId, AssetId, DomainId, IdParseError, Name, RoleId};
    pub use crate::model::{Account, Asset, AssetQuantity, Domain, Peer, Role};
    pub use crate::permission::{GrantableKind, RolePermissionSet};
    pub use crate::query::{Query, QueryRequest};
    pub use crate::response::{
        AccountAssetEntry, AccountAssetsResponse, AccountDetailResponse, AccountResponse,
        AssetResponse, BlockResponse, ErrorQueryResponse, Page, PeersResponse,
        PendingTxsResponse, QueryError, QueryResponse, QuerySuccess, RolePermissionsResponse,
        RolesResponse, SignatoriesResponse, StatefulErrorKind, TransactionsPageResponse,
        TransactionsResponse,
    };
    pub use crate::transaction::{Command, Transaction};
}
