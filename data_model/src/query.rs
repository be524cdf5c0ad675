//! Query values: the inbound shape the dispatcher matches on.

use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};

use crate::crypto::PublicKey;
use crate::hash::Hash;
use crate::ids::{AccountId, AssetId, RoleId};

/// One query kind, tagged by variant. Every field named `target` is the
/// account the permission scope (self/domain/all) is evaluated against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub enum Query {
    GetAccount {
        target: AccountId,
    },
    GetSignatories {
        target: AccountId,
    },
    GetAccountAssets {
        target: AccountId,
        page_size: u32,
        first_asset: Option<AssetId>,
    },
    GetAccountDetail {
        target: AccountId,
        writer: Option<AccountId>,
        key: Option<String>,
        page_size: u32,
        first_record: Option<String>,
    },
    GetAssetInfo {
        asset_id: AssetId,
    },
    GetRoles,
    GetRolePermissions {
        role_id: RoleId,
    },
    GetPeers,
    GetBlock {
        height: u64,
    },
    GetAccountTransactions {
        target: AccountId,
        page_size: u32,
        first_hash: Option<Hash>,
    },
    GetAccountAssetTransactions {
        target: AccountId,
        asset_id: AssetId,
        page_size: u32,
        first_hash: Option<Hash>,
    },
    GetTransactions {
        hashes: Vec<Hash>,
    },
    GetPendingTransactions {
        page_size: Option<u32>,
        first_hash: Option<Hash>,
    },
}

impl Query {
    /// The query's own descriptive name, for logging and metrics labels.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::GetAccount { .. } => "GetAccount",
            Self::GetSignatories { .. } => "GetSignatories",
            Self::GetAccountAssets { .. } => "GetAccountAssets",
            Self::GetAccountDetail { .. } => "GetAccountDetail",
            Self::GetAssetInfo { .. } => "GetAssetInfo",
            Self::GetRoles => "GetRoles",
            Self::GetRolePermissions { .. } => "GetRolePermissions",
            Self::GetPeers => "GetPeers",
            Self::GetBlock { .. } => "GetBlock",
            Self::GetAccountTransactions { .. } => "GetAccountTransactions",
            Self::GetAccountAssetTransactions { .. } => "GetAccountAssetTransactions",
            Self::GetTransactions { .. } => "GetTransactions",
            Self::GetPendingTransactions { .. } => "GetPendingTransactions",
        }
    }
}

/// A query together with the envelope fields the dispatcher needs before it
/// can even look at the query body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub struct QueryRequest {
    pub creator_account_id: AccountId,
    pub created_time_ms: u64,
    pub query: Query,
    /// The public key the query was signed with, as unpacked by the schema
    /// layer. Only consulted when `validate_signatories` is set; the engine
    /// never verifies the signature itself.
    pub signer: Option<PublicKey>,
    /// When set, `signer` must match one of `creator_account_id`'s
    /// signatories or the request is rejected with `NoPermissions`.
    pub validate_signatories: bool,
}

impl QueryRequest {
    /// Content hash identifying this request, carried on every response.
    #[must_use]
    pub fn query_hash(&self) -> Hash {
        let bytes = self.encode();
        Hash::new(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_hash_is_deterministic() {
        let request = QueryRequest {
            creator_account_id: "alice@wonderland".parse().unwrap(),
            created_time_ms: 0,
            query: Query::GetRoles,
            signer: None,
            validate_signatories: false,
        };
        assert_eq!(request.query_hash(), request.query_hash());
    }

    #[test]
    fn kind_name_matches_variant() {
        assert_eq!(Query::GetPeers.kind_name(), "GetPeers");
    }
}
