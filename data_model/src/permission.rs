//! Role permissions and grantable permissions.
//!
//! [`RolePermissionSet`] is a fixed-width bitmap: a role's reach is the union
//! of every bit set by any role the account holds, plus whatever has been
//! delegated to it one account at a time via [`GrantableKind`].

use bitflags::bitflags;
use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};

bitflags! {
    /// One bit per distinct authority a role can carry.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Encode, Decode)]
    pub struct RolePermissionSet: u64 {
        const GET_MY_ACCOUNT = 1 << 0;
        const GET_DOMAIN_ACCOUNTS = 1 << 1;
        const GET_ALL_ACCOUNTS = 1 << 2;

        const GET_MY_ACCOUNT_TRANSACTIONS = 1 << 3;
        const GET_DOMAIN_ACCOUNT_TRANSACTIONS = 1 << 4;
        const GET_ALL_ACCOUNT_TRANSACTIONS = 1 << 5;

        const GET_MY_ACCOUNT_ASSET_TRANSACTIONS = 1 << 6;
        const GET_DOMAIN_ACCOUNT_ASSET_TRANSACTIONS = 1 << 7;
        const GET_ALL_ACCOUNT_ASSET_TRANSACTIONS = 1 << 8;

        const GET_MY_SIGNATORIES = 1 << 9;
        const GET_DOMAIN_SIGNATORIES = 1 << 10;
        const GET_ALL_SIGNATORIES = 1 << 11;

        const GET_MY_ACCOUNT_DETAIL = 1 << 12;
        const GET_DOMAIN_ACCOUNT_DETAIL = 1 << 13;
        const GET_ALL_ACCOUNT_DETAIL = 1 << 14;

        const GET_MY_ACCOUNT_ASSETS = 1 << 15;
        const GET_DOMAIN_ACCOUNT_ASSETS = 1 << 16;
        const GET_ALL_ACCOUNT_ASSETS = 1 << 17;

        const GET_ALL_TRANSACTIONS = 1 << 18;
        const GET_BLOCKS = 1 << 19;
        const GET_ROLES = 1 << 20;
        const READ_ASSETS = 1 << 21;
        const GET_PEERS = 1 << 22;

        /// The superpower: satisfies every permission check unconditionally.
        const ROOT = 1 << 63;
    }
}

impl RolePermissionSet {
    /// Union of every permission carried by any role in `roles`.
    pub fn union_all(roles: impl IntoIterator<Item = Self>) -> Self {
        roles
            .into_iter()
            .fold(Self::empty(), |acc, role| acc | role)
    }

    /// True iff `Root` is set; `Root` satisfies every other check.
    #[must_use]
    pub fn has_root(self) -> bool {
        self.contains(Self::ROOT)
    }

    /// Set membership, with `Root` satisfying anything.
    #[must_use]
    pub fn has(self, p: Self) -> bool {
        self.has_root() || self.contains(p)
    }
}

/// Actions a grantor can delegate to a grantee independently of role checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Encode, Decode)]
pub enum GrantableKind {
    AccountAssets,
    Signatories,
    AccountDetail,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_satisfies_any_check() {
        let perms = RolePermissionSet::ROOT;
        assert!(perms.has(RolePermissionSet::GET_ALL_ACCOUNTS));
        assert!(perms.has(RolePermissionSet::GET_BLOCKS));
    }

    #[test]
    fn union_all_combines_bits() {
        let combined = RolePermissionSet::union_all([
            RolePermissionSet::GET_MY_ACCOUNT,
            RolePermissionSet::GET_BLOCKS,
        ]);
        assert!(combined.has(RolePermissionSet::GET_MY_ACCOUNT));
        assert!(combined.has(RolePermissionSet::GET_BLOCKS));
        assert!(!combined.has(RolePermissionSet::GET_ALL_ACCOUNTS));
    }

    #[test]
    fn missing_bit_is_denied_without_root() {
        let perms = RolePermissionSet::GET_MY_ACCOUNT;
        assert!(!perms.has(RolePermissionSet::GET_ALL_ACCOUNTS));
    }
}
