//! Read-only contract over the world state: accounts, domains, roles,
//! assets, peers, signatories, account details and grantable permissions.
//!
//! All reads a handler takes within one query must come from the same
//! [`WorldStateReader`] value — that value *is* the query's snapshot.

use std::collections::BTreeMap;

use dashmap::DashMap;
use ledger_data_model::prelude::*;
use serde_json::Value as JsonValue;

/// An error surfaced by a world-state read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum WsvError {
    #[error("account does not exist")]
    NoAccount,
    #[error("role does not exist")]
    NoRole,
    #[error("account has no signatories")]
    NoSignatories,
    #[error("account detail subtree does not exist")]
    NoAccountDetail,
    #[error("pagination cursor does not match any asset held by the account")]
    InvalidPagination,
}

/// Read-only, snapshot-consistent view of accounts, domains, roles, assets,
/// peers and the grantable-permission edges between accounts.
pub trait WorldStateReader {
    fn get_account(&self, id: &AccountId) -> Option<Account>;
    fn get_account_roles(&self, id: &AccountId) -> Result<Vec<RoleId>, WsvError>;
    fn get_role_permissions(&self, role: &RoleId) -> Result<RolePermissionSet, WsvError>;
    fn get_signatories(&self, id: &AccountId) -> Result<Vec<PublicKey>, WsvError>;
    fn get_asset(&self, id: &AssetId) -> Option<Asset>;
    fn get_account_assets(
        &self,
        id: &AccountId,
        page_size: u32,
        first_asset: Option<&AssetId>,
    ) -> Result<Page<AccountAssetEntry, AssetId>, WsvError>;
    fn get_account_detail(
        &self,
        id: &AccountId,
        writer: Option<&AccountId>,
        key: Option<&str>,
    ) -> Result<JsonValue, WsvError>;
    fn get_peers(&self) -> Vec<Peer>;
    fn has_grantable(&self, grantor: &AccountId, grantee: &AccountId, kind: GrantableKind) -> bool;
    /// Every known role id, in the order roles were first registered.
    fn list_roles(&self) -> Vec<RoleId>;

    /// Union of every permission bit carried by any role `id` holds.
    fn effective_permissions(&self, id: &AccountId) -> Result<RolePermissionSet, WsvError> {
        let roles = self.get_account_roles(id)?;
        let mut combined = RolePermissionSet::empty();
        for role in &roles {
            combined |= self.get_role_permissions(role)?;
        }
        Ok(combined)
    }
}

#[derive(Debug, Clone)]
struct AccountRecord {
    account: Account,
    roles: Vec<RoleId>,
    signatories: Vec<PublicKey>,
    assets: BTreeMap<AssetId, AssetQuantity>,
    detail: JsonValue,
}

/// An in-memory [`WorldStateReader`] used to build fixtures in tests.
#[derive(Debug, Default)]
pub struct InMemoryWorldStateView {
    accounts: DashMap<AccountId, AccountRecord>,
    roles: DashMap<RoleId, RolePermissionSet>,
    role_order: std::sync::Mutex<Vec<RoleId>>,
    assets: DashMap<AssetId, Asset>,
    peers: DashMap<String, Peer>,
    grants: DashMap<(AccountId, AccountId, GrantableKind), ()>,
}

impl InMemoryWorldStateView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_role(&self, id: RoleId, permissions: RolePermissionSet) {
        if self.roles.insert(id.clone(), permissions).is_none() {
            self.role_order.lock().unwrap().push(id);
        }
    }

    pub fn insert_account(&self, account: Account, roles: Vec<RoleId>) {
        let id = account.id().clone();
        self.accounts.insert(
            id,
            AccountRecord {
                account,
                roles,
                signatories: Vec::new(),
                assets: BTreeMap::new(),
                detail: JsonValue::Object(serde_json::Map::new()),
            },
        );
    }

    pub fn insert_signatory(&self, account: &AccountId, key: PublicKey) {
        if let Some(mut record) = self.accounts.get_mut(account) {
            record.signatories.push(key);
        }
    }

    pub fn insert_asset(&self, asset: Asset) {
        self.assets.insert(asset.id().clone(), asset);
    }

    pub fn set_balance(&self, account: &AccountId, asset: AssetId, quantity: AssetQuantity) {
        if let Some(mut record) = self.accounts.get_mut(account) {
            record.assets.insert(asset, quantity);
        }
    }

    pub fn set_detail(&self, account: &AccountId, detail: JsonValue) {
        if let Some(mut record) = self.accounts.get_mut(account) {
            record.detail = detail;
        }
    }

    pub fn insert_peer(&self, peer: Peer) {
        self.peers.insert(peer.address().clone(), peer);
    }

    pub fn grant(&self, grantor: AccountId, grantee: AccountId, kind: GrantableKind) {
        self.grants.insert((grantor, grantee, kind), ());
    }
}

impl WorldStateReader for InMemoryWorldStateView {
    fn get_account(&self, id: &AccountId) -> Option<Account> {
        self.accounts.get(id).map(|record| record.account.clone())
    }

    fn get_account_roles(&self, id: &AccountId) -> Result<Vec<RoleId>, WsvError> {
        self.accounts
            .get(id)
            .map(|record| record.roles.clone())
            .ok_or(WsvError::NoAccount)
    }

    fn get_role_permissions(&self, role: &RoleId) -> Result<RolePermissionSet, WsvError> {
        self.roles.get(role).map(|p| *p).ok_or(WsvError::NoRole)
    }

    fn get_signatories(&self, id: &AccountId) -> Result<Vec<PublicKey>, WsvError> {
        let record = self.accounts.get(id).ok_or(WsvError::NoAccount)?;
        if record.signatories.is_empty() {
            return Err(WsvError::NoSignatories);
        }
        Ok(record.signatories.clone())
    }

    fn get_asset(&self, id: &AssetId) -> Option<Asset> {
        self.assets.get(id).map(|asset| asset.clone())
    }

    fn get_account_assets(
        &self,
        id: &AccountId,
        page_size: u32,
        first_asset: Option<&AssetId>,
    ) -> Result<Page<AccountAssetEntry, AssetId>, WsvError> {
        let record = self.accounts.get(id).ok_or(WsvError::NoAccount)?;
        let total = record.assets.len() as u64;

        let mut iter = record.assets.iter();
        if let Some(first) = first_asset {
            let found = iter.by_ref().find(|(asset_id, _)| *asset_id == first);
            if found.is_none() {
                return Err(WsvError::InvalidPagination);
            }
        }

        let mut items = Vec::new();
        let mut next = None;
        for (asset_id, quantity) in iter {
            if items.len() as u32 == page_size {
                next = Some(asset_id.clone());
                break;
            }
            items.push(AccountAssetEntry {
                asset_id: asset_id.clone(),
                quantity: *quantity,
            });
        }

        Ok(Page { items, next, total })
    }

    fn get_account_detail(
        &self,
        id: &AccountId,
        _writer: Option<&AccountId>,
        key: Option<&str>,
    ) -> Result<JsonValue, WsvError> {
        let record = self.accounts.get(id).ok_or(WsvError::NoAccount)?;
        let subtree = match key {
            Some(key) => record.detail.get(key).cloned().ok_or(WsvError::NoAccountDetail)?,
            None => record.detail.clone(),
        };
        Ok(subtree)
    }

    fn get_peers(&self) -> Vec<Peer> {
        self.peers.iter().map(|entry| entry.value().clone()).collect()
    }

    fn has_grantable(&self, grantor: &AccountId, grantee: &AccountId, kind: GrantableKind) -> bool {
        self.grants
            .contains_key(&(grantor.clone(), grantee.clone(), kind))
    }

    fn list_roles(&self) -> Vec<RoleId> {
        self.role_order.lock().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use nonzero_ext::nonzero;

    use super::*;

    fn account(name: &str, domain: &str) -> Account {
        Account::new(
            AccountId::new(name.parse().unwrap(), domain.parse().unwrap()),
            nonzero!(1_u8),
            JsonValue::Null,
        )
    }

    #[test]
    fn unknown_account_reports_no_account() {
        let wsv = InMemoryWorldStateView::new();
        let alice: AccountId = "alice@wonderland".parse().unwrap();
        assert_eq!(wsv.get_account_roles(&alice), Err(WsvError::NoAccount));
    }

    #[test]
    fn effective_permissions_unions_roles() {
        let wsv = InMemoryWorldStateView::new();
        let reader_role: RoleId = "reader".parse().unwrap();
        let writer_role: RoleId = "writer".parse().unwrap();
        wsv.insert_role(reader_role.clone(), RolePermissionSet::GET_MY_ACCOUNT);
        wsv.insert_role(writer_role.clone(), RolePermissionSet::GET_BLOCKS);
        wsv.insert_account(account("alice", "wonderland"), vec![reader_role, writer_role]);

        let alice: AccountId = "alice@wonderland".parse().unwrap();
        let perms = wsv.effective_permissions(&alice).unwrap();
        assert!(perms.has(RolePermissionSet::GET_MY_ACCOUNT));
        assert!(perms.has(RolePermissionSet::GET_BLOCKS));
    }

    #[test]
    fn account_assets_pagination_reports_unknown_cursor() {
        let wsv = InMemoryWorldStateView::new();
        wsv.insert_account(account("alice", "wonderland"), vec![]);
        let alice: AccountId = "alice@wonderland".parse().unwrap();
        let unknown: AssetId = "ghost#wonderland".parse().unwrap();
        assert_eq!(
            wsv.get_account_assets(&alice, 10, Some(&unknown)),
            Err(WsvError::InvalidPagination)
        );
    }
}
