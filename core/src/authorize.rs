//! The query authorizer: `authorize(creator, query) -> Ok | NoPermissions`.
//!
//! Permission requirements are data, not branches — adding a query kind
//! means adding a table row in [`requirement_for`], never a new `if`.

use ledger_data_model::prelude::*;

use crate::wsv::WorldStateReader;

/// The permission triple (plus optional grantable delegation) one query kind
/// requires.
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissionRequirement {
    pub self_p: Option<RolePermissionSet>,
    pub domain_p: Option<RolePermissionSet>,
    pub all_p: Option<RolePermissionSet>,
    pub grantable: Option<GrantableKind>,
}

impl PermissionRequirement {
    const fn scoped(
        self_p: RolePermissionSet,
        domain_p: RolePermissionSet,
        all_p: RolePermissionSet,
    ) -> Self {
        Self {
            self_p: Some(self_p),
            domain_p: Some(domain_p),
            all_p: Some(all_p),
            grantable: None,
        }
    }

    const fn grantable(mut self, kind: GrantableKind) -> Self {
        self.grantable = Some(kind);
        self
    }

    const fn plain(permission: RolePermissionSet) -> Self {
        Self {
            self_p: None,
            domain_p: None,
            all_p: Some(permission),
            grantable: None,
        }
    }
}

/// The permission requirement and, when the query is account-scoped, the
/// target account the scope (self/domain/all) is evaluated against.
///
/// `GetTransactions` and `GetPendingTransactions` are deliberately absent:
/// the former has a bespoke permission rule, the latter has none — it
/// only ever reaches into the caller's own pending queue.
pub fn requirement_for(query: &Query) -> Option<(Option<AccountId>, PermissionRequirement)> {
    use RolePermissionSet as P;

    Some(match query {
        Query::GetAccount { target } => (
            Some(target.clone()),
            PermissionRequirement::scoped(
                P::GET_MY_ACCOUNT,
                P::GET_DOMAIN_ACCOUNTS,
                P::GET_ALL_ACCOUNTS,
            ),
        ),
        Query::GetSignatories { target } => (
            Some(target.clone()),
            PermissionRequirement::scoped(
                P::GET_MY_SIGNATORIES,
                P::GET_DOMAIN_SIGNATORIES,
                P::GET_ALL_SIGNATORIES,
            )
            .grantable(GrantableKind::Signatories),
        ),
        Query::GetAccountAssets { target, .. } => (
            Some(target.clone()),
            PermissionRequirement::scoped(
                P::GET_MY_ACCOUNT_ASSETS,
                P::GET_DOMAIN_ACCOUNT_ASSETS,
                P::GET_ALL_ACCOUNT_ASSETS,
            )
            .grantable(GrantableKind::AccountAssets),
        ),
        Query::GetAccountDetail { target, .. } => (
            Some(target.clone()),
            PermissionRequirement::scoped(
                P::GET_MY_ACCOUNT_DETAIL,
                P::GET_DOMAIN_ACCOUNT_DETAIL,
                P::GET_ALL_ACCOUNT_DETAIL,
            )
            .grantable(GrantableKind::AccountDetail),
        ),
        Query::GetAccountTransactions { target, .. } => (
            Some(target.clone()),
            PermissionRequirement::scoped(
                P::GET_MY_ACCOUNT_TRANSACTIONS,
                P::GET_DOMAIN_ACCOUNT_TRANSACTIONS,
                P::GET_ALL_ACCOUNT_TRANSACTIONS,
            ),
        ),
        Query::GetAccountAssetTransactions { target, .. } => (
            Some(target.clone()),
            PermissionRequirement::scoped(
                P::GET_MY_ACCOUNT_ASSET_TRANSACTIONS,
                P::GET_DOMAIN_ACCOUNT_ASSET_TRANSACTIONS,
                P::GET_ALL_ACCOUNT_ASSET_TRANSACTIONS,
            )
            .grantable(GrantableKind::AccountAssets),
        ),
        Query::GetAssetInfo { .. } => (None, PermissionRequirement::plain(P::READ_ASSETS)),
        Query::GetRoles | Query::GetRolePermissions { .. } => {
            (None, PermissionRequirement::plain(P::GET_ROLES))
        }
        Query::GetPeers => (None, PermissionRequirement::plain(P::GET_PEERS)),
        Query::GetBlock { .. } => (None, PermissionRequirement::plain(P::GET_BLOCKS)),
        Query::GetTransactions { .. } | Query::GetPendingTransactions { .. } => return None,
    })
}

/// Decide whether `creator` may run `query` against `target` (or `creator`
/// itself, for queries without an explicit target).
///
/// # Errors
/// [`QueryError::NoPermissions`] if none of self/domain/all/grantable/root holds.
pub fn authorize<R: WorldStateReader>(
    reader: &R,
    creator: &AccountId,
    target: Option<&AccountId>,
    requirement: PermissionRequirement,
) -> Result<(), QueryError> {
    let perms = reader
        .effective_permissions(creator)
        .map_err(|_| QueryError::NoPermissions)?;

    if perms.has_root() {
        return Ok(());
    }

    let target = target.unwrap_or(creator);

    if target == creator {
        if let Some(p) = requirement.self_p {
            if perms.has(p) {
                return Ok(());
            }
        }
    }

    if target.same_domain(creator) {
        if let Some(p) = requirement.domain_p {
            if perms.has(p) {
                return Ok(());
            }
        }
    }

    if let Some(p) = requirement.all_p {
        if perms.has(p) {
            return Ok(());
        }
    }

    if let Some(kind) = requirement.grantable {
        if reader.has_grantable(target, creator, kind) {
            return Ok(());
        }
    }

    Err(QueryError::NoPermissions)
}

/// The `GetBlocksQuery` validate-only check: Ok iff `creator` holds
/// `GetBlocks` or `Root`. The engine does not itself stream blocks.
///
/// # Errors
/// [`QueryError::NoPermissions`] otherwise.
pub fn validate_blocks_subscription<R: WorldStateReader>(
    reader: &R,
    creator: &AccountId,
) -> Result<(), QueryError> {
    let perms = reader
        .effective_permissions(creator)
        .map_err(|_| QueryError::NoPermissions)?;
    if perms.has(RolePermissionSet::GET_BLOCKS) {
        Ok(())
    } else {
        Err(QueryError::NoPermissions)
    }
}
