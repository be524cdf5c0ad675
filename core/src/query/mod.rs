//! Query dispatch: one authorization check, then one handler call, per
//! query kind. No virtual-call tree — everything below is a single match.

pub mod handlers;

use ledger_data_model::prelude::*;

use crate::authorize::{authorize, requirement_for};
use crate::block_store::BlockStoreReader;
use crate::pending_store::PendingTransactionStore;
use crate::wsv::WorldStateReader;

/// Run `request` to completion against one snapshot of each store.
///
/// Order: (1) `validate_signatories`, if set; (2) authorization; (3) the
/// matching handler, which applies its own ID-validity, pagination and
/// existence checks in that order.
#[tracing::instrument(skip_all, fields(kind = request.query.kind_name(), creator = %request.creator_account_id))]
pub fn execute<R, B, Pe>(
    reader: &R,
    blocks: &B,
    pending: &Pe,
    request: &QueryRequest,
) -> Result<QuerySuccess, QueryError>
where
    R: WorldStateReader,
    B: BlockStoreReader,
    Pe: PendingTransactionStore,
{
    check_signatories(reader, request)?;

    let creator = &request.creator_account_id;
    let outcome = dispatch(reader, blocks, pending, request, creator);
    if let Err(err) = &outcome {
        tracing::debug!(?err, "query failed");
    }
    outcome
}

fn dispatch<R, B, Pe>(
    reader: &R,
    blocks: &B,
    pending: &Pe,
    request: &QueryRequest,
    creator: &AccountId,
) -> Result<QuerySuccess, QueryError>
where
    R: WorldStateReader,
    B: BlockStoreReader,
    Pe: PendingTransactionStore,
{
    match &request.query {
        Query::GetAccount { target } => {
            authorize_for(reader, creator, &request.query)?;
            handlers::account::get_account(reader, target).map(QuerySuccess::Account)
        }
        Query::GetSignatories { target } => {
            authorize_for(reader, creator, &request.query)?;
            handlers::account::get_signatories(reader, target).map(QuerySuccess::Signatories)
        }
        Query::GetAccountAssets {
            target,
            page_size,
            first_asset,
        } => {
            authorize_for(reader, creator, &request.query)?;
            handlers::account::get_account_assets(reader, target, *page_size, first_asset.as_ref())
                .map(QuerySuccess::AccountAssets)
        }
        Query::GetAccountDetail {
            target,
            writer,
            key,
            page_size,
            first_record,
        } => {
            authorize_for(reader, creator, &request.query)?;
            handlers::account::get_account_detail(
                reader,
                target,
                writer.as_ref(),
                key.as_deref(),
                *page_size,
                first_record.as_deref(),
            )
            .map(QuerySuccess::AccountDetail)
        }
        Query::GetAssetInfo { asset_id } => {
            authorize_for(reader, creator, &request.query)?;
            handlers::asset::get_asset_info(reader, asset_id).map(QuerySuccess::Asset)
        }
        Query::GetRoles => {
            authorize_for(reader, creator, &request.query)?;
            handlers::role::get_roles(reader).map(QuerySuccess::Roles)
        }
        Query::GetRolePermissions { role_id } => {
            authorize_for(reader, creator, &request.query)?;
            handlers::role::get_role_permissions(reader, role_id).map(QuerySuccess::RolePermissions)
        }
        Query::GetPeers => {
            authorize_for(reader, creator, &request.query)?;
            handlers::peer::get_peers(reader).map(QuerySuccess::Peers)
        }
        Query::GetBlock { height } => {
            authorize_for(reader, creator, &request.query)?;
            handlers::block::get_block(blocks, *height).map(QuerySuccess::Block)
        }
        Query::GetAccountTransactions {
            target,
            page_size,
            first_hash,
        } => {
            authorize_for(reader, creator, &request.query)?;
            handlers::transaction::get_account_transactions(
                reader, blocks, target, *page_size, *first_hash,
            )
            .map(QuerySuccess::AccountTransactions)
        }
        Query::GetAccountAssetTransactions {
            target,
            asset_id,
            page_size,
            first_hash,
        } => {
            authorize_for(reader, creator, &request.query)?;
            handlers::transaction::get_account_asset_transactions(
                reader, blocks, target, asset_id, *page_size, *first_hash,
            )
            .map(QuerySuccess::AccountAssetTransactions)
        }
        Query::GetTransactions { hashes } => {
            handlers::transaction::get_transactions(reader, blocks, creator, hashes)
                .map(QuerySuccess::Transactions)
        }
        Query::GetPendingTransactions {
            page_size,
            first_hash,
        } => handlers::pending::get_pending_transactions(pending, creator, *page_size, *first_hash)
            .map(QuerySuccess::PendingTransactions),
    }
}

fn authorize_for<R: WorldStateReader>(
    reader: &R,
    creator: &AccountId,
    query: &Query,
) -> Result<(), QueryError> {
    let (target, requirement) =
        requirement_for(query).expect("every branch dispatching here has a table entry");
    authorize(reader, creator, target.as_ref(), requirement)
}

fn check_signatories<R: WorldStateReader>(
    reader: &R,
    request: &QueryRequest,
) -> Result<(), QueryError> {
    if !request.validate_signatories {
        return Ok(());
    }
    let known = reader
        .get_signatories(&request.creator_account_id)
        .unwrap_or_default();
    let matches = request
        .signer
        .as_ref()
        .is_some_and(|signer| known.contains(signer));
    if matches {
        Ok(())
    } else {
        Err(QueryError::NoPermissions)
    }
}

#[cfg(test)]
mod tests {
    use nonzero_ext::nonzero;

    use super::*;
    use crate::block_store::InMemoryBlockStore;
    use crate::pending_store::InMemoryPendingStore;
    use crate::wsv::InMemoryWorldStateView;

    fn request(creator: &str, query: Query) -> QueryRequest {
        QueryRequest {
            creator_account_id: creator.parse().unwrap(),
            created_time_ms: 0,
            query,
            signer: None,
            validate_signatories: false,
        }
    }

    #[test]
    fn missing_permission_denies_before_existence_check() {
        let reader = InMemoryWorldStateView::new();
        let blocks = InMemoryBlockStore::new();
        let pending = InMemoryPendingStore::new();
        let role: RoleId = "nobody".parse().unwrap();
        reader.insert_role(role.clone(), RolePermissionSet::empty());
        reader.insert_account(
            Account::new(
                AccountId::new("alice".parse().unwrap(), "wonderland".parse().unwrap()),
                nonzero!(1_u8),
                serde_json::Value::Null,
            ),
            vec![role],
        );

        let req = request(
            "alice@wonderland",
            Query::GetAccount {
                target: "nobody@wonderland".parse().unwrap(),
            },
        );
        assert_eq!(
            execute(&reader, &blocks, &pending, &req),
            Err(QueryError::NoPermissions)
        );
    }

    #[test]
    fn root_gets_peers() {
        let reader = InMemoryWorldStateView::new();
        let blocks = InMemoryBlockStore::new();
        let pending = InMemoryPendingStore::new();
        let role: RoleId = "root".parse().unwrap();
        reader.insert_role(role.clone(), RolePermissionSet::ROOT);
        reader.insert_account(
            Account::new(
                AccountId::new("alice".parse().unwrap(), "wonderland".parse().unwrap()),
                nonzero!(1_u8),
                serde_json::Value::Null,
            ),
            vec![role],
        );
        reader.insert_peer(Peer::new(
            "127.0.0.1:1337".to_owned(),
            PublicKey::from_bytes(vec![9]),
            None,
        ));

        let req = request("alice@wonderland", Query::GetPeers);
        let result = execute(&reader, &blocks, &pending, &req).unwrap();
        match result {
            QuerySuccess::Peers(response) => assert_eq!(response.peers.len(), 1),
            _ => panic!("expected Peers response"),
        }
    }
}
