//! `GetAccountTransactions`, `GetAccountAssetTransactions`, `GetTransactions`.

use ledger_data_model::prelude::*;

use crate::block_store::BlockStoreReader;
use crate::pagination::paginate_by_hash;
use crate::wsv::WorldStateReader;

pub fn get_account_transactions<R: WorldStateReader, B: BlockStoreReader>(
    reader: &R,
    blocks: &B,
    target: &AccountId,
    page_size: u32,
    first_hash: Option<Hash>,
) -> Result<TransactionsPageResponse, QueryError> {
    if reader.get_account(target).is_none() {
        return Err(QueryError::InvalidAccountId);
    }
    if page_size == 0 {
        return Err(QueryError::InvalidPagination);
    }
    let txs: Vec<Transaction> = blocks
        .account_txs(target)
        .into_iter()
        .map(|(_, _, tx)| tx)
        .collect();
    paginate_by_hash(txs, page_size, first_hash, Transaction::plain_hash)
        .map_err(|_| QueryError::InvalidPagination)
}

/// The precedence between a missing `target` and a missing `asset_id` is not
/// specified; this checks `target` first.
pub fn get_account_asset_transactions<R: WorldStateReader, B: BlockStoreReader>(
    reader: &R,
    blocks: &B,
    target: &AccountId,
    asset_id: &AssetId,
    page_size: u32,
    first_hash: Option<Hash>,
) -> Result<TransactionsPageResponse, QueryError> {
    if reader.get_account(target).is_none() {
        return Err(QueryError::InvalidAccountId);
    }
    if reader.get_asset(asset_id).is_none() {
        return Err(QueryError::InvalidAssetId);
    }
    if page_size == 0 {
        return Err(QueryError::InvalidPagination);
    }
    let txs: Vec<Transaction> = blocks
        .account_asset_txs(target, asset_id)
        .into_iter()
        .map(|(_, _, tx)| tx)
        .collect();
    paginate_by_hash(txs, page_size, first_hash, Transaction::plain_hash)
        .map_err(|_| QueryError::InvalidPagination)
}

/// Bypasses the generic self/domain/all table: the caller either holds
/// `GetAllTransactions` outright, or every requested hash must name a
/// transaction the caller itself created.
pub fn get_transactions<R: WorldStateReader, B: BlockStoreReader>(
    reader: &R,
    blocks: &B,
    creator: &AccountId,
    hashes: &[Hash],
) -> Result<TransactionsResponse, QueryError> {
    let perms = reader
        .effective_permissions(creator)
        .map_err(|_| QueryError::NoPermissions)?;
    let has_all = perms.has_root() || perms.has(RolePermissionSet::GET_ALL_TRANSACTIONS);

    let mut txs = Vec::with_capacity(hashes.len());
    for hash in hashes {
        let (tx, _, _) = blocks.get_tx(*hash).ok_or(QueryError::InvalidPagination)?;
        if !has_all && tx.creator_account_id != *creator {
            return Err(QueryError::NoPermissions);
        }
        txs.push(tx);
    }
    Ok(TransactionsResponse { txs })
}

#[cfg(test)]
mod tests {
    use nonzero_ext::nonzero;

    use super::*;
    use crate::block_store::InMemoryBlockStore;
    use crate::wsv::InMemoryWorldStateView;

    fn account(name: &str, domain: &str) -> Account {
        Account::new(
            AccountId::new(name.parse().unwrap(), domain.parse().unwrap()),
            nonzero!(1_u8),
            serde_json::Value::Null,
        )
    }

    fn tx(creator: &str, tag: u8) -> Transaction {
        Transaction {
            hash: HashOf::from_hash(Hash::new(&[tag])),
            creator_account_id: creator.parse().unwrap(),
            created_time_ms: 0,
            commands: vec![],
            signatures: vec![],
        }
    }

    #[test]
    fn missing_target_is_invalid_account_id() {
        let wsv = InMemoryWorldStateView::new();
        let blocks = InMemoryBlockStore::new();
        let ghost: AccountId = "ghost@wonderland".parse().unwrap();
        assert_eq!(
            get_account_transactions(&wsv, &blocks, &ghost, 10, None),
            Err(QueryError::InvalidAccountId)
        );
    }

    #[test]
    fn pagination_tail_returns_last_transaction_only() {
        let wsv = InMemoryWorldStateView::new();
        wsv.insert_account(account("alice", "wonderland"), vec![]);
        let alice: AccountId = "alice@wonderland".parse().unwrap();

        let mut blocks = InMemoryBlockStore::new();
        let transactions: Vec<Transaction> = (1_u8..=13).map(|tag| tx("alice@wonderland", tag)).collect();
        blocks.commit(Block {
            height: 1,
            hash: HashOf::from_hash(Hash::new(b"b1")),
            prev_hash: Hash::zero(),
            created_time_ms: 0,
            transactions,
        });

        let last_hash = Hash::new(&[13]);
        let page = get_account_transactions(&wsv, &blocks, &alice, 10, Some(last_hash)).unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].plain_hash(), last_hash);
        assert_eq!(page.next, None);
        assert_eq!(page.total, 13);
    }

    #[test]
    fn unknown_hash_fails_the_whole_query() {
        let wsv = InMemoryWorldStateView::new();
        let role: RoleId = "all_txs".parse().unwrap();
        wsv.insert_role(role.clone(), RolePermissionSet::GET_ALL_TRANSACTIONS);
        wsv.insert_account(account("alice", "wonderland"), vec![role]);
        let alice: AccountId = "alice@wonderland".parse().unwrap();

        let mut blocks = InMemoryBlockStore::new();
        blocks.commit(Block {
            height: 1,
            hash: HashOf::from_hash(Hash::new(b"b1")),
            prev_hash: Hash::zero(),
            created_time_ms: 0,
            transactions: vec![tx("alice@wonderland", 1), tx("alice@wonderland", 2)],
        });

        let hashes = vec![Hash::new(&[1]), Hash::new(b"AbsolutelyInvalidHash"), Hash::new(&[2])];
        assert_eq!(
            get_transactions(&wsv, &blocks, &alice, &hashes),
            Err(QueryError::InvalidPagination)
        );
    }
}
