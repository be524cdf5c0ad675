//! `GetPendingTransactions`.

use ledger_data_model::prelude::*;

use crate::pending_store::PendingTransactionStore;

/// Without pagination arguments (the legacy form, kept for compatibility and
/// never extended further) returns every pending transaction for `creator`.
/// With pagination, forwards to the pending store and converts its
/// not-found cursor into `InvalidPagination`.
pub fn get_pending_transactions<Pe: PendingTransactionStore>(
    pending: &Pe,
    creator: &AccountId,
    page_size: Option<u32>,
    first_hash: Option<Hash>,
) -> Result<PendingTxsResponse, QueryError> {
    let Some(page_size) = page_size else {
        let txs = pending.get_all_pending(creator);
        let total = txs.len() as u64;
        return Ok(PendingTxsResponse {
            items: txs,
            next: None,
            total,
        });
    };

    if page_size == 0 {
        return Err(QueryError::InvalidPagination);
    }

    pending
        .get_pending(creator, page_size, first_hash)
        .map_err(|_| QueryError::InvalidPagination)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pending_store::InMemoryPendingStore;

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
    fn legacy_form_returns_everything_unpaginated() {
        let store = InMemoryPendingStore::new();
        let alice: AccountId = "alice@wonderland".parse().unwrap();
        store.push(tx("alice@wonderland", 1));
        store.push(tx("alice@wonderland", 2));

        let response = get_pending_transactions(&store, &alice, None, None).unwrap();
        assert_eq!(response.items.len(), 2);
        assert_eq!(response.next, None);
    }

    #[test]
    fn zero_page_size_is_invalid_pagination() {
        let store = InMemoryPendingStore::new();
        let alice: AccountId = "alice@wonderland".parse().unwrap();
        assert_eq!(
            get_pending_transactions(&store, &alice, Some(0), None),
            Err(QueryError::InvalidPagination)
        );
    }
}
