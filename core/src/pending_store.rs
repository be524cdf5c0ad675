//! The in-memory, per-account queue of transactions submitted but not yet
//! committed.

use dashmap::DashMap;
use ledger_data_model::prelude::*;

use crate::pagination::{paginate_by_hash, UnknownCursor};

/// An error surfaced by a pending-store read. The engine maps this to the
/// stateful `InvalidPagination` code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PendingStoreError {
    #[error("pagination cursor does not match any pending transaction for this account")]
    NotFound,
}

impl From<UnknownCursor> for PendingStoreError {
    fn from(_: UnknownCursor) -> Self {
        Self::NotFound
    }
}

/// Read access to the pending pool. Pending-store reads are real-time: no
/// snapshot is taken, unlike world-state and block-store reads.
pub trait PendingTransactionStore {
    /// `{ txs, next_hash?, total }`, failing [`PendingStoreError::NotFound`]
    /// when `first_hash` is set and matches no pending transaction of `account`.
    fn get_pending(
        &self,
        account: &AccountId,
        page_size: u32,
        first_hash: Option<Hash>,
    ) -> Result<Page<Transaction, Hash>, PendingStoreError>;

    /// The legacy unpaged form: every transaction currently pending for `account`.
    fn get_all_pending(&self, account: &AccountId) -> Vec<Transaction>;
}

/// An in-memory [`PendingTransactionStore`], one FIFO queue per account.
#[derive(Debug, Default)]
pub struct InMemoryPendingStore {
    queues: DashMap<AccountId, Vec<Transaction>>,
}

impl InMemoryPendingStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, tx: Transaction) {
        self.queues
            .entry(tx.creator_account_id.clone())
            .or_default()
            .push(tx);
    }
}

impl PendingTransactionStore for InMemoryPendingStore {
    fn get_pending(
        &self,
        account: &AccountId,
        page_size: u32,
        first_hash: Option<Hash>,
    ) -> Result<Page<Transaction, Hash>, PendingStoreError> {
        let queue = self
            .queues
            .get(account)
            .map_or_else(Vec::new, |queue| queue.clone());
        Ok(paginate_by_hash(queue, page_size, first_hash, Transaction::plain_hash)?)
    }

    fn get_all_pending(&self, account: &AccountId) -> Vec<Transaction> {
        self.queues
            .get(account)
            .map_or_else(Vec::new, |queue| queue.clone())
    }
}
