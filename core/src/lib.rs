//! Query execution engine for a permissioned ledger: authorizes a caller
//! against a role-based, tri-scope permission model, dispatches to the
//! matching handler, and returns a typed response or a stable-coded error.
//!
//! The engine never mutates state, never opens a socket and never streams
//! blocks; it only reads from the three store contracts in [`wsv`],
//! [`block_store`] and [`pending_store`].

pub mod authorize;
pub mod block_store;
pub mod config;
pub mod logging;
pub mod pagination;
pub mod pending_store;
pub mod query;
pub mod response_factory;
pub mod wsv;

pub mod prelude {
    pub use crate::authorize::{
        authorize, requirement_for, validate_blocks_subscription, PermissionRequirement,
    };
    pub use crate::block_store::{BlockStoreError, BlockStoreReader, InMemoryBlockStore};
    pub use crate::config::EngineConfig;
    pub use crate::pending_store::{InMemoryPendingStore, PendingStoreError, PendingTransactionStore};
    pub use crate::query::execute;
    pub use crate::response_factory;
    pub use crate::wsv::{InMemoryWorldStateView, WorldStateReader, WsvError};
    pub use ledger_data_model::prelude::*;
}
