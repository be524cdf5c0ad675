//! Builds the wire-level [`QueryResponse`] from a handler's `Result`,
//! attaching the originating query's hash to either branch.

use ledger_data_model::prelude::{QueryError, QueryRequest, QueryResponse, QuerySuccess};

#[must_use]
pub fn success(request: &QueryRequest, payload: QuerySuccess) -> QueryResponse {
    QueryResponse::Success {
        query_hash: request.query_hash(),
        payload,
    }
}

#[must_use]
pub fn error(request: &QueryRequest, err: QueryError) -> QueryResponse {
    QueryResponse::Error(err.into_response(request.query_hash()))
}

#[must_use]
pub fn from_result(request: &QueryRequest, result: Result<QuerySuccess, QueryError>) -> QueryResponse {
    match result {
        Ok(payload) => success(request, payload),
        Err(err) => error(request, err),
    }
}
