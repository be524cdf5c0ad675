//! `GetBlock`.

use ledger_data_model::prelude::*;

use crate::block_store::BlockStoreReader;

pub fn get_block<B: BlockStoreReader>(
    blocks: &B,
    height: u64,
) -> Result<BlockResponse, QueryError> {
    let block = blocks
        .get_block(height)
        .map_err(|_| QueryError::InvalidHeight)?;
    Ok(BlockResponse { block })
}
