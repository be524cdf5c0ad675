//! `GetAssetInfo`.

use ledger_data_model::prelude::*;

use crate::wsv::WorldStateReader;

pub fn get_asset_info<R: WorldStateReader>(
    reader: &R,
    asset_id: &AssetId,
) -> Result<AssetResponse, QueryError> {
    let asset = reader.get_asset(asset_id).ok_or(QueryError::NoAsset)?;
    Ok(AssetResponse { asset })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wsv::InMemoryWorldStateView;

    #[test]
    fn missing_asset_is_no_asset() {
        let wsv = InMemoryWorldStateView::new();
        let id: AssetId = "coin#wonderland".parse().unwrap();
        assert_eq!(get_asset_info(&wsv, &id), Err(QueryError::NoAsset));
    }

    #[test]
    fn found_asset_is_returned() {
        let wsv = InMemoryWorldStateView::new();
        let id: AssetId = "coin#wonderland".parse().unwrap();
        wsv.insert_asset(Asset::new(id.clone(), 2));
        let response = get_asset_info(&wsv, &id).unwrap();
        assert_eq!(response.asset.id(), &id);
    }
}
