//! `GetAccount`, `GetSignatories`, `GetAccountAssets`, `GetAccountDetail`.

use ledger_data_model::prelude::*;
use serde_json::Value as JsonValue;

use crate::wsv::WorldStateReader;

pub fn get_account<R: WorldStateReader>(
    reader: &R,
    target: &AccountId,
) -> Result<AccountResponse, QueryError> {
    let account = reader.get_account(target).ok_or(QueryError::NoAccount)?;
    let roles = reader
        .get_account_roles(target)
        .map_err(|_| QueryError::NoAccount)?;
    Ok(AccountResponse { account, roles })
}

pub fn get_signatories<R: WorldStateReader>(
    reader: &R,
    target: &AccountId,
) -> Result<SignatoriesResponse, QueryError> {
    let keys = reader
        .get_signatories(target)
        .map_err(|_| QueryError::NoSignatories)?;
    Ok(SignatoriesResponse { keys })
}

pub fn get_account_assets<R: WorldStateReader>(
    reader: &R,
    target: &AccountId,
    page_size: u32,
    first_asset: Option<&AssetId>,
) -> Result<AccountAssetsResponse, QueryError> {
    if page_size == 0 {
        return Err(QueryError::InvalidPagination);
    }
    reader
        .get_account_assets(target, page_size, first_asset)
        .map_err(|err| match err {
            crate::wsv::WsvError::NoAccount => QueryError::NoAccountAssets,
            _ => QueryError::InvalidPagination,
        })
}

pub fn get_account_detail<R: WorldStateReader>(
    reader: &R,
    target: &AccountId,
    writer: Option<&AccountId>,
    key: Option<&str>,
    page_size: u32,
    first_record: Option<&str>,
) -> Result<AccountDetailResponse, QueryError> {
    if page_size == 0 {
        return Err(QueryError::InvalidPagination);
    }

    let subtree = reader
        .get_account_detail(target, writer, key)
        .map_err(|_| QueryError::NoAccountDetail)?;

    if key.is_some() {
        return Ok(AccountDetailResponse {
            detail: subtree,
            next_record: None,
        });
    }

    let object = subtree.as_object().ok_or(QueryError::NoAccountDetail)?;
    let mut keys: Vec<&String> = object.keys().collect();
    keys.sort();

    let start = match first_record {
        None => 0,
        Some(cursor) => keys
            .iter()
            .position(|k| k.as_str() == cursor)
            .ok_or(QueryError::InvalidPagination)?,
    };

    let mut page = serde_json::Map::new();
    let mut iter = keys.into_iter().skip(start);
    for _ in 0..page_size {
        let Some(k) = iter.next() else { break };
        page.insert(k.clone(), object[k].clone());
    }
    let next_record = iter.next().cloned();

    Ok(AccountDetailResponse {
        detail: JsonValue::Object(page),
        next_record,
    })
}

#[cfg(test)]
mod tests {
    use nonzero_ext::nonzero;

    use super::*;
    use crate::wsv::InMemoryWorldStateView;

    fn alice() -> Account {
        Account::new(
            AccountId::new("alice".parse().unwrap(), "wonderland".parse().unwrap()),
            nonzero!(1_u8),
            JsonValue::Null,
        )
    }

    #[test]
    fn missing_account_is_no_account() {
        let wsv = InMemoryWorldStateView::new();
        let ghost: AccountId = "ghost@wonderland".parse().unwrap();
        assert_eq!(get_account(&wsv, &ghost), Err(QueryError::NoAccount));
    }

    #[test]
    fn found_account_carries_roles() {
        let wsv = InMemoryWorldStateView::new();
        let role: RoleId = "reader".parse().unwrap();
        wsv.insert_role(role.clone(), RolePermissionSet::GET_MY_ACCOUNT);
        wsv.insert_account(alice(), vec![role.clone()]);
        let id: AccountId = "alice@wonderland".parse().unwrap();

        let response = get_account(&wsv, &id).unwrap();
        assert_eq!(response.account.id(), &id);
        assert_eq!(response.roles, vec![role]);
    }

    #[test]
    fn zero_page_size_is_invalid_pagination() {
        let wsv = InMemoryWorldStateView::new();
        wsv.insert_account(alice(), vec![]);
        let id: AccountId = "alice@wonderland".parse().unwrap();
        assert_eq!(
            get_account_assets(&wsv, &id, 0, None),
            Err(QueryError::InvalidPagination)
        );
    }
}
