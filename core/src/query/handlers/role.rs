//! `GetRoles`, `GetRolePermissions`.

use ledger_data_model::prelude::*;

use crate::wsv::WorldStateReader;

pub fn get_roles<R: WorldStateReader>(reader: &R) -> Result<RolesResponse, QueryError> {
    Ok(RolesResponse {
        roles: reader.list_roles(),
    })
}

pub fn get_role_permissions<R: WorldStateReader>(
    reader: &R,
    role_id: &RoleId,
) -> Result<RolePermissionsResponse, QueryError> {
    let permissions = reader
        .get_role_permissions(role_id)
        .map_err(|_| QueryError::NoRoles)?;
    Ok(RolePermissionsResponse { permissions })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wsv::InMemoryWorldStateView;

    #[test]
    fn roles_are_listed_in_registration_order() {
        let wsv = InMemoryWorldStateView::new();
        let reader: RoleId = "reader".parse().unwrap();
        let writer: RoleId = "writer".parse().unwrap();
        wsv.insert_role(reader.clone(), RolePermissionSet::GET_MY_ACCOUNT);
        wsv.insert_role(writer.clone(), RolePermissionSet::GET_BLOCKS);

        let response = get_roles(&wsv).unwrap();
        assert_eq!(response.roles, vec![reader, writer]);
    }

    #[test]
    fn missing_role_is_no_roles() {
        let wsv = InMemoryWorldStateView::new();
        let ghost: RoleId = "ghost".parse().unwrap();
        assert_eq!(
            get_role_permissions(&wsv, &ghost),
            Err(QueryError::NoRoles)
        );
    }
}
