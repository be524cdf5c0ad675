//! World-state entities: accounts, domains, roles, assets and peers.

use std::num::NonZeroU8;

use getset::Getters;
use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};

use crate::ids::{AccountId, AssetId, DomainId, RoleId};
use crate::permission::RolePermissionSet;

/// `{ account_id, domain_id, quorum >= 1, json_data }`, unique by `account_id`.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, Encode, Decode)]
#[getset(get = "pub")]
pub struct Account {
    id: AccountId,
    domain_id: DomainId,
    quorum: NonZeroU8,
    json_data: serde_json::Value,
}

impl Account {
    #[must_use]
    pub fn new(id: AccountId, quorum: NonZeroU8, json_data: serde_json::Value) -> Self {
        let domain_id = id.domain.clone();
        Self {
            id,
            domain_id,
            quorum,
            json_data,
        }
    }
}

/// `{ domain_id, default_role_id }`, unique.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, Encode, Decode)]
#[getset(get = "pub")]
pub struct Domain {
    id: DomainId,
    default_role_id: RoleId,
}

impl Domain {
    #[must_use]
    pub const fn new(id: DomainId, default_role_id: RoleId) -> Self {
        Self {
            id,
            default_role_id,
        }
    }
}

/// `{ role_id, permissions }`.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, Encode, Decode)]
#[getset(get = "pub")]
pub struct Role {
    id: RoleId,
    permissions: RolePermissionSet,
}

impl Role {
    #[must_use]
    pub const fn new(id: RoleId, permissions: RolePermissionSet) -> Self {
        Self { id, permissions }
    }
}

/// `{ asset_id = name#domain, domain_id, precision }`.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, Encode, Decode)]
#[getset(get = "pub")]
pub struct Asset {
    id: AssetId,
    domain_id: DomainId,
    precision: u8,
}

impl Asset {
    #[must_use]
    pub fn new(id: AssetId, precision: u8) -> Self {
        let domain_id = id.domain.clone();
        Self {
            id,
            domain_id,
            precision,
        }
    }
}

/// A non-negative balance, stored as the smallest indivisible unit.
///
/// Rendered as a canonical string with exactly `precision` fractional digits,
/// e.g. `AssetQuantity(150).to_display_string(2) == "1.50"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Encode, Decode)]
pub struct AssetQuantity(pub u128);

impl AssetQuantity {
    #[must_use]
    pub fn to_display_string(self, precision: u8) -> String {
        let precision = precision as usize;
        let digits = self.0.to_string();
        if precision == 0 {
            return digits;
        }
        if digits.len() <= precision {
            let padded = format!("{digits:0>width$}", width = precision);
            format!("0.{padded}")
        } else {
            let split = digits.len() - precision;
            format!("{}.{}", &digits[..split], &digits[split..])
        }
    }
}

/// `{ address, public_key, optional tls_certificate }`.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, Encode, Decode)]
#[getset(get = "pub")]
pub struct Peer {
    address: String,
    public_key: crate::crypto::PublicKey,
    tls_certificate: Option<String>,
}

impl Peer {
    #[must_use]
    pub const fn new(
        address: String,
        public_key: crate::crypto::PublicKey,
        tls_certificate: Option<String>,
    ) -> Self {
        Self {
            address,
            public_key,
            tls_certificate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_balance_with_exact_precision() {
        assert_eq!(AssetQuantity(150).to_display_string(2), "1.50");
        assert_eq!(AssetQuantity(5).to_display_string(2), "0.05");
        assert_eq!(AssetQuantity(100).to_display_string(0), "100");
        assert_eq!(AssetQuantity(0).to_display_string(3), "0.000");
    }
}
