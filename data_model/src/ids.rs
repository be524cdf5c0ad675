//! Identifier grammar: `name@domain` accounts, `name#domain` assets, bare role ids.
//!
//! Parsing lives here only for convenience of building fixtures and tests; the
//! production boundary that actually rejects malformed wire input is the
//! schema layer, which the engine assumes has already run.

use std::str::FromStr;

use derive_more::Display;
use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};

const MAX_NAME_LEN: usize = 32;

fn is_name_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'
}

/// A single lowercase alphanumeric/underscore segment, `[a-z_0-9]{1,32}`.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize, Encode, Decode,
)]
#[display(fmt = "{_0}")]
pub struct Name(String);

/// A parsed identifier did not match the expected grammar.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum IdParseError {
    /// Missing the separator character (`@` or `#`).
    #[error("missing '{0}' separator")]
    MissingSeparator(char),
    /// More than one separator present.
    #[error("more than one '{0}' separator")]
    RepeatedSeparator(char),
    /// A name segment was empty, too long, or had disallowed characters.
    #[error("invalid name segment {0:?}")]
    InvalidName(String),
    /// A domain segment was empty, too long, or had disallowed characters.
    #[error("invalid domain segment {0:?}")]
    InvalidDomain(String),
}

impl FromStr for Name {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s.len() > MAX_NAME_LEN || !s.chars().all(is_name_char) {
            return Err(IdParseError::InvalidName(s.to_owned()));
        }
        Ok(Self(s.to_owned()))
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// DNS-like label sequence, e.g. `wonderland` or `east.wonderland`.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize, Encode, Decode,
)]
#[display(fmt = "{_0}")]
pub struct DomainId(String);

impl FromStr for DomainId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let valid = !s.is_empty()
            && s.len() <= 255
            && s.split('.').all(|label| {
                !label.is_empty()
                    && label.len() <= MAX_NAME_LEN
                    && label
                        .chars()
                        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
            });
        if !valid {
            return Err(IdParseError::InvalidDomain(s.to_owned()));
        }
        Ok(Self(s.to_owned()))
    }
}

/// `name@domain`.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize, Encode, Decode,
)]
#[display(fmt = "{name}@{domain}")]
pub struct AccountId {
    pub name: Name,
    pub domain: DomainId,
}

impl AccountId {
    #[must_use]
    pub fn new(name: Name, domain: DomainId) -> Self {
        Self { name, domain }
    }

    /// Two accounts are in the same domain iff their `domain` parts are byte-equal.
    #[must_use]
    pub fn same_domain(&self, other: &Self) -> bool {
        self.domain == other.domain
    }
}

impl FromStr for AccountId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('@');
        let name = parts.next().unwrap_or_default();
        let domain = match parts.next() {
            Some(domain) => domain,
            None => return Err(IdParseError::MissingSeparator('@')),
        };
        if parts.next().is_some() {
            return Err(IdParseError::RepeatedSeparator('@'));
        }
        Ok(Self {
            name: name.parse()?,
            domain: domain.parse()?,
        })
    }
}

/// `name#domain`.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize, Encode, Decode,
)]
#[display(fmt = "{name}#{domain}")]
pub struct AssetId {
    pub name: Name,
    pub domain: DomainId,
}

impl AssetId {
    #[must_use]
    pub fn new(name: Name, domain: DomainId) -> Self {
        Self { name, domain }
    }
}

impl FromStr for AssetId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('#');
        let name = parts.next().unwrap_or_default();
        let domain = match parts.next() {
            Some(domain) => domain,
            None => return Err(IdParseError::MissingSeparator('#')),
        };
        if parts.next().is_some() {
            return Err(IdParseError::RepeatedSeparator('#'));
        }
        Ok(Self {
            name: name.parse()?,
            domain: domain.parse()?,
        })
    }
}

/// A role's identifier, `[a-z_0-9]{1,32}`.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize, Encode, Decode,
)]
#[display(fmt = "{_0}")]
pub struct RoleId(Name);

impl FromStr for RoleId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}
