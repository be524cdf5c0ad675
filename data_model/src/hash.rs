//! Content-addressed hashes used to key transactions, blocks and queries.

use std::{fmt, marker::PhantomData, str::FromStr};

use blake2::{digest::consts::U32, Blake2b, Digest};
use parity_scale_codec::{Decode, Encode};
use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};

type Blake2b256 = Blake2b<U32>;

/// Number of bytes in a [`Hash`].
pub const HASH_LENGTH: usize = 32;

/// Raw 32-byte content digest, canonical across the system.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Encode, Decode)]
pub struct Hash([u8; HASH_LENGTH]);

impl Hash {
    /// Hash arbitrary bytes with the ledger's canonical digest function.
    #[must_use]
    pub fn new(payload: &[u8]) -> Self {
        let mut hasher = Blake2b256::new();
        hasher.update(payload);
        let digest = hasher.finalize();
        let mut bytes = [0_u8; HASH_LENGTH];
        bytes.copy_from_slice(&digest);
        Self(bytes)
    }

    /// The all-zero hash, used as `prev_hash` of the first block.
    #[must_use]
    pub const fn zero() -> Self {
        Self([0_u8; HASH_LENGTH])
    }

    /// Raw bytes of the digest.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; HASH_LENGTH] {
        &self.0
    }
}

impl From<[u8; HASH_LENGTH]> for Hash {
    fn from(bytes: [u8; HASH_LENGTH]) -> Self {
        Self(bytes)
    }
}

/// A hash could not be parsed from its hex representation.
#[derive(Debug, thiserror::Error)]
pub enum HashParseError {
    /// Not valid hex.
    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),
    /// Decoded to the wrong number of bytes.
    #[error("expected {HASH_LENGTH} bytes, got {0}")]
    Length(usize),
}

impl FromStr for Hash {
    type Err = HashParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s)?;
        let bytes: [u8; HASH_LENGTH] = bytes
            .clone()
            .try_into()
            .map_err(|_| HashParseError::Length(bytes.len()))?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({self})")
    }
}

impl Serialize for Hash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Hash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

/// A [`Hash`] tagged with the type it identifies, so a transaction hash can't
/// be confused with a block hash at the type level.
pub struct HashOf<T>(Hash, PhantomData<fn() -> T>);

impl<T> HashOf<T> {
    /// Wrap a raw [`Hash`].
    #[must_use]
    pub const fn from_hash(hash: Hash) -> Self {
        Self(hash, PhantomData)
    }

    /// Unwrap the inner [`Hash`].
    #[must_use]
    pub const fn into_hash(self) -> Hash {
        self.0
    }
}

impl<T> Clone for HashOf<T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for HashOf<T> {}
impl<T> PartialEq for HashOf<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl<T> Eq for HashOf<T> {}
impl<T> PartialOrd for HashOf<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl<T> Ord for HashOf<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.cmp(&other.0)
    }
}
impl<T> std::hash::Hash for HashOf<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}
impl<T> fmt::Debug for HashOf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl<T> fmt::Display for HashOf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<T> Serialize for HashOf<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for HashOf<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Hash::deserialize(deserializer).map(Self::from_hash)
    }
}

impl<T> Encode for HashOf<T> {
    fn encode(&self) -> Vec<u8> {
        self.0.encode()
    }
}

impl<T> Decode for HashOf<T> {
    fn decode<I: parity_scale_codec::Input>(
        input: &mut I,
    ) -> Result<Self, parity_scale_codec::Error> {
        Hash::decode(input).map(Self::from_hash)
    }
}
