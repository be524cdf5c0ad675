//! Signature-adjacent types the engine reads but never verifies.
//!
//! Signature and query-signature verification happen upstream of this
//! crate; the engine only ever compares key bytes (`validate_signatories`)
//! or hands keys back to the caller (`GetSignatories`).

use std::fmt;

use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};

/// An Ed25519/Secp256k1-family public key, opaque to the engine.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Encode, Decode)]
pub struct PublicKey(Vec<u8>);

impl PublicKey {
    #[must_use]
    pub const fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", hex::encode(&self.0))
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.0))
    }
}

/// A signature over a transaction or query payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub struct Signature {
    pub public_key: PublicKey,
    pub payload: Vec<u8>,
}
