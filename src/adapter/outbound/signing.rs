//! Request signing primitives.
//!
//! Delta Exchange authenticates with HMAC-SHA256 over a canonical string;
//! CoinSwitch uses Ed25519. Both produce lowercase hex.

use std::fmt;

use ed25519_dalek::{Signer, SigningKey};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::SigningError;

type HmacSha256 = Hmac<Sha256>;

/// HMAC-SHA256 of `message` keyed with `secret`, hex encoded.
pub fn hmac_sha256_hex(secret: &str, message: &str) -> Result<String, SigningError> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| SigningError::InvalidHmacKey(e.to_string()))?;
    mac.update(message.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Ed25519 signer built from a hex-encoded secret key.
#[derive(Clone)]
pub struct Ed25519Signer {
    key: SigningKey,
}

impl Ed25519Signer {
    /// Build a signer from a 32-byte seed or a 64-byte `seed || public` pair.
    pub fn from_hex(secret_hex: &str) -> Result<Self, SigningError> {
        let bytes = hex::decode(secret_hex.trim())?;
        let key = match bytes.len() {
            32 => {
                let seed: [u8; 32] = bytes
                    .as_slice()
                    .try_into()
                    .map_err(|_| SigningError::InvalidLength(bytes.len()))?;
                SigningKey::from_bytes(&seed)
            }
            64 => {
                let pair: [u8; 64] = bytes
                    .as_slice()
                    .try_into()
                    .map_err(|_| SigningError::InvalidLength(bytes.len()))?;
                SigningKey::from_keypair_bytes(&pair)
                    .map_err(|e| SigningError::InvalidKeypair(e.to_string()))?
            }
            n => return Err(SigningError::InvalidLength(n)),
        };
        Ok(Self { key })
    }

    /// Sign `message` and return the 64-byte signature as hex.
    #[must_use]
    pub fn sign_hex(&self, message: &str) -> String {
        hex::encode(self.key.sign(message.as_bytes()).to_bytes())
    }

    #[must_use]
    pub fn public_key_hex(&self) -> String {
        hex::encode(self.key.verifying_key().to_bytes())
    }
}

impl fmt::Debug for Ed25519Signer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ed25519Signer")
            .field("public_key", &self.public_key_hex())
            .finish_non_exhaustive()
    }
}
