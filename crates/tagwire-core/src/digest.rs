//! Digest and payload-text primitives.
//!
//! Wraps the SHA-256 digest and the base58 payload codec behind one small
//! surface so the rest of the crate never touches `sha2` or `bs58`
//! directly. Base58 uses the Bitcoin alphabet, which contains neither `[`
//! nor `]`, so payload text can never collide with the wire format's block
//! delimiters.

use sha2::{Digest, Sha256};

/// Compute the SHA-256 digest of `bytes`.
pub fn digest(bytes: &[u8]) -> [u8; 32] {
    let mut h = Sha256::new();
    h.update(bytes);
    h.finalize().into()
}

/// Render bytes as base58 text.
pub fn to_text(bytes: &[u8]) -> String {
    bs58::encode(bytes).into_string()
}

/// Parse base58 text back into bytes. Exact inverse of [`to_text`].
pub fn from_text(text: &str) -> Result<Vec<u8>, bs58::decode::Error> {
    bs58::decode(text).into_vec()
}

/// Digest a string and render the digest as base58 text.
pub fn hash_text(s: &str) -> String {
    to_text(&digest(s.as_bytes()))
}
