// src/sharing/token.rs
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};

pub const SHARE_TOKEN_BYTES: usize = 32;
pub const PROPERTY_ID_BYTES: usize = 12;

/// A share token from the OS RNG.
pub fn generate_share_token() -> String {
    generate_token(&mut OsRng, SHARE_TOKEN_BYTES)
}

/// Opaque id for a property created in this CRM, e.g. `prop_Xj3...`.
pub fn generate_property_id() -> String {
    format!("prop_{}", generate_token(&mut OsRng, PROPERTY_ID_BYTES))
}

/// URL-safe base64 (no padding) of `nbytes` random bytes.
/// 32 bytes -> 43 chars.
pub fn generate_token<R: RngCore>(rng: &mut R, nbytes: usize) -> String {
    let mut buf = vec![0u8; nbytes];
    rng.fill_bytes(&mut buf);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(&buf)
}

/// SHA-256 of the token. Only this goes to the database.
pub fn hash_token(token: &str) -> [u8; 32] {
    Sha256::digest(token.as_bytes()).into()
}
