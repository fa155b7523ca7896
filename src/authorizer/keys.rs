//! Object key generation and derivation

use rand::rngs::OsRng;
use rand::RngCore;

/// Entropy per generated key; hex-encodes to 64 characters
const OBJECT_KEY_BYTES: usize = 32;

/// Generates a fresh opaque object key from a cryptographically secure
/// random source
///
/// Keys are never derived from user input, and repeated calls produce
/// independent values.
#[must_use]
pub fn generate_object_key() -> String {
    let mut buf = [0u8; OBJECT_KEY_BYTES];
    OsRng.fill_bytes(&mut buf);
    hex::encode(buf)
}

/// Derives the storage key from an object reference by taking the final
/// `/`-delimited segment
///
/// This is a structural assumption about previously issued references, not a
/// verification. Returns `None` when the reference has no final segment
/// (empty, or ending in `/`).
#[must_use]
pub fn derive_object_key(reference: &str) -> Option<&str> {
    match reference.rsplit('/').next() {
        None | Some("") => None,
        Some(key) => Some(key),
    }
}
