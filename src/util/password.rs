//! One-way password hashing.
//!
//! MD5 uppercase-hex, matching the digests already stored for existing
//! accounts. Not a KDF; kept only for compatibility with the seeded data.

use md5::{Digest, Md5};

pub fn encrypt(password: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(password.as_bytes());

    hex::encode_upper(hasher.finalize())
}
