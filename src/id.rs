use crate::error::{Error, Result};
use rand::RngCore;

/// Fill `bytes` bytes from the OS RNG and return them as lowercase hex.
///
/// # Errors
/// Returns [`Error::Random`] if the OS cannot supply randomness.
pub fn random_hex_id(bytes: usize) -> Result<String> {
    let mut raw = vec![0_u8; bytes];
    rand::rngs::OsRng
        .try_fill_bytes(&mut raw)
        .map_err(|err| Error::Random(err.to_string()))?;
    Ok(hex::encode(raw))
}

/// An 8-character hex token, used as a lock owner id.
///
/// # Errors
/// Returns [`Error::Random`] if the OS cannot supply randomness.
pub fn random_id8() -> Result<String> {
    random_hex_id(4)
}

/// A 32-character hex salt for password hashing.
///
/// # Errors
/// Returns [`Error::Random`] if the OS cannot supply randomness.
pub fn random_salt() -> Result<String> {
    random_hex_id(16)
}
