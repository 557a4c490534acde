//! Salted SHA-256 password hashing.
//!
//! Stored form is `<sha256 hex of password+salt>:<salt>`.

use crate::error::Result;
use crate::id;
use sha2::{Digest, Sha256};

fn digest(password: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hasher.update(salt.as_bytes());
    hex::encode(hasher.finalize())
}

/// Hash `password` with `salt`, generating a random salt when none is given.
///
/// # Errors
/// Returns [`crate::Error::Random`] if a salt is needed and the OS RNG fails.
pub fn hash_password(password: &str, salt: Option<&str>) -> Result<String> {
    let salt = match salt {
        Some(s) => s.to_string(),
        None => id::random_salt()?,
    };
    Ok(format!("{}:{salt}", digest(password, &salt)))
}

/// Whether `password` matches a value produced by [`hash_password`].
#[must_use]
pub fn verify_password(password: &str, stored: &str) -> bool {
    let Some((expected, salt)) = stored.split_once(':') else {
        return false;
    };
    digest(password, salt) == expected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_salt_is_deterministic() -> anyhow::Result<()> {
        let hashed = hash_password("hunter2", Some("pepper"))?;
        assert_eq!(hashed, hash_password("hunter2", Some("pepper"))?);
        let (digest_hex, salt) = hashed
            .split_once(':')
            .ok_or_else(|| anyhow::anyhow!("missing separator"))?;
        assert_eq!(salt, "pepper");
        assert_eq!(digest_hex.len(), 64);
        Ok(())
    }

    #[test]
    fn known_vector() -> anyhow::Result<()> {
        // sha256("abc")
        assert_eq!(
            hash_password("ab", Some("c"))?,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad:c"
        );
        Ok(())
    }

    #[test]
    fn random_salt_verifies() -> anyhow::Result<()> {
        let a = hash_password("secret", None)?;
        let b = hash_password("secret", None)?;
        assert_ne!(a, b);
        assert!(verify_password("secret", &a));
        assert!(!verify_password("Secret", &a));
        assert!(!verify_password("secret", "no-separator"));
        Ok(())
    }
}
