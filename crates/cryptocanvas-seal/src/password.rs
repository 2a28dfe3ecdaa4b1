//! Account password hashes in PHC string format.
//!
//! This is a separate scheme from the envelope key derivation: the hash is meant to be
//! stored, it carries its own salt and cost parameters.

use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use rand::rngs::OsRng;

use crate::kdf::ensure_valid_password;
use crate::{Result, SealError};

/// hashes an account password, the returned string embeds algorithm, parameters and salt
pub fn hash_password(password: &[u8]) -> Result<String> {
    ensure_valid_password(password)?;

    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(password, &salt)
        .map_err(SealError::PasswordHashError)?;

    Ok(password_hash.to_string())
}

/// checks `password` against a stored PHC string
pub fn verify_password(password: &[u8], hash_string: &str) -> Result<()> {
    ensure_valid_password(password)?;

    let password_hash = PasswordHash::new(hash_string).map_err(SealError::PasswordHashError)?;
    Argon2::default()
        .verify_password(password, &password_hash)
        .map_err(|e| match e {
            argon2::password_hash::Error::Password => SealError::AuthenticationFailure,
            other => SealError::PasswordHashError(other),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash() {
        let hash_string = "$argon2i$v=19$m=65536,t=1,p=1$c29tZXNhbHQAAAAAAAAAAA$+r0d29hqEB0yasKr55ZgICsQGSkl0v0kgwhd+U3wyRo";

        verify_password(b"password", hash_string).expect("invalid password");
    }

    #[test]
    fn test_generate_a_password_hash() {
        let hash_string = hash_password(b"hunter42").unwrap();

        assert!(hash_string.starts_with("$argon2id$"));
        verify_password(b"hunter42", &hash_string).unwrap();
    }

    #[test]
    fn test_hashes_are_salted() {
        let h1 = hash_password(b"hunter42").unwrap();
        let h2 = hash_password(b"hunter42").unwrap();

        assert_ne!(h1, h2);
    }

    #[test]
    fn test_wrong_password_fails_authentication() {
        let hash_string = hash_password(b"hunter42").unwrap();

        assert!(matches!(
            verify_password(b"hunter43", &hash_string),
            Err(SealError::AuthenticationFailure)
        ));
    }

    #[test]
    fn test_garbage_hash_is_reported() {
        assert!(matches!(
            verify_password(b"hunter42", "not a phc string"),
            Err(SealError::PasswordHashError(_))
        ));
    }
}
