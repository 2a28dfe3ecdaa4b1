pub use argon2::Error as Argon2Error;
pub use argon2::password_hash::Error as PasswordHashError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SealError {
    /// The password is empty or not valid UTF-8
    #[error("Invalid credential: password must be non-empty UTF-8")]
    InvalidCredential,

    /// The envelope is too short to contain nonce and salt
    #[error("Malformed envelope: {0} bytes is shorter than the minimum of 28 bytes")]
    MalformedEnvelope(usize),

    /// Wrong password, wrong salt/nonce pairing or tampered data. Deliberately undifferentiated.
    #[error("Authentication failure")]
    AuthenticationFailure,

    #[error("Key derivation error")]
    KeyDerivationError(Argon2Error),

    #[error("Key derivation parameter error")]
    KeyDerivationParamError(Argon2Error),

    #[error("Encryption error")]
    EncryptionError(chacha20poly1305::Error),

    /// A stored password hash could not be parsed or produced
    #[error("Password hash error: {0}")]
    PasswordHashError(PasswordHashError),
}
