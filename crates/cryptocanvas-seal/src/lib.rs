//! # Password based image encryption
//!
//! Argon2id turns a password and a per envelope salt into a key, ChaCha20-Poly1305
//! encrypts with the password bound in as associated data. The resulting envelope
//! carries nonce and salt, so the password is the only thing needed to open it.
//!
//! ```rust
//! let envelope = cryptocanvas_seal::encrypt(b"raw image bytes", b"Tr0ub4dor&3").unwrap();
//! let plain = cryptocanvas_seal::decrypt(&envelope, b"Tr0ub4dor&3").unwrap();
//! assert_eq!(plain, b"raw image bytes");
//! ```

pub mod envelope;
pub mod error;
pub mod kdf;
pub mod password;

pub use crate::envelope::{decrypt, encrypt, sealed_len, Envelope, NONCE_LEN, TAG_LEN};
pub use crate::error::SealError;
pub use crate::kdf::{derive_key, KdfParams, Key, KEY_LEN, SALT_LEN};
pub use crate::password::{hash_password, verify_password};

pub type Result<T> = std::result::Result<T, SealError>;
