//! Password based key derivation with Argon2id.

use argon2::{Algorithm, Argon2, ParamsBuilder, Version};
use zeroize::Zeroizing;

use crate::{Result, SealError};

pub const SALT_LEN: usize = 16;
pub const KEY_LEN: usize = 32;

/// Derived symmetric key, wiped from memory on drop.
pub type Key = Zeroizing<[u8; KEY_LEN]>;

/// Argon2id cost parameters.
///
/// Encryption and decryption must agree on these, otherwise the derived keys differ
/// and every envelope fails authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KdfParams {
    /// number of iterations
    pub t_cost: u32,
    /// memory size in KiB
    pub m_cost: u32,
    /// degree of parallelism
    pub p_cost: u32,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            t_cost: 1,
            m_cost: 47104,
            p_cost: 1,
        }
    }
}

impl KdfParams {
    fn argon<'key>(&self) -> Result<Argon2<'key>> {
        let params = ParamsBuilder::default()
            .t_cost(self.t_cost)
            .m_cost(self.m_cost)
            .p_cost(self.p_cost)
            .output_len(KEY_LEN)
            .build()
            .map_err(SealError::KeyDerivationParamError)?;

        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }

    /// derives a 32 byte key from `password` and `salt`
    pub fn derive_key(&self, password: &[u8], salt: &[u8; SALT_LEN]) -> Result<Key> {
        ensure_valid_password(password)?;

        let mut output_key_material = Zeroizing::new([0u8; KEY_LEN]);
        self.argon()?
            .hash_password_into(password, salt, &mut *output_key_material)
            .map_err(SealError::KeyDerivationError)?;

        Ok(output_key_material)
    }
}

/// derives a key with the default cost parameters
pub fn derive_key(password: &[u8], salt: &[u8; SALT_LEN]) -> Result<Key> {
    KdfParams::default().derive_key(password, salt)
}

pub(crate) fn ensure_valid_password(password: &[u8]) -> Result<()> {
    if password.is_empty() || std::str::from_utf8(password).is_err() {
        return Err(SealError::InvalidCredential);
    }

    Ok(())
}
