//! Self contained encryption envelope.
//!
//! Layout: `[nonce:12][ciphertext+tag:N][salt:16]`, `N + 28` bytes in total.
//! The password is bound in as associated data, so a successful open proves
//! knowledge of the password and not only possession of the derived key.

use chacha20poly1305::aead::{Aead, KeyInit, Payload};
use chacha20poly1305::{ChaCha20Poly1305, Key as CipherKey, Nonce};
use rand::rngs::OsRng;
use rand::RngCore;

use crate::kdf::{ensure_valid_password, KdfParams, SALT_LEN};
use crate::{Result, SealError};

pub const NONCE_LEN: usize = 12;
pub const TAG_LEN: usize = 16;
/// fixed bytes an envelope adds besides the authentication tag
pub const ENVELOPE_OVERHEAD: usize = NONCE_LEN + SALT_LEN;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    nonce: [u8; NONCE_LEN],
    cipher_data: Vec<u8>,
    salt: [u8; SALT_LEN],
}

impl Envelope {
    /// encrypts `plaintext` under a key derived from `password` and a fresh salt
    pub fn seal(params: &KdfParams, plaintext: &[u8], password: &[u8]) -> Result<Self> {
        ensure_valid_password(password)?;

        let mut salt = [0u8; SALT_LEN];
        OsRng.fill_bytes(&mut salt);
        let mut nonce = [0u8; NONCE_LEN];
        OsRng.fill_bytes(&mut nonce);

        let key = params.derive_key(password, &salt)?;
        let encryptor = ChaCha20Poly1305::new(CipherKey::from_slice(&key[..]));
        let cipher_data = encryptor
            .encrypt(
                Nonce::from_slice(&nonce),
                Payload {
                    msg: plaintext,
                    aad: password,
                },
            )
            .map_err(SealError::EncryptionError)?;

        Ok(Self {
            nonce,
            cipher_data,
            salt,
        })
    }

    /// decrypts the envelope, any mismatch is reported as [`SealError::AuthenticationFailure`]
    pub fn open(&self, params: &KdfParams, password: &[u8]) -> Result<Vec<u8>> {
        let key = params.derive_key(password, &self.salt)?;

        let decryptor = ChaCha20Poly1305::new(CipherKey::from_slice(&key[..]));
        decryptor
            .decrypt(
                Nonce::from_slice(&self.nonce),
                Payload {
                    msg: &self.cipher_data,
                    aad: password,
                },
            )
            .map_err(|_| SealError::AuthenticationFailure)
    }

    /// splits the persisted form into its fixed size prefix, body and suffix
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() < ENVELOPE_OVERHEAD {
            return Err(SealError::MalformedEnvelope(data.len()));
        }
        let (nonce, rest) = data.split_at(NONCE_LEN);
        let (cipher_data, salt) = rest.split_at(rest.len() - SALT_LEN);

        let mut envelope = Self {
            nonce: [0u8; NONCE_LEN],
            cipher_data: cipher_data.to_vec(),
            salt: [0u8; SALT_LEN],
        };
        envelope.nonce.copy_from_slice(nonce);
        envelope.salt.copy_from_slice(salt);

        Ok(envelope)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(self.encoded_len());
        data.extend_from_slice(&self.nonce);
        data.extend_from_slice(&self.cipher_data);
        data.extend_from_slice(&self.salt);
        data
    }

    /// length of the persisted form
    pub fn encoded_len(&self) -> usize {
        ENVELOPE_OVERHEAD + self.cipher_data.len()
    }

    pub fn salt(&self) -> &[u8; SALT_LEN] {
        &self.salt
    }

    pub fn nonce(&self) -> &[u8; NONCE_LEN] {
        &self.nonce
    }
}

/// size of the envelope produced for a plaintext of `plaintext_len` bytes
pub fn sealed_len(plaintext_len: usize) -> usize {
    plaintext_len + TAG_LEN + ENVELOPE_OVERHEAD
}

/// encrypt data with password, it uses argon2id for key derivation and ChaCha20Poly1305 for encryption
pub fn encrypt(plaintext: &[u8], password: &[u8]) -> Result<Vec<u8>> {
    Envelope::seal(&KdfParams::default(), plaintext, password).map(|e| e.to_bytes())
}

/// decrypt data with password, it uses argon2id for key derivation and ChaCha20Poly1305 for encryption
pub fn decrypt(envelope: &[u8], password: &[u8]) -> Result<Vec<u8>> {
    Envelope::from_bytes(envelope)?.open(&KdfParams::default(), password)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FAST: KdfParams = KdfParams {
        t_cost: 1,
        m_cost: 64,
        p_cost: 1,
    };

    #[test]
    fn test_seal_and_open_round_trip() {
        let data = b"lorem ipsum dolor sit amet, consectetur adipiscing elit";
        let envelope = Envelope::seal(&FAST, data, b"resistance is futile").unwrap();

        assert_eq!(envelope.encoded_len(), sealed_len(data.len()));
        assert_eq!(
            envelope.open(&FAST, b"resistance is futile").unwrap(),
            data.to_vec()
        );
    }

    #[test]
    fn test_layout_puts_nonce_first_and_salt_last() {
        let envelope = Envelope::seal(&FAST, b"abc", b"pw").unwrap();
        let bytes = envelope.to_bytes();

        assert_eq!(&bytes[..NONCE_LEN], envelope.nonce());
        assert_eq!(&bytes[bytes.len() - SALT_LEN..], envelope.salt());
        assert_eq!(Envelope::from_bytes(&bytes).unwrap(), envelope);
    }

    #[test]
    fn test_every_seal_uses_fresh_salt_and_nonce() {
        let e1 = Envelope::seal(&FAST, b"same", b"pw").unwrap();
        let e2 = Envelope::seal(&FAST, b"same", b"pw").unwrap();

        assert_ne!(e1.salt(), e2.salt());
        assert_ne!(e1.nonce(), e2.nonce());
        assert_ne!(e1.to_bytes(), e2.to_bytes());
    }

    #[test]
    fn test_wrong_password_fails_authentication() {
        let envelope = Envelope::seal(&FAST, b"secret", b"right").unwrap();
        assert!(matches!(
            envelope.open(&FAST, b"wrong"),
            Err(SealError::AuthenticationFailure)
        ));
    }

    #[test]
    fn test_too_short_envelope_is_malformed() {
        assert!(matches!(
            Envelope::from_bytes(&[0u8; 27]),
            Err(SealError::MalformedEnvelope(27))
        ));
    }

    #[test]
    fn test_shortest_well_formed_envelope_fails_authentication() {
        let envelope = Envelope::from_bytes(&[0u8; ENVELOPE_OVERHEAD]).unwrap();
        assert!(matches!(
            envelope.open(&FAST, b"pw"),
            Err(SealError::AuthenticationFailure)
        ));
    }

    #[test]
    fn test_empty_password_is_rejected_before_encrypting() {
        assert!(matches!(
            Envelope::seal(&FAST, b"data", b""),
            Err(SealError::InvalidCredential)
        ));
    }
}
