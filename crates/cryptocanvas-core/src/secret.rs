//! What gets hidden: a text or an image, framed with a one byte kind tag.

use std::fmt::{self, Display, Formatter};
use std::path::Path;

use cryptocanvas_seal::{Envelope, KdfParams};

use crate::error::CanvasError;
use crate::Result;

const TEXT: u8 = 1 << 0;
const IMAGE: u8 = 1 << 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretKind {
    Text,
    Image,
}

impl From<SecretKind> for u8 {
    fn from(value: SecretKind) -> Self {
        match value {
            SecretKind::Text => TEXT,
            SecretKind::Image => IMAGE,
        }
    }
}

impl TryFrom<u8> for SecretKind {
    type Error = CanvasError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            TEXT => Ok(SecretKind::Text),
            IMAGE => Ok(SecretKind::Image),
            other => Err(CanvasError::UnsupportedSecretKind(other)),
        }
    }
}

impl Display for SecretKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SecretKind::Text => write!(f, "text"),
            SecretKind::Image => write!(f, "image"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Secret {
    Text(String),
    /// an encoded image file, e.g. the bytes of a PNG
    Image(Vec<u8>),
}

impl Secret {
    pub fn text<S: Into<String>>(text: S) -> Self {
        Self::Text(text.into())
    }

    /// wraps encoded image bytes, anything the image decoder does not recognize is rejected
    pub fn image(data: Vec<u8>) -> Result<Self> {
        image::guess_format(&data).map_err(|_| CanvasError::InvalidSecretImage)?;

        Ok(Self::Image(data))
    }

    pub fn image_from_file(path: &Path) -> Result<Self> {
        let data = std::fs::read(path).map_err(|source| CanvasError::ReadError { source })?;

        Self::image(data)
    }

    pub fn kind(&self) -> SecretKind {
        match self {
            Secret::Text(_) => SecretKind::Text,
            Secret::Image(_) => SecretKind::Image,
        }
    }

    /// kind tag followed by the content
    pub fn to_payload(&self) -> Vec<u8> {
        let content = match self {
            Secret::Text(text) => text.as_bytes(),
            Secret::Image(data) => data.as_slice(),
        };
        let mut payload = Vec::with_capacity(content.len() + 1);
        payload.push(self.kind().into());
        payload.extend_from_slice(content);

        payload
    }

    pub fn from_payload(payload: &[u8]) -> Result<Self> {
        let (&tag, content) = payload.split_first().ok_or(CanvasError::NoHiddenData)?;

        match SecretKind::try_from(tag)? {
            SecretKind::Text => Ok(Secret::Text(String::from_utf8(content.to_vec())?)),
            SecretKind::Image => Ok(Secret::Image(content.to_vec())),
        }
    }

    pub fn into_text(self) -> Result<String> {
        match self {
            Secret::Text(text) => Ok(text),
            other => Err(CanvasError::UnexpectedSecretKind {
                expected: SecretKind::Text,
                found: other.kind(),
            }),
        }
    }

    pub fn into_image(self) -> Result<Vec<u8>> {
        match self {
            Secret::Image(data) => Ok(data),
            other => Err(CanvasError::UnexpectedSecretKind {
                expected: SecretKind::Image,
                found: other.kind(),
            }),
        }
    }
}

/// Turns a secret into the payload handed to the LSB codec and back.
pub trait PayloadCodec {
    fn encode(&self, secret: &Secret) -> Result<Vec<u8>>;

    fn decode(&self, payload: &[u8]) -> Result<Secret>;

    /// payload size for a secret with `content_len` bytes of content
    fn encoded_size(&self, content_len: usize) -> usize;
}

/// The framed secret as is, readable by anyone who knows the position rule.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PlainCodec;

impl PayloadCodec for PlainCodec {
    fn encode(&self, secret: &Secret) -> Result<Vec<u8>> {
        Ok(secret.to_payload())
    }

    fn decode(&self, payload: &[u8]) -> Result<Secret> {
        Secret::from_payload(payload)
    }

    fn encoded_size(&self, content_len: usize) -> usize {
        content_len + 1
    }
}

/// The framed secret sealed into a password envelope before hiding.
pub struct SealedCodec {
    password: String,
    params: KdfParams,
}

impl SealedCodec {
    pub fn new<I: Into<String>>(password: I) -> Self {
        Self {
            password: password.into(),
            params: KdfParams::default(),
        }
    }

    pub fn with_params(mut self, params: KdfParams) -> Self {
        self.params = params;
        self
    }
}

impl PayloadCodec for SealedCodec {
    fn encode(&self, secret: &Secret) -> Result<Vec<u8>> {
        let envelope = Envelope::seal(
            &self.params,
            &secret.to_payload(),
            self.password.as_bytes(),
        )?;

        Ok(envelope.to_bytes())
    }

    fn decode(&self, payload: &[u8]) -> Result<Secret> {
        let framed = Envelope::from_bytes(payload)?.open(&self.params, self.password.as_bytes())?;

        Secret::from_payload(&framed)
    }

    fn encoded_size(&self, content_len: usize) -> usize {
        cryptocanvas_seal::sealed_len(PlainCodec.encoded_size(content_len))
    }
}

/// picks the codec matching an optional password
pub fn codec_for(password: Option<&str>, params: KdfParams) -> Box<dyn PayloadCodec> {
    match password {
        Some(password) => Box::new(SealedCodec::new(password).with_params(params)),
        None => Box::new(PlainCodec),
    }
}
