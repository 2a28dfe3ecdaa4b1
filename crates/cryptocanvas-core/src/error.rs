use std::string::FromUtf8Error;
use thiserror::Error;

pub use cryptocanvas_seal::SealError;

use crate::secret::SecretKind;

#[derive(Error, Debug)]
pub enum CanvasError {
    /// Represents a failure of the password based encryption layer, e.g. a wrong password
    #[error(transparent)]
    Seal(#[from] SealError),

    /// Represents a payload that does not fit into the carrier
    #[error("Capacity Error: the payload needs {required} carrier bytes but only {available} are available")]
    CapacityExceeded { required: usize, available: usize },

    /// Represents an unveil of no secret data. For example when a carrier did not contain any secrets
    #[error("No secret data found")]
    NoHiddenData,

    /// Represents a carrier that cannot be turned into 8 bit component bytes
    #[error("Carrier format is not supported: {0}")]
    UnsupportedCarrierFormat(String),

    /// Represents an attempt to hide nothing
    #[error("The payload to hide is empty")]
    EmptyPayload,

    /// Represents a revealed payload with an unknown kind tag
    #[error("Unsupported secret kind: {0}")]
    UnsupportedSecretKind(u8),

    /// Represents a secret of a different kind than the one asked for
    #[error("Expected a {expected} secret but found a {found} secret")]
    UnexpectedSecretKind {
        expected: SecretKind,
        found: SecretKind,
    },

    /// Represents the error of invalid UTF-8 text data found inside of a text secret
    #[error("Invalid text data found inside a secret")]
    InvalidTextData(#[from] FromUtf8Error),

    /// Represents an image secret that is not an image
    #[error("The secret image is not a supported image file")]
    InvalidSecretImage,

    /// Represents an error caused by an invalid file name, for example an empty one or one with path separators
    #[error("A file with an invalid file name was provided")]
    InvalidFileName,

    /// Represents a lookup in a store that has no such entry
    #[error("Entry not found")]
    NotFound,

    /// Represents a sign up with an identifier that is taken already
    #[error("An account with this identifier exists already")]
    AccountExists,

    /// Represents a failed sign in, unknown account and wrong password are not told apart
    #[error("Invalid identifier or password")]
    InvalidLogin,

    /// Represents an empty account identifier or name
    #[error("Account identifier and name must not be empty")]
    InvalidIdentifier,

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier image set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("No input file set")]
    InputNotSet,

    #[error("API Error: Missing secret, provide a text or an image")]
    MissingSecret,

    #[error("API Error: Missing password")]
    MissingPassword,
}
