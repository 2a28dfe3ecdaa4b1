//! # CryptoCanvas Core API
//!
//! Hides texts and images in the least significant bits of carrier images, optionally
//! sealed with a password first, and encrypts whole image files into envelopes.
//!
//! # Usage Examples
//!
//! ## Hide a text inside an image
//!
//! ```rust
//! use image::{ImageBuffer, Rgb};
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let carrier = temp_dir.path().join("carrier.png");
//! ImageBuffer::from_fn(64, 64, |x, y| Rgb([x as u8, y as u8, 42]))
//!     .save(&carrier)
//!     .expect("Failed to write carrier image");
//!
//! cryptocanvas_core::api::hide::prepare()
//!     .with_text("Hello, World!")
//!     .with_password("SuperSecret42")
//!     .with_image(&carrier)
//!     .with_output(temp_dir.path().join("image-with-secret.png"))
//!     .execute()
//!     .expect("Failed to hide text in image");
//!
//! let secret = cryptocanvas_core::api::unveil::prepare()
//!     .with_secret_image(temp_dir.path().join("image-with-secret.png"))
//!     .with_password("SuperSecret42")
//!     .execute()
//!     .expect("Failed to unveil text from image");
//!
//! assert_eq!(secret.into_text().unwrap(), "Hello, World!");
//! ```
//!
//! ## Hide raw bytes in raw bytes
//!
//! ```rust
//! use cryptocanvas_core::{hide, reveal, PositionRule};
//!
//! let carrier = vec![0xAA_u8; 64];
//! let stego = hide(&carrier, &[0x41], PositionRule::default()).unwrap();
//! assert_eq!(reveal(&stego, PositionRule::default()).unwrap(), vec![0x41]);
//! ```

#![warn(clippy::redundant_else)]

pub mod account;
pub mod api;
pub mod codec;
pub mod error;
pub mod media;
pub mod positions;
pub mod secret;
pub mod store;

pub use crate::account::{Authenticator, Session};
pub use crate::codec::{encoded_bits, hide, max_payload_len, reveal};
pub use crate::error::CanvasError;
pub use crate::media::{Carrier, Persist, StegoOptions};
pub use crate::positions::{PositionGenerator, PositionRule, PrimeStride, Sequential};
pub use crate::secret::{PayloadCodec, Secret, SecretKind};
pub use cryptocanvas_seal as seal;
pub use cryptocanvas_seal::KdfParams;

pub type Result<T> = std::result::Result<T, CanvasError>;
