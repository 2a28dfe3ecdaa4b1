//! Record stores the codecs never touch themselves: accounts and stored images.

mod credentials;
mod images;

pub use credentials::*;
pub use images::*;
