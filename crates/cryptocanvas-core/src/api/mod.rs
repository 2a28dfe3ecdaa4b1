//! File level entry points in builder style, e.g.
//! `api::hide::prepare().with_image(..).with_text(..).with_output(..).execute()`.

pub mod decrypt;
pub mod encrypt;
pub mod hide;
pub mod shared;
pub mod unveil;

pub use shared::Password;
