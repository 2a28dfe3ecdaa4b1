pub mod capacity;
pub mod decrypt;
pub mod encrypt;
pub mod hide;
pub mod unveil;
