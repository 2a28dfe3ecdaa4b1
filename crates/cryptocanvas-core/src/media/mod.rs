pub mod carrier;
pub mod codec_options;

use std::path::Path;

pub use carrier::Carrier;
pub use codec_options::StegoOptions;

pub trait Persist {
    fn save_as(&self, _: &Path) -> crate::Result<()>;
}

pub(crate) fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| extensions.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}
