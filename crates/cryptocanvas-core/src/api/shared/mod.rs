mod password;

pub use password::*;

use std::path::{Path, PathBuf};

use crate::error::CanvasError;
use crate::Result;

pub(crate) fn read_file(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|source| CanvasError::ReadError { source })
}

pub(crate) fn write_file(path: &Path, data: &[u8]) -> Result<()> {
    std::fs::write(path, data).map_err(|source| CanvasError::WriteError { source })
}

/// `image.png` -> `image.png.enc`
pub(crate) fn encrypted_file_name(input: &Path) -> PathBuf {
    let mut name = input.as_os_str().to_owned();
    name.push(".enc");
    PathBuf::from(name)
}

/// `image.png.enc` -> `image.png`, anything else gets a `.dec` suffix
pub(crate) fn decrypted_file_name(input: &Path) -> PathBuf {
    if input.extension().and_then(|e| e.to_str()) == Some("enc") {
        return input.with_extension("");
    }
    let mut name = input.as_os_str().to_owned();
    name.push(".dec");
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_derive_output_names() {
        assert_eq!(
            encrypted_file_name(Path::new("dir/cat.png")),
            PathBuf::from("dir/cat.png.enc")
        );
        assert_eq!(
            decrypted_file_name(Path::new("dir/cat.png.enc")),
            PathBuf::from("dir/cat.png")
        );
        assert_eq!(
            decrypted_file_name(Path::new("dir/cat.bin")),
            PathBuf::from("dir/cat.bin.dec")
        );
    }
}
