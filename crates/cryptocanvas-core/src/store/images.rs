use std::collections::HashMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, error};

use crate::error::CanvasError;
use crate::Result;

/// Binary store for images and envelopes, keyed uniquely by `(owner_id, name)`.
pub trait ImageStore {
    fn get(&self, owner_id: u64, name: &str) -> Result<Vec<u8>>;

    /// stores `data`, replacing what was stored under the same key
    fn put(&mut self, owner_id: u64, name: &str, data: &[u8]) -> Result<()>;
}

#[derive(Debug, Default)]
pub struct MemoryImageStore {
    entries: HashMap<(u64, String), Vec<u8>>,
}

impl MemoryImageStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ImageStore for MemoryImageStore {
    fn get(&self, owner_id: u64, name: &str) -> Result<Vec<u8>> {
        self.entries
            .get(&(owner_id, name.to_string()))
            .cloned()
            .ok_or(CanvasError::NotFound)
    }

    fn put(&mut self, owner_id: u64, name: &str, data: &[u8]) -> Result<()> {
        ensure_valid_name(name)?;
        self.entries.insert((owner_id, name.to_string()), data.to_vec());

        Ok(())
    }
}

/// Stores every entry as `<root>/<owner_id>/<name>`.
#[derive(Debug, Clone)]
pub struct DirImageStore {
    root: PathBuf,
}

impl DirImageStore {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn path_of(&self, owner_id: u64, name: &str) -> Result<PathBuf> {
        ensure_valid_name(name)?;

        Ok(self.root.join(owner_id.to_string()).join(name))
    }
}

impl ImageStore for DirImageStore {
    fn get(&self, owner_id: u64, name: &str) -> Result<Vec<u8>> {
        let path = self.path_of(owner_id, name)?;

        fs::read(&path).map_err(|source| match source.kind() {
            std::io::ErrorKind::NotFound => CanvasError::NotFound,
            _ => CanvasError::ReadError { source },
        })
    }

    fn put(&mut self, owner_id: u64, name: &str, data: &[u8]) -> Result<()> {
        let path = self.path_of(owner_id, name)?;
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|source| CanvasError::WriteError { source })?;
        }
        let mut file = File::create(&path).map_err(|e| {
            error!("Error creating file {path:?}: {e}");
            CanvasError::WriteError { source: e }
        })?;
        file.write_all(data)
            .map_err(|source| CanvasError::WriteError { source })?;
        debug!("Stored {} bytes at {}", data.len(), path.display());

        Ok(())
    }
}

fn ensure_valid_name(name: &str) -> Result<()> {
    let file_name = Path::new(name).file_name().and_then(|n| n.to_str());
    if name.is_empty() || file_name != Some(name) {
        return Err(CanvasError::InvalidFileName);
    }

    Ok(())
}
