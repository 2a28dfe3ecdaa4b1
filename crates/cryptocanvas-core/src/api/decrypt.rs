use std::path::{Path, PathBuf};

use log::{debug, info};

use cryptocanvas_seal::{Envelope, KdfParams};

use super::shared::{decrypted_file_name, read_file, write_file, Password};
use crate::{CanvasError, Result};

pub fn prepare() -> DecryptApi {
    DecryptApi::default()
}

#[derive(Default, Debug)]
pub struct DecryptApi {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    password: Password,
    kdf_params: KdfParams,
}

impl DecryptApi {
    /// The envelope file written by encrypt
    pub fn with_input<A: AsRef<Path>>(mut self, input: A) -> Self {
        self.input = Some(input.as_ref().to_path_buf());
        self
    }

    /// Where the plaintext goes, defaults to the input path without `.enc`
    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    pub fn with_password(mut self, password: &str) -> Self {
        self.password = password.into();
        self
    }

    pub fn use_password<P: Into<Password>>(mut self, password: P) -> Self {
        self.password = password.into();
        self
    }

    pub fn with_kdf_params(mut self, kdf_params: KdfParams) -> Self {
        self.kdf_params = kdf_params;
        self
    }

    /// Opens the envelope, nothing is written unless authentication succeeds
    pub fn execute(self) -> Result<PathBuf> {
        let Some(input) = self.input else {
            return Err(CanvasError::InputNotSet);
        };
        let Some(password) = self.password.as_deref() else {
            return Err(CanvasError::MissingPassword);
        };
        let output = self.output.unwrap_or_else(|| decrypted_file_name(&input));

        let raw = read_file(&input)?;
        debug!("Read envelope of {} bytes from {}", raw.len(), input.display());
        let plain = Envelope::from_bytes(&raw)?.open(&self.kdf_params, password.as_bytes())?;
        write_file(&output, &plain)?;
        info!("Decrypted {} into {}", input.display(), output.display());

        Ok(output)
    }
}
