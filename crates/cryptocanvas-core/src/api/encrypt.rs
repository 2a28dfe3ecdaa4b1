use std::path::{Path, PathBuf};

use log::info;

use cryptocanvas_seal::{Envelope, KdfParams};

use super::shared::{encrypted_file_name, read_file, write_file, Password};
use crate::{CanvasError, Result};

pub fn prepare() -> EncryptApi {
    EncryptApi::default()
}

#[derive(Default, Debug)]
pub struct EncryptApi {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    password: Password,
    kdf_params: KdfParams,
}

impl EncryptApi {
    /// The file to encrypt, usually an image
    pub fn with_input<A: AsRef<Path>>(mut self, input: A) -> Self {
        self.input = Some(input.as_ref().to_path_buf());
        self
    }

    /// Where the envelope goes, defaults to the input path plus `.enc`
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

    /// Writes the envelope and returns the path it was written to
    pub fn execute(self) -> Result<PathBuf> {
        let Some(input) = self.input else {
            return Err(CanvasError::InputNotSet);
        };
        let Some(password) = self.password.as_deref() else {
            return Err(CanvasError::MissingPassword);
        };
        let output = self.output.unwrap_or_else(|| encrypted_file_name(&input));

        let plain = read_file(&input)?;
        let envelope = Envelope::seal(&self.kdf_params, &plain, password.as_bytes())?;
        write_file(&output, &envelope.to_bytes())?;
        info!(
            "Encrypted {} into {} ({} bytes)",
            input.display(),
            output.display(),
            envelope.encoded_len()
        );

        Ok(output)
    }
}
