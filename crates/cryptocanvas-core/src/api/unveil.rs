use std::path::{Path, PathBuf};

use log::info;

use cryptocanvas_seal::KdfParams;

use super::shared::Password;
use crate::media::Carrier;
use crate::secret::codec_for;
use crate::{CanvasError, Result, Secret, StegoOptions};

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_image: Option<PathBuf>,
    password: Password,
    options: StegoOptions,
    kdf_params: KdfParams,
}

impl UnveilApi {
    /// Use the given codec options, they must match the ones used for hiding
    pub fn with_options(mut self, options: StegoOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_kdf_params(mut self, kdf_params: KdfParams) -> Self {
        self.kdf_params = kdf_params;
        self
    }

    /// This is the stego image that contains the secret
    pub fn with_secret_image(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_image = Some(secret_image.as_ref().to_path_buf());
        self
    }

    pub fn with_password(mut self, password: &str) -> Self {
        self.password = password.into();
        self
    }

    /// Set the password used when hiding
    /// If `None` is passed, the secret is expected to be unencrypted
    pub fn use_password<P: Into<Password>>(mut self, password: P) -> Self {
        self.password = password.into();
        self
    }

    pub fn execute(self) -> Result<Secret> {
        let Some(secret_image) = self.secret_image else {
            return Err(CanvasError::CarrierNotSet);
        };

        let carrier = Carrier::from_file(&secret_image, &self.options)?;
        let payload = carrier.reveal()?;
        let secret = codec_for(self.password.as_deref(), self.kdf_params).decode(&payload)?;
        info!(
            "Unveiled a {} secret from {}",
            secret.kind(),
            secret_image.display()
        );

        Ok(secret)
    }
}
