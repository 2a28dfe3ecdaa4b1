use std::path::{Path, PathBuf};

use log::info;

use cryptocanvas_seal::KdfParams;

use super::shared::Password;
use crate::media::{Carrier, Persist};
use crate::secret::codec_for;
use crate::{CanvasError, Result, Secret, StegoOptions};

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Debug)]
enum SecretSource {
    Text(String),
    ImageFile(PathBuf),
}

#[derive(Default, Debug)]
pub struct HideApi {
    secret: Option<SecretSource>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    password: Password,
    options: StegoOptions,
    kdf_params: KdfParams,
}

impl HideApi {
    pub fn with_options(mut self, options: StegoOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_kdf_params(mut self, kdf_params: KdfParams) -> Self {
        self.kdf_params = kdf_params;
        self
    }

    /// Hide a text, replaces a secret image set before
    pub fn with_text(mut self, text: &str) -> Self {
        self.secret = Some(SecretSource::Text(text.to_string()));
        self
    }

    /// Hide the image file at `secret_image`, replaces a text set before
    pub fn with_secret_image<A: AsRef<Path>>(mut self, secret_image: A) -> Self {
        self.secret = Some(SecretSource::ImageFile(secret_image.as_ref().to_path_buf()));
        self
    }

    /// The carrier image
    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    /// The stego image, must be a png
    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    pub fn with_password(mut self, password: &str) -> Self {
        self.password = password.into();
        self
    }

    /// Set the password
    /// If `None` is passed, the secret is hidden without encryption
    pub fn use_password<P: Into<Password>>(mut self, password: P) -> Self {
        self.password = password.into();
        self
    }

    pub fn execute(self) -> Result<()> {
        let Some(source) = self.secret else {
            return Err(CanvasError::MissingSecret);
        };
        let Some(image) = self.image else {
            return Err(CanvasError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(CanvasError::TargetNotSet);
        };

        let secret = match source {
            SecretSource::Text(text) => Secret::text(text),
            SecretSource::ImageFile(file) => Secret::image_from_file(&file)?,
        };
        let codec = codec_for(self.password.as_deref(), self.kdf_params);
        let payload = codec.encode(&secret)?;

        let mut carrier = Carrier::from_file(&image, &self.options)?;
        carrier.hide(&payload)?.save_as(&output)?;
        info!(
            "Hid a {} secret of {} payload bytes in {}",
            secret.kind(),
            payload.len(),
            output.display()
        );

        Ok(())
    }
}
