use std::path::PathBuf;

use clap::Args;
use cryptocanvas_core::StegoOptions;

use crate::CliResult;

/// Hides a text or an image in a PNG image
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Password used to encrypt the secret before hiding
    #[arg(short, long, value_name = "password")]
    pub password: Option<String>,

    /// Carrier image, PNG or JPEG, used readonly.
    #[arg(short = 'i', long = "in", value_name = "carrier image", required = true)]
    pub media: PathBuf,

    /// Final image will be stored as PNG file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// Image file to hide in the carrier
    #[arg(
        short = 'd',
        long = "data",
        value_name = "secret image",
        required_unless_present = "message",
        conflicts_with = "message"
    )]
    pub secret_image: Option<PathBuf>,

    /// A text message that will be hidden
    #[arg(
        short,
        long,
        value_name = "text message",
        required_unless_present = "secret_image"
    )]
    pub message: Option<String>,
}

impl HideArgs {
    pub fn run(self, options: StegoOptions) -> CliResult<()> {
        let mut api = cryptocanvas_core::api::hide::prepare()
            .with_options(options)
            .with_image(&self.media)
            .with_output(&self.write_to_file)
            .use_password(self.password);
        if let Some(message) = &self.message {
            api = api.with_text(message);
        }
        if let Some(secret_image) = &self.secret_image {
            api = api.with_secret_image(secret_image);
        }

        api.execute()?;
        println!("Hidden in {}", self.write_to_file.display());

        Ok(())
    }
}
