use std::path::{Path, PathBuf};

use clap::Args;
use cryptocanvas_core::{CanvasError, Secret, StegoOptions};

use crate::CliResult;

/// Unveils a text or an image from a PNG image
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Password used to encrypt the secret
    #[arg(short, long, value_name = "password")]
    pub password: Option<String>,

    /// Source image that contains the secret
    #[arg(short = 'i', long = "in", value_name = "stego image", required = true)]
    pub media: PathBuf,

    /// Where the secret is written to, required for image secrets
    #[arg(short = 'o', long = "out", value_name = "output file")]
    pub output: Option<PathBuf>,
}

impl UnveilArgs {
    pub fn run(self, options: StegoOptions) -> CliResult<()> {
        let secret = cryptocanvas_core::api::unveil::prepare()
            .with_options(options)
            .with_secret_image(&self.media)
            .use_password(self.password)
            .execute()?;

        match (secret, self.output) {
            (Secret::Text(text), None) => println!("{text}"),
            (Secret::Text(text), Some(output)) => write(&output, text.as_bytes())?,
            (Secret::Image(data), Some(output)) => write(&output, &data)?,
            (Secret::Image(_), None) => return Err(CanvasError::TargetNotSet),
        }

        Ok(())
    }
}

fn write(output: &Path, data: &[u8]) -> CliResult<()> {
    std::fs::write(output, data).map_err(|source| CanvasError::WriteError { source })?;
    println!("Unveiled into {}", output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::hide::HideArgs;
    use image::{ImageBuffer, Rgb, RgbImage};
    use tempfile::tempdir;

    #[test]
    fn should_write_unveiled_text_to_output() {
        let temp_dir = tempdir().unwrap();
        let carrier = temp_dir.path().join("carrier.png");
        let image: RgbImage = ImageBuffer::from_fn(32, 32, |x, y| Rgb([x as u8, y as u8, 3]));
        image.save(&carrier).unwrap();
        let stego = temp_dir.path().join("stego.png");

        HideArgs {
            password: Some("SuperSecret42".to_string()),
            media: carrier,
            write_to_file: stego.clone(),
            secret_image: None,
            message: Some("Hello, World!".to_string()),
        }
        .run(StegoOptions::default())
        .unwrap();

        let output = temp_dir.path().join("secret.txt");
        UnveilArgs {
            password: Some("SuperSecret42".to_string()),
            media: stego,
            output: Some(output.clone()),
        }
        .run(StegoOptions::default())
        .unwrap();

        assert_eq!(std::fs::read_to_string(output).unwrap(), "Hello, World!");
    }
}
