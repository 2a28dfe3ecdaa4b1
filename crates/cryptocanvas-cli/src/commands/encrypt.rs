use std::path::PathBuf;

use clap::Args;
use cryptocanvas_core::CanvasError;

use crate::CliResult;

/// Encrypts an image file into a password protected envelope
#[derive(Args, Debug)]
pub struct EncryptArgs {
    /// Password used to encrypt the file, prompted for if missing
    #[arg(short, long, value_name = "password")]
    pub password: Option<String>,

    /// File to encrypt, used readonly.
    #[arg(short = 'i', long = "in", value_name = "input file", required = true)]
    pub input: PathBuf,

    /// Envelope file, defaults to the input file name plus `.enc`
    #[arg(short = 'o', long = "out", value_name = "output file")]
    pub output: Option<PathBuf>,
}

impl EncryptArgs {
    pub fn run(self) -> CliResult<()> {
        let password = self
            .password
            .or_else(|| crate::cli::ask_for_password(true))
            .ok_or(CanvasError::MissingPassword)?;

        let mut api = cryptocanvas_core::api::encrypt::prepare()
            .with_input(self.input)
            .with_password(&password);
        if let Some(output) = self.output {
            api = api.with_output(output);
        }

        let written = api.execute()?;
        println!("Encrypted into {}", written.display());

        Ok(())
    }
}
