use std::path::PathBuf;

use clap::Args;
use cryptocanvas_core::CanvasError;

use crate::CliResult;

/// Decrypts an envelope written by encrypt
#[derive(Args, Debug)]
pub struct DecryptArgs {
    /// Password used to encrypt the file, prompted for if missing
    #[arg(short, long, value_name = "password")]
    pub password: Option<String>,

    /// Envelope file
    #[arg(short = 'i', long = "in", value_name = "envelope file", required = true)]
    pub input: PathBuf,

    /// Decrypted file, defaults to the input file name without `.enc`
    #[arg(short = 'o', long = "out", value_name = "output file")]
    pub output: Option<PathBuf>,
}

impl DecryptArgs {
    pub fn run(self) -> CliResult<()> {
        let password = self
            .password
            .or_else(|| crate::cli::ask_for_password(false))
            .ok_or(CanvasError::MissingPassword)?;

        let mut api = cryptocanvas_core::api::decrypt::prepare()
            .with_input(self.input)
            .with_password(&password);
        if let Some(output) = self.output {
            api = api.with_output(output);
        }

        let written = api.execute()?;
        println!("Decrypted into {}", written.display());

        Ok(())
    }
}
