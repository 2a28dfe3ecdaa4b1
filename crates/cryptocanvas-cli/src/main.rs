use clap::Parser;
use log::debug;

use cryptocanvas_core::CanvasError;

mod cli;
mod commands;

use crate::cli::{CliArgs, Commands};

pub type CliResult<T> = Result<T, CanvasError>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();
    let options = args.stego_options();
    debug!("Using {options:?}");

    match args.command {
        Commands::Encrypt(cmd) => cmd.run(),
        Commands::Decrypt(cmd) => cmd.run(),
        Commands::Hide(cmd) => cmd.run(options),
        Commands::Unveil(cmd) => cmd.run(options),
        Commands::Capacity(cmd) => cmd.run(options),
    }
}
