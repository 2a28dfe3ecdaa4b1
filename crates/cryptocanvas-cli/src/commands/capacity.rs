use std::path::PathBuf;

use clap::Args;
use cryptocanvas_core::{seal, Carrier, StegoOptions};

use crate::CliResult;

/// Shows how much a carrier image can hold
#[derive(Args, Debug)]
pub struct CapacityArgs {
    /// Carrier image, PNG or JPEG
    #[arg(short = 'i', long = "in", value_name = "carrier image", required = true)]
    pub media: PathBuf,
}

impl CapacityArgs {
    pub fn run(self, options: StegoOptions) -> CliResult<()> {
        let carrier = Carrier::from_file(&self.media, &options)?;
        let (width, height) = carrier.dimensions();
        let limits = SecretLimits::of(&carrier);

        println!("{}: {width}x{height} pixels", self.media.display());
        println!("capacity: {} bits", carrier.capacity_bits());
        println!("largest payload: {} bytes", limits.payload);
        println!("largest secret: {} bytes", limits.secret);
        println!("largest password sealed secret: {} bytes", limits.sealed_secret);

        Ok(())
    }
}

/// Largest sizes in bytes a carrier accepts.
#[derive(Debug, PartialEq, Eq)]
struct SecretLimits {
    payload: usize,
    /// content of a plain secret, behind its kind tag
    secret: usize,
    /// content of a secret that is sealed before hiding
    sealed_secret: usize,
}

impl SecretLimits {
    fn of(carrier: &Carrier) -> Self {
        let payload = carrier.max_payload_len();

        Self {
            payload,
            secret: payload.saturating_sub(1),
            sealed_secret: payload.saturating_sub(seal::sealed_len(1)),
        }
    }
}
