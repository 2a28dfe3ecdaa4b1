use clap::{Parser, Subcommand, ValueEnum};
use cryptocanvas_core::{PositionRule, PrimeStride, Sequential, StegoOptions};

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    /// Experimental: rule that places the hidden bits, hide and unveil must agree
    #[arg(long = "x-position-rule", value_enum, default_value_t = PositionRuleArg::PrimeStride)]
    pub position_rule: PositionRuleArg,

    #[command(subcommand)]
    pub command: Commands,
}

impl CliArgs {
    pub fn stego_options(&self) -> StegoOptions {
        StegoOptions::default().with_rule(self.position_rule.into())
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PositionRuleArg {
    Sequential,
    PrimeStride,
}

impl From<PositionRuleArg> for PositionRule {
    fn from(value: PositionRuleArg) -> Self {
        match value {
            PositionRuleArg::Sequential => Sequential.into(),
            PositionRuleArg::PrimeStride => PrimeStride.into(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Encrypt(encrypt::EncryptArgs),
    Decrypt(decrypt::DecryptArgs),
    Hide(hide::HideArgs),
    Unveil(unveil::UnveilArgs),
    Capacity(capacity::CapacityArgs),
}

/// prompts on the terminal, `None` if the prompt was aborted
pub fn ask_for_password(confirm: bool) -> Option<String> {
    let prompt = dialoguer::Password::new().with_prompt("Password");
    let prompt = if confirm {
        prompt.with_confirmation("Repeat password", "Error: the passwords don't match.")
    } else {
        prompt
    };

    prompt.interact().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn should_default_to_prime_stride() {
        let args = CliArgs::parse_from(["cryptocanvas", "capacity", "-i", "cat.png"]);

        assert_eq!(args.stego_options().rule, PositionRule::from(PrimeStride));
    }

    #[test]
    fn should_switch_position_rule() {
        let args = CliArgs::parse_from([
            "cryptocanvas",
            "--x-position-rule",
            "sequential",
            "unveil",
            "-i",
            "cat.png",
        ]);

        assert_eq!(args.stego_options().rule, PositionRule::from(Sequential));
    }

    #[test]
    fn hide_needs_exactly_one_secret() {
        let both = CliArgs::try_parse_from([
            "cryptocanvas", "hide", "-i", "a.png", "-o", "b.png", "-m", "hi", "-d", "c.png",
        ]);
        let none = CliArgs::try_parse_from(["cryptocanvas", "hide", "-i", "a.png", "-o", "b.png"]);

        assert!(both.is_err());
        assert!(none.is_err());
    }
}
