use crate::positions::PositionRule;

/// Options for LSB image hiding and revealing
///
/// Hide and reveal must use identical options, otherwise the carrier capacity or the
/// bit positions differ and nothing is found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StegoOptions {
    /// Decides which carrier byte receives which payload bit.
    pub rule: PositionRule,

    /// If true no alpha channel would be used for encoding,
    /// this reduces then the capacity by one bit per pixel
    pub skip_alpha_channel: bool,
}

impl Default for StegoOptions {
    fn default() -> Self {
        Self {
            rule: PositionRule::default(),
            skip_alpha_channel: true,
        }
    }
}

impl StegoOptions {
    pub fn with_rule(mut self, rule: PositionRule) -> Self {
        self.rule = rule;
        self
    }

    pub fn with_skip_alpha_channel(mut self, skip_alpha_channel: bool) -> Self {
        self.skip_alpha_channel = skip_alpha_channel;
        self
    }
}
