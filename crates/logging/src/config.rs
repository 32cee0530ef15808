//! crates/logging/src/config.rs
//! Verbosity configuration and flag-token parsing.

use std::env;

use super::levels::{DebugFlag, DebugLevels};

/// Environment variable holding a comma separated list of debug flag tokens.
pub const DEBUG_ENV: &str = "DIRWALK_DEBUG";

/// Verbosity configuration for walker diagnostics.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VerbosityConfig {
    /// Debug flag levels.
    pub debug: DebugLevels,
}

impl VerbosityConfig {
    /// Create a configuration from a verbose level (0-3).
    ///
    /// Level 1 reports failed listings, level 2 adds frontier expansion and
    /// level 3 traces every delivered file. Higher values saturate at 3.
    pub fn from_verbose_level(level: u8) -> Self {
        let mut config = Self::default();

        match level {
            0 => {}
            1 => {
                config.debug.listing = 1;
            }
            2 => {
                config.debug.listing = 1;
                config.debug.frontier = 2;
            }
            _ => {
                config.debug.listing = 1;
                config.debug.frontier = 2;
                config.debug.deliver = 3;
            }
        }

        config
    }

    /// Build a configuration from [`DEBUG_ENV`].
    ///
    /// An unset or empty variable yields the default (silent) configuration.
    pub fn from_env() -> Result<Self, String> {
        let mut config = Self::default();
        if let Ok(value) = env::var(DEBUG_ENV) {
            config.apply_debug_list(&value)?;
        }
        Ok(config)
    }

    /// Apply a single debug flag token such as `frontier2` or `listing`.
    ///
    /// The special name `all` sets every flag.
    pub fn apply_debug_flag(&mut self, token: &str) -> Result<(), String> {
        let (name, level) = parse_flag_token(token)?;

        if name == "all" {
            self.debug.set_all(level);
            return Ok(());
        }

        let flag =
            DebugFlag::from_name(name).ok_or_else(|| format!("unknown debug flag: {name}"))?;
        self.debug.set(flag, level);
        Ok(())
    }

    /// Apply a comma separated list of debug flag tokens.
    ///
    /// Whitespace around tokens and empty segments are ignored. Tokens are
    /// applied left to right, so later tokens override earlier ones.
    pub fn apply_debug_list(&mut self, list: &str) -> Result<(), String> {
        list.split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .try_for_each(|token| self.apply_debug_flag(token))
    }
}

/// Parse a flag token like "frontier2" into ("frontier", 2) or "listing" into ("listing", 1).
fn parse_flag_token(token: &str) -> Result<(&str, u8), String> {
    if token.is_empty() {
        return Err("empty flag token".to_string());
    }

    match token.find(|c: char| c.is_ascii_digit()) {
        Some(0) => Err(format!("missing flag name in: {token}")),
        Some(pos) => {
            let name = &token[..pos];
            let level = token[pos..]
                .parse::<u8>()
                .map_err(|_| format!("invalid level in flag: {token}"))?;
            Ok((name, level))
        }
        None => Ok((token, 1)),
    }
}
