//! crates/logging/src/tracing_bridge.rs
//! Bridge between the walker's debug flags and the tracing crate.
//!
//! Every event accepted by [`debug_log!`](crate::debug_log) is re-emitted as a
//! `tracing` event whose target names the flag (`dirwalk::frontier`,
//! `dirwalk::listing`, `dirwalk::deliver`). [`init_tracing`] installs a
//! `tracing-subscriber` formatter filtered to the same flags and levels.
//!
//! # Usage
//!
//! ```rust,ignore
//! use logging::{VerbosityConfig, init_tracing};
//!
//! let config = VerbosityConfig::from_verbose_level(2);
//! init_tracing(config);
//! ```

use super::config::VerbosityConfig;
use super::levels::DebugFlag;
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the derived tracing filter.
pub const LOG_ENV: &str = "DIRWALK_LOG";

/// Returns the tracing target used for a flag.
#[must_use]
pub const fn target_for(flag: DebugFlag) -> &'static str {
    match flag {
        DebugFlag::Frontier => "dirwalk::frontier",
        DebugFlag::Listing => "dirwalk::listing",
        DebugFlag::Deliver => "dirwalk::deliver",
    }
}

/// Maps a debug level to a tracing level: level 1 is `debug`, anything
/// higher is `trace`.
#[must_use]
pub const fn tracing_level(level: u8) -> tracing::Level {
    if level <= 1 {
        tracing::Level::DEBUG
    } else {
        tracing::Level::TRACE
    }
}

/// Builds an [`EnvFilter`] directive string from a configuration.
///
/// Flags set to `0` are omitted; with no flags enabled the filter is `off`.
#[must_use]
pub fn filter_directives(config: &VerbosityConfig) -> String {
    let directives: Vec<String> = DebugFlag::ALL
        .into_iter()
        .filter_map(|flag| {
            let level = config.debug.get(flag);
            (level > 0).then(|| {
                let directive = tracing_level(level).to_string().to_ascii_lowercase();
                format!("{}={directive}", target_for(flag))
            })
        })
        .collect();

    if directives.is_empty() {
        "off".to_string()
    } else {
        directives.join(",")
    }
}

/// Installs a global fmt subscriber and stores `config` for this thread.
///
/// When [`LOG_ENV`] is set its value replaces the derived filter. Returns
/// `false` if a global subscriber was already installed.
pub fn init_tracing(config: VerbosityConfig) -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(&config)));
    crate::init(config);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}

pub(crate) fn forward(flag: DebugFlag, level: u8, message: &str) {
    // Targets must be literals, so each flag gets its own arm.
    match (flag, tracing_level(level) == tracing::Level::DEBUG) {
        (DebugFlag::Frontier, true) => tracing::debug!(target: "dirwalk::frontier", "{message}"),
        (DebugFlag::Frontier, false) => tracing::trace!(target: "dirwalk::frontier", "{message}"),
        (DebugFlag::Listing, true) => tracing::debug!(target: "dirwalk::listing", "{message}"),
        (DebugFlag::Listing, false) => tracing::trace!(target: "dirwalk::listing", "{message}"),
        (DebugFlag::Deliver, true) => tracing::debug!(target: "dirwalk::deliver", "{message}"),
        (DebugFlag::Deliver, false) => tracing::trace!(target: "dirwalk::deliver", "{message}"),
    }
}
