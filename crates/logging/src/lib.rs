#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` provides the verbosity flag system used by the directory walker.
//! Diagnostics are grouped under [`DebugFlag`] categories, each carrying its
//! own level, in the same spirit as a `--debug=FLAG[N]` command-line option.
//!
//! # Design
//!
//! - [`VerbosityConfig`] holds a [`DebugLevels`] table and can be built from a
//!   single verbose level, from flag tokens such as `frontier2`, or from the
//!   `DIRWALK_DEBUG` environment variable.
//! - The active configuration is stored per thread ([`init`]). Accepted events
//!   are appended to a per-thread buffer that [`drain_events`] empties, which
//!   keeps diagnostics observable in tests without a global subscriber.
//! - [`debug_log!`] checks the level before formatting, so disabled
//!   diagnostics cost a thread-local lookup and nothing else.
//! - With the `tracing` feature, events are also forwarded to `tracing` and
//!   `init_tracing` installs a `tracing-subscriber` formatter.
//!
//! # Examples
//!
//! ```
//! use logging::{debug_log, drain_events, init, DebugFlag, VerbosityConfig};
//!
//! let mut config = VerbosityConfig::default();
//! config.apply_debug_flag("listing").unwrap();
//! init(config);
//!
//! debug_log!(Listing, 1, "cannot read {}", "/tmp/locked");
//! debug_log!(Frontier, 1, "suppressed");
//!
//! let events = drain_events();
//! assert_eq!(events.len(), 1);
//! assert_eq!(events[0].flag, DebugFlag::Listing);
//! assert_eq!(events[0].message, "cannot read /tmp/locked");
//! ```

mod config;
mod levels;
mod thread_local;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::{DEBUG_ENV, VerbosityConfig};
pub use levels::{DebugFlag, DebugLevels};
pub use thread_local::{
    DiagnosticEvent, apply_debug_flag, current, debug_gte, drain_events, emit_debug, init,
};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{LOG_ENV, filter_directives, init_tracing, target_for, tracing_level};

/// Emit a debug diagnostic when the flag is enabled at `level` or above.
///
/// The first argument names a [`DebugFlag`] variant, the second is the level
/// and the rest is a `format!` argument list.
///
/// ```
/// use logging::{debug_log, drain_events, init, VerbosityConfig};
///
/// init(VerbosityConfig::from_verbose_level(3));
/// debug_log!(Deliver, 3, "delivered {}", "a.txt");
/// assert_eq!(drain_events()[0].message, "delivered a.txt");
/// ```
#[macro_export]
macro_rules! debug_log {
    ($flag:ident, $level:expr, $($arg:tt)+) => {{
        let flag = $crate::DebugFlag::$flag;
        let level: u8 = $level;
        if $crate::debug_gte(flag, level) {
            $crate::emit_debug(flag, level, ::std::format!($($arg)+));
        }
    }};
}
