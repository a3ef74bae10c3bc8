//! Diagnostic logging bootstrap for the command-line binary.
//!
//! The library emits `tracing` events from the suggestion layer only; the
//! tracker core never logs. Hosts that already install a subscriber can
//! skip this module entirely.

use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV_VAR: &str = "WALLESTARS_LOG";

static ACTIVE_FILTER: OnceCell<String> = OnceCell::new();

/// Installs a stderr `fmt` subscriber once per process.
///
/// The filter comes from [`LOG_ENV_VAR`] when set and valid, otherwise
/// from `default_directive`. Returns `true` when this call installed the
/// subscriber and `false` when logging was already initialised (by this
/// function or by someone else).
pub fn init_logging(default_directive: &str) -> bool {
    let mut installed = false;
    ACTIVE_FILTER.get_or_init(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .or_else(|_| EnvFilter::try_new(default_directive))
            .unwrap_or_else(|_| EnvFilter::new("warn"));
        let rendered = filter.to_string();
        installed = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init()
            .is_ok();
        rendered
    });
    installed
}

/// Returns the filter directive installed by [`init_logging`], if any.
#[must_use]
pub fn active_filter() -> Option<&'static str> {
    ACTIVE_FILTER.get().map(String::as_str)
}

/// Returns the default directive for the current build mode.
///
/// - `debug` builds -> `wallestars=debug`
/// - `release` builds -> `wallestars=info`
#[must_use]
pub const fn default_directive() -> &'static str {
    if cfg!(debug_assertions) {
        "wallestars=debug"
    } else {
        "wallestars=info"
    }
}
