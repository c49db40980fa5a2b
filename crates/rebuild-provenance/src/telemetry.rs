//! Log subscriber setup for the `rebuild-provenance` binary and any host tool
//! that embeds the resolver.
//!
//! Resolution events from [`crate::obs`] are only visible once a subscriber
//! is installed. The first installed subscriber stays in place for the rest
//! of the process.

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Install a stderr subscriber for provenance events.
///
/// `RUST_LOG` takes precedence over `level`. With `json`, each event is a
/// single JSON object per line. Stdout is left to the provenance output.
pub fn init_tracing(json: bool, level: Level) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .json(),
            )
            .try_init()
            .ok();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init()
            .ok();
    }
}
