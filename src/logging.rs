//! Log setup for native hosts. Browser builds get theirs from the wasm start hook instead.

use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, Layer};

use crate::version::full_version;

/// Install a global subscriber writing compact lines to stderr. `RUST_LOG` takes precedence,
/// `default_level` applies when it isn't set or can't be parsed.
///
/// The returned guard flushes the background writer when dropped and needs to be held for as
/// long as logs are expected to show up.
pub fn init_tracing(default_level: Level) -> Result<WorkerGuard, LoggingError> {
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(std::io::stderr());
    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    let stderr_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(non_blocking_writer)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(stderr_layer).try_init()?;
    tracing::debug!("initialized nostr-pubkey logging {}", full_version());

    Ok(guard)
}

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("a global tracing subscriber is already installed: {0}")]
    AlreadyInitialized(#[from] TryInitError),
}
