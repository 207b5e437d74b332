//! Tracing subscriber bootstrap.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Installs a global `fmt` subscriber filtered by `RUST_LOG`, or by `level`
/// when the variable is unset.
///
/// An unparsable filter falls back to `info`. Returns `false` if a global
/// subscriber was already installed.
pub fn init_tracing(level: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_install_is_rejected_without_panicking() {
        let _ = init_tracing("debug");
        assert!(!init_tracing("not a filter ==="));
    }
}
