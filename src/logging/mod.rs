//! Tracing subscriber setup.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "layerglow=info";

static INIT: Once = Once::new();

/// Installs the stderr subscriber once; later calls are ignored.
///
/// The filter comes from `RUST_LOG`, falling back to `layerglow=info`.
pub fn init() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        let installed = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
        if installed.is_ok() {
            tracing::debug!("logging initialized");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init();
        init();
        tracing::info!("still logging after repeated init");
    }
}
