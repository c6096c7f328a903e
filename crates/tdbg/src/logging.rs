use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for the library's own diagnostics.
///
/// Call this once at startup. Safe to call multiple times, and a no-op if a
/// global subscriber is already installed.
/// Enable with `RUST_LOG=tdb_trace=debug` or `RUST_LOG=tdbg=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let _ = tracing_subscriber::registry()
                .with(HierarchicalLayer::new(2).with_targets(true))
                .with(filter)
                .try_init();
        }
    });
}
