//! Logging setup.
//!
//! Nothing is installed unless `QLISP_LOG` or `RUST_LOG` holds a filter, so
//! the prompt stays quiet by default.

use std::sync::Once;

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

static TRACING_INIT: Once = Once::new();

/// Install a hierarchical stderr subscriber filtered by `QLISP_LOG`, falling
/// back to `RUST_LOG`. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let Some(filter) = env_filter() else {
            return;
        };
        let layer = tracing_tree::HierarchicalLayer::new(2)
            .with_writer(std::io::stderr)
            .with_targets(true)
            .with_bracketed_fields(true);
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(layer)
            .try_init();
    });
}

fn env_filter() -> Option<EnvFilter> {
    EnvFilter::try_from_env("QLISP_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .ok()
}
