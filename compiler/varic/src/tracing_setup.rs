//! Tracing subscriber setup for the CLI.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber once.
///
/// The filter comes from `VARI_LOG`, then `RUST_LOG`. With neither set no
/// subscriber is installed. Events go to stderr as an indented tree.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        let filter = EnvFilter::try_from_env("VARI_LOG").or_else(|_| EnvFilter::try_from_default_env());
        if let Ok(filter) = filter {
            let tree = tracing_tree::HierarchicalLayer::new(2)
                .with_targets(true)
                .with_writer(std::io::stderr);
            tracing_subscriber::registry().with(tree).with(filter).init();
        }
    });
}
