//! Tracing subscriber setup.
//!
//! Off unless `RUST_LOG` is set; `RUST_LOG` is the filter. Setting
//! `SMSCR_LOG_TREE` switches from flat lines to an indented span tree,
//! which reads better for nested FOR loops.
//!
//! ```bash
//! RUST_LOG=smscr_eval=debug smscr render page.smscr
//! RUST_LOG=trace SMSCR_LOG_TREE=1 smscr render page.smscr
//! ```

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();

        if std::env::var_os("SMSCR_LOG_TREE").is_some() {
            let tree = tracing_tree::HierarchicalLayer::new(2)
                .with_targets(true)
                .with_writer(std::io::stderr);
            let _ = tracing_subscriber::registry()
                .with(tree)
                .with(filter)
                .try_init();
        } else {
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
                .with(filter)
                .try_init();
        }
    });
}
