pub mod build_info;

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVE: &str = "mfuko=info";

/// Installs the global tracing subscriber. `RUST_LOG` overrides the default `mfuko=info` filter.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        // Another subscriber may already be installed by the host application.
        let _ = fmt().with_env_filter(filter).try_init();

        let build = build_info::current();
        tracing::info!(version = build.version, git = build.git_hash, "Mfuko tracing initialized.");
    });
}
