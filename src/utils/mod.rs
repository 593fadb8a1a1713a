pub mod build_info;
pub mod paths;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Applied only when `RUST_LOG` is unset, empty, or unparsable.
const DEFAULT_DIRECTIVE: &str = "order_form=warn";

/// Initializes the global tracing subscriber with sensible defaults.
///
/// Logs go to stderr so rendered summaries on stdout stay clean.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = match std::env::var(EnvFilter::DEFAULT_ENV) {
            Ok(spec) if !spec.trim().is_empty() => {
                EnvFilter::try_new(spec).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
            }
            _ => EnvFilter::new(DEFAULT_DIRECTIVE),
        };

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
