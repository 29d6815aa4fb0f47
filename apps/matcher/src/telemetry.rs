use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

/// Installs structured logging for a host process.
///
/// `RUST_LOG` in the environment wins; otherwise the crate logs at
/// `config.rust_log`. A second call is a no-op.
pub fn init_tracing(config: &Config) {
    let installed = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("jd_matcher={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .try_init();

    if installed.is_ok() {
        tracing::info!("jd-matcher v{} logging initialized", env!("CARGO_PKG_VERSION"));
    }
}
