use tracing_subscriber::EnvFilter;

use crate::config::Environment;

/// Filter used when `RUST_LOG` is not set
pub fn default_directives(environment: Environment) -> &'static str {
    match environment {
        Environment::Production => "moviedex_api=info,tower_http=info",
        Environment::Development => "moviedex_api=debug,tower_http=debug",
    }
}

/// Installs the global tracing subscriber.
///
/// Production emits JSON lines, development a human readable format.
pub fn init(environment: Environment) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(environment)));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = if environment.is_production() {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}
