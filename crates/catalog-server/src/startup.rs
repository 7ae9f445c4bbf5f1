//! Server startup utilities.

use catalog_config::{AppConfig, ObservabilityConfig};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Crate-level filter directives appended to the configured log level.
const DEFAULT_DIRECTIVES: &str = "catalog=debug,tower_http=debug,sqlx=warn";

/// Builds the log filter. `RUST_LOG` wins over configuration.
pub fn log_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},{}", config.log_level, DEFAULT_DIRECTIVES)))
}

/// Initializes the global tracing subscriber.
///
/// Emits JSON lines when `log_format = "json"`, human-readable output
/// otherwise. Calling this more than once is a no-op.
pub fn init_logging(config: &ObservabilityConfig) {
    let registry = tracing_subscriber::registry().with(log_filter(config));

    let result = if config.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init()
    };

    if result.is_err() {
        info!("Tracing subscriber already initialized");
    }
}

/// Prints the startup banner.
pub fn print_banner() {
    info!(r#"
   ______      __        __
  / ____/___ _/ /_____ _/ /___  ____ _
 / /   / __ `/ __/ __ `/ / __ \/ __ `/
/ /___/ /_/ / /_/ /_/ / / /_/ / /_/ /
\____/\__,_/\__/\__,_/_/\____/\__, /
                             /____/
    "#);
}

/// Prints server startup information.
pub fn print_startup_info(config: &AppConfig) {
    let separator = "=".repeat(60);
    let base = format!("http://{}", config.server.addr());
    info!("{}", separator);
    info!("Environment: {}", config.app.environment);
    info!("REST API:    {}/api/product", base);
    info!("Health:      {}/health", base);
    info!("API Docs:    {}/api-docs/openapi.json", base);
    info!("Cache:       {}", config.cache.backend);
    info!("{}", separator);
}
