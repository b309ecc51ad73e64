use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_level` (usually taken from
/// [`Config::log_level`](crate::Config)) is used as the filter directive.
pub fn init_tracing(service_name: &str, default_level: &str) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
            // Switch to .json() when logs are shipped to a collector
            // .json()
        )
        .init();

    tracing::info!("Starting service: {}", service_name);
}
