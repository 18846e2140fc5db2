use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes console logging. `RUST_LOG` overrides the default level.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("poe2_data_updater=info"));

    let console_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    // try_init so repeated calls (e.g. from tests) don't panic
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .try_init();
}
