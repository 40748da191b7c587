use std::sync::Once;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, reload, util::SubscriberInitExt};

static LOG_INIT: Once = Once::new();

/// Fallback filter used when neither `RUST_LOG` nor a default is provided
const DEFAULT_FILTER: &str = "info";

/// Initialize the global tracing subscriber once per process.
///
/// `RUST_LOG` wins when it is set; otherwise `default_value` (or `info`)
/// becomes the filter. Subsequent calls are no-ops, so every test may call
/// `log_init(option_env!("RUST_LOG"))` without coordination.
pub fn log_init(default_value: Option<&str>) {
    LOG_INIT.call_once(|| {
        if std::env::var("RUST_BACKTRACE").is_err() {
            unsafe {
                std::env::set_var("RUST_BACKTRACE", "1");
            }
        }

        if std::env::var("RUST_LOG").is_err() {
            unsafe {
                std::env::set_var("RUST_LOG", default_value.unwrap_or(DEFAULT_FILTER));
            }
        }

        tracing_setup();
    });
}

fn tracing_setup() {
    let format = tracing_subscriber::fmt::layer()
        .with_level(true)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .with_file(true)
        .with_ansi(true)
        .compact();

    let (filter, _reload_handle) = reload::Layer::new(EnvFilter::from_default_env());

    // another subscriber may already be installed by the host application
    if let Err(e) = tracing_subscriber::registry()
        .with(filter)
        .with(format)
        .try_init()
    {
        eprintln!("tracing subscriber already initialized: {e}");
    }
}
