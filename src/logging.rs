use std::backtrace::Backtrace;

use tracing_subscriber::{EnvFilter, fmt};

use crate::config::AppConfig;

/// Installs the subscriber. `RUST_LOG` takes precedence over `logging.rust_log`.
pub fn init_tracing(cfg: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.logging.rust_log));
    fmt().with_env_filter(filter).with_target(false).init();
    set_panic_hook();

    tracing::info!(
        host = %cfg.general.host,
        port = cfg.general.port,
        database = cfg.database.scheme(),
        max_connections = cfg.database.max_connections,
        "starting schedule server"
    );
}

fn set_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let message = if let Some(message) = info.payload().downcast_ref::<&str>() {
            *message
        } else if let Some(message) = info.payload().downcast_ref::<String>() {
            message.as_str()
        } else {
            "unknown panic"
        };

        let backtrace = Backtrace::capture();

        if let Some(location) = info.location() {
            tracing::error!(
                panic = %message,
                location = %location,
                backtrace = %backtrace,
                "panic"
            );
        } else {
            tracing::error!(panic = %message, backtrace = %backtrace, "panic");
        }
    }));
}
