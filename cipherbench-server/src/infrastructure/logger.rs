//! Logging initialization
//!
//! Console plus daily-rolling file output through tracing-subscriber; the
//! rest of the codebase logs through the `log` facade, which the
//! subscriber's log bridge picks up.

use std::fs;
use std::sync::Once;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    fmt::{self, time::UtcTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

static INIT: Once = Once::new();

pub struct Logger;

impl Logger {
    /// Initialize global logging. Safe to call more than once; only the
    /// first call installs the subscriber.
    pub fn init(level: &str) {
        INIT.call_once(|| {
            let env_filter = EnvFilter::new(std::env::var("RUST_LOG").unwrap_or_else(|_| {
                format!("cipherbench_server={level},cipherbench_core={level},actix_web=info")
            }));

            if let Err(e) = fs::create_dir_all("logs") {
                eprintln!("Failed to create log directory: {e}");
            }
            let file_appender =
                RollingFileAppender::new(Rotation::DAILY, "logs", "cipherbench_server.log");

            let console_layer = fmt::layer()
                .with_timer(UtcTime::rfc_3339())
                .with_target(true)
                .with_ansi(true)
                .with_writer(std::io::stdout);

            let file_layer = fmt::layer()
                .with_timer(UtcTime::rfc_3339())
                .with_target(true)
                .with_ansi(false)
                .with_writer(file_appender);

            Registry::default()
                .with(env_filter)
                .with(console_layer)
                .with(file_layer)
                .init();
        });
    }
}
