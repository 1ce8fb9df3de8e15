/// Logger setup
///
/// Diagnostics go to stderr through `env_logger`; stdout is left for the
/// mode/channel report and the completion message.

use chrono::Local;
use log::LevelFilter;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

static LOGGER_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Initialise the global logger once. `RUST_LOG` overrides the default `info` level.
pub fn init_logger() {
    if LOGGER_INITIALIZED.swap(true, Ordering::SeqCst) {
        return;
    }

    let result = env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {:<5}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .target(env_logger::Target::Stderr)
        .try_init();

    if let Err(e) = result {
        eprintln!("⚠️  Logger already set by someone else: {}", e);
    }
}
