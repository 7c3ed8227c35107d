//! Diagnostic logging on stderr.
//!
//! `RUST_LOG` wins when set; otherwise `-v` raises the crate level from
//! `warn` to `info`, `-vv` to `debug` and `-vvv` to `trace`.

use tracing::Level;
use tracing_subscriber::EnvFilter;

pub fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global subscriber. A second call is a no-op.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = level_for(verbosity).as_str().to_ascii_lowercase();
        EnvFilter::new(format!("callstats={level}"))
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
