use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Map a configured level name onto a filter, falling back to `info`.
fn level_filter(level: &str) -> LevelFilter {
    match level.to_ascii_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        "off" => LevelFilter::OFF,
        _ => LevelFilter::INFO,
    }
}

/// Install the global subscriber writing to stdout.
///
/// `level` is the default directive; `RUST_LOG` refines it per target.
pub fn init_logging(level: &str) -> Result<(), TryInitError> {
    let filter = EnvFilter::builder()
        .with_default_directive(level_filter(level).into())
        .parse_lossy(std::env::var("RUST_LOG").unwrap_or_default());

    let stdout_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(true)
        .with_filter(filter);

    tracing_subscriber::registry().with(stdout_layer).try_init()?;

    if level_filter(level).to_string() != level.to_ascii_lowercase() {
        tracing::warn!("Invalid log level '{}', defaulting to 'info'", level);
    }
    Ok(())
}

#[cfg(test)]
mod logging_test {
    use super::*;

    #[test]
    fn test_level_filter() {
        assert_eq!(level_filter("debug"), LevelFilter::DEBUG);
        assert_eq!(level_filter("WARN"), LevelFilter::WARN);
        assert_eq!(level_filter("verbose"), LevelFilter::INFO);
    }
}
