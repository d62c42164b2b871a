//! Terminal logging for harnesses, benchmarks and tests.
//!
//! The library itself only emits through the `log` facade: `debug!` per solve,
//! generated matrix and persisted file, `trace!` per CG iteration, `warn!`
//! when CG stops on its iteration cap.

use log::{LevelFilter, SetLoggerError};
use simplelog::{Color, ColorChoice, ConfigBuilder, Level, TermLogger, TerminalMode};

/// Environment variable read by [`init_from_env`].
pub const LOG_ENV: &str = "LINSOLVE_LOG";

/// Install a terminal logger at level `l`.
///
/// Fails if a logger is already installed.
pub fn init_simple_logger(l: LevelFilter) -> Result<(), SetLoggerError> {
    let config = ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .set_level_color(Level::Trace, Some(Color::Green))
        .build();

    TermLogger::init(l, config, TerminalMode::Mixed, ColorChoice::Auto)
}

/// Install a terminal logger at the level named by `LINSOLVE_LOG`
/// (`off`, `error`, `warn`, `info`, `debug`, `trace`), `warn` if unset or
/// unparsable.
pub fn init_from_env() -> Result<(), SetLoggerError> {
    init_simple_logger(level_from(std::env::var(LOG_ENV).ok().as_deref()))
}

fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_parsing() {
        assert_eq!(level_from(Some("debug")), LevelFilter::Debug);
        assert_eq!(level_from(Some(" TRACE ")), LevelFilter::Trace);
        assert_eq!(level_from(Some("loud")), LevelFilter::Warn);
        assert_eq!(level_from(None), LevelFilter::Warn);
    }
}
