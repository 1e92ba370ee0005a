//! Tracing subscriber setup
//!
//! Human-readable output always goes to stderr. When `LOG_LOCAL_ENABLED` is set,
//! JSON lines are also written to a rotating `userflow.log` in `LOG_LOCAL_PATH`.

use crate::config::LoggingConfig;
use crate::domain::{Result, UserflowError};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

const LOG_FILE_PREFIX: &str = "userflow.log";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Holds the background file writer; drop it to flush pending lines
pub struct LoggingGuard {
    _file_writer: Option<WorkerGuard>,
}

/// Install the global subscriber
///
/// `level` applies to this crate only; a `RUST_LOG` directive replaces it entirely.
///
/// # Errors
///
/// Returns [`UserflowError::Configuration`] for an unknown level, an unusable log
/// directory, or when a global subscriber is already installed.
pub fn init_logging(level: &str, config: &LoggingConfig) -> Result<LoggingGuard> {
    let filter = crate_filter(parse_log_level(level)?);

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_filter(filter.clone())
        .boxed();
    let mut layers: Vec<BoxedLayer> = vec![stderr_layer];

    let mut file_writer = None;
    if config.local_enabled {
        let (layer, guard) = json_file_layer(config, filter)?;
        layers.push(layer);
        file_writer = Some(guard);
    }

    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .map_err(|e| UserflowError::Configuration(format!("Failed to install logger: {e}")))?;

    tracing::debug!(
        file_logging = config.local_enabled,
        path = %config.local_path,
        rotation = %config.local_rotation,
        "Logging initialized"
    );

    Ok(LoggingGuard {
        _file_writer: file_writer,
    })
}

fn crate_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("userflow={level}")))
}

fn json_file_layer(config: &LoggingConfig, filter: EnvFilter) -> Result<(BoxedLayer, WorkerGuard)> {
    std::fs::create_dir_all(&config.local_path).map_err(|e| {
        UserflowError::Configuration(format!(
            "Cannot create log directory '{}': {e}",
            config.local_path
        ))
    })?;

    let appender = RollingFileAppender::new(
        rotation_for(&config.local_rotation),
        &config.local_path,
        LOG_FILE_PREFIX,
    );
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let layer = tracing_subscriber::fmt::layer()
        .json()
        .with_current_span(false)
        .with_writer(writer)
        .with_filter(filter)
        .boxed();

    Ok((layer, guard))
}

/// `hourly` rotates every hour; anything else rotates daily
fn rotation_for(name: &str) -> Rotation {
    if name == "hourly" {
        Rotation::HOURLY
    } else {
        Rotation::DAILY
    }
}

fn parse_log_level(level: &str) -> Result<Level> {
    level.trim().parse::<Level>().map_err(|_| {
        UserflowError::Configuration(format!(
            "Invalid log level '{level}', expected one of: trace, debug, info, warn, error"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("trace", Level::TRACE)]
    #[test_case("Debug", Level::DEBUG)]
    #[test_case("INFO", Level::INFO)]
    #[test_case(" warn ", Level::WARN)]
    #[test_case("error", Level::ERROR)]
    fn test_parse_log_level(input: &str, expected: Level) {
        assert_eq!(parse_log_level(input).unwrap(), expected);
    }

    #[test_case("verbose")]
    #[test_case("")]
    fn test_parse_log_level_rejects(input: &str) {
        assert!(matches!(
            parse_log_level(input),
            Err(UserflowError::Configuration(_))
        ));
    }

    #[test]
    fn test_rotation_for() {
        assert_eq!(rotation_for("hourly"), Rotation::HOURLY);
        assert_eq!(rotation_for("daily"), Rotation::DAILY);
    }

    #[test]
    fn test_unknown_level_fails_before_installing() {
        let result = init_logging("loud", &LoggingConfig::default());
        assert!(matches!(result, Err(UserflowError::Configuration(_))));
    }
}
