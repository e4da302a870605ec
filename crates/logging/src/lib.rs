//! helpers for logging.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directives in `env_logger` syntax, e.g. `"info,sightline_physics=trace"`.
    ///
    /// `RUST_LOG` wins if it is set.
    pub filter: String,
    /// Include a UTC timestamp in every line.
    pub timestamps: bool,
    /// Write through the test harness's captured output instead of straight to stderr, so that logs only show for
    /// failing tests.
    pub capture_for_tests: bool,
}

impl Default for LogConfig {
    fn default() -> LogConfig {
        LogConfig {
            filter: "info".into(),
            timestamps: true,
            capture_for_tests: false,
        }
    }
}

impl LogConfig {
    /// The configuration tests should log with.
    pub fn for_tests() -> LogConfig {
        LogConfig {
            filter: "debug".into(),
            capture_for_tests: true,
            ..Default::default()
        }
    }
}

/// Log to stderr.
///
/// If called multiple times in the same process, only the first call applies.
pub fn log_to_stderr(config: &LogConfig) {
    static ONCE: std::sync::Once = std::sync::Once::new();

    ONCE.call_once(|| {
        let env = env_logger::Env::default().default_filter_or(config.filter.as_str());
        let timestamps = config.timestamps;
        let capture = config.capture_for_tests;

        env_logger::Builder::from_env(env)
            .format(move |buf, record| {
                use std::io::Write;

                if timestamps {
                    writeln!(
                        buf,
                        "{} {} time={} target={}",
                        record.level(),
                        record.args(),
                        time::OffsetDateTime::now_utc(),
                        record.target()
                    )
                } else {
                    writeln!(
                        buf,
                        "{} {} target={}",
                        record.level(),
                        record.args(),
                        record.target()
                    )
                }
            })
            .is_test(capture)
            .try_init()
            .unwrap_or_else(|e| eprintln!("Unable to install logger: {}", e));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config() {
        let config: LogConfig = serde_json::from_str(r#"{"filter": "debug"}"#).unwrap();
        assert_eq!(
            config,
            LogConfig {
                filter: "debug".into(),
                timestamps: true,
                capture_for_tests: false,
            }
        );
    }

    #[test]
    fn test_for_tests_captures() {
        let config: LogConfig = serde_json::from_str(r#"{"capture_for_tests": true, "filter": "debug"}"#).unwrap();
        assert_eq!(config, LogConfig::for_tests());
    }

    #[test]
    fn test_install_twice() {
        log_to_stderr(&LogConfig::for_tests());
        log_to_stderr(&LogConfig {
            filter: "trace".into(),
            timestamps: false,
            capture_for_tests: false,
        });
        log::info!("Logging is up");
    }
}
