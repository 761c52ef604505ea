use std::env;
use std::fmt;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for scoring front ends.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    pub environment: AppEnvironment,
    pub scoring: ScoringSettings,
    pub telemetry: TelemetryConfig,
}

impl ScoringConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("SCORING_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let content_seed = match env::var("SCORING_CONTENT_SEED") {
            Ok(raw) if !raw.trim().is_empty() => Some(
                raw.trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidSeed { value: raw })?,
            ),
            _ => None,
        };

        let require_complete = match env::var("SCORING_REQUIRE_COMPLETE") {
            Ok(raw) => parse_flag("SCORING_REQUIRE_COMPLETE", &raw)?,
            Err(_) => true,
        };

        let log_level = env::var("SCORING_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let log_format = match env::var("SCORING_LOG_FORMAT") {
            Ok(raw) if !raw.trim().is_empty() => LogFormat::parse(&raw)?,
            _ => LogFormat::for_environment(environment),
        };

        Ok(Self {
            environment,
            scoring: ScoringSettings {
                content_seed,
                require_complete,
            },
            telemetry: TelemetryConfig {
                log_level,
                format: log_format,
                ansi: environment == AppEnvironment::Development,
            },
        })
    }
}

fn parse_flag(name: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            name,
            value: raw.to_string(),
        }),
    }
}

/// Knobs for the scoring service and the placeholder content assessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringSettings {
    /// Seed for the simulated content assessment; `None` draws from entropy.
    pub content_seed: Option<u64>,
    /// Refuse to score applications lacking a grade or a motivation letter.
    pub require_complete: bool,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            content_seed: None,
            require_complete: true,
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub format: LogFormat,
    /// Colour the compact output; only enabled for local development.
    pub ansi: bool,
}

/// Shape of the log lines written to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    /// One JSON object per event, for log shippers in production.
    Json,
}

impl LogFormat {
    pub fn for_environment(environment: AppEnvironment) -> Self {
        match environment {
            AppEnvironment::Production => Self::Json,
            AppEnvironment::Development | AppEnvironment::Test => Self::Compact,
        }
    }

    fn parse(raw: &str) -> Result<Self, ConfigError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "compact" | "text" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidLogFormat {
                value: raw.to_string(),
            }),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidSeed { value: String },
    InvalidFlag { name: &'static str, value: String },
    InvalidLogFormat { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSeed { value } => {
                write!(f, "SCORING_CONTENT_SEED must be a valid u64 (found '{value}')")
            }
            ConfigError::InvalidFlag { name, value } => {
                write!(f, "{name} must be true or false (found '{value}')")
            }
            ConfigError::InvalidLogFormat { value } => {
                write!(f, "SCORING_LOG_FORMAT must be compact or json (found '{value}')")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
