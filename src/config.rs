use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub ranking: RankingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RankingSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
    #[serde(default = "default_limit")]
    pub default_limit: usize,
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            weights: WeightsConfig::default(),
            default_limit: default_limit(),
            max_limit: default_max_limit(),
        }
    }
}

fn default_limit() -> usize { 20 }
fn default_max_limit() -> usize { 1000 }

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_skill_weight")]
    pub skill: f64,
    #[serde(default = "default_experience_weight")]
    pub experience: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            skill: default_skill_weight(),
            experience: default_experience_weight(),
        }
    }
}

fn default_skill_weight() -> f64 { 0.6 }
fn default_experience_weight() -> f64 { 0.4 }

impl WeightsConfig {
    /// Reject weights that would poison every composite score
    pub fn check(&self) -> Result<(), ConfigError> {
        for (name, value) in [("skill", self.skill), ("experience", self.experience)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Message(format!(
                    "ranking.weights.{} must be a finite non-negative number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            skill: config.skill,
            experience: config.experience,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

/// Output style of the log subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
    Compact,
}

impl LoggingSettings {
    /// Unknown formats fall back to compact
    pub fn log_format(&self) -> LogFormat {
        match self.format.to_lowercase().as_str() {
            "json" => LogFormat::Json,
            "pretty" => LogFormat::Pretty,
            _ => LogFormat::Compact,
        }
    }
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with TASKIFY__)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., TASKIFY__RANKING__WEIGHTS__SKILL -> ranking.weights.skill
            .add_source(environment())
            .build()?;

        Self::from_config(settings)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        Self::from_config(settings)
    }

    fn from_config(config: Config) -> Result<Self, ConfigError> {
        let settings: Self = config.try_deserialize()?;
        settings.ranking.weights.check()?;
        Ok(settings)
    }

    /// Weights the ranker should use
    pub fn scoring_weights(&self) -> ScoringWeights {
        ScoringWeights::from(&self.ranking.weights)
    }
}

fn environment() -> Environment {
    Environment::with_prefix("TASKIFY")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
