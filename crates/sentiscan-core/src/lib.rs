mod app_config;
mod config;
mod policy;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use policy::{
    AnalysisConfig, AnalysisVariant, CleanOptions, SentimentLabel, ThresholdPolicy,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
