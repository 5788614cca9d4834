use std::net::SocketAddr;

use crate::policy::{AnalysisConfig, AnalysisVariant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Preset the overrides below were applied on top of.
    pub variant: AnalysisVariant,
    /// Default analysis settings for callers that do not pass their own.
    pub analysis: AnalysisConfig,
    /// Name of the required text column in uploaded tables.
    pub text_column: String,
    pub preview_rows: usize,
    pub max_upload_bytes: usize,
}
