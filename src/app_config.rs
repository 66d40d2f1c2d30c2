use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Summarization/dispatch backend config
    #[serde(default)]
    pub backend: BackendConfig,

    /// Email dispatch config
    #[serde(default)]
    pub dispatch: DispatchConfig,

    /// Document export config
    #[serde(default)]
    pub export: ExportConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Backend service configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BackendConfig {
    /// Base URL of the backend exposing the summarize and send-email endpoints
    #[serde(default = "default_backend_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds, applied to both endpoints
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            endpoint: default_backend_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Shape of the send-email request body
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DispatchPayloadKind {
    // @variant: Legacy single-address body ({"toEmail": ...})
    Single,
    // @variant: Canonical list body ({"emails": [...]})
    #[default]
    Multi,
}

impl DispatchPayloadKind {
    // @returns: Lowercase variant identifier
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::Single => "single".to_string(),
            Self::Multi => "multi".to_string(),
        }
    }
}

// Implement Display trait for DispatchPayloadKind
impl std::fmt::Display for DispatchPayloadKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

// Implement FromStr trait for DispatchPayloadKind
impl std::str::FromStr for DispatchPayloadKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "single" => Ok(Self::Single),
            "multi" => Ok(Self::Multi),
            _ => Err(anyhow!("Invalid dispatch payload kind: {}", s)),
        }
    }
}

/// Email dispatch configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DispatchConfig {
    /// Request body shape preferred by the deployed backend
    #[serde(default)]
    pub payload: DispatchPayloadKind,

    /// Subject line used for dispatched summaries
    #[serde(default = "default_subject")]
    pub subject: String,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            payload: DispatchPayloadKind::default(),
            subject: default_subject(),
        }
    }
}

/// Document export configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ExportConfig {
    /// Brand name shown in the document header
    #[serde(default = "default_brand_name")]
    pub brand_name: String,

    /// Title label shown above the summary body
    #[serde(default = "default_title_label")]
    pub title_label: String,

    /// Footer line disclosing the generating product
    #[serde(default = "default_footer_text")]
    pub footer_text: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            brand_name: default_brand_name(),
            title_label: default_title_label(),
            footer_text: default_footer_text(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_backend_endpoint() -> String {
    "http://localhost:8080".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_subject() -> String {
    "Your AI Meeting Summary".to_string()
}

fn default_brand_name() -> String {
    "Acto".to_string()
}

fn default_title_label() -> String {
    "AI Summary".to_string()
}

fn default_footer_text() -> String {
    "Generated by Acto".to_string()
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.backend.endpoint.is_empty() {
            return Err(anyhow!("Backend endpoint must not be empty"));
        }
        if !self.backend.endpoint.starts_with("http://")
            && !self.backend.endpoint.starts_with("https://")
        {
            return Err(anyhow!(
                "Backend endpoint must start with http:// or https://: {}",
                self.backend.endpoint
            ));
        }
        if self.backend.timeout_secs == 0 {
            return Err(anyhow!("Backend timeout must be greater than zero"));
        }
        if self.dispatch.subject.trim().is_empty() {
            return Err(anyhow!("Dispatch subject must not be empty"));
        }
        if self.export.brand_name.trim().is_empty() {
            return Err(anyhow!("Export brand name must not be empty"));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            backend: BackendConfig::default(),
            dispatch: DispatchConfig::default(),
            export: ExportConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
