use serde::{Deserialize, Serialize};

/// Main configuration structure for adjutant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Language model gateway configuration
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// Refinement evaluation configuration
    #[serde(default)]
    pub evaluation: EvaluationConfig,

    /// Workflow configuration
    #[serde(default)]
    pub workflow: WorkflowConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Language model gateway configuration.
///
/// The API key is resolved config-first with an `OPENAI_API_KEY` environment
/// fallback; it is held by the gateway client alone and never logged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct GatewayConfig {
    /// Gateway provider: openai or mock
    #[serde(default = "default_provider")]
    pub provider: String,

    /// API key; falls back to the `OPENAI_API_KEY` environment variable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Base URL for the OpenAI-compatible API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Chat completion model
    #[serde(default = "default_completion_model")]
    pub completion_model: String,

    /// Embedding model
    #[serde(default = "default_embedding_model")]
    pub embedding_model: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_provider() -> String {
    "openai".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_completion_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_embedding_model() -> String {
    "text-embedding-3-large".to_string()
}

const fn default_timeout_secs() -> u64 {
    120
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            api_key: None,
            base_url: default_base_url(),
            completion_model: default_completion_model(),
            embedding_model: default_embedding_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl GatewayConfig {
    /// Resolve the API key from config or environment.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var("OPENAI_API_KEY").ok())
    }
}

/// Refinement evaluation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct EvaluationConfig {
    /// Maximum generate/judge rounds per evaluation (>= 1)
    #[serde(default = "default_max_interactions")]
    pub max_interactions: u32,
}

const fn default_max_interactions() -> u32 {
    10
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            max_interactions: default_max_interactions(),
        }
    }
}

/// Workflow configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct WorkflowConfig {
    /// Knowledge payload for the action planner; the built-in
    /// product-planning knowledge is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planner_knowledge: Option<String>,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}
