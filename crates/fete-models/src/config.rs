use serde::{Deserialize, Serialize};

/// Top-level configuration for the fete server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FeteConfig {
    pub server: ServerConfig,
    pub agents: AgentsConfig,
}

/// Configuration for the HTTP layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    /// Address the HTTP server binds to.
    pub bind_addr: String,
    /// Origins allowed by the CORS layer (the frontend dev server by default).
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8000".to_string(),
            allowed_origins: vec!["http://localhost:3000".to_string()],
        }
    }
}

/// Configuration for the planning agents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgentsConfig {
    /// Timeout for the final merge call in seconds.
    pub total_timeout_seconds: u64,
    /// Per-specialist generation timeout in seconds.
    pub specialist_timeout_seconds: u64,
    /// Model used by the director for the final merge.
    pub director_model: String,
    /// Default model for specialist generation.
    pub specialist_model: String,
    /// The specialist roster.
    pub specialists: Vec<SpecialistConfig>,
}

impl Default for AgentsConfig {
    fn default() -> Self {
        Self {
            total_timeout_seconds: 120,
            specialist_timeout_seconds: 45,
            director_model: "claude-sonnet-4-5-20250929".to_string(),
            specialist_model: "claude-3-5-haiku-latest".to_string(),
            specialists: vec![
                SpecialistConfig {
                    name: "food_drink".to_string(),
                    domain: "food".to_string(),
                    model: None,
                    enabled: true,
                },
                SpecialistConfig {
                    name: "theme_decoration".to_string(),
                    domain: "theme".to_string(),
                    model: None,
                    enabled: true,
                },
                SpecialistConfig {
                    name: "activity_entertainment".to_string(),
                    domain: "activity".to_string(),
                    model: None,
                    enabled: true,
                },
            ],
        }
    }
}

/// Configuration for a single specialist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpecialistConfig {
    pub name: String,
    pub domain: String,
    /// Override model for this specialist. Falls back to `AgentsConfig::specialist_model`.
    pub model: Option<String>,
    pub enabled: bool,
}
