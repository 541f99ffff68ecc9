use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::error::AgentError;

/// The external text-generation capability. Opaque: callers must not assume
/// determinism, latency bounds, or output shape.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, system_prompt: &str, user_message: &str)
        -> Result<String, AgentError>;
}

/// Configuration for a single generation call.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub model: String,
    pub timeout: Duration,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            model: "claude-3-5-haiku-latest".to_string(),
            timeout: Duration::from_secs(45),
        }
    }
}

/// Production generator backed by the `claude` CLI.
pub struct ClaudeCli {
    pub config: GeneratorConfig,
}

impl ClaudeCli {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl TextGenerator for ClaudeCli {
    async fn generate(
        &self,
        system_prompt: &str,
        user_message: &str,
    ) -> Result<String, AgentError> {
        debug!(model = %self.config.model, "Invoking claude CLI");

        let result = tokio::time::timeout(self.config.timeout, async {
            Command::new("claude")
                .args([
                    "-p",
                    user_message,
                    "--system-prompt",
                    system_prompt,
                    "--model",
                    &self.config.model,
                    "--output-format",
                    "text",
                ])
                .output()
                .await
        })
        .await
        .map_err(|_| AgentError::Timeout(self.config.timeout.as_secs()))?
        .map_err(|e| AgentError::Service(format!("Failed to spawn claude: {e}")))?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            warn!(status = %result.status, stderr = %stderr, "Claude CLI failed");
            return Err(AgentError::Service(format!(
                "claude exited {}: {}",
                result.status, stderr
            )));
        }

        let stdout = String::from_utf8_lossy(&result.stdout).to_string();
        if stdout.trim().is_empty() {
            return Err(AgentError::Service(
                "Claude returned empty response".to_string(),
            ));
        }

        Ok(stdout)
    }
}

/// Check if the `claude` CLI is available on the system.
pub async fn check_cli_available() -> bool {
    match Command::new("claude").arg("--version").output().await {
        Ok(output) => output.status.success(),
        Err(_) => false,
    }
}
