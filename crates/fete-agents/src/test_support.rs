//! Test support: mock generators and specialists for exercising the director
//! without the `claude` CLI.

use async_trait::async_trait;

use crate::error::AgentError;
use crate::llm::TextGenerator;
use crate::specialist::Specialist;

/// Canned-behavior generator.
pub struct MockGenerator {
    reply: Option<String>,
    echo: bool,
}

impl MockGenerator {
    /// Always returns the given text.
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            echo: false,
        }
    }

    /// Returns the user message verbatim, so tests can assert on what the
    /// director actually sent.
    pub fn echoing() -> Self {
        Self {
            reply: None,
            echo: true,
        }
    }

    /// Always fails with a service error.
    pub fn failing() -> Self {
        Self {
            reply: None,
            echo: false,
        }
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(
        &self,
        _system_prompt: &str,
        user_message: &str,
    ) -> Result<String, AgentError> {
        if self.echo {
            return Ok(user_message.to_string());
        }
        match &self.reply {
            Some(reply) => Ok(reply.clone()),
            None => Err(AgentError::Service("mock generator failure".to_string())),
        }
    }
}

/// Canned-behavior specialist. A `None` reply simulates a failed generation
/// call so degradation paths can be tested.
pub struct MockSpecialist {
    pub name: String,
    pub domain: String,
    reply: Option<String>,
}

impl MockSpecialist {
    pub fn replying(name: &str, domain: &str, reply: &str) -> Self {
        Self {
            name: name.to_string(),
            domain: domain.to_string(),
            reply: Some(reply.to_string()),
        }
    }

    pub fn failing(name: &str, domain: &str) -> Self {
        Self {
            name: name.to_string(),
            domain: domain.to_string(),
            reply: None,
        }
    }
}

#[async_trait]
impl Specialist for MockSpecialist {
    fn name(&self) -> &str {
        &self.name
    }

    fn domain(&self) -> &str {
        &self.domain
    }

    async fn generate(&self, _context: &str) -> Result<String, AgentError> {
        match &self.reply {
            Some(reply) => Ok(reply.clone()),
            None => Err(AgentError::Service("mock specialist failure".to_string())),
        }
    }
}
