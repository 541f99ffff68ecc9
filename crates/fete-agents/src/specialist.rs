use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AgentError;
use crate::llm::TextGenerator;
use crate::prompts::get_specialist_prompt;

/// Trait for specialist planners. Mockable for testing.
#[async_trait]
pub trait Specialist: Send + Sync {
    fn name(&self) -> &str;
    fn domain(&self) -> &str;

    /// Generate this specialist's draft section for the given party context.
    /// Errors are folded into a degraded section by the director, never
    /// propagated as request failures.
    async fn generate(&self, context: &str) -> Result<String, AgentError>;
}

/// A specialist that pairs a fixed role prompt with the shared generator.
pub struct PromptSpecialist {
    pub name: String,
    pub domain: String,
    generator: Arc<dyn TextGenerator>,
}

impl PromptSpecialist {
    pub fn new(name: String, domain: String, generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            name,
            domain,
            generator,
        }
    }
}

#[async_trait]
impl Specialist for PromptSpecialist {
    fn name(&self) -> &str {
        &self.name
    }

    fn domain(&self) -> &str {
        &self.domain
    }

    async fn generate(&self, context: &str) -> Result<String, AgentError> {
        let system_prompt = get_specialist_prompt(&self.domain).ok_or_else(|| {
            AgentError::Service(format!("No system prompt for domain: {}", self.domain))
        })?;

        self.generator.generate(&system_prompt, context).await
    }
}
