use std::sync::Arc;
use std::time::Instant;

use fete_models::{PartyPlanResponse, PartyRequest};
use tracing::{error, info, warn};

use crate::context::render_party_context;
use crate::duration::compute_duration;
use crate::error::AgentError;
use crate::llm::TextGenerator;
use crate::prompts::{director_system_prompt, domain_label};
use crate::specialist::Specialist;

/// The director turns a party request into a comprehensive plan: it fans out
/// to every specialist in parallel, then asks the generator to merge their
/// draft sections into one narrative.
pub struct Director {
    specialists: Vec<Arc<dyn Specialist>>,
    generator: Arc<dyn TextGenerator>,
}

impl Director {
    pub fn new(specialists: Vec<Arc<dyn Specialist>>, generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            specialists,
            generator,
        }
    }

    pub fn specialist_count(&self) -> usize {
        self.specialists.len()
    }

    /// Produce a plan for the request. Specialist failures degrade the plan;
    /// only validation failure or a failed merge call aborts the request.
    pub async fn plan(&self, request: &PartyRequest) -> Result<PartyPlanResponse, AgentError> {
        let start = Instant::now();
        validate_request(request)?;
        info!(occasion = %request.occasion, focus = %request.planning_focus, "Starting party plan");

        // Derive duration info when both times are present. Unparseable times
        // degrade the context, not the request.
        let duration = match (&request.start_time, &request.end_time) {
            (Some(s), Some(e)) => match compute_duration(s, e) {
                Ok(d) => Some(d),
                Err(err) => {
                    warn!(error = %err, "Skipping duration details");
                    None
                }
            },
            _ => None,
        };

        let context = render_party_context(request, duration.as_ref());

        // Fan-out to specialists in parallel.
        let mut handles = Vec::new();
        for specialist in &self.specialists {
            let spec = Arc::clone(specialist);
            let ctx = context.clone();
            handles.push(tokio::spawn(async move {
                let agent_start = Instant::now();
                let result = spec.generate(&ctx).await;
                (
                    spec.name().to_string(),
                    spec.domain().to_string(),
                    result,
                    agent_start.elapsed(),
                )
            }));
        }

        // Collect draft sections (graceful degradation).
        let mut sections: Vec<String> = Vec::new();
        for handle in handles {
            match handle.await {
                Ok((name, domain, Ok(text), elapsed)) => {
                    info!(specialist = %name, elapsed_ms = elapsed.as_millis(), "Specialist succeeded");
                    sections.push(format!("## {} draft\n{}", section_label(&domain), text));
                }
                Ok((name, domain, Err(e), elapsed)) => {
                    warn!(specialist = %name, error = %e, elapsed_ms = elapsed.as_millis(), "Specialist failed");
                    sections.push(format!(
                        "## {} draft\nError in {} planning: {e}",
                        section_label(&domain),
                        section_label(&domain),
                    ));
                }
                Err(e) => {
                    error!(error = %e, "Specialist task panicked");
                }
            }
        }

        let plan = self.merge(&context, &sections).await?;

        info!(
            occasion = %request.occasion,
            elapsed_ms = start.elapsed().as_millis(),
            "Party plan complete"
        );

        Ok(PartyPlanResponse::comprehensive(plan))
    }

    /// Merge the draft sections into the final plan. A failure here is fatal
    /// to the request.
    async fn merge(&self, context: &str, sections: &[String]) -> Result<String, AgentError> {
        let user_message = format!(
            "PARTY DETAILS\n{context}\n\nSPECIALIST DRAFTS\n\n{}",
            sections.join("\n\n")
        );

        self.generator
            .generate(&director_system_prompt(), &user_message)
            .await
    }
}

fn section_label(domain: &str) -> &str {
    domain_label(domain).unwrap_or(domain)
}

/// Check the semantic invariants the JSON schema cannot express: required
/// text fields are non-blank and guest_count, when given, is positive.
pub fn validate_request(request: &PartyRequest) -> Result<(), AgentError> {
    let mut problems: Vec<&str> = Vec::new();

    if request.occasion.trim().is_empty() {
        problems.push("occasion must not be empty");
    }
    if request.planning_focus.trim().is_empty() {
        problems.push("planning_focus must not be empty");
    }
    if request.guest_count == Some(0) {
        problems.push("guest_count must be positive");
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(AgentError::Validation(problems.join("; ")))
    }
}
