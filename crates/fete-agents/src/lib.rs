pub mod context;
pub mod director;
pub mod duration;
pub mod error;
pub mod llm;
pub mod prompts;
pub mod specialist;

pub mod test_support;

pub use director::{validate_request, Director};
pub use duration::{compute_duration, PartyDuration};
pub use error::AgentError;
pub use llm::{check_cli_available, ClaudeCli, GeneratorConfig, TextGenerator};
pub use specialist::{PromptSpecialist, Specialist};
