use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgentError {
    /// The request is missing or carries invalid required fields. Never retried.
    #[error("invalid request: {0}")]
    Validation(String),

    /// A time string could not be parsed. Recovered locally by the director,
    /// which proceeds without duration information.
    #[error("time format error: {0}")]
    Format(String),

    /// The generation service call failed.
    #[error("generation service error: {0}")]
    Service(String),

    /// The generation service did not answer in time.
    #[error("generation timed out after {0} seconds")]
    Timeout(u64),
}
