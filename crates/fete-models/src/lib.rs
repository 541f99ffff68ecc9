pub mod config;
pub mod party_plan;
pub mod party_request;

pub use config::{AgentsConfig, FeteConfig, ServerConfig, SpecialistConfig};
pub use party_plan::{PartyPlanResponse, SPECIALIST_COMPREHENSIVE};
pub use party_request::{GuestAges, Location, PartyRequest, TimeOfDay};
