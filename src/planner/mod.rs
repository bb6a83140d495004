pub mod config;
pub mod draws;
pub mod engine;
pub mod selector;

pub use config::PlanConfig;
pub use draws::DrawSource;
pub use engine::{generate_plan, AutoAccept, ProposalResponse, ProposalReview, UsageCounters};
pub use selector::{eligible_candidates, select};
