//! Advisory pipeline scaffolding. Every function here returns placeholder
//! data; the real retrieval, verification, workflow and recommendation
//! engines are not built yet, but callers can already code against these
//! shapes.

pub mod memory;
pub mod recommendation;
pub mod retrieval;
pub mod verification;
pub mod workflow;

pub use memory::SharedMemory;
pub use recommendation::{recommend_universities, UniversityPick};
pub use retrieval::{retrieve_documents, DocumentRecord};
pub use verification::{verify_information, VerificationReport};
pub use workflow::{generate_workflow_steps, WorkflowStep};

/// A student profile is free-form JSON; fields like `target_country` are
/// optional and substituted with defaults when absent.
pub type Profile = serde_json::Map<String, serde_json::Value>;

pub(crate) fn profile_str<'a>(profile: &'a Profile, key: &str, default: &'a str) -> &'a str {
    profile
        .get(key)
        .and_then(|v| v.as_str())
        .unwrap_or(default)
}
