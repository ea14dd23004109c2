use serde::{Deserialize, Serialize};

use crate::advisor::{profile_str, Profile};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowStep {
    pub step: u32,
    pub title: String,
    pub status: String,
    pub details: String,
}

/// Stub workflow generation: a single pending step, templated from the
/// profile's `target_country` when present.
pub fn generate_workflow_steps(profile: &Profile) -> Vec<WorkflowStep> {
    let country = profile_str(profile, "target_country", "target country");
    vec![WorkflowStep {
        step: 1,
        title: "Collect requirements".into(),
        status: "pending".into(),
        details: format!("Stub workflow for {country}."),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_profile_falls_back_to_default_country() {
        let steps = generate_workflow_steps(&Profile::new());
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].step, 1);
        assert_eq!(steps[0].status, "pending");
        assert_eq!(steps[0].details, "Stub workflow for target country.");
    }

    #[test]
    fn target_country_is_templated_into_details() {
        let mut profile = Profile::new();
        profile.insert("target_country".into(), json!("Germany"));
        let steps = generate_workflow_steps(&profile);
        assert_eq!(steps[0].details, "Stub workflow for Germany.");
    }

    #[test]
    fn non_string_target_country_uses_the_default() {
        let mut profile = Profile::new();
        profile.insert("target_country".into(), json!(42));
        let steps = generate_workflow_steps(&profile);
        assert_eq!(steps[0].details, "Stub workflow for target country.");
    }
}
