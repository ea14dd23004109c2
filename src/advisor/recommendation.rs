use serde::{Deserialize, Serialize};

use crate::advisor::{profile_str, Profile};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UniversityPick {
    pub name: String,
    pub country: String,
    pub reason: String,
}

/// Stub recommendation: one sample entry in the profile's target country.
pub fn recommend_universities(profile: &Profile) -> Vec<UniversityPick> {
    let country = profile_str(profile, "target_country", "Unknown");
    vec![UniversityPick {
        name: "Sample University".into(),
        country: country.into(),
        reason: "Recommendation engine is currently a stub.".into(),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_country_defaults_to_unknown() {
        let picks = recommend_universities(&Profile::new());
        assert_eq!(picks.len(), 1);
        assert_eq!(picks[0].country, "Unknown");
    }

    #[test]
    fn uses_target_country_when_present() {
        let mut profile = Profile::new();
        profile.insert("target_country".into(), json!("Canada"));
        let picks = recommend_universities(&profile);
        assert_eq!(picks[0].name, "Sample University");
        assert_eq!(picks[0].country, "Canada");
    }
}
