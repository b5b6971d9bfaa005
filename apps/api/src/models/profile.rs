use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Treats an explicit JSON `null` the same as an absent field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// The five aptitude dimensions measured by the quiz, in their fixed
/// tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AptitudeKind {
    Logical,
    Numerical,
    Technical,
    Verbal,
    Creative,
}

impl AptitudeKind {
    pub const ALL: [AptitudeKind; 5] = [
        AptitudeKind::Logical,
        AptitudeKind::Numerical,
        AptitudeKind::Technical,
        AptitudeKind::Verbal,
        AptitudeKind::Creative,
    ];

    /// Wire name of the sub-score field.
    pub fn key(self) -> &'static str {
        match self {
            AptitudeKind::Logical => "logical",
            AptitudeKind::Numerical => "numerical",
            AptitudeKind::Technical => "technical",
            AptitudeKind::Verbal => "verbal",
            AptitudeKind::Creative => "creative",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AptitudeKind::Logical => "Logical Reasoning",
            AptitudeKind::Numerical => "Numerical Ability",
            AptitudeKind::Technical => "Technical Aptitude",
            AptitudeKind::Verbal => "Verbal Ability",
            AptitudeKind::Creative => "Creative Thinking",
        }
    }
}

/// Aptitude sub-scores in [0, 100]. Absent or null values are 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AptitudeScores {
    #[serde(default, alias = "logical_reasoning", deserialize_with = "null_as_default")]
    pub logical: f64,
    #[serde(default, alias = "numerical_ability", deserialize_with = "null_as_default")]
    pub numerical: f64,
    #[serde(default, alias = "technical_skills", deserialize_with = "null_as_default")]
    pub technical: f64,
    #[serde(default, alias = "verbal_ability", deserialize_with = "null_as_default")]
    pub verbal: f64,
    #[serde(default, alias = "creativity", deserialize_with = "null_as_default")]
    pub creative: f64,
}

impl AptitudeScores {
    pub fn get(&self, kind: AptitudeKind) -> f64 {
        match kind {
            AptitudeKind::Logical => self.logical,
            AptitudeKind::Numerical => self.numerical,
            AptitudeKind::Technical => self.technical,
            AptitudeKind::Verbal => self.verbal,
            AptitudeKind::Creative => self.creative,
        }
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        AptitudeKind::ALL.iter().all(|k| self.get(*k) == 0.0)
    }
}

/// Snapshot of a student's profile, read-only for one scoring pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub current_course: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub study_area: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub current_study_level: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub class_level: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub target_course_interest: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub interests: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub preferred_state: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub preferred_district: String,
    #[serde(default, alias = "aptitude_scores", deserialize_with = "null_as_default")]
    pub aptitude: AptitudeScores,
    #[serde(default)]
    pub overall_score: Option<f64>,
}

impl UserProfile {
    /// Preferred state and district, skipping blanks.
    pub fn preferred_locations(&self) -> Vec<&str> {
        [self.preferred_state.trim(), self.preferred_district.trim()]
            .into_iter()
            .filter(|l| !l.is_empty())
            .collect()
    }

    /// Lower-cased study level and class level, space-joined.
    pub fn level_text(&self) -> String {
        format!("{} {}", self.current_study_level, self.class_level).to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_and_null_fields_default_to_neutral() {
        let profile: UserProfile = serde_json::from_value(json!({
            "current_course": null,
            "interests": null,
            "aptitude": { "logical": 70, "verbal": null }
        }))
        .unwrap();

        assert_eq!(profile.current_course, "");
        assert!(profile.interests.is_empty());
        assert_eq!(profile.aptitude.logical, 70.0);
        assert_eq!(profile.aptitude.verbal, 0.0);
        assert_eq!(profile.aptitude.creative, 0.0);
    }

    #[test]
    fn test_aptitude_aliases_accepted() {
        let profile: UserProfile = serde_json::from_value(json!({
            "aptitude_scores": {
                "logical_reasoning": 60,
                "numerical_ability": 50,
                "technical_skills": 80,
                "verbal_ability": 40,
                "creativity": 30
            }
        }))
        .unwrap();

        assert_eq!(profile.aptitude.technical, 80.0);
        assert_eq!(profile.aptitude.creative, 30.0);
        assert_eq!(profile.aptitude.logical, 60.0);
    }

    #[test]
    fn test_preferred_locations_skip_blanks() {
        let profile = UserProfile {
            preferred_state: "Bihar".to_string(),
            preferred_district: "  ".to_string(),
            ..Default::default()
        };
        assert_eq!(profile.preferred_locations(), vec!["Bihar"]);
    }

    #[test]
    fn test_empty_aptitude_detected() {
        assert!(AptitudeScores::default().is_empty());
        let some = AptitudeScores {
            verbal: 10.0,
            ..Default::default()
        };
        assert!(!some.is_empty());
    }
}
