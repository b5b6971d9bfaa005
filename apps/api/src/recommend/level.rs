//! Education-level resolution: maps study level + stream to the catalog key
//! used to look up next-step courses.

use serde::{Deserialize, Serialize};

use crate::models::profile::UserProfile;
use crate::recommend::stream::StreamKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EducationLevelKey {
    #[serde(rename = "12th_science_pcm")]
    TwelfthSciencePcm,
    #[serde(rename = "12th_science_pcb")]
    TwelfthSciencePcb,
    #[serde(rename = "12th_commerce")]
    TwelfthCommerce,
    #[serde(rename = "12th_arts")]
    TwelfthArts,
    #[serde(rename = "diploma_cs")]
    DiplomaCs,
    #[serde(rename = "diploma_engineering")]
    DiplomaEngineering,
    #[serde(rename = "ug_cs")]
    UgCs,
    #[serde(rename = "ug_medical")]
    UgMedical,
    #[serde(rename = "ug_commerce")]
    UgCommerce,
    #[serde(rename = "ug_arts")]
    UgArts,
    #[serde(rename = "ug_science")]
    UgScience,
}

impl EducationLevelKey {
    #[cfg(test)]
    pub const ALL: [EducationLevelKey; 11] = [
        EducationLevelKey::TwelfthSciencePcm,
        EducationLevelKey::TwelfthSciencePcb,
        EducationLevelKey::TwelfthCommerce,
        EducationLevelKey::TwelfthArts,
        EducationLevelKey::DiplomaCs,
        EducationLevelKey::DiplomaEngineering,
        EducationLevelKey::UgCs,
        EducationLevelKey::UgMedical,
        EducationLevelKey::UgCommerce,
        EducationLevelKey::UgArts,
        EducationLevelKey::UgScience,
    ];

    /// Human-readable stage name, used in course match reasons.
    pub fn stage_label(self) -> &'static str {
        match self {
            EducationLevelKey::TwelfthSciencePcm | EducationLevelKey::TwelfthSciencePcb => {
                "Class 12 Science"
            }
            EducationLevelKey::TwelfthCommerce => "Class 12 Commerce",
            EducationLevelKey::TwelfthArts => "Class 12 Arts",
            EducationLevelKey::DiplomaCs | EducationLevelKey::DiplomaEngineering => "your diploma",
            EducationLevelKey::UgCs
            | EducationLevelKey::UgMedical
            | EducationLevelKey::UgCommerce
            | EducationLevelKey::UgArts
            | EducationLevelKey::UgScience => "your degree",
        }
    }
}

const TWELFTH_MARKERS: &[&str] = &["12", "intermediate", "hsc"];
const DIPLOMA_MARKERS: &[&str] = &["diploma"];
const UG_MARKERS: &[&str] = &["ug", "undergraduate", "bachelor"];
const UG_COURSE_HINTS: &[&str] = &["b.tech", "bca", "bsc", "b.sc", "bcom", "b.com"];
const PG_MARKERS: &[&str] = &["pg", "postgraduate", "master"];
const TENTH_MARKERS: &[&str] = &["10"];
const BIOLOGY_MARKERS: &[&str] = &["pcb", "biology"];

/// Inputs the resolver rules read, lower-cased once.
struct LevelSignals {
    level: String,
    course: String,
    subjects: String,
    stream: StreamKey,
}

type LevelRule = fn(&LevelSignals) -> Option<EducationLevelKey>;

/// First rule to return a key wins.
const LEVEL_RULES: &[LevelRule] = &[
    twelfth_grade,
    diploma,
    undergraduate,
    postgraduate,
    tenth_grade,
];

/// Resolves the catalog key. Total: falls back to `12th_science_pcm`.
pub fn resolve_level_key(profile: &UserProfile, stream: StreamKey) -> EducationLevelKey {
    let course = profile.current_course.to_lowercase();
    let signals = LevelSignals {
        level: profile.level_text(),
        subjects: format!("{} {} {}", course, profile.study_area.to_lowercase(), profile.level_text()),
        course,
        stream,
    };

    LEVEL_RULES
        .iter()
        .find_map(|rule| rule(&signals))
        .unwrap_or(EducationLevelKey::TwelfthSciencePcm)
}

fn contains_any(text: &str, markers: &[&str]) -> bool {
    markers.iter().any(|m| text.contains(m))
}

fn twelfth_grade(s: &LevelSignals) -> Option<EducationLevelKey> {
    if !contains_any(&s.level, TWELFTH_MARKERS) {
        return None;
    }
    Some(match s.stream {
        StreamKey::Medical => EducationLevelKey::TwelfthSciencePcb,
        StreamKey::Commerce => EducationLevelKey::TwelfthCommerce,
        StreamKey::Arts => EducationLevelKey::TwelfthArts,
        StreamKey::Science if contains_any(&s.subjects, BIOLOGY_MARKERS) => {
            EducationLevelKey::TwelfthSciencePcb
        }
        StreamKey::ComputerScience | StreamKey::Engineering | StreamKey::Science => {
            EducationLevelKey::TwelfthSciencePcm
        }
    })
}

fn diploma(s: &LevelSignals) -> Option<EducationLevelKey> {
    if !contains_any(&s.level, DIPLOMA_MARKERS) {
        return None;
    }
    Some(match s.stream {
        StreamKey::ComputerScience => EducationLevelKey::DiplomaCs,
        _ => EducationLevelKey::DiplomaEngineering,
    })
}

fn undergraduate(s: &LevelSignals) -> Option<EducationLevelKey> {
    if !contains_any(&s.level, UG_MARKERS) && !contains_any(&s.course, UG_COURSE_HINTS) {
        return None;
    }
    Some(match s.stream {
        StreamKey::ComputerScience => EducationLevelKey::UgCs,
        StreamKey::Medical => EducationLevelKey::UgMedical,
        StreamKey::Commerce => EducationLevelKey::UgCommerce,
        StreamKey::Arts => EducationLevelKey::UgArts,
        StreamKey::Science | StreamKey::Engineering => EducationLevelKey::UgScience,
    })
}

/// Postgraduates share the UG science catalog regardless of stream.
fn postgraduate(s: &LevelSignals) -> Option<EducationLevelKey> {
    contains_any(&s.level, PG_MARKERS).then_some(EducationLevelKey::UgScience)
}

/// Class 10 students are treated as heading into 12th science.
fn tenth_grade(s: &LevelSignals) -> Option<EducationLevelKey> {
    contains_any(&s.level, TENTH_MARKERS).then_some(EducationLevelKey::TwelfthSciencePcm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::EducationLevelKey::*;

    fn profile_at(level: &str) -> UserProfile {
        UserProfile {
            current_study_level: level.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_every_level_stream_pair() {
        use crate::recommend::stream::StreamKey::*;
        // Columns follow StreamKey::ALL:
        // ComputerScience, Medical, Commerce, Arts, Science, Engineering
        let table: &[(&str, [EducationLevelKey; 6])] = &[
            (
                "Class 12",
                [
                    TwelfthSciencePcm,
                    TwelfthSciencePcb,
                    TwelfthCommerce,
                    TwelfthArts,
                    TwelfthSciencePcm,
                    TwelfthSciencePcm,
                ],
            ),
            (
                "Diploma 2nd year",
                [
                    DiplomaCs,
                    DiplomaEngineering,
                    DiplomaEngineering,
                    DiplomaEngineering,
                    DiplomaEngineering,
                    DiplomaEngineering,
                ],
            ),
            (
                "UG 2nd year",
                [UgCs, UgMedical, UgCommerce, UgArts, UgScience, UgScience],
            ),
            (
                "Postgraduate",
                [UgScience, UgScience, UgScience, UgScience, UgScience, UgScience],
            ),
            (
                "Class 10",
                [
                    TwelfthSciencePcm,
                    TwelfthSciencePcm,
                    TwelfthSciencePcm,
                    TwelfthSciencePcm,
                    TwelfthSciencePcm,
                    TwelfthSciencePcm,
                ],
            ),
            (
                "",
                [
                    TwelfthSciencePcm,
                    TwelfthSciencePcm,
                    TwelfthSciencePcm,
                    TwelfthSciencePcm,
                    TwelfthSciencePcm,
                    TwelfthSciencePcm,
                ],
            ),
        ];

        let streams = [ComputerScience, Medical, Commerce, Arts, Science, Engineering];
        for (level, expected_row) in table {
            for (stream, expected) in streams.iter().zip(expected_row.iter()) {
                assert_eq!(
                    resolve_level_key(&profile_at(level), *stream),
                    *expected,
                    "level '{level}', stream {stream:?}"
                );
            }
        }
    }

    #[test]
    fn test_ug_engineering_resolves_to_ug_science() {
        let profile = UserProfile {
            current_study_level: "UG 2nd year".to_string(),
            study_area: "Science".to_string(),
            ..Default::default()
        };
        assert_eq!(resolve_level_key(&profile, StreamKey::Engineering), UgScience);
        assert_eq!(resolve_level_key(&profile, StreamKey::ComputerScience), UgCs);
    }

    #[test]
    fn test_class_level_field_also_read() {
        let profile = UserProfile {
            class_level: "HSC".to_string(),
            ..Default::default()
        };
        assert_eq!(
            resolve_level_key(&profile, StreamKey::Commerce),
            TwelfthCommerce
        );
    }

    #[test]
    fn test_twelfth_science_with_biology_is_pcb() {
        let profile = UserProfile {
            current_study_level: "Intermediate".to_string(),
            study_area: "Science - PCB".to_string(),
            ..Default::default()
        };
        assert_eq!(resolve_level_key(&profile, StreamKey::Science), TwelfthSciencePcb);
    }

    #[test]
    fn test_course_hint_implies_undergraduate() {
        let profile = UserProfile {
            current_course: "BCA".to_string(),
            ..Default::default()
        };
        assert_eq!(resolve_level_key(&profile, StreamKey::ComputerScience), UgCs);
    }

    #[test]
    fn test_level_key_wire_names() {
        assert_eq!(
            serde_json::to_string(&TwelfthSciencePcm).unwrap(),
            "\"12th_science_pcm\""
        );
        assert_eq!(serde_json::to_string(&UgCs).unwrap(), "\"ug_cs\"");
    }
}
