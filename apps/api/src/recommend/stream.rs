//! Stream classification: infers a student's academic stream from free-text
//! profile fields.
//!
//! The classifier is an ordered chain of steps; the first step that returns a
//! stream wins. Each step is a plain function so its rule can be tested alone.

use serde::{Deserialize, Serialize};

use crate::models::profile::UserProfile;
use crate::recommend::reference::COURSE_STREAM_RULES;

/// Technical or numerical aptitude at or above this routes a science student
/// to Engineering.
const ENGINEERING_APTITUDE_THRESHOLD: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreamKey {
    #[serde(alias = "Computer Science")]
    ComputerScience,
    #[serde(alias = "Medical")]
    Medical,
    #[serde(alias = "Commerce")]
    Commerce,
    #[serde(alias = "Arts")]
    Arts,
    #[serde(alias = "Science")]
    Science,
    #[serde(alias = "Engineering")]
    Engineering,
}

impl StreamKey {
    #[cfg(test)]
    pub const ALL: [StreamKey; 6] = [
        StreamKey::ComputerScience,
        StreamKey::Medical,
        StreamKey::Commerce,
        StreamKey::Arts,
        StreamKey::Science,
        StreamKey::Engineering,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StreamKey::ComputerScience => "Computer Science",
            StreamKey::Medical => "Medical",
            StreamKey::Commerce => "Commerce",
            StreamKey::Arts => "Arts",
            StreamKey::Science => "Science",
            StreamKey::Engineering => "Engineering",
        }
    }
}

type ClassifierStep = fn(&UserProfile) -> Option<StreamKey>;

/// Evaluated in order: current course, then study area, then course interests.
const CLASSIFIER_CHAIN: &[ClassifierStep] =
    &[from_current_course, from_study_area, from_target_interests];

/// Infers the student's stream. Total: falls back to `Science`.
pub fn classify_stream(profile: &UserProfile) -> StreamKey {
    CLASSIFIER_CHAIN
        .iter()
        .find_map(|step| step(profile))
        .unwrap_or(StreamKey::Science)
}

/// Matches lower-cased course text against the keyword families in priority order.
///
/// An Engineering hit always yields `Engineering`, even when the profile also
/// looks like a PCM science student.
pub fn match_course_text(text: &str) -> Option<StreamKey> {
    let text = text.to_lowercase();
    if text.trim().is_empty() {
        return None;
    }
    COURSE_STREAM_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| text.contains(kw)))
        .map(|(stream, _)| *stream)
}

fn from_current_course(profile: &UserProfile) -> Option<StreamKey> {
    match_course_text(&profile.current_course)
}

fn from_study_area(profile: &UserProfile) -> Option<StreamKey> {
    let area = profile.study_area.to_lowercase();
    if area.contains("science") {
        let aptitude = &profile.aptitude;
        if aptitude.technical >= ENGINEERING_APTITUDE_THRESHOLD
            || aptitude.numerical >= ENGINEERING_APTITUDE_THRESHOLD
        {
            Some(StreamKey::Engineering)
        } else {
            Some(StreamKey::Science)
        }
    } else if area.contains("commerce") {
        Some(StreamKey::Commerce)
    } else if area.contains("arts") {
        Some(StreamKey::Arts)
    } else {
        None
    }
}

fn from_target_interests(profile: &UserProfile) -> Option<StreamKey> {
    profile
        .target_course_interest
        .iter()
        .find_map(|interest| match_course_text(interest))
}
