use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::profile::null_as_default;

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct College {
    pub id: Uuid,
    pub name: String,
    pub state: String,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub specialised_in: Option<String>,
    #[serde(default)]
    pub college_type: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub courses_offered: Vec<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub annual_fees: Option<f64>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Scholarship {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
    /// State / district names, or "national".
    #[serde(default, deserialize_with = "null_as_default")]
    pub target_locations: Vec<String>,
    /// Free-text academic levels, e.g. "Class 12", "UG".
    #[serde(default, deserialize_with = "null_as_default")]
    pub eligible_levels: Vec<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobPosting {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills_required: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub job_type: Option<String>,
    #[serde(default)]
    pub apply_url: Option<String>,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
}

/// A next-step course template, usually drawn from the static catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FutureCourse {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub career_paths: Vec<String>,
}

/// One variant of candidate entities, as supplied to a ranking request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", content = "items", rename_all = "snake_case")]
pub enum CandidateSet {
    Colleges(Vec<College>),
    Scholarships(Vec<Scholarship>),
    Jobs(Vec<JobPosting>),
    FutureCourses(Vec<FutureCourse>),
}

// ────────────────────────────────────────────────────────────────────────────
// Scored copies returned by the engine
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedCollege {
    #[serde(flatten)]
    pub college: College,
    pub confidence_score: u8,
    pub match_reason: String,
    pub is_user_state: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedScholarship {
    #[serde(flatten)]
    pub scholarship: Scholarship,
    pub confidence_score: u8,
    pub match_reason: String,
    pub location_match: bool,
    pub eligibility_uncertain: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedJob {
    #[serde(flatten)]
    pub job: JobPosting,
    pub confidence_score: u8,
    pub match_reason: String,
    pub matched_skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedCourse {
    #[serde(flatten)]
    pub course: FutureCourse,
    pub confidence_score: u8,
    pub match_reason: String,
    /// Set only on the "take the quiz" stand-in emitted when nothing survives exclusion.
    #[serde(default)]
    pub is_placeholder: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", content = "items", rename_all = "snake_case")]
pub enum RankedSet {
    Colleges(Vec<RankedCollege>),
    Scholarships(Vec<RankedScholarship>),
    Jobs(Vec<RankedJob>),
    FutureCourses(Vec<RankedCourse>),
}

impl RankedSet {
    /// The wire tag, e.g. `"future_courses"`.
    pub fn kind(&self) -> &'static str {
        match self {
            RankedSet::Colleges(_) => "colleges",
            RankedSet::Scholarships(_) => "scholarships",
            RankedSet::Jobs(_) => "jobs",
            RankedSet::FutureCourses(_) => "future_courses",
        }
    }
}
