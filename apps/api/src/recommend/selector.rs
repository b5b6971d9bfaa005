//! Candidate selection: hard filters, scoring, ordering and truncation for
//! each recommendation pipeline.
//!
//! Inputs are borrowed and never modified; every pipeline returns freshly
//! decorated copies. An empty result is a valid outcome, not an error.

use tracing::debug;

use crate::models::candidate::{
    College, FutureCourse, JobPosting, RankedCollege, RankedCourse, RankedJob, RankedScholarship,
    Scholarship,
};
use crate::models::profile::UserProfile;
use crate::recommend::level::{resolve_level_key, EducationLevelKey};
use crate::recommend::reference::{course_catalog, region_states};
use crate::recommend::scoring::{
    mentions_stream, same_place, score_college, score_future_course, score_job,
    score_scholarship, LocationMatch,
};
use crate::recommend::stream::{classify_stream, StreamKey};

/// Colleges kept after ranking.
pub const COLLEGE_RESULT_CAP: usize = 50;
/// Future courses kept after ranking.
pub const FUTURE_COURSE_CAP: usize = 7;

pub const QUIZ_PLACEHOLDER_REASON: &str =
    "Complete the aptitude quiz to unlock personalised course suggestions";

/// The caller's override when present, otherwise the classified stream.
pub fn resolve_stream(profile: &UserProfile, stream_override: Option<StreamKey>) -> StreamKey {
    stream_override.unwrap_or_else(|| classify_stream(profile))
}

// ────────────────────────────────────────────────────────────────────────────
// Colleges
// ────────────────────────────────────────────────────────────────────────────

/// Active and inside the student's region (any state when no region is known).
pub fn in_region(college: &College, region: Option<&[String]>) -> bool {
    if !college.is_active {
        return false;
    }
    match region {
        Some(states) => states.iter().any(|s| same_place(s, &college.state)),
        None => true,
    }
}

/// A college survives only if its specialisation, type or courses mention the stream.
pub fn passes_stream_filter(college: &College, stream: StreamKey) -> bool {
    let specialisation = college
        .specialised_in
        .as_deref()
        .unwrap_or_default()
        .to_lowercase();
    let college_type = college
        .college_type
        .as_deref()
        .unwrap_or_default()
        .to_lowercase();
    let offered = college.courses_offered.join(" ").to_lowercase();

    mentions_stream(
        stream,
        &[
            specialisation.as_str(),
            college_type.as_str(),
            offered.as_str(),
        ],
    )
}

/// Region filter → stream filter → score → user-state first, then score → top 50.
pub fn rank_colleges(
    colleges: &[College],
    profile: &UserProfile,
    stream: StreamKey,
) -> Vec<RankedCollege> {
    let region = region_states(&profile.preferred_state);

    let regional: Vec<&College> = colleges
        .iter()
        .filter(|c| in_region(c, region.as_deref()))
        .collect();
    let matching: Vec<&College> = regional
        .iter()
        .copied()
        .filter(|c| passes_stream_filter(c, stream))
        .collect();

    debug!(
        "College pipeline: {} candidates, {} in region, {} match {} stream",
        colleges.len(),
        regional.len(),
        matching.len(),
        stream.label()
    );

    let mut ranked: Vec<RankedCollege> = matching
        .into_iter()
        .map(|college| {
            let user_state = same_place(&college.state, &profile.preferred_state);
            // District names repeat across states; only count one inside the home state.
            let location = LocationMatch {
                user_state,
                user_district: user_state
                    && same_place(
                        college.district.as_deref().unwrap_or_default(),
                        &profile.preferred_district,
                    ),
            };
            let scored = score_college(college, profile, stream, location);
            RankedCollege {
                college: college.clone(),
                confidence_score: scored.confidence_score,
                match_reason: scored.match_reason,
                is_user_state: location.user_state,
            }
        })
        .collect();

    // Stable: ties keep the fetch order (rating descending).
    ranked.sort_by(|a, b| {
        b.is_user_state
            .cmp(&a.is_user_state)
            .then(b.confidence_score.cmp(&a.confidence_score))
    });
    ranked.truncate(COLLEGE_RESULT_CAP);
    ranked
}

// ────────────────────────────────────────────────────────────────────────────
// Future courses
// ────────────────────────────────────────────────────────────────────────────

/// True when the course's first name word or its code occurs in the student's
/// current course text.
pub fn is_current_course(course: &FutureCourse, current_course: &str) -> bool {
    let current = current_course.trim().to_lowercase();
    if current.is_empty() {
        return false;
    }
    let first_word = course
        .name
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_lowercase();
    let code = course.code.trim().to_lowercase();

    [first_word, code]
        .iter()
        .any(|needle| !needle.is_empty() && current.contains(needle.as_str()))
}

/// Stand-in entry returned when every catalog course was excluded.
pub fn quiz_placeholder() -> RankedCourse {
    RankedCourse {
        course: FutureCourse {
            name: "Take the Aptitude Quiz".to_string(),
            code: "aptitude-quiz".to_string(),
            tags: Vec::new(),
            duration: None,
            description: Some(
                "Answer a short quiz so we can suggest courses that fit your strengths."
                    .to_string(),
            ),
            career_paths: Vec::new(),
        },
        confidence_score: 0,
        match_reason: QUIZ_PLACEHOLDER_REASON.to_string(),
        is_placeholder: true,
    }
}

/// Exclude the current course → score → sort descending → top 7.
/// Falls back to the quiz placeholder when nothing survives.
pub fn rank_future_courses(
    catalog: &[FutureCourse],
    profile: &UserProfile,
    level: EducationLevelKey,
) -> Vec<RankedCourse> {
    let mut ranked: Vec<RankedCourse> = catalog
        .iter()
        .filter(|course| !is_current_course(course, &profile.current_course))
        .map(|course| {
            let scored = score_future_course(course, profile, level);
            RankedCourse {
                course: course.clone(),
                confidence_score: scored.confidence_score,
                match_reason: scored.match_reason,
                is_placeholder: false,
            }
        })
        .collect();

    debug!(
        "Course pipeline: {} catalog entries, {} after excluding '{}'",
        catalog.len(),
        ranked.len(),
        profile.current_course
    );

    if ranked.is_empty() {
        return vec![quiz_placeholder()];
    }

    ranked.sort_by(|a, b| b.confidence_score.cmp(&a.confidence_score));
    ranked.truncate(FUTURE_COURSE_CAP);
    ranked
}

/// Resolves the level key and ranks its static catalog.
pub fn recommend_future_courses(
    profile: &UserProfile,
    stream: StreamKey,
) -> (EducationLevelKey, Vec<RankedCourse>) {
    let level = resolve_level_key(profile, stream);
    let catalog: Vec<FutureCourse> = course_catalog(level)
        .iter()
        .map(|entry| entry.to_course())
        .collect();
    (level, rank_future_courses(&catalog, profile, level))
}

// ────────────────────────────────────────────────────────────────────────────
// Scholarships and jobs
// ────────────────────────────────────────────────────────────────────────────

/// Scored and sorted by score descending; no stream filter.
pub fn rank_scholarships(
    scholarships: &[Scholarship],
    profile: &UserProfile,
) -> Vec<RankedScholarship> {
    let mut ranked: Vec<RankedScholarship> = scholarships
        .iter()
        .map(|scholarship| {
            let result = score_scholarship(scholarship, profile);
            RankedScholarship {
                scholarship: scholarship.clone(),
                confidence_score: result.scored.confidence_score,
                match_reason: result.scored.match_reason,
                location_match: result.location_match,
                eligibility_uncertain: result.eligibility_uncertain,
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.confidence_score.cmp(&a.confidence_score));
    ranked
}

/// Scored and sorted by score descending; no stream filter.
pub fn rank_jobs(jobs: &[JobPosting], profile: &UserProfile) -> Vec<RankedJob> {
    let mut ranked: Vec<RankedJob> = jobs
        .iter()
        .map(|job| {
            let result = score_job(job, profile);
            RankedJob {
                job: job.clone(),
                confidence_score: result.scored.confidence_score,
                match_reason: result.scored.match_reason,
                matched_skills: result.matched_skills,
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.confidence_score.cmp(&a.confidence_score));
    ranked
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
