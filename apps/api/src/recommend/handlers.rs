use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::extract::ApiJson;
use crate::models::candidate::{
    CandidateSet, RankedCollege, RankedCourse, RankedJob, RankedScholarship, RankedSet,
};
use crate::models::profile::{AptitudeKind, UserProfile};
use crate::recommend::explain::explain;
use crate::recommend::level::{resolve_level_key, EducationLevelKey};
use crate::recommend::reference::region_states;
use crate::recommend::selector::{
    rank_colleges, rank_future_courses, rank_jobs, rank_scholarships, recommend_future_courses,
    resolve_stream,
};
use crate::recommend::stream::StreamKey;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RankRequest {
    pub profile: UserProfile,
    pub candidates: CandidateSet,
    #[serde(default)]
    pub stream_override: Option<StreamKey>,
}

#[derive(Debug, Serialize)]
pub struct RankResponse {
    pub stream: StreamKey,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level_key: Option<EducationLevelKey>,
    pub results: RankedSet,
}

#[derive(Debug, Default, Deserialize)]
pub struct RankedSets {
    #[serde(default)]
    pub colleges: Vec<RankedCollege>,
    #[serde(default)]
    pub scholarships: Vec<RankedScholarship>,
    #[serde(default)]
    pub jobs: Vec<RankedJob>,
}

#[derive(Debug, Deserialize)]
pub struct ExplainRequest {
    pub profile: UserProfile,
    #[serde(default)]
    pub ranked_sets: RankedSets,
}

#[derive(Debug, Serialize)]
pub struct ExplainResponse {
    pub explanations: Vec<String>,
}

/// A candidate set that could not be loaded; the set is returned empty.
#[derive(Debug, Serialize)]
pub struct FetchFailure {
    pub source: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub timestamp: DateTime<Utc>,
    pub sources: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub stream: StreamKey,
    pub level_key: EducationLevelKey,
    pub colleges: Vec<RankedCollege>,
    pub scholarships: Vec<RankedScholarship>,
    pub jobs: Vec<RankedJob>,
    pub future_courses: Vec<RankedCourse>,
    pub explanations: Vec<String>,
    pub meta: ResponseMeta,
    pub errors: Vec<FetchFailure>,
}

// ────────────────────────────────────────────────────────────────────────────
// Boundary validation
// ────────────────────────────────────────────────────────────────────────────

fn valid_percentage(value: f64) -> bool {
    value.is_finite() && (0.0..=100.0).contains(&value)
}

/// Aptitude sub-scores and the overall score must be finite and within [0, 100].
pub fn validate_profile(profile: &UserProfile) -> Result<(), AppError> {
    for kind in AptitudeKind::ALL {
        let value = profile.aptitude.get(kind);
        if !valid_percentage(value) {
            return Err(AppError::validation(
                format!("profile.aptitude.{}", kind.key()),
                format!("must be between 0 and 100, got {value}"),
            ));
        }
    }
    if let Some(overall) = profile.overall_score {
        if !valid_percentage(overall) {
            return Err(AppError::validation(
                "profile.overall_score",
                format!("must be between 0 and 100, got {overall}"),
            ));
        }
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/recommendations/rank
///
/// Ranks one candidate set. An empty `future_courses` set ranks the static
/// catalog for the student's level.
pub async fn handle_rank(
    ApiJson(req): ApiJson<RankRequest>,
) -> Result<Json<RankResponse>, AppError> {
    validate_profile(&req.profile)?;
    let profile = &req.profile;
    let stream = resolve_stream(profile, req.stream_override);

    let (level_key, results) = match req.candidates {
        CandidateSet::Colleges(items) => (
            None,
            RankedSet::Colleges(rank_colleges(&items, profile, stream)),
        ),
        CandidateSet::Scholarships(items) => (
            None,
            RankedSet::Scholarships(rank_scholarships(&items, profile)),
        ),
        CandidateSet::Jobs(items) => (None, RankedSet::Jobs(rank_jobs(&items, profile))),
        CandidateSet::FutureCourses(items) if items.is_empty() => {
            let (level, ranked) = recommend_future_courses(profile, stream);
            (Some(level), RankedSet::FutureCourses(ranked))
        }
        CandidateSet::FutureCourses(items) => {
            let level = resolve_level_key(profile, stream);
            (
                Some(level),
                RankedSet::FutureCourses(rank_future_courses(&items, profile, level)),
            )
        }
    };

    info!(
        "Ranked {} for {} stream (level {:?})",
        results.kind(),
        stream.label(),
        level_key
    );

    Ok(Json(RankResponse {
        stream,
        level_key,
        results,
    }))
}

/// POST /api/v1/recommendations/explain
pub async fn handle_explain(
    ApiJson(req): ApiJson<ExplainRequest>,
) -> Result<Json<ExplainResponse>, AppError> {
    validate_profile(&req.profile)?;
    let sets = &req.ranked_sets;
    let explanations = explain(&req.profile, &sets.colleges, &sets.scholarships, &sets.jobs);
    Ok(Json(ExplainResponse { explanations }))
}

/// GET /api/v1/users/:user_id/recommendations
///
/// Loads the profile, fetches the three candidate sets concurrently and runs
/// every pipeline. A failed fetch empties its set and is reported in `errors`.
pub async fn handle_user_recommendations(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let profile = state
        .source
        .load_profile(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Profile for user {user_id} not found")))?;

    let stream = resolve_stream(&profile, None);
    let region = region_states(&profile.preferred_state);
    let listing_limit = state.config.listing_fetch_limit;

    let (colleges, scholarships, jobs) = tokio::join!(
        state
            .source
            .fetch_colleges(region.as_deref(), state.config.college_fetch_limit),
        state.source.fetch_scholarships(listing_limit),
        state.source.fetch_jobs(listing_limit)
    );

    let mut sources = Vec::new();
    let mut errors = Vec::new();
    let colleges = settle("colleges", colleges, &mut sources, &mut errors);
    let scholarships = settle("scholarships", scholarships, &mut sources, &mut errors);
    let jobs = settle("jobs", jobs, &mut sources, &mut errors);
    sources.push("course_catalog".to_string());

    let colleges = rank_colleges(&colleges, &profile, stream);
    let scholarships = rank_scholarships(&scholarships, &profile);
    let jobs = rank_jobs(&jobs, &profile);
    let (level_key, future_courses) = recommend_future_courses(&profile, stream);
    let explanations = explain(&profile, &colleges, &scholarships, &jobs);

    info!(
        "Recommendations for user {user_id}: stream={}, {} colleges, {} scholarships, {} jobs, {} courses, {} fetch errors",
        stream.label(),
        colleges.len(),
        scholarships.len(),
        jobs.len(),
        future_courses.len(),
        errors.len()
    );

    Ok(Json(RecommendationsResponse {
        stream,
        level_key,
        colleges,
        scholarships,
        jobs,
        future_courses,
        explanations,
        meta: ResponseMeta {
            timestamp: Utc::now(),
            sources,
        },
        errors,
    }))
}

/// Unwraps a fetch result, recording the source name on success and the
/// failure otherwise.
fn settle<T>(
    name: &str,
    result: Result<Vec<T>, AppError>,
    sources: &mut Vec<String>,
    errors: &mut Vec<FetchFailure>,
) -> Vec<T> {
    match result {
        Ok(items) => {
            sources.push(name.to_string());
            items
        }
        Err(e) => {
            warn!("Failed to fetch {name}: {e}");
            errors.push(FetchFailure {
                source: name.to_string(),
                message: format!("Could not load {name}"),
            });
            Vec::new()
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
