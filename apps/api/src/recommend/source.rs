//! Data access for the recommendation endpoints.

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::candidate::{College, JobPosting, Scholarship};
use crate::models::profile::{AptitudeScores, UserProfile};

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Supplies the profile snapshot and raw candidate lists the engine ranks.
///
/// Carried in `AppState` as `Arc<dyn CandidateSource>`.
#[async_trait]
pub trait CandidateSource: Send + Sync {
    async fn load_profile(&self, user_id: Uuid) -> Result<Option<UserProfile>, AppError>;

    /// Active colleges, best rated first. `states` restricts the result to a
    /// region when given.
    async fn fetch_colleges(
        &self,
        states: Option<&[String]>,
        limit: i64,
    ) -> Result<Vec<College>, AppError>;

    async fn fetch_scholarships(&self, limit: i64) -> Result<Vec<Scholarship>, AppError>;

    async fn fetch_jobs(&self, limit: i64) -> Result<Vec<JobPosting>, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// PgCandidateSource
// ────────────────────────────────────────────────────────────────────────────

pub struct PgCandidateSource(pub PgPool);

#[derive(Debug, FromRow)]
struct ProfileRow {
    id: Uuid,
    current_course: Option<String>,
    study_area: Option<String>,
    current_study_level: Option<String>,
    class_level: Option<String>,
    target_course_interest: Option<Vec<String>>,
    interests: Option<Vec<String>>,
    preferred_state: Option<String>,
    preferred_district: Option<String>,
    aptitude_scores: Option<Json<AptitudeScores>>,
    overall_score: Option<f64>,
}

impl From<ProfileRow> for UserProfile {
    fn from(row: ProfileRow) -> Self {
        UserProfile {
            id: Some(row.id),
            current_course: row.current_course.unwrap_or_default(),
            study_area: row.study_area.unwrap_or_default(),
            current_study_level: row.current_study_level.unwrap_or_default(),
            class_level: row.class_level.unwrap_or_default(),
            target_course_interest: row.target_course_interest.unwrap_or_default(),
            interests: row.interests.unwrap_or_default(),
            preferred_state: row.preferred_state.unwrap_or_default(),
            preferred_district: row.preferred_district.unwrap_or_default(),
            aptitude: row.aptitude_scores.map(|j| j.0).unwrap_or_default(),
            overall_score: row.overall_score,
        }
    }
}

#[async_trait]
impl CandidateSource for PgCandidateSource {
    async fn load_profile(&self, user_id: Uuid) -> Result<Option<UserProfile>, AppError> {
        let row = sqlx::query_as::<_, ProfileRow>(
            "SELECT id, current_course, study_area, current_study_level, class_level,
                    target_course_interest, interests, preferred_state, preferred_district,
                    aptitude_scores, overall_score::float8 AS overall_score
             FROM profiles
             WHERE id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.0)
        .await?;

        Ok(row.map(UserProfile::from))
    }

    async fn fetch_colleges(
        &self,
        states: Option<&[String]>,
        limit: i64,
    ) -> Result<Vec<College>, AppError> {
        let states: Option<Vec<String>> =
            states.map(|s| s.iter().map(|state| state.trim().to_lowercase()).collect());

        let colleges = sqlx::query_as::<_, College>(
            "SELECT id, name, state, district, specialised_in, college_type,
                    COALESCE(courses_offered, '{}') AS courses_offered,
                    rating::float8 AS rating, annual_fees::float8 AS annual_fees,
                    website, is_active
             FROM colleges
             WHERE is_active = true
               AND ($1::text[] IS NULL OR lower(state) = ANY($1))
             ORDER BY rating DESC NULLS LAST
             LIMIT $2",
        )
        .bind(states)
        .bind(limit)
        .fetch_all(&self.0)
        .await?;

        Ok(colleges)
    }

    async fn fetch_scholarships(&self, limit: i64) -> Result<Vec<Scholarship>, AppError> {
        let scholarships = sqlx::query_as::<_, Scholarship>(
            "SELECT id, name, provider, amount::float8 AS amount, deadline,
                    COALESCE(target_locations, '{}') AS target_locations,
                    COALESCE(eligible_levels, '{}') AS eligible_levels,
                    website, description
             FROM scholarships
             WHERE is_active = true
             ORDER BY deadline ASC NULLS LAST
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.0)
        .await?;

        Ok(scholarships)
    }

    async fn fetch_jobs(&self, limit: i64) -> Result<Vec<JobPosting>, AppError> {
        let jobs = sqlx::query_as::<_, JobPosting>(
            "SELECT id, title, company, location,
                    COALESCE(skills_required, '{}') AS skills_required,
                    description, job_type, apply_url, deadline
             FROM jobs
             WHERE is_active = true
             ORDER BY deadline ASC NULLS LAST
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.0)
        .await?;

        Ok(jobs)
    }
}
