//! Entity scoring: deterministic, rule-based confidence scores (0–100) with
//! short human-readable reasons.
//!
//! Every scorer follows the same shape: derive a few sub-scores from small
//! rule sets, combine them, round, clamp. Missing optional fields read as
//! neutral values, so a scorer never fails; a thin record just scores low.
//!
//! Scorers never mutate their inputs and never read the clock.

use crate::models::candidate::{College, FutureCourse, JobPosting, Scholarship};
use crate::models::profile::{AptitudeKind, AptitudeScores, UserProfile};
use crate::recommend::level::EducationLevelKey;
use crate::recommend::reference::stream_keywords;
use crate::recommend::stream::StreamKey;

/// Reason used when no specific rule fires.
pub const GENERIC_REASON: &str = "General recommendation";
const REASON_SEPARATOR: &str = " • ";
const MAX_REASON_FRAGMENTS: usize = 3;

const STRONG_APTITUDE: f64 = 70.0;
const HIGH_RATING: f64 = 4.0;

// ────────────────────────────────────────────────────────────────────────────
// Weights
// ────────────────────────────────────────────────────────────────────────────

/// Top-level college weights. Must sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollegeWeights {
    pub aptitude: f64,
    pub course_interest: f64,
    pub location: f64,
    pub stream: f64,
}

impl Default for CollegeWeights {
    fn default() -> Self {
        Self {
            aptitude: 0.45,
            course_interest: 0.30,
            location: 0.15,
            stream: 0.10,
        }
    }
}

impl CollegeWeights {
    pub fn total(&self) -> f64 {
        self.aptitude + self.course_interest + self.location + self.stream
    }
}

/// Per-dimension weights over the five aptitude sub-scores. Each blend sums to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AptitudeBlend {
    pub logical: f64,
    pub numerical: f64,
    pub technical: f64,
    pub verbal: f64,
    pub creative: f64,
}

impl AptitudeBlend {
    pub fn total(&self) -> f64 {
        self.logical + self.numerical + self.technical + self.verbal + self.creative
    }

    pub fn apply(&self, scores: &AptitudeScores) -> f64 {
        debug_assert!((self.total() - 1.0).abs() < 1e-9, "blend must sum to 1.0");
        self.logical * scores.logical
            + self.numerical * scores.numerical
            + self.technical * scores.technical
            + self.verbal * scores.verbal
            + self.creative * scores.creative
    }
}

pub const TECHNICAL_BLEND: AptitudeBlend = AptitudeBlend {
    logical: 0.2,
    numerical: 0.3,
    technical: 0.5,
    verbal: 0.0,
    creative: 0.0,
};

pub const MEDICAL_BLEND: AptitudeBlend = AptitudeBlend {
    logical: 0.4,
    numerical: 0.3,
    technical: 0.0,
    verbal: 0.3,
    creative: 0.0,
};

pub const BUSINESS_BLEND: AptitudeBlend = AptitudeBlend {
    logical: 0.3,
    numerical: 0.4,
    technical: 0.0,
    verbal: 0.3,
    creative: 0.0,
};

pub const CREATIVE_BLEND: AptitudeBlend = AptitudeBlend {
    logical: 0.2,
    numerical: 0.0,
    technical: 0.0,
    verbal: 0.4,
    creative: 0.4,
};

/// Unweighted mean of all five.
pub const EVEN_BLEND: AptitudeBlend = AptitudeBlend {
    logical: 0.2,
    numerical: 0.2,
    technical: 0.2,
    verbal: 0.2,
    creative: 0.2,
};

pub fn stream_blend(stream: StreamKey) -> AptitudeBlend {
    match stream {
        StreamKey::ComputerScience | StreamKey::Engineering => TECHNICAL_BLEND,
        StreamKey::Medical => MEDICAL_BLEND,
        StreamKey::Commerce => BUSINESS_BLEND,
        StreamKey::Arts => CREATIVE_BLEND,
        StreamKey::Science => EVEN_BLEND,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Shared helpers
// ────────────────────────────────────────────────────────────────────────────

/// Output of a scorer: a bounded integer score and a never-empty reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scored {
    pub confidence_score: u8,
    pub match_reason: String,
}

/// Rounds and clamps a raw score into [0, 100].
pub fn finalize_score(raw: f64) -> u8 {
    if !raw.is_finite() {
        return 0;
    }
    raw.round().clamp(0.0, 100.0) as u8
}

/// Joins the first three fragments; falls back to the generic reason.
pub fn join_reasons(fragments: &[String]) -> String {
    if fragments.is_empty() {
        return GENERIC_REASON.to_string();
    }
    fragments
        .iter()
        .take(MAX_REASON_FRAGMENTS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(REASON_SEPARATOR)
}

/// Trimmed, case-insensitive equality; blanks never match.
pub fn same_place(a: &str, b: &str) -> bool {
    let (a, b) = (a.trim(), b.trim());
    !a.is_empty() && a.eq_ignore_ascii_case(b)
}

/// First non-blank entry whose lower-cased text occurs in any haystack.
fn first_interest_hit<'a, I>(interests: I, haystacks: &[&str]) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a String>,
{
    interests.into_iter().map(|i| i.trim()).find(|interest| {
        let needle = interest.to_lowercase();
        !needle.is_empty() && haystacks.iter().any(|h| h.contains(&needle))
    })
}

// ────────────────────────────────────────────────────────────────────────────
// College
// ────────────────────────────────────────────────────────────────────────────

/// Where a college sits relative to the student, as decided by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationMatch {
    pub user_state: bool,
    pub user_district: bool,
}

/// True when any stream keyword appears in the given lower-cased texts.
pub fn mentions_stream(stream: StreamKey, texts: &[&str]) -> bool {
    stream_keywords(stream)
        .iter()
        .any(|kw| texts.iter().any(|t| t.contains(kw)))
}

/// Scores a college: aptitude 45%, course interest 30%, location 15%, stream 10%.
pub fn score_college(
    college: &College,
    profile: &UserProfile,
    stream: StreamKey,
    location: LocationMatch,
) -> Scored {
    let weights = CollegeWeights::default();
    debug_assert!((weights.total() - 1.0).abs() < 1e-9);

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

    let aptitude = stream_blend(stream).apply(&profile.aptitude);

    let interest_hit = first_interest_hit(
        &profile.target_course_interest,
        &[specialisation.as_str(), offered.as_str()],
    );
    let interest = if interest_hit.is_some() { 100.0 } else { 30.0 };

    let location_score = if location.user_district {
        100.0
    } else if location.user_state {
        80.0
    } else {
        40.0
    };

    let stream_hit = mentions_stream(stream, &[specialisation.as_str(), college_type.as_str()]);
    let stream_score = if stream_hit { 100.0 } else { 20.0 };

    let raw = weights.aptitude * aptitude
        + weights.course_interest * interest
        + weights.location * location_score
        + weights.stream * stream_score;

    let mut fragments = Vec::new();
    if aptitude >= STRONG_APTITUDE {
        fragments.push("Strong aptitude match".to_string());
    }
    if let Some(hit) = interest_hit {
        fragments.push(format!("Offers {hit}"));
    }
    if location.user_district {
        fragments.push("In your district".to_string());
    } else if location.user_state {
        fragments.push("In your state".to_string());
    } else if !profile.preferred_state.trim().is_empty() {
        fragments.push("Nearby state".to_string());
    }
    if stream_hit {
        fragments.push(format!("{} specialization", stream.label()));
    }
    if let Some(rating) = college.rating.filter(|r| *r >= HIGH_RATING) {
        fragments.push(format!("Rating: {rating:.1}"));
    }

    Scored {
        confidence_score: finalize_score(raw),
        match_reason: join_reasons(&fragments),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Scholarship
// ────────────────────────────────────────────────────────────────────────────

const SCHOLARSHIP_BASE: f64 = 60.0;
const SCHOLARSHIP_LOCATION_BONUS: f64 = 20.0;
const SCHOLARSHIP_LEVEL_BONUS: f64 = 15.0;
const SCHOLARSHIP_UNCERTAIN_PENALTY: f64 = 20.0;

/// Target-location entries that open a scholarship to every state.
const NATIONWIDE_MARKERS: &[&str] = &["national", "all india"];

/// Portals of state-run schemes whose eligibility is tied to domicile.
const STATE_PORTAL_DOMAINS: &[&str] = &["up.gov.in"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScholarshipScore {
    pub scored: Scored,
    pub location_match: bool,
    pub eligibility_uncertain: bool,
}

/// Scores a scholarship: base 60, +20 location, +15 academic level, −20 when a
/// state-portal scheme is shown to an out-of-region student.
pub fn score_scholarship(scholarship: &Scholarship, profile: &UserProfile) -> ScholarshipScore {
    let targets: Vec<String> = scholarship
        .target_locations
        .iter()
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect();

    let nationwide = targets
        .iter()
        .any(|t| NATIONWIDE_MARKERS.iter().any(|m| t.contains(m)));
    let in_preferred = profile
        .preferred_locations()
        .iter()
        .any(|loc| targets.iter().any(|t| same_place(t, loc)));
    let location_match = nationwide || in_preferred;

    let level_match = academic_level_matches(&scholarship.eligible_levels, profile);

    let eligibility_uncertain = !location_match
        && scholarship
            .website
            .as_deref()
            .map(is_state_portal)
            .unwrap_or(false);

    let mut raw = SCHOLARSHIP_BASE;
    let mut fragments = Vec::new();
    if location_match {
        raw += SCHOLARSHIP_LOCATION_BONUS;
        fragments.push(if nationwide && !in_preferred {
            "Open to students nationwide".to_string()
        } else {
            "Available in your preferred location".to_string()
        });
    }
    if level_match {
        raw += SCHOLARSHIP_LEVEL_BONUS;
        fragments.push("Matches your education level".to_string());
    }
    if eligibility_uncertain {
        raw -= SCHOLARSHIP_UNCERTAIN_PENALTY;
        fragments.push("Eligibility uncertain: state-specific scheme".to_string());
    }

    ScholarshipScore {
        scored: Scored {
            confidence_score: finalize_score(raw),
            match_reason: join_reasons(&fragments),
        },
        location_match,
        eligibility_uncertain,
    }
}

/// Loose containment either way between the scholarship's declared levels and
/// the student's study / class level. `"all"` accepts everyone with a level.
fn academic_level_matches(eligible_levels: &[String], profile: &UserProfile) -> bool {
    let own: Vec<String> = [&profile.current_study_level, &profile.class_level]
        .iter()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect();
    if own.is_empty() {
        return false;
    }

    eligible_levels
        .iter()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .any(|level| {
            level == "all" || own.iter().any(|o| o.contains(&level) || level.contains(o.as_str()))
        })
}

fn website_host(url: &str) -> String {
    let lower = url.trim().to_lowercase();
    let rest = lower
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(lower.as_str());
    rest.split(['/', '?', '#', ':'])
        .next()
        .unwrap_or_default()
        .to_string()
}

fn is_state_portal(url: &str) -> bool {
    let host = website_host(url);
    STATE_PORTAL_DOMAINS
        .iter()
        .any(|domain| host == *domain || host.ends_with(&format!(".{domain}")))
}

// ────────────────────────────────────────────────────────────────────────────
// Job
// ────────────────────────────────────────────────────────────────────────────

const JOB_BASE: f64 = 40.0;
const JOB_LOCATION_BONUS: f64 = 15.0;

struct SkillFamily {
    name: &'static str,
    aptitude: AptitudeKind,
    bonus: f64,
    keywords: &'static [&'static str],
}

/// Additive: a job can earn every family's bonus.
const JOB_SKILL_FAMILIES: &[SkillFamily] = &[
    SkillFamily {
        name: "technical",
        aptitude: AptitudeKind::Technical,
        bonus: 30.0,
        keywords: &[
            "software",
            "developer",
            "programming",
            "engineer",
            "technical",
            "computer",
            "coding",
            "web",
        ],
    },
    SkillFamily {
        name: "quantitative",
        aptitude: AptitudeKind::Numerical,
        bonus: 25.0,
        keywords: &[
            "analyst",
            "finance",
            "accounting",
            "data",
            "statistics",
            "quantitative",
            "excel",
            "math",
        ],
    },
    SkillFamily {
        name: "communication",
        aptitude: AptitudeKind::Verbal,
        bonus: 25.0,
        keywords: &[
            "communication",
            "sales",
            "marketing",
            "customer",
            "teaching",
            "human resources",
            "counsel",
            "writing",
        ],
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobScore {
    pub scored: Scored,
    pub matched_skills: Vec<String>,
}

/// Scores a job: base 40, skill-family bonuses gated on aptitude ≥ 70, +15
/// when the location mentions a preferred place.
pub fn score_job(job: &JobPosting, profile: &UserProfile) -> JobScore {
    let text = format!(
        "{} {} {}",
        job.title,
        job.skills_required.join(" "),
        job.description.as_deref().unwrap_or_default()
    )
    .to_lowercase();

    let mut raw = JOB_BASE;
    let mut matched_skills = Vec::new();
    for family in JOB_SKILL_FAMILIES {
        let required = family.keywords.iter().any(|kw| text.contains(kw));
        if required && profile.aptitude.get(family.aptitude) >= STRONG_APTITUDE {
            raw += family.bonus;
            matched_skills.push(family.name.to_string());
        }
    }

    let job_location = job.location.as_deref().unwrap_or_default().to_lowercase();
    let in_preferred_location = profile
        .preferred_locations()
        .iter()
        .any(|loc| job_location.contains(&loc.to_lowercase()));
    if in_preferred_location {
        raw += JOB_LOCATION_BONUS;
    }

    let match_reason = match (matched_skills.is_empty(), in_preferred_location) {
        (false, true) => format!(
            "Matches your {} skills in preferred location",
            natural_list(&matched_skills)
        ),
        (false, false) => format!("Matches your {} skills", natural_list(&matched_skills)),
        (true, true) => "Opening in preferred location".to_string(),
        (true, false) => GENERIC_REASON.to_string(),
    };

    JobScore {
        scored: Scored {
            confidence_score: finalize_score(raw),
            match_reason,
        },
        matched_skills,
    }
}

/// "a", "a and b", "a, b and c".
fn natural_list(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Future course
// ────────────────────────────────────────────────────────────────────────────

const COURSE_APTITUDE_WEIGHT: f64 = 0.6;
const COURSE_INTEREST_WEIGHT: f64 = 0.4;

/// Tag keyword families, checked in order; the first family any tag hits picks the blend.
const COURSE_TAG_FAMILIES: &[(&str, AptitudeBlend, &[&str])] = &[
    (
        "technical",
        TECHNICAL_BLEND,
        &["engineering", "computer", "programming", "data", "technology", "electronics"],
    ),
    (
        "medical",
        MEDICAL_BLEND,
        &["medical", "healthcare", "biology", "pharmacy", "nursing"],
    ),
    (
        "business",
        BUSINESS_BLEND,
        &["business", "finance", "management", "commerce", "accounting", "economics"],
    ),
    (
        "creative",
        CREATIVE_BLEND,
        &["arts", "design", "creative", "media", "humanities", "writing", "literature"],
    ),
];

/// Scores a next-step course: 60% aptitude (blend picked by tags), 40% interest.
pub fn score_future_course(
    course: &FutureCourse,
    profile: &UserProfile,
    level: EducationLevelKey,
) -> Scored {
    let tags: Vec<String> = course.tags.iter().map(|t| t.to_lowercase()).collect();
    let name = course.name.to_lowercase();

    let family = COURSE_TAG_FAMILIES
        .iter()
        .find(|(_, _, keywords)| tags.iter().any(|t| keywords.iter().any(|kw| t.contains(kw))));
    let blend = family.map(|(_, blend, _)| *blend).unwrap_or(EVEN_BLEND);
    let aptitude = blend.apply(&profile.aptitude);

    let mut haystacks: Vec<&str> = tags.iter().map(String::as_str).collect();
    haystacks.push(&name);
    let interest_hit = first_interest_hit(
        profile
            .interests
            .iter()
            .chain(profile.target_course_interest.iter()),
        &haystacks,
    );
    let interest = if interest_hit.is_some() { 100.0 } else { 30.0 };

    let raw = COURSE_APTITUDE_WEIGHT * aptitude + COURSE_INTEREST_WEIGHT * interest;

    let mut fragments = Vec::new();
    if aptitude >= STRONG_APTITUDE {
        fragments.push(match family {
            Some((label, _, _)) => format!("Strong {label} aptitude"),
            None => "Strong aptitude match".to_string(),
        });
    }
    if let Some(hit) = interest_hit {
        fragments.push(format!("Matches your interest in {hit}"));
    }
    if fragments.is_empty() {
        fragments.push(format!("Popular next step after {}", level.stage_label()));
    }

    Scored {
        confidence_score: finalize_score(raw),
        match_reason: join_reasons(&fragments),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn cs_profile() -> UserProfile {
        UserProfile {
            current_course: "B.Tech CSE".to_string(),
            preferred_state: "Uttar Pradesh".to_string(),
            aptitude: AptitudeScores {
                technical: 85.0,
                numerical: 70.0,
                logical: 60.0,
                verbal: 40.0,
                creative: 30.0,
            },
            ..Default::default()
        }
    }

    fn make_college(specialised_in: &str, courses: &[&str], rating: Option<f64>) -> College {
        College {
            id: Uuid::new_v4(),
            name: "Test College".to_string(),
            state: "Uttar Pradesh".to_string(),
            district: None,
            specialised_in: Some(specialised_in.to_string()),
            college_type: None,
            courses_offered: courses.iter().map(|c| c.to_string()).collect(),
            rating,
            annual_fees: None,
            website: None,
            is_active: true,
        }
    }

    fn make_scholarship(targets: &[&str], levels: &[&str], website: Option<&str>) -> Scholarship {
        Scholarship {
            id: Uuid::new_v4(),
            name: "Merit Scholarship".to_string(),
            provider: None,
            amount: Some(50000.0),
            deadline: None,
            target_locations: targets.iter().map(|t| t.to_string()).collect(),
            eligible_levels: levels.iter().map(|l| l.to_string()).collect(),
            website: website.map(str::to_string),
            description: None,
        }
    }

    fn make_job(title: &str, skills: &[&str], location: Option<&str>) -> JobPosting {
        JobPosting {
            id: Uuid::new_v4(),
            title: title.to_string(),
            company: None,
            location: location.map(str::to_string),
            skills_required: skills.iter().map(|s| s.to_string()).collect(),
            description: None,
            job_type: None,
            apply_url: None,
            deadline: None,
        }
    }

    const IN_STATE: LocationMatch = LocationMatch {
        user_state: true,
        user_district: false,
    };
    const NEARBY: LocationMatch = LocationMatch {
        user_state: false,
        user_district: false,
    };

    #[test]
    fn test_weights_sum_to_one() {
        assert!((CollegeWeights::default().total() - 1.0).abs() < 1e-9);
        for blend in [
            TECHNICAL_BLEND,
            MEDICAL_BLEND,
            BUSINESS_BLEND,
            CREATIVE_BLEND,
            EVEN_BLEND,
        ] {
            assert!((blend.total() - 1.0).abs() < 1e-9, "{blend:?}");
        }
        for stream in StreamKey::ALL {
            assert!((stream_blend(stream).total() - 1.0).abs() < 1e-9, "{stream:?}");
        }
    }

    #[test]
    fn test_technical_blend_worked_example() {
        let aptitude = stream_blend(StreamKey::ComputerScience).apply(&cs_profile().aptitude);
        assert!((aptitude - 75.5).abs() < 1e-9, "aptitude was {aptitude}");
    }

    #[test]
    fn test_science_blend_is_plain_mean() {
        let profile = cs_profile();
        let blended = stream_blend(StreamKey::Science).apply(&profile.aptitude);
        // (60 + 70 + 85 + 40 + 30) / 5
        assert!((blended - 57.0).abs() < 1e-9, "blended was {blended}");
    }

    #[test]
    fn test_college_worked_example() {
        let college = make_college("engineering & technology", &[], Some(4.2));
        let scored = score_college(&college, &cs_profile(), StreamKey::ComputerScience, IN_STATE);

        // 0.45*75.5 + 0.30*30 + 0.15*80 + 0.10*100 = 64.975
        assert_eq!(scored.confidence_score, 65);
        assert_eq!(
            scored.match_reason,
            "Strong aptitude match • In your state • Computer Science specialization",
            "rating fragment is the fourth and gets truncated"
        );
    }

    #[test]
    fn test_college_interest_hit_names_first_matching_interest() {
        let mut profile = cs_profile();
        profile.target_course_interest = vec![
            "".to_string(),
            "MBA".to_string(),
            "B.Tech".to_string(),
            "Computer Science".to_string(),
        ];
        let college = make_college("engineering", &["B.Tech Computer Science", "M.Tech"], None);
        let scored = score_college(&college, &profile, StreamKey::ComputerScience, NEARBY);

        assert!(scored.match_reason.contains("Offers B.Tech"), "{}", scored.match_reason);
        // 0.45*75.5 + 0.30*100 + 0.15*40 + 0.10*100 = 79.975
        assert_eq!(scored.confidence_score, 80);
    }

    #[test]
    fn test_college_district_outranks_state() {
        let college = make_college("arts", &[], None);
        let profile = UserProfile {
            preferred_state: "Bihar".to_string(),
            ..Default::default()
        };
        let district = LocationMatch {
            user_state: true,
            user_district: true,
        };
        let in_district = score_college(&college, &profile, StreamKey::Science, district);
        let in_state = score_college(&college, &profile, StreamKey::Science, IN_STATE);
        let nearby = score_college(&college, &profile, StreamKey::Science, NEARBY);

        assert!(in_district.confidence_score > in_state.confidence_score);
        assert!(in_state.confidence_score > nearby.confidence_score);
        assert_eq!(in_district.match_reason, "In your district");
        assert_eq!(nearby.match_reason, "Nearby state");
    }

    #[test]
    fn test_college_without_any_signal_gets_generic_reason() {
        let college = make_college("", &[], Some(3.1));
        let scored = score_college(
            &college,
            &UserProfile::default(),
            StreamKey::Medical,
            NEARBY,
        );
        // 0 + 0.30*30 + 0.15*40 + 0.10*20 = 17
        assert_eq!(scored.confidence_score, 17);
        assert_eq!(scored.match_reason, GENERIC_REASON);
    }

    #[test]
    fn test_rating_reason_uses_one_decimal() {
        let college = make_college("", &[], Some(4.0));
        let scored = score_college(
            &college,
            &UserProfile::default(),
            StreamKey::Arts,
            NEARBY,
        );
        assert_eq!(scored.match_reason, "Rating: 4.0");
    }

    #[test]
    fn test_finalize_score_clamps_and_rounds() {
        assert_eq!(finalize_score(-12.0), 0);
        assert_eq!(finalize_score(135.0), 100);
        assert_eq!(finalize_score(64.5), 65);
        assert_eq!(finalize_score(f64::NAN), 0);
    }

    #[test]
    fn test_join_reasons_truncates_to_three() {
        let fragments: Vec<String> = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
        assert_eq!(join_reasons(&fragments), "a • b • c");
        assert_eq!(join_reasons(&[]), GENERIC_REASON);
    }

    #[test]
    fn test_national_scholarship_gains_location_bonus() {
        let scholarship = make_scholarship(&["National"], &[], None);
        let profile = UserProfile {
            preferred_state: "Bihar".to_string(),
            ..Default::default()
        };
        let result = score_scholarship(&scholarship, &profile);
        assert!(result.location_match);
        assert_eq!(result.scored.confidence_score, 80);
        assert_eq!(result.scored.match_reason, "Open to students nationwide");
    }

    #[test]
    fn test_scholarship_level_bonus() {
        let scholarship = make_scholarship(&["bihar"], &["Class 12", "UG"], None);
        let profile = UserProfile {
            preferred_state: "Bihar".to_string(),
            current_study_level: "UG 1st year".to_string(),
            ..Default::default()
        };
        let result = score_scholarship(&scholarship, &profile);
        assert_eq!(result.scored.confidence_score, 95);
        assert_eq!(
            result.scored.match_reason,
            "Available in your preferred location • Matches your education level"
        );
    }

    #[test]
    fn test_out_of_state_up_portal_is_uncertain() {
        let scholarship = make_scholarship(
            &["Uttar Pradesh"],
            &[],
            Some("https://scholarship.up.gov.in/apply"),
        );
        let profile = UserProfile {
            preferred_state: "Bihar".to_string(),
            ..Default::default()
        };
        let result = score_scholarship(&scholarship, &profile);
        assert!(result.eligibility_uncertain);
        assert!(!result.location_match);
        assert_eq!(result.scored.confidence_score, 40);
    }

    #[test]
    fn test_in_state_up_portal_is_not_uncertain() {
        let scholarship = make_scholarship(
            &["Uttar Pradesh"],
            &[],
            Some("https://scholarship.up.gov.in"),
        );
        let profile = UserProfile {
            preferred_state: "uttar pradesh".to_string(),
            ..Default::default()
        };
        let result = score_scholarship(&scholarship, &profile);
        assert!(!result.eligibility_uncertain);
        assert_eq!(result.scored.confidence_score, 80);
    }

    #[test]
    fn test_lookalike_domain_is_not_state_portal() {
        assert!(is_state_portal("http://up.gov.in"));
        assert!(is_state_portal("https://SCHOLARSHIP.UP.GOV.IN:443/x"));
        assert!(!is_state_portal("https://notup.gov.in"));
        assert!(!is_state_portal("https://example.com/up.gov.in"));
    }

    #[test]
    fn test_job_skill_families_are_additive() {
        let profile = UserProfile {
            preferred_state: "Karnataka".to_string(),
            aptitude: AptitudeScores {
                technical: 80.0,
                numerical: 75.0,
                verbal: 50.0,
                ..Default::default()
            },
            ..Default::default()
        };
        let job = make_job(
            "Software Developer",
            &["Python", "Data analysis"],
            Some("Bengaluru, Karnataka"),
        );
        let result = score_job(&job, &profile);

        assert_eq!(result.matched_skills, vec!["technical", "quantitative"]);
        // 40 + 30 + 25 + 15 = 110 → clamped
        assert_eq!(result.scored.confidence_score, 100);
        assert_eq!(
            result.scored.match_reason,
            "Matches your technical and quantitative skills in preferred location"
        );
    }

    #[test]
    fn test_job_skill_requires_aptitude_threshold() {
        let profile = UserProfile {
            aptitude: AptitudeScores {
                technical: 69.0,
                ..Default::default()
            },
            ..Default::default()
        };
        let result = score_job(&make_job("Web Developer", &[], None), &profile);
        assert!(result.matched_skills.is_empty());
        assert_eq!(result.scored.confidence_score, 40);
        assert_eq!(result.scored.match_reason, GENERIC_REASON);
    }

    #[test]
    fn test_job_location_only_reason() {
        let profile = UserProfile {
            preferred_district: "Patna".to_string(),
            ..Default::default()
        };
        let result = score_job(&make_job("Store Associate", &[], Some("Patna")), &profile);
        assert_eq!(result.scored.confidence_score, 55);
        assert_eq!(result.scored.match_reason, "Opening in preferred location");
    }

    #[test]
    fn test_natural_list_forms() {
        let items: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        assert_eq!(natural_list(&items[..1]), "a");
        assert_eq!(natural_list(&items[..2]), "a and b");
        assert_eq!(natural_list(&items), "a, b and c");
    }

    #[test]
    fn test_future_course_uses_tag_family_blend() {
        let course = FutureCourse {
            name: "M.Tech Computer Science".to_string(),
            code: "mtech-cse".to_string(),
            tags: vec!["engineering".to_string(), "computer".to_string()],
            duration: None,
            description: None,
            career_paths: vec![],
        };
        let scored = score_future_course(&course, &cs_profile(), EducationLevelKey::UgCs);
        // 0.6*75.5 + 0.4*30 = 57.3
        assert_eq!(scored.confidence_score, 57);
        assert_eq!(scored.match_reason, "Strong technical aptitude");
    }

    #[test]
    fn test_future_course_interest_matches_name_or_tag() {
        let course = FutureCourse {
            name: "MBA Finance".to_string(),
            code: "mba-fin".to_string(),
            tags: vec!["finance".to_string()],
            duration: None,
            description: None,
            career_paths: vec![],
        };
        let profile = UserProfile {
            interests: vec!["Finance".to_string()],
            ..Default::default()
        };
        let scored = score_future_course(&course, &profile, EducationLevelKey::UgCommerce);
        // 0.6*0 + 0.4*100 = 40
        assert_eq!(scored.confidence_score, 40);
        assert_eq!(scored.match_reason, "Matches your interest in Finance");
    }

    #[test]
    fn test_future_course_fallback_reason_names_stage() {
        let course = FutureCourse {
            name: "PhD Research Programme".to_string(),
            code: "phd".to_string(),
            tags: vec!["research".to_string()],
            duration: None,
            description: None,
            career_paths: vec![],
        };
        let scored = score_future_course(
            &course,
            &UserProfile::default(),
            EducationLevelKey::UgScience,
        );
        assert_eq!(scored.confidence_score, 12);
        assert_eq!(scored.match_reason, "Popular next step after your degree");
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let college = make_college("computer science", &["BCA"], Some(4.5));
        let a = score_college(&college, &cs_profile(), StreamKey::ComputerScience, IN_STATE);
        let b = score_college(&college, &cs_profile(), StreamKey::ComputerScience, IN_STATE);
        assert_eq!(a, b);
    }
}
