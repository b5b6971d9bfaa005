//! Aggregate explanation: summarises a finished recommendation run as a
//! handful of plain sentences for the results page.

use crate::models::candidate::{RankedCollege, RankedJob, RankedScholarship};
use crate::models::profile::{AptitudeKind, UserProfile};

const TOP_APTITUDES: usize = 3;

pub const QUIZ_PROMPT: &str =
    "Take the aptitude quiz so we can tailor these recommendations to your strengths.";
pub const BROADEN_PROMPT: &str =
    "We couldn't find strong matches yet. Try adding more interests or widening your preferred locations.";

/// Builds 2–4 sentences: one about the student's strongest aptitudes, then one
/// per non-empty ranked set.
pub fn explain(
    profile: &UserProfile,
    colleges: &[RankedCollege],
    scholarships: &[RankedScholarship],
    jobs: &[RankedJob],
) -> Vec<String> {
    let mut lines = vec![aptitude_sentence(profile)];

    if !colleges.is_empty() {
        let place = match profile.preferred_state.trim() {
            "" => String::new(),
            state => format!(" in and around {state}"),
        };
        lines.push(format!(
            "Found {}{place} matching your stream and strengths.",
            count_noun(colleges.len(), "college", "colleges")
        ));
    }
    if !scholarships.is_empty() {
        lines.push(format!(
            "{} may be open to you.",
            count_noun(scholarships.len(), "scholarship", "scholarships")
        ));
    }
    if !jobs.is_empty() {
        lines.push(format!(
            "{} {} your skills.",
            count_noun(jobs.len(), "job opening", "job openings"),
            if jobs.len() == 1 { "matches" } else { "match" }
        ));
    }

    if lines.len() == 1 {
        lines.push(BROADEN_PROMPT.to_string());
    }
    lines
}

/// Up to three aptitudes with a positive score, highest first. Ties keep the
/// fixed logical → numerical → technical → verbal → creative order.
pub fn top_aptitudes(profile: &UserProfile) -> Vec<AptitudeKind> {
    let mut kinds: Vec<AptitudeKind> = AptitudeKind::ALL
        .into_iter()
        .filter(|kind| profile.aptitude.get(*kind) > 0.0)
        .collect();
    // sort_by is stable, so equal scores stay in enumeration order.
    kinds.sort_by(|a, b| {
        profile
            .aptitude
            .get(*b)
            .total_cmp(&profile.aptitude.get(*a))
    });
    kinds.truncate(TOP_APTITUDES);
    kinds
}

fn aptitude_sentence(profile: &UserProfile) -> String {
    let labels: Vec<&str> = top_aptitudes(profile)
        .into_iter()
        .map(AptitudeKind::label)
        .collect();
    match labels.as_slice() {
        [] => QUIZ_PROMPT.to_string(),
        [only] => format!("Your strongest area is {only}."),
        [first, second] => format!("Your strongest areas are {first} and {second}."),
        [init @ .., last] => format!("Your strongest areas are {} and {last}.", init.join(", ")),
    }
}

fn count_noun(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("1 {singular}")
    } else {
        format!("{count} {plural}")
    }
}
