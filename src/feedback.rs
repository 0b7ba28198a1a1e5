//! Display payloads handed to the rendering collaborator. The core never
//! touches presentation; these structures are the entire contract.

use serde::Serialize;

use crate::character::Character;
use crate::compare::{self, Category, Verdict};

/// Placeholder rendered for missing or empty attribute values.
pub const MISSING_VALUE: &str = "—";

/// One colored cell of a feedback row.
#[derive(Clone, Debug, Serialize)]
pub struct FeedbackCell {
    pub category: Category,
    pub verdict: Verdict,
    pub value: String,
}

/// Scores `guess` against `secret` across `categories`, in order.
///
/// The reveal row is this function applied to the secret against itself,
/// green in every category the secret has data for.
pub fn feedback_row(
    guess: &Character,
    secret: &Character,
    categories: &[Category],
) -> Vec<FeedbackCell> {
    categories
        .iter()
        .map(|&category| FeedbackCell {
            category,
            verdict: compare::compare(category, guess, secret),
            value: display_value(category, guess),
        })
        .collect()
}

/// Renders one attribute for display: multi-valued attributes comma-joined,
/// anything missing or empty as an em-dash.
pub fn display_value(category: Category, character: &Character) -> String {
    match category {
        Category::Seasons => join_or_missing(character.seasons.iter().map(i64::to_string)),
        Category::Orgs => join_or_missing(character.orgs.iter().cloned()),
        Category::First => text_or_missing(character.first.as_deref()),
        Category::Last => text_or_missing(character.last.as_deref()),
        Category::EpisodeCount => character
            .episode_count
            .map(format_count)
            .unwrap_or_else(|| MISSING_VALUE.to_string()),
        Category::Gender => text_or_missing(character.gender.as_deref()),
        Category::Deceased => text_or_missing(character.deceased.as_deref()),
    }
}

fn join_or_missing(values: impl Iterator<Item = String>) -> String {
    let joined = values.collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        MISSING_VALUE.to_string()
    } else {
        joined
    }
}

fn text_or_missing(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => MISSING_VALUE.to_string(),
    }
}

// Episode counts are integers in practice; keep "153" rather than "153.0"
// while still tolerating fractional junk in the dataset.
fn format_count(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}
