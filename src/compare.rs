//! Attribute comparison engine: one rule per category, dispatched by
//! exhaustive match over a closed category enum.
//!
//! Every rule maps a (guess, secret) attribute pair to a three-level verdict.
//! Absent, null or empty-collection inputs are a definite mismatch (Red);
//! no rule defaults to Green and none can fail.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::character::Character;
use crate::text::{normalize, parse_season_episode};

/// Three-level match quality for a single category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Green,
    Yellow,
    Red,
}

/// The closed set of comparable attribute categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Seasons,
    First,
    Last,
    EpisodeCount,
    Gender,
    Orgs,
    Deceased,
}

impl Category {
    /// Full category list, in feedback-row order.
    pub const ALL: &'static [Category] = &[
        Category::Seasons,
        Category::First,
        Category::Last,
        Category::EpisodeCount,
        Category::Gender,
        Category::Orgs,
        Category::Deceased,
    ];

    /// Variant list for datasets without a `deceased` field.
    pub const WITHOUT_DECEASED: &'static [Category] = &[
        Category::Seasons,
        Category::First,
        Category::Last,
        Category::EpisodeCount,
        Category::Gender,
        Category::Orgs,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Category::Seasons => "seasons",
            Category::First => "first",
            Category::Last => "last",
            Category::EpisodeCount => "episodeCount",
            Category::Gender => "gender",
            Category::Orgs => "orgs",
            Category::Deceased => "deceased",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Seasons => "Seasons",
            Category::First => "First appearance",
            Category::Last => "Last appearance",
            Category::EpisodeCount => "Episode count",
            Category::Gender => "Gender",
            Category::Orgs => "Organization",
            Category::Deceased => "Deceased",
        }
    }

    pub fn tooltip(self) -> &'static str {
        match self {
            Category::Seasons => {
                "Green: exact seasons match\nYellow: at least one season matches\nRed: no seasons match"
            }
            Category::First => {
                "Green: first appearance exact episode\nYellow: first appearance same season\nRed: different season"
            }
            Category::Last => {
                "Green: last appearance exact episode\nYellow: last appearance same season\nRed: different season"
            }
            Category::EpisodeCount => {
                "Green: exact episode count\nYellow: within ±5 episodes\nRed: more than 5 difference"
            }
            Category::Gender => "Green: gender matches\nRed: gender does not match",
            Category::Orgs => {
                "Green: exact organizations match\nYellow: at least one organization matches\nRed: no organizations match"
            }
            Category::Deceased => "Green: guess matches deceased status\nRed: guess does not match",
        }
    }
}

/// Scores one category of `guess` against `secret`.
pub fn compare(category: Category, guess: &Character, secret: &Character) -> Verdict {
    match category {
        Category::Seasons => compare_seasons(&guess.seasons, &secret.seasons),
        Category::First => compare_season_episode(guess.first.as_deref(), secret.first.as_deref()),
        Category::Last => compare_season_episode(guess.last.as_deref(), secret.last.as_deref()),
        Category::EpisodeCount => compare_episode_count(guess.episode_count, secret.episode_count),
        Category::Gender => compare_token(guess.gender.as_deref(), secret.gender.as_deref()),
        Category::Orgs => compare_orgs(&guess.orgs, &secret.orgs),
        Category::Deceased => compare_token(guess.deceased.as_deref(), secret.deceased.as_deref()),
    }
}

/// Set semantics: Green on equal non-empty sets, Yellow on any overlap.
pub fn compare_seasons(guess: &[i64], secret: &[i64]) -> Verdict {
    let g: BTreeSet<i64> = guess.iter().copied().collect();
    let s: BTreeSet<i64> = secret.iter().copied().collect();
    set_verdict(&g, &s)
}

/// Green on exact episode, Yellow on same season, Red otherwise or when
/// either token fails to parse.
pub fn compare_season_episode(guess: Option<&str>, secret: Option<&str>) -> Verdict {
    let (Some(g), Some(s)) = (
        guess.and_then(parse_season_episode),
        secret.and_then(parse_season_episode),
    ) else {
        return Verdict::Red;
    };
    if g == s {
        Verdict::Green
    } else if g.season == s.season {
        Verdict::Yellow
    } else {
        Verdict::Red
    }
}

/// Green on equality, Yellow within ±5 episodes.
pub fn compare_episode_count(guess: Option<f64>, secret: Option<f64>) -> Verdict {
    let (Some(g), Some(s)) = (guess.filter(|n| !n.is_nan()), secret.filter(|n| !n.is_nan()))
    else {
        return Verdict::Red;
    };
    if g == s {
        Verdict::Green
    } else if (g - s).abs() <= 5.0 {
        Verdict::Yellow
    } else {
        Verdict::Red
    }
}

/// Binary category (gender, deceased): normalized equality or Red.
pub fn compare_token(guess: Option<&str>, secret: Option<&str>) -> Verdict {
    let (Some(g), Some(s)) = (guess, secret) else {
        return Verdict::Red;
    };
    if g.is_empty() || s.is_empty() {
        return Verdict::Red;
    }
    if normalize(g) == normalize(s) {
        Verdict::Green
    } else {
        Verdict::Red
    }
}

/// Same set semantics as seasons, over normalized non-empty org names.
pub fn compare_orgs(guess: &[String], secret: &[String]) -> Verdict {
    let g: BTreeSet<String> = guess.iter().map(|o| normalize(o)).filter(|o| !o.is_empty()).collect();
    let s: BTreeSet<String> = secret.iter().map(|o| normalize(o)).filter(|o| !o.is_empty()).collect();
    set_verdict(&g, &s)
}

fn set_verdict<T: Ord>(guess: &BTreeSet<T>, secret: &BTreeSet<T>) -> Verdict {
    if guess.is_empty() || secret.is_empty() {
        return Verdict::Red;
    }
    if guess == secret {
        Verdict::Green
    } else if guess.intersection(secret).next().is_some() {
        Verdict::Yellow
    } else {
        Verdict::Red
    }
}
