//! Dataset model: guessable characters and the roster that owns them.
//!
//! The dataset arrives as JSON fetched by the page; fields the comparison
//! engine consumes are deserialized leniently so a sloppy dataset (numeric
//! strings, boolean `deceased`, missing optionals) degrades to "value
//! unusable" instead of a load failure.

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::search;
use crate::text::normalize;

/// One secret/guessable subject.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Character {
    /// Canonical identity; unique display key.
    pub name: String,
    /// Alternate accepted spellings; lookups by alias resolve to the same
    /// entity as lookups by name.
    pub aliases: Vec<String>,
    #[serde(deserialize_with = "lenient_ints")]
    pub seasons: Vec<i64>,
    /// First appearance as a raw `S<season>E<episode>` token.
    pub first: Option<String>,
    /// Last appearance token, same format.
    pub last: Option<String>,
    #[serde(deserialize_with = "lenient_number")]
    pub episode_count: Option<f64>,
    pub gender: Option<String>,
    pub orgs: Vec<String>,
    /// Boolean-like token, compared case-insensitively. Only present in one
    /// dataset schema variant.
    #[serde(deserialize_with = "lenient_token")]
    pub deceased: Option<String>,
    /// Derived from name/aliases/orgs at index build; never serialized.
    #[serde(skip)]
    pub search_tokens: Vec<String>,
}

impl Character {
    /// True when `query` (already normalized) equals the name or any alias.
    pub fn answers_to(&self, normalized_query: &str) -> bool {
        if normalized_query.is_empty() {
            return false;
        }
        normalize(&self.name) == normalized_query
            || self
                .aliases
                .iter()
                .any(|a| normalize(a) == normalized_query)
    }
}

/// The loaded character collection plus its search index.
pub struct Roster {
    characters: Vec<Character>,
}

impl Roster {
    /// Parses a JSON array of characters and builds the search index.
    ///
    /// The caller treats fetch failure as an empty dataset; an empty or
    /// malformed array therefore surfaces as `Err` only on outright invalid
    /// JSON, never on per-field sloppiness.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut characters: Vec<Character> = serde_json::from_str(json)?;
        search::build_index(&mut characters);
        log::info!("roster loaded: {} characters", characters.len());
        Ok(Self { characters })
    }

    pub fn from_characters(mut characters: Vec<Character>) -> Self {
        search::build_index(&mut characters);
        Self { characters }
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Exact lookup by normalized name or alias.
    pub fn find(&self, name_or_alias: &str) -> Option<&Character> {
        let q = normalize(name_or_alias);
        self.characters.iter().find(|c| c.answers_to(&q))
    }

    /// Uniformly random secret for a new round; `None` when nothing loaded.
    pub fn pick_secret(&self, rng: &mut impl Rng) -> Option<&Character> {
        self.characters.choose(rng)
    }
}

// Lenient field deserializers. Each accepts the shapes real datasets have
// been seen to contain and drops anything else rather than failing the load.

fn lenient_ints<'de, D: Deserializer<'de>>(de: D) -> Result<Vec<i64>, D::Error> {
    let raw = Option::<Vec<Value>>::deserialize(de)?.unwrap_or_default();
    Ok(raw.iter().filter_map(value_as_int).collect())
}

fn lenient_number<'de, D: Deserializer<'de>>(de: D) -> Result<Option<f64>, D::Error> {
    Ok(Option::<Value>::deserialize(de)?.as_ref().and_then(value_as_number))
}

fn lenient_token<'de, D: Deserializer<'de>>(de: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<Value>::deserialize(de)?.as_ref().and_then(value_as_token))
}

fn value_as_int(v: &Value) -> Option<i64> {
    match v {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn value_as_number(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn value_as_token(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
