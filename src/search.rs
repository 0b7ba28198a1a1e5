//! Typeahead search: per-character token index plus a two-tier
//! prefix/substring matcher.

use std::collections::HashSet;

use crate::character::Character;
use crate::text::normalize;

/// Cap on suggestions returned per query.
pub const MAX_SUGGESTIONS: usize = 8;

/// Rebuilds `search_tokens` for every character: normalized name, aliases and
/// orgs, duplicates collapsed. Must be rerun whenever the collection is
/// (re)loaded; tokens are read-only afterwards.
pub fn build_index(characters: &mut [Character]) {
    for c in characters {
        let mut tokens: Vec<String> = Vec::with_capacity(1 + c.aliases.len() + c.orgs.len());
        tokens.push(normalize(&c.name));
        tokens.extend(c.aliases.iter().map(|a| normalize(a)));
        tokens.extend(c.orgs.iter().map(|o| normalize(o)));
        tokens.sort();
        tokens.dedup();
        c.search_tokens = tokens;
    }
}

/// Ranks candidates for a free-text query.
///
/// Two tiers: characters with a token that starts with the query come first,
/// then characters whose tokens merely contain it; dataset order is preserved
/// within each tier. Characters named in `excluded` (already guessed this
/// round) are skipped. At most [`MAX_SUGGESTIONS`] results.
pub fn match_characters<'a>(
    characters: &'a [Character],
    query: &str,
    excluded: &HashSet<String>,
) -> Vec<&'a Character> {
    let q = normalize(query);
    if q.is_empty() {
        return Vec::new();
    }

    let mut starts: Vec<&Character> = Vec::new();
    let mut contains: Vec<&Character> = Vec::new();

    for c in characters {
        if excluded.contains(&c.name) {
            continue;
        }
        let mut tier = None;
        for token in &c.search_tokens {
            if token.starts_with(&q) {
                tier = Some(true);
                break;
            }
            if token.contains(&q) {
                tier = Some(false);
            }
        }
        match tier {
            Some(true) => starts.push(c),
            Some(false) => contains.push(c),
            None => {}
        }
    }

    starts.extend(contains);
    starts.truncate(MAX_SUGGESTIONS);
    starts
}
