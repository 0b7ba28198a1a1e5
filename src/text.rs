//! Text primitives shared by the comparison engine and search index:
//! case/whitespace-insensitive normalization and the compact `SxxEyy`
//! season/episode token parser.

/// Normalized form used as the equality basis everywhere: trimmed and
/// lowercased. Total and idempotent.
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// `normalize` over an optional value; missing input normalizes to `""`.
pub fn normalize_opt(value: Option<&str>) -> String {
    value.map(normalize).unwrap_or_default()
}

/// Parsed `S<season>E<episode>` token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeasonEpisode {
    pub season: u32,
    pub episode: u32,
}

/// Parses a compact season/episode token like `"S2E14"`.
///
/// Accepts exactly `s<digits>e<digits>` after trim + lowercase. Any other
/// shape yields `None` — a comparison-engine signal that the value is
/// unusable, not an error.
pub fn parse_season_episode(token: &str) -> Option<SeasonEpisode> {
    let t = normalize(token);
    let rest = t.strip_prefix('s')?;
    let (season, episode) = rest.split_once('e')?;
    if season.is_empty() || episode.is_empty() {
        return None;
    }
    if !season.bytes().all(|b| b.is_ascii_digit()) || !episode.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(SeasonEpisode {
        season: season.parse().ok()?,
        episode: episode.parse().ok()?,
    })
}
