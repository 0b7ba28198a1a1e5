// Native tests for the comparison engine and text primitives. These avoid
// wasm/browser APIs and run under plain `cargo test` on the host.

use charguess::compare::{
    Verdict, compare_episode_count, compare_orgs, compare_season_episode, compare_seasons,
    compare_token,
};
use charguess::text::{SeasonEpisode, normalize, normalize_opt, parse_season_episode};

#[test]
fn normalize_trims_and_lowercases() {
    assert_eq!(normalize("  Daryl Dixon \n"), "daryl dixon");
    assert_eq!(normalize(""), "");
    assert_eq!(normalize_opt(None), "");
    assert_eq!(normalize_opt(Some(" RICK ")), "rick");
}

#[test]
fn normalize_is_idempotent() {
    for s in ["  MiXeD Case  ", "", "already normal", "\tTABS\t", "ÅNGSTRÖM"] {
        let once = normalize(s);
        assert_eq!(normalize(&once), once, "normalize not idempotent for {s:?}");
    }
}

#[test]
fn season_episode_parser_accepts_canonical_shapes() {
    let expected = Some(SeasonEpisode { season: 2, episode: 14 });
    assert_eq!(parse_season_episode("S2E14"), expected);
    assert_eq!(parse_season_episode("s2e14"), expected);
    assert_eq!(parse_season_episode(" S2E14 "), expected);
    assert_eq!(
        parse_season_episode("s11e24"),
        Some(SeasonEpisode { season: 11, episode: 24 })
    );
}

#[test]
fn season_episode_parser_rejects_everything_else() {
    for bad in ["2x14", "", "s2", "e14", "s2e", "se14", "sxey", "s2e1e4", "s-2e14", "s2 e14"] {
        assert_eq!(parse_season_episode(bad), None, "accepted malformed token {bad:?}");
    }
}

#[test]
fn seasons_rule_follows_set_semantics() {
    // Equal as sets, order and duplicates irrelevant.
    assert_eq!(compare_seasons(&[1, 2, 3], &[3, 2, 1]), Verdict::Green);
    assert_eq!(compare_seasons(&[1, 1, 2], &[2, 1]), Verdict::Green);
    // Any overlap short of equality is partial.
    assert_eq!(compare_seasons(&[1, 2], &[2, 3]), Verdict::Yellow);
    assert_eq!(compare_seasons(&[1], &[1, 2]), Verdict::Yellow);
    // Disjoint or empty is a definite mismatch.
    assert_eq!(compare_seasons(&[1, 2], &[3, 4]), Verdict::Red);
    assert_eq!(compare_seasons(&[], &[1]), Verdict::Red);
    assert_eq!(compare_seasons(&[1], &[]), Verdict::Red);
    assert_eq!(compare_seasons(&[], &[]), Verdict::Red);
}

#[test]
fn appearance_rule_tiers_on_season_then_episode() {
    assert_eq!(compare_season_episode(Some("s2e14"), Some("S2E14")), Verdict::Green);
    assert_eq!(compare_season_episode(Some("s2e1"), Some("s2e14")), Verdict::Yellow);
    assert_eq!(compare_season_episode(Some("s1e14"), Some("s2e14")), Verdict::Red);
    // Unparseable on either side is a mismatch, not an error.
    assert_eq!(compare_season_episode(Some("2x14"), Some("s2e14")), Verdict::Red);
    assert_eq!(compare_season_episode(None, Some("s2e14")), Verdict::Red);
    assert_eq!(compare_season_episode(Some("s2e14"), None), Verdict::Red);
}

#[test]
fn episode_count_rule_has_a_five_episode_band() {
    assert_eq!(compare_episode_count(Some(10.0), Some(10.0)), Verdict::Green);
    assert_eq!(compare_episode_count(Some(10.0), Some(15.0)), Verdict::Yellow);
    assert_eq!(compare_episode_count(Some(15.0), Some(10.0)), Verdict::Yellow);
    assert_eq!(compare_episode_count(Some(10.0), Some(16.0)), Verdict::Red);
    assert_eq!(compare_episode_count(None, Some(10.0)), Verdict::Red);
    assert_eq!(compare_episode_count(Some(10.0), None), Verdict::Red);
    assert_eq!(compare_episode_count(Some(f64::NAN), Some(10.0)), Verdict::Red);
}

#[test]
fn token_rule_is_binary_and_case_insensitive() {
    assert_eq!(compare_token(Some("Male"), Some("male")), Verdict::Green);
    assert_eq!(compare_token(Some(" TRUE "), Some("true")), Verdict::Green);
    assert_eq!(compare_token(Some("male"), Some("female")), Verdict::Red);
    assert_eq!(compare_token(None, Some("male")), Verdict::Red);
    assert_eq!(compare_token(Some("male"), None), Verdict::Red);
    assert_eq!(compare_token(Some(""), Some("male")), Verdict::Red);
}

#[test]
fn orgs_rule_normalizes_before_set_comparison() {
    let saviors = vec!["Saviors".to_string()];
    let saviors_padded = vec![" saviors ".to_string()];
    assert_eq!(compare_orgs(&saviors, &saviors_padded), Verdict::Green);

    let two = vec!["Saviors".to_string(), "Alexandria".to_string()];
    assert_eq!(compare_orgs(&saviors, &two), Verdict::Yellow);

    let kingdom = vec!["Kingdom".to_string()];
    assert_eq!(compare_orgs(&saviors, &kingdom), Verdict::Red);

    // Empty strings are filtered; a side that ends up empty is a mismatch.
    let blank = vec!["  ".to_string()];
    assert_eq!(compare_orgs(&blank, &saviors), Verdict::Red);
    assert_eq!(compare_orgs(&[], &saviors), Verdict::Red);
}
