//! Charguess core crate.
//!
//! Game logic for a browser-based "guess the character" game: a secret is
//! drawn from a loaded roster, each guess is scored per attribute category
//! (green/yellow/red), and misses past a threshold unmask letters of the
//! secret's name. All rendering, DOM wiring and data fetching live in the
//! page; this crate exposes pure logic plus a thin session facade for JS.

use std::cell::RefCell;

use serde::Serialize;
use wasm_bindgen::prelude::*;

pub mod character;
pub mod compare;
pub mod feedback;
pub mod round;
pub mod search;
pub mod text;

use character::Roster;
use compare::Category;
use feedback::FeedbackCell;
use round::{GuessResult, RoundState};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    #[cfg(target_arch = "wasm32")]
    let _ = console_log::init_with_level(log::Level::Info);
}

// -----------------------------------------------------------------------------
// Session facade
//
// JS keeps no game state of its own: it loads the roster, forwards input
// events and renders the payloads returned here. The session lives in a
// thread-local cell; wasm is single-threaded and so is the game.
// -----------------------------------------------------------------------------

struct Session {
    roster: Roster,
    round: Option<RoundState>,
    hint_enabled: bool,
    categories: &'static [Category],
    /// Names from the most recent suggestion query, in rank order. An
    /// unresolved guess falls back to the top entry, matching the typeahead
    /// the player was looking at.
    current_suggestions: Vec<String>,
}

thread_local! {
    static SESSION: RefCell<Option<Session>> = const { RefCell::new(None) };
}

fn with_session<T>(f: impl FnOnce(&mut Session) -> Result<T, JsValue>) -> Result<T, JsValue> {
    SESSION.with(|cell| {
        let mut slot = cell.borrow_mut();
        let session = slot
            .as_mut()
            .ok_or_else(|| JsValue::from_str("no roster loaded"))?;
        f(session)
    })
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

// -----------------------------------------------------------------------------
// Payloads handed to the rendering collaborator
// -----------------------------------------------------------------------------

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RoundStartPayload {
    started: bool,
    message: &'static str,
    letter_hint: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CategoryHeader {
    key: &'static str,
    label: &'static str,
    tooltip: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Suggestion {
    name: String,
    aliases: Vec<String>,
}

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
enum GuessPayload {
    /// Round won; guess controls should be disabled.
    #[serde(rename_all = "camelCase")]
    Correct {
        name: String,
        row: Vec<FeedbackCell>,
        letter_hint: String,
    },
    #[serde(rename_all = "camelCase")]
    Incorrect {
        name: String,
        row: Vec<FeedbackCell>,
        letter_hint: String,
        incorrect_guesses: u32,
    },
    /// Input resolved to no character and no suggestion was available.
    ChooseFromSuggestions,
    /// Terminal round (won or revealed); submission is disabled.
    RoundOver,
    /// Empty roster: no secret exists to guess against.
    NoSecret,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RevealPayload {
    name: String,
    row: Vec<FeedbackCell>,
}

// -----------------------------------------------------------------------------
// Exports
// -----------------------------------------------------------------------------

/// Parses the fetched character dataset, builds the search index and starts
/// the first round. The page treats fetch failure as `"[]"`.
#[wasm_bindgen]
pub fn load_roster(json: &str) -> Result<JsValue, JsValue> {
    let roster = Roster::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    // The deceased column only participates when the dataset carries it.
    let categories = if roster.characters().iter().any(|c| c.deceased.is_some()) {
        Category::ALL
    } else {
        Category::WITHOUT_DECEASED
    };
    let round = RoundState::start(&roster, &mut rand::rng());
    let session = Session {
        roster,
        round,
        hint_enabled: true,
        categories,
        current_suggestions: Vec::new(),
    };
    let payload = round_start_payload(&session);
    SESSION.with(|cell| cell.replace(Some(session)));
    to_js(&payload)
}

/// Discards the current round wholesale and draws a fresh secret.
#[wasm_bindgen]
pub fn new_round() -> Result<JsValue, JsValue> {
    with_session(|session| {
        session.round = RoundState::start(&session.roster, &mut rand::rng());
        session.current_suggestions.clear();
        to_js(&round_start_payload(session))
    })
}

/// Category headers (key, label, tooltip) for one-time header rendering.
#[wasm_bindgen]
pub fn category_headers() -> Result<JsValue, JsValue> {
    with_session(|session| {
        let headers: Vec<CategoryHeader> = session
            .categories
            .iter()
            .map(|&c| CategoryHeader {
                key: c.key(),
                label: c.label(),
                tooltip: c.tooltip(),
            })
            .collect();
        to_js(&headers)
    })
}

/// Ranked typeahead suggestions for a free-text query. Debouncing is the
/// caller's job; this is a pure lookup.
#[wasm_bindgen]
pub fn suggestions(query: &str) -> Result<JsValue, JsValue> {
    with_session(|session| {
        let excluded = session
            .round
            .as_ref()
            .map(|r| r.guessed_names().clone())
            .unwrap_or_default();
        let matches = search::match_characters(session.roster.characters(), query, &excluded);
        session.current_suggestions = matches.iter().map(|c| c.name.clone()).collect();
        let payload: Vec<Suggestion> = matches
            .iter()
            .map(|c| Suggestion {
                name: c.name.clone(),
                aliases: c.aliases.clone(),
            })
            .collect();
        to_js(&payload)
    })
}

/// Resolves and scores one guess.
///
/// Resolution: exact normalized name/alias match, else the top entry of the
/// most recent suggestion list, else a `chooseFromSuggestions` payload with
/// round state untouched.
#[wasm_bindgen]
pub fn submit_guess(raw: &str) -> Result<JsValue, JsValue> {
    with_session(|session| {
        let Some(round) = session.round.as_mut() else {
            return to_js(&GuessPayload::NoSecret);
        };
        if round.is_over() {
            return to_js(&GuessPayload::RoundOver);
        }

        let resolved = session
            .roster
            .find(raw)
            .or_else(|| {
                session
                    .current_suggestions
                    .first()
                    .and_then(|name| session.roster.find(name))
            })
            .cloned();
        session.current_suggestions.clear();
        let Some(guess) = resolved else {
            log::warn!("guess {raw:?} matched no character");
            return to_js(&GuessPayload::ChooseFromSuggestions);
        };

        let row = feedback::feedback_row(&guess, round.secret(), session.categories);
        let result = round.submit(&guess, session.hint_enabled, &mut rand::rng());
        let letter_hint = round.letter_hint(session.hint_enabled);
        let payload = match result {
            GuessResult::Correct => GuessPayload::Correct {
                name: guess.name,
                row,
                letter_hint,
            },
            GuessResult::Incorrect => GuessPayload::Incorrect {
                name: guess.name,
                row,
                letter_hint,
                incorrect_guesses: round.incorrect_guesses(),
            },
        };
        to_js(&payload)
    })
}

/// Forces the secret into the open: terminal state plus an all-green row of
/// the secret scored against itself.
#[wasm_bindgen]
pub fn reveal_secret() -> Result<JsValue, JsValue> {
    with_session(|session| {
        let Some(round) = session.round.as_mut() else {
            return Err(JsValue::from_str("no secret to reveal"));
        };
        round.reveal();
        let secret = round.secret().clone();
        let row = feedback::feedback_row(&secret, &secret, session.categories);
        to_js(&RevealPayload {
            name: secret.name,
            row,
        })
    })
}

/// Current letter-hint text; empty while the feature is disabled.
#[wasm_bindgen]
pub fn letter_hint() -> String {
    SESSION.with(|cell| {
        cell.borrow()
            .as_ref()
            .and_then(|s| s.round.as_ref().map(|r| r.letter_hint(s.hint_enabled)))
            .unwrap_or_default()
    })
}

/// Toggles the letter-hint feature. Disabling blanks the hint immediately but
/// keeps revealed progress, so re-enabling restores it.
#[wasm_bindgen]
pub fn set_letter_hint_enabled(enabled: bool) {
    SESSION.with(|cell| {
        if let Some(session) = cell.borrow_mut().as_mut() {
            session.hint_enabled = enabled;
        }
    });
}

fn round_start_payload(session: &Session) -> RoundStartPayload {
    match &session.round {
        Some(round) => RoundStartPayload {
            started: true,
            message: "New round started. Make a guess!",
            letter_hint: round.letter_hint(session.hint_enabled),
        },
        None => RoundStartPayload {
            started: false,
            message: "No characters loaded.",
            letter_hint: String::new(),
        },
    }
}
