//! Round lifecycle: secret selection, guess resolution, miss counting and
//! incremental letter-hint disclosure.
//!
//! `RoundState` is a single owned record replaced wholesale between rounds;
//! transitions are plain methods taking an injected RNG so rounds are
//! deterministic under test.

use std::collections::{BTreeSet, HashSet};

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::character::{Character, Roster};
use crate::text::normalize;

/// Misses before letter hints start unmasking.
pub const MISS_HINT_THRESHOLD: u32 = 5;

/// Placeholder for unrevealed hint letters.
const HINT_MASK: char = '_';

/// Where a round stands. `Won` and `Revealed` are terminal: guess submission
/// is disabled in both.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    AwaitingGuess,
    Won,
    Revealed,
}

/// Result of submitting one resolved guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuessResult {
    Correct,
    Incorrect,
}

/// One playthrough against one secret.
pub struct RoundState {
    secret: Character,
    phase: Phase,
    incorrect_guesses: u32,
    /// Character indices of `secret.name` disclosed so far; grows
    /// monotonically within a round.
    revealed: BTreeSet<usize>,
    /// Names already submitted this round; excluded from suggestions.
    guessed: HashSet<String>,
}

impl RoundState {
    /// Starts a round against a uniformly random secret. `None` when the
    /// roster is empty — the caller disables guessing and reports that no
    /// characters are loaded.
    pub fn start(roster: &Roster, rng: &mut impl Rng) -> Option<RoundState> {
        let secret = roster.pick_secret(rng)?.clone();
        log::debug!("round started, secret name length {}", secret.name.len());
        Some(RoundState {
            secret,
            phase: Phase::AwaitingGuess,
            incorrect_guesses: 0,
            revealed: BTreeSet::new(),
            guessed: HashSet::new(),
        })
    }

    pub fn secret(&self) -> &Character {
        &self.secret
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn incorrect_guesses(&self) -> u32 {
        self.incorrect_guesses
    }

    /// True once the round is over and guess controls should be disabled.
    pub fn is_over(&self) -> bool {
        self.phase != Phase::AwaitingGuess
    }

    pub fn guessed_names(&self) -> &HashSet<String> {
        &self.guessed
    }

    /// Resolves one guess against the secret.
    ///
    /// On a name match (normalized) the round is won and every index of the
    /// name is revealed — spaces are not hint targets but join the reveal set
    /// so the full name renders without placeholders. On a miss the counter
    /// advances and, once it reaches [`MISS_HINT_THRESHOLD`] with hints
    /// enabled, exactly one previously-unrevealed non-space index is
    /// disclosed per miss.
    pub fn submit(
        &mut self,
        guess: &Character,
        hint_enabled: bool,
        rng: &mut impl Rng,
    ) -> GuessResult {
        self.guessed.insert(guess.name.clone());

        if normalize(&guess.name) == normalize(&self.secret.name) {
            self.phase = Phase::Won;
            self.revealed.extend(0..self.secret.name.chars().count());
            return GuessResult::Correct;
        }

        self.incorrect_guesses += 1;
        if self.incorrect_guesses >= MISS_HINT_THRESHOLD && hint_enabled {
            self.reveal_one_letter(rng);
        }
        GuessResult::Incorrect
    }

    /// Forces the round into its revealed terminal state.
    pub fn reveal(&mut self) {
        self.phase = Phase::Revealed;
    }

    /// Masked rendering of the secret's name: revealed indices and spaces
    /// show through, everything else is a placeholder. Always empty while the
    /// hint feature is disabled; the revealed set is untouched by the toggle,
    /// so re-enabling restores prior progress.
    pub fn letter_hint(&self, hint_enabled: bool) -> String {
        if !hint_enabled {
            return String::new();
        }
        self.secret
            .name
            .chars()
            .enumerate()
            .map(|(idx, ch)| {
                if ch == ' ' || self.revealed.contains(&idx) {
                    ch
                } else {
                    HINT_MASK
                }
            })
            .collect()
    }

    fn reveal_one_letter(&mut self, rng: &mut impl Rng) {
        let unrevealed: Vec<usize> = self
            .secret
            .name
            .chars()
            .enumerate()
            .filter(|&(idx, ch)| ch != ' ' && !self.revealed.contains(&idx))
            .map(|(idx, _)| idx)
            .collect();
        if let Some(&idx) = unrevealed.choose(rng) {
            self.revealed.insert(idx);
        }
    }
}
