//! Review session management for threshold-based practice.
//! Samples a working set from the incomplete cards and retires cards once mastered.

use super::deck_filter::filter_incomplete;
use super::sampling::{pick_current, sample};
use super::{AttemptRecord, Card, CardHandle, Deck, Direction, SessionSettings};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

/// User input that drives the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Show,
    Skip,
    Correct,
    Incorrect,
}

/// The card currently on screen: a position in the review set plus the practiced side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor {
    pub position: usize,
    pub direction: Direction,
}

/// Owns the deck for the duration of a session.
/// The incomplete and review sets hold handles resolved back into the deck on every access.
pub struct ReviewSession {
    deck: Deck,
    settings: SessionSettings,
    incomplete: Vec<CardHandle>,
    review_set: Vec<CardHandle>,
    cursor: Option<Cursor>,
    answer_revealed: bool,
    /// Sample size tracks the deck size until it is set explicitly.
    whole_deck: bool,
    rng: StdRng,
}

impl ReviewSession {
    pub fn new(deck: Deck, settings: SessionSettings) -> Self {
        Self::with_rng(deck, settings, StdRng::from_os_rng())
    }

    pub fn with_rng(deck: Deck, settings: SessionSettings, rng: StdRng) -> Self {
        let mut session = Self {
            deck,
            settings,
            incomplete: Vec::new(),
            review_set: Vec::new(),
            cursor: None,
            answer_revealed: false,
            whole_deck: false,
            rng,
        };
        session.refresh_incomplete();
        session.resample();
        session
    }

    /// Draws from the whole deck, now and after every `replace_deck`,
    /// until `set_sample_size` is called.
    pub fn sample_whole_deck(mut self) -> Self {
        self.whole_deck = true;
        self.sync_whole_deck_size();
        self.resample();
        self
    }

    pub fn samples_whole_deck(&self) -> bool {
        self.whole_deck
    }

    fn sync_whole_deck_size(&mut self) {
        if self.whole_deck {
            self.settings.sample_size = u32::try_from(self.deck.len()).unwrap_or(u32::MAX);
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn settings(&self) -> SessionSettings {
        self.settings
    }

    pub fn total_count(&self) -> usize {
        self.deck.len()
    }

    pub fn incomplete_count(&self) -> usize {
        self.incomplete.len()
    }

    pub fn review_count(&self) -> usize {
        self.review_set.len()
    }

    pub fn review_set(&self) -> &[CardHandle] {
        &self.review_set
    }

    pub fn cursor(&self) -> Option<Cursor> {
        self.cursor
    }

    pub fn answer_revealed(&self) -> bool {
        self.answer_revealed
    }

    pub fn current_handle(&self) -> Option<CardHandle> {
        self.cursor
            .and_then(|cursor| self.review_set.get(cursor.position).copied())
    }

    pub fn current_card(&self) -> Option<&Card> {
        self.current_handle().and_then(|h| self.deck.get(h))
    }

    pub fn current_direction(&self) -> Option<Direction> {
        self.cursor.map(|cursor| cursor.direction)
    }

    /// Prompt or response of the current card, depending on direction and reveal state.
    pub fn current_text(&self) -> Option<&str> {
        let direction = self.current_direction()?;
        self.current_card()
            .map(|card| card.face(direction, self.answer_revealed))
    }

    /// Returns true once the review set has been used up.
    pub fn is_exhausted(&self) -> bool {
        self.review_set.is_empty()
    }

    pub fn set_threshold(&mut self, threshold: u32) {
        if self.settings.threshold != threshold {
            self.settings.threshold = threshold;
            self.refresh_incomplete();
            self.resample();
        }
    }

    pub fn set_sample_size(&mut self, sample_size: u32) {
        self.whole_deck = false;
        if self.settings.sample_size != sample_size {
            self.settings.sample_size = sample_size;
            self.resample();
        }
    }

    /// Swaps in a new deck and starts over from it.
    pub fn replace_deck(&mut self, deck: Deck) {
        self.deck = deck;
        self.sync_whole_deck_size();
        self.refresh_incomplete();
        self.resample();
    }

    /// Reruns the deck filter. Called after anything that can change eligibility.
    pub fn refresh_incomplete(&mut self) {
        self.incomplete = filter_incomplete(&self.deck, self.settings.threshold);
    }

    /// Draws a fresh review set from the incomplete cards and picks a current card.
    pub fn resample(&mut self) {
        let size = usize::try_from(self.settings.sample_size).unwrap_or(usize::MAX);
        self.review_set = sample(&self.incomplete, size, &mut self.rng);
        self.answer_revealed = false;
        self.pick_current();
    }

    /// Moves the cursor to a random card of the review set, or clears it when the set is empty.
    pub fn pick_current(&mut self) -> Option<Cursor> {
        let cursor = match pick_current(self.review_set.len(), &mut self.rng) {
            Some(position) => {
                let direction = self.choose_direction(self.review_set[position]);
                Some(Cursor {
                    position,
                    direction,
                })
            }
            None => None,
        };
        self.cursor = cursor;
        cursor
    }

    fn choose_direction(&mut self, handle: CardHandle) -> Direction {
        let Some(card) = self.deck.get(handle) else {
            return Direction::Forward;
        };
        let open = card.open_directions(self.settings.threshold);
        open.choose(&mut self.rng)
            .copied()
            .unwrap_or(Direction::Forward)
    }

    /// Bumps the card's counter and returns the attempt to forward to persistence.
    pub fn record_answer(
        &mut self,
        handle: CardHandle,
        direction: Direction,
        is_correct: bool,
    ) -> Option<AttemptRecord> {
        let card = self.deck.get_mut(handle)?;
        let direction = card.effective(direction);
        card.record(direction, is_correct);
        Some(AttemptRecord::new(card.id.clone(), is_correct, direction))
    }

    /// Removes `handle` from the review set once its counter for `direction`
    /// equals the threshold. The deck record is kept.
    pub fn retire_if_mastered(&mut self, handle: CardHandle, direction: Direction) -> bool {
        let mastered = self
            .deck
            .get(handle)
            .is_some_and(|card| card.correct(direction) == self.settings.threshold);
        if !mastered {
            return false;
        }
        let before = self.review_set.len();
        self.review_set.retain(|&h| h != handle);
        let retired = self.review_set.len() != before;
        if retired {
            log::debug!("Card {} retired from review set", handle.0);
        }
        self.refresh_incomplete();
        retired
    }

    /// Runs one user action. Every action is a no-op without a current card.
    pub fn apply(&mut self, action: Action) -> Option<AttemptRecord> {
        let handle = self.current_handle()?;
        let direction = self.current_direction().unwrap_or(Direction::Forward);
        log::debug!("Action {:?} on card {}", action, handle.0);

        match action {
            Action::Show => {
                self.answer_revealed = !self.answer_revealed;
                None
            }
            Action::Skip => {
                self.answer_revealed = false;
                self.pick_current();
                None
            }
            Action::Correct => {
                self.answer_revealed = false;
                let attempt = self.record_answer(handle, direction, true);
                self.retire_if_mastered(handle, direction);
                self.pick_current();
                attempt
            }
            Action::Incorrect => {
                self.answer_revealed = false;
                let attempt = self.record_answer(handle, direction, false);
                self.pick_current();
                attempt
            }
        }
    }
}
