//! Selects the cards that have not reached the mastery threshold yet.
use super::{CardHandle, Deck};

/// Handles of every card still below `threshold` correct attempts.
///
/// A threshold of zero yields nothing, since no counter is below zero.
/// Always recompute after a counter or threshold change; results are never patched.
pub fn filter_incomplete(deck: &Deck, threshold: u32) -> Vec<CardHandle> {
    deck.handles()
        .filter(|&h| deck.get(h).is_some_and(|card| card.is_incomplete(threshold)))
        .collect()
}
