//! Deck owns the canonical card records for a session
use super::Card;
use serde::{Deserialize, Serialize};

/// Stable index of a card inside its [`Deck`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardHandle(pub usize);

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    #[serde(rename = "data")]
    pub cards: Vec<Card>,
}

impl Deck {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, handle: CardHandle) -> Option<&Card> {
        self.cards.get(handle.0)
    }

    pub fn get_mut(&mut self, handle: CardHandle) -> Option<&mut Card> {
        self.cards.get_mut(handle.0)
    }

    pub fn handles(&self) -> impl Iterator<Item = CardHandle> + '_ {
        (0..self.cards.len()).map(CardHandle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_envelope_format() {
        let deck = Deck::new(vec![Card::new("a", "q", "a")]);
        let json = serde_json::to_value(&deck).unwrap();

        assert!(json.get("data").is_some());
        assert_eq!(json["data"][0]["id"], "a");
    }

    #[test]
    fn test_handles_resolve_to_cards() {
        let deck = Deck::new(vec![Card::new("a", "1", "1"), Card::new("b", "2", "2")]);
        let ids: Vec<_> = deck
            .handles()
            .filter_map(|h| deck.get(h))
            .map(|c| c.id.as_str())
            .collect();

        assert_eq!(ids, vec!["a", "b"]);
        assert!(deck.get(CardHandle(7)).is_none());
    }
}
