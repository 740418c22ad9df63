//! A single answered attempt, as forwarded to persistence.
use super::Direction;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttemptRecord {
    pub card_id: String,
    pub is_correct: bool,
    pub direction: Direction,
}

impl AttemptRecord {
    pub fn new(card_id: impl Into<String>, is_correct: bool, direction: Direction) -> Self {
        Self {
            card_id: card_id.into(),
            is_correct,
            direction,
        }
    }
}
