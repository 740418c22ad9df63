//! Card is a question/answer pair with per-direction attempt counters.
use serde::{Deserialize, Serialize};

/// Which side of the card is shown as the prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// question -> answer
    Forward,
    /// answer -> question, only used for two-way cards
    Reverse,
}

impl Direction {
    pub fn label(self) -> &'static str {
        match self {
            Direction::Forward => "forward",
            Direction::Reverse => "reverse",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    #[serde(default)]
    pub group: String,
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub two_way: bool,
    #[serde(default)]
    pub correct_attempts: u32,
    #[serde(default)]
    pub incorrect_attempts: u32,
    #[serde(default)]
    pub reverse_correct_attempts: u32,
    #[serde(default)]
    pub reverse_incorrect_attempts: u32,
    #[serde(default)]
    pub complete: bool,
}

impl Card {
    pub fn new(
        id: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            group: String::new(),
            question: question.into(),
            answer: answer.into(),
            two_way: false,
            correct_attempts: 0,
            incorrect_attempts: 0,
            reverse_correct_attempts: 0,
            reverse_incorrect_attempts: 0,
            complete: false,
        }
    }

    /// Directions this card can be practiced in.
    pub fn directions(&self) -> &'static [Direction] {
        if self.two_way {
            &[Direction::Forward, Direction::Reverse]
        } else {
            &[Direction::Forward]
        }
    }

    /// Reverse collapses to forward on one-way cards.
    pub fn effective(&self, direction: Direction) -> Direction {
        if self.two_way { direction } else { Direction::Forward }
    }

    pub fn correct(&self, direction: Direction) -> u32 {
        match self.effective(direction) {
            Direction::Forward => self.correct_attempts,
            Direction::Reverse => self.reverse_correct_attempts,
        }
    }

    pub fn incorrect(&self, direction: Direction) -> u32 {
        match self.effective(direction) {
            Direction::Forward => self.incorrect_attempts,
            Direction::Reverse => self.reverse_incorrect_attempts,
        }
    }

    /// Bumps the counter for `direction`. Counters never decrease.
    pub fn record(&mut self, direction: Direction, is_correct: bool) {
        let counter = match (self.effective(direction), is_correct) {
            (Direction::Forward, true) => &mut self.correct_attempts,
            (Direction::Forward, false) => &mut self.incorrect_attempts,
            (Direction::Reverse, true) => &mut self.reverse_correct_attempts,
            (Direction::Reverse, false) => &mut self.reverse_incorrect_attempts,
        };
        *counter = counter.saturating_add(1);
    }

    /// Directions whose correct counter is still below `threshold`.
    pub fn open_directions(&self, threshold: u32) -> Vec<Direction> {
        self.directions()
            .iter()
            .copied()
            .filter(|&d| self.correct(d) < threshold)
            .collect()
    }

    pub fn is_incomplete(&self, threshold: u32) -> bool {
        !self.open_directions(threshold).is_empty()
    }

    /// Text shown for this direction, before or after the answer is revealed.
    pub fn face(&self, direction: Direction, revealed: bool) -> &str {
        match (self.effective(direction), revealed) {
            (Direction::Forward, false) | (Direction::Reverse, true) => &self.question,
            (Direction::Forward, true) | (Direction::Reverse, false) => &self.answer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_creation() {
        let card = Card::new("a", "cześć", "hello");

        assert_eq!(card.id, "a");
        assert_eq!(card.question, "cześć");
        assert_eq!(card.answer, "hello");
        assert_eq!(card.correct_attempts, 0);
        assert!(!card.two_way);
    }

    #[test]
    fn test_one_way_card_ignores_reverse() {
        let mut card = Card::new("a", "q", "a");
        card.record(Direction::Reverse, true);

        assert_eq!(card.correct_attempts, 1);
        assert_eq!(card.reverse_correct_attempts, 0);
        assert_eq!(card.face(Direction::Reverse, false), "q");
    }

    #[test]
    fn test_two_way_counters_are_independent() {
        let mut card = Card::new("a", "q", "a");
        card.two_way = true;
        card.record(Direction::Reverse, true);
        card.record(Direction::Forward, false);

        assert_eq!(card.correct(Direction::Reverse), 1);
        assert_eq!(card.correct(Direction::Forward), 0);
        assert_eq!(card.incorrect(Direction::Forward), 1);
        assert_eq!(card.face(Direction::Reverse, false), "a");
        assert_eq!(card.face(Direction::Reverse, true), "q");
    }

    #[test]
    fn test_two_way_incomplete_until_both_directions_mastered() {
        let mut card = Card::new("a", "q", "a");
        card.two_way = true;
        card.correct_attempts = 2;

        assert!(card.is_incomplete(2));
        assert_eq!(card.open_directions(2), vec![Direction::Reverse]);

        card.reverse_correct_attempts = 2;
        assert!(!card.is_incomplete(2));
    }

    #[test]
    fn test_deserialize_with_missing_optional_fields() {
        let json = r#"{"id": "x1", "question": "dziękuję", "answer": "thank you", "correct_attempts": 3}"#;
        let card: Card = serde_json::from_str(json).unwrap();

        assert_eq!(card.correct_attempts, 3);
        assert_eq!(card.reverse_correct_attempts, 0);
        assert!(!card.two_way);
        assert!(card.group.is_empty());
    }
}
