//! JSON snapshot module for decks.
//! Saves a deck with its live counters and loads one back, using the same
//! `{"data": [...]}` envelope the card service returns.

use crate::error::StoreError;
use crate::models::Deck;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Exports a deck to a JSON file at the specified path.
pub fn export_json_to_path(deck: &Deck, path: impl AsRef<Path>) -> Result<(), StoreError> {
    let json_string = serde_json::to_string_pretty(deck)?;
    let mut file = File::create(path.as_ref())?;
    file.write_all(json_string.as_bytes())?;
    log::info!(
        "Exported {} cards to '{}'",
        deck.len(),
        path.as_ref().display()
    );
    Ok(())
}

/// Imports a deck from a JSON file.
/// Returns an error if the file doesn't exist or contains invalid JSON.
pub fn import_json(path: impl AsRef<Path>) -> Result<Deck, StoreError> {
    let mut file = File::open(path.as_ref())?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    let deck: Deck = serde_json::from_str(&contents)?;

    log::info!(
        "Imported {} cards from '{}'",
        deck.len(),
        path.as_ref().display()
    );
    Ok(deck)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Card;
    use std::fs;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("flashcard_review_{}_{}", std::process::id(), name))
    }

    fn create_test_deck() -> Deck {
        let mut first = Card::new("1", "hello", "cześć");
        first.correct_attempts = 2;
        let mut second = Card::new("2", "goodbye", "do widzenia");
        second.two_way = true;
        second.reverse_incorrect_attempts = 1;
        Deck::new(vec![first, second])
    }

    #[test]
    fn test_export_json_to_path() {
        let deck = create_test_deck();
        let test_file = temp_path("export.json");

        let result = export_json_to_path(&deck, &test_file);
        assert!(result.is_ok());

        assert!(fs::metadata(&test_file).is_ok(), "File should exist");

        let _ = fs::remove_file(&test_file);
    }

    #[test]
    fn test_import_json() {
        let json_content = r#"{
  "data": [
    {
      "id": "abc",
      "group": "verbs",
      "question": "test term",
      "answer": "test definition",
      "correct_attempts": 4,
      "incorrect_attempts": 1
    }
  ]
}"#;

        let test_file = temp_path("import.json");
        fs::write(&test_file, json_content).unwrap();

        let result = import_json(&test_file);
        assert!(result.is_ok());

        let deck = result.unwrap();
        assert_eq!(deck.len(), 1);
        assert_eq!(deck.cards[0].question, "test term");
        assert_eq!(deck.cards[0].answer, "test definition");
        assert_eq!(deck.cards[0].correct_attempts, 4);

        let _ = fs::remove_file(&test_file);
    }

    #[test]
    fn test_export_keeps_counters() {
        let original_deck = create_test_deck();
        let test_file = temp_path("counters.json");

        export_json_to_path(&original_deck, &test_file).unwrap();
        let imported_deck = import_json(&test_file).unwrap();

        assert_eq!(original_deck, imported_deck);

        let _ = fs::remove_file(&test_file);
    }

    #[test]
    fn test_import_nonexistent_file() {
        let result = import_json(temp_path("nonexistent_file_xyz123.json"));
        assert!(matches!(result, Err(StoreError::Io(_))));
    }

    #[test]
    fn test_import_invalid_json() {
        let test_file = temp_path("invalid.json");
        fs::write(&test_file, "{ this is not valid json }").unwrap();

        let result = import_json(&test_file);
        assert!(matches!(result, Err(StoreError::Serialization(_))));

        let _ = fs::remove_file(&test_file);
    }
}
