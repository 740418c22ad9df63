//! Local SQLite card store
//!
//! Used when no remote card service is configured. Keeps the card records with
//! their attempt counters and an append-only log of answered attempts.

use crate::error::StoreError;
use crate::models::{AttemptRecord, Card, Deck, Direction};
use crate::store::CardStore;
use async_trait::async_trait;
use chrono::Utc;
use rusqlite::{Connection, Result, params};
use std::path::Path;
use std::sync::Mutex;

pub struct SqliteCardStore {
    conn: Mutex<Connection>,
}

/// Creates the tables if they are missing
pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS cards (
            id TEXT PRIMARY KEY,
            card_group TEXT NOT NULL DEFAULT '',
            question TEXT NOT NULL,
            answer TEXT NOT NULL,
            two_way INTEGER NOT NULL DEFAULT 0,
            correct_attempts INTEGER NOT NULL DEFAULT 0,
            incorrect_attempts INTEGER NOT NULL DEFAULT 0,
            reverse_correct_attempts INTEGER NOT NULL DEFAULT 0,
            reverse_incorrect_attempts INTEGER NOT NULL DEFAULT 0,
            complete INTEGER NOT NULL DEFAULT 0
        )",
        (),
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS attempts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            card_id TEXT NOT NULL,
            is_correct INTEGER NOT NULL,
            direction TEXT NOT NULL,
            answered_at TEXT NOT NULL,
            FOREIGN KEY (card_id) REFERENCES cards(id) ON DELETE CASCADE
        )",
        (),
    )?;

    Ok(())
}

/// Inserts a card, ignoring it if the id already exists
pub fn add_card(card: &Card, conn: &Connection) -> Result<()> {
    conn.execute(
        "INSERT OR IGNORE INTO cards (
            id, card_group, question, answer, two_way,
            correct_attempts, incorrect_attempts,
            reverse_correct_attempts, reverse_incorrect_attempts, complete
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            card.id,
            card.group,
            card.question,
            card.answer,
            card.two_way,
            card.correct_attempts,
            card.incorrect_attempts,
            card.reverse_correct_attempts,
            card.reverse_incorrect_attempts,
            card.complete
        ],
    )?;
    Ok(())
}

pub fn count_cards(conn: &Connection) -> Result<usize> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM cards", [], |row| row.get(0))?;
    Ok(usize::try_from(count).unwrap_or(0))
}

/// Loads every card into memory
pub fn load_cards(conn: &Connection) -> Result<Vec<Card>> {
    let mut stmt = conn.prepare(
        "SELECT id, card_group, question, answer, two_way,
                correct_attempts, incorrect_attempts,
                reverse_correct_attempts, reverse_incorrect_attempts, complete
         FROM cards
         ORDER BY rowid ASC",
    )?;

    let cards = stmt
        .query_map([], |row| {
            Ok(Card {
                id: row.get(0)?,
                group: row.get(1)?,
                question: row.get(2)?,
                answer: row.get(3)?,
                two_way: row.get(4)?,
                correct_attempts: row.get(5)?,
                incorrect_attempts: row.get(6)?,
                reverse_correct_attempts: row.get(7)?,
                reverse_incorrect_attempts: row.get(8)?,
                complete: row.get(9)?,
            })
        })?
        .collect::<Result<Vec<Card>>>()?;

    Ok(cards)
}

/// Bumps the matching counter and appends the attempt to the log
///
/// Returns the number of card rows touched (0 for an unknown id).
pub fn apply_attempt(attempt: &AttemptRecord, conn: &Connection) -> Result<usize> {
    let sql = match (attempt.direction, attempt.is_correct) {
        (Direction::Forward, true) => {
            "UPDATE cards SET correct_attempts = correct_attempts + 1 WHERE id = ?1"
        }
        (Direction::Forward, false) => {
            "UPDATE cards SET incorrect_attempts = incorrect_attempts + 1 WHERE id = ?1"
        }
        (Direction::Reverse, true) => {
            "UPDATE cards SET reverse_correct_attempts = reverse_correct_attempts + 1 WHERE id = ?1"
        }
        (Direction::Reverse, false) => {
            "UPDATE cards SET reverse_incorrect_attempts = reverse_incorrect_attempts + 1 WHERE id = ?1"
        }
    };
    let updated = conn.execute(sql, params![attempt.card_id])?;
    if updated == 0 {
        return Ok(0);
    }

    conn.execute(
        "INSERT INTO attempts (card_id, is_correct, direction, answered_at) VALUES (?1, ?2, ?3, ?4)",
        params![
            attempt.card_id,
            attempt.is_correct,
            attempt.direction.label(),
            Utc::now().to_rfc3339()
        ],
    )?;

    Ok(updated)
}

pub fn count_attempts(card_id: &str, conn: &Connection) -> Result<usize> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM attempts WHERE card_id = ?1",
        params![card_id],
        |row| row.get(0),
    )?;
    Ok(usize::try_from(count).unwrap_or(0))
}

/// Fills an empty database with a few sample cards
pub fn seed_sample_cards(conn: &Connection) -> Result<usize> {
    if count_cards(conn)? > 0 {
        return Ok(0);
    }
    let samples = [
        ("pl-1", "cześć", "hello", false),
        ("pl-2", "dziękuję", "thank you", true),
        ("pl-3", "proszę", "please", false),
    ];
    for (id, question, answer, two_way) in samples {
        let mut card = Card::new(id, question, answer);
        card.group = "Polish Vocabulary".to_string();
        card.two_way = two_way;
        add_card(&card, conn)?;
    }
    log::info!("Seeded {} sample cards", samples.len());
    Ok(samples.len())
}

impl SqliteCardStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_connection(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        init_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Runs `f` against the connection, turning a poisoned lock into an error.
    pub fn with_conn<T>(&self, f: impl FnOnce(&Connection) -> Result<T>) -> Result<T, StoreError> {
        let conn = self.conn.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(f(&conn)?)
    }
}

#[async_trait]
impl CardStore for SqliteCardStore {
    async fn fetch_deck(&self) -> Result<Deck, StoreError> {
        let cards = self.with_conn(load_cards)?;
        Ok(Deck::new(cards))
    }

    async fn record_attempt(&self, attempt: &AttemptRecord) -> Result<(), StoreError> {
        let updated = self.with_conn(|conn| apply_attempt(attempt, conn))?;
        if updated == 0 {
            return Err(StoreError::UnknownCard(attempt.card_id.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seed_and_fetch() {
        let store = SqliteCardStore::open_in_memory().unwrap();
        assert_eq!(store.with_conn(seed_sample_cards).unwrap(), 3);
        // second seed is a no-op
        assert_eq!(store.with_conn(seed_sample_cards).unwrap(), 0);

        let deck = store.fetch_deck().await.unwrap();
        assert_eq!(deck.len(), 3);
        assert_eq!(deck.cards[0].question, "cześć");
        assert!(deck.cards[1].two_way);
        assert_eq!(deck.cards[2].group, "Polish Vocabulary");
    }

    #[tokio::test]
    async fn test_record_attempt_updates_counters() {
        let store = SqliteCardStore::open_in_memory().unwrap();
        store.with_conn(seed_sample_cards).unwrap();

        store
            .record_attempt(&AttemptRecord::new("pl-2", true, Direction::Forward))
            .await
            .unwrap();
        store
            .record_attempt(&AttemptRecord::new("pl-2", true, Direction::Reverse))
            .await
            .unwrap();
        store
            .record_attempt(&AttemptRecord::new("pl-2", false, Direction::Reverse))
            .await
            .unwrap();

        let deck = store.fetch_deck().await.unwrap();
        let card = &deck.cards[1];
        assert_eq!(card.correct_attempts, 1);
        assert_eq!(card.incorrect_attempts, 0);
        assert_eq!(card.reverse_correct_attempts, 1);
        assert_eq!(card.reverse_incorrect_attempts, 1);
        assert_eq!(store.with_conn(|c| count_attempts("pl-2", c)).unwrap(), 3);
    }

    #[tokio::test]
    async fn test_record_attempt_unknown_card() {
        let store = SqliteCardStore::open_in_memory().unwrap();

        let result = store
            .record_attempt(&AttemptRecord::new("missing", true, Direction::Forward))
            .await;

        assert!(matches!(result, Err(StoreError::UnknownCard(id)) if id == "missing"));
        assert_eq!(store.with_conn(|c| count_attempts("missing", c)).unwrap(), 0);
    }

    #[test]
    fn test_add_card_ignores_duplicates() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();

        let card = Card::new("x", "term", "definition");
        add_card(&card, &conn).unwrap();
        add_card(&Card::new("x", "other", "other"), &conn).unwrap();

        let cards = load_cards(&conn).unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0], card);
    }
}
