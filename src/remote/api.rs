//! HTTP client for the remote flashcard service.

use crate::error::StoreError;
use crate::models::{AttemptRecord, Deck, Direction};
use crate::store::CardStore;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

#[derive(Clone)]
pub struct HttpCardStore {
    client: Client,
    base_url: String,
}

/// Body of `PATCH /flashcards/{id}/answer`.
///
/// The service names its direction flag `two_way`. It is read as "this attempt
/// used the card's second side": true for reverse attempts, false for forward
/// ones and for every attempt on a one-way card.
#[derive(Debug, Serialize, PartialEq)]
struct AnswerPayload {
    is_correct: bool,
    two_way: bool,
}

impl From<&AttemptRecord> for AnswerPayload {
    fn from(attempt: &AttemptRecord) -> Self {
        Self {
            is_correct: attempt.is_correct,
            two_way: attempt.direction == Direction::Reverse,
        }
    }
}

impl HttpCardStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn cards_url(&self) -> String {
        format!("{}/flashcards", self.base_url.trim_end_matches('/'))
    }

    fn answer_url(&self, card_id: &str) -> String {
        format!("{}/{}/answer", self.cards_url(), card_id)
    }
}

#[async_trait]
impl CardStore for HttpCardStore {
    async fn fetch_deck(&self) -> Result<Deck, StoreError> {
        let response = self.client.get(self.cards_url()).send().await?;
        if !response.status().is_success() {
            return Err(StoreError::HttpStatus(response.status()));
        }
        let deck: Deck = response.json().await?;
        Ok(deck)
    }

    async fn record_attempt(&self, attempt: &AttemptRecord) -> Result<(), StoreError> {
        let response = self
            .client
            .patch(self.answer_url(&attempt.card_id))
            .json(&AnswerPayload::from(attempt))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(StoreError::HttpStatus(response.status()));
        }
        Ok(())
    }
}
