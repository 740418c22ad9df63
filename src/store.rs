//! Persistence collaborator contract and fire-and-forget attempt forwarding.

use crate::error::StoreError;
use crate::models::{AttemptRecord, Deck};
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Source of the deck and sink for answered attempts.
#[async_trait]
pub trait CardStore: Send + Sync {
    async fn fetch_deck(&self) -> Result<Deck, StoreError>;

    async fn record_attempt(&self, attempt: &AttemptRecord) -> Result<(), StoreError>;
}

/// Fetches the deck, falling back to an empty one if the store fails.
pub async fn load_deck(store: &dyn CardStore) -> Deck {
    match store.fetch_deck().await {
        Ok(deck) => {
            log::info!("Loaded {} cards", deck.len());
            deck
        }
        Err(e) => {
            log::warn!("Failed to load deck, starting empty: {}", e);
            Deck::default()
        }
    }
}

/// Sends attempts to the store in the background.
///
/// The session has already applied the attempt locally; failures are logged,
/// never retried and never rolled back.
pub struct AttemptForwarder {
    store: Arc<dyn CardStore>,
    runtime: Handle,
    enabled: AtomicBool,
}

impl AttemptForwarder {
    pub fn new(store: Arc<dyn CardStore>, runtime: Handle, enabled: bool) -> Self {
        Self {
            store,
            runtime,
            enabled: AtomicBool::new(enabled),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    /// Spawns the store call and returns at once. `None` when recording is off.
    pub fn forward(&self, attempt: AttemptRecord) -> Option<JoinHandle<()>> {
        if !self.is_enabled() {
            return None;
        }
        let store = Arc::clone(&self.store);
        Some(self.runtime.spawn(async move {
            match store.record_attempt(&attempt).await {
                Ok(()) => log::debug!("Recorded attempt for card {}", attempt.card_id),
                Err(e) => log::warn!(
                    "Failed to record attempt for card {}: {}",
                    attempt.card_id,
                    e
                ),
            }
        }))
    }
}
