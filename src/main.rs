mod app;
use flashcard_review::*;

use app::ReviewApp;
use config::AppConfig;
use database::{SqliteCardStore, db};
use remote::HttpCardStore;
use std::sync::Arc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = AppConfig::from_env();
    let runtime = tokio::runtime::Runtime::new()?;

    let store: Arc<dyn CardStore> = match &config.api_url {
        Some(url) => {
            log::info!("Using card service at {}", url);
            Arc::new(HttpCardStore::new(url.clone()))
        }
        None => {
            log::info!("Using local database {}", config.db_path.display());
            let store = SqliteCardStore::open(&config.db_path)?;
            store.with_conn(db::seed_sample_cards)?;
            Arc::new(store)
        }
    };

    let deck = runtime.block_on(store::load_deck(store.as_ref()));
    let settings = SessionSettings::new(config.threshold, config.sample_size.unwrap_or(0));
    let session = match config.sample_size {
        Some(_) => ReviewSession::new(deck, settings),
        None => ReviewSession::new(deck, settings).sample_whole_deck(),
    };
    log::info!(
        "Session ready: {} cards, {} incomplete, {} to review",
        session.total_count(),
        session.incomplete_count(),
        session.review_count()
    );

    let forwarder = AttemptForwarder::new(store, runtime.handle().clone(), config.persist_attempts);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([500.0, 700.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Flashcards Review",
        options,
        Box::new(|_cc| Ok(Box::new(ReviewApp::new(session, forwarder)))),
    )?;
    Ok(())
}
