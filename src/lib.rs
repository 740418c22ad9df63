pub mod config;
pub mod database;
pub mod error;
pub mod export;
pub mod models;
pub mod remote;
pub mod store;

pub use error::StoreError;
pub use models::{
    Action, AttemptRecord, Card, CardHandle, Deck, Direction, ReviewSession, SessionSettings,
};
pub use store::{AttemptForwarder, CardStore};
