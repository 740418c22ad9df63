pub mod attempt;
pub mod card;
pub mod deck;
pub mod deck_filter;
pub mod review_session;
pub mod sampling;
pub mod settings;

pub use attempt::AttemptRecord;
pub use card::{Card, Direction};
pub use deck::{CardHandle, Deck};
pub use deck_filter::filter_incomplete;
pub use review_session::{Action, Cursor, ReviewSession};
pub use settings::{SessionSettings, parse_count};
