pub mod db;

pub use db::SqliteCardStore;
