//! Infrastructure layer - Journal root discovery, config, and the table store

pub mod config;
pub mod csv;
pub mod repository;
pub mod store;

pub use config::Config;
pub use repository::FileSystemRepository;
pub use store::{EntryStore, Position};
