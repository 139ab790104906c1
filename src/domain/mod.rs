//! Domain layer - Journal entries, schema, and session identity

pub mod entry;
pub mod schema;
pub mod session;

pub use entry::{today, validate_date, Entry, EntryDraft};
pub use schema::{Column, Schema};
pub use session::Session;
