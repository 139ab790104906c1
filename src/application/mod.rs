//! Application layer - Use cases and orchestration

pub mod add_entry;
pub mod edit_entry;
pub mod export;
pub mod init;
pub mod list_entries;
pub mod search;
pub mod trend;

pub use add_entry::add_entry;
pub use edit_entry::{edit_entry, EntryPatch};
pub use export::{export, ExportSelection, ExportSummary};
pub use init::init;
pub use list_entries::list_entries;
pub use search::search;
pub use trend::{mood_trend, TrendPoint};
