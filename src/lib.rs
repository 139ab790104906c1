//! dayjot - Personal journal over a shared CSV table
//!
//! A command-line journaling application: entries live as rows of one
//! tabular store partitioned by a plain username, with positional in-place
//! updates, cross-user search, mood trends, and CSV export.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::DayjotError;
