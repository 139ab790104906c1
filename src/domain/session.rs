//! Session identity
//!
//! The user name is an opaque, unauthenticated string chosen at the start
//! of a session. It is carried as an explicit value into every user-scoped
//! store call instead of living in process-wide state.

use crate::error::{DayjotError, Result};

/// Per-invocation session context.
#[derive(Debug, Clone)]
pub struct Session {
    pub user: String,
}

impl Session {
    /// Create a session for the given user name. Leading and trailing
    /// whitespace is trimmed; a blank name is rejected because `user`
    /// partitions every query.
    pub fn new(user: &str) -> Result<Self> {
        let user = user.trim();
        if user.is_empty() {
            return Err(DayjotError::Config(
                "User name must not be empty".to_string(),
            ));
        }
        Ok(Session {
            user: user.to_string(),
        })
    }
}
