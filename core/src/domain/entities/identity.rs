//! Authenticated identity as issued into tokens.

use serde::{Deserialize, Serialize};

/// Identity embedded into every issued token.
///
/// The source of truth for users lives in the external user
/// directory; this struct is the immutable snapshot taken at
/// issuance time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// User identifier from the user directory
    pub id: i64,

    /// Display name
    pub username: String,

    /// Email address
    pub email: String,

    /// Whether the user holds the admin flag
    pub is_admin: bool,
}

impl Identity {
    pub fn new(id: i64, username: impl Into<String>, email: impl Into<String>, is_admin: bool) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
            is_admin,
        }
    }
}
