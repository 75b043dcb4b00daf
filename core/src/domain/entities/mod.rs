//! Domain entities representing core business objects.

pub mod identity;
pub mod session;
pub mod token;

// Re-export commonly used types
pub use identity::Identity;
pub use session::Session;
pub use token::{
    Claims, IssuedToken, ACCESS_TOKEN_EXPIRY_MINUTES, REFRESH_TOKEN_EXPIRY_HOURS,
};
