//! Token services: signed-claims codec, issuer, and verifier.
//!
//! The codec is the only component that touches the wire format; the
//! issuer mints fresh claims; the verifier is the single choke point
//! every protected operation passes through.

pub mod clock;
pub mod codec;
pub mod config;
pub mod issuer;
pub mod verifier;

pub use clock::{Clock, SystemClock};
pub use codec::TokenCodec;
pub use config::TokenConfig;
pub use issuer::TokenIssuer;
pub use verifier::TokenVerifier;
