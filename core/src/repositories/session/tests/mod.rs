//! Tests for session repository implementations
