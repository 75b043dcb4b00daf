//! Tests for the session lifecycle manager

mod service_tests;
