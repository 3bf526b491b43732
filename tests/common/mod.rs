//! Common test utilities for kona.
//!
//! This module provides shared utilities for testing the kona server.

pub mod assertions;
pub mod http_client;
pub mod test_data;
