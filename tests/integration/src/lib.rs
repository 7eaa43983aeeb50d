//! Integration tests for the AI Stats SDK
//!
//! Every test runs against a wiremock server standing in for the gateway:
//! - raw transport behavior (URLs, headers, bodies, status handling)
//! - the operation table and its aliases
//! - typed client methods

pub mod helpers;
pub mod mock_gateway;

pub use helpers::*;
pub use mock_gateway::*;

#[cfg(test)]
mod client_tests;
#[cfg(test)]
mod operation_tests;
#[cfg(test)]
mod transport_tests;
