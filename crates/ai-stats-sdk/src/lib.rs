//! # AI Stats SDK
//!
//! A Rust SDK for the AI Stats gateway, a unified HTTP API in front of many
//! model providers.
//!
//! The crate has two layers:
//!
//! - [`Transport`] and [`operations`]: one async function per gateway
//!   endpoint, taking path parameters, query parameters, headers and an
//!   optional JSON body, and returning the raw response body.
//! - [`Client`]: typed methods that serialize a request record, call the
//!   operation and decode the reply into a response record.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ai_stats_sdk::{ChatCompletionsRequest, ChatMessage, Client};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ai_stats_sdk::Error> {
//!     let client = Client::builder()
//!         .api_key("your-api-key")
//!         .build()?;
//!
//!     let request = ChatCompletionsRequest::new(
//!         "openai/gpt-4o-mini",
//!         vec![ChatMessage::user("Hello, world!")],
//!     );
//!     let response = client.chat_completion(&request).await?;
//!
//!     println!("Response: {}", response.content().unwrap_or_default());
//!     Ok(())
//! }
//! ```
//!
//! ## Untyped operations
//!
//! ```rust,no_run
//! use ai_stats_sdk::{find_operation, Client, Params};
//!
//! # async fn example(client: &Client) -> Result<(), ai_stats_sdk::Error> {
//! let op = find_operation("listOrganisations").expect("known operation");
//! let body = op
//!     .call(client.transport(), &Params::new(), &Params::new(), &Params::new(), None)
//!     .await?;
//! println!("{}", body);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Any status of 400 or above becomes [`Error::RequestFailed`] carrying the
//! status and the unparsed body:
//!
//! ```rust,no_run
//! use ai_stats_sdk::{Client, Error};
//!
//! # async fn example(client: &Client) {
//! match client.get_file("file_123").await {
//!     Ok(file) => println!("{:?}", file.filename),
//!     Err(Error::RequestFailed { status, body }) => {
//!         eprintln!("gateway answered {}: {}", status, body);
//!     }
//!     Err(e) => eprintln!("error: {}", e),
//! }
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![forbid(unsafe_code)]

mod client;
mod config;
pub mod devtools;
mod error;
pub mod models;
pub mod operations;
mod transport;

pub use client::{Client, ClientBuilder};
pub use config::{
    ClientConfig, API_KEY_ENV, API_KEY_ENV_FALLBACK, BASE_URL_ENV, BASE_URL_ENV_FALLBACK,
    DEFAULT_BASE_URL,
};
pub use devtools::DevtoolsConfig;
pub use error::{Error, Result};
pub use models::*;
pub use operations::{find_operation, Operation, OPERATIONS};
pub use transport::{HttpMethod, Params, Transport};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::client::{Client, ClientBuilder};
    pub use crate::error::{Error, Result};
    pub use crate::models::{ChatCompletionsRequest, ChatCompletionsResponse, ChatMessage, ChatRole};
    pub use crate::transport::{HttpMethod, Params, Transport};
}
