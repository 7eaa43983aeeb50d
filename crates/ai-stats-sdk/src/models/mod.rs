//! Request and response records for the gateway API.
//!
//! Every record is a flat struct of optional fields. Objects the API leaves
//! open-ended are kept as [`JsonValue`] so unknown content survives a
//! decode/encode cycle untouched.

mod anthropic;
mod audio;
mod batches;
mod catalog;
mod chat;
mod common;
mod embeddings;
mod files;
mod images;
mod keys;
mod moderation;
mod music;
mod ocr;
mod responses;
mod video;

pub use anthropic::*;
pub use audio::*;
pub use batches::*;
pub use catalog::*;
pub use chat::*;
pub use common::*;
pub use embeddings::*;
pub use files::*;
pub use images::*;
pub use keys::*;
pub use moderation::*;
pub use music::*;
pub use ocr::*;
pub use responses::*;
pub use video::*;

/// Untyped JSON value used for open-ended schema objects.
pub type JsonValue = serde_json::Value;

/// Untyped JSON object.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;
