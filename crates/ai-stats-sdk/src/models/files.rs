use serde::{Deserialize, Serialize};

use super::JsonValue;

/// An upload for `uploadFile`, sent as `multipart/form-data`.
///
/// Not serialized as JSON; the client turns it into a form with a
/// `purpose` text field and a `file` part.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileUploadRequest {
    /// File contents.
    pub file: Vec<u8>,
    /// File name reported in the form part.
    pub filename: String,
    /// Intended use, e.g. `batch`.
    pub purpose: String,
}

impl FileUploadRequest {
    /// Create an upload from in-memory contents.
    pub fn new(
        filename: impl Into<String>,
        file: impl Into<Vec<u8>>,
        purpose: impl Into<String>,
    ) -> Self {
        Self {
            file: file.into(),
            filename: filename.into(),
            purpose: purpose.into(),
        }
    }
}

/// Metadata of a stored file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileResponse {
    /// Size in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes: Option<i64>,
    /// Creation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    /// Original file name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Identifier assigned by the gateway.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Object kind, e.g. `list`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    /// Intended use of the file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    /// Current status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Extra status information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_details: Option<JsonValue>,
}

/// Response body of `listFiles`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListFilesResponse {
    /// Uploaded files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<FileResponse>>,
    /// Object kind, e.g. `list`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
}
