//! Uploads Module
//!
//! Profile picture storage behind a trait seam.
//!
//! The service never stores image bytes itself. Pictures go to an external
//! asset store that answers with a public URL, and only that URL is kept
//! on the account. [`AssetStore`] is the seam: the server wires in
//! [`HttpAssetStore`] against the configured endpoint, tests wire in
//! [`MemoryAssetStore`] and look at what was uploaded.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use serde::Deserialize;

use crate::error::ApiError;

/// A picture on its way to the asset store
#[derive(Clone, Debug)]
pub struct AssetUpload {
    /// Original filename as submitted by the client
    pub filename: String,
    /// MIME type as submitted by the client
    pub content_type: String,
    /// Raw file bytes
    pub bytes: Bytes,
}

/// Where profile pictures are stored
///
/// Implementations take the bytes and answer with the public URL the
/// profile should reference.
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Store a picture and return its public URL
    async fn upload(&self, upload: AssetUpload) -> Result<String, ApiError>;
}

/// Shared handle to the configured asset store
pub type SharedAssetStore = Arc<dyn AssetStore>;

/// What the asset store endpoint answers with
#[derive(Deserialize, Debug)]
struct UploadReceipt {
    url: String,
}

/// Asset store client for an HTTP upload endpoint
///
/// Sends the picture as a `multipart/form-data` POST with a single `file`
/// part and expects a JSON body `{"url": "..."}` back.
#[derive(Clone)]
pub struct HttpAssetStore {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpAssetStore {
    /// Create a client for the given upload endpoint URL
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl AssetStore for HttpAssetStore {
    async fn upload(&self, upload: AssetUpload) -> Result<String, ApiError> {
        let part = reqwest::multipart::Part::bytes(upload.bytes.to_vec())
            .file_name(upload.filename.clone())
            .mime_str(&upload.content_type)
            .map_err(|e| ApiError::Upload(format!("bad content type: {e}")))?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ApiError::Upload(format!("asset store unreachable: {e}")))?
            .error_for_status()
            .map_err(|e| ApiError::Upload(format!("asset store rejected upload: {e}")))?;

        let receipt: UploadReceipt = response
            .json()
            .await
            .map_err(|e| ApiError::Upload(format!("bad asset store response: {e}")))?;

        tracing::info!("Stored asset {} at {}", upload.filename, receipt.url);
        Ok(receipt.url)
    }
}

/// In-memory asset store for tests and local development
///
/// Records every upload and answers with a `memory://` URL derived from
/// the filename.
#[derive(Default)]
pub struct MemoryAssetStore {
    uploads: Mutex<Vec<AssetUpload>>,
}

impl MemoryAssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything uploaded so far
    pub fn uploads(&self) -> Vec<AssetUpload> {
        self.uploads.lock().unwrap().clone()
    }
}

#[async_trait]
impl AssetStore for MemoryAssetStore {
    async fn upload(&self, upload: AssetUpload) -> Result<String, ApiError> {
        let url = format!("memory://assets/{}", upload.filename);
        self.uploads.lock().unwrap().push(upload);
        Ok(url)
    }
}
