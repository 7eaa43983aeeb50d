//! Typed client for the AI Stats gateway.

use crate::config::{self, ClientConfig, DEFAULT_BASE_URL};
use crate::devtools::{Capture, DevtoolsConfig, Recorder};
use crate::error::{Error, Result};
use crate::models::*;
use crate::operations::{self, Operation};
use crate::transport::{Params, Transport};
use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, USER_AGENT};
use reqwest::multipart::{Form, Part};
use secrecy::Secret;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

static NO_PARAMS: Params = Params::new();

/// Client for the AI Stats gateway.
///
/// Cloning is cheap; clones share the connection pool.
///
/// # Example
///
/// ```rust,no_run
/// use ai_stats_sdk::{ChatCompletionsRequest, ChatMessage, Client};
///
/// #[tokio::main]
/// async fn main() -> Result<(), ai_stats_sdk::Error> {
///     let client = Client::builder()
///         .api_key("your-api-key")
///         .build()?;
///
///     let request = ChatCompletionsRequest::new(
///         "openai/gpt-4o-mini",
///         vec![ChatMessage::user("Hello!")],
///     );
///     let response = client.chat_completion(&request).await?;
///
///     println!("{}", response.content().unwrap_or_default());
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct Client {
    transport: Transport,
    config: Arc<ClientConfig>,
    devtools: Option<Arc<Recorder>>,
}

impl Client {
    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .map_err(|e| Error::configuration(format!("Invalid user agent: {}", e)))?,
        );

        if let Some(api_key) = config.api_key_value() {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", api_key))
                .map_err(|e| Error::configuration(format!("Invalid API key: {}", e)))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        for (name, value) in &config.custom_headers {
            let header_name = HeaderName::try_from(name.as_str()).map_err(|e| {
                Error::configuration(format!("Invalid header name '{}': {}", name, e))
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|e| {
                Error::configuration(format!("Invalid header value for '{}': {}", name, e))
            })?;
            headers.insert(header_name, header_value);
        }

        let mut http = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            http = http.timeout(timeout);
        }
        if let Some(timeout) = config.connect_timeout {
            http = http.connect_timeout(timeout);
        }
        let http = http
            .build()
            .map_err(|e| Error::configuration(format!("Failed to create HTTP client: {}", e)))?;

        let transport = Transport::with_header_map(config.base_url.as_str(), headers, http)?;

        let devtools = match &config.devtools {
            Some(devtools) if devtools.enabled => {
                let recorder = Recorder::open(devtools).map_err(|e| {
                    Error::configuration(format!(
                        "Failed to open devtools directory '{}': {}",
                        devtools.directory.display(),
                        e
                    ))
                })?;
                Some(Arc::new(recorder))
            }
            _ => None,
        };

        Ok(Self {
            transport,
            config: Arc::new(config),
            devtools,
        })
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The underlying transport, for calling operations from [`crate::operations`]
    /// that have no typed method.
    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Send a chat completion request. Streaming is always turned off.
    #[instrument(skip(self, request), fields(model = %request.model))]
    pub async fn chat_completion(
        &self,
        request: &ChatCompletionsRequest,
    ) -> Result<ChatCompletionsResponse> {
        let mut request = request.clone();
        request.stream = Some(false);
        self.send_json(&operations::CREATE_CHAT_COMPLETION, &NO_PARAMS, &request)
            .await
    }

    /// Create a model response through the `/responses` API.
    #[instrument(skip(self, request), fields(model = %request.model))]
    pub async fn create_response(&self, request: &ResponsesRequest) -> Result<ResponsesResponse> {
        self.send_json(&operations::CREATE_RESPONSE, &NO_PARAMS, request)
            .await
    }

    /// Send an Anthropic-style messages request.
    #[instrument(skip(self, request), fields(model = %request.model))]
    pub async fn create_message(
        &self,
        request: &AnthropicMessagesRequest,
    ) -> Result<AnthropicMessagesResponse> {
        self.send_json(&operations::CREATE_ANTHROPIC_MESSAGE, &NO_PARAMS, request)
            .await
    }

    /// Embed one or more inputs.
    #[instrument(skip(self, request))]
    pub async fn create_embedding(&self, request: &EmbeddingsRequest) -> Result<EmbeddingsResponse> {
        self.send_json(&operations::CREATE_EMBEDDING, &NO_PARAMS, request)
            .await
    }

    /// Classify inputs against the moderation categories.
    #[instrument(skip(self, request), fields(model = %request.model))]
    pub async fn create_moderation(
        &self,
        request: &ModerationsRequest,
    ) -> Result<ModerationsResponse> {
        self.send_json(&operations::CREATE_MODERATION, &NO_PARAMS, request)
            .await
    }

    /// Generate images from a prompt.
    #[instrument(skip(self, request), fields(model = %request.model))]
    pub async fn generate_image(
        &self,
        request: &ImagesGenerationRequest,
    ) -> Result<ImagesGenerationResponse> {
        self.send_json(&operations::CREATE_IMAGE, &NO_PARAMS, request)
            .await
    }

    /// Edit an image. Sent as a multipart form.
    #[instrument(skip(self, request), fields(model = %request.model))]
    pub async fn edit_image(&self, request: &ImagesEditRequest) -> Result<ImagesEditResponse> {
        let form = form_from_record(request)?;
        let capture = Capture::start();
        let reply = self
            .transport
            .request_multipart(operations::CREATE_IMAGE_EDIT.path, &NO_PARAMS, form)
            .await;
        self.finish(
            &operations::CREATE_IMAGE_EDIT,
            capture,
            || serde_json::to_value(request).unwrap_or_default(),
            reply,
        )
    }

    /// Synthesize speech. Returns the encoded audio.
    #[instrument(skip(self, request), fields(model = %request.model))]
    pub async fn create_speech(&self, request: &AudioSpeechRequest) -> Result<Bytes> {
        let body = encode(request)?;
        let capture = Capture::start();
        let reply = operations::CREATE_SPEECH
            .call_bytes(&self.transport, &NO_PARAMS, &NO_PARAMS, &NO_PARAMS, Some(&body))
            .await;
        self.finish_bytes(
            &operations::CREATE_SPEECH,
            capture,
            || serde_json::to_value(request).unwrap_or_default(),
            reply,
        )
    }

    /// Transcribe audio to text.
    #[instrument(skip(self, request), fields(model = %request.model))]
    pub async fn create_transcription(
        &self,
        request: &AudioTranscriptionRequest,
    ) -> Result<AudioTranscriptionResponse> {
        self.send_json(&operations::CREATE_TRANSCRIPTION, &NO_PARAMS, request)
            .await
    }

    /// Translate audio to English text.
    #[instrument(skip(self, request), fields(model = %request.model))]
    pub async fn create_translation(
        &self,
        request: &AudioTranslationRequest,
    ) -> Result<AudioTranslationResponse> {
        self.send_json(&operations::CREATE_TRANSLATION, &NO_PARAMS, request)
            .await
    }

    /// Start a video generation job.
    #[instrument(skip(self, request), fields(model = %request.model))]
    pub async fn create_video(
        &self,
        request: &VideoGenerationRequest,
    ) -> Result<VideoGenerationResponse> {
        self.send_json(&operations::CREATE_VIDEO, &NO_PARAMS, request)
            .await
    }

    /// Poll a video generation job.
    #[instrument(skip(self))]
    pub async fn get_video(&self, video_id: &str) -> Result<VideoGenerationResponse> {
        self.fetch_json(&operations::GET_VIDEO, &path_param("video_id", video_id), &NO_PARAMS)
            .await
    }

    /// Delete a video.
    #[instrument(skip(self))]
    pub async fn delete_video(&self, video_id: &str) -> Result<VideoDeleteResponse> {
        self.fetch_json(&operations::DELETE_VIDEO, &path_param("video_id", video_id), &NO_PARAMS)
            .await
    }

    /// Download the rendered video.
    #[instrument(skip(self))]
    pub async fn video_content(&self, video_id: &str) -> Result<Bytes> {
        let path = path_param("video_id", video_id);
        let capture = Capture::start();
        let reply = operations::GET_VIDEO_CONTENT
            .call_bytes(&self.transport, &path, &NO_PARAMS, &NO_PARAMS, None)
            .await;
        self.finish_bytes(
            &operations::GET_VIDEO_CONTENT,
            capture,
            || json!({ "path": path, "query": {} }),
            reply,
        )
    }

    /// Start a music generation job.
    #[instrument(skip(self, request), fields(model = %request.model))]
    pub async fn generate_music(
        &self,
        request: &MusicGenerateRequest,
    ) -> Result<MusicGenerateResponse> {
        self.send_json(&operations::GENERATE_MUSIC, &NO_PARAMS, request)
            .await
    }

    /// Poll a music generation job.
    #[instrument(skip(self))]
    pub async fn get_music_generation(&self, music_id: &str) -> Result<MusicGenerateResponse> {
        self.fetch_json(
            &operations::GET_MUSIC_GENERATION,
            &path_param("music_id", music_id),
            &NO_PARAMS,
        )
        .await
    }

    /// Extract text from an image.
    #[instrument(skip(self, request), fields(model = %request.model))]
    pub async fn create_ocr(&self, request: &OcrRequest) -> Result<OcrResponse> {
        self.send_json(&operations::CREATE_OCR, &NO_PARAMS, request)
            .await
    }

    /// Submit a batch job.
    #[instrument(skip(self, request), fields(endpoint = %request.endpoint))]
    pub async fn create_batch(&self, request: &BatchRequest) -> Result<BatchResponse> {
        self.send_json(&operations::CREATE_BATCH, &NO_PARAMS, request)
            .await
    }

    /// Fetch a batch job.
    #[instrument(skip(self))]
    pub async fn get_batch(&self, batch_id: &str) -> Result<BatchResponse> {
        self.fetch_json(&operations::RETRIEVE_BATCH, &path_param("batch_id", batch_id), &NO_PARAMS)
            .await
    }

    /// Upload a file. Sent as a multipart form with `purpose` and `file` parts.
    #[instrument(skip(self, request), fields(filename = %request.filename, size = request.file.len()))]
    pub async fn upload_file(&self, request: &FileUploadRequest) -> Result<FileResponse> {
        let form = Form::new()
            .text("purpose", request.purpose.clone())
            .part(
                "file",
                Part::bytes(request.file.clone()).file_name(request.filename.clone()),
            );
        let capture = Capture::start();
        let reply = self
            .transport
            .request_multipart(operations::UPLOAD_FILE.path, &NO_PARAMS, form)
            .await;
        self.finish(
            &operations::UPLOAD_FILE,
            capture,
            || {
                json!({
                    "purpose": request.purpose,
                    "filename": request.filename,
                    "bytes": request.file.len(),
                })
            },
            reply,
        )
    }

    /// List uploaded files.
    #[instrument(skip(self))]
    pub async fn list_files(&self) -> Result<ListFilesResponse> {
        self.fetch_json(&operations::LIST_FILES, &NO_PARAMS, &NO_PARAMS)
            .await
    }

    /// Fetch file metadata.
    #[instrument(skip(self))]
    pub async fn get_file(&self, file_id: &str) -> Result<FileResponse> {
        self.fetch_json(&operations::RETRIEVE_FILE, &path_param("file_id", file_id), &NO_PARAMS)
            .await
    }

    /// List catalog models. Filters such as `organisation` or `limit` go in `query`.
    #[instrument(skip(self))]
    pub async fn list_models(&self, query: &Params) -> Result<ModelListResponse> {
        self.fetch_json(&operations::LIST_MODELS, &NO_PARAMS, query)
            .await
    }

    /// List upstream providers.
    #[instrument(skip(self))]
    pub async fn list_providers(&self, query: &Params) -> Result<ProviderListResponse> {
        self.fetch_json(&operations::LIST_PROVIDERS, &NO_PARAMS, query)
            .await
    }

    /// Fetch the accounting record of one generation.
    #[instrument(skip(self))]
    pub async fn get_generation(&self, id: &str) -> Result<GenerationResponse> {
        let query = Params::from([("id".to_string(), id.to_string())]);
        self.fetch_json(&operations::GET_GENERATION, &NO_PARAMS, &query)
            .await
    }

    /// Remaining account credits.
    #[instrument(skip(self))]
    pub async fn get_credits(&self) -> Result<JsonValue> {
        self.fetch_json(&operations::GET_CREDITS, &NO_PARAMS, &NO_PARAMS)
            .await
    }

    /// Recent account activity.
    #[instrument(skip(self))]
    pub async fn get_activity(&self, query: &Params) -> Result<JsonValue> {
        self.fetch_json(&operations::GET_ACTIVITY, &NO_PARAMS, query)
            .await
    }

    /// Run an analytics query.
    #[instrument(skip(self, body))]
    pub async fn get_analytics(&self, body: &JsonValue) -> Result<JsonValue> {
        self.send_json(&operations::GET_ANALYTICS, &NO_PARAMS, body)
            .await
    }

    /// Gateway health report.
    #[instrument(skip(self))]
    pub async fn health(&self) -> Result<JsonValue> {
        self.fetch_json(&operations::HEALTHZ, &NO_PARAMS, &NO_PARAMS)
            .await
    }

    /// List provisioning keys. Supports `limit` and `offset` in `query`.
    #[instrument(skip(self))]
    pub async fn list_provisioning_keys(&self, query: &Params) -> Result<ProvisioningKeyList> {
        self.fetch_json(&operations::LIST_PROVISIONING_KEYS, &NO_PARAMS, query)
            .await
    }

    /// Create a provisioning key. The returned record is the only place the
    /// key value ever appears.
    #[instrument(skip(self, request))]
    pub async fn create_provisioning_key(
        &self,
        request: &ProvisioningKeyRequest,
    ) -> Result<ProvisioningKeyWithValue> {
        let envelope: ProvisioningKeyEnvelope<ProvisioningKeyWithValue> = self
            .send_json(&operations::CREATE_PROVISIONING_KEY, &NO_PARAMS, request)
            .await?;
        Ok(envelope.key)
    }

    /// Fetch one provisioning key.
    #[instrument(skip(self))]
    pub async fn get_provisioning_key(&self, id: &str) -> Result<ProvisioningKeyDetail> {
        let envelope: ProvisioningKeyEnvelope<ProvisioningKeyDetail> = self
            .fetch_json(&operations::GET_PROVISIONING_KEY, &path_param("id", id), &NO_PARAMS)
            .await?;
        Ok(envelope.key)
    }

    /// Rename, disable or soft-block a provisioning key.
    #[instrument(skip(self, request))]
    pub async fn update_provisioning_key(
        &self,
        id: &str,
        request: &ProvisioningKeyRequest,
    ) -> Result<KeyActionResponse> {
        self.send_json(&operations::UPDATE_PROVISIONING_KEY, &path_param("id", id), request)
            .await
    }

    /// Delete a provisioning key.
    #[instrument(skip(self))]
    pub async fn delete_provisioning_key(&self, id: &str) -> Result<KeyActionResponse> {
        self.fetch_json(&operations::DELETE_PROVISIONING_KEY, &path_param("id", id), &NO_PARAMS)
            .await
    }

    /// Call an operation with a JSON body and decode the JSON reply.
    async fn send_json<B, T>(&self, operation: &Operation, path: &Params, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let encoded = encode(body)?;
        debug!(operation = operation.name, bytes = encoded.len(), "Sending request");
        let capture = Capture::start();
        let reply = operation
            .call(&self.transport, path, &NO_PARAMS, &NO_PARAMS, Some(&encoded))
            .await;
        self.finish(
            operation,
            capture,
            || serde_json::to_value(body).unwrap_or_default(),
            reply,
        )
    }

    /// Call an operation without a body and decode the JSON reply.
    async fn fetch_json<T>(&self, operation: &Operation, path: &Params, query: &Params) -> Result<T>
    where
        T: DeserializeOwned,
    {
        debug!(operation = operation.name, "Sending request");
        let capture = Capture::start();
        let reply = operation
            .call(&self.transport, path, query, &NO_PARAMS, None)
            .await;
        self.finish(
            operation,
            capture,
            || json!({ "path": path, "query": query }),
            reply,
        )
    }

    /// Decode a JSON reply, recording the call when devtools is on.
    fn finish<T>(
        &self,
        operation: &Operation,
        capture: Capture,
        request: impl FnOnce() -> JsonValue,
        reply: Result<String>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let Some(recorder) = &self.devtools else {
            return decode(&reply?);
        };

        let request = request();
        let value = reply.and_then(|body| decode::<JsonValue>(&body));
        match &value {
            Ok(response) => recorder.record(operation, capture, &request, Ok(response)),
            Err(e) => recorder.record(operation, capture, &request, Err(e)),
        }
        Ok(serde_json::from_value(value?)?)
    }

    /// Pass a binary reply through, recording the call when devtools is on.
    fn finish_bytes(
        &self,
        operation: &Operation,
        capture: Capture,
        request: impl FnOnce() -> JsonValue,
        reply: Result<Bytes>,
    ) -> Result<Bytes> {
        if let Some(recorder) = &self.devtools {
            recorder.record_bytes(operation, capture, &request(), reply.as_deref());
        }
        reply
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.transport.base_url())
            .field("has_api_key", &self.config.has_api_key())
            .field("user_agent", &self.config.user_agent)
            .field("devtools", &self.devtools.as_ref().map(|r| r.directory()))
            .finish()
    }
}

fn encode<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    Ok(serde_json::from_str(body)?)
}

fn path_param(name: &str, value: &str) -> Params {
    Params::from([(name.to_string(), value.to_string())])
}

/// Turn a flat record into text form fields. Strings are sent as-is, other
/// values as their JSON text; absent fields are skipped.
fn form_from_record<T: Serialize>(record: &T) -> Result<Form> {
    let JsonValue::Object(fields) = serde_json::to_value(record)? else {
        return Err(Error::Serialization(serde::ser::Error::custom(
            "multipart record must serialize to a JSON object",
        )));
    };
    let form = fields
        .into_iter()
        .filter(|(_, value)| !value.is_null())
        .fold(Form::new(), |form, (name, value)| match value {
            JsonValue::String(text) => form.text(name, text),
            other => form.text(name, other.to_string()),
        });
    Ok(form)
}

/// Builder for creating a Client.
#[derive(Debug, Default)]
pub struct ClientBuilder {
    base_url: Option<String>,
    api_key: Option<Secret<String>>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    user_agent: Option<String>,
    custom_headers: Vec<(String, String)>,
    devtools: Option<DevtoolsConfig>,
}

impl ClientBuilder {
    /// Create a new client builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder seeded from `AI_STATS_API_KEY` and `AI_STATS_BASE_URL`
    /// (or their `GATEWAY_*` fallbacks), and from `AI_STATS_DEVTOOLS` and
    /// `AI_STATS_DEVTOOLS_DIR`.
    pub fn from_env() -> Self {
        let mut builder = Self::new().devtools(DevtoolsConfig::from_env());
        if let Some(key) = config::env_var(&[config::API_KEY_ENV, config::API_KEY_ENV_FALLBACK]) {
            builder = builder.api_key(key);
        }
        if let Some(url) = config::env_var(&[config::BASE_URL_ENV, config::BASE_URL_ENV_FALLBACK])
        {
            builder = builder.base_url(url);
        }
        builder
    }

    /// Set the base URL. Validated in [`ClientBuilder::build`].
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(Secret::new(key.into()));
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Set the user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Add a custom header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_headers.push((name.into(), value.into()));
        self
    }

    /// Record every typed call to a local devtools directory. A disabled
    /// config turns recording off.
    pub fn devtools(mut self, config: DevtoolsConfig) -> Self {
        self.devtools = config.enabled.then_some(config);
        self
    }

    /// Build the client.
    ///
    /// Fails with a configuration error when the devtools directory cannot
    /// be created.
    pub fn build(self) -> Result<Client> {
        let raw = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        let base_url = Url::parse(raw.trim_end_matches('/'))
            .map_err(|e| Error::configuration(format!("Invalid base URL '{}': {}", raw, e)))?;

        let mut config = ClientConfig::new(base_url);
        config.api_key = self.api_key;
        config.timeout = self.timeout;
        config.connect_timeout = self.connect_timeout;
        if let Some(user_agent) = self.user_agent {
            config.user_agent = user_agent;
        }
        config.custom_headers = self.custom_headers;
        config.devtools = self.devtools;

        Client::new(config)
    }
}
