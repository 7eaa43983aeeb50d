//! The gateway operation table.
//!
//! Every endpoint is a fixed (method, path template) pair. Each one gets a free
//! function with the same shape: resolve the template from the path
//! parameters, then hand the request to [`Transport::request`] and return the
//! raw response body.
//!
//! ```rust,no_run
//! use ai_stats_sdk::{operations, Params, Transport};
//!
//! # async fn example(transport: &Transport) -> Result<(), ai_stats_sdk::Error> {
//! let mut path = Params::new();
//! path.insert("video_id".into(), "abc123".into());
//!
//! operations::delete_video(transport, &path, &Params::new(), &Params::new(), None).await?;
//! # Ok(())
//! # }
//! ```
//!
//! Some resources are reachable through more than one route (`/batches` and
//! `/batch`, `/management/keys` and `/provisioning/keys`, ...). Both routes are
//! kept as separate operations because the gateway serves both.

use crate::error::{Error, Result};
use crate::transport::{HttpMethod, Params, Transport};
use bytes::Bytes;

/// One entry of the operation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Operation {
    /// Upstream operation identifier, e.g. `createChatCompletion`.
    pub name: &'static str,
    /// HTTP verb.
    pub method: HttpMethod,
    /// Path template relative to the base URL, e.g. `/videos/{video_id}`.
    pub path: &'static str,
}

impl Operation {
    /// Create a table entry.
    pub const fn new(name: &'static str, method: HttpMethod, path: &'static str) -> Self {
        Self { name, method, path }
    }

    /// Names of the `{placeholder}` segments in the path template, in order.
    pub fn path_parameters(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        let mut rest = self.path;
        while let Some(start) = rest.find('{') {
            let Some(len) = rest[start..].find('}') else {
                break;
            };
            names.push(&rest[start + 1..start + len]);
            rest = &rest[start + len + 1..];
        }
        names
    }

    /// Substitute path parameters into the template.
    ///
    /// Each value is percent-encoded as one path segment, so `/`, `?` and `#`
    /// inside a value cannot reach another route or leak into the query.
    /// Empty values and the dot segments `.` and `..` are rejected, as is a
    /// placeholder without a value; nothing is sent in those cases.
    pub fn resolve_path(&self, params: &Params) -> Result<String> {
        let mut resolved = String::with_capacity(self.path.len());
        let mut rest = self.path;

        while let Some(start) = rest.find('{') {
            let Some(len) = rest[start..].find('}') else {
                break;
            };
            let name = &rest[start + 1..start + len];
            let value = params
                .get(name)
                .ok_or_else(|| Error::MissingPathParameter {
                    operation: self.name,
                    parameter: name.to_string(),
                })?;

            if value.is_empty() || value == "." || value == ".." {
                return Err(Error::InvalidPathParameter {
                    operation: self.name,
                    parameter: name.to_string(),
                    value: value.clone(),
                });
            }

            resolved.push_str(&rest[..start]);
            resolved.push_str(&urlencoding::encode(value));
            rest = &rest[start + len + 1..];
        }

        resolved.push_str(rest);
        Ok(resolved)
    }

    /// Resolve the path and perform the request, returning the body as text.
    pub async fn call(
        &self,
        transport: &Transport,
        path: &Params,
        query: &Params,
        headers: &Params,
        body: Option<&str>,
    ) -> Result<String> {
        let resolved = self.resolve_path(path)?;
        transport
            .request(self.method, &resolved, query, headers, body)
            .await
    }

    /// Resolve the path and perform the request, returning the body as bytes.
    pub async fn call_bytes(
        &self,
        transport: &Transport,
        path: &Params,
        query: &Params,
        headers: &Params,
        body: Option<&str>,
    ) -> Result<Bytes> {
        let resolved = self.resolve_path(path)?;
        transport
            .request_bytes(self.method, &resolved, query, headers, body)
            .await
    }
}

/// Look up an operation by its upstream identifier.
pub fn find_operation(name: &str) -> Option<&'static Operation> {
    OPERATIONS.iter().find(|op| op.name == name)
}

macro_rules! http_method {
    (GET) => {
        HttpMethod::Get
    };
    (POST) => {
        HttpMethod::Post
    };
    (PATCH) => {
        HttpMethod::Patch
    };
    (DELETE) => {
        HttpMethod::Delete
    };
}

macro_rules! operations {
    ($(
        $(#[doc = $doc:literal])*
        $func:ident, $konst:ident => $name:literal, $method:ident $path:literal;
    )+) => {
        $(
            #[doc = concat!("Table entry for `", $name, "`.")]
            pub const $konst: Operation = Operation::new($name, http_method!($method), $path);
        )+

        /// Every operation exposed by the gateway.
        pub static OPERATIONS: &[Operation] = &[$($konst,)+];

        $(
            $(#[doc = $doc])*
            #[doc = ""]
            #[doc = concat!("`", stringify!($method), " ", $path, "` (`", $name, "`)")]
            pub async fn $func(
                transport: &Transport,
                path: &Params,
                query: &Params,
                headers: &Params,
                body: Option<&str>,
            ) -> Result<String> {
                $konst.call(transport, path, query, headers, body).await
            }
        )+
    };
}

operations! {
    /// Estimate the cost of a request for a model.
    calculate_pricing, CALCULATE_PRICING => "calculatePricing", POST "/pricing/calculate";
    /// Anthropic-compatible messages endpoint.
    create_anthropic_message, CREATE_ANTHROPIC_MESSAGE => "createAnthropicMessage", POST "/messages";
    /// Submit a batch job.
    create_batch, CREATE_BATCH => "createBatch", POST "/batches";
    create_batch_alias, CREATE_BATCH_ALIAS => "createBatchAlias", POST "/batch";
    /// OpenAI-compatible chat completions.
    create_chat_completion, CREATE_CHAT_COMPLETION => "createChatCompletion", POST "/chat/completions";
    create_embedding, CREATE_EMBEDDING => "createEmbedding", POST "/embeddings";
    create_image, CREATE_IMAGE => "createImage", POST "/images/generations";
    create_image_edit, CREATE_IMAGE_EDIT => "createImageEdit", POST "/images/edits";
    create_moderation, CREATE_MODERATION => "createModeration", POST "/moderations";
    create_oauth_client, CREATE_OAUTH_CLIENT => "createOAuthClient", POST "/oauth-clients";
    create_ocr, CREATE_OCR => "createOcr", POST "/ocr";
    /// Create a provisioning (management) key.
    create_provisioning_key, CREATE_PROVISIONING_KEY => "createProvisioningKey", POST "/management/keys";
    create_provisioning_key_alias, CREATE_PROVISIONING_KEY_ALIAS => "createProvisioningKeyAlias", POST "/provisioning/keys";
    create_provisioning_key_legacy, CREATE_PROVISIONING_KEY_LEGACY => "createProvisioningKeyLegacy", POST "/keys";
    /// OpenAI Responses-compatible endpoint.
    create_response, CREATE_RESPONSE => "createResponse", POST "/responses";
    create_speech, CREATE_SPEECH => "createSpeech", POST "/audio/speech";
    create_transcription, CREATE_TRANSCRIPTION => "createTranscription", POST "/audio/transcriptions";
    create_translation, CREATE_TRANSLATION => "createTranslation", POST "/audio/translations";
    /// Start a video generation job. Poll it with [`get_video`].
    create_video, CREATE_VIDEO => "createVideo", POST "/videos";
    create_video_alias, CREATE_VIDEO_ALIAS => "createVideoAlias", POST "/video/generations";
    delete_oauth_client, DELETE_OAUTH_CLIENT => "deleteOAuthClient", DELETE "/oauth-clients/{client_id}";
    delete_provisioning_key, DELETE_PROVISIONING_KEY => "deleteProvisioningKey", DELETE "/management/keys/{id}";
    delete_provisioning_key_alias, DELETE_PROVISIONING_KEY_ALIAS => "deleteProvisioningKeyAlias", DELETE "/provisioning/keys/{id}";
    delete_video, DELETE_VIDEO => "deleteVideo", DELETE "/videos/{video_id}";
    delete_video_alias, DELETE_VIDEO_ALIAS => "deleteVideoAlias", DELETE "/video/generations/{video_id}";
    generate_music, GENERATE_MUSIC => "generateMusic", POST "/music/generate";
    generate_music_alias, GENERATE_MUSIC_ALIAS => "generateMusicAlias", POST "/music/generations";
    get_activity, GET_ACTIVITY => "getActivity", GET "/activity";
    /// Analytics queries are sent as a POST body.
    get_analytics, GET_ANALYTICS => "getAnalytics", POST "/analytics";
    get_credits, GET_CREDITS => "getCredits", GET "/credits";
    /// Look up a single generation; pass its id as the `id` query parameter.
    get_generation, GET_GENERATION => "getGeneration", GET "/generations";
    get_music_generation, GET_MUSIC_GENERATION => "getMusicGeneration", GET "/music/generate/{music_id}";
    get_music_generation_alias, GET_MUSIC_GENERATION_ALIAS => "getMusicGenerationAlias", GET "/music/generations/{music_id}";
    get_oauth_client, GET_OAUTH_CLIENT => "getOAuthClient", GET "/oauth-clients/{client_id}";
    get_provider_derank_status, GET_PROVIDER_DERANK_STATUS => "getProviderDerankStatus", GET "/health/providers/{provider_id}/derank";
    get_provisioning_key, GET_PROVISIONING_KEY => "getProvisioningKey", GET "/management/keys/{id}";
    get_provisioning_key_alias, GET_PROVISIONING_KEY_ALIAS => "getProvisioningKeyAlias", GET "/provisioning/keys/{id}";
    /// Details of the key used to authenticate the call.
    get_provisioning_key_legacy, GET_PROVISIONING_KEY_LEGACY => "getProvisioningKeyLegacy", GET "/key";
    get_video, GET_VIDEO => "getVideo", GET "/videos/{video_id}";
    get_video_alias, GET_VIDEO_ALIAS => "getVideoAlias", GET "/video/generations/{video_id}";
    /// Rendered video payload. Use [`Operation::call_bytes`] for binary content.
    get_video_content, GET_VIDEO_CONTENT => "getVideoContent", GET "/videos/{video_id}/content";
    get_video_content_alias, GET_VIDEO_CONTENT_ALIAS => "getVideoContentAlias", GET "/video/generations/{video_id}/content";
    healthz, HEALTHZ => "healthz", GET "/health";
    invalidate_gateway_key_cache, INVALIDATE_GATEWAY_KEY_CACHE => "invalidateGatewayKeyCache", POST "/keys/{id}/invalidate";
    list_endpoints, LIST_ENDPOINTS => "listEndpoints", GET "/endpoints";
    list_files, LIST_FILES => "listFiles", GET "/files";
    list_models, LIST_MODELS => "listModels", GET "/models";
    list_oauth_clients, LIST_OAUTH_CLIENTS => "listOAuthClients", GET "/oauth-clients";
    list_organisations, LIST_ORGANISATIONS => "listOrganisations", GET "/organisations";
    list_pricing_models, LIST_PRICING_MODELS => "listPricingModels", GET "/pricing/models";
    list_providers, LIST_PROVIDERS => "listProviders", GET "/providers";
    list_provisioning_keys, LIST_PROVISIONING_KEYS => "listProvisioningKeys", GET "/management/keys";
    list_provisioning_keys_alias, LIST_PROVISIONING_KEYS_ALIAS => "listProvisioningKeysAlias", GET "/provisioning/keys";
    list_provisioning_keys_legacy, LIST_PROVISIONING_KEYS_LEGACY => "listProvisioningKeysLegacy", GET "/keys";
    regenerate_oauth_client_secret, REGENERATE_OAUTH_CLIENT_SECRET => "regenerateOAuthClientSecret", POST "/oauth-clients/{client_id}/regenerate-secret";
    retrieve_batch, RETRIEVE_BATCH => "retrieveBatch", GET "/batches/{batch_id}";
    retrieve_batch_alias, RETRIEVE_BATCH_ALIAS => "retrieveBatchAlias", GET "/batch/{id}";
    retrieve_file, RETRIEVE_FILE => "retrieveFile", GET "/files/{file_id}";
    root, ROOT => "root", GET "/";
    update_oauth_client, UPDATE_OAUTH_CLIENT => "updateOAuthClient", PATCH "/oauth-clients/{client_id}";
    update_provisioning_key, UPDATE_PROVISIONING_KEY => "updateProvisioningKey", PATCH "/management/keys/{id}";
    update_provisioning_key_alias, UPDATE_PROVISIONING_KEY_ALIAS => "updateProvisioningKeyAlias", PATCH "/provisioning/keys/{id}";
    /// JSON-body variant of file upload. The typed client uploads multipart forms.
    upload_file, UPLOAD_FILE => "uploadFile", POST "/files";
}
