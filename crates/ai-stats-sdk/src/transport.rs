//! HTTP transport shared by every operation.
//!
//! A [`Transport`] owns an immutable triple: the gateway base URL, a default
//! header set, and a `reqwest::Client`. It never changes after construction,
//! so one instance can be cloned into and shared between tasks.

use crate::error::{Error, Result};
use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::multipart::Form;
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, instrument, warn};
use url::Url;

/// String-keyed, string-valued parameters (path, query or header values).
///
/// Kept ordered so that generated query strings are stable.
pub type Params = BTreeMap<String, String>;

/// HTTP verbs used by the gateway API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PATCH`
    Patch,
    /// `DELETE`
    Delete,
}

impl HttpMethod {
    /// Upper-case wire name of the verb.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Issues requests against the gateway and reports success or failure.
///
/// # Example
///
/// ```rust,no_run
/// use ai_stats_sdk::{HttpMethod, Params, Transport};
///
/// # async fn example() -> Result<(), ai_stats_sdk::Error> {
/// let mut headers = Params::new();
/// headers.insert("Authorization".into(), "Bearer sk-test".into());
///
/// let transport = Transport::new(
///     "https://api.phaseo.app/v1",
///     &headers,
///     reqwest::Client::new(),
/// )?;
///
/// let body = transport
///     .request(HttpMethod::Get, "/models", &Params::new(), &Params::new(), None)
///     .await?;
/// println!("{}", body);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Transport {
    http: reqwest::Client,
    base_url: String,
    default_headers: HeaderMap,
}

impl Transport {
    /// Create a transport from a base URL, string default headers and an HTTP client.
    pub fn new(
        base_url: impl AsRef<str>,
        default_headers: &Params,
        http: reqwest::Client,
    ) -> Result<Self> {
        Self::with_header_map(base_url, header_map(default_headers)?, http)
    }

    /// Create a transport from an already validated header map.
    pub fn with_header_map(
        base_url: impl AsRef<str>,
        default_headers: HeaderMap,
        http: reqwest::Client,
    ) -> Result<Self> {
        let base_url = base_url.as_ref().trim_end_matches('/').to_string();
        Url::parse(&base_url)
            .map_err(|e| Error::configuration(format!("Invalid base URL '{}': {}", base_url, e)))?;

        Ok(Self {
            http,
            base_url,
            default_headers,
        })
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Headers sent with every request unless overridden per call.
    pub fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    /// Perform a request and return the raw response body as text.
    ///
    /// Fails with [`Error::RequestFailed`] when the status code is 400 or above.
    #[instrument(skip(self, query, headers, body), fields(method = %method, path = %path))]
    pub async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        query: &Params,
        headers: &Params,
        body: Option<&str>,
    ) -> Result<String> {
        let request = self.build_request(method, path, query, headers, body)?;
        let response = self.execute(request).await?;
        Ok(response.text().await?)
    }

    /// Perform a request and return the raw response body as bytes.
    ///
    /// Same contract as [`Transport::request`], for binary payloads such as
    /// synthesized speech or rendered video.
    #[instrument(skip(self, query, headers, body), fields(method = %method, path = %path))]
    pub async fn request_bytes(
        &self,
        method: HttpMethod,
        path: &str,
        query: &Params,
        headers: &Params,
        body: Option<&str>,
    ) -> Result<Bytes> {
        let request = self.build_request(method, path, query, headers, body)?;
        let response = self.execute(request).await?;
        Ok(response.bytes().await?)
    }

    /// POST a multipart form and return the raw response body as text.
    ///
    /// The content type (with boundary) is set by the form itself.
    #[instrument(skip(self, headers, form), fields(method = "POST", path = %path))]
    pub async fn request_multipart(
        &self,
        path: &str,
        headers: &Params,
        form: Form,
    ) -> Result<String> {
        let url = self.url(path, &Params::new())?;
        let mut merged = self.merge_headers(headers)?;
        merged.remove(CONTENT_TYPE);

        let request = self
            .http
            .post(url)
            .headers(merged)
            .multipart(form)
            .build()?;

        let response = self.execute(request).await?;
        Ok(response.text().await?)
    }

    /// Build the request without sending it.
    ///
    /// Per-call headers replace default headers of the same name. A JSON
    /// content type is attached exactly when a body is supplied.
    pub fn build_request(
        &self,
        method: HttpMethod,
        path: &str,
        query: &Params,
        headers: &Params,
        body: Option<&str>,
    ) -> Result<reqwest::Request> {
        let url = self.url(path, query)?;
        let mut merged = self.merge_headers(headers)?;

        match body {
            Some(_) => {
                merged.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            }
            None => {
                merged.remove(CONTENT_TYPE);
            }
        }

        let mut builder = self.http.request(method.into(), url).headers(merged);
        if let Some(body) = body {
            builder = builder.body(body.to_owned());
        }

        Ok(builder.build()?)
    }

    /// Build the full URL for a resolved path and query parameters.
    pub fn url(&self, path: &str, query: &Params) -> Result<Url> {
        let raw = if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        };

        let mut url = Url::parse(&raw)
            .map_err(|e| Error::configuration(format!("Invalid URL '{}': {}", raw, e)))?;

        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    fn merge_headers(&self, extra: &Params) -> Result<HeaderMap> {
        let mut merged = self.default_headers.clone();
        for (name, value) in header_map(extra)? {
            if let Some(name) = name {
                merged.insert(name, value);
            }
        }
        Ok(merged)
    }

    async fn execute(&self, request: reqwest::Request) -> Result<reqwest::Response> {
        debug!("Sending {} {}", request.method(), request.url());

        let response = self.http.execute(request).await?;
        let status = response.status().as_u16();

        if status >= 400 {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    warn!(status, error = %e, "Failed to read error body");
                    String::new()
                }
            };
            warn!(status, "Gateway rejected request");
            return Err(Error::RequestFailed { status, body });
        }

        debug!(status, "Request succeeded");
        Ok(response)
    }
}

impl fmt::Debug for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transport")
            .field("base_url", &self.base_url)
            .field("default_headers", &self.default_headers.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Validate string headers into a header map.
pub(crate) fn header_map(headers: &Params) -> Result<HeaderMap> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let header_name = HeaderName::try_from(name.as_str())
            .map_err(|e| Error::configuration(format!("Invalid header name '{}': {}", name, e)))?;
        let header_value = HeaderValue::from_str(value)
            .map_err(|e| Error::configuration(format!("Invalid header value for '{}': {}", name, e)))?;
        map.insert(header_name, header_value);
    }
    Ok(map)
}
