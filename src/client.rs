//! Authenticated HTTP transport shared by every API operation.
//!
//! [`Client::execute`] performs one request/response cycle: serialize the body,
//! attach the credential headers, send, read the whole body, then either map a
//! failure status to [`Error::Api`] or decode the body into the caller's type.
//! Every resource method in [`crate::api`] is a thin call into it.

use crate::{
    config::{self, ClientConfig, Environment},
    metadata::RequestMetadata,
    Error, Response, Result,
};
use http::header::{self, HeaderMap, HeaderName, HeaderValue};
use http::{Method, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};
use url::Url;

/// Header carrying the merchant's private key.
pub const PRIVATE_KEY_HEADER: &str = "x-api-private-key";

const FORWARDED_PROTO_HEADER: &str = "x-forwarded-proto";

/// A LongSwipe API client.
///
/// Cloning is cheap and clones share one connection pool, so a single client
/// can serve concurrent calls. The client holds no per-call state.
///
/// # Examples
///
/// ```no_run
/// use longswipe::models::VerifyVoucherRequest;
/// use longswipe::{Client, Environment};
/// use std::time::Duration;
///
/// # async fn example() -> Result<(), longswipe::Error> {
/// let client = Client::builder()
///     .environment(Environment::Sandbox)
///     .public_key("pk_test_...")
///     .private_key("sk_test_...")
///     .timeout(Duration::from_secs(5))
///     .build()?;
///
/// let voucher = client
///     .verify_voucher(&VerifyVoucherRequest {
///         voucher_code: "LS3263655440".to_string(),
///     })
///     .await?;
/// println!("Voucher balance: {}", voucher.data.balance);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http_client: reqwest::Client,
    config: ClientConfig,
    default_headers: HeaderMap,
}

/// A fully read response, before any status mapping or decoding.
struct RawResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
    latency: Duration,
}

impl RawResponse {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

impl Client {
    /// Creates a new `ClientBuilder` for configuring a client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Creates a client from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL does not parse, a key cannot be sent as
    /// a header value, or the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::from_parts(config, HeaderMap::new())
    }

    fn from_parts(mut config: ClientConfig, extra_headers: HeaderMap) -> Result<Self> {
        Url::parse(&config.base_url)?;
        config.base_url = config.base_url.trim_end_matches('/').to_string();

        let mut default_headers = extra_headers;
        for (name, value) in credential_headers(&config)? {
            if let Some(name) = name {
                default_headers.insert(name, value);
            }
        }

        let http_client = reqwest::Client::builder()
            .timeout(config.effective_timeout())
            .min_tls_version(reqwest::tls::Version::TLS_1_2)
            .build()
            .map_err(|e| {
                Error::ConfigurationError(format!("failed to build HTTP client: {}", e))
            })?;

        tracing::debug!(
            base_url = %config.base_url,
            timeout_ms = config.effective_timeout().as_millis(),
            "Created LongSwipe client"
        );

        Ok(Client {
            inner: Arc::new(ClientInner {
                http_client,
                config,
                default_headers,
            }),
        })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Headers attached to every request, credentials included.
    pub fn default_headers(&self) -> &HeaderMap {
        &self.inner.default_headers
    }

    /// Executes a request and decodes a successful body into `Res`.
    ///
    /// Statuses of 400 and above become [`Error::Api`]. A success body that is
    /// not valid JSON for `Res` becomes [`Error::DecodeFailed`].
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use longswipe::{metadata::RequestMetadata, models::Acknowledgement, Client};
    /// use http::Method;
    /// use serde::Serialize;
    ///
    /// #[derive(Serialize)]
    /// struct Otp<'a> { escrow_id: &'a str }
    ///
    /// # async fn example(client: Client) -> Result<(), longswipe::Error> {
    /// let metadata = RequestMetadata::new(Method::POST, "/merchant-integrations-server/escrow-request-otp");
    /// let response = client
    ///     .execute::<_, Acknowledgement>(metadata, Some(&Otp { escrow_id: "esc_1" }))
    ///     .await?;
    /// println!("{}", response.data.message);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn execute<Req, Res>(
        &self,
        metadata: RequestMetadata,
        body: Option<&Req>,
    ) -> Result<Response<Res>>
    where
        Req: Serialize + ?Sized,
        Res: DeserializeOwned,
    {
        let raw = self.send(&metadata, body).await?;

        match serde_json::from_slice::<Res>(&raw.body) {
            Ok(data) => Ok(Response::new(
                data,
                raw.text(),
                raw.status,
                raw.headers,
                raw.latency,
            )),
            Err(e) => {
                let raw_response = raw.text();
                tracing::error!(
                    error = %e,
                    raw_response = %raw_response,
                    path = %metadata.path,
                    "Failed to decode response"
                );

                Err(Error::DecodeFailed {
                    raw_response,
                    serde_error: e.to_string(),
                    status: raw.status,
                })
            }
        }
    }

    /// Executes a request without decoding the response body.
    ///
    /// Failure statuses are still mapped to [`Error::Api`]; on success the raw
    /// body is available in [`Response::raw_body`].
    pub async fn execute_raw<Req>(
        &self,
        metadata: RequestMetadata,
        body: Option<&Req>,
    ) -> Result<Response<()>>
    where
        Req: Serialize + ?Sized,
    {
        let raw = self.send(&metadata, body).await?;
        Ok(Response::new(
            (),
            raw.text(),
            raw.status,
            raw.headers,
            raw.latency,
        ))
    }

    /// Sends one request and reads its body to the end.
    async fn send<Req>(&self, metadata: &RequestMetadata, body: Option<&Req>) -> Result<RawResponse>
    where
        Req: Serialize + ?Sized,
    {
        // Serialize first: a body that cannot be encoded never reaches the network.
        let payload = match body {
            Some(body) => Some(
                serde_json::to_vec(body).map_err(|e| Error::SerializationFailed(e.to_string()))?,
            ),
            None => None,
        };

        let url = format!("{}{}", self.inner.config.base_url, metadata.path_and_query());

        tracing::debug!(
            method = %metadata.method,
            url = %url,
            has_body = payload.is_some(),
            "Executing HTTP request"
        );

        let mut headers = metadata.headers.clone();
        for (name, value) in &self.inner.default_headers {
            headers.insert(name.clone(), value.clone());
        }

        let mut request = self
            .inner
            .http_client
            .request(metadata.method.clone(), url.as_str())
            .headers(headers);

        if let Some(payload) = payload {
            request = request.body(payload);
        }

        let start_time = Instant::now();
        let response = request.send().await.map_err(|e| {
            tracing::warn!(
                error = %e,
                timeout = e.is_timeout(),
                method = %metadata.method,
                path = %metadata.path,
                "Request failed"
            );
            Error::from(e)
        })?;

        let status = response.status();
        let headers = response.headers().clone();

        // `bytes()` consumes the response, so the connection is released on every path below.
        let body = response
            .bytes()
            .await
            .map_err(|source| Error::RequestFailed {
                status: Some(status),
                source,
            })?
            .to_vec();
        let latency = start_time.elapsed();

        tracing::info!(
            status = status.as_u16(),
            latency_ms = latency.as_millis(),
            method = %metadata.method,
            path = %metadata.path,
            "Received HTTP response"
        );

        let raw = RawResponse {
            status,
            headers,
            body,
            latency,
        };

        if status.as_u16() >= 400 {
            return Err(api_error(raw));
        }

        Ok(raw)
    }

    /// Makes a GET request and decodes the response.
    pub async fn get<Res>(&self, path: impl Into<String>) -> Result<Response<Res>>
    where
        Res: DeserializeOwned,
    {
        let metadata = RequestMetadata::new(Method::GET, path);
        self.execute::<(), Res>(metadata, None).await
    }

    /// Makes a POST request with a JSON body and decodes the response.
    pub async fn post<Req, Res>(&self, path: impl Into<String>, body: &Req) -> Result<Response<Res>>
    where
        Req: Serialize + ?Sized,
        Res: DeserializeOwned,
    {
        let metadata = RequestMetadata::new(Method::POST, path);
        self.execute(metadata, Some(body)).await
    }

    /// Makes a PATCH request with a JSON body and decodes the response.
    pub async fn patch<Req, Res>(
        &self,
        path: impl Into<String>,
        body: &Req,
    ) -> Result<Response<Res>>
    where
        Req: Serialize + ?Sized,
        Res: DeserializeOwned,
    {
        let metadata = RequestMetadata::new(Method::PATCH, path);
        self.execute(metadata, Some(body)).await
    }

    /// Makes a DELETE request and decodes the response.
    pub async fn delete<Res>(&self, path: impl Into<String>) -> Result<Response<Res>>
    where
        Res: DeserializeOwned,
    {
        let metadata = RequestMetadata::new(Method::DELETE, path);
        self.execute::<(), Res>(metadata, None).await
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

/// Maps a failure response to [`Error::Api`].
///
/// The message is the envelope's `message` field when the body is a JSON
/// object carrying a non-empty string there, and the raw body otherwise.
fn api_error(raw: RawResponse) -> Error {
    let raw_response = raw.text();
    let message = serde_json::from_slice::<serde_json::Value>(&raw.body)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .and_then(serde_json::Value::as_str)
                .filter(|message| !message.is_empty())
                .map(str::to_owned)
        })
        .unwrap_or_else(|| raw_response.clone());

    if raw.status.is_client_error() {
        tracing::error!(
            status = raw.status.as_u16(),
            message = %message,
            "Client error (4xx)"
        );
    } else {
        tracing::warn!(
            status = raw.status.as_u16(),
            message = %message,
            "Server error (5xx)"
        );
    }

    Error::Api {
        status: raw.status,
        message,
        raw_response,
        headers: raw.headers,
    }
}

/// The fixed headers every request carries.
fn credential_headers(config: &ClientConfig) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();

    let mut bearer = header_value(&format!("Bearer {}", config.public_key), "public key")?;
    bearer.set_sensitive(true);
    headers.insert(header::AUTHORIZATION, bearer);

    let mut private_key = header_value(&config.private_key, "private key")?;
    private_key.set_sensitive(true);
    headers.insert(HeaderName::from_static(PRIVATE_KEY_HEADER), private_key);

    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    headers.insert(header::USER_AGENT, HeaderValue::from_static(config::USER_AGENT));
    headers.insert(
        HeaderName::from_static(FORWARDED_PROTO_HEADER),
        HeaderValue::from_static("https"),
    );

    Ok(headers)
}

fn header_value(value: &str, what: &str) -> Result<HeaderValue> {
    HeaderValue::try_from(value)
        .map_err(|e| Error::ConfigurationError(format!("invalid {}: {}", what, e)))
}

/// Builder for configuring and creating a [`Client`].
///
/// # Examples
///
/// ```
/// use longswipe::{ClientBuilder, Environment};
/// use std::time::Duration;
///
/// # fn example() -> Result<(), longswipe::Error> {
/// let client = ClientBuilder::new()
///     .environment(Environment::Sandbox)
///     .public_key("pk_test")
///     .private_key("sk_test")
///     .timeout(Duration::from_secs(30))
///     .default_header("X-Request-Source", "checkout")?
///     .build()?;
/// assert_eq!(client.config().base_url, "https://sandbox.api.longswipe.com");
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
pub struct ClientBuilder {
    environment: Environment,
    base_url: Option<String>,
    public_key: Option<String>,
    private_key: Option<String>,
    timeout: Option<Duration>,
    default_headers: HeaderMap,
}

impl ClientBuilder {
    /// Creates a new `ClientBuilder` targeting production.
    pub fn new() -> Self {
        Self {
            environment: Environment::default(),
            base_url: None,
            public_key: None,
            private_key: None,
            timeout: None,
            default_headers: HeaderMap::new(),
        }
    }

    /// Selects the environment. Ignored when [`base_url`](Self::base_url) is set.
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Overrides the base URL, for example to point at a local mock server.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid.
    pub fn base_url(mut self, url: impl AsRef<str>) -> Result<Self> {
        let url = url.as_ref();
        Url::parse(url)?;
        self.base_url = Some(url.trim_end_matches('/').to_string());
        Ok(self)
    }

    /// Sets the public key sent as the bearer credential.
    pub fn public_key(mut self, key: impl Into<String>) -> Self {
        self.public_key = Some(key.into());
        self
    }

    /// Sets the private key sent in the `X-API-Private-Key` header.
    pub fn private_key(mut self, key: impl Into<String>) -> Self {
        self.private_key = Some(key.into());
        self
    }

    /// Sets the request timeout. Defaults to [`DEFAULT_TIMEOUT`](crate::DEFAULT_TIMEOUT).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Adds a header included in all requests.
    ///
    /// The credential, content type, user agent and forwarded-proto headers
    /// always take precedence over headers added here.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn default_header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Result<Self> {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| Error::ConfigurationError(format!("invalid header name: {}", e)))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| Error::ConfigurationError(format!("invalid header value: {}", e)))?;
        self.default_headers.insert(name, value);
        Ok(self)
    }

    /// Builds the configured `Client`.
    ///
    /// # Errors
    ///
    /// Returns an error if either key is missing or empty, or if the client
    /// configuration is invalid.
    pub fn build(self) -> Result<Client> {
        let public_key = self
            .public_key
            .filter(|key| !key.is_empty())
            .ok_or_else(|| Error::ConfigurationError("public key is required".to_string()))?;
        let private_key = self
            .private_key
            .filter(|key| !key.is_empty())
            .ok_or_else(|| Error::ConfigurationError("private key is required".to_string()))?;

        let config = ClientConfig {
            base_url: self
                .base_url
                .unwrap_or_else(|| self.environment.base_url().to_string()),
            public_key,
            private_key,
            timeout: self.timeout,
        };

        Client::from_parts(config, self.default_headers)
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
