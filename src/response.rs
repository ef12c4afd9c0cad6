//! Response wrapper that keeps both the decoded data and the raw exchange.

use http::{HeaderMap, StatusCode};
use std::time::Duration;

/// A successful API response.
///
/// `data` holds the decoded body; the raw body, status, headers and latency are
/// kept alongside it for logging and debugging.
///
/// # Examples
///
/// ```no_run
/// use longswipe::models::{CryptoNetwork, Envelope};
/// use longswipe::{Client, Environment};
///
/// # async fn example() -> Result<(), longswipe::Error> {
/// let client = Client::builder()
///     .environment(Environment::Sandbox)
///     .public_key("pk_test")
///     .private_key("sk_test")
///     .build()?;
///
/// let response = client
///     .get::<Envelope<Vec<CryptoNetwork>>>("/merchant-integrations/fetch-supported-cryptonetworks")
///     .await?;
/// for network in &response.data.data {
///     println!("{} ({})", network.network_name, network.chain_id);
/// }
/// println!("took {:?}, status {}", response.latency, response.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Response<T> {
    /// The decoded response data.
    pub data: T,

    /// The raw response body as a string.
    pub raw_body: String,

    /// The HTTP status code of the response.
    pub status: StatusCode,

    /// The response headers.
    pub headers: HeaderMap,

    /// Time from sending the request until the body was fully read.
    pub latency: Duration,
}

impl<T> Response<T> {
    /// Creates a new `Response`.
    pub fn new(
        data: T,
        raw_body: String,
        status: StatusCode,
        headers: HeaderMap,
        latency: Duration,
    ) -> Self {
        Self {
            data,
            raw_body,
            status,
            headers,
            latency,
        }
    }

    /// Maps the response data, keeping the metadata.
    ///
    /// ```
    /// # use longswipe::Response;
    /// # use http::{HeaderMap, StatusCode};
    /// # use std::time::Duration;
    /// let response = Response::new(
    ///     42,
    ///     "42".to_string(),
    ///     StatusCode::OK,
    ///     HeaderMap::new(),
    ///     Duration::from_millis(100),
    /// );
    ///
    /// let string_response = response.map(|n| n.to_string());
    /// assert_eq!(string_response.data, "42");
    /// ```
    pub fn map<U, F>(self, f: F) -> Response<U>
    where
        F: FnOnce(T) -> U,
    {
        Response {
            data: f(self.data),
            raw_body: self.raw_body,
            status: self.status,
            headers: self.headers,
            latency: self.latency,
        }
    }

    /// Consumes the response and returns only the decoded data.
    pub fn into_data(self) -> T {
        self.data
    }

    /// Returns a header value by name, if present and valid UTF-8.
    ///
    /// ```
    /// # use longswipe::Response;
    /// # use http::{HeaderMap, StatusCode, HeaderValue};
    /// # use std::time::Duration;
    /// let mut headers = HeaderMap::new();
    /// headers.insert("content-type", HeaderValue::from_static("application/json"));
    ///
    /// let response = Response::new((), String::new(), StatusCode::OK, headers, Duration::ZERO);
    /// assert_eq!(response.header("content-type"), Some("application/json"));
    /// ```
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)?.to_str().ok()
    }
}

impl<T> AsRef<T> for Response<T> {
    fn as_ref(&self) -> &T {
        &self.data
    }
}

impl<T> std::ops::Deref for Response<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}
