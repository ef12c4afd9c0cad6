//! Error types for LongSwipe API calls.
//!
//! Every failed call yields exactly one [`Error`]. The HTTP status is kept on
//! every variant that saw a response, so callers can branch on 404 vs 400
//! without matching on message text.

use http::{HeaderMap, StatusCode};

/// The error type for all client operations.
///
/// # Examples
///
/// ```no_run
/// use longswipe::{Client, Environment, Error};
///
/// # async fn example() -> Result<(), Error> {
/// let client = Client::builder()
///     .environment(Environment::Sandbox)
///     .public_key("pk_test")
///     .private_key("sk_test")
///     .build()?;
///
/// match client.customer_by_email("jane@example.com").await {
///     Ok(customer) => println!("Found: {}", customer.data.name),
///     Err(Error::Api { status, message, .. }) if status.as_u16() == 404 => {
///         eprintln!("No such customer: {}", message);
///     }
///     Err(e) => eprintln!("Lookup failed: {}", e),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request body could not be serialized to JSON.
    ///
    /// Raised before anything is sent; no network call is made.
    #[error("failed to marshal request body: {0}")]
    SerializationFailed(String),

    /// The request could not be built or executed, or its body could not be read.
    ///
    /// Covers DNS and connect failures, TLS errors, invalid URLs and timeouts.
    /// `status` is set only when a response arrived before the failure.
    #[error("request failed: {source}")]
    RequestFailed {
        /// The HTTP status code, if a response was received
        status: Option<StatusCode>,
        /// The underlying transport error
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a status code of 400 or above.
    ///
    /// `message` is the `message` field of the JSON error envelope when present
    /// and non-empty, otherwise the raw response body. The error displays as
    /// `message` alone.
    #[error("{message}")]
    Api {
        /// The HTTP status code
        status: StatusCode,
        /// The human-readable error message
        message: String,
        /// The raw response body
        raw_response: String,
        /// The response headers
        headers: HeaderMap,
    },

    /// A successful response body could not be decoded into the expected type.
    #[error("failed to decode response (status {status}): {serde_error}")]
    DecodeFailed {
        /// The raw response body that failed to decode
        raw_response: String,
        /// The serde error message
        serde_error: String,
        /// The HTTP status code
        status: StatusCode,
    },

    /// Invalid client configuration, such as a missing key or a header value
    /// that cannot be sent.
    #[error("configuration error: {0}")]
    ConfigurationError(String),

    /// The configured base URL could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl Error {
    /// Returns the HTTP status code if a response was received.
    ///
    /// ```
    /// use longswipe::Error;
    /// use http::{HeaderMap, StatusCode};
    ///
    /// let err = Error::Api {
    ///     status: StatusCode::NOT_FOUND,
    ///     message: "customer not found".to_string(),
    ///     raw_response: r#"{"message":"customer not found"}"#.to_string(),
    ///     headers: HeaderMap::new(),
    /// };
    /// assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    /// assert_eq!(err.to_string(), "customer not found");
    ///
    /// assert_eq!(Error::SerializationFailed("bad".into()).status(), None);
    /// ```
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::DecodeFailed { status, .. } => Some(*status),
            Error::RequestFailed { status, .. } => *status,
            _ => None,
        }
    }

    /// Returns the raw response body if this error has one.
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            Error::Api { raw_response, .. } => Some(raw_response),
            Error::DecodeFailed { raw_response, .. } => Some(raw_response),
            _ => None,
        }
    }

    /// Returns `true` if the request timed out.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::RequestFailed { source, .. } if source.is_timeout())
    }

    /// Returns `true` if the API itself reported the failure.
    pub fn is_api_error(&self) -> bool {
        matches!(self, Error::Api { .. })
    }
}

impl From<reqwest::Error> for Error {
    fn from(source: reqwest::Error) -> Self {
        Error::RequestFailed {
            status: source.status(),
            source,
        }
    }
}

/// A specialized `Result` type for LongSwipe API calls.
pub type Result<T> = std::result::Result<T, Error>;
