//! Per-request metadata: method, path, query parameters and extra headers.

use http::{HeaderMap, HeaderName, HeaderValue, Method};

/// Metadata for an individual HTTP request.
///
/// `path` is root-relative and is appended verbatim to the client's base URL.
/// Query parameters are form-urlencoded and appended in insertion order.
#[derive(Debug, Clone)]
pub struct RequestMetadata {
    /// The HTTP method (GET, POST, PATCH, DELETE).
    pub method: Method,

    /// The request path, relative to the base URL.
    pub path: String,

    /// Additional headers for this request, applied after the client's fixed headers.
    pub headers: HeaderMap,

    /// Query parameters for this request.
    pub query_params: Vec<(String, String)>,
}

impl RequestMetadata {
    /// Creates a new `RequestMetadata` with the given method and path.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: HeaderMap::new(),
            query_params: Vec::new(),
        }
    }

    /// Adds a header to the request.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn with_header(
        mut self,
        name: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> Result<Self, crate::Error> {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| crate::Error::ConfigurationError(format!("invalid header name: {}", e)))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| crate::Error::ConfigurationError(format!("invalid header value: {}", e)))?;
        self.headers.insert(name, value);
        Ok(self)
    }

    /// Adds a query parameter to the request.
    pub fn with_query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.push((key.into(), value.into()));
        self
    }

    /// Adds multiple query parameters to the request.
    pub fn with_query_params(
        mut self,
        params: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        self.query_params.extend(params);
        self
    }

    /// Returns the path with any query parameters appended.
    ///
    /// If the path already carries a query string the parameters are joined
    /// with `&`.
    ///
    /// ```
    /// use longswipe::metadata::RequestMetadata;
    /// use http::Method;
    ///
    /// let metadata = RequestMetadata::new(Method::GET, "/fetch-customers")
    ///     .with_query_param("page", "1")
    ///     .with_query_param("search", "jane doe");
    /// assert_eq!(metadata.path_and_query(), "/fetch-customers?page=1&search=jane+doe");
    /// ```
    pub fn path_and_query(&self) -> String {
        if self.query_params.is_empty() {
            return self.path.clone();
        }

        let query = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&self.query_params)
            .finish();
        let separator = if self.path.contains('?') { '&' } else { '?' };
        format!("{}{}{}", self.path, separator, query)
    }
}

impl Default for RequestMetadata {
    fn default() -> Self {
        Self::new(Method::GET, "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_without_params_is_untouched() {
        let metadata = RequestMetadata::new(Method::DELETE, "/delete-customer/abc");
        assert_eq!(metadata.path_and_query(), "/delete-customer/abc");
    }

    #[test]
    fn params_keep_insertion_order_and_allow_empty_values() {
        let metadata = RequestMetadata::new(Method::GET, "/fetch-invoice")
            .with_query_param("page", "2")
            .with_query_param("limit", "25")
            .with_query_param("filter", "");
        assert_eq!(metadata.path_and_query(), "/fetch-invoice?page=2&limit=25&filter=");
    }

    #[test]
    fn params_extend_an_existing_query_string() {
        let metadata = RequestMetadata::new(Method::GET, "/users?active=true")
            .with_query_params(vec![("email".to_string(), "a+b@x.io".to_string())]);
        assert_eq!(metadata.path_and_query(), "/users?active=true&email=a%2Bb%40x.io");
    }

    #[test]
    fn invalid_header_is_a_configuration_error() {
        let result = RequestMetadata::new(Method::GET, "/").with_header("bad header", "x");
        assert!(matches!(result, Err(crate::Error::ConfigurationError(_))));
    }
}
