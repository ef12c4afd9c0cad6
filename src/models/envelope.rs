//! The `{status, message, code, data}` wrapper the API puts around every body.

use serde::{Deserialize, Serialize};

use super::de::null_as_default;

/// A success envelope carrying a payload.
///
/// A missing or `null` payload decodes as `T::default()`. The single-customer
/// lookup nests its payload under `customer` instead of `data`; both keys
/// are accepted.
///
/// ```
/// use longswipe::models::Envelope;
///
/// let body = r#"{"status":"success","message":"ok","code":200,"data":[1,2,3]}"#;
/// let envelope: Envelope<Vec<u32>> = serde_json::from_str(body).unwrap();
/// assert!(envelope.is_success());
/// assert_eq!(envelope.data, vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de> + Default"))]
pub struct Envelope<T> {
    /// `"success"` or `"error"`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    /// Mirrors the HTTP status code.
    #[serde(default)]
    pub code: u16,
    #[serde(default, alias = "customer", deserialize_with = "null_as_default")]
    pub data: T,
}

impl<T> Envelope<T> {
    /// Returns `true` when the API reported `"success"`.
    pub fn is_success(&self) -> bool {
        self.status.eq_ignore_ascii_case("success")
    }
}

/// A success envelope with no payload, returned by mutating endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default)]
    pub code: u16,
}

impl Acknowledgement {
    /// Returns `true` when the API reported `"success"`.
    pub fn is_success(&self) -> bool {
        self.status.eq_ignore_ascii_case("success")
    }
}
