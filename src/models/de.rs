//! Deserialization helpers for response payloads.

use serde::{Deserialize, Deserializer};

/// Decodes `null` as the type's default value.
///
/// The API sends `null` for empty lists, strings and nested objects.
/// Container-level `#[serde(default)]` only covers fields that are absent, so
/// fields that may be `null` go through this as well.
///
/// ```ignore
/// #[serde(default, deserialize_with = "null_as_default")]
/// pub tags: Vec<String>,
/// ```
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Sample {
        #[serde(deserialize_with = "null_as_default")]
        names: Vec<String>,
        #[serde(deserialize_with = "null_as_default")]
        label: String,
    }

    #[test]
    fn null_and_absent_both_become_default() {
        let nulls: Sample = serde_json::from_str(r#"{"names":null,"label":null}"#).unwrap();
        assert!(nulls.names.is_empty());
        assert!(nulls.label.is_empty());

        let absent: Sample = serde_json::from_str("{}").unwrap();
        assert!(absent.names.is_empty());

        let present: Sample = serde_json::from_str(r#"{"names":["a"],"label":"x"}"#).unwrap();
        assert_eq!(present.names, ["a"]);
        assert_eq!(present.label, "x");
    }
}
