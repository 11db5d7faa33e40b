//! Deserialization helpers for form-originated numeric fields.
//!
//! The backend echoes some numbers exactly as they were typed into HTML
//! inputs, so a field documented as numeric may arrive as `650`, `650.0`,
//! or `"650"`. Everything is coerced to `f64` at the boundary.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    String(String),
}

/// Deserialize an `f64` from either a JSON number or a numeric string.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid numeric string: {s:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(deserialize_with = "super::lenient_f64")]
        value: f64,
    }

    #[test]
    fn parses_number_and_string() {
        let n: Probe = serde_json::from_str(r#"{"value": 650}"#).unwrap();
        let s: Probe = serde_json::from_str(r#"{"value": " 650.5 "}"#).unwrap();
        assert_eq!(n.value, 650.0);
        assert_eq!(s.value, 650.5);
    }

    #[test]
    fn rejects_garbage_string() {
        let err = serde_json::from_str::<Probe>(r#"{"value": "sqft"}"#);
        assert!(err.is_err());
    }
}
