//! Lenient serde decoders for fields whose JSON type varies upstream.
//!
//! IEX is not consistent about a few scalar types: HIST sizes arrive as
//! quoted integers, `iexId` has been both a string and a number, and
//! `isHalfday` shows up as `true`/`false` or `0`/`1`.
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

/// Decodes an unsigned integer sent either as a number or as a quoted number.
pub fn stringified_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match Scalar::deserialize(deserializer)? {
        Scalar::Int(n) => u64::try_from(n).map_err(D::Error::custom),
        Scalar::Text(s) => s.trim().parse().map_err(D::Error::custom),
        _ => Err(D::Error::custom("expected an integer or a quoted integer")),
    }
}

/// Decodes an optional identifier sent as a string, a number, or `null`.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Scalar>::deserialize(deserializer)? {
        None => None,
        Some(Scalar::Text(s)) if s.is_empty() => None,
        Some(Scalar::Text(s)) => Some(s),
        Some(Scalar::Int(n)) => Some(n.to_string()),
        Some(Scalar::Float(n)) => Some(n.to_string()),
        Some(Scalar::Bool(_)) => return Err(D::Error::custom("expected a string or a number")),
    })
}

/// Decodes a boolean sent as `true`/`false` or as `0`/`1`.
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Scalar::deserialize(deserializer)? {
        Scalar::Bool(b) => Ok(b),
        Scalar::Int(0) => Ok(false),
        Scalar::Int(1) => Ok(true),
        _ => Err(D::Error::custom("expected a boolean or 0/1")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Row {
        #[serde(deserialize_with = "stringified_u64")]
        size: u64,
        #[serde(default, deserialize_with = "string_or_number")]
        id: Option<String>,
        #[serde(default, deserialize_with = "flag")]
        half: bool,
    }

    #[test]
    fn accepts_quoted_and_bare_sizes() {
        let quoted: Row = serde_json::from_str(r#"{"size":"4109140"}"#).unwrap();
        let bare: Row = serde_json::from_str(r#"{"size":4109140}"#).unwrap();
        assert_eq!(quoted.size, 4_109_140);
        assert_eq!(bare.size, 4_109_140);
        assert!(serde_json::from_str::<Row>(r#"{"size":"big"}"#).is_err());
        assert!(serde_json::from_str::<Row>(r#"{"size":-1}"#).is_err());
    }

    #[test]
    fn identifiers_may_be_numbers_or_missing() {
        let text: Row = serde_json::from_str(r#"{"size":1,"id":"2"}"#).unwrap();
        let num: Row = serde_json::from_str(r#"{"size":1,"id":2}"#).unwrap();
        let null: Row = serde_json::from_str(r#"{"size":1,"id":null}"#).unwrap();
        let missing: Row = serde_json::from_str(r#"{"size":1}"#).unwrap();
        assert_eq!(text.id.as_deref(), Some("2"));
        assert_eq!(num.id.as_deref(), Some("2"));
        assert!(null.id.is_none());
        assert!(missing.id.is_none());
    }

    #[test]
    fn flags_accept_bool_and_int() {
        let t: Row = serde_json::from_str(r#"{"size":1,"half":1}"#).unwrap();
        let f: Row = serde_json::from_str(r#"{"size":1,"half":false}"#).unwrap();
        assert!(t.half);
        assert!(!f.half);
        assert!(serde_json::from_str::<Row>(r#"{"size":1,"half":2}"#).is_err());
    }
}
