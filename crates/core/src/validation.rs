//! Field-level validation issue types and input-token parsing.
//!
//! Request DTOs are validated with the `validator` derive at the HTTP
//! boundary; this module holds the wire shape those failures are rendered
//! into, plus the hand-rolled checks that don't fit a derive attribute.

use serde::Serialize;
use validator::ValidationErrors;

/// A single field-level validation failure, as it appears in the
/// `issues` array of a 400 response.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: String,
    pub message: String,
}

impl FieldIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Flatten `validator` derive output into the issue list used on the wire.
///
/// Field names are converted to their camelCase wire form. Falls back to
/// the rule code when a rule carries no custom message.
pub fn issues_from(errors: &ValidationErrors) -> Vec<FieldIssue> {
    let mut issues: Vec<FieldIssue> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(|e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("failed rule: {}", e.code));
                FieldIssue::new(wire_field_name(field.as_ref()), message)
            })
        })
        .collect();
    issues.sort_by(|a, b| a.field.cmp(&b.field));
    issues
}

/// Convert a Rust snake_case field name to its camelCase wire name
/// (`weekly_rate` -> `weeklyRate`).
pub fn wire_field_name(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for ch in field.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Parse a boolean-ish query token.
///
/// Recognized tokens are `true`, `false`, `1`, and `0` (the set the
/// availability filter accepts). Anything else is `None` and must be
/// rejected by the caller.
pub fn parse_bool_token(raw: &str) -> Option<bool> {
    match raw {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

/// Serde helper for boolean fields that may arrive as a JSON boolean, a
/// string token, or a 0/1 number. Use with
/// `#[serde(default, deserialize_with = "boolish::deserialize")]` on an
/// `Option<bool>` field.
pub mod boolish {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Bool(bool),
        Int(i64),
        Str(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<Repr>::deserialize(deserializer)?;
        match raw {
            None => Ok(None),
            Some(Repr::Bool(b)) => Ok(Some(b)),
            Some(Repr::Int(0)) => Ok(Some(false)),
            Some(Repr::Int(1)) => Ok(Some(true)),
            Some(Repr::Int(other)) => Err(serde::de::Error::custom(format!(
                "expected 0 or 1, got {other}"
            ))),
            Some(Repr::Str(s)) => super::parse_bool_token(&s).map(Some).ok_or_else(|| {
                serde::de::Error::custom(format!("unrecognized boolean token: {s:?}"))
            }),
        }
    }

    #[cfg(test)]
    mod tests {
        use serde::Deserialize;

        #[derive(Deserialize)]
        struct Probe {
            #[serde(default, deserialize_with = "super::deserialize")]
            available: Option<bool>,
        }

        fn parse(json: &str) -> Result<Option<bool>, serde_json::Error> {
            serde_json::from_str::<Probe>(json).map(|p| p.available)
        }

        #[test]
        fn test_accepts_all_representations() {
            assert_eq!(parse(r#"{"available": true}"#).unwrap(), Some(true));
            assert_eq!(parse(r#"{"available": "false"}"#).unwrap(), Some(false));
            assert_eq!(parse(r#"{"available": 1}"#).unwrap(), Some(true));
            assert_eq!(parse(r#"{"available": 0}"#).unwrap(), Some(false));
            assert_eq!(parse(r#"{}"#).unwrap(), None);
        }

        #[test]
        fn test_rejects_garbage() {
            assert!(parse(r#"{"available": "maybe"}"#).is_err());
            assert!(parse(r#"{"available": 7}"#).is_err());
        }
    }
}
