/// Request shape validation for the auth and message endpoints
use serde::Serialize;
use std::collections::BTreeMap;
use validator::Validate;

use crate::error::BoardError;

/// Field name to list of violation messages, serialized as the `errors`
/// object of a 400 response.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FieldErrors(pub BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Run derive-based validation and map failures into the field-level
/// error shape. Every violated field is reported, not just the first.
pub fn validate_shape<T: Validate>(req: &T) -> Result<(), BoardError> {
    req.validate().map_err(|errors| {
        let mut fields = BTreeMap::new();
        for (field, violations) in errors.field_errors() {
            let messages: Vec<String> = violations
                .iter()
                .map(|v| {
                    v.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("invalid value for {}", field))
                })
                .collect();
            fields.insert(field.to_string(), messages);
        }
        BoardError::Validation(FieldErrors(fields))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PostMessageRequest, RegisterRequest};

    #[test]
    fn register_rejects_empty_username() {
        let req = RegisterRequest {
            username: String::new(),
            password: "secr3t".to_string(),
        };
        let err = validate_shape(&req).unwrap_err();
        match err {
            BoardError::Validation(fields) => {
                assert!(fields.0.contains_key("username"));
                assert!(!fields.0.contains_key("password"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn register_rejects_overlong_username() {
        let req = RegisterRequest {
            username: "a".repeat(151),
            password: "secr3t".to_string(),
        };
        assert!(validate_shape(&req).is_err());

        let req = RegisterRequest {
            username: "a".repeat(150),
            password: "secr3t".to_string(),
        };
        assert!(validate_shape(&req).is_ok());
    }

    #[test]
    fn register_reports_password_bounds() {
        let mut req = RegisterRequest {
            username: "alice".to_string(),
            password: "abc".to_string(),
        };
        assert!(validate_shape(&req).is_err());

        req.password = "a".repeat(129);
        assert!(validate_shape(&req).is_err());

        req.password = "abcd".to_string();
        assert!(validate_shape(&req).is_ok());

        req.password = "a".repeat(128);
        assert!(validate_shape(&req).is_ok());
    }

    #[test]
    fn register_lists_every_violated_field() {
        let req = RegisterRequest {
            username: String::new(),
            password: "x".to_string(),
        };
        match validate_shape(&req).unwrap_err() {
            BoardError::Validation(fields) => {
                assert!(fields.0.contains_key("username"));
                assert!(fields.0.contains_key("password"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn message_text_bounds() {
        let mut req = PostMessageRequest {
            text: String::new(),
        };
        assert!(validate_shape(&req).is_err());

        req.text = "hello".to_string();
        assert!(validate_shape(&req).is_ok());

        req.text = "a".repeat(2001);
        assert!(validate_shape(&req).is_err());
    }
}
