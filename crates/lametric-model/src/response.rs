//! Decoding of the device reply to a push.
//!
//! The device answers either
//!
//! ```text
//! {"success": {"id": "42"}}
//! {"errors": [{"message": "..."}, ...]}
//! ```
//!
//! The `errors` key is checked first: a reply carrying both keys decodes as a
//! failure and `success` is not inspected. An `errors` key with an empty array
//! is still a failure. A `null` value counts as an absent key.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{ModelError, Result};

/// Outcome reported by the device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushResult {
    /// The notification was queued under this id.
    Success {
        /// Device assigned notification id.
        id: String,
    },
    /// The device refused the notification.
    Failure {
        /// Error messages, in the order the device sent them.
        messages: Vec<String>,
    },
}

/// A decoded device reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushResponse {
    /// What the device made of the push.
    pub result: PushResult,
}

#[derive(Deserialize)]
struct RawError {
    message: String,
}

#[derive(Deserialize)]
struct RawSuccess {
    id: String,
}

fn field<'a>(reply: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    reply.get(key).filter(|value| !value.is_null())
}

fn decode_error(e: serde_json::Error) -> ModelError {
    ModelError::Decode(e.to_string())
}

impl PushResponse {
    /// Decode a raw response body.
    pub fn decode(body: &[u8]) -> Result<PushResponse> {
        let reply: Map<String, Value> = serde_json::from_slice(body).map_err(decode_error)?;

        let result = if let Some(errors) = field(&reply, "errors") {
            let errors = Vec::<RawError>::deserialize(errors).map_err(decode_error)?;
            PushResult::Failure {
                messages: errors.into_iter().map(|e| e.message).collect(),
            }
        } else if let Some(success) = field(&reply, "success") {
            let success = RawSuccess::deserialize(success).map_err(decode_error)?;
            PushResult::Success { id: success.id }
        } else {
            return Err(ModelError::Decode(
                "reply has neither `success` nor `errors`".to_string(),
            ));
        };

        Ok(PushResponse { result })
    }

    /// Whether the device accepted the push.
    pub fn is_success(&self) -> bool {
        matches!(self.result, PushResult::Success { .. })
    }

    /// The notification id, or [`ModelError::DeviceRejected`].
    pub fn into_result(self) -> Result<String> {
        match self.result {
            PushResult::Success { id } => Ok(id),
            PushResult::Failure { messages } => Err(ModelError::DeviceRejected { messages }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_success() {
        let response = PushResponse::decode(br#"{"success":{"id":"42"}}"#).unwrap();
        assert_eq!(
            response.result,
            PushResult::Success {
                id: "42".to_string()
            }
        );
        assert!(response.is_success());
        assert_eq!(response.into_result().unwrap(), "42");
    }

    #[test]
    fn test_decode_errors_in_order() {
        let body = br#"{"errors":[{"message":"bad"},{"message":"worse","dev":"x"}]}"#;
        let response = PushResponse::decode(body).unwrap();
        assert_eq!(
            response.result,
            PushResult::Failure {
                messages: vec!["bad".to_string(), "worse".to_string()]
            }
        );
        assert_eq!(
            response.into_result(),
            Err(ModelError::DeviceRejected {
                messages: vec!["bad".to_string(), "worse".to_string()]
            })
        );
    }

    #[test]
    fn test_empty_errors_is_failure() {
        let response = PushResponse::decode(br#"{"errors":[]}"#).unwrap();
        assert_eq!(response.result, PushResult::Failure { messages: vec![] });
    }

    #[test]
    fn test_errors_take_precedence() {
        let body = br#"{"success":{"id":"1"},"errors":[{"message":"nope"}]}"#;
        let response = PushResponse::decode(body).unwrap();
        assert!(!response.is_success());

        // A malformed success object next to errors is never looked at
        let body = br#"{"errors":[{"message":"bad"}],"success":{}}"#;
        assert_eq!(
            PushResponse::decode(body).unwrap().result,
            PushResult::Failure {
                messages: vec!["bad".to_string()]
            }
        );
    }

    #[test]
    fn test_null_keys_are_absent() {
        let body = br#"{"errors":null,"success":{"id":"7"}}"#;
        assert!(PushResponse::decode(body).unwrap().is_success());
        assert!(matches!(
            PushResponse::decode(br#"{"errors":null}"#),
            Err(ModelError::Decode(_))
        ));
    }

    #[test]
    fn test_reply_must_be_an_object() {
        for body in [
            &br#"[null,{"id":"9"}]"#[..],
            &br#"[[{"message":"bad"}]]"#[..],
            &br#""success""#[..],
            &b"null"[..],
        ] {
            assert!(matches!(
                PushResponse::decode(body),
                Err(ModelError::Decode(_))
            ));
        }
    }

    #[test]
    fn test_unknown_shapes_fail() {
        assert!(matches!(PushResponse::decode(b"{}"), Err(ModelError::Decode(_))));
        assert!(matches!(PushResponse::decode(b"[]"), Err(ModelError::Decode(_))));
        assert!(matches!(
            PushResponse::decode(b"<html>"),
            Err(ModelError::Decode(_))
        ));
        assert!(matches!(
            PushResponse::decode(br#"{"success":{}}"#),
            Err(ModelError::Decode(_))
        ));
    }
}
