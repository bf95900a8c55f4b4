//! Response envelopes used at the JSON boundary.
//!
//! Success: `{ "success": true, "data": ... }`.
//! Failure: `{ "error": { "message": ..., "status": ... } }`.

use crate::core::Error;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    pub status: u16,
}

impl From<&Error> for ErrorBody {
    fn from(error: &Error) -> Self {
        Self {
            message: error.to_string(),
            status: error.status(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

impl From<&Error> for ErrorEnvelope {
    fn from(error: &Error) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope_shape() {
        let value = serde_json::to_value(ApiResponse::ok(vec![1, 2])).unwrap();
        assert_eq!(value, json!({ "success": true, "data": [1, 2] }));
    }

    #[test]
    fn test_error_envelope_shape() {
        let envelope = ErrorEnvelope::from(&Error::invalid_subject());
        let value = serde_json::to_value(envelope).unwrap();
        assert_eq!(
            value,
            json!({
                "error": {
                    "message": "Subject line must be a non-empty string",
                    "status": 400
                }
            })
        );
    }
}
