//! Generation call contract
//!
//! The wire shape of the personalization endpoint (`POST /api/personalize`),
//! shared by the mock and HTTP clients, plus the timing constants and the
//! fixed user-facing failure message.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::payload::ImagePayload;

/// Fixed delay of the mock generation step, in milliseconds.
pub const MOCK_GENERATION_DELAY_MS: u32 = 3_000;

/// Upper bound imposed on every generation call, in milliseconds.
pub const GENERATION_TIMEOUT_MS: u32 = 30_000;

/// User-facing message shown when generation fails, whatever the cause.
pub const GENERATION_FAILED_MESSAGE: &str =
    "We couldn't personalize the image. Please try another photo.";

/// Request body for the personalization endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalizeRequest {
    /// The uploaded image as a data URL.
    pub image: String,
}

impl PersonalizeRequest {
    pub fn from_payload(payload: &ImagePayload) -> Self {
        Self {
            image: payload.as_str().to_string(),
        }
    }

    /// Serialize to the JSON body the endpoint expects.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Response body from the personalization endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalizeResponse {
    /// The illustrated image as a data URL.
    pub illustrated_image: String,
}

impl PersonalizeResponse {
    /// Pass-through response echoing the request image (the mock contract).
    pub fn echo(request: &PersonalizeRequest) -> Self {
        Self {
            illustrated_image: request.image.clone(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_request_serialize() {
        let request = PersonalizeRequest {
            image: "data:image/png;base64,AAAA".to_string(),
        };

        let json = request.to_json().expect("serialize failed");
        assert_eq!(json, r#"{"image":"data:image/png;base64,AAAA"}"#);
    }

    #[test]
    fn test_request_from_payload() {
        let payload = ImagePayload::from_bytes("image/jpeg", &[1, 2, 3]).expect("valid payload");
        let request = PersonalizeRequest::from_payload(&payload);
        assert_eq!(request.image, payload.as_str());
    }

    #[test]
    fn test_response_deserialize_camel_case() {
        let json = r#"{"illustratedImage": "data:image/png;base64,iVBO"}"#;
        let response = PersonalizeResponse::from_json(json).expect("deserialize failed");
        assert_eq!(response.illustrated_image, "data:image/png;base64,iVBO");
    }

    #[test]
    fn test_response_serialize_camel_case() {
        let response = PersonalizeResponse {
            illustrated_image: "data:image/png;base64,AAAA".to_string(),
        };

        let json = serde_json::to_string(&response).expect("serialize failed");
        assert!(json.contains("\"illustratedImage\":"));
        assert!(!json.contains("illustrated_image"));
    }

    #[test]
    fn test_response_rejects_malformed_json() {
        let result = PersonalizeResponse::from_json("{ not json");
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_echo_passes_image_through() {
        let request = PersonalizeRequest {
            image: "data:image/jpeg;base64,/9j/".to_string(),
        };
        let response = PersonalizeResponse::echo(&request);
        assert_eq!(response.illustrated_image, request.image);
    }

    #[test]
    fn test_timing_constants_sane() {
        // The timeout must leave room for the mock delay.
        assert!(GENERATION_TIMEOUT_MS > MOCK_GENERATION_DELAY_MS);
    }
}
