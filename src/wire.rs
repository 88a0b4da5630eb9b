//! JSON body types for the separation endpoint

use serde::{Deserialize, Serialize};

use crate::codec;
use crate::mode::ProcessingMode;
use crate::request::SeparationRequest;

/// POST body: a single `input` envelope
#[derive(Debug, Clone, Serialize)]
pub struct RequestBody {
    pub input: RequestInput,
}

#[derive(Debug, Clone, Serialize)]
pub struct RequestInput {
    /// Audio bytes embedded as a `data:audio/wav;base64,` URI
    pub audio: String,
    pub prompt: String,
    pub mode: ProcessingMode,
    pub predict_spans: bool,
    pub high_quality: bool,
}

impl RequestBody {
    /// Build the wire body, embedding the request audio as a data URI.
    pub fn from_request(request: &SeparationRequest) -> Self {
        Self {
            input: RequestInput {
                audio: codec::encode_wav_data_uri(&request.audio),
                prompt: request.prompt.clone(),
                mode: request.mode,
                // both backend switches ride the one quality flag
                predict_spans: request.high_quality,
                high_quality: request.high_quality,
            },
        }
    }
}

/// Response body. Every field is optional; which ones are present drives
/// how the attempt is classified.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseBody {
    pub status: Option<String>,
    pub output: Option<String>,
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let request = SeparationRequest::new(vec![1, 2, 3], "dog barking", ProcessingMode::Remove);
        let body = RequestBody::from_request(&request);
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["input"]["prompt"], "dog barking");
        assert_eq!(json["input"]["mode"], "remove");
        assert_eq!(json["input"]["predict_spans"], false);
        assert_eq!(json["input"]["high_quality"], false);
        assert!(json["input"]["audio"]
            .as_str()
            .unwrap()
            .starts_with("data:audio/wav;base64,"));
    }

    #[test]
    fn test_quality_flag_sets_both_switches() {
        let request = SeparationRequest::new(vec![], "vocals", ProcessingMode::Isolate)
            .with_high_quality(true);
        let body = RequestBody::from_request(&request);

        assert!(body.input.predict_spans);
        assert!(body.input.high_quality);
    }

    #[test]
    fn test_response_body_tolerates_missing_fields() {
        let body: ResponseBody = serde_json::from_str(r#"{"status":"succeeded"}"#).unwrap();
        assert_eq!(body.status.as_deref(), Some("succeeded"));
        assert!(body.output.is_none());
        assert!(body.error.is_none());

        let body: ResponseBody = serde_json::from_str(r#"{"error":"bad prompt"}"#).unwrap();
        assert_eq!(body.error.as_deref(), Some("bad prompt"));
        assert!(body.status.is_none());
    }

    #[test]
    fn test_response_body_ignores_unknown_fields() {
        let body: ResponseBody =
            serde_json::from_str(r#"{"status":"succeeded","output":"abc","queue_position":3}"#)
                .unwrap();
        assert_eq!(body.output.as_deref(), Some("abc"));
    }
}
