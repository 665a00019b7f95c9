//! JSON request and response types.
//!
//! These mirror the schema a transport layer would expose: a request and a response are
//! both a single `text` field, and the liveness check answers `{"text": "ok"}`. No
//! transport lives in this crate; [`Endpoint`] only names the routes so a caller can
//! dispatch on them.

use crate::converter::{convert, ConversionDirection};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Text to convert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRequest {
    /// Input text
    pub text: String,
}

impl TextRequest {
    /// Wrap a string.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Converted text, or the liveness answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextResponse {
    /// Output text
    pub text: String,
}

impl TextResponse {
    /// Liveness payload.
    pub fn health() -> Self {
        Self {
            text: "ok".to_string(),
        }
    }
}

/// Convert the text of a request.
pub fn handle(request: &TextRequest, direction: ConversionDirection) -> TextResponse {
    TextResponse {
        text: convert(&request.text, direction),
    }
}

/// Routes of the conversion service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `GET /health`
    Health,
    /// `POST /bijoy-to-unicode`
    BijoyToUnicode,
    /// `POST /unicode-to-bijoy`
    UnicodeToBijoy,
}

impl Endpoint {
    /// All routes.
    pub const ALL: [Endpoint; 3] = [
        Endpoint::Health,
        Endpoint::BijoyToUnicode,
        Endpoint::UnicodeToBijoy,
    ];

    /// Route path.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Health => "/health",
            Endpoint::BijoyToUnicode => "/bijoy-to-unicode",
            Endpoint::UnicodeToBijoy => "/unicode-to-bijoy",
        }
    }

    /// Look up a route by path.
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.path() == path)
    }

    /// Conversion direction served by the route; `None` for the liveness check.
    pub fn direction(&self) -> Option<ConversionDirection> {
        match self {
            Endpoint::Health => None,
            Endpoint::BijoyToUnicode => Some(ConversionDirection::LegacyToLogical),
            Endpoint::UnicodeToBijoy => Some(ConversionDirection::LogicalToLegacy),
        }
    }

    /// Answer a JSON request body. The liveness check ignores the body.
    ///
    /// # Errors
    ///
    /// [`crate::Error::Json`] if a conversion body is not a valid request.
    pub fn respond(&self, body: &str) -> Result<String> {
        let response = match self.direction() {
            None => TextResponse::health(),
            Some(direction) => {
                let request: TextRequest = serde_json::from_str(body)?;
                handle(&request, direction)
            },
        };
        Ok(serde_json::to_string(&response)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_payload() {
        let json = serde_json::to_string(&TextResponse::health()).unwrap();
        assert_eq!(json, r#"{"text":"ok"}"#);
    }

    #[test]
    fn test_handle() {
        let response = handle(
            &TextRequest::new("Avwg"),
            ConversionDirection::LegacyToLogical,
        );
        assert_eq!(response.text, "আমি");
    }

    #[test]
    fn test_endpoint_paths() {
        for endpoint in Endpoint::ALL {
            assert_eq!(Endpoint::from_path(endpoint.path()), Some(endpoint));
        }
        assert_eq!(Endpoint::from_path("/nope"), None);
    }

    #[test]
    fn test_respond_rejects_bad_body() {
        let err = Endpoint::BijoyToUnicode.respond("not json").unwrap_err();
        assert!(matches!(err, crate::Error::Json(_)));
        // Liveness never reads the body
        assert!(Endpoint::Health.respond("not json").is_ok());
    }
}
