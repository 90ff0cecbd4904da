//! Standardized API response shapes.

use serde::{Deserialize, Serialize};

/// Every error response on the wire: a human-readable message plus an
/// optional machine-readable code clients can branch on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
        }
    }

    pub fn with_code(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: Some(code.into()),
        }
    }
}

/// Plain acknowledgement body for mutations that return no entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// 404 body for unknown routes, listing the known endpoint set.
/// Response-only: the static endpoint list cannot be deserialized.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnknownRouteBody {
    pub message: String,
    pub path: String,
    pub method: String,
    pub available_endpoints: Vec<&'static str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_omits_absent_code() {
        let json = serde_json::to_value(ErrorBody::new("boom")).unwrap();
        assert_eq!(json, serde_json::json!({ "message": "boom" }));
    }

    #[test]
    fn unknown_route_body_serializes_camel_case() {
        let json = serde_json::to_value(UnknownRouteBody {
            message: "API endpoint not found".to_string(),
            path: "/api/nope".to_string(),
            method: "GET".to_string(),
            available_endpoints: vec!["GET /api/health"],
        })
        .unwrap();
        assert_eq!(json.get("path"), Some(&serde_json::json!("/api/nope")));
        assert_eq!(
            json.get("availableEndpoints"),
            Some(&serde_json::json!(["GET /api/health"]))
        );
    }

    #[test]
    fn error_body_carries_code() {
        let json = serde_json::to_value(ErrorBody::with_code("no token", "NO_TOKEN")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "message": "no token", "code": "NO_TOKEN" })
        );
    }
}
