//! GraphQL-over-HTTP request and response envelopes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Result, SessionError};

/// Body of a standard GraphQL POST request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQLRequest {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
}

impl GraphQLRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: None,
            operation_name: None,
        }
    }

    #[must_use]
    pub fn with_variables(mut self, variables: Value) -> Self {
        self.variables = Some(variables);
        self
    }

    #[must_use]
    pub fn with_operation_name(mut self, name: impl Into<String>) -> Self {
        self.operation_name = Some(name.into());
        self
    }
}

/// One GraphQL response envelope (`data` plus `errors`).
///
/// A response can carry both: partial data with field errors is valid per
/// the GraphQL-over-HTTP convention, so neither field implies the other.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQLResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Vec<GraphQLResponseError>,
}

impl GraphQLResponse {
    /// Parses a response body.
    pub fn from_text(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| SessionError::MalformedResponse(e.to_string()))
    }

    /// True when the server reported at least one error.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// One entry of a response's `errors` array.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQLResponseError {
    pub message: String,
    #[serde(default)]
    pub locations: Vec<ErrorLocation>,
    #[serde(default)]
    pub path: Vec<Value>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ErrorLocation {
    pub line: u32,
    pub column: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_serializes_minimal_body() {
        let request = GraphQLRequest::new("{ hello }");
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body, json!({ "query": "{ hello }" }));
    }

    #[test]
    fn test_request_serializes_variables_and_operation_name() {
        let request = GraphQLRequest::new("query Hello($name: String!) { hello(name: $name) }")
            .with_variables(json!({ "name": "world" }))
            .with_operation_name("Hello");
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["variables"], json!({ "name": "world" }));
        assert_eq!(body["operationName"], json!("Hello"));
    }

    #[test]
    fn test_response_parses_data_and_errors() {
        let response = GraphQLResponse::from_text(
            r#"{
                "data": { "hello": null },
                "errors": [
                    { "message": "boom", "locations": [{ "line": 1, "column": 3 }], "path": ["hello"] }
                ]
            }"#,
        )
        .unwrap();
        assert!(response.has_errors());
        assert_eq!(response.errors[0].message, "boom");
        assert_eq!(response.errors[0].locations[0].line, 1);
        assert_eq!(response.data, Some(json!({ "hello": null })));
    }

    #[test]
    fn test_response_rejects_non_json() {
        let err = GraphQLResponse::from_text("<html>bad gateway</html>").unwrap_err();
        assert!(matches!(err, SessionError::MalformedResponse(_)));
    }
}
