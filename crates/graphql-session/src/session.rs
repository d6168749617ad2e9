//! Per-endpoint session state.
//!
//! An [`EndpointSession`] owns the active endpoint URL, the headers sent
//! with every request, and the current [`Schema`]. Schema loads are ordered
//! by a monotonically increasing sequence number: a response is applied
//! only while its ticket is still the newest issued, so a slow response can
//! never install a schema over a newer request or onto the wrong endpoint.

use std::sync::Arc;
use std::time::Duration;

use graphql_schema::{Schema, INTROSPECTION_QUERY};

use crate::request::{GraphQLRequest, GraphQLResponse};
use crate::transport::{GraphQLTransport, TransportResponse};
use crate::{Result, SessionError};

/// Handle for one in-flight introspection request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntrospectionTicket {
    seq: u64,
}

/// Outcome of applying an introspection payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaUpdate {
    /// A fresh schema was installed.
    Installed,
    /// The payload answered a superseded request and was dropped.
    DiscardedStale,
}

/// Result of executing one GraphQL request.
#[derive(Debug)]
pub struct ExecutionOutcome {
    pub response: GraphQLResponse,
    pub status: u16,
    pub elapsed: Duration,
}

/// State for the active endpoint.
#[derive(Debug)]
pub struct EndpointSession {
    endpoint: String,
    headers: Vec<(String, String)>,
    schema: Option<Arc<Schema>>,
    issued_seq: u64,
}

impl EndpointSession {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            headers: Vec::new(),
            schema: None,
            issued_seq: 0,
        }
    }

    /// Adds a header sent with every request (e.g. authentication).
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    #[must_use]
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// The active schema, when one has been installed.
    #[must_use]
    pub fn schema(&self) -> Option<&Arc<Schema>> {
        self.schema.as_ref()
    }

    /// Switches the session to a different endpoint.
    ///
    /// The current schema never survives an endpoint change, and responses
    /// to introspection requests issued before the switch become stale.
    pub fn switch_endpoint(&mut self, endpoint: impl Into<String>) {
        self.endpoint = endpoint.into();
        self.schema = None;
        self.issued_seq += 1;
        tracing::info!(endpoint = %self.endpoint, "Switched endpoint, schema discarded");
    }

    /// Starts a schema refresh, superseding any outstanding request.
    pub fn begin_introspection(&mut self) -> IntrospectionTicket {
        self.issued_seq += 1;
        tracing::debug!(seq = self.issued_seq, "Introspection request issued");
        IntrospectionTicket {
            seq: self.issued_seq,
        }
    }

    /// The JSON POST body of an introspection request.
    #[must_use]
    pub fn introspection_body() -> String {
        serde_json::json!({ "query": INTROSPECTION_QUERY }).to_string()
    }

    /// Applies the response text of an introspection request.
    ///
    /// Stale responses (a newer request was issued since `ticket`) are
    /// discarded without touching the current schema. Parse and build
    /// failures return an error and also leave the previously installed
    /// schema in place.
    pub fn apply_introspection(
        &mut self,
        ticket: IntrospectionTicket,
        response_text: &str,
    ) -> Result<SchemaUpdate> {
        if ticket.seq != self.issued_seq {
            tracing::debug!(
                seq = ticket.seq,
                latest = self.issued_seq,
                "Discarding stale introspection response"
            );
            return Ok(SchemaUpdate::DiscardedStale);
        }

        let value: serde_json::Value = serde_json::from_str(response_text)
            .map_err(|e| SessionError::MalformedResponse(e.to_string()))?;
        let schema_value = value.pointer("/data/__schema").ok_or_else(|| {
            SessionError::MalformedResponse("response has no data.__schema".into())
        })?;
        let schema = Schema::build(schema_value)?;

        self.schema = Some(Arc::new(schema));
        tracing::info!(seq = ticket.seq, endpoint = %self.endpoint, "Schema installed");
        Ok(SchemaUpdate::Installed)
    }

    /// Fetches and installs a fresh schema through `transport`.
    #[tracing::instrument(skip(self, transport), fields(endpoint = %self.endpoint))]
    pub async fn refresh_schema<T: GraphQLTransport>(
        &mut self,
        transport: &T,
    ) -> Result<SchemaUpdate> {
        let ticket = self.begin_introspection();
        let response = transport
            .send(&self.endpoint, &self.headers, Self::introspection_body())
            .await?;
        if !(200..300).contains(&response.status) {
            return Err(SessionError::Http(response.status, response.text));
        }
        self.apply_introspection(ticket, &response.text)
    }

    /// Executes a GraphQL request against the active endpoint.
    #[tracing::instrument(skip(self, transport, request), fields(endpoint = %self.endpoint))]
    pub async fn execute<T: GraphQLTransport>(
        &self,
        transport: &T,
        request: &GraphQLRequest,
    ) -> Result<ExecutionOutcome> {
        let body = serde_json::to_string(request)
            .map_err(|e| SessionError::InvalidRequest(e.to_string()))?;
        let TransportResponse {
            status,
            text,
            elapsed,
        } = transport.send(&self.endpoint, &self.headers, body).await?;
        if !(200..300).contains(&status) {
            return Err(SessionError::Http(status, text));
        }
        let response = GraphQLResponse::from_text(&text)?;
        tracing::debug!(
            status,
            elapsed_ms = elapsed.as_millis() as u64,
            errors = response.errors.len(),
            "Request completed"
        );
        Ok(ExecutionOutcome {
            response,
            status,
            elapsed,
        })
    }
}
