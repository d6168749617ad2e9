//! Endpoint session plumbing for the GraphQL workbench.
//!
//! This crate owns what survives between keystrokes: the active endpoint,
//! its headers, the installed [`graphql_schema::Schema`], and the ordering
//! of schema loads. The HTTP transport itself is supplied by the embedding
//! application through [`GraphQLTransport`]; nothing here opens a socket.
//!
//! Schema loads are sequenced: each [`EndpointSession::begin_introspection`]
//! supersedes earlier requests, and a response is only installed while its
//! ticket is still the newest. A slow introspection response arriving after
//! a newer request, or after an endpoint switch, is silently discarded.
//!
//! # Examples
//!
//! ```
//! use graphql_session::{EndpointSession, SchemaUpdate};
//!
//! let mut session = EndpointSession::new("https://countries.example/graphql");
//! let ticket = session.begin_introspection();
//!
//! // The transport POSTs `EndpointSession::introspection_body()` and
//! // eventually completes with the response text:
//! let text = r#"{"data":{"__schema":{
//!     "queryType":{"name":"Query"},
//!     "types":[{"kind":"OBJECT","name":"Query","fields":[
//!         {"name":"hello","args":[],"type":{"kind":"SCALAR","name":"String"}}
//!     ]}]
//! }}}"#;
//!
//! let update = session.apply_introspection(ticket, text)?;
//! assert_eq!(update, SchemaUpdate::Installed);
//! assert!(session.schema().is_some());
//! # Ok::<(), graphql_session::SessionError>(())
//! ```

mod error;
mod request;
mod session;
mod transport;

pub use error::{Result, SessionError};
pub use request::{ErrorLocation, GraphQLRequest, GraphQLResponse, GraphQLResponseError};
pub use session::{EndpointSession, ExecutionOutcome, IntrospectionTicket, SchemaUpdate};
pub use transport::{GraphQLTransport, TransportResponse};
