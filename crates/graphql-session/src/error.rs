use graphql_schema::SchemaError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SessionError>;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("HTTP error {0}: {1}")]
    Http(u16, String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Malformed GraphQL response: {0}")]
    MalformedResponse(String),

    #[error(transparent)]
    Schema(#[from] SchemaError),
}
