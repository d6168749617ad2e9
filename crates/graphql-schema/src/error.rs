use thiserror::Error;

pub type Result<T> = std::result::Result<T, SchemaError>;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Malformed introspection response: {0}")]
    MalformedIntrospection(String),
}
