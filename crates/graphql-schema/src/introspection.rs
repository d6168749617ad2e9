//! Serde types for GraphQL introspection responses.
//!
//! These types mirror the JSON shape of the standard introspection query's
//! `__schema` object. They are a transport-level representation: all fields
//! that a server may omit are `Option`, and nothing is validated here.
//! [`crate::Schema::build`] is the validated parse step that either fully
//! succeeds or fails fast.

use serde::{Deserialize, Serialize};

/// The eight introspection type kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
    List,
    NonNull,
}

impl TypeKind {
    /// True for the two wrapper kinds (`LIST`, `NON_NULL`).
    #[must_use]
    pub const fn is_wrapper(self) -> bool {
        matches!(self, Self::List | Self::NonNull)
    }
}

/// The `__schema` object of an introspection response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionSchema {
    #[serde(default)]
    pub query_type: Option<IntrospectionRootType>,
    #[serde(default)]
    pub mutation_type: Option<IntrospectionRootType>,
    #[serde(default)]
    pub subscription_type: Option<IntrospectionRootType>,
    #[serde(default)]
    pub types: Option<Vec<IntrospectionType>>,
}

/// A root operation type reference (`queryType { name }` etc).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntrospectionRootType {
    pub name: String,
}

/// One entry of the `types` array.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionType {
    pub kind: TypeKind,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub fields: Option<Vec<IntrospectionField>>,
    #[serde(default)]
    pub input_fields: Option<Vec<IntrospectionInputValue>>,
    #[serde(default)]
    pub enum_values: Option<Vec<IntrospectionEnumValue>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionField {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub args: Vec<IntrospectionInputValue>,
    #[serde(rename = "type")]
    pub type_ref: IntrospectionTypeRef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionInputValue {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub type_ref: IntrospectionTypeRef,
    #[serde(default)]
    pub default_value: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionEnumValue {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A possibly wrapped type reference (`kind`/`name`/`ofType` chain).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionTypeRef {
    pub kind: TypeKind,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub of_type: Option<Box<IntrospectionTypeRef>>,
}
