//! Normalized, navigable schema model.
//!
//! [`Schema::build`] converts the raw `__schema` JSON of an introspection
//! response into an immutable aggregate holding the root operation type
//! names and the declared types in declaration order, with an O(1) lookup
//! by name. Construction either fully succeeds or fails with
//! [`SchemaError::MalformedIntrospection`]; a schema is never partially
//! populated, so a caller can keep its previous schema when a refresh fails.

use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;

use crate::introspection::{
    IntrospectionField, IntrospectionInputValue, IntrospectionSchema, IntrospectionType,
    IntrospectionTypeRef, TypeKind,
};
use crate::{Result, SchemaError};

/// The five built-in scalar type names.
///
/// These never get a [`NamedType`] entry: [`Schema::lookup`] returns `None`
/// for them and callers special-case them via [`is_built_in_scalar`].
pub const BUILT_IN_SCALARS: &[&str] = &["String", "Int", "Float", "Boolean", "ID"];

/// True iff `name` is one of `String`, `Int`, `Float`, `Boolean`, `ID`.
#[must_use]
pub fn is_built_in_scalar(name: &str) -> bool {
    BUILT_IN_SCALARS.contains(&name)
}

/// A reference to a GraphQL type with `LIST`/`NON_NULL` wrapping preserved.
///
/// The wrapper-vs-named invariant of introspection type refs (`ofType` is
/// present iff the kind is a wrapper) is encoded in the enum shape rather
/// than checked at every use site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    Named { kind: TypeKind, name: String },
    List(Box<TypeRef>),
    NonNull(Box<TypeRef>),
}

impl TypeRef {
    /// Renders the canonical GraphQL type signature.
    ///
    /// `LIST` wraps as `[inner]` and `NON_NULL` as `inner!`, terminating at
    /// the named type, e.g. `NON_NULL(LIST(NON_NULL(String)))` renders as
    /// `[String!]!`.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Named { name, .. } => name.clone(),
            Self::List(inner) => format!("[{}]", inner.render()),
            Self::NonNull(inner) => format!("{}!", inner.render()),
        }
    }

    /// Peels wrappers down to the innermost named type.
    #[must_use]
    pub fn base(&self) -> (TypeKind, &str) {
        match self {
            Self::Named { kind, name } => (*kind, name.as_str()),
            Self::List(inner) | Self::NonNull(inner) => inner.base(),
        }
    }

    /// Name of the innermost named type.
    #[must_use]
    pub fn base_name(&self) -> &str {
        self.base().1
    }

    fn from_introspection(raw: &IntrospectionTypeRef) -> Result<Self> {
        if raw.kind.is_wrapper() {
            let inner = raw.of_type.as_deref().ok_or_else(|| {
                SchemaError::MalformedIntrospection(format!(
                    "{:?} type ref without ofType",
                    raw.kind
                ))
            })?;
            let inner = Self::from_introspection(inner)?;
            return Ok(match raw.kind {
                TypeKind::List => Self::List(Box::new(inner)),
                _ => Self::NonNull(Box::new(inner)),
            });
        }
        let name = raw.name.clone().ok_or_else(|| {
            SchemaError::MalformedIntrospection(format!("{:?} type ref without a name", raw.kind))
        })?;
        Ok(Self::Named {
            kind: raw.kind,
            name,
        })
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

/// An argument declared by a [`Field`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub name: String,
    pub description: Option<String>,
    pub ty: TypeRef,
    /// Untyped default literal, exactly as the server reported it.
    pub default_value: Option<String>,
}

/// A field of an object, interface, or input object type.
///
/// Input fields are carried as argument-less `Field`s so selection walking
/// and documentation rendering treat all three kinds uniformly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub description: Option<String>,
    pub ty: TypeRef,
    pub args: Vec<Argument>,
}

impl Field {
    fn from_introspection(raw: IntrospectionField) -> Result<Self> {
        let ty = TypeRef::from_introspection(&raw.type_ref)?;
        let args = raw
            .args
            .into_iter()
            .map(Argument::from_introspection)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            name: raw.name,
            description: raw.description,
            ty,
            args,
        })
    }

    fn from_input_value(raw: IntrospectionInputValue) -> Result<Self> {
        Ok(Self {
            name: raw.name,
            description: raw.description,
            ty: TypeRef::from_introspection(&raw.type_ref)?,
            args: Vec::new(),
        })
    }
}

impl Argument {
    fn from_introspection(raw: IntrospectionInputValue) -> Result<Self> {
        Ok(Self {
            name: raw.name,
            description: raw.description,
            ty: TypeRef::from_introspection(&raw.type_ref)?,
            default_value: raw.default_value,
        })
    }
}

/// A value of an enum type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValue {
    pub name: String,
    pub description: Option<String>,
}

/// The full definition of one schema type name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedType {
    pub name: String,
    pub kind: TypeKind,
    pub description: Option<String>,
    /// Populated for OBJECT/INTERFACE/INPUT_OBJECT, empty otherwise.
    pub fields: Vec<Field>,
    /// Populated for ENUM, empty otherwise.
    pub enum_values: Vec<EnumValue>,
}

impl NamedType {
    /// Finds a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    fn from_introspection(raw: IntrospectionType) -> Result<Self> {
        if raw.kind.is_wrapper() {
            return Err(SchemaError::MalformedIntrospection(format!(
                "{:?} is not a valid kind for a schema type entry",
                raw.kind
            )));
        }
        let name = raw.name.ok_or_else(|| {
            SchemaError::MalformedIntrospection(format!("{:?} entry without a name", raw.kind))
        })?;

        let mut fields = Vec::new();
        for field in raw.fields.unwrap_or_default() {
            fields.push(Field::from_introspection(field)?);
        }
        for input in raw.input_fields.unwrap_or_default() {
            fields.push(Field::from_input_value(input)?);
        }
        let enum_values = raw
            .enum_values
            .unwrap_or_default()
            .into_iter()
            .map(|v| EnumValue {
                name: v.name,
                description: v.description,
            })
            .collect();

        Ok(Self {
            name,
            kind: raw.kind,
            description: raw.description,
            fields,
            enum_values,
        })
    }
}

/// The root aggregate: one endpoint's type system.
///
/// Immutable once built. Re-running introspection produces a fresh `Schema`
/// that replaces this one wholesale.
#[derive(Debug, Clone)]
pub struct Schema {
    query_type: String,
    mutation_type: Option<String>,
    subscription_type: Option<String>,
    /// Declaration order, as reported by the endpoint.
    types: Vec<NamedType>,
    index: HashMap<String, usize>,
}

impl Schema {
    /// Builds a schema from the `__schema` object of an introspection response.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::MalformedIntrospection`] when `queryType` or
    /// `types` is absent, an entry lacks a `kind` or `name`, a wrapper type
    /// ref lacks `ofType`, a type name is declared twice, or any referenced
    /// name resolves to neither a declared type nor a built-in scalar.
    pub fn build(value: &serde_json::Value) -> Result<Self> {
        let raw = IntrospectionSchema::deserialize(value)
            .map_err(|e| SchemaError::MalformedIntrospection(e.to_string()))?;
        Self::from_introspection(raw)
    }

    /// Builds a schema from an already deserialized introspection payload.
    pub fn from_introspection(raw: IntrospectionSchema) -> Result<Self> {
        let query_type = raw
            .query_type
            .map(|t| t.name)
            .ok_or_else(|| SchemaError::MalformedIntrospection("missing queryType".into()))?;
        let mutation_type = raw.mutation_type.map(|t| t.name);
        let subscription_type = raw.subscription_type.map(|t| t.name);
        let entries = raw
            .types
            .ok_or_else(|| SchemaError::MalformedIntrospection("missing types".into()))?;

        let mut types: Vec<NamedType> = Vec::with_capacity(entries.len());
        let mut index = HashMap::with_capacity(entries.len());
        for entry in entries {
            let named = NamedType::from_introspection(entry)?;
            // Built-in scalars never get an entry; lookup returns None for them.
            if is_built_in_scalar(&named.name) {
                continue;
            }
            if index.contains_key(&named.name) {
                return Err(SchemaError::MalformedIntrospection(format!(
                    "duplicate type name {}",
                    named.name
                )));
            }
            index.insert(named.name.clone(), types.len());
            types.push(named);
        }

        let schema = Self {
            query_type,
            mutation_type,
            subscription_type,
            types,
            index,
        };
        schema.check_references()?;
        tracing::debug!(types = schema.types.len(), "Schema built from introspection");
        Ok(schema)
    }

    /// Name of the query root type.
    #[must_use]
    pub fn query_type(&self) -> &str {
        &self.query_type
    }

    /// Name of the mutation root type, when the endpoint declares one.
    #[must_use]
    pub fn mutation_type(&self) -> Option<&str> {
        self.mutation_type.as_deref()
    }

    /// Name of the subscription root type, when the endpoint declares one.
    #[must_use]
    pub fn subscription_type(&self) -> Option<&str> {
        self.subscription_type.as_deref()
    }

    /// O(1) lookup by type name.
    ///
    /// Returns `None` for unknown names and for the five built-in scalars.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&NamedType> {
        self.index.get(name).map(|&i| &self.types[i])
    }

    /// All user-defined types in declaration order.
    ///
    /// Excludes `__`-prefixed introspection types, built-in scalars, and the
    /// root operation types. Backs the "browse all types" list.
    pub fn user_defined_types(&self) -> impl Iterator<Item = &NamedType> {
        let roots = [
            Some(self.query_type.as_str()),
            self.mutation_type.as_deref(),
            self.subscription_type.as_deref(),
        ];
        self.types
            .iter()
            .filter(move |t| !t.name.starts_with("__") && !roots.contains(&Some(t.name.as_str())))
    }

    /// Every name the schema refers to must resolve to a declared type or a
    /// built-in scalar; dangling references reject the whole payload.
    fn check_references(&self) -> Result<()> {
        self.require_declared(&self.query_type, "queryType")?;
        if let Some(name) = self.mutation_type.as_deref() {
            self.require_declared(name, "mutationType")?;
        }
        if let Some(name) = self.subscription_type.as_deref() {
            self.require_declared(name, "subscriptionType")?;
        }
        for ty in &self.types {
            for field in &ty.fields {
                self.require_resolvable(field.ty.base_name(), &ty.name)?;
                for arg in &field.args {
                    self.require_resolvable(arg.ty.base_name(), &ty.name)?;
                }
            }
        }
        Ok(())
    }

    fn require_declared(&self, name: &str, role: &str) -> Result<()> {
        if self.index.contains_key(name) {
            Ok(())
        } else {
            Err(SchemaError::MalformedIntrospection(format!(
                "{role} refers to undeclared type {name}"
            )))
        }
    }

    fn require_resolvable(&self, name: &str, owner: &str) -> Result<()> {
        if is_built_in_scalar(name) || self.index.contains_key(name) {
            Ok(())
        } else {
            Err(SchemaError::MalformedIntrospection(format!(
                "{owner} references unknown type {name}"
            )))
        }
    }
}
