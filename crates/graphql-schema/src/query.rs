//! The introspection query document sent to GraphQL endpoints.

/// Standard GraphQL introspection query.
///
/// Fetches the root operation types plus every type definition with its
/// fields, arguments, input fields, and enum values. Type references are
/// requested 7 levels deep to handle wrappers like `[[[String!]!]!]`.
pub const INTROSPECTION_QUERY: &str = r"
query IntrospectionQuery {
  __schema {
    queryType { name }
    mutationType { name }
    subscriptionType { name }
    types {
      ...FullType
    }
  }
}

fragment FullType on __Type {
  kind
  name
  description
  fields {
    name
    description
    args {
      ...InputValue
    }
    type {
      ...TypeRef
    }
  }
  inputFields {
    ...InputValue
  }
  enumValues {
    name
    description
  }
}

fragment InputValue on __InputValue {
  name
  description
  type {
    ...TypeRef
  }
  defaultValue
}

fragment TypeRef on __Type {
  kind
  name
  ofType {
    kind
    name
    ofType {
      kind
      name
      ofType {
        kind
        name
        ofType {
          kind
          name
          ofType {
            kind
            name
            ofType {
              kind
              name
              ofType {
                kind
                name
              }
            }
          }
        }
      }
    }
  }
}
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_introspection_query_shape() {
        assert!(INTROSPECTION_QUERY.contains("IntrospectionQuery"));
        assert!(INTROSPECTION_QUERY.contains("__schema"));
        assert!(INTROSPECTION_QUERY.contains("queryType { name }"));
        assert!(INTROSPECTION_QUERY.contains("inputFields"));
        assert!(INTROSPECTION_QUERY.contains("enumValues"));
    }
}
