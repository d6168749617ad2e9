//! Shared introspection fixtures.
//!
//! These are the `__schema` JSON payloads the workbench crates test against.
//! Use the shared fixtures when the exact schema shape doesn't matter to the
//! test; prefer inline payloads when seeing the schema is what makes the
//! test readable.

use graphql_schema::Schema;
use serde_json::{json, Value};

/// Introspection payload for the country dataset schema:
///
/// ```graphql
/// type Query {
///     countries: [Country!]!
///     country(code: String!): Country
///     featured: SearchResult
///     search(term: String!): [SearchResult!]
/// }
///
/// type Country {
///     code: ID!
///     name: String!
///     capital: String
///     continent: Continent!
/// }
///
/// type Continent {
///     code: ID!
///     name: String!
/// }
///
/// union SearchResult = Country | Continent
/// ```
#[must_use]
pub fn country_introspection() -> Value {
    json!({
        "queryType": { "name": "Query" },
        "mutationType": null,
        "subscriptionType": null,
        "types": [
            {
                "kind": "OBJECT",
                "name": "Query",
                "fields": [
                    {
                        "name": "countries",
                        "description": "Every country in the dataset",
                        "args": [],
                        "type": {
                            "kind": "NON_NULL",
                            "ofType": {
                                "kind": "LIST",
                                "ofType": {
                                    "kind": "NON_NULL",
                                    "ofType": { "kind": "OBJECT", "name": "Country" }
                                }
                            }
                        }
                    },
                    {
                        "name": "country",
                        "description": "Look a country up by its ISO code",
                        "args": [
                            {
                                "name": "code",
                                "type": {
                                    "kind": "NON_NULL",
                                    "ofType": { "kind": "SCALAR", "name": "String" }
                                }
                            }
                        ],
                        "type": { "kind": "OBJECT", "name": "Country" }
                    },
                    {
                        "name": "featured",
                        "args": [],
                        "type": { "kind": "UNION", "name": "SearchResult" }
                    },
                    {
                        "name": "search",
                        "args": [
                            {
                                "name": "term",
                                "type": {
                                    "kind": "NON_NULL",
                                    "ofType": { "kind": "SCALAR", "name": "String" }
                                }
                            }
                        ],
                        "type": {
                            "kind": "LIST",
                            "ofType": {
                                "kind": "NON_NULL",
                                "ofType": { "kind": "UNION", "name": "SearchResult" }
                            }
                        }
                    }
                ]
            },
            {
                "kind": "OBJECT",
                "name": "Country",
                "description": "A country in the dataset",
                "fields": [
                    {
                        "name": "code",
                        "args": [],
                        "type": {
                            "kind": "NON_NULL",
                            "ofType": { "kind": "SCALAR", "name": "ID" }
                        }
                    },
                    {
                        "name": "name",
                        "args": [],
                        "type": {
                            "kind": "NON_NULL",
                            "ofType": { "kind": "SCALAR", "name": "String" }
                        }
                    },
                    {
                        "name": "capital",
                        "description": "The capital city, when one exists",
                        "args": [],
                        "type": { "kind": "SCALAR", "name": "String" }
                    },
                    {
                        "name": "continent",
                        "args": [],
                        "type": {
                            "kind": "NON_NULL",
                            "ofType": { "kind": "OBJECT", "name": "Continent" }
                        }
                    }
                ]
            },
            {
                "kind": "OBJECT",
                "name": "Continent",
                "fields": [
                    {
                        "name": "code",
                        "args": [],
                        "type": {
                            "kind": "NON_NULL",
                            "ofType": { "kind": "SCALAR", "name": "ID" }
                        }
                    },
                    {
                        "name": "name",
                        "args": [],
                        "type": {
                            "kind": "NON_NULL",
                            "ofType": { "kind": "SCALAR", "name": "String" }
                        }
                    }
                ]
            },
            { "kind": "UNION", "name": "SearchResult" },
            { "kind": "SCALAR", "name": "String" },
            { "kind": "SCALAR", "name": "ID" }
        ]
    })
}

/// The country fixture, built into a [`Schema`].
#[must_use]
pub fn country_schema() -> Schema {
    Schema::build(&country_introspection()).expect("country fixture must build")
}

/// Introspection payload for a blog schema declaring all three root
/// operation types, used by keyword and mutation-scope tests.
#[must_use]
pub fn blog_introspection() -> Value {
    json!({
        "queryType": { "name": "Query" },
        "mutationType": { "name": "Mutation" },
        "subscriptionType": { "name": "Subscription" },
        "types": [
            {
                "kind": "OBJECT",
                "name": "Query",
                "fields": [
                    {
                        "name": "posts",
                        "args": [],
                        "type": {
                            "kind": "NON_NULL",
                            "ofType": {
                                "kind": "LIST",
                                "ofType": { "kind": "OBJECT", "name": "Post" }
                            }
                        }
                    }
                ]
            },
            {
                "kind": "OBJECT",
                "name": "Mutation",
                "fields": [
                    {
                        "name": "createPost",
                        "args": [
                            {
                                "name": "title",
                                "type": {
                                    "kind": "NON_NULL",
                                    "ofType": { "kind": "SCALAR", "name": "String" }
                                }
                            }
                        ],
                        "type": { "kind": "OBJECT", "name": "Post" }
                    },
                    {
                        "name": "ping",
                        "args": [],
                        "type": { "kind": "SCALAR", "name": "String" }
                    }
                ]
            },
            {
                "kind": "OBJECT",
                "name": "Subscription",
                "fields": [
                    {
                        "name": "postAdded",
                        "args": [],
                        "type": { "kind": "OBJECT", "name": "Post" }
                    }
                ]
            },
            {
                "kind": "OBJECT",
                "name": "Post",
                "fields": [
                    {
                        "name": "id",
                        "args": [],
                        "type": {
                            "kind": "NON_NULL",
                            "ofType": { "kind": "SCALAR", "name": "ID" }
                        }
                    },
                    {
                        "name": "title",
                        "args": [],
                        "type": {
                            "kind": "NON_NULL",
                            "ofType": { "kind": "SCALAR", "name": "String" }
                        }
                    },
                    {
                        "name": "status",
                        "args": [],
                        "type": { "kind": "ENUM", "name": "PostStatus" }
                    }
                ]
            },
            {
                "kind": "ENUM",
                "name": "PostStatus",
                "enumValues": [
                    { "name": "DRAFT" },
                    { "name": "PUBLISHED" }
                ]
            }
        ]
    })
}

/// The blog fixture, built into a [`Schema`].
#[must_use]
pub fn blog_schema() -> Schema {
    Schema::build(&blog_introspection()).expect("blog fixture must build")
}

/// Wraps a `__schema` payload in the full HTTP response envelope
/// (`{"data": {"__schema": ...}}`) the way an endpoint returns it.
#[must_use]
pub fn response_envelope(schema: Value) -> Value {
    json!({ "data": { "__schema": schema } })
}
