//! Suggestion generation for a resolved cursor context.

use graphql_schema::{NamedType, Schema, TypeKind};

use crate::context::{CursorContext, OperationKind};
use crate::types::{SuggestionItem, SuggestionKind};

/// Returns ranked completion suggestions for the token being typed.
///
/// Pure function of its three inputs: safe to call on every keystroke with
/// no mutation of the schema and no hidden state.
///
/// All failure modes degrade to an empty vector rather than an error,
/// because autocomplete must never interrupt typing: no schema loaded, a
/// cursor inside an argument list, an unresolvable selection path, or a
/// field path leading into a scalar.
#[must_use]
pub fn resolve(text: &str, offset: usize, schema: Option<&Schema>) -> Vec<SuggestionItem> {
    let Some(schema) = schema else {
        return Vec::new();
    };
    match CursorContext::at(text, offset) {
        CursorContext::Root { partial } => keyword_suggestions(schema, partial),
        CursorContext::ArgumentList | CursorContext::Unresolved => Vec::new(),
        CursorContext::Selection {
            operation,
            path,
            partial,
        } => match resolve_scope(schema, operation, &path) {
            Some(scope) => field_suggestions(scope, partial),
            None => Vec::new(),
        },
    }
}

/// Walks the field path from the operation's root type to the scope type of
/// the innermost enclosing selection set.
///
/// Each hop looks the field up on the current type, peels LIST/NON_NULL
/// wrappers, and dereferences the named type through the schema. Any miss
/// (unknown field, a hop into a scalar or enum, an undeclared root type)
/// resolves to `None`.
fn resolve_scope<'a>(
    schema: &'a Schema,
    operation: OperationKind,
    path: &[&str],
) -> Option<&'a NamedType> {
    let base = match operation {
        OperationKind::Query => schema.query_type(),
        OperationKind::Mutation => schema.mutation_type()?,
        OperationKind::Subscription => schema.subscription_type()?,
    };
    let mut current = schema.lookup(base)?;
    for hop in path {
        let field = current.field(hop)?;
        current = schema.lookup(field.ty.base_name())?;
    }
    Some(current)
}

/// Operation keywords matching the trimmed line as a case-insensitive
/// prefix. `mutation`/`subscription` are offered only when the schema
/// declares that root type.
fn keyword_suggestions(schema: &Schema, partial: &str) -> Vec<SuggestionItem> {
    let needle = partial.to_ascii_lowercase();
    let mut keywords = vec!["query"];
    if schema.mutation_type().is_some() {
        keywords.push("mutation");
    }
    if schema.subscription_type().is_some() {
        keywords.push("subscription");
    }
    keywords
        .into_iter()
        .filter(|kw| kw.starts_with(needle.as_str()))
        .map(|kw| {
            SuggestionItem::new(kw, SuggestionKind::Keyword)
                .with_insert_text(format!("{kw} {{\n  "))
        })
        .collect()
}

/// Fields of the scope type whose name contains the partial token
/// (case-insensitive). Prefix matches rank before substring-only matches;
/// ties break lexicographically by label.
fn field_suggestions(scope: &NamedType, partial: &str) -> Vec<SuggestionItem> {
    let needle = partial.to_ascii_lowercase();
    let mut matches: Vec<(bool, SuggestionItem)> = scope
        .fields
        .iter()
        .filter_map(|field| {
            let lower = field.name.to_ascii_lowercase();
            if !lower.contains(needle.as_str()) {
                return None;
            }

            let insert_text = if field.args.is_empty() {
                let (kind, _) = field.ty.base();
                match kind {
                    TypeKind::Object | TypeKind::Interface | TypeKind::Union => {
                        format!("{} {{", field.name)
                    }
                    _ => field.name.clone(),
                }
            } else {
                format!("{}(", field.name)
            };

            let mut item = SuggestionItem::new(field.name.clone(), SuggestionKind::Field)
                .with_insert_text(insert_text)
                .with_detail(field.ty.render());
            if let Some(doc) = &field.description {
                item = item.with_documentation(doc.clone());
            }
            Some((lower.starts_with(needle.as_str()), item))
        })
        .collect();

    matches.sort_by(|(a_prefix, a), (b_prefix, b)| {
        b_prefix
            .cmp(a_prefix)
            .then_with(|| a.label.cmp(&b.label))
    });
    matches.into_iter().map(|(_, item)| item).collect()
}
