//! End-to-end resolver tests against the shared fixtures.

use graphql_completion::{apply_suggestion, resolve, SuggestionItem, SuggestionKind};
use graphql_test_utils::{blog_schema, country_schema, extract_cursor};

fn labels(items: &[SuggestionItem]) -> Vec<&str> {
    items.iter().map(|i| i.label.as_str()).collect()
}

fn find<'a>(items: &'a [SuggestionItem], label: &str) -> &'a SuggestionItem {
    items
        .iter()
        .find(|i| i.label == label)
        .unwrap_or_else(|| panic!("missing suggestion {label}"))
}

#[test]
fn empty_document_offers_declared_operations_only() {
    let schema = country_schema();
    let suggestions = resolve("", 0, Some(&schema));
    assert_eq!(labels(&suggestions), vec!["query"]);
    assert_eq!(suggestions[0].kind, SuggestionKind::Keyword);
    assert_eq!(suggestions[0].insert_text, "query {\n  ");

    let schema = blog_schema();
    let suggestions = resolve("", 0, Some(&schema));
    assert_eq!(labels(&suggestions), vec!["query", "mutation", "subscription"]);
}

#[test]
fn keyword_prefix_match_is_case_insensitive() {
    let schema = blog_schema();
    let (text, offset) = extract_cursor("m*");
    assert_eq!(labels(&resolve(&text, offset, Some(&schema))), vec!["mutation"]);

    let (text, offset) = extract_cursor("SUB*");
    assert_eq!(
        labels(&resolve(&text, offset, Some(&schema))),
        vec!["subscription"]
    );
}

#[test]
fn undeclared_operations_are_not_offered() {
    let schema = country_schema();
    let (text, offset) = extract_cursor("m*");
    assert!(resolve(&text, offset, Some(&schema)).is_empty());
}

#[test]
fn depth_one_fields_rank_prefix_before_substring() {
    let schema = country_schema();
    let (text, offset) = extract_cursor("query {\n  c*");
    // "countries"/"country" match as a prefix, "search" only as a substring.
    assert_eq!(
        labels(&resolve(&text, offset, Some(&schema))),
        vec!["countries", "country", "search"]
    );
}

#[test]
fn equal_specificity_matches_sort_lexicographically() {
    let schema = country_schema();
    let (text, offset) = extract_cursor("query {\n  coun*");
    assert_eq!(
        labels(&resolve(&text, offset, Some(&schema))),
        vec!["countries", "country"]
    );
}

#[test]
fn suggestions_appear_directly_after_opening_brace() {
    let schema = country_schema();
    let (text, offset) = extract_cursor("query { *");
    assert_eq!(
        labels(&resolve(&text, offset, Some(&schema))),
        vec!["countries", "country", "featured", "search"]
    );
}

#[test]
fn nested_path_resolves_inner_scope_type() {
    let schema = country_schema();
    let (text, offset) = extract_cursor("query {\n  countries {\n    cap*");
    let suggestions = resolve(&text, offset, Some(&schema));
    assert_eq!(labels(&suggestions), vec!["capital"]);
    assert_eq!(suggestions[0].detail.as_deref(), Some("String"));
    assert_eq!(
        suggestions[0].documentation.as_deref(),
        Some("The capital city, when one exists")
    );
}

#[test]
fn doubly_nested_path_resolves_through_wrappers() {
    let schema = country_schema();
    let (text, offset) = extract_cursor("query {\n  countries {\n    continent {\n      *");
    assert_eq!(
        labels(&resolve(&text, offset, Some(&schema))),
        vec!["code", "name"]
    );
}

#[test]
fn closed_sibling_selection_does_not_shift_scope() {
    let schema = country_schema();
    let (text, offset) =
        extract_cursor("query {\n  countries { name }\n  country(code: \"DE\") {\n    na*");
    assert_eq!(labels(&resolve(&text, offset, Some(&schema))), vec!["name"]);
}

#[test]
fn insert_text_reflects_arguments_and_selectability() {
    let schema = country_schema();
    let (text, offset) = extract_cursor("query {\n  *");
    let suggestions = resolve(&text, offset, Some(&schema));

    // Declares arguments: always `(`, even though Country is selectable.
    assert_eq!(find(&suggestions, "country").insert_text, "country(");
    assert_eq!(find(&suggestions, "search").insert_text, "search(");
    // Argument-less and selectable: opens a selection set.
    assert_eq!(find(&suggestions, "countries").insert_text, "countries {");
    assert_eq!(find(&suggestions, "featured").insert_text, "featured {");

    let (text, offset) = extract_cursor("query {\n  countries {\n    *");
    let suggestions = resolve(&text, offset, Some(&schema));
    // Argument-less scalar: bare name.
    assert_eq!(find(&suggestions, "capital").insert_text, "capital");
    assert_eq!(find(&suggestions, "continent").insert_text, "continent {");
}

#[test]
fn enum_typed_field_inserts_bare_name() {
    let schema = blog_schema();
    let (text, offset) = extract_cursor("query {\n  posts {\n    sta*");
    let suggestions = resolve(&text, offset, Some(&schema));
    assert_eq!(find(&suggestions, "status").insert_text, "status");
}

#[test]
fn mutation_document_scopes_to_mutation_root() {
    let schema = blog_schema();
    let (text, offset) = extract_cursor("mutation {\n  *");
    let suggestions = resolve(&text, offset, Some(&schema));
    assert_eq!(labels(&suggestions), vec!["createPost", "ping"]);
    assert_eq!(find(&suggestions, "createPost").insert_text, "createPost(");
    assert_eq!(find(&suggestions, "createPost").detail.as_deref(), Some("Post"));
}

#[test]
fn mutation_document_without_mutation_root_suggests_nothing() {
    let schema = country_schema();
    let (text, offset) = extract_cursor("mutation {\n  *");
    assert!(resolve(&text, offset, Some(&schema)).is_empty());
}

#[test]
fn selecting_into_a_scalar_suggests_nothing() {
    let schema = country_schema();
    let (text, offset) = extract_cursor("query {\n  countries {\n    capital {\n      *");
    assert!(resolve(&text, offset, Some(&schema)).is_empty());
}

#[test]
fn unknown_field_hop_suggests_nothing() {
    let schema = country_schema();
    let (text, offset) = extract_cursor("query {\n  nope {\n    *");
    assert!(resolve(&text, offset, Some(&schema)).is_empty());
}

#[test]
fn no_schema_is_always_empty_and_never_panics() {
    assert!(resolve("", 0, None).is_empty());
    assert!(resolve("query {\n  coun", 12, None).is_empty());
    assert!(resolve("}}}((", 999, None).is_empty());
}

#[test]
fn cursor_inside_argument_list_suppresses_field_suggestions() {
    let schema = country_schema();
    let (text, offset) = extract_cursor("query {\n  country(*");
    assert!(resolve(&text, offset, Some(&schema)).is_empty());

    let (text, offset) = extract_cursor("query {\n  country(code: *");
    assert!(resolve(&text, offset, Some(&schema)).is_empty());

    // Once the argument list closes, field suggestions come back.
    let (text, offset) = extract_cursor("query {\n  country(code: \"DE\") {\n    *");
    assert_eq!(
        labels(&resolve(&text, offset, Some(&schema))),
        vec!["capital", "code", "continent", "name"]
    );
}

#[test]
fn offsets_are_utf16_code_units() {
    let schema = country_schema();
    let (text, offset) = extract_cursor("# 🚀 rocket dataset\nquery {\n  coun*");
    assert_eq!(
        labels(&resolve(&text, offset, Some(&schema))),
        vec!["countries", "country"]
    );
}

#[test]
fn accepting_a_suggestion_replaces_the_partial_word() {
    let schema = country_schema();
    let (text, offset) = extract_cursor("query {\n  coun*");
    let suggestions = resolve(&text, offset, Some(&schema));
    let applied = apply_suggestion(&text, offset, &suggestions[0]);
    assert_eq!(applied.text, "query {\n  countries {");
    assert_eq!(applied.cursor, 21);

    // Resolving at the new cursor lands in the countries selection set.
    let next = resolve(&applied.text, applied.cursor, Some(&schema));
    assert_eq!(labels(&next), vec!["capital", "code", "continent", "name"]);
}
