//! Short / long description extraction.
//!
//! The parser stores the doc comment's prose under two reserved marker
//! keys in the raw annotation list (see [`crate::types::SHORT_DESCRIPTION`]).
//! The extractor reads those markers and, for properties and constants
//! with no explicit prose, synthesizes a short description from the
//! trailing text of the `@var` tag.

use crate::element::AnnotationStore;
use crate::types::{AnnotationValue, ElementInfo, LONG_DESCRIPTION, SHORT_DESCRIPTION};

/// The element's short description.
///
/// Prefers the explicit short-description marker; otherwise, for
/// properties and constants, falls back to the description half of the
/// first `@var` value. Empty when neither yields text.
pub(crate) fn short_description(info: &ElementInfo, store: &AnnotationStore) -> String {
    if let Some(short) = marker_text(info, SHORT_DESCRIPTION)
        && !short.is_empty()
    {
        return short.to_string();
    }

    if info.kind.has_var_fallback()
        && let Some(var) = store.get("var").first()
        && let Some(text) = var.as_text()
    {
        return split_var_description(text).to_string();
    }

    String::new()
}

/// The element's long description: the short description, with the
/// long-description marker text appended after a blank line when present.
pub(crate) fn long_description(info: &ElementInfo, store: &AnnotationStore) -> String {
    let mut description = short_description(info, store);

    if let Some(long) = marker_text(info, LONG_DESCRIPTION)
        && !long.is_empty()
    {
        description.push_str("\n\n");
        description.push_str(long);
    }

    description
}

/// Look up a description marker in the element's raw annotation list.
///
/// Markers are read from the raw list because the merged store strips
/// them on build.
fn marker_text<'a>(info: &'a ElementInfo, marker: &str) -> Option<&'a str> {
    info.annotations
        .iter()
        .find(|(name, _)| name == marker)
        .and_then(|(_, values)| values.first())
        .and_then(AnnotationValue::as_text)
}

/// Split a `@var` value on its first run of whitespace, discarding the
/// type token and keeping the remainder.
///
/// `"int The counter value"` → `"The counter value"`; a value with no
/// trailing text (just a type) yields `""`.
fn split_var_description(value: &str) -> &str {
    match value.find(char::is_whitespace) {
        Some(idx) => value[idx..].trim_start(),
        None => "",
    }
}
