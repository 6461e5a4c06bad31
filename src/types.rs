//! Raw reflection data handed to the metadata layer.
//!
//! This module contains the "model" structs and enums that the upstream
//! tokenizer/parser produces for each program element: its kind, raw
//! annotation list, namespace, source positions, and the flags that drive
//! documentation policy (`is_internal`, `is_tokenized`, `is_deprecated`).
//! All data is owned so nothing here depends on the parser's arena
//! lifetime.

use std::collections::HashMap;

/// Reserved annotation key under which the parser stores the doc comment's
/// parsed short-description text.
///
/// The NUL prefix keeps the marker out of the space of real tag names.
/// Marker keys are consumed by the description extractor and stripped from
/// the public annotation enumeration.
pub const SHORT_DESCRIPTION: &str = "\u{0}short";

/// Reserved annotation key for the doc comment's parsed long-description
/// text. See [`SHORT_DESCRIPTION`].
pub const LONG_DESCRIPTION: &str = "\u{0}long";

/// The kind of a reflected program construct.
///
/// `Extension` covers built-in extension entries (e.g. `spl`, `pcre`) that
/// internal definitions point back to; they are wrapped through the same
/// facade factory as everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Class,
    Function,
    Method,
    Property,
    Constant,
    Extension,
}

impl ElementKind {
    /// Whether elements of this kind can be declared inside a class.
    ///
    /// Methods, properties, and constants may have a declaring class;
    /// deprecation of that class propagates to them.
    pub fn can_belong_to_class(self) -> bool {
        matches!(
            self,
            ElementKind::Method | ElementKind::Property | ElementKind::Constant
        )
    }

    /// Whether a missing short description may be synthesized from a
    /// `@var` annotation (properties and constants only).
    pub(crate) fn has_var_fallback(self) -> bool {
        matches!(self, ElementKind::Property | ElementKind::Constant)
    }
}

/// One raw annotation value.
///
/// Most tags carry plain text (`@license MIT`); structured tags may carry
/// a tuple of parts (e.g. a name/description pair).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotationValue {
    Text(String),
    Tuple(Vec<String>),
}

impl AnnotationValue {
    /// The textual payload, or `None` for tuple values.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AnnotationValue::Text(text) => Some(text),
            AnnotationValue::Tuple(_) => None,
        }
    }
}

impl From<&str> for AnnotationValue {
    fn from(text: &str) -> Self {
        AnnotationValue::Text(text.to_string())
    }
}

impl From<String> for AnnotationValue {
    fn from(text: String) -> Self {
        AnnotationValue::Text(text)
    }
}

/// A raw annotation set as produced by the parser: ordered
/// `(name, values)` pairs, names cased as written in source.
///
/// Element-level sets may contain the two reserved description marker
/// keys; file-level sets are registered per path on the run context.
pub type RawAnnotations = Vec<(String, Vec<AnnotationValue>)>;

/// Raw reflection data for one program element.
///
/// Fully-qualified names are unique within one run. In-class elements
/// (methods, properties, class constants) use the `Owner::member`
/// convention, without a `$` prefix on property names — display prefixes
/// are the facade's job.
#[derive(Debug, Clone)]
pub struct ElementInfo {
    /// Fully-qualified name (e.g. "App\\User", "App\\User::save").
    pub name: String,
    pub kind: ElementKind,
    /// The raw doc comment text, if the element has one.
    pub doc_comment: Option<String>,
    /// Raw annotation list, including the description marker keys.
    pub annotations: RawAnnotations,
    /// Namespace name as written in source, if any.
    pub namespace: Option<String>,
    /// Use-statement aliases in scope at the declaration.
    pub namespace_aliases: HashMap<String, String>,
    /// Name of the extension a built-in definition belongs to.
    pub extension: Option<String>,
    /// Byte offset where the element's source starts.
    pub start_position: u32,
    /// Byte offset where the element's source ends.
    pub end_position: u32,
    /// Built-in/runtime definition with no parsed source backing.
    pub is_internal: bool,
    /// Source-backed: the parser tokenized an actual declaration.
    pub is_tokenized: bool,
    pub is_deprecated: bool,
    /// Fully-qualified name of the declaring class for in-class elements.
    pub declaring_class: Option<String>,
    /// Path of the enclosing source file, for file-level annotation lookup.
    pub file: Option<String>,
}

impl ElementInfo {
    /// A source-backed element with the given name and kind.
    ///
    /// Starts tokenized with everything else empty; callers fill in the
    /// fields the parser actually resolved.
    pub fn new(name: impl Into<String>, kind: ElementKind) -> Self {
        ElementInfo {
            name: name.into(),
            kind,
            doc_comment: None,
            annotations: Vec::new(),
            namespace: None,
            namespace_aliases: HashMap::new(),
            extension: None,
            start_position: 0,
            end_position: 0,
            is_internal: false,
            is_tokenized: true,
            is_deprecated: false,
            declaring_class: None,
            file: None,
        }
    }

    /// A built-in definition: internal, not source-backed.
    pub fn internal(name: impl Into<String>, kind: ElementKind) -> Self {
        let mut info = ElementInfo::new(name, kind);
        info.is_internal = true;
        info.is_tokenized = false;
        info
    }

    /// The facade entry for a built-in extension.
    pub(crate) fn extension(name: &str) -> Self {
        ElementInfo::internal(name, ElementKind::Extension)
    }
}
