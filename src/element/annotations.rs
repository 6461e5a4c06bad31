//! Element annotation storage.
//!
//! An [`AnnotationStore`] is the merged, normalized view of one element's
//! documentation tags: every key lower-cased, the parsed-description
//! marker keys stripped, and the recognized file-scope tags copied in
//! from the enclosing file at lower precedence. Stores are built lazily
//! by the facade and then mutated only by programmatic appends (the
//! synthetic-annotation pass), never rebuilt.

use indexmap::IndexMap;

use crate::types::{
    AnnotationValue, ElementInfo, ElementKind, LONG_DESCRIPTION, RawAnnotations, SHORT_DESCRIPTION,
};

/// File-scope tags inherited by file-scoped elements. Any other
/// file-level tag is ignored by the merge.
const FILE_LEVEL_TAGS: &[&str] = &["package", "subpackage", "author", "license", "copyright"];

/// Per-element mapping from lower-cased annotation name to the ordered
/// list of raw values for that tag.
///
/// Enumeration order is insertion order: the element's own tags first
/// (as written in source), then any merged file-level tags.
#[derive(Debug, Clone, Default)]
pub struct AnnotationStore {
    entries: IndexMap<String, Vec<AnnotationValue>>,
}

impl AnnotationStore {
    /// The values stored for `name` (case-insensitive), empty if absent.
    pub fn get(&self, name: &str) -> &[AnnotationValue] {
        self.entries
            .get(&name.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether `name` has at least one stored value.
    pub fn has(&self, name: &str) -> bool {
        !self.get(name).is_empty()
    }

    /// Append `value` to the ordered sequence for `name`, creating the
    /// key if absent. Existing values are never replaced.
    pub fn append(&mut self, name: &str, value: AnnotationValue) {
        self.entries
            .entry(name.to_lowercase())
            .or_default()
            .push(value);
    }

    /// Iterate tags in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[AnnotationValue])> {
        self.entries
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Number of distinct tags.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Build the merged annotation store for one element.
///
/// Lower-cases every tag name (appending on case collisions so no value
/// list is lost), strips the description marker keys, skips tags with no
/// values, then merges recognized file-level tags for file-scoped
/// elements — only where the element has no non-empty value of its own.
pub(crate) fn build_store(
    info: &ElementInfo,
    file_annotations: Option<&RawAnnotations>,
) -> AnnotationStore {
    let mut store = AnnotationStore::default();

    for (name, values) in &info.annotations {
        if name == SHORT_DESCRIPTION || name == LONG_DESCRIPTION {
            continue;
        }
        for value in values {
            store.append(name, value.clone());
        }
    }

    if merges_file_annotations(info)
        && let Some(file_annotations) = file_annotations
    {
        for (name, values) in file_annotations {
            let Some(tag) = FILE_LEVEL_TAGS
                .iter()
                .find(|tag| name.eq_ignore_ascii_case(tag))
            else {
                continue;
            };
            if store.has(tag) {
                continue;
            }
            for value in values {
                store.append(tag, value.clone());
            }
        }
    }

    tracing::trace!("built annotation store for {} ({} tags)", info.name, store.len());
    store
}

/// Whether this element inherits file-level tags: classes, free
/// functions, and constants not declared inside a class.
fn merges_file_annotations(info: &ElementInfo) -> bool {
    match info.kind {
        ElementKind::Class | ElementKind::Function => true,
        ElementKind::Constant => info.declaring_class.is_none(),
        _ => false,
    }
}
