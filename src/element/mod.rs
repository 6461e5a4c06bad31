//! The element facade.
//!
//! An [`Element`] wraps the raw reflection data for one program construct
//! and exposes the normalized query surface the renderer consumes:
//! documentation flags (`is_documented`, `is_deprecated`, `is_main`),
//! namespace identity, the merged annotation store, and short/long
//! descriptions. Derived values are computed lazily and cached for the
//! facade's lifetime; methods that need configured or cross-element data
//! take the owning [`Project`] by reference.
//!
//! # Submodules
//!
//! - [`annotations`]: the merged per-element annotation store and the
//!   file-level tag merge.
//! - [`description`]: short/long description extraction with the `@var`
//!   fallback.

mod annotations;
mod description;

pub use annotations::AnnotationStore;

use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;

use crate::Project;
use crate::types::{AnnotationValue, ElementInfo, ElementKind};

/// Pseudo-namespace reported for built-in definitions.
const INTERNAL_PSEUDO_NAMESPACE: &str = "PHP";

/// Pseudo-namespace reported for elements outside any namespace.
const GLOBAL_PSEUDO_NAMESPACE: &str = "None";

/// One reflected program construct, wrapped for the renderer.
///
/// Facades are created through [`Project::add`], which guarantees one
/// facade per fully-qualified name — so the caches below are never
/// duplicated for the same element.
#[derive(Debug)]
pub struct Element {
    info: ElementInfo,
    /// Lazily-built annotation store. `None` = not yet built; a built
    /// store stays for the facade's lifetime and is only ever appended to.
    annotations: RwLock<Option<AnnotationStore>>,
    /// Memoized documented flag.
    is_documented: OnceLock<bool>,
}

impl Element {
    pub(crate) fn new(info: ElementInfo) -> Self {
        Element {
            info,
            annotations: RwLock::new(None),
            is_documented: OnceLock::new(),
        }
    }

    // ─── Identity ───────────────────────────────────────────────────────

    /// Fully-qualified name, unique within one run.
    pub fn name(&self) -> &str {
        &self.info.name
    }

    pub fn kind(&self) -> ElementKind {
        self.info.kind
    }

    /// The name without its namespace (and, for class members, without
    /// the owning class prefix).
    pub fn short_name(&self) -> &str {
        let name = self.info.name.rsplit("::").next().unwrap_or(&self.info.name);
        name.rsplit('\\').next().unwrap_or(name)
    }

    /// Renderer-facing display name: functions and methods get call
    /// parentheses, properties get their `$` prefix back.
    pub fn pretty_name(&self) -> String {
        match self.info.kind {
            ElementKind::Function | ElementKind::Method => format!("{}()", self.info.name),
            ElementKind::Property => match self.info.name.rsplit_once("::") {
                Some((owner, property)) => format!("{}::${}", owner, property),
                None => format!("${}", self.info.name),
            },
            _ => self.info.name.clone(),
        }
    }

    /// Path of the enclosing source file, if the element came from one.
    pub fn file_name(&self) -> Option<&str> {
        self.info.file.as_deref()
    }

    // ─── Documentation flags ────────────────────────────────────────────

    /// Whether this element appears in the generated documentation.
    ///
    /// Computed once and memoized. An element with no usable source
    /// representation (neither tokenized nor internal) is never
    /// documented. Otherwise it is documented unless suppressed, checked
    /// in this order: internal definitions are excluded outright (the
    /// `internal_documented` setting cannot override that); an
    /// `@internal` annotation excludes unless the setting opts in; an
    /// `@ignore` annotation always excludes.
    pub fn is_documented(&self, project: &Project) -> bool {
        *self.is_documented.get_or_init(|| {
            let mut documented = self.info.is_tokenized || self.info.is_internal;

            if documented {
                let internal = project.config().internal_documented;

                if self.info.is_internal {
                    documented = false;
                } else if !internal && self.has_raw_annotation("internal") {
                    documented = false;
                } else if self.has_raw_annotation("ignore") {
                    documented = false;
                }
            }

            documented
        })
    }

    /// Whether the element is deprecated, either by its own flag or by
    /// its declaring class.
    pub fn is_deprecated(&self, project: &Project) -> bool {
        if self.info.is_deprecated {
            return true;
        }

        if self.info.kind.can_belong_to_class()
            && let Some(class) = self.declaring_class(project)
        {
            return class.is_deprecated(project);
        }

        false
    }

    /// Whether the element belongs to the configured main project.
    ///
    /// True when no main prefix is configured, or when the
    /// fully-qualified name starts with it (case-sensitive).
    pub fn is_main(&self, project: &Project) -> bool {
        match project.config().main_prefix() {
            Some(main) => self.info.name.starts_with(main),
            None => true,
        }
    }

    /// Built-in/runtime definition with no parsed source backing.
    pub fn is_internal(&self) -> bool {
        self.info.is_internal
    }

    /// Source-backed: the parser tokenized an actual declaration.
    pub fn is_tokenized(&self) -> bool {
        self.info.is_tokenized
    }

    // ─── Namespaces ─────────────────────────────────────────────────────

    /// The element's namespace in canonical display casing, or an empty
    /// string when the element has none.
    pub fn namespace_name(&self, project: &Project) -> String {
        match self.info.namespace.as_deref() {
            Some(namespace) if !namespace.is_empty() => {
                project.namespaces().canonicalize(namespace)
            }
            _ => String::new(),
        }
    }

    /// Namespace for grouping in rendered output: built-ins report the
    /// fixed internal sentinel, elements with no namespace the global
    /// one.
    pub fn pseudo_namespace_name(&self, project: &Project) -> String {
        if self.info.is_internal {
            return INTERNAL_PSEUDO_NAMESPACE.to_string();
        }
        let namespace = self.namespace_name(project);
        if namespace.is_empty() {
            GLOBAL_PSEUDO_NAMESPACE.to_string()
        } else {
            namespace
        }
    }

    /// Use-statement aliases in scope at the declaration.
    pub fn namespace_aliases(&self) -> &std::collections::HashMap<String, String> {
        &self.info.namespace_aliases
    }

    // ─── Annotations ────────────────────────────────────────────────────

    /// The merged annotation store, built on first access and cached for
    /// the facade's lifetime.
    pub fn annotations(&self, project: &Project) -> AnnotationStore {
        self.with_store(project, AnnotationStore::clone)
    }

    /// The values stored for `name` (case-insensitive), empty if absent.
    pub fn annotation(&self, project: &Project, name: &str) -> Vec<AnnotationValue> {
        self.with_store(project, |store| store.get(name).to_vec())
    }

    pub fn has_annotation(&self, project: &Project, name: &str) -> bool {
        self.with_store(project, |store| store.has(name))
    }

    /// Append a synthetic annotation value, building the store first if
    /// it does not exist yet. Existing values for `name` are kept.
    pub fn add_annotation(&self, project: &Project, name: &str, value: AnnotationValue) {
        let mut guard = self.annotations.write();
        guard
            .get_or_insert_with(|| self.build_store(project))
            .append(name, value);
    }

    /// Run `f` against the built store, building it under the write lock
    /// if this is the first annotation access.
    fn with_store<R>(&self, project: &Project, f: impl FnOnce(&AnnotationStore) -> R) -> R {
        {
            let guard = self.annotations.read();
            if let Some(store) = guard.as_ref() {
                return f(store);
            }
        }
        let mut guard = self.annotations.write();
        f(guard.get_or_insert_with(|| self.build_store(project)))
    }

    fn build_store(&self, project: &Project) -> AnnotationStore {
        let files = project.files.read();
        let file_annotations = self.info.file.as_deref().and_then(|path| files.get(path));
        annotations::build_store(&self.info, file_annotations)
    }

    /// Check the element's own raw annotation list, ignoring the merged
    /// store. Documentation policy reads the raw set so that file-level
    /// tags can never suppress an element.
    fn has_raw_annotation(&self, name: &str) -> bool {
        self.info
            .annotations
            .iter()
            .any(|(tag, values)| tag.eq_ignore_ascii_case(name) && !values.is_empty())
    }

    // ─── Descriptions ───────────────────────────────────────────────────

    /// Short human-readable description; see the module docs of
    /// [`description`] for the fallback rules.
    pub fn short_description(&self, project: &Project) -> String {
        self.with_store(project, |store| {
            description::short_description(&self.info, store)
        })
    }

    /// Short description plus the long-description text after a blank
    /// line, when present.
    pub fn long_description(&self, project: &Project) -> String {
        self.with_store(project, |store| {
            description::long_description(&self.info, store)
        })
    }

    /// The raw doc comment, or an empty string if the element has none.
    pub fn doc_comment(&self) -> &str {
        self.info.doc_comment.as_deref().unwrap_or("")
    }

    // ─── Related entities ───────────────────────────────────────────────

    /// The declaring class facade for in-class elements, `None` when the
    /// element is file-scoped or the class is not in the run.
    pub fn declaring_class(&self, project: &Project) -> Option<Arc<Element>> {
        let name = self.info.declaring_class.as_deref()?;
        project.get(name)
    }

    /// The extension facade for built-in definitions, wrapped through the
    /// run's factory; `None` when the element belongs to no extension.
    pub fn extension(&self, project: &Project) -> Option<Arc<Element>> {
        let name = self.info.extension.as_deref()?;
        Some(project.extension(name))
    }

    /// The owning extension's name, empty when there is none.
    pub fn extension_name(&self) -> String {
        self.info.extension.clone().unwrap_or_default()
    }

    // ─── Positions ──────────────────────────────────────────────────────

    pub fn start_position(&self) -> u32 {
        self.info.start_position
    }

    pub fn end_position(&self) -> u32 {
        self.info.end_position
    }

    // ─── Legacy template compatibility ──────────────────────────────────

    /// Packages were removed; kept as a fixed-return shim for templates
    /// that still ask.
    pub fn in_package(&self) -> bool {
        false
    }

    /// Counterpart shim to [`Element::in_package`].
    pub fn in_namespace(&self) -> bool {
        true
    }
}
