//! Documentation metadata core for PHP codebases.
//!
//! This crate sits between a token-level PHP parser and a documentation
//! renderer. The parser hands it raw reflection data per element
//! ([`ElementInfo`]); the renderer queries normalized facades
//! ([`Element`]) for documentation flags, merged annotations, canonical
//! namespace names, and short/long descriptions. It reconciles missing
//! or inconsistent metadata with fallback rules, folds annotation and
//! namespace casing while preserving display spellings, merges
//! file-level tags into file-scoped elements, and memoizes derived
//! values per facade.
//!
//! It does not parse source text, decide output structure, or validate
//! annotation syntax beyond splitting description text.
//!
//! # Modules
//!
//! - [`types`]: raw reflection input model (owned data, no parser
//!   lifetimes).
//! - [`element`]: the element facade, annotation store, and description
//!   extraction.
//! - [`namespaces`]: case-insensitive namespace display-casing registry.
//! - [`config`]: run configuration (`phpscribe.toml`, composer.json
//!   derivation).

pub mod config;
pub mod element;
pub mod namespaces;
pub mod types;

pub use config::{Config, ConfigError};
pub use element::{AnnotationStore, Element};
pub use namespaces::NamespaceRegistry;
pub use types::{AnnotationValue, ElementInfo, ElementKind, RawAnnotations};

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

/// One documentation run: configuration, the namespace registry, the
/// per-file annotation sets, and the element registry.
///
/// The `Project` is the factory for element facades. [`Project::add`]
/// returns a stable `Arc` per fully-qualified name — wrapping the same
/// raw element twice yields the same facade, so per-element caches are
/// never duplicated. All shared state is lock-protected, so a run may
/// drive extraction from parallel workers.
pub struct Project {
    config: Config,
    namespaces: NamespaceRegistry,
    pub(crate) files: RwLock<HashMap<String, RawAnnotations>>,
    elements: RwLock<HashMap<String, Arc<Element>>>,
    /// Extension facades live in their own registry so a built-in
    /// extension name can never collide with a reflected class name.
    extensions: RwLock<HashMap<String, Arc<Element>>>,
}

impl Project {
    /// A run with default configuration.
    pub fn new() -> Self {
        Project::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Project {
            config,
            namespaces: NamespaceRegistry::new(),
            files: RwLock::new(HashMap::new()),
            elements: RwLock::new(HashMap::new()),
            extensions: RwLock::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn namespaces(&self) -> &NamespaceRegistry {
        &self.namespaces
    }

    /// Register a source file's own annotation set, consulted when
    /// building stores for the file-scoped elements declared in it.
    pub fn add_file(&self, path: impl Into<String>, annotations: RawAnnotations) {
        self.files.write().insert(path.into(), annotations);
    }

    /// Wrap raw reflection data in a facade, registering it under its
    /// fully-qualified name.
    ///
    /// If a facade with that name already exists it is returned as-is —
    /// including any cached state — and `info` is dropped.
    pub fn add(&self, info: ElementInfo) -> Arc<Element> {
        let mut elements = self.elements.write();
        if let Some(existing) = elements.get(&info.name) {
            return Arc::clone(existing);
        }
        let element = Arc::new(Element::new(info));
        elements.insert(element.name().to_string(), Arc::clone(&element));
        element
    }

    /// Look up a registered facade by fully-qualified name.
    pub fn get(&self, name: &str) -> Option<Arc<Element>> {
        self.elements.read().get(name).map(Arc::clone)
    }

    /// All registered facades, in no particular order.
    pub fn elements(&self) -> Vec<Arc<Element>> {
        self.elements.read().values().map(Arc::clone).collect()
    }

    /// The facade for a built-in extension, created on first request.
    pub(crate) fn extension(&self, name: &str) -> Arc<Element> {
        let mut extensions = self.extensions.write();
        if let Some(existing) = extensions.get(name) {
            return Arc::clone(existing);
        }
        let element = Arc::new(Element::new(ElementInfo::extension(name)));
        extensions.insert(name.to_string(), Arc::clone(&element));
        element
    }
}

impl Default for Project {
    fn default() -> Self {
        Project::new()
    }
}
