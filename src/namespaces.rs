/// Namespace display-casing registry.
///
/// PHP namespace names are case-insensitive, so source files referring to
/// `App\Util`, `app\util`, and `APP\Util` all mean the same namespace.
/// Rendered documentation must show one canonical spelling for all of
/// them. The registry maps the case-folded name to whichever casing was
/// seen first in the run; every later variant resolves to that spelling.
///
/// The registry is owned by the run context (one per documentation run,
/// never evicted) and is safe to share across parallel extraction
/// workers: the lock makes registration atomic, so first-writer-wins is
/// consistent even under ties.
use std::collections::HashMap;

use parking_lot::Mutex;

#[derive(Debug, Default)]
pub struct NamespaceRegistry {
    canonical: Mutex<HashMap<String, String>>,
}

impl NamespaceRegistry {
    pub fn new() -> Self {
        NamespaceRegistry::default()
    }

    /// Resolve `namespace` to its canonical display casing, registering it
    /// as the canonical form if no casing variant was seen before.
    pub fn canonicalize(&self, namespace: &str) -> String {
        let key = namespace.to_lowercase();
        let mut canonical = self.canonical.lock();
        canonical
            .entry(key)
            .or_insert_with(|| {
                tracing::trace!("canonical namespace casing: {}", namespace);
                namespace.to_string()
            })
            .clone()
    }

    /// Number of distinct namespaces registered so far.
    pub fn len(&self) -> usize {
        self.canonical.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.canonical.lock().is_empty()
    }
}
