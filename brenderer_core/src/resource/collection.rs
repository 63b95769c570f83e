/// Named collection backing one resource kind

use rustc_hash::FxHashMap;

/// Identifier → shared instance map
///
/// `T` is a shared handle (`Arc<_>`), so `get` hands out a new reference.
pub(crate) struct ResourceCollection<T: Clone> {
    entries: FxHashMap<String, T>,
}

impl<T: Clone> ResourceCollection<T> {
    pub(crate) fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }

    pub(crate) fn get(&self, name: &str) -> Option<T> {
        self.entries.get(name).cloned()
    }

    pub(crate) fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Insert and return a handle to the inserted value
    ///
    /// Callers check `get` first; an existing entry is never replaced.
    pub(crate) fn insert(&mut self, name: &str, value: T) -> T {
        debug_assert!(!self.entries.contains_key(name), "'{}' is already registered", name);
        self.entries.insert(name.to_string(), value.clone());
        value
    }

    pub(crate) fn remove(&mut self, name: &str) -> bool {
        self.entries.remove(name).is_some()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    pub(crate) fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}
