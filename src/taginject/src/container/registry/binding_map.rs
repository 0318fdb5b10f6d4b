use std::collections::HashMap;

/// A registry keyed by binding name.
pub struct BindingMap<V> {
    bindings: HashMap<String, V>,
}

impl<V> BindingMap<V> {
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Binds `value` to `name`, returning the value it replaces.
    pub fn insert(&mut self, name: String, value: V) -> Option<V> {
        self.bindings.insert(name, value)
    }

    pub fn get(&self, name: &str) -> Option<&V> {
        self.bindings.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<V> {
        self.bindings.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Iterates over all bindings ordered by name.
    pub fn iter_sorted(&self) -> impl Iterator<Item = (&str, &V)> {
        let mut entries: Vec<_> = self
            .bindings
            .iter()
            .map(|(name, value)| (name.as_str(), value))
            .collect();
        entries.sort_unstable_by_key(|(name, _)| *name);
        entries.into_iter()
    }
}
