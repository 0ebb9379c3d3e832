//! Type-hierarchy dispatch map.
//!
//! Values are registered for a [`TypeDescriptor`]; a lookup for any type
//! resolves to the value of its closest registered ancestor. Resolutions are
//! cached per queried type, so a repeated lookup never walks the hierarchy again.
//!
//! Registration takes `&mut self` and lookups take `&self`: a map is
//! populated by its owner during startup and then shared (for example in an
//! `Arc`) with any number of concurrent readers.

use crate::{Described, TypeDescriptor};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, instrument, trace};

/// Registry resolving values by walking a type's ancestor chain.
///
/// The resolution cache is never invalidated. Registering a value after a
/// type has already been looked up does not change that type's cached answer,
/// so all registrations should happen before the first lookup.
///
/// # Example
///
/// ```
/// use dango_utils::{TypeDescriptor, TypeMap};
///
/// static CHANNEL: TypeDescriptor = TypeDescriptor::new("Channel", &[], None);
/// static TEXT_CHANNEL: TypeDescriptor = TypeDescriptor::new("TextChannel", &[&CHANNEL], None);
///
/// let mut map = TypeMap::new();
/// map.register(&CHANNEL, "a channel");
///
/// assert_eq!(map.lookup(&TEXT_CHANNEL), Some(&"a channel"));
/// ```
pub struct TypeMap<V> {
    entries: HashMap<&'static str, V>,
    resolved: RwLock<HashMap<&'static str, Option<&'static str>>>,
}

impl<V> TypeMap<V> {
    /// Create an empty map.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            resolved: RwLock::new(HashMap::new()),
        }
    }

    /// Store `value` for exactly `ty`, replacing any previous value.
    #[instrument(skip_all, fields(ty = ty.name()))]
    pub fn register(&mut self, ty: &'static TypeDescriptor, value: V) {
        if self.entries.insert(ty.name(), value).is_some() {
            debug!("Replaced existing registration");
        } else {
            debug!("Registered type");
        }
    }

    /// Resolve the value for `ty` or its closest registered ancestor.
    ///
    /// Returns `None` when neither `ty` nor any ancestor is registered.
    #[instrument(skip_all, fields(ty = ty.name()))]
    pub fn lookup(&self, ty: &'static TypeDescriptor) -> Option<&V> {
        if let Some(key) = self.resolved.read().get(ty.name()).copied() {
            trace!(resolved = ?key, "Cache hit");
            return key.and_then(|k| self.entries.get(k));
        }

        let key = ty
            .ancestors()
            .into_iter()
            .map(TypeDescriptor::name)
            .find(|name| self.entries.contains_key(name));
        debug!(resolved = ?key, "Resolved ancestor chain");

        // A concurrent reader may have resolved the same type meanwhile; keep its answer.
        let key = *self.resolved.write().entry(ty.name()).or_insert(key);
        key.and_then(|k| self.entries.get(k))
    }

    /// Resolve the value for the concrete type of `value`.
    pub fn lookup_value(&self, value: &dyn Described) -> Option<&V> {
        self.lookup(value.descriptor())
    }

    /// Whether a value is registered for exactly `ty` (ancestors are not consulted).
    pub fn contains(&self, ty: &TypeDescriptor) -> bool {
        self.entries.contains_key(ty.name())
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> Default for TypeMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Extend<(&'static TypeDescriptor, V)> for TypeMap<V> {
    fn extend<I: IntoIterator<Item = (&'static TypeDescriptor, V)>>(&mut self, iter: I) {
        for (ty, value) in iter {
            self.register(ty, value);
        }
    }
}

impl<V> FromIterator<(&'static TypeDescriptor, V)> for TypeMap<V> {
    fn from_iter<I: IntoIterator<Item = (&'static TypeDescriptor, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<V: fmt::Debug> fmt::Debug for TypeMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeMap")
            .field("entries", &self.entries)
            .field("resolved", &self.resolved.read().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static ROOT: TypeDescriptor = TypeDescriptor::new("Root", &[], None);
    static LEAF: TypeDescriptor = TypeDescriptor::new("Leaf", &[], Some(&ROOT));

    #[test]
    fn test_miss_is_cached() {
        let map: TypeMap<u8> = TypeMap::new();
        assert_eq!(map.lookup(&LEAF), None);
        assert_eq!(map.resolved.read().get("Leaf"), Some(&None));
    }

    #[test]
    fn test_hit_caches_resolved_key() {
        let mut map = TypeMap::new();
        map.register(&ROOT, 1);
        assert_eq!(map.lookup(&LEAF), Some(&1));
        assert_eq!(map.resolved.read().get("Leaf"), Some(&Some("Root")));
    }

    #[test]
    fn test_overwrite_of_resolved_key_is_visible() {
        let mut map = TypeMap::new();
        map.register(&ROOT, 1);
        assert_eq!(map.lookup(&LEAF), Some(&1));
        map.register(&ROOT, 2);
        assert_eq!(map.lookup(&LEAF), Some(&2));
    }
}
