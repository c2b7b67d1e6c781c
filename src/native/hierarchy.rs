//! Registry of native fault classes known to the boundary.
//!
//! The [`NativeHierarchy`] is populated by the boundary at startup with one
//! [`crate::native::NativeClass`] per native fault type, then handed to
//! [`crate::WrapperRegistry::new`] which resolves the canonical wrapper set
//! against it. Classes are indexed both by identity (the key reported by
//! fault instances) and by short name (the key used when wiring up wrappers).

use dashmap::DashMap;

use crate::native::{NativeClassRc, NativeTypeId};

/// Thread-safe store of native fault classes, indexed by identity and name.
///
/// Inserting a class whose identity or name is already present replaces the
/// previous entry in that index; the most recent insertion wins.
///
/// # Examples
///
/// ```rust
/// use faultbridge::native::{NativeClassBuilder, NativeHierarchy, NativeTypeId};
///
/// let hierarchy = NativeHierarchy::new();
/// hierarchy.insert(
///     NativeClassBuilder::new(NativeTypeId::new("cpp::DomainError"), "DomainError").build(),
/// );
///
/// assert_eq!(hierarchy.len(), 1);
/// assert!(hierarchy.get_by_name("DomainError").is_some());
/// ```
#[derive(Debug)]
pub struct NativeHierarchy {
    /// Primary index by class identity
    by_id: DashMap<NativeTypeId, NativeClassRc>,
    /// Secondary index by short class name
    by_name: DashMap<String, NativeClassRc>,
}

impl NativeHierarchy {
    /// Create a new, empty hierarchy
    #[must_use]
    pub fn new() -> Self {
        NativeHierarchy {
            by_id: DashMap::new(),
            by_name: DashMap::new(),
        }
    }

    /// Inserts a class into both indexes, replacing any previous entry.
    pub fn insert(&self, class: NativeClassRc) {
        self.by_name.insert(class.name().to_string(), class.clone());
        self.by_id.insert(class.id().clone(), class);
    }

    /// Looks up a class by its identity.
    #[must_use]
    pub fn get(&self, id: &NativeTypeId) -> Option<NativeClassRc> {
        self.by_id.get(id).map(|entry| entry.value().clone())
    }

    /// Looks up a class by its short name.
    #[must_use]
    pub fn get_by_name(&self, name: &str) -> Option<NativeClassRc> {
        self.by_name.get(name).map(|entry| entry.value().clone())
    }

    /// True if a class with the given identity is registered.
    #[must_use]
    pub fn contains(&self, id: &NativeTypeId) -> bool {
        self.by_id.contains_key(id)
    }

    /// Number of registered classes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// True if no classes are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Snapshot of all registered classes, in no particular order.
    #[must_use]
    pub fn classes(&self) -> Vec<NativeClassRc> {
        self.by_id
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }
}

impl Default for NativeHierarchy {
    fn default() -> Self {
        Self::new()
    }
}
