//! Name bindings for declared wrapper types.
//!
//! When a boundary declares an extension wrapper type it also publishes the
//! type under a name, so downstream host code can refer to it the way it
//! refers to the canonical types. A [`Namespace`] is that publication
//! target: a flat, thread-safe map from names to wrapper type handles,
//! typically one per boundary module.

use dashmap::DashMap;

use crate::wrapper::WrapperTypeRc;

/// Flat, thread-safe map of published wrapper type names.
///
/// Rebinding a name is silent and replaces the previous handle; callers that
/// care about collisions can check [`Namespace::contains`] first.
///
/// # Examples
///
/// ```rust
/// use faultbridge::{Namespace, WrapperKind, WrapperRegistry};
/// # use faultbridge::native::{NativeClassBuilder, NativeHierarchy, NativeTypeId};
/// # use strum::IntoEnumIterator;
/// # let hierarchy = NativeHierarchy::new();
/// # for kind in WrapperKind::iter() {
/// #     hierarchy.insert(
/// #         NativeClassBuilder::new(
/// #             NativeTypeId::new(format!("cpp::{}", kind.native_name())),
/// #             kind.native_name(),
/// #         )
/// #         .build(),
/// #     );
/// # }
/// let registry = WrapperRegistry::new(&hierarchy)?;
/// let namespace = Namespace::new();
///
/// namespace.bind("Exception", registry.base());
/// assert!(namespace.contains("Exception"));
/// # Ok::<(), faultbridge::Error>(())
/// ```
#[derive(Debug)]
pub struct Namespace {
    /// Published bindings by name
    bindings: DashMap<String, WrapperTypeRc>,
}

impl Namespace {
    /// Create a new, empty namespace
    #[must_use]
    pub fn new() -> Self {
        Namespace {
            bindings: DashMap::new(),
        }
    }

    /// Publishes a wrapper type under `name`, replacing any previous
    /// binding.
    pub fn bind(&self, name: impl Into<String>, wrapper: WrapperTypeRc) {
        self.bindings.insert(name.into(), wrapper);
    }

    /// Looks up a published wrapper type by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<WrapperTypeRc> {
        self.bindings.get(name).map(|entry| entry.value().clone())
    }

    /// True if a wrapper type is published under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Number of published bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// True if nothing is published.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Snapshot of all published names, in no particular order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.bindings
            .iter()
            .map(|entry| entry.key().clone())
            .collect()
    }
}

impl Default for Namespace {
    fn default() -> Self {
        Self::new()
    }
}
