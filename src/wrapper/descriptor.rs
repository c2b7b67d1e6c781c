//! Wrapper type descriptors.
//!
//! A [`WrapperType`] is the host-side description of one translatable fault
//! type: its display name, its place in the wrapper hierarchy, the
//! [`crate::native::NativeClass`] it wraps, and the host error family it
//! participates in. Descriptors are immutable and shared as
//! [`WrapperTypeRc`] handles; subtype checks walk base links by handle
//! identity, so two descriptors are only related if they were wired to the
//! same ancestors, never because their names happen to match.

use std::{fmt, sync::Arc};

use crate::{
    native::{NativeClassRc, NativeValue},
    wrapper::{HostCategory, WrapperKind},
};

/// Shared handle to a wrapper type descriptor.
pub type WrapperTypeRc = Arc<WrapperType>;

/// Host-side descriptor of one translatable fault type.
///
/// Canonical descriptors are materialized by
/// [`crate::WrapperRegistry::new`], one per [`WrapperKind`]; extension
/// descriptors come from [`WrapperType::declared`] and carry no kind of
/// their own, inheriting behavior through their base chain instead.
///
/// # Thread Safety
///
/// Descriptors are immutable after construction and safe to share across
/// threads behind their [`WrapperTypeRc`] handle.
pub struct WrapperType {
    /// Display name, e.g. `OutOfRangeError`
    name: String,
    /// Canonical kind, `None` for declared extension types
    kind: Option<WrapperKind>,
    /// Base descriptor, `None` only for the hierarchy root
    base: Option<WrapperTypeRc>,
    /// The native class instances of this type wrap
    wrapped_class: NativeClassRc,
    /// Host error family this type belongs to directly
    category: Option<HostCategory>,
}

impl WrapperType {
    /// Creates the canonical descriptor for a [`WrapperKind`].
    pub(crate) fn builtin(
        kind: WrapperKind,
        base: Option<WrapperTypeRc>,
        wrapped_class: NativeClassRc,
    ) -> Self {
        WrapperType {
            name: kind.to_string(),
            kind: Some(kind),
            base,
            wrapped_class,
            category: kind.host_category(),
        }
    }

    /// Creates a descriptor for a boundary-declared extension type.
    ///
    /// The new type sits below `base` in the hierarchy and wraps
    /// `wrapped_class`. It carries no [`WrapperKind`] or [`HostCategory`] of
    /// its own; both are inherited through the base chain.
    ///
    /// # Arguments
    ///
    /// * `name` - Display name of the new type
    /// * `base` - The wrapper type to extend
    /// * `wrapped_class` - The native class instances of this type wrap
    #[must_use]
    pub fn declared(
        name: impl Into<String>,
        base: WrapperTypeRc,
        wrapped_class: NativeClassRc,
    ) -> Self {
        WrapperType {
            name: name.into(),
            kind: None,
            base: Some(base),
            wrapped_class,
            category: None,
        }
    }

    /// Display name of this type
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Canonical kind, `None` for declared extension types
    #[must_use]
    pub fn kind(&self) -> Option<WrapperKind> {
        self.kind
    }

    /// Base descriptor, `None` only for the hierarchy root
    #[must_use]
    pub fn base(&self) -> Option<&WrapperTypeRc> {
        self.base.as_ref()
    }

    /// The native class instances of this type wrap
    #[must_use]
    pub fn wrapped_class(&self) -> &NativeClassRc {
        &self.wrapped_class
    }

    /// Host error family this type belongs to directly, not counting
    /// ancestors
    #[must_use]
    pub fn category(&self) -> Option<HostCategory> {
        self.category
    }

    /// Looks up a member on the wrapped native class.
    ///
    /// This is the type-level member-miss path: anything not modeled on the
    /// descriptor itself resolves against the wrapped class's attribute
    /// table, so native class constants read naturally off the wrapper type.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<NativeValue> {
        self.wrapped_class.attr(name).cloned()
    }

    /// True if this type is the canonical type for `kind` or descends from
    /// it.
    #[must_use]
    pub fn is_kind(&self, kind: WrapperKind) -> bool {
        let mut current = Some(self);
        while let Some(ty) = current {
            if ty.kind == Some(kind) {
                return true;
            }
            current = ty.base.as_deref();
        }
        false
    }

    /// True if this type is `other` or descends from it.
    ///
    /// Comparison is by descriptor identity, not by name: a type relates to
    /// exactly the ancestors it was constructed with.
    #[must_use]
    pub fn is_subtype_of(&self, other: &WrapperType) -> bool {
        let mut current = Some(self);
        while let Some(ty) = current {
            if std::ptr::eq(ty, other) {
                return true;
            }
            current = ty.base.as_deref();
        }
        false
    }

    /// True if faults of this type are catchable as the host family
    /// `category`.
    ///
    /// Walks the base chain and honors category subsumption, so e.g. an
    /// overflow wrapper answers true for both [`HostCategory::Overflow`] and
    /// [`HostCategory::Arithmetic`].
    #[must_use]
    pub fn is_host(&self, category: HostCategory) -> bool {
        let mut current = Some(self);
        while let Some(ty) = current {
            if let Some(own) = ty.category {
                if category.includes(own) {
                    return true;
                }
            }
            current = ty.base.as_deref();
        }
        false
    }
}

impl fmt::Display for WrapperType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Debug for WrapperType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WrapperType({}, wraps: {})", self.name, self.wrapped_class.id())
    }
}
