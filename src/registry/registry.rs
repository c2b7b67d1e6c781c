//! The wrapper registry: the single lookup point for fault translation.
//!
//! [`WrapperRegistry::new`] materializes the canonical wrapper hierarchy
//! against the boundary's [`crate::native::NativeHierarchy`] and from then
//! on answers every translation: native class identity in, wrapper type out,
//! with the root wrapper as the lossless fallback for classes nothing was
//! registered for. Boundaries extend the canonical set at runtime through
//! [`WrapperRegistry::register`] and [`WrapperRegistry::declare`].

use std::sync::Arc;

use crossbeam_skiplist::SkipMap;
use dashmap::DashMap;
use strum::IntoEnumIterator;

use crate::{
    diagnostics::{Diagnostic, DiagnosticCategory, DiagnosticSeverity, Diagnostics},
    native::{NativeClassRc, NativeFaultRc, NativeHierarchy, NativeTypeId},
    registry::Namespace,
    wrapper::{WrapperInstance, WrapperKind, WrapperType, WrapperTypeRc},
    Error, Result,
};

/// Thread-safe registry mapping native fault classes to wrapper types.
///
/// The registry is the heart of the translation layer. Construction wires up
/// one canonical wrapper type per [`WrapperKind`], each bound to the native
/// class of the same name from the supplied hierarchy; afterwards the
/// registry is append-only and fully concurrent, so boundary modules can
/// keep registering extension types while other threads translate.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
///
/// use faultbridge::{
///     native::{NativeClassBuilder, NativeFault, NativeFaultRc, NativeHierarchy, NativeTypeId},
///     WrapperKind, WrapperRegistry,
/// };
/// use strum::IntoEnumIterator;
///
/// #[derive(Debug)]
/// struct DemoFault;
///
/// impl NativeFault for DemoFault {
///     fn class_id(&self) -> NativeTypeId {
///         NativeTypeId::new("cpp::OutOfRangeError")
///     }
///
///     fn what(&self) -> &str {
///         "index 9 out of range"
///     }
///
///     fn as_string(&self) -> String {
///         "OutOfRangeError: index 9 out of range".to_string()
///     }
/// }
///
/// let hierarchy = NativeHierarchy::new();
/// for kind in WrapperKind::iter() {
///     hierarchy.insert(
///         NativeClassBuilder::new(
///             NativeTypeId::new(format!("cpp::{}", kind.native_name())),
///             kind.native_name(),
///         )
///         .build(),
///     );
/// }
///
/// let registry = WrapperRegistry::new(&hierarchy)?;
/// let fault: NativeFaultRc = Arc::new(DemoFault);
/// let wrapped = registry.translate(fault);
///
/// assert_eq!(wrapped.ty().name(), "OutOfRangeError");
/// assert!(wrapped.is_kind(WrapperKind::LogicError));
/// # Ok::<(), faultbridge::Error>(())
/// ```
///
/// # Thread Safety
///
/// All operations take `&self`; lookups and registrations may interleave
/// freely across threads.
pub struct WrapperRegistry {
    /// Primary store, keyed by native class identity
    wrappers: SkipMap<NativeTypeId, WrapperTypeRc>,
    /// Secondary index over the canonical wrapper types
    builtins: DashMap<WrapperKind, WrapperTypeRc>,
    /// Root of the wrapper hierarchy, also the translation fallback
    base: WrapperTypeRc,
    /// Diagnostic sink for non-fatal translation and registration events
    diagnostics: Arc<Diagnostics>,
}

impl WrapperRegistry {
    /// Creates a registry with the canonical wrapper hierarchy installed.
    ///
    /// Each [`WrapperKind`] is bound to the native class of the same short
    /// name in `hierarchy`; the resulting wrapper types share one descriptor
    /// chain, so subtype checks hold across everything the registry hands
    /// out.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingNativeClass`] if `hierarchy` lacks a class
    /// for any canonical kind. No partial registry is ever observable.
    pub fn new(hierarchy: &NativeHierarchy) -> Result<Self> {
        let base_class = Self::resolve_class(hierarchy, WrapperKind::Exception)?;
        let base = Arc::new(WrapperType::builtin(WrapperKind::Exception, None, base_class));

        let registry = WrapperRegistry {
            wrappers: SkipMap::new(),
            builtins: DashMap::new(),
            base: base.clone(),
            diagnostics: Arc::new(Diagnostics::new()),
        };
        registry.builtins.insert(WrapperKind::Exception, base.clone());
        registry.register(base);

        // Kinds iterate parents-first, so every parent lookup below hits a
        // wrapper installed in an earlier round.
        for kind in WrapperKind::iter().filter(|kind| kind.parent().is_some()) {
            let class = Self::resolve_class(hierarchy, kind)?;
            let parent = kind.parent().and_then(|parent| registry.builtin(parent));
            let wrapper = Arc::new(WrapperType::builtin(kind, parent, class));
            registry.builtins.insert(kind, wrapper.clone());
            registry.register(wrapper);
        }

        Ok(registry)
    }

    fn resolve_class(hierarchy: &NativeHierarchy, kind: WrapperKind) -> Result<NativeClassRc> {
        hierarchy
            .get_by_name(kind.native_name())
            .ok_or_else(|| Error::MissingNativeClass(kind.native_name().to_string()))
    }

    /// Registers a wrapper type for its wrapped class and returns it.
    ///
    /// The wrapper is keyed by the identity of the class it wraps. If that
    /// identity is already mapped, the newest registration wins silently;
    /// an informational diagnostic records the replacement. Returning the
    /// handle lets call sites register and keep a type in one expression.
    pub fn register(&self, wrapper: WrapperTypeRc) -> WrapperTypeRc {
        let class_id = wrapper.wrapped_class().id().clone();
        if let Some(previous) = self.wrappers.get(&class_id) {
            if !Arc::ptr_eq(previous.value(), &wrapper) {
                self.diagnostics.push(
                    Diagnostic::new(
                        DiagnosticSeverity::Info,
                        DiagnosticCategory::Registration,
                        format!(
                            "wrapper `{}` replaces `{}`",
                            wrapper.name(),
                            previous.value().name()
                        ),
                    )
                    .with_class_id(class_id.clone())
                    .with_wrapper(wrapper.name()),
                );
            }
        }
        self.wrappers.insert(class_id, wrapper.clone());
        wrapper
    }

    /// Looks up the wrapper type registered for a native class identity.
    ///
    /// Exact match only; translation fallback is [`WrapperRegistry::translate`]'s
    /// concern, not this method's.
    #[must_use]
    pub fn lookup(&self, class_id: &NativeTypeId) -> Option<WrapperTypeRc> {
        self.wrappers.get(class_id).map(|entry| entry.value().clone())
    }

    /// Translates an in-flight native fault into a host error value.
    ///
    /// The fault's own class identity selects the wrapper type. A fault
    /// whose class has no registered wrapper is still translated, wrapped
    /// with the hierarchy root so nothing about the original is lost; the
    /// miss is recorded once on the diagnostic sink as a warning.
    #[must_use]
    pub fn translate(&self, native: NativeFaultRc) -> WrapperInstance {
        let class_id = native.class_id();
        match self.lookup(&class_id) {
            Some(wrapper) => WrapperInstance::wrap(wrapper, native),
            None => {
                self.diagnostics.push(
                    Diagnostic::new(
                        DiagnosticSeverity::Warning,
                        DiagnosticCategory::Translation,
                        "no wrapper type registered for native fault class",
                    )
                    .with_class_id(class_id)
                    .with_wrapper(self.base.name()),
                );
                WrapperInstance::wrap(self.base.clone(), native)
            }
        }
    }

    /// Declares a boundary extension type and publishes it under `name`.
    ///
    /// Builds a [`WrapperType::declared`] descriptor below `base`, registers
    /// it for `wrapped_class`'s identity, binds it into `namespace`, and
    /// returns the handle, so one call gives a boundary module a fully
    /// usable new fault type.
    ///
    /// # Arguments
    ///
    /// * `namespace` - Where to publish the new type
    /// * `name` - Display and binding name of the new type
    /// * `base` - The wrapper type to extend
    /// * `wrapped_class` - The native class the new type wraps
    pub fn declare(
        &self,
        namespace: &Namespace,
        name: &str,
        base: &WrapperTypeRc,
        wrapped_class: NativeClassRc,
    ) -> WrapperTypeRc {
        let wrapper = self.register(Arc::new(WrapperType::declared(
            name,
            base.clone(),
            wrapped_class,
        )));
        self.diagnostics.push(
            Diagnostic::new(
                DiagnosticSeverity::Info,
                DiagnosticCategory::Declaration,
                format!("declared wrapper type `{name}`"),
            )
            .with_class_id(wrapper.wrapped_class().id().clone())
            .with_wrapper(name),
        );
        namespace.bind(name, wrapper.clone());
        wrapper
    }

    /// The canonical wrapper type for a kind.
    ///
    /// Always present for registries built with [`WrapperRegistry::new`];
    /// the `Option` only reflects that the secondary index is queried at
    /// runtime.
    #[must_use]
    pub fn builtin(&self, kind: WrapperKind) -> Option<WrapperTypeRc> {
        self.builtins.get(&kind).map(|entry| entry.value().clone())
    }

    /// The root of the wrapper hierarchy, used as the translation fallback.
    #[must_use]
    pub fn base(&self) -> WrapperTypeRc {
        self.base.clone()
    }

    /// The diagnostic sink recording non-fatal events on this registry.
    #[must_use]
    pub fn diagnostics(&self) -> &Arc<Diagnostics> {
        &self.diagnostics
    }

    /// Number of registered wrapper types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.wrappers.len()
    }

    /// True if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.wrappers.is_empty()
    }

    /// Iterates over all registered wrapper types in native identity order.
    pub fn iter(&self) -> impl Iterator<Item = WrapperTypeRc> + '_ {
        self.wrappers.iter().map(|entry| entry.value().clone())
    }
}

impl std::fmt::Debug for WrapperRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WrapperRegistry")
            .field("wrappers", &self.wrappers.len())
            .field("base", &self.base.name())
            .finish_non_exhaustive()
    }
}

impl<'a> IntoIterator for &'a WrapperRegistry {
    type Item = WrapperTypeRc;
    type IntoIter = std::vec::IntoIter<WrapperTypeRc>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter().collect::<Vec<_>>().into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        native::NativeValue,
        test::{create_class, create_hierarchy, test_class_id, StubFault},
    };
    use strum::EnumCount;

    #[test]
    fn test_new_installs_canonical_hierarchy() {
        let registry = WrapperRegistry::new(&create_hierarchy()).unwrap();

        assert_eq!(registry.len(), WrapperKind::COUNT);
        assert!(!registry.is_empty());

        for kind in WrapperKind::iter() {
            let wrapper = registry.builtin(kind).unwrap();
            assert_eq!(wrapper.name(), kind.native_name());
            assert_eq!(wrapper.kind(), Some(kind));
        }
    }

    #[test]
    fn test_base_is_the_exception_builtin() {
        let registry = WrapperRegistry::new(&create_hierarchy()).unwrap();

        let base = registry.base();
        let exception = registry.builtin(WrapperKind::Exception).unwrap();
        assert!(Arc::ptr_eq(&base, &exception));
    }

    #[test]
    fn test_builtin_chain_is_shared() {
        let registry = WrapperRegistry::new(&create_hierarchy()).unwrap();

        let overflow = registry.builtin(WrapperKind::OverflowError).unwrap();
        let runtime = registry.builtin(WrapperKind::RuntimeError).unwrap();
        assert!(Arc::ptr_eq(overflow.base().unwrap(), &runtime));
        assert!(overflow.is_subtype_of(&registry.base()));
    }

    #[test]
    fn test_new_requires_every_canonical_class() {
        let hierarchy = NativeHierarchy::new();
        for kind in WrapperKind::iter().filter(|kind| *kind != WrapperKind::UnderflowError) {
            hierarchy.insert(create_class(kind.native_name()));
        }

        let result = WrapperRegistry::new(&hierarchy);
        assert!(matches!(
            result,
            Err(Error::MissingNativeClass(ref name)) if name == "UnderflowError"
        ));
    }

    #[test]
    fn test_lookup_is_exact() {
        let registry = WrapperRegistry::new(&create_hierarchy()).unwrap();

        assert!(registry.lookup(&test_class_id("RangeError")).is_some());
        assert!(registry.lookup(&test_class_id("Unknown")).is_none());
    }

    #[test]
    fn test_translate_hit() {
        let registry = WrapperRegistry::new(&create_hierarchy()).unwrap();
        let fault: NativeFaultRc = Arc::new(StubFault::new("OverflowError", "counter wrapped"));

        let wrapped = registry.translate(fault);

        let overflow = registry.builtin(WrapperKind::OverflowError).unwrap();
        assert!(Arc::ptr_eq(wrapped.ty(), &overflow));
        assert_eq!(registry.diagnostics().warning_count(), 0);
    }

    #[test]
    fn test_translate_miss_falls_back_to_base() {
        let registry = WrapperRegistry::new(&create_hierarchy()).unwrap();
        let fault: NativeFaultRc = Arc::new(StubFault::new("VendorError", "vendor specific"));

        let wrapped = registry.translate(fault.clone());

        assert!(Arc::ptr_eq(wrapped.ty(), &registry.base()));
        assert!(Arc::ptr_eq(wrapped.native(), &fault));
        assert_eq!(registry.diagnostics().warning_count(), 1);

        let recorded = registry
            .diagnostics()
            .iter()
            .find(|diagnostic| diagnostic.severity == DiagnosticSeverity::Warning)
            .unwrap();
        assert_eq!(recorded.category, DiagnosticCategory::Translation);
        assert_eq!(recorded.class_id, Some(test_class_id("VendorError")));
    }

    #[test]
    fn test_register_returns_the_handle() {
        let registry = WrapperRegistry::new(&create_hierarchy()).unwrap();
        let wrapper = Arc::new(WrapperType::declared(
            "CacheMissError",
            registry.builtin(WrapperKind::NotFoundError).unwrap(),
            create_class("CacheMissError"),
        ));

        let returned = registry.register(wrapper.clone());
        assert!(Arc::ptr_eq(&returned, &wrapper));
        assert!(Arc::ptr_eq(
            &registry.lookup(&test_class_id("CacheMissError")).unwrap(),
            &wrapper
        ));
    }

    #[test]
    fn test_reregistration_is_last_wins() {
        let registry = WrapperRegistry::new(&create_hierarchy()).unwrap();
        let base = registry.base();
        let class = create_class("VendorError");

        let first = registry.register(Arc::new(WrapperType::declared(
            "VendorErrorV1",
            base.clone(),
            class.clone(),
        )));
        let second = registry.register(Arc::new(WrapperType::declared(
            "VendorErrorV2",
            base,
            class,
        )));

        let current = registry.lookup(&test_class_id("VendorError")).unwrap();
        assert!(!Arc::ptr_eq(&current, &first));
        assert!(Arc::ptr_eq(&current, &second));

        let replacement = registry
            .diagnostics()
            .iter()
            .find(|diagnostic| diagnostic.category == DiagnosticCategory::Registration)
            .unwrap();
        assert_eq!(replacement.severity, DiagnosticSeverity::Info);
        assert!(replacement.message.contains("VendorErrorV2"));
        assert!(replacement.message.contains("VendorErrorV1"));
    }

    #[test]
    fn test_reregistering_the_same_handle_records_nothing() {
        let registry = WrapperRegistry::new(&create_hierarchy()).unwrap();
        let before = registry.diagnostics().count();

        let exception = registry.builtin(WrapperKind::Exception).unwrap();
        registry.register(exception);

        assert_eq!(registry.diagnostics().count(), before);
    }

    #[test]
    fn test_declare_registers_and_binds() {
        let registry = WrapperRegistry::new(&create_hierarchy()).unwrap();
        let namespace = Namespace::new();
        let base = registry.builtin(WrapperKind::IoError).unwrap();

        let declared = registry.declare(
            &namespace,
            "SocketClosedError",
            &base,
            create_class("SocketClosedError"),
        );

        assert_eq!(declared.name(), "SocketClosedError");
        assert!(declared.is_kind(WrapperKind::IoError));
        assert!(Arc::ptr_eq(
            &namespace.get("SocketClosedError").unwrap(),
            &declared
        ));
        assert!(Arc::ptr_eq(
            &registry.lookup(&test_class_id("SocketClosedError")).unwrap(),
            &declared
        ));

        let fault: NativeFaultRc = Arc::new(StubFault::new("SocketClosedError", "peer hung up"));
        let wrapped = registry.translate(fault);
        assert!(Arc::ptr_eq(wrapped.ty(), &declared));
    }

    #[test]
    fn test_iteration_is_in_identity_order() {
        let registry = WrapperRegistry::new(&create_hierarchy()).unwrap();

        let ids: Vec<NativeTypeId> = registry
            .iter()
            .map(|wrapper| wrapper.wrapped_class().id().clone())
            .collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);

        let via_into_iter: Vec<WrapperTypeRc> = (&registry).into_iter().collect();
        assert_eq!(via_into_iter.len(), registry.len());
    }

    #[test]
    fn test_class_attributes_reachable_through_builtin() {
        let registry = WrapperRegistry::new(&create_hierarchy()).unwrap();

        let not_found = registry.builtin(WrapperKind::NotFoundError).unwrap();
        assert_eq!(
            not_found.attr("category"),
            Some(NativeValue::from("NotFoundError"))
        );
    }
}
