//! Translated fault instances.
//!
//! A [`WrapperInstance`] is what host code actually catches: a host error
//! value that keeps the original native fault object alive inside it. The
//! instance renders with the native fault's own formatting, answers
//! attribute lookups by delegating to the native object, and can hand the
//! untouched native fault back for the return trip across the boundary.

use std::fmt;

use crate::{
    native::{NativeFaultRc, NativeValue},
    wrapper::{HostCategory, WrapperKind, WrapperType, WrapperTypeRc},
    Result,
};

/// A native fault translated into a host error value.
///
/// Instances come from two places: [`WrapperInstance::wrap`] during
/// translation of an in-flight native fault, and
/// [`WrapperInstance::construct`] when host code raises a boundary fault
/// directly. Either way the instance owns a handle to a real native fault
/// object, which is recoverable losslessly through
/// [`WrapperInstance::native`] or [`WrapperInstance::into_native`].
///
/// # Examples
///
/// ```rust
/// use faultbridge::{WrapperInstance, WrapperKind, WrapperRegistry};
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
/// let overflow = registry.builtin(WrapperKind::OverflowError).unwrap();
///
/// // Construction requires a native constructor; this class has none.
/// assert!(WrapperInstance::construct(overflow, "counter wrapped", &[]).is_err());
/// # Ok::<(), faultbridge::Error>(())
/// ```
pub struct WrapperInstance {
    /// The wrapper type this instance belongs to
    ty: WrapperTypeRc,
    /// Message as seen at creation time
    message: String,
    /// The underlying native fault, untouched
    native: NativeFaultRc,
}

impl WrapperInstance {
    /// Wraps an in-flight native fault without copying or altering it.
    ///
    /// The instance message is taken from the fault's own
    /// [`crate::native::NativeFault::what`].
    #[must_use]
    pub fn wrap(ty: WrapperTypeRc, native: NativeFaultRc) -> Self {
        let message = native.what().to_string();
        WrapperInstance { ty, message, native }
    }

    /// Constructs a fresh native fault of `ty`'s wrapped class and wraps it.
    ///
    /// This is the host-initiated direction: the registered native
    /// constructor synthesizes a genuine native fault, so a boundary fault
    /// raised from host code is indistinguishable from one raised natively.
    /// Extra arguments are forwarded to the native constructor verbatim.
    ///
    /// # Arguments
    ///
    /// * `ty` - The wrapper type to instantiate
    /// * `message` - The fault message
    /// * `extra` - Additional positional arguments for the native constructor
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Construction`] when the native constructor
    /// rejects the arguments or the wrapped class has no constructor.
    pub fn construct(
        ty: WrapperTypeRc,
        message: impl Into<String>,
        extra: &[NativeValue],
    ) -> Result<Self> {
        let message = message.into();
        let native = ty.wrapped_class().construct(&message, extra)?;
        Ok(WrapperInstance { ty, message, native })
    }

    /// The wrapper type this instance belongs to
    #[must_use]
    pub fn ty(&self) -> &WrapperTypeRc {
        &self.ty
    }

    /// The message as seen at creation time
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Borrows the underlying native fault.
    #[must_use]
    pub fn native(&self) -> &NativeFaultRc {
        &self.native
    }

    /// Recovers the underlying native fault for the return trip.
    ///
    /// The handle is the exact object that was wrapped; nothing about it was
    /// copied or rewritten during translation.
    #[must_use]
    pub fn into_native(self) -> NativeFaultRc {
        self.native
    }

    /// Looks up a member on the underlying native fault.
    ///
    /// This is the instance-level member-miss path: members not modeled on
    /// the wrapper resolve against the native object, so native accessors
    /// read naturally off the host value. Returns `None` for names the
    /// native fault does not know either.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<NativeValue> {
        self.native.attr(name)
    }

    /// True if this instance's type is the canonical type for `kind` or
    /// descends from it.
    #[must_use]
    pub fn is_kind(&self, kind: WrapperKind) -> bool {
        self.ty.is_kind(kind)
    }

    /// True if this instance is catchable as the host family `category`.
    #[must_use]
    pub fn is_host(&self, category: HostCategory) -> bool {
        self.ty.is_host(category)
    }

    /// True if this instance's type is `ty` or descends from it.
    #[must_use]
    pub fn is_instance_of(&self, ty: &WrapperType) -> bool {
        self.ty.is_subtype_of(ty)
    }

    /// Converts this instance into a standard I/O error.
    ///
    /// Useful at seams that only speak [`std::io::Error`]; the instance is
    /// preserved as the inner error and can be recovered by downcasting.
    #[must_use]
    pub fn into_io_error(self) -> std::io::Error {
        std::io::Error::other(self)
    }
}

impl fmt::Display for WrapperInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.native.as_string())
    }
}

impl fmt::Debug for WrapperInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}('{}')", self.ty.name(), self.native.what())
    }
}

impl std::error::Error for WrapperInstance {}
