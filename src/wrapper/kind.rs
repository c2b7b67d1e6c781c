//! The canonical wrapper kinds and their hierarchy.
//!
//! Every boundary ships the same core set of fault types; [`WrapperKind`]
//! enumerates them and fixes their parent relationships once, so the
//! registry can materialize the canonical wrapper types in one pass. Kinds
//! that correspond to a standard host error family additionally carry a
//! [`HostCategory`], which is what makes a translated fault catchable
//! through the host's own taxonomy and not just through this one.

use strum::{Display, EnumCount, EnumIter, IntoStaticStr};

/// Standard host error family a wrapper kind participates in.
///
/// Categories mirror the host language's built-in error taxonomy. A wrapper
/// type inherits the categories of its ancestors, so e.g. a fault translated
/// to [`WrapperKind::OverflowError`] is catchable both as an overflow and as
/// a runtime failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum HostCategory {
    /// General runtime failures
    Runtime,
    /// Arithmetic failures
    Arithmetic,
    /// Arithmetic overflow, a sub-family of [`HostCategory::Arithmetic`]
    Overflow,
    /// Failed lookups of keys or indices
    Lookup,
    /// Input/output failures
    Io,
    /// Operations applied to values of an unsuitable type
    Type,
}

impl HostCategory {
    /// True if catching `self` also catches faults tagged with `other`.
    ///
    /// Categories mostly stand alone; the one subsumption mirrors the host
    /// taxonomy, where overflow is a kind of arithmetic failure.
    #[must_use]
    pub fn includes(self, other: HostCategory) -> bool {
        self == other || (self == HostCategory::Arithmetic && other == HostCategory::Overflow)
    }
}

/// The canonical wrapper kinds.
///
/// Variants are declared parents-first, so iterating with
/// [`strum::IntoEnumIterator`] always yields a kind after every one of its
/// ancestors.
///
/// # Examples
///
/// ```rust
/// use faultbridge::wrapper::{HostCategory, WrapperKind};
///
/// assert_eq!(WrapperKind::OverflowError.parent(), Some(WrapperKind::RuntimeError));
/// assert!(WrapperKind::OverflowError.is_a(WrapperKind::RuntimeError));
/// assert_eq!(
///     WrapperKind::OverflowError.host_category(),
///     Some(HostCategory::Overflow)
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumCount, EnumIter, IntoStaticStr)]
pub enum WrapperKind {
    /// Root of the hierarchy; every other kind descends from it
    Exception,
    /// Violations of preconditions or internal invariants
    LogicError,
    /// Arguments outside the domain of an operation
    DomainError,
    /// Arguments invalid for reasons other than their domain
    InvalidParameterError,
    /// Objects or containers of an unsupported length
    LengthError,
    /// Access outside the valid range of a container
    OutOfRangeError,
    /// Operations applied to values of an unsuitable type
    TypeError,
    /// Failures only detectable while the program runs
    RuntimeError,
    /// Results outside the representable range of a computation
    RangeError,
    /// Arithmetic overflow
    OverflowError,
    /// Arithmetic underflow
    UnderflowError,
    /// Failed lookups of keys, names or indices
    NotFoundError,
    /// Input/output failures
    IoError,
}

impl WrapperKind {
    /// The parent kind, or `None` for [`WrapperKind::Exception`].
    #[must_use]
    pub fn parent(self) -> Option<WrapperKind> {
        match self {
            WrapperKind::Exception => None,
            WrapperKind::LogicError | WrapperKind::RuntimeError => Some(WrapperKind::Exception),
            WrapperKind::DomainError
            | WrapperKind::InvalidParameterError
            | WrapperKind::LengthError
            | WrapperKind::OutOfRangeError
            | WrapperKind::TypeError => Some(WrapperKind::LogicError),
            WrapperKind::RangeError
            | WrapperKind::OverflowError
            | WrapperKind::UnderflowError
            | WrapperKind::NotFoundError
            | WrapperKind::IoError => Some(WrapperKind::RuntimeError),
        }
    }

    /// Short name of the native class this kind wraps by convention.
    #[must_use]
    pub fn native_name(self) -> &'static str {
        self.into()
    }

    /// The standard host error family this kind belongs to directly.
    ///
    /// Ancestors' categories are not repeated here; hierarchy-aware checks
    /// live on the wrapper types themselves.
    #[must_use]
    pub fn host_category(self) -> Option<HostCategory> {
        match self {
            WrapperKind::RuntimeError => Some(HostCategory::Runtime),
            WrapperKind::OverflowError => Some(HostCategory::Overflow),
            WrapperKind::UnderflowError => Some(HostCategory::Arithmetic),
            WrapperKind::NotFoundError => Some(HostCategory::Lookup),
            WrapperKind::IoError => Some(HostCategory::Io),
            WrapperKind::TypeError => Some(HostCategory::Type),
            _ => None,
        }
    }

    /// True if `self` is `ancestor` or descends from it.
    #[must_use]
    pub fn is_a(self, ancestor: WrapperKind) -> bool {
        let mut current = Some(self);
        while let Some(kind) = current {
            if kind == ancestor {
                return true;
            }
            current = kind.parent();
        }
        false
    }
}
