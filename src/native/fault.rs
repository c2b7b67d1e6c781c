//! Native fault instances and the values that cross the boundary with them.
//!
//! This module defines the per-instance contract the native side of the
//! boundary must satisfy so its faults can be translated: a stable runtime
//! type identity, the bare message, the full formatted representation, and a
//! name-indexed attribute lookup. Everything else about a native fault stays
//! opaque; this layer never mutates the object it wraps.
//!
//! # Key Components
//!
//! - [`NativeFault`] - Trait implemented by the boundary for each fault object
//! - [`NativeFaultRc`] - Shared handle to a fault crossing the boundary
//! - [`NativeValue`] - Constructor arguments and attribute values in transit
//!
//! # Examples
//!
//! A boundary implementation exposes its fault objects like this:
//!
//! ```rust
//! use faultbridge::native::{NativeFault, NativeTypeId, NativeValue};
//!
//! #[derive(Debug)]
//! struct RangeFault {
//!     message: String,
//!     index: i64,
//! }
//!
//! impl NativeFault for RangeFault {
//!     fn class_id(&self) -> NativeTypeId {
//!         NativeTypeId::new("cpp::RangeError")
//!     }
//!
//!     fn what(&self) -> &str {
//!         &self.message
//!     }
//!
//!     fn as_string(&self) -> String {
//!         format!("RangeError: {}", self.message)
//!     }
//!
//!     fn attr(&self, name: &str) -> Option<NativeValue> {
//!         match name {
//!             "index" => Some(NativeValue::Int(self.index)),
//!             _ => None,
//!         }
//!     }
//! }
//! ```

use std::{fmt, sync::Arc};

use crate::native::NativeTypeId;

/// Shared handle to a native fault object.
///
/// Faults are reference counted so a wrapper instance can hold the original
/// object for its whole lifetime while the boundary keeps its own handle
/// for the return trip.
pub type NativeFaultRc = Arc<dyn NativeFault>;

/// A fault object originating on the native side of the boundary.
///
/// The trait is the full per-instance surface this layer consumes: identity
/// for registry lookup, two text forms, and a dynamic attribute lookup that
/// backs the wrapper's member-miss delegation. Implementations are owned by
/// the boundary machinery; this crate only reads through the trait.
///
/// # Thread Safety
///
/// Implementations must be [`Send`] and [`Sync`]: a translated fault may be
/// propagated across threads by host code like any other error value.
pub trait NativeFault: fmt::Debug + Send + Sync {
    /// Exact runtime type identity of this fault.
    ///
    /// Used as the registry key during translation. Two faults of the same
    /// native type must report the same identity; subtypes must not report
    /// their parent's.
    fn class_id(&self) -> NativeTypeId;

    /// The bare human-readable message.
    fn what(&self) -> &str;

    /// The full formatted representation.
    ///
    /// May carry more than the message, e.g. a context trace accumulated
    /// while the fault propagated through native frames. This is what a
    /// wrapper instance displays as.
    fn as_string(&self) -> String;

    /// Looks up an attribute on the fault instance by name.
    ///
    /// Backs the wrapper instance's member-miss delegation: anything not
    /// modeled on the wrapper itself is forwarded here. Returns `None` for
    /// unknown names, which the caller surfaces as the host-standard
    /// "attribute not found" outcome.
    fn attr(&self, name: &str) -> Option<NativeValue> {
        let _ = name;
        None
    }
}

/// A plain value crossing the boundary.
///
/// Used for extra native constructor arguments and for class- or
/// instance-level attributes surfaced through the delegation paths.
#[derive(Debug, Clone, PartialEq)]
pub enum NativeValue {
    /// Boolean value
    Bool(bool),
    /// Integer value (all native integer widths normalize to 64 bit here)
    Int(i64),
    /// Floating point value
    Float(f64),
    /// String value
    Str(String),
}

impl NativeValue {
    /// Try to convert to a boolean value
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            NativeValue::Bool(value) => Some(*value),
            NativeValue::Int(value) => Some(*value != 0),
            _ => None,
        }
    }

    /// Try to convert to an integer value
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            NativeValue::Bool(value) => Some(i64::from(*value)),
            NativeValue::Int(value) => Some(*value),
            #[allow(clippy::cast_precision_loss)]
            NativeValue::Float(value) => {
                // i64::MAX rounds up to 2^63 as f64, so the upper bound must
                // be exclusive.
                if value.is_finite()
                    && *value >= i64::MIN as f64
                    && *value < 9_223_372_036_854_775_808.0
                {
                    #[allow(clippy::cast_possible_truncation)]
                    Some(*value as i64)
                } else {
                    None
                }
            }
            NativeValue::Str(_) => None,
        }
    }

    /// Try to convert to a floating point value
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            NativeValue::Bool(value) => Some(f64::from(*value)),
            #[allow(clippy::cast_precision_loss)]
            NativeValue::Int(value) => Some(*value as f64),
            NativeValue::Float(value) => Some(*value),
            NativeValue::Str(_) => None,
        }
    }

    /// Borrow the string value, if this is one
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            NativeValue::Str(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for NativeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NativeValue::Bool(value) => write!(f, "{value}"),
            NativeValue::Int(value) => write!(f, "{value}"),
            NativeValue::Float(value) => write!(f, "{value}"),
            NativeValue::Str(value) => write!(f, "{value}"),
        }
    }
}

impl From<bool> for NativeValue {
    fn from(value: bool) -> Self {
        NativeValue::Bool(value)
    }
}

impl From<i32> for NativeValue {
    fn from(value: i32) -> Self {
        NativeValue::Int(i64::from(value))
    }
}

impl From<i64> for NativeValue {
    fn from(value: i64) -> Self {
        NativeValue::Int(value)
    }
}

impl From<f64> for NativeValue {
    fn from(value: f64) -> Self {
        NativeValue::Float(value)
    }
}

impl From<&str> for NativeValue {
    fn from(value: &str) -> Self {
        NativeValue::Str(value.to_string())
    }
}

impl From<String> for NativeValue {
    fn from(value: String) -> Self {
        NativeValue::Str(value)
    }
}
