//! Native fault classes: identity, construction, and static attributes.
//!
//! A [`NativeClass`] is the class-level counterpart of a [`crate::native::NativeFault`]
//! instance. Where the fault trait describes one object in flight, the class
//! describes the native type itself: its stable identity, a constructor thunk
//! the boundary registers so host code can synthesize fresh native faults, and
//! the class-level attribute table consulted by the wrapper's member-miss
//! delegation.
//!
//! Classes are assembled with [`NativeClassBuilder`] and shared as
//! [`NativeClassRc`] handles; once built they are immutable.

use std::{collections::HashMap, fmt, sync::Arc};

use crate::{
    native::{NativeFaultRc, NativeValue},
    Error, Result,
};

/// Shared handle to a native fault class.
pub type NativeClassRc = Arc<NativeClass>;

/// Constructor thunk registered by the boundary for one native class.
///
/// Takes the message plus any extra positional arguments and produces a fresh
/// native fault of that class, or a [`crate::Error::Construction`] if the
/// arguments do not fit any native constructor.
pub type NativeConstructor =
    dyn Fn(&str, &[NativeValue]) -> Result<NativeFaultRc> + Send + Sync;

/// Stable identity of a native fault class.
///
/// The boundary chooses the representation (typically the mangled or
/// demangled native type name); this layer only requires that it is unique
/// per class and identical across all instances of that class. Identifiers
/// are cheap to clone and usable directly as ordered map keys.
///
/// # Examples
///
/// ```rust
/// use faultbridge::native::NativeTypeId;
///
/// let id = NativeTypeId::new("cpp::OutOfRangeError");
/// assert_eq!(id.as_str(), "cpp::OutOfRangeError");
/// assert_eq!(id, NativeTypeId::new("cpp::OutOfRangeError"));
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NativeTypeId(Arc<str>);

impl NativeTypeId {
    /// Create a new identifier from its textual form
    #[must_use]
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        NativeTypeId(id.into())
    }

    /// The textual form of the identifier
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NativeTypeId {
    fn from(id: &str) -> Self {
        NativeTypeId::new(id)
    }
}

impl From<String> for NativeTypeId {
    fn from(id: String) -> Self {
        NativeTypeId::new(id)
    }
}

impl fmt::Display for NativeTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for NativeTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NativeTypeId({})", self.0)
    }
}

/// A native fault class registered with the boundary.
///
/// Carries everything the translation layer needs to know about one native
/// type: the identity its instances report, a short display name, the
/// constructor thunk used when host code builds a fresh native fault, and
/// class-level attributes (error codes, category tags) exposed through
/// wrapper types.
///
/// # Thread Safety
///
/// Instances are immutable after construction and safe to share across
/// threads behind their [`NativeClassRc`] handle.
pub struct NativeClass {
    /// Identity reported by instances of this class
    id: NativeTypeId,
    /// Short display name, e.g. `OutOfRangeError`
    name: String,
    /// Constructor thunk producing fresh native faults of this class
    constructor: Box<NativeConstructor>,
    /// Class-level attribute table
    attributes: HashMap<String, NativeValue>,
}

impl NativeClass {
    /// The identity instances of this class report
    #[must_use]
    pub fn id(&self) -> &NativeTypeId {
        &self.id
    }

    /// The short display name of this class
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Constructs a fresh native fault of this class.
    ///
    /// Invokes the constructor thunk the boundary registered. The extra
    /// arguments are forwarded verbatim; this layer performs no validation
    /// of its own, so argument mismatches surface as whatever error the
    /// thunk reports.
    ///
    /// # Arguments
    ///
    /// * `message` - The fault message
    /// * `extra` - Additional positional constructor arguments
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Construction`] when the thunk rejects the
    /// arguments, or when the class was built without a constructor.
    pub fn construct(&self, message: &str, extra: &[NativeValue]) -> Result<NativeFaultRc> {
        (self.constructor)(message, extra)
    }

    /// Looks up a class-level attribute by name.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&NativeValue> {
        self.attributes.get(name)
    }
}

impl fmt::Debug for NativeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeClass")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("attributes", &self.attributes.len())
            .finish_non_exhaustive()
    }
}

/// Builder for [`NativeClass`] instances.
///
/// # Examples
///
/// ```rust
/// use faultbridge::native::{NativeClassBuilder, NativeTypeId, NativeValue};
///
/// let class = NativeClassBuilder::new(NativeTypeId::new("cpp::IoError"), "IoError")
///     .attribute("errno_base", NativeValue::Int(5))
///     .build();
///
/// assert_eq!(class.name(), "IoError");
/// assert_eq!(class.attr("errno_base"), Some(&NativeValue::Int(5)));
/// ```
pub struct NativeClassBuilder {
    id: NativeTypeId,
    name: String,
    constructor: Option<Box<NativeConstructor>>,
    attributes: HashMap<String, NativeValue>,
}

impl NativeClassBuilder {
    /// Create a new builder for the class with the given identity and name
    #[must_use]
    pub fn new(id: NativeTypeId, name: impl Into<String>) -> Self {
        NativeClassBuilder {
            id,
            name: name.into(),
            constructor: None,
            attributes: HashMap::new(),
        }
    }

    /// Registers the constructor thunk for this class.
    ///
    /// The thunk receives the message and any extra positional arguments and
    /// must either produce a fresh native fault or report why the arguments
    /// do not fit.
    #[must_use]
    pub fn constructor<F>(mut self, thunk: F) -> Self
    where
        F: Fn(&str, &[NativeValue]) -> Result<NativeFaultRc> + Send + Sync + 'static,
    {
        self.constructor = Some(Box::new(thunk));
        self
    }

    /// Adds a class-level attribute.
    #[must_use]
    pub fn attribute(mut self, name: impl Into<String>, value: NativeValue) -> Self {
        self.attributes.insert(name.into(), value);
        self
    }

    /// Finalizes the class.
    ///
    /// A class built without a constructor still translates normally; only
    /// host-side construction is affected, failing with
    /// [`crate::Error::Construction`] at the point of use.
    #[must_use]
    pub fn build(self) -> NativeClassRc {
        let NativeClassBuilder {
            id,
            name,
            constructor,
            attributes,
        } = self;

        let constructor: Box<NativeConstructor> = match constructor {
            Some(thunk) => thunk,
            None => {
                let class = name.clone();
                Box::new(move |_: &str, _: &[NativeValue]| {
                    Err(Error::Construction {
                        class: class.clone(),
                        message: "no constructor registered for this class".to_string(),
                    })
                })
            }
        };

        Arc::new(NativeClass {
            id,
            name,
            constructor,
            attributes,
        })
    }
}
