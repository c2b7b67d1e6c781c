//! Shared boundary simulation for the integration suites.
//!
//! Stands in for the native side of a real boundary: fault objects with a
//! class identity and two text forms, native classes with working
//! constructor thunks, and a fully populated class hierarchy covering the
//! canonical wrapper kinds.
#![allow(dead_code)]

use std::sync::Arc;

use faultbridge::prelude::*;
use strum::IntoEnumIterator;

/// Native fault double used by the integration suites.
///
/// The formatted form prefixes the class name, so tests can tell the bare
/// message and the full representation apart.
#[derive(Debug)]
pub struct BoundaryFault {
    class_id: NativeTypeId,
    class_name: String,
    message: String,
    args: Vec<NativeValue>,
}

impl BoundaryFault {
    /// Raises a fault of the given class, as the native side would.
    pub fn raise(class_name: &str, message: &str) -> NativeFaultRc {
        Self::raise_with(class_name, message, &[])
    }

    /// Raises a fault carrying extra constructor arguments.
    pub fn raise_with(class_name: &str, message: &str, args: &[NativeValue]) -> NativeFaultRc {
        Arc::new(BoundaryFault {
            class_id: class_id(class_name),
            class_name: class_name.to_string(),
            message: message.to_string(),
            args: args.to_vec(),
        })
    }
}

impl NativeFault for BoundaryFault {
    fn class_id(&self) -> NativeTypeId {
        self.class_id.clone()
    }

    fn what(&self) -> &str {
        &self.message
    }

    fn as_string(&self) -> String {
        format!("{}: {}", self.class_name, self.message)
    }

    fn attr(&self, name: &str) -> Option<NativeValue> {
        match name {
            "arg_count" => Some(NativeValue::Int(self.args.len() as i64)),
            "class_name" => Some(NativeValue::from(self.class_name.as_str())),
            "first_arg" => self.args.first().cloned(),
            _ => None,
        }
    }
}

/// Identity the simulated boundary assigns to a class name.
pub fn class_id(name: &str) -> NativeTypeId {
    NativeTypeId::new(format!("cpp::{name}"))
}

/// A native class whose constructor produces [`BoundaryFault`]s.
///
/// Carries a `domain` class attribute holding its own name.
pub fn native_class(name: &str) -> NativeClassRc {
    let class_name = name.to_string();
    NativeClassBuilder::new(class_id(name), name)
        .constructor(move |message, extra| {
            Ok(BoundaryFault::raise_with(&class_name, message, extra))
        })
        .attribute("domain", NativeValue::from(name))
        .build()
}

/// A native class whose constructor insists on an exact extra argument count.
pub fn native_class_with_arity(name: &str, arity: usize) -> NativeClassRc {
    let class_name = name.to_string();
    NativeClassBuilder::new(class_id(name), name)
        .constructor(move |message, extra| {
            if extra.len() == arity {
                Ok(BoundaryFault::raise_with(&class_name, message, extra))
            } else {
                Err(Error::Construction {
                    class: class_name.clone(),
                    message: format!(
                        "constructor takes {arity} extra argument(s), got {}",
                        extra.len()
                    ),
                })
            }
        })
        .build()
}

/// A hierarchy exporting one native class per canonical wrapper kind.
pub fn boundary_hierarchy() -> NativeHierarchy {
    let hierarchy = NativeHierarchy::new();
    for kind in WrapperKind::iter() {
        hierarchy.insert(native_class(kind.native_name()));
    }
    hierarchy
}
