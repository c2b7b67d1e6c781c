use std::sync::Arc;

use strum::IntoEnumIterator;

use crate::{
    native::{
        NativeClassBuilder, NativeClassRc, NativeFault, NativeFaultRc, NativeHierarchy,
        NativeTypeId, NativeValue,
    },
    wrapper::WrapperKind,
    Error,
};

/// Standard native fault double.
///
/// `as_string` prefixes the class name, so the bare message and the full
/// formatted form are distinguishable in assertions.
#[derive(Debug)]
pub struct StubFault {
    pub class_id: NativeTypeId,
    pub class_name: String,
    pub message: String,
    pub args: Vec<NativeValue>,
}

impl StubFault {
    pub fn new(class_name: &str, message: &str) -> Self {
        StubFault {
            class_id: test_class_id(class_name),
            class_name: class_name.to_string(),
            message: message.to_string(),
            args: Vec::new(),
        }
    }
}

impl NativeFault for StubFault {
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
            _ => None,
        }
    }
}

/// Fault double whose formatted form carries a propagation trace on top of
/// the bare message.
#[derive(Debug)]
pub struct TracedFault {
    pub class_id: NativeTypeId,
    pub message: String,
    pub trace: String,
}

impl TracedFault {
    pub fn new(message: &str, trace: &str) -> Self {
        TracedFault {
            class_id: test_class_id("Exception"),
            message: message.to_string(),
            trace: trace.to_string(),
        }
    }
}

impl NativeFault for TracedFault {
    fn class_id(&self) -> NativeTypeId {
        self.class_id.clone()
    }

    fn what(&self) -> &str {
        &self.message
    }

    fn as_string(&self) -> String {
        format!("{}\n  in {}", self.message, self.trace)
    }

    fn attr(&self, name: &str) -> Option<NativeValue> {
        (name == "trace").then(|| NativeValue::from(self.trace.as_str()))
    }
}

// Helper function to build the identity used for test classes
pub fn test_class_id(name: &str) -> NativeTypeId {
    NativeTypeId::new(format!("test::{name}"))
}

// Helper function to create a test class whose constructor produces StubFaults
pub fn create_class(name: &str) -> NativeClassRc {
    let class_name = name.to_string();
    NativeClassBuilder::new(test_class_id(name), name)
        .constructor(move |message, extra| {
            let mut fault = StubFault::new(&class_name, message);
            fault.args = extra.to_vec();
            Ok(Arc::new(fault) as NativeFaultRc)
        })
        .attribute("category", NativeValue::from(name))
        .build()
}

// Helper function to create a test class that rejects extra constructor arguments
pub fn create_strict_class(name: &str) -> NativeClassRc {
    let class_name = name.to_string();
    NativeClassBuilder::new(test_class_id(name), name)
        .constructor(move |message, extra| {
            if extra.is_empty() {
                Ok(Arc::new(StubFault::new(&class_name, message)) as NativeFaultRc)
            } else {
                Err(Error::Construction {
                    class: class_name.clone(),
                    message: format!("constructor takes no extra arguments, got {}", extra.len()),
                })
            }
        })
        .build()
}

// Helper function to create a hierarchy with one test class per canonical kind
pub fn create_hierarchy() -> NativeHierarchy {
    let hierarchy = NativeHierarchy::new();
    for kind in WrapperKind::iter() {
        hierarchy.insert(create_class(kind.native_name()));
    }
    hierarchy
}
