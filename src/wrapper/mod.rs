//! The host side of the fault boundary.
//!
//! Wrapper types describe how each native fault class appears to host code,
//! and wrapper instances are the host error values that carry translated
//! faults. The canonical hierarchy is fixed by [`WrapperKind`]; boundaries
//! extend it with [`WrapperType::declared`] types registered through
//! [`crate::WrapperRegistry`].
//!
//! # Key Components
//!
//! - [`WrapperKind`] - The canonical wrapper kinds and their hierarchy
//! - [`HostCategory`] - Standard host error families, with subsumption
//! - [`WrapperType`] / [`WrapperTypeRc`] - Immutable type descriptors
//! - [`WrapperInstance`] - Translated faults, usable as host errors

mod descriptor;
mod instance;
mod kind;

pub use descriptor::{WrapperType, WrapperTypeRc};
pub use instance::WrapperInstance;
pub use kind::{HostCategory, WrapperKind};
