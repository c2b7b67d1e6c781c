//! The native side of the fault boundary.
//!
//! Everything in this module models what the boundary machinery exposes to
//! the translation layer: individual fault objects in flight
//! ([`NativeFault`]), the classes they belong to ([`NativeClass`]), and the
//! registry of all classes the boundary knows about ([`NativeHierarchy`]).
//! The translation layer itself lives in [`crate::wrapper`] and
//! [`crate::registry`] and consumes these types without ever mutating the
//! native objects behind them.
//!
//! # Key Components
//!
//! - [`NativeFault`] / [`NativeFaultRc`] - Per-instance contract and handle
//! - [`NativeValue`] - Plain values crossing the boundary
//! - [`NativeTypeId`] - Stable class identity used as the translation key
//! - [`NativeClass`] / [`NativeClassBuilder`] - Class metadata and assembly
//! - [`NativeHierarchy`] - Identity- and name-indexed class store

mod class;
mod fault;
mod hierarchy;

pub use class::{NativeClass, NativeClassBuilder, NativeClassRc, NativeConstructor, NativeTypeId};
pub use fault::{NativeFault, NativeFaultRc, NativeValue};
pub use hierarchy::NativeHierarchy;
