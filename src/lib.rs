// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![allow(dead_code)]

//! # faultbridge
//!
//! [![Crates.io](https://img.shields.io/crates/v/faultbridge.svg)](https://crates.io/crates/faultbridge)
//! [![Documentation](https://docs.rs/faultbridge/badge.svg)](https://docs.rs/faultbridge)
//! [![License](https://img.shields.io/badge/license-Apache--2.0-blue.svg)](https://github.com/BinFlip/faultbridge/blob/main/LICENSE-APACHE)
//!
//! A thread-safe translation layer for fault objects crossing a language boundary.
//! `faultbridge` turns native faults (typically C++ exceptions surfaced through FFI
//! machinery) into first-class host error values that slot into the host's own error
//! hierarchy, without ever copying or rewriting the original fault object - the native
//! fault stays alive inside its wrapper and can be recovered losslessly for the
//! return trip across the boundary.
//!
//! ## Features
//!
//! - **🔁 Lossless translation** - Wrappers keep a handle to the original native fault; nothing is flattened to a string
//! - **🌳 Canonical hierarchy** - Thirteen builtin wrapper kinds mirroring the standard native fault taxonomy
//! - **🏷️ Host catchability** - Translated faults participate in standard host error families, with subsumption
//! - **🧩 Runtime extension** - Boundaries register and declare new wrapper types while translation is in flight
//! - **🛡️ Non-failing by design** - Unmapped fault classes degrade to the hierarchy root and a collected warning
//! - **⚡ Fully concurrent** - Lock-free registry reads and appends, safe to share across threads
//!
//! ## Quick Start
//!
//! Add `faultbridge` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! faultbridge = "0.2"
//! ```
//!
//! ### Using the Prelude
//!
//! For convenient access to the most commonly used types, import the prelude:
//!
//! ```rust
//! use faultbridge::prelude::*;
//! use std::sync::Arc;
//! use strum::IntoEnumIterator;
//!
//! // The boundary's side of the contract: fault objects...
//! #[derive(Debug)]
//! struct PortFault;
//!
//! impl NativeFault for PortFault {
//!     fn class_id(&self) -> NativeTypeId {
//!         NativeTypeId::new("cpp::IoError")
//!     }
//!
//!     fn what(&self) -> &str {
//!         "port closed"
//!     }
//!
//!     fn as_string(&self) -> String {
//!         "IoError: port closed".to_string()
//!     }
//! }
//!
//! // ...and the classes they belong to.
//! let hierarchy = NativeHierarchy::new();
//! for kind in WrapperKind::iter() {
//!     hierarchy.insert(
//!         NativeClassBuilder::new(
//!             NativeTypeId::new(format!("cpp::{}", kind.native_name())),
//!             kind.native_name(),
//!         )
//!         .build(),
//!     );
//! }
//!
//! // Translate a fault caught at the boundary.
//! let registry = WrapperRegistry::new(&hierarchy)?;
//! let caught = registry.translate(Arc::new(PortFault));
//!
//! assert_eq!(caught.ty().name(), "IoError");
//! assert!(caught.is_kind(WrapperKind::RuntimeError));
//! assert!(caught.is_host(HostCategory::Io));
//! # Ok::<(), faultbridge::Error>(())
//! ```
//!
//! ## Architecture
//!
//! `faultbridge` is organized into several key modules:
//!
//! - [`prelude`] - Convenient re-exports of commonly used types and traits
//! - [`native`] - The native side: fault objects, fault classes, and the class hierarchy
//! - [`wrapper`] - The host side: wrapper type descriptors and translated fault instances
//! - [`registry`] - The [`WrapperRegistry`] tying both sides together, plus [`Namespace`] bindings
//! - [`diagnostics`] - Collected, non-fatal translation and registration events
//! - [`Error`] and [`Result`] - Error handling for the two genuinely fallible paths
//!
//! ### Translation
//!
//! The [`WrapperRegistry`] is the main entry point. Built once against the boundary's
//! [`native::NativeHierarchy`], it materializes one wrapper type per [`WrapperKind`]
//! and then answers every crossing:
//!
//! - **Catching**: [`WrapperRegistry::translate`] maps a fault's class identity to its
//!   wrapper type and wraps the fault without copying it
//! - **Raising**: [`WrapperInstance::construct`] drives the registered native
//!   constructor, so host-raised boundary faults are real native faults
//! - **Returning**: [`WrapperInstance::into_native`] hands back the untouched
//!   original for rethrow on the native side
//!
//! ### Extension
//!
//! Boundary modules grow the hierarchy at runtime: [`WrapperRegistry::register`]
//! maps an additional native class to a wrapper type, and
//! [`WrapperRegistry::declare`] builds, registers, and publishes a new wrapper type
//! below any existing one in a single call.
//!
//! ## Error Handling
//!
//! Translation never fails; the fallible operations return
//! [`Result<T, Error>`](Result):
//!
//! ```rust
//! use faultbridge::{Error, NativeHierarchy, WrapperRegistry};
//!
//! match WrapperRegistry::new(&NativeHierarchy::new()) {
//!     Ok(registry) => println!("{} wrapper types installed", registry.len()),
//!     Err(Error::MissingNativeClass(name)) => println!("boundary never exported `{name}`"),
//!     Err(e) => println!("other error: {e}"),
//! }
//! ```
//!
//! ## Thread Safety
//!
//! Every shared structure takes `&self`: registries, namespaces, hierarchies and
//! diagnostic sinks can be wrapped in an [`std::sync::Arc`] and used from any number
//! of threads, with registrations and translations interleaving freely.

pub(crate) mod error;

/// Shared functionality which is used in unit-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and traits.
///
/// This module provides a curated selection of the most frequently used types
/// from across the faultbridge library, allowing for convenient glob imports.
///
/// # Example
///
/// ```rust
/// use faultbridge::prelude::*;
///
/// // Now you have access to the most common types
/// let namespace = Namespace::new();
/// assert!(namespace.is_empty());
/// ```
pub mod prelude;

/// Collected, non-fatal events observed while faults cross the boundary.
///
/// Translation is deliberately non-failing, so everything that would be a
/// soft failure elsewhere (unmapped fault classes, replaced registrations)
/// lands here instead. See [`diagnostics::Diagnostics`].
pub mod diagnostics;

/// The native side of the boundary: fault objects, their classes, and the
/// class hierarchy the boundary exports.
///
/// # Example
///
/// ```rust
/// use faultbridge::native::{NativeClassBuilder, NativeHierarchy, NativeTypeId};
///
/// let hierarchy = NativeHierarchy::new();
/// hierarchy.insert(
///     NativeClassBuilder::new(NativeTypeId::new("cpp::RangeError"), "RangeError").build(),
/// );
/// assert_eq!(hierarchy.len(), 1);
/// ```
pub mod native;

/// The registry mapping native fault classes to wrapper types, and the
/// namespaces declared types are published into.
pub mod registry;

/// The host side of the boundary: wrapper type descriptors, the canonical
/// kind hierarchy, and translated fault instances.
pub mod wrapper;

/// `faultbridge` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
/// This is used consistently throughout the crate for all fallible operations.
///
/// # Examples
///
/// ```rust
/// use faultbridge::{NativeHierarchy, Result, WrapperRegistry};
///
/// fn build_registry(hierarchy: &NativeHierarchy) -> Result<WrapperRegistry> {
///     WrapperRegistry::new(hierarchy)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `faultbridge` Error type
///
/// The main error type for all operations in this crate. Covers wiring up the
/// builtin wrapper hierarchy and synthesizing native faults from host code;
/// translation itself never fails.
///
/// # Examples
///
/// ```rust
/// use faultbridge::{Error, NativeHierarchy, WrapperRegistry};
///
/// match WrapperRegistry::new(&NativeHierarchy::new()) {
///     Ok(_) => println!("registry ready"),
///     Err(Error::MissingNativeClass(name)) => println!("missing class: {name}"),
///     Err(e) => println!("error: {e}"),
/// }
/// ```
pub use error::Error;

/// Main entry point for fault translation.
///
/// [`WrapperRegistry`] maps native fault class identities to wrapper types;
/// [`Namespace`] holds the name bindings of boundary-declared types.
///
/// # Example
///
/// ```rust
/// use faultbridge::{Namespace, NativeHierarchy, WrapperRegistry};
///
/// let result = WrapperRegistry::new(&NativeHierarchy::new());
/// assert!(result.is_err()); // an empty hierarchy exports no canonical classes
/// ```
pub use registry::{Namespace, WrapperRegistry};

/// Wrapper types and translated fault instances.
///
/// These types form the host-visible surface of a translated fault:
/// - [`WrapperKind`] - The canonical wrapper kinds and their fixed hierarchy
/// - [`HostCategory`] - Standard host error families, with subsumption
/// - [`WrapperType`] - Immutable descriptor of one translatable fault type
/// - [`WrapperInstance`] - A translated fault, usable as a host error value
pub use wrapper::{HostCategory, WrapperInstance, WrapperKind, WrapperType, WrapperTypeRc};

/// Native boundary contract types.
///
/// Everything the boundary implements or populates so its faults can be
/// translated: the per-instance [`NativeFault`] trait, class descriptors and
/// their builder, and the [`NativeHierarchy`] handed to
/// [`WrapperRegistry::new`].
pub use native::{
    NativeClass, NativeClassBuilder, NativeClassRc, NativeFault, NativeFaultRc, NativeHierarchy,
    NativeTypeId, NativeValue,
};
