//! # faultbridge Prelude
//!
//! This module provides a convenient prelude for the most commonly used types
//! and traits from the faultbridge library. Import this module to get quick
//! access to the essential types for fault translation across a boundary.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all faultbridge operations
pub use crate::Error;

/// The result type used throughout faultbridge
pub use crate::Result;

// ================================================================================================
// Main Entry Points
// ================================================================================================

/// The registry answering every fault translation
pub use crate::registry::WrapperRegistry;

/// Name bindings for boundary-declared wrapper types
pub use crate::registry::Namespace;

// ================================================================================================
// Wrapper Types
// ================================================================================================

/// The host-side wrapper surface: canonical kinds, host error families,
/// type descriptors and translated instances
pub use crate::wrapper::{HostCategory, WrapperInstance, WrapperKind, WrapperType, WrapperTypeRc};

// ================================================================================================
// Native Boundary Contract
// ================================================================================================

/// Per-instance fault contract and shared fault handle
pub use crate::native::{NativeFault, NativeFaultRc};

/// Native class descriptors and the hierarchy the boundary exports
pub use crate::native::{
    NativeClass, NativeClassBuilder, NativeClassRc, NativeHierarchy, NativeTypeId, NativeValue,
};

// ================================================================================================
// Diagnostics
// ================================================================================================

/// Collected, non-fatal translation and registration events
pub use crate::diagnostics::{Diagnostic, DiagnosticCategory, DiagnosticSeverity, Diagnostics};
