//! Diagnostics collection for fault translation and wrapper registration.
//!
//! This module provides types for collecting and reporting diagnostic messages
//! while faults cross the boundary. Translation is deliberately non-failing:
//! an unmapped native fault type degrades to the base wrapper type rather than
//! aborting propagation, and the degradation is reported here instead of being
//! raised or silently dropped.
//!
//! # Architecture
//!
//! The diagnostics sink is owned by the [`crate::WrapperRegistry`] and shared
//! with whatever boundary machinery drives translation:
//! - **Translation**: reports unmapped native fault types (one warning each)
//! - **Registration**: reports replaced registry entries (last writer wins)
//! - **Declaration**: reports dynamically declared wrapper types
//!
//! The [`Diagnostics`] container uses `boxcar::Vec` for thread-safe, lock-free
//! append operations, so faults translated on multiple threads can report
//! concurrently without synchronization overhead.
//!
//! # Key Components
//!
//! - [`Diagnostics`] - Thread-safe container for diagnostic entries
//! - [`Diagnostic`] - Individual diagnostic entry with severity and context
//! - [`DiagnosticSeverity`] - Severity level (Info, Warning, Error)
//! - [`DiagnosticCategory`] - Category of the diagnostic source
//!
//! # Usage Examples
//!
//! ```rust
//! use faultbridge::diagnostics::{Diagnostics, DiagnosticCategory};
//! use std::sync::Arc;
//!
//! let diagnostics = Arc::new(Diagnostics::new());
//!
//! // Report an unmapped fault type
//! diagnostics.warning(
//!     DiagnosticCategory::Translation,
//!     "no wrapper type registered for native fault class",
//! );
//!
//! // Report a replaced registration
//! diagnostics.info(
//!     DiagnosticCategory::Registration,
//!     "wrapper `RetryError` replaces `TransientError`",
//! );
//!
//! assert!(diagnostics.has_warnings());
//! assert_eq!(diagnostics.warning_count(), 1);
//!
//! for entry in diagnostics.iter() {
//!     println!("[{}] {}: {}", entry.severity, entry.category, entry.message);
//! }
//! ```
//!
//! # Thread Safety
//!
//! All types in this module are [`Send`] and [`Sync`]. Multiple threads can
//! safely add diagnostics simultaneously without coordination.

use std::fmt;

use crate::native::NativeTypeId;

/// Severity level of a diagnostic entry.
///
/// Determines how the diagnostic should be treated and displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticSeverity {
    /// Informational message, not indicating a problem.
    ///
    /// Used for noting unusual but valid events, such as a registry
    /// entry being replaced by a later registration.
    Info,

    /// Warning about degraded translation.
    ///
    /// The fault is still delivered to the host side, but some
    /// information was lost; typically the specific wrapper type could
    /// not be determined and the base type was used instead.
    Warning,

    /// Error reported by boundary machinery.
    ///
    /// Translation itself never produces this severity; it is available
    /// to boundary code that shares the sink and needs to record hard
    /// failures alongside translation diagnostics.
    Error,
}

impl fmt::Display for DiagnosticSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticSeverity::Info => write!(f, "INFO"),
            DiagnosticSeverity::Warning => write!(f, "WARN"),
            DiagnosticSeverity::Error => write!(f, "ERROR"),
        }
    }
}

/// Category indicating the source or type of diagnostic.
///
/// Helps classify diagnostics for filtering and reporting. `Construction`
/// and `General` are not emitted by this crate; they are vocabulary for
/// boundary machinery sharing the sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCategory {
    /// Issues found while translating a native fault into a wrapper instance.
    ///
    /// Examples: no wrapper type registered for the exact native class.
    Translation,

    /// Issues found while registering wrapper types.
    ///
    /// Examples: an existing registry entry replaced by a later registration.
    Registration,

    /// Events from dynamic wrapper type declaration.
    ///
    /// Examples: an extension module declaring a new wrapper type at load time.
    Declaration,

    /// Issues from native fault construction.
    ///
    /// Examples: constructor argument arity or type mismatches reported by
    /// boundary code.
    Construction,

    /// General events not fitting other categories.
    General,
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticCategory::Translation => write!(f, "Translation"),
            DiagnosticCategory::Registration => write!(f, "Registration"),
            DiagnosticCategory::Declaration => write!(f, "Declaration"),
            DiagnosticCategory::Construction => write!(f, "Construction"),
            DiagnosticCategory::General => write!(f, "General"),
        }
    }
}

/// A single diagnostic entry with context information.
///
/// Contains the severity, category, message, and optional context
/// identifying the native class and wrapper type involved.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Severity level of this diagnostic.
    pub severity: DiagnosticSeverity,

    /// Category indicating the source of this diagnostic.
    pub category: DiagnosticCategory,

    /// Human-readable description of the event.
    pub message: String,

    /// Optional native class identity related to the event.
    pub class_id: Option<NativeTypeId>,

    /// Optional wrapper type name related to the event.
    pub wrapper: Option<String>,
}

impl Diagnostic {
    /// Creates a new diagnostic entry.
    ///
    /// # Arguments
    ///
    /// * `severity` - Severity level of the diagnostic
    /// * `category` - Category of the diagnostic source
    /// * `message` - Human-readable description
    pub fn new(
        severity: DiagnosticSeverity,
        category: DiagnosticCategory,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            category,
            message: message.into(),
            class_id: None,
            wrapper: None,
        }
    }

    /// Adds native class identity to the diagnostic.
    #[must_use]
    pub fn with_class_id(mut self, class_id: NativeTypeId) -> Self {
        self.class_id = Some(class_id);
        self
    }

    /// Adds a wrapper type name to the diagnostic.
    #[must_use]
    pub fn with_wrapper(mut self, wrapper: impl Into<String>) -> Self {
        self.wrapper = Some(wrapper.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.category, self.message)?;

        if let Some(class_id) = &self.class_id {
            write!(f, " (class: {})", class_id)?;
        }

        if let Some(wrapper) = &self.wrapper {
            write!(f, " (wrapper: {})", wrapper)?;
        }

        Ok(())
    }
}

/// Thread-safe container for collecting diagnostic entries.
///
/// Uses `boxcar::Vec` internally for lock-free concurrent append operations.
/// Multiple threads can safely add diagnostics simultaneously.
///
/// # Example
///
/// ```rust
/// use faultbridge::diagnostics::{Diagnostics, DiagnosticCategory};
/// use std::sync::Arc;
///
/// let diagnostics = Arc::new(Diagnostics::new());
///
/// // Can be cloned and shared across threads
/// let diag_clone = Arc::clone(&diagnostics);
/// std::thread::spawn(move || {
///     diag_clone.warning(DiagnosticCategory::Translation, "unmapped fault class");
/// });
///
/// // Original can still be used
/// diagnostics.info(DiagnosticCategory::Registration, "entry replaced");
/// ```
#[derive(Debug)]
pub struct Diagnostics {
    entries: boxcar::Vec<Diagnostic>,
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::new()
    }
}

impl Diagnostics {
    /// Creates a new empty diagnostics container.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: boxcar::Vec::new(),
        }
    }

    /// Adds an informational diagnostic.
    ///
    /// # Arguments
    ///
    /// * `category` - Category of the diagnostic
    /// * `message` - Description of the observation
    pub fn info(&self, category: DiagnosticCategory, message: impl Into<String>) {
        self.push(Diagnostic::new(DiagnosticSeverity::Info, category, message));
    }

    /// Adds a warning diagnostic.
    ///
    /// # Arguments
    ///
    /// * `category` - Category of the diagnostic
    /// * `message` - Description of the issue
    pub fn warning(&self, category: DiagnosticCategory, message: impl Into<String>) {
        self.push(Diagnostic::new(
            DiagnosticSeverity::Warning,
            category,
            message,
        ));
    }

    /// Adds an error diagnostic.
    ///
    /// # Arguments
    ///
    /// * `category` - Category of the diagnostic
    /// * `message` - Description of the error
    pub fn error(&self, category: DiagnosticCategory, message: impl Into<String>) {
        self.push(Diagnostic::new(
            DiagnosticSeverity::Error,
            category,
            message,
        ));
    }

    /// Adds a diagnostic entry directly.
    ///
    /// Use this for diagnostics that need additional context like the
    /// native class identity or the wrapper type name.
    pub fn push(&self, diagnostic: Diagnostic) {
        self.entries.push(diagnostic);
    }

    /// Returns true if any diagnostics have been collected.
    pub fn has_any(&self) -> bool {
        self.entries.count() > 0
    }

    /// Returns true if any error-level diagnostics have been collected.
    pub fn has_errors(&self) -> bool {
        self.entries
            .iter()
            .any(|(_, d)| d.severity == DiagnosticSeverity::Error)
    }

    /// Returns true if any warning-level diagnostics have been collected.
    pub fn has_warnings(&self) -> bool {
        self.entries
            .iter()
            .any(|(_, d)| d.severity == DiagnosticSeverity::Warning)
    }

    /// Returns the total number of diagnostics.
    pub fn count(&self) -> usize {
        self.entries.count()
    }

    /// Returns the number of error-level diagnostics.
    pub fn error_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, d)| d.severity == DiagnosticSeverity::Error)
            .count()
    }

    /// Returns the number of warning-level diagnostics.
    pub fn warning_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, d)| d.severity == DiagnosticSeverity::Warning)
            .count()
    }

    /// Returns the number of info-level diagnostics.
    pub fn info_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, d)| d.severity == DiagnosticSeverity::Info)
            .count()
    }

    /// Iterates over all collected diagnostics in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> + '_ {
        self.entries.iter().map(|(_, d)| d)
    }
}
