use thiserror::Error;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Translation itself never fails (an unmapped fault degrades to the base wrapper type and a
/// collected warning, see [`crate::WrapperRegistry::translate`]); the variants below cover the
/// two genuinely fallible paths: building the builtin hierarchy and synthesizing a native fault
/// through a wrapped class constructor.
///
/// # Error Categories
///
/// - [`Error::MissingNativeClass`] - The builtin hierarchy could not be wired up
/// - [`Error::Construction`] - A native constructor thunk rejected its arguments
///
/// # Examples
///
/// ```rust
/// use faultbridge::Error;
///
/// let result: Result<(), Error> = Err(Error::MissingNativeClass("LogicError".to_string()));
/// match result {
///     Err(Error::MissingNativeClass(name)) => {
///         eprintln!("hierarchy is incomplete, `{}` was never exported", name);
///     }
///     Err(e) => eprintln!("other error: {}", e),
///     Ok(()) => {}
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// A canonical native class is absent from the hierarchy.
    ///
    /// [`crate::WrapperRegistry::new`] resolves one native class per builtin wrapper kind,
    /// matched by canonical name. The boundary must export descriptors for the complete
    /// taxonomy before the registry can be built; this error names the first class that
    /// could not be found.
    #[error("no native class named `{0}` in the hierarchy")]
    MissingNativeClass(String),

    /// A native constructor thunk rejected its arguments.
    ///
    /// Raised when synthesizing a fresh native fault from a message fails, typically
    /// because extra constructor arguments had the wrong arity or type for the wrapped
    /// class. Misuse of dynamically declared wrapper types surfaces here as well, at
    /// first construction rather than at declaration time.
    ///
    /// # Fields
    ///
    /// * `class` - Canonical name of the native class whose constructor failed
    /// * `message` - Description of what the constructor rejected
    #[error("failed to construct native fault `{class}`: {message}")]
    Construction {
        /// Canonical name of the native class whose constructor failed
        class: String,
        /// Description of what the constructor rejected
        message: String,
    },
}
