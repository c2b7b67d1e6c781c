//! Registry and name bindings tying the two sides of the boundary together.
//!
//! # Key Components
//!
//! - [`WrapperRegistry`] - Maps native class identities to wrapper types and
//!   performs translation
//! - [`Namespace`] - Publication target for declared wrapper type names

mod namespace;
#[allow(clippy::module_inception)]
mod registry;

pub use namespace::Namespace;
pub use registry::WrapperRegistry;
