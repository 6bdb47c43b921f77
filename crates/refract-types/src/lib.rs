//! Value types shared by the Refract reflection pipeline.
//!
//! This crate holds:
//! - [`Fqsen`], the identity of every reflected element
//! - [`Location`], where an element was declared
//! - [`Type`], a resolved PHP type
//! - [`ResolutionContext`], the namespace and imports in effect for a block

mod context;
mod fqsen;
mod location;
mod ty;

pub use context::{AliasMap, ResolutionContext};
pub use fqsen::{Fqsen, FqsenError};
pub use location::Location;
pub use ty::Type;
