//! Reflected structural elements.
//!
//! These are the in-memory results of reflecting a PHP file: a
//! [`Function`] with its [`Argument`]s, attached [`DocBlock`] and
//! declaration [`Location`](refract_types::Location). A [`FileReflection`]
//! collects the elements of one file and indexes them by Fqsen.

mod argument;
mod docblock;
mod file;
mod function;

pub use argument::Argument;
pub use docblock::DocBlock;
pub use file::{FileReflection, FunctionId};
pub use function::{Function, FunctionOptions};

use refract_types::Fqsen;

/// Common surface of every reflected element.
pub trait Element {
    /// The element's identity.
    fn fqsen(&self) -> &Fqsen;

    /// The short name of the element.
    fn name(&self) -> &str {
        self.fqsen().name()
    }
}
