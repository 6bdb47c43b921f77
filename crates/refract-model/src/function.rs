//! Reflected functions.

use crate::{Argument, DocBlock, Element};
use refract_types::{Fqsen, FqsenError, Location, Type};
use serde::Serialize;

/// Optional parts of a [`Function`], filled with defaults when omitted.
#[derive(Debug, Clone, Default)]
pub struct FunctionOptions {
    /// Attached documentation; absent by default.
    pub doc_block: Option<DocBlock>,
    /// Declaration position; unknown by default.
    pub location: Location,
    /// Declared return type; `mixed` by default.
    pub return_type: Type,
}

impl FunctionOptions {
    pub fn with_doc_block(mut self, doc_block: DocBlock) -> Self {
        self.doc_block = Some(doc_block);
        self
    }

    pub fn at(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    pub fn returning(mut self, return_type: Type) -> Self {
        self.return_type = return_type;
        self
    }
}

/// A reflected function declaration.
///
/// Arguments are appended while the function is being built and are kept
/// in declaration order; nothing checks them for duplicates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Function {
    fqsen: Fqsen,
    arguments: Vec<Argument>,
    #[serde(skip_serializing_if = "Option::is_none")]
    doc_block: Option<DocBlock>,
    location: Location,
    return_type: Type,
}

impl Function {
    pub fn new(fqsen: Fqsen, options: FunctionOptions) -> Self {
        let FunctionOptions {
            doc_block,
            location,
            return_type,
        } = options;
        Self {
            fqsen,
            arguments: Vec::new(),
            doc_block,
            location,
            return_type,
        }
    }

    /// Create a function from the spelling of its Fqsen.
    pub fn parse(fqsen: &str, options: FunctionOptions) -> Result<Self, FqsenError> {
        Ok(Self::new(Fqsen::new(fqsen)?, options))
    }

    pub fn add_argument(&mut self, argument: Argument) {
        self.arguments.push(argument);
    }

    /// Arguments in the order they were added.
    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    pub fn fqsen(&self) -> &Fqsen {
        &self.fqsen
    }

    pub fn name(&self) -> &str {
        self.fqsen.name()
    }

    pub fn doc_block(&self) -> Option<&DocBlock> {
        self.doc_block.as_ref()
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn return_type(&self) -> &Type {
        &self.return_type
    }

    /// One-line signature, e.g. `greet(string $name = 'you'): string`.
    pub fn signature(&self) -> String {
        let args = self
            .arguments
            .iter()
            .map(|arg| arg.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}({}): {}", self.name(), args, self.return_type)
    }
}

impl Element for Function {
    fn fqsen(&self) -> &Fqsen {
        &self.fqsen
    }
}
