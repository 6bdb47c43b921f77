//! Reflected function arguments.

use refract_types::Type;
use serde::Serialize;
use smol_str::SmolStr;
use std::fmt;

/// A parameter of a reflected function.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Argument {
    name: SmolStr,
    #[serde(rename = "type")]
    ty: Type,
    #[serde(skip_serializing_if = "Option::is_none")]
    default: Option<String>,
    by_reference: bool,
    is_variadic: bool,
}

impl Argument {
    /// An untyped, required argument. `name` excludes the `$`.
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            ty: Type::Mixed,
            default: None,
            by_reference: false,
            is_variadic: false,
        }
    }

    pub fn with_type(mut self, ty: Type) -> Self {
        self.ty = ty;
        self
    }

    /// Set the source text of the default value.
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn by_reference(mut self) -> Self {
        self.by_reference = true;
        self
    }

    pub fn variadic(mut self) -> Self {
        self.is_variadic = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &Type {
        &self.ty
    }

    pub fn default(&self) -> Option<&str> {
        self.default.as_deref()
    }

    pub fn is_by_reference(&self) -> bool {
        self.by_reference
    }

    pub fn is_variadic(&self) -> bool {
        self.is_variadic
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.ty)?;
        if self.by_reference {
            f.write_str("&")?;
        }
        if self.is_variadic {
            f.write_str("...")?;
        }
        write!(f, "${}", self.name)?;
        if let Some(default) = &self.default {
            write!(f, " = {default}")?;
        }
        Ok(())
    }
}
