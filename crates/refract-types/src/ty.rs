//! Resolved PHP types.

use crate::Fqsen;
use serde::{Serialize, Serializer};
use std::fmt;

/// A resolved type reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Type {
    /// Nothing is known about the type.
    #[default]
    Mixed,
    String,
    Integer,
    Float,
    Boolean,
    Void,
    Null,
    Never,
    Callable,
    Iterable,
    Resource,
    Scalar,
    /// `self`
    Self_,
    /// `static`
    Static,
    /// `$this`
    This,
    /// `object`, or a specific class when the Fqsen is known.
    Object(Option<Fqsen>),
    /// `array`, `Foo[]` or `array<int, Foo>`.
    Array {
        value: Box<Type>,
        key: Option<Box<Type>>,
    },
    /// `?T`
    Nullable(Box<Type>),
    /// `A|B`
    Compound(Vec<Type>),
}

impl Type {
    pub fn is_mixed(&self) -> bool {
        matches!(self, Type::Mixed)
    }

    /// An untyped `array`.
    pub fn array() -> Self {
        Type::Array {
            value: Box::new(Type::Mixed),
            key: None,
        }
    }

    pub fn object(fqsen: Fqsen) -> Self {
        Type::Object(Some(fqsen))
    }

    pub fn nullable(inner: Type) -> Self {
        Type::Nullable(Box::new(inner))
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Mixed => f.write_str("mixed"),
            Type::String => f.write_str("string"),
            Type::Integer => f.write_str("int"),
            Type::Float => f.write_str("float"),
            Type::Boolean => f.write_str("bool"),
            Type::Void => f.write_str("void"),
            Type::Null => f.write_str("null"),
            Type::Never => f.write_str("never"),
            Type::Callable => f.write_str("callable"),
            Type::Iterable => f.write_str("iterable"),
            Type::Resource => f.write_str("resource"),
            Type::Scalar => f.write_str("scalar"),
            Type::Self_ => f.write_str("self"),
            Type::Static => f.write_str("static"),
            Type::This => f.write_str("$this"),
            Type::Object(None) => f.write_str("object"),
            Type::Object(Some(fqsen)) => write!(f, "{fqsen}"),
            Type::Array { value, key: Some(key) } => write!(f, "array<{key}, {value}>"),
            Type::Array { value, key: None } => match value.as_ref() {
                Type::Mixed => f.write_str("array"),
                Type::Compound(_) => write!(f, "({value})[]"),
                _ => write!(f, "{value}[]"),
            },
            Type::Nullable(inner) => write!(f, "?{inner}"),
            Type::Compound(types) => {
                for (i, ty) in types.iter().enumerate() {
                    if i > 0 {
                        f.write_str("|")?;
                    }
                    write!(f, "{ty}")?;
                }
                Ok(())
            }
        }
    }
}

/// Types serialize as their PHP spelling.
impl Serialize for Type {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
