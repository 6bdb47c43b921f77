//! Fully Qualified Structural Element Names.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error raised for a string that does not follow the Fqsen grammar.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FqsenError {
    #[error("\"{fqsen}\" is not a valid Fqsen")]
    Invalid { fqsen: String },
}

/// The identity of a reflected element, e.g. `\Foo\Bar::baz()`.
///
/// Grammar: a leading `\`, an optional namespace path, an optional
/// `::` member (optionally `$`-prefixed) and an optional `()` suffix.
/// Two values with the same spelling are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Fqsen {
    fqsen: SmolStr,
    name: SmolStr,
}

impl Fqsen {
    pub fn new(fqsen: impl Into<SmolStr>) -> Result<Self, FqsenError> {
        let fqsen = fqsen.into();
        match short_name(&fqsen) {
            Some(name) => Ok(Self { fqsen, name }),
            None => Err(FqsenError::Invalid {
                fqsen: fqsen.to_string(),
            }),
        }
    }

    /// The full spelling.
    pub fn as_str(&self) -> &str {
        &self.fqsen
    }

    /// The short name: the member for `\Foo::bar()`, otherwise the last
    /// namespace segment without its `()` suffix.
    pub fn name(&self) -> &str {
        &self.name
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c as u32 >= 0x7f
}

fn is_ident_char(c: char) -> bool {
    is_ident_start(c) || c.is_ascii_digit()
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if is_ident_start(c)) && chars.all(is_ident_char)
}

/// Validate `fqsen` and extract its short name.
fn short_name(fqsen: &str) -> Option<SmolStr> {
    let rest = fqsen.strip_prefix('\\')?;
    let body = rest.strip_suffix("()").unwrap_or(rest);

    let (path, member) = match body.split_once("::") {
        Some((path, member)) => (path, Some(member)),
        None => (body, None),
    };

    if !path.is_empty() {
        let mut chars = path.chars();
        let starts_ok = matches!(chars.next(), Some(c) if is_ident_start(c));
        if !starts_ok || !chars.all(|c| is_ident_char(c) || c == '\\') {
            return None;
        }
    }

    match member {
        Some(member) => {
            let member = member.strip_prefix('$').unwrap_or(member);
            is_identifier(member).then(|| SmolStr::new(member))
        }
        None => {
            let last = fqsen.rsplit('\\').next().unwrap_or_default();
            Some(SmolStr::new(last.trim_matches(|c| c == '(' || c == ')')))
        }
    }
}

impl fmt::Display for Fqsen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fqsen)
    }
}

impl AsRef<str> for Fqsen {
    fn as_ref(&self) -> &str {
        &self.fqsen
    }
}

impl FromStr for Fqsen {
    type Err = FqsenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Fqsen::new(s)
    }
}

impl TryFrom<String> for Fqsen {
    type Error = FqsenError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Fqsen::new(value)
    }
}

impl From<Fqsen> for String {
    fn from(value: Fqsen) -> Self {
        value.fqsen.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_name() {
        let fqsen = Fqsen::new("\\Foo\\Bar::baz()").unwrap();
        assert_eq!(fqsen.name(), "baz");
        assert_eq!(fqsen.as_str(), "\\Foo\\Bar::baz()");
    }

    #[test]
    fn test_function_name() {
        let fqsen = Fqsen::new("\\My\\Space\\greet()").unwrap();
        assert_eq!(fqsen.name(), "greet");
    }

    #[test]
    fn test_class_and_property_names() {
        assert_eq!(Fqsen::new("\\Foo\\Bar").unwrap().name(), "Bar");
        assert_eq!(Fqsen::new("\\Foo::$prop").unwrap().name(), "prop");
        assert_eq!(Fqsen::new("\\Foo::CONSTANT").unwrap().name(), "CONSTANT");
        assert_eq!(Fqsen::new("\\").unwrap().name(), "");
    }

    #[test]
    fn test_invalid_fqsens() {
        for bad in ["Foo\\Bar", "", "\\1Foo", "\\Foo::", "\\Foo::bar::baz", "\\Foo bar"] {
            assert!(
                matches!(Fqsen::new(bad), Err(FqsenError::Invalid { .. })),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_equality_by_spelling() {
        let a: Fqsen = "\\Foo\\bar()".parse().unwrap();
        let b = Fqsen::new(String::from("\\Foo\\bar()")).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, Fqsen::new("\\Foo\\bar").unwrap());
    }

    #[test]
    fn test_serde_as_string() {
        let fqsen = Fqsen::new("\\Foo\\bar()").unwrap();
        let json = serde_json::to_string(&fqsen).unwrap();
        assert_eq!(json, r#""\\Foo\\bar()""#);
        let back: Fqsen = serde_json::from_str(&json).unwrap();
        assert_eq!(back, fqsen);
        assert!(serde_json::from_str::<Fqsen>(r#""nope""#).is_err());
    }
}
