//! Syntax tree node definitions.

use crate::{Span, Spanned};
use smol_str::SmolStr;
use std::fmt;

/// A complete PHP source file.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceFile {
    /// Top-level statements
    pub stmts: Vec<Stmt>,
    /// Full span of the file
    #[cfg_attr(feature = "serde", serde(default))]
    pub span: Span,
}

/// A statement.
pub type Stmt = Spanned<StmtKind>;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StmtKind {
    /// Namespace block: `namespace Foo\Bar;` or `namespace { ... }`
    Namespace(Namespace),
    /// Import: `use Foo\Bar;` or `use Foo\{Bar, Baz};`
    Use(UseDecl),
    /// Function declaration: `function greet(string $name): string { ... }`
    Function(FunctionDecl),
    /// Any other statement; only its kind is retained (`class`, `echo`, ...)
    Other(SmolStr),
}

// ============================================================================
// Names
// ============================================================================

/// How a name was written in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NameKind {
    /// `Foo\Bar`
    #[default]
    Normal,
    /// `\Foo\Bar`
    FullyQualified,
    /// `namespace\Foo`
    Relative,
}

/// A possibly qualified name such as `Foo\Bar`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Name {
    /// Name segments, never empty
    pub parts: Vec<SmolStr>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub kind: NameKind,
}

impl Name {
    /// Build a name from its source spelling.
    ///
    /// A leading `\` makes the name fully qualified and a leading
    /// `namespace\` makes it relative.
    pub fn parse(text: &str) -> Self {
        let (kind, rest) = if let Some(rest) = text.strip_prefix('\\') {
            (NameKind::FullyQualified, rest)
        } else if let Some(rest) = text.strip_prefix("namespace\\") {
            (NameKind::Relative, rest)
        } else {
            (NameKind::Normal, text)
        };
        Self {
            parts: rest.split('\\').map(SmolStr::new).collect(),
            kind,
        }
    }

    /// The last segment: `Bar` for `Foo\Bar`.
    pub fn last(&self) -> &str {
        self.parts.last().map(SmolStr::as_str).unwrap_or_default()
    }

    /// The first segment: `Foo` for `Foo\Bar`.
    pub fn first(&self) -> &str {
        self.parts.first().map(SmolStr::as_str).unwrap_or_default()
    }

    /// Spelling as it would appear in code, with the `\` or `namespace\`
    /// prefix restored.
    pub fn to_code_string(&self) -> String {
        match self.kind {
            NameKind::Normal => self.to_string(),
            NameKind::FullyQualified => format!("\\{self}"),
            NameKind::Relative => format!("namespace\\{self}"),
        }
    }
}

/// Segments joined by `\`, without any leading prefix.
impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                f.write_str("\\")?;
            }
            f.write_str(part)?;
        }
        Ok(())
    }
}

// ============================================================================
// Namespaces and imports
// ============================================================================

/// A namespace block.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Namespace {
    /// Declared name; `None` for `namespace { ... }`
    pub name: Option<Name>,
    /// Direct child statements
    pub stmts: Vec<Stmt>,
}

impl Namespace {
    /// Create a namespace block from its name and direct children.
    pub fn new(name: Option<Name>, stmts: Vec<Stmt>) -> Self {
        Self { name, stmts }
    }
}

/// What an import brings into scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UseKind {
    /// Not stated; used by mixed group imports and their items
    #[default]
    Unknown,
    /// `use Foo\Bar;`
    Normal,
    /// `use function Foo\bar;`
    Function,
    /// `use const Foo\BAR;`
    Constant,
}

impl UseKind {
    /// Whether the import names a class, interface, trait or enum.
    pub fn is_class_alike(self) -> bool {
        matches!(self, UseKind::Unknown | UseKind::Normal)
    }
}

/// A single imported name within a `use` statement.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UseItem {
    /// Imported name; relative to the prefix inside a group import
    pub name: Name,
    /// Explicit alias: `as Baz`
    #[cfg_attr(feature = "serde", serde(default))]
    pub alias: Option<Spanned<SmolStr>>,
    /// Per-item kind, as reported inside a mixed group import. Alias
    /// collection goes by the statement kind only.
    #[cfg_attr(feature = "serde", serde(default))]
    pub kind: UseKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub span: Span,
}

impl UseItem {
    /// Create an import of `name` without an alias.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            alias: None,
            kind: UseKind::Unknown,
            span: Span::default(),
        }
    }

    /// Set an explicit `as` alias.
    pub fn with_alias(mut self, alias: impl Into<SmolStr>) -> Self {
        self.alias = Some(Spanned::detached(alias.into()));
        self
    }

    /// Set the per-item kind.
    pub fn with_kind(mut self, kind: UseKind) -> Self {
        self.kind = kind;
        self
    }

    /// The name this import is known by in the enclosing scope: the
    /// explicit alias, or else the last segment of the imported name.
    pub fn effective_alias(&self) -> &str {
        match &self.alias {
            Some(alias) => alias.node.as_str(),
            None => self.name.last(),
        }
    }
}

/// A `use` statement.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UseDecl {
    /// `use Foo\Bar, Foo\Baz as Q;`
    Plain { kind: UseKind, items: Vec<UseItem> },
    /// `use Foo\{Bar, Baz as Q};`
    Group {
        kind: UseKind,
        prefix: Name,
        items: Vec<UseItem>,
    },
}

impl UseDecl {
    /// Kind declared on the statement.
    pub fn kind(&self) -> UseKind {
        match self {
            UseDecl::Plain { kind, .. } | UseDecl::Group { kind, .. } => *kind,
        }
    }

    /// Imported items in source order.
    pub fn items(&self) -> &[UseItem] {
        match self {
            UseDecl::Plain { items, .. } | UseDecl::Group { items, .. } => items,
        }
    }
}

// ============================================================================
// Functions
// ============================================================================

/// A type declaration on a parameter or return value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeHint {
    /// Keyword or class name: `int`, `self`, `Foo\Bar`
    Named(Name),
    /// `?int`
    Nullable(Box<TypeHint>),
    /// `int|string|null`
    Union(Vec<TypeHint>),
}

impl TypeHint {
    /// Shorthand for a named hint spelled as in source.
    pub fn named(text: &str) -> Self {
        TypeHint::Named(Name::parse(text))
    }
}

/// A function declaration: `function add(int $a, int $b): int { ... }`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FunctionDecl {
    /// Function name, unqualified
    pub name: Spanned<SmolStr>,
    /// Parameters in declaration order
    #[cfg_attr(feature = "serde", serde(default))]
    pub params: Vec<Param>,
    /// Optional return type declaration
    #[cfg_attr(feature = "serde", serde(default))]
    pub return_ty: Option<TypeHint>,
    /// Whether the function returns by reference (`function &get()`)
    #[cfg_attr(feature = "serde", serde(default))]
    pub by_ref: bool,
    /// `/** ... */` comment directly preceding the declaration
    #[cfg_attr(feature = "serde", serde(default))]
    pub doc_comment: Option<Spanned<String>>,
}

impl FunctionDecl {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: Spanned::detached(name.into()),
            params: Vec::new(),
            return_ty: None,
            by_ref: false,
            doc_comment: None,
        }
    }
}

/// A function parameter.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Param {
    /// Parameter name without the leading `$`
    pub name: Spanned<SmolStr>,
    /// Optional type declaration
    #[cfg_attr(feature = "serde", serde(default))]
    pub ty: Option<TypeHint>,
    /// Source text of the default value expression
    #[cfg_attr(feature = "serde", serde(default))]
    pub default: Option<String>,
    /// `&$name`
    #[cfg_attr(feature = "serde", serde(default))]
    pub by_ref: bool,
    /// `...$name`
    #[cfg_attr(feature = "serde", serde(default))]
    pub variadic: bool,
    /// Span of the entire parameter
    #[cfg_attr(feature = "serde", serde(default))]
    pub span: Span,
}

impl Param {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: Spanned::detached(name.into()),
            ty: None,
            default: None,
            by_ref: false,
            variadic: false,
            span: Span::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_parse_kinds() {
        let name = Name::parse("\\Foo\\Bar");
        assert_eq!(name.kind, NameKind::FullyQualified);
        assert_eq!(name.to_string(), "Foo\\Bar");
        assert_eq!(name.to_code_string(), "\\Foo\\Bar");

        let relative = Name::parse("namespace\\Baz");
        assert_eq!(relative.kind, NameKind::Relative);
        assert_eq!(relative.parts, vec![SmolStr::new("Baz")]);
    }

    #[test]
    fn test_name_segments() {
        let name = Name::parse("Foo\\Bar\\Baz");
        assert_eq!(name.first(), "Foo");
        assert_eq!(name.last(), "Baz");
        assert_eq!(name.kind, NameKind::Normal);
    }

    #[test]
    fn test_effective_alias() {
        let item = UseItem::new(Name::parse("Foo\\Bar"));
        assert_eq!(item.effective_alias(), "Bar");

        let aliased = UseItem::new(Name::parse("Foo\\Bar")).with_alias("Baz");
        assert_eq!(aliased.effective_alias(), "Baz");
    }

    #[test]
    fn test_use_decl_accessors() {
        let decl = UseDecl::Group {
            kind: UseKind::Normal,
            prefix: Name::parse("Foo"),
            items: vec![UseItem::new(Name::parse("Bar"))],
        };
        assert_eq!(decl.kind(), UseKind::Normal);
        assert_eq!(decl.items().len(), 1);
        assert!(UseKind::Unknown.is_class_alike());
        assert!(!UseKind::Constant.is_class_alike());
    }
}
