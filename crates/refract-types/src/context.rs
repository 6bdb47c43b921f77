//! The namespace and imports in effect for a block of code.

use crate::{Fqsen, FqsenError};
use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, SerializeStruct, Serializer};
use smol_str::SmolStr;

/// Import aliases mapped to the fully qualified names they stand for.
///
/// Aliases compare case-insensitively, as PHP class names do. Inserting an
/// alias that already exists replaces its target and keeps the spelling of
/// the newer declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasMap {
    entries: IndexMap<SmolStr, (SmolStr, SmolStr)>,
}

impl AliasMap {
    /// Create an empty alias map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `alias` to `target`, returning the target it replaced.
    pub fn insert(
        &mut self,
        alias: impl Into<SmolStr>,
        target: impl AsRef<str>,
    ) -> Option<SmolStr> {
        let alias = alias.into();
        let target = SmolStr::new(target.as_ref().trim_start_matches('\\'));
        let key = SmolStr::new(alias.to_ascii_lowercase());
        self.entries
            .insert(key, (alias, target))
            .map(|(_, previous)| previous)
    }

    /// Target of `alias`, matched case-insensitively.
    pub fn get(&self, alias: &str) -> Option<&str> {
        self.entries
            .get(alias.to_ascii_lowercase().as_str())
            .map(|(_, target)| target.as_str())
    }

    /// `(alias, target)` pairs in order of first declaration.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .values()
            .map(|(alias, target)| (alias.as_str(), target.as_str()))
    }

    /// Number of distinct aliases.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no alias is declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<A: Into<SmolStr>, T: AsRef<str>> FromIterator<(A, T)> for AliasMap {
    fn from_iter<I: IntoIterator<Item = (A, T)>>(iter: I) -> Self {
        let mut map = AliasMap::new();
        for (alias, target) in iter {
            map.insert(alias, target);
        }
        map
    }
}

impl Serialize for AliasMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (alias, target) in self.iter() {
            map.serialize_entry(alias, target)?;
        }
        map.end()
    }
}

/// Snapshot of the current namespace and the class-alike imports visible in
/// it, used to turn short names into fully qualified ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionContext {
    namespace: SmolStr,
    aliases: AliasMap,
}

impl ResolutionContext {
    /// `namespace` may be empty for the global namespace; a leading `\` is
    /// dropped.
    pub fn new(namespace: impl AsRef<str>, aliases: AliasMap) -> Self {
        Self {
            namespace: SmolStr::new(namespace.as_ref().trim_start_matches('\\')),
            aliases,
        }
    }

    /// The global namespace without any imports.
    pub fn global() -> Self {
        Self::default()
    }

    /// The current namespace, `""` for the global one.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Class-alike imports in effect.
    pub fn aliases(&self) -> &AliasMap {
        &self.aliases
    }

    /// Check if this is the global namespace.
    pub fn is_global(&self) -> bool {
        self.namespace.is_empty()
    }

    /// Resolve a class reference as written in code within this context.
    ///
    /// `\Foo` is taken as is, `namespace\Foo` and unimported names are
    /// prefixed with the current namespace, and a name whose first segment
    /// is an import alias is rewritten to the imported target.
    pub fn resolve_class_name(&self, name: &str) -> Result<Fqsen, FqsenError> {
        if name.starts_with('\\') {
            return Fqsen::new(name);
        }
        if let Some(relative) = name.strip_prefix("namespace\\") {
            return Fqsen::new(self.in_namespace(relative));
        }

        let (first, rest) = match name.split_once('\\') {
            Some((first, rest)) => (first, Some(rest)),
            None => (name, None),
        };
        match (self.aliases.get(first), rest) {
            (Some(target), Some(rest)) => Fqsen::new(format!("\\{target}\\{rest}")),
            (Some(target), None) => Fqsen::new(format!("\\{target}")),
            (None, _) => Fqsen::new(self.in_namespace(name)),
        }
    }

    /// Fully qualified spelling of `name` declared in this namespace.
    pub fn in_namespace(&self, name: &str) -> String {
        if self.namespace.is_empty() {
            format!("\\{name}")
        } else {
            format!("\\{}\\{}", self.namespace, name)
        }
    }
}

impl Serialize for ResolutionContext {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ResolutionContext", 2)?;
        state.serialize_field("namespace", self.namespace.as_str())?;
        state.serialize_field("aliases", &self.aliases)?;
        state.end()
    }
}
