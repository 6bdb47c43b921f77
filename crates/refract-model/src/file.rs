//! The reflection of one source file.

use crate::Function;
use la_arena::{Arena, Idx};
use refract_types::{Fqsen, ResolutionContext};
use rustc_hash::FxHashMap;
use serde::ser::{Serialize, SerializeStruct, Serializer};

pub type FunctionId = Idx<Function>;

/// Elements reflected from a single file.
#[derive(Debug, Default)]
pub struct FileReflection {
    /// Path or label of the reflected file, if known.
    pub path: Option<String>,
    functions: Arena<Function>,
    order: Vec<FunctionId>,
    by_fqsen: FxHashMap<Fqsen, FunctionId>,
    contexts: Vec<ResolutionContext>,
}

impl FileReflection {
    pub fn new(path: Option<String>) -> Self {
        Self {
            path,
            ..Self::default()
        }
    }

    /// Record the context of a namespace block, in document order.
    pub fn add_context(&mut self, context: ResolutionContext) {
        self.contexts.push(context);
    }

    /// Add a function. A function with the same Fqsen added earlier stays
    /// in the arena but is no longer reachable through [`get`](Self::get).
    pub fn add_function(&mut self, function: Function) -> FunctionId {
        let fqsen = function.fqsen().clone();
        let id = self.functions.alloc(function);
        if self.by_fqsen.insert(fqsen.clone(), id).is_some() {
            tracing::warn!(fqsen = %fqsen, "function redeclared in the same file");
            self.order.retain(|existing| self.functions[*existing].fqsen() != &fqsen);
        }
        self.order.push(id);
        id
    }

    pub fn get(&self, fqsen: &Fqsen) -> Option<&Function> {
        self.by_fqsen.get(fqsen).map(|id| &self.functions[*id])
    }

    pub fn function(&self, id: FunctionId) -> &Function {
        &self.functions[id]
    }

    /// Reachable functions in declaration order.
    pub fn functions(&self) -> impl Iterator<Item = &Function> {
        self.order.iter().map(|id| &self.functions[*id])
    }

    pub fn function_count(&self) -> usize {
        self.order.len()
    }

    pub fn contexts(&self) -> &[ResolutionContext] {
        &self.contexts
    }
}

impl Serialize for FileReflection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let functions: Vec<&Function> = self.functions().collect();
        let mut state = serializer.serialize_struct("FileReflection", 3)?;
        state.serialize_field("path", &self.path)?;
        state.serialize_field("contexts", &self.contexts)?;
        state.serialize_field("functions", &functions)?;
        state.end()
    }
}
