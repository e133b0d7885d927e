//! Environment for variable bindings.
//!
//! One flat namespace for the whole run: no scopes, no removal.

use rustc_hash::FxHashMap;
use vari_ir::Span;

use crate::errors::{undefined_variable, EvalResult};

/// Mapping from variable name to its most recently assigned value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Environment {
    bindings: FxHashMap<String, i64>,
}

impl Environment {
    /// Create an empty environment.
    pub fn new() -> Self {
        Environment::default()
    }

    /// Bind `name` to `value`, overwriting any earlier binding.
    ///
    /// Returns the previous value if the name was already bound.
    pub fn set(&mut self, name: impl Into<String>, value: i64) -> Option<i64> {
        self.bindings.insert(name.into(), value)
    }

    /// Look up a variable.
    #[inline]
    pub fn lookup(&self, name: &str) -> Option<i64> {
        self.bindings.get(name).copied()
    }

    /// Look up a variable, failing with an undefined-variable error at `span`.
    pub fn get(&self, name: &str, span: Span) -> EvalResult<i64> {
        self.lookup(name).ok_or_else(|| undefined_variable(name, span))
    }

    /// Check if a variable is bound.
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Number of bound variables.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// All bindings sorted by name.
    pub fn sorted_bindings(&self) -> Vec<(&str, i64)> {
        let mut bindings: Vec<(&str, i64)> = self
            .bindings
            .iter()
            .map(|(name, value)| (name.as_str(), *value))
            .collect();
        bindings.sort_unstable_by(|a, b| a.0.cmp(b.0));
        bindings
    }
}
