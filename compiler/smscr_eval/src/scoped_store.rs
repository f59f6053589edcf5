//! Per-name stacks of loop variable bindings.
//!
//! Entering a FOR pushes a binding for its variable, shadowing any outer
//! binding of the same name; leaving it pops exactly that binding. A name
//! is present in the map only while its stack is non-empty.

use rustc_hash::FxHashMap;

use crate::errors::StackUnderflow;
use crate::value::{DynValue, ValueCell};

#[derive(Debug, Default)]
pub struct ScopedStore {
    stacks: FxHashMap<String, Vec<ValueCell>>,
}

impl ScopedStore {
    pub fn new() -> Self {
        ScopedStore::default()
    }

    /// Bind `value` to `name`, shadowing any existing binding.
    pub fn push(&mut self, name: &str, value: impl Into<ValueCell>) {
        match self.stacks.get_mut(name) {
            Some(stack) => stack.push(value.into()),
            None => {
                self.stacks.insert(name.to_owned(), vec![value.into()]);
            }
        }
    }

    /// Remove and return the innermost binding of `name`.
    pub fn pop(&mut self, name: &str) -> Result<DynValue, StackUnderflow> {
        let stack = self
            .stacks
            .get_mut(name)
            .ok_or_else(|| StackUnderflow::Variable(name.to_owned()))?;
        let value = stack
            .pop()
            .ok_or_else(|| StackUnderflow::Variable(name.to_owned()))?;
        if stack.is_empty() {
            self.stacks.remove(name);
        }
        Ok(value.into_value())
    }

    /// The innermost binding of `name`.
    pub fn peek(&self, name: &str) -> Result<&DynValue, StackUnderflow> {
        self.stacks
            .get(name)
            .and_then(|stack| stack.last())
            .map(ValueCell::value)
            .ok_or_else(|| StackUnderflow::Variable(name.to_owned()))
    }

    /// Mutable access to the innermost binding, for in-place arithmetic.
    pub fn peek_mut(&mut self, name: &str) -> Result<&mut ValueCell, StackUnderflow> {
        self.stacks
            .get_mut(name)
            .and_then(|stack| stack.last_mut())
            .ok_or_else(|| StackUnderflow::Variable(name.to_owned()))
    }

    /// Whether `name` has no binding.
    pub fn is_empty(&self, name: &str) -> bool {
        !self.stacks.contains_key(name)
    }

    /// Number of live bindings for `name`.
    pub fn depth(&self, name: &str) -> usize {
        self.stacks.get(name).map_or(0, Vec::len)
    }
}
