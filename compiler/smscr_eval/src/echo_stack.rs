//! Temporary value stack of a single echo tag.

use smallvec::SmallVec;

use crate::errors::StackUnderflow;
use crate::value::DynValue;

/// Most echo tags hold only a handful of values at once.
const INLINE_VALUES: usize = 8;

#[derive(Debug, Default)]
pub struct EchoStack {
    values: SmallVec<[DynValue; INLINE_VALUES]>,
}

impl EchoStack {
    pub fn new() -> Self {
        EchoStack::default()
    }

    pub fn push(&mut self, value: DynValue) {
        self.values.push(value);
    }

    /// Pop the top value on behalf of `user` (an operator or function),
    /// which is named in the underflow error.
    pub fn pop(&mut self, user: &str) -> Result<DynValue, StackUnderflow> {
        self.values
            .pop()
            .ok_or_else(|| StackUnderflow::Echo(user.to_owned()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Remaining values, bottom first: the order they are written out in.
    pub fn drain_in_push_order(&mut self) -> impl Iterator<Item = DynValue> + '_ {
        self.values.drain(..)
    }
}
