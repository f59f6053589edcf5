//! Tree-walking template interpreter.
//!
//! One [`Interpreter`] renders one document once. It owns its loop-variable
//! store and borrows the execution context, so any number of interpreters
//! can run over the same parsed document at the same time.

use smscr_ir::{
    walk_for_loop, DocumentNode, EchoNode, Element, ForLoopNode, TextNode, Visitor,
};
use tracing::trace;

use crate::builtins::call_function;
use crate::context::ExecutionContext;
use crate::echo_stack::EchoStack;
use crate::errors::{EvalError, EvalResult};
use crate::scoped_store::ScopedStore;
use crate::value::{DynValue, ValueCell};

/// Renders a document against an execution context.
pub struct Interpreter<'ctx> {
    context: &'ctx mut dyn ExecutionContext,
    store: ScopedStore,
}

impl<'ctx> Interpreter<'ctx> {
    pub fn new(context: &'ctx mut dyn ExecutionContext) -> Self {
        Interpreter {
            context,
            store: ScopedStore::new(),
        }
    }

    /// Loop-variable bindings; empty between top-level nodes.
    pub fn store(&self) -> &ScopedStore {
        &self.store
    }

    /// Value of a FOR start, end, or step expression.
    fn bound(&self, element: &Element) -> EvalResult<DynValue> {
        Ok(match element {
            Element::ConstantInteger(value) => DynValue::Int(*value),
            Element::ConstantDouble(value) => DynValue::Double(*value),
            Element::Str(text) => DynValue::Str(text.clone()),
            Element::Variable(name) => self.store.peek(name)?.clone(),
            other => DynValue::Str(other.as_text()),
        })
    }

    /// Run the body until the loop variable reaches `end`.
    fn run_loop(&mut self, node: &ForLoopNode, end: &DynValue, step: &DynValue) -> EvalResult {
        let variable = node.variable.as_str();
        while self.store.peek_mut(variable)?.compare(end)? < 0 {
            walk_for_loop(self, node)?;
            self.store.peek_mut(variable)?.add(step)?;
        }
        Ok(())
    }
}

impl<'ast> Visitor<'ast> for Interpreter<'_> {
    type Error = EvalError;

    fn visit_text(&mut self, node: &'ast TextNode) -> EvalResult {
        self.context.write(&node.text)?;
        Ok(())
    }

    #[tracing::instrument(level = "debug", skip_all, fields(variable = %node.variable))]
    fn visit_for_loop(&mut self, node: &'ast ForLoopNode) -> EvalResult {
        let start = self.bound(&node.start)?;
        let end = self.bound(&node.end)?;
        let step = match &node.step {
            Some(step) => self.bound(step)?,
            None => {
                return Err(EvalError::MissingForStep {
                    variable: node.variable.clone(),
                });
            }
        };

        self.store.push(&node.variable, ValueCell::new(start));
        let result = self.run_loop(node, &end, &step);
        self.store.pop(&node.variable)?;
        result
    }

    #[tracing::instrument(level = "trace", skip_all, fields(elements = node.elements.len()))]
    fn visit_echo(&mut self, node: &'ast EchoNode) -> EvalResult {
        let mut stack = EchoStack::new();
        for element in &node.elements {
            match element {
                Element::ConstantInteger(value) => stack.push(DynValue::Int(*value)),
                Element::ConstantDouble(value) => stack.push(DynValue::Double(*value)),
                Element::Str(text) => stack.push(DynValue::Str(text.clone())),
                Element::Variable(name) => {
                    let current = self.store.peek(name)?.to_string();
                    stack.push(DynValue::Str(current));
                }
                Element::Operator(op) => {
                    let first = stack.pop(op.symbol())?;
                    let second = stack.pop(op.symbol())?;
                    trace!(
                        op = op.symbol(),
                        first = first.kind_name(),
                        second = second.kind_name(),
                        "binary operator"
                    );
                    let mut result = ValueCell::new(first);
                    result.apply(*op, &second)?;
                    stack.push(result.into_value());
                }
                Element::Function(name) => call_function(name, &mut stack, &mut *self.context)?,
            }
        }

        trace!(leftover = stack.len(), "echo result");
        for value in stack.drain_in_push_order() {
            self.context.write(&value.to_string())?;
        }
        Ok(())
    }
}

/// Render `document` against `context`.
///
/// Output written before a failure stays written.
pub fn execute(document: &DocumentNode, context: &mut dyn ExecutionContext) -> EvalResult {
    Interpreter::new(context).visit_document(document)
}
