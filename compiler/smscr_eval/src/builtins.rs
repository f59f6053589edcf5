//! Built-in `@functions`.
//!
//! Each built-in pops a fixed number of values from the echo stack (top
//! first), performs its effect against the execution context, and may push
//! a result. The set is closed, so dispatch is a plain `match`.
//!
//! | Function        | Pops                    | Pushes                    |
//! |-----------------|-------------------------|---------------------------|
//! | `@sin`          | x                       | sin(x), radians           |
//! | `@decfmt`       | pattern, then x         | x formatted by pattern    |
//! | `@dup`          | x                       | x, x                      |
//! | `@swap`         | a, then b               | a, b (so b is on top)     |
//! | `@setMimeType`  | mime                    |                           |
//! | `@paramGet`     | default, then name      | request param or default  |
//! | `@pparamGet`    | default, then name      | persistent param or default |
//! | `@tparamGet`    | default, then name      | temporary param or default |
//! | `@pparamSet`    | name, then value        |                           |
//! | `@tparamSet`    | name, then value        |                           |
//! | `@pparamDel`    | name                    |                           |
//! | `@tparamDel`    | name                    |                           |

use tracing::debug;

use crate::context::ExecutionContext;
use crate::decfmt::format_decimal;
use crate::echo_stack::EchoStack;
use crate::errors::{EvalError, EvalResult, StackUnderflow};
use crate::value::DynValue;

/// Built-in function identifiers.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Builtin {
    Sin,
    DecFmt,
    Dup,
    Swap,
    SetMimeType,
    ParamGet,
    PParamGet,
    TParamGet,
    PParamSet,
    TParamSet,
    PParamDel,
    TParamDel,
}

/// Which parameter map a `*param*` built-in addresses.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Scope {
    Request,
    Persistent,
    Temporary,
}

impl Builtin {
    pub const ALL: [Builtin; 12] = [
        Builtin::Sin,
        Builtin::DecFmt,
        Builtin::Dup,
        Builtin::Swap,
        Builtin::SetMimeType,
        Builtin::ParamGet,
        Builtin::PParamGet,
        Builtin::TParamGet,
        Builtin::PParamSet,
        Builtin::TParamSet,
        Builtin::PParamDel,
        Builtin::TParamDel,
    ];

    /// Look up a function by its name without the `@`.
    pub fn from_name(name: &str) -> Option<Builtin> {
        Builtin::ALL.into_iter().find(|builtin| builtin.name() == name)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Builtin::Sin => "sin",
            Builtin::DecFmt => "decfmt",
            Builtin::Dup => "dup",
            Builtin::Swap => "swap",
            Builtin::SetMimeType => "setMimeType",
            Builtin::ParamGet => "paramGet",
            Builtin::PParamGet => "pparamGet",
            Builtin::TParamGet => "tparamGet",
            Builtin::PParamSet => "pparamSet",
            Builtin::TParamSet => "tparamSet",
            Builtin::PParamDel => "pparamDel",
            Builtin::TParamDel => "tparamDel",
        }
    }

    /// Number of values popped from the echo stack.
    pub const fn arity(self) -> usize {
        match self {
            Builtin::Sin
            | Builtin::Dup
            | Builtin::SetMimeType
            | Builtin::PParamDel
            | Builtin::TParamDel => 1,
            Builtin::DecFmt
            | Builtin::Swap
            | Builtin::ParamGet
            | Builtin::PParamGet
            | Builtin::TParamGet
            | Builtin::PParamSet
            | Builtin::TParamSet => 2,
        }
    }

    /// Run the built-in against `stack` and `context`.
    pub fn call(
        self,
        stack: &mut EchoStack,
        context: &mut dyn ExecutionContext,
    ) -> EvalResult {
        debug!(function = self.name(), depth = stack.len(), "builtin");
        let user = format!("@{}", self.name());
        if stack.len() < self.arity() {
            return Err(StackUnderflow::Echo(user).into());
        }
        match self {
            Builtin::Sin => {
                let x = stack.pop(&user)?.to_f64()?;
                stack.push(DynValue::Double(x.sin()));
            }
            Builtin::DecFmt => {
                let pattern = stack.pop(&user)?.to_string();
                let x = stack.pop(&user)?.to_f64()?;
                let text = format_decimal(x, &pattern)
                    .ok_or(EvalError::InvalidPattern { pattern })?;
                stack.push(DynValue::Str(text));
            }
            Builtin::Dup => {
                let x = stack.pop(&user)?;
                stack.push(x.clone());
                stack.push(x);
            }
            Builtin::Swap => {
                let a = stack.pop(&user)?;
                let b = stack.pop(&user)?;
                stack.push(a);
                stack.push(b);
            }
            Builtin::SetMimeType => {
                let mime_type = stack.pop(&user)?.to_string();
                context.set_mime_type(&mime_type)?;
            }
            Builtin::ParamGet => get_param(Scope::Request, &user, stack, context)?,
            Builtin::PParamGet => get_param(Scope::Persistent, &user, stack, context)?,
            Builtin::TParamGet => get_param(Scope::Temporary, &user, stack, context)?,
            Builtin::PParamSet | Builtin::TParamSet => {
                let name = stack.pop(&user)?.to_string();
                let value = stack.pop(&user)?.to_string();
                if self == Builtin::PParamSet {
                    context.set_persistent_parameter(&name, value);
                } else {
                    context.set_temporary_parameter(&name, value);
                }
            }
            Builtin::PParamDel => {
                let name = stack.pop(&user)?.to_string();
                context.remove_persistent_parameter(&name);
            }
            Builtin::TParamDel => {
                let name = stack.pop(&user)?.to_string();
                context.remove_temporary_parameter(&name);
            }
        }
        Ok(())
    }
}

/// Pop default, then name; push the parameter's value or the default.
fn get_param(
    scope: Scope,
    user: &str,
    stack: &mut EchoStack,
    context: &dyn ExecutionContext,
) -> EvalResult {
    let default = stack.pop(user)?;
    let name = stack.pop(user)?.to_string();
    let found = match scope {
        Scope::Request => context.get_parameter(&name),
        Scope::Persistent => context.get_persistent_parameter(&name),
        Scope::Temporary => context.get_temporary_parameter(&name),
    };
    stack.push(found.map_or(default, DynValue::Str));
    Ok(())
}

/// Dispatch `@name`.
pub fn call_function(
    name: &str,
    stack: &mut EchoStack,
    context: &mut dyn ExecutionContext,
) -> EvalResult {
    match Builtin::from_name(name) {
        Some(builtin) => builtin.call(stack, context),
        None => Err(EvalError::UnknownFunction(name.to_owned())),
    }
}
