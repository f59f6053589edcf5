use super::*;

#[test]
fn arithmetic_messages() {
    assert_eq!(
        ArithmeticError::InvalidOperand { value: "Ankica".into() }.to_string(),
        "`Ankica` is not a number"
    );
    assert_eq!(
        ArithmeticError::UnsupportedOperator(Operator::Pow).to_string(),
        "operator `^` is not supported"
    );
}

#[test]
fn wrapped_errors_are_transparent() {
    let err = EvalError::from(StackUnderflow::Echo("@swap".into()));
    assert_eq!(
        err.to_string(),
        "`@swap` needs more values than the echo tag provides"
    );
    let err = EvalError::from(ArithmeticError::DivideByZero);
    assert!(matches!(err, EvalError::Arithmetic(ArithmeticError::DivideByZero)));
}

#[test]
fn unknown_function_shows_sigil() {
    assert_eq!(
        EvalError::UnknownFunction("cos".into()).to_string(),
        "unknown function `@cos`"
    );
}
