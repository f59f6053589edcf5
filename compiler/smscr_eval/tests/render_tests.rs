//! End-to-end rendering: parse real templates, run them, check the output.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use smscr_eval::{
    execute, ContextError, EvalError, ExecutionContext, PersistentParameters, RequestContext,
    SharedBuffer,
};
use smscr_parse::parse;

fn render_with(source: &str, context: RequestContext<Vec<u8>>) -> (Result<(), EvalError>, String) {
    let document = parse(source).expect("template parses");
    let mut context = context;
    let result = execute(&document, &mut context);
    let output = String::from_utf8(context.into_output()).expect("utf-8 output");
    (result, output)
}

fn render(source: &str) -> String {
    let (result, output) = render_with(source, RequestContext::new(Vec::new()));
    result.expect("template renders");
    output
}

fn params(pairs: &[(&str, &str)]) -> FxHashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect()
}

#[test]
fn loop_writes_each_value() {
    assert_eq!(render("{$FOR i 0 3 1$}{$=i$}{$END$}"), "012");
}

#[test]
fn inner_loop_shadows_outer_variable() {
    assert_eq!(
        render("{$FOR i 0 2 1$}{$=i$}[{$FOR i 5 7 1$}{$=i$}{$END$}]{$= i $}{$END$}"),
        "0[56]01[56]1"
    );
}

#[test]
fn unbalanced_echo_writes_leftovers_in_push_order() {
    assert_eq!(render("{$= 1 2 $}"), "12");
    assert_eq!(render("{$= \"a\" 1 2 + \"z\" $}"), "a3z");
}

#[test]
fn string_operands_are_parsed() {
    assert_eq!(render("{$= \"1.5\" \"2\" * $}"), "3.0");
    assert_eq!(render("{$= \"12\" 0 + $}"), "12");
}

#[test]
fn echo_of_escaped_crlf_string() {
    assert_eq!(render("{$= \"a\\r\\nb\" $}"), "a\r\nb");
}

#[test]
fn sine_table() {
    assert_eq!(
        render("{$FOR i 0 3 1$}{$= i @sin \"0.000\" @decfmt $} {$END$}"),
        "0.000 0.841 0.909 "
    );
}

#[test]
fn request_parameters_sum() {
    let source = "a+b={$= \"a\" \"1\" @paramGet \"b\" \"2\" @paramGet + $}";
    let context = RequestContext::new(Vec::new()).with_parameters(params(&[("a", "40")]));
    let (result, output) = render_with(source, context);
    assert!(result.is_ok());
    assert_eq!(output, "a+b=42");
}

#[test]
fn call_counter_updates_session() {
    let source = "{$= \"calls\" \"1\" @pparamGet @dup 1 + \"calls\" @pparamSet $}";
    let session = PersistentParameters::new();

    for expected in ["1", "2", "3"] {
        let context = RequestContext::new(Vec::new()).with_persistent(session.clone());
        let (result, output) = render_with(source, context);
        assert!(result.is_ok());
        assert_eq!(output, expected);
    }
    assert_eq!(session.get("calls").as_deref(), Some("4"));
}

#[test]
fn fibonacci_with_temporary_parameters() {
    let source = "{$= 0 \"a\" @tparamSet 1 \"b\" @tparamSet $}\
                  {$ FOR i 1 8 1 $}{$= \"a\" 0 @tparamGet $} \
                  {$= \"b\" 0 @tparamGet @dup \"a\" 0 @tparamGet + \"b\" @tparamSet \"a\" @tparamSet $}\
                  {$END$}";
    assert_eq!(render(source), "0 1 1 2 3 5 8 ");
}

#[test]
fn mime_type_shapes_header() {
    let context = RequestContext::new(Vec::new()).with_header(true);
    let (result, output) = render_with("{$= \"text/plain\" @setMimeType $}hi", context);
    assert!(result.is_ok());
    assert_eq!(
        output,
        "HTTP/1.1 200 OK\r\nContent-Type: text/plain; charset=UTF-8\r\n\r\nhi"
    );
}

#[test]
fn mime_type_after_output_fails_but_keeps_output() {
    let context = RequestContext::new(Vec::new()).with_header(true);
    let (result, output) = render_with("body{$= \"text/plain\" @setMimeType $}", context);
    assert!(matches!(
        result,
        Err(EvalError::Context(ContextError::HeaderAlreadyGenerated { .. }))
    ));
    assert!(output.ends_with("\r\n\r\nbody"));
}

#[test]
fn divide_by_zero_aborts_after_partial_output() {
    let (result, output) = render_with("ok {$= 0 1 / $} never", RequestContext::new(Vec::new()));
    assert!(result.is_err());
    assert_eq!(output, "ok ");
}

#[test]
fn float_division_by_zero_is_infinite() {
    assert_eq!(render("{$= 0.0 1 / $}"), "Infinity");
}

#[test]
fn unknown_function_is_reported() {
    let (result, _) = render_with("{$= 1 @cos $}", RequestContext::new(Vec::new()));
    assert!(matches!(result, Err(EvalError::UnknownFunction(name)) if name == "cos"));
}

#[test]
fn shared_buffer_sink() {
    let document = parse("{$FOR i 0 3 1$}-{$END$}").unwrap();
    let buffer = SharedBuffer::new();
    let mut context = RequestContext::new(buffer.clone());
    execute(&document, &mut context).unwrap();
    context.write("!").unwrap();
    assert_eq!(buffer.contents(), "---!");
}

#[test]
fn one_document_renders_concurrently() {
    let document = parse(
        "{$FOR i 0 3 1$}{$= i \"id\" \"?\" @paramGet $},{$END$}\
         {$= \"done\" \"id\" \"?\" @paramGet @pparamSet $}",
    )
    .unwrap();
    let session = PersistentParameters::new();

    let outputs: Vec<(usize, String)> = (0..64usize)
        .into_par_iter()
        .map(|n| {
            let id = n.to_string();
            let mut context = RequestContext::new(Vec::new())
                .with_parameters(params(&[("id", id.as_str())]))
                .with_persistent(session.clone());
            execute(&document, &mut context).unwrap();
            (n, String::from_utf8(context.into_output()).unwrap())
        })
        .collect();

    for (n, output) in outputs {
        assert_eq!(output, format!("0{n},1{n},2{n},"));
    }
    let snapshot = session.snapshot();
    assert_eq!(snapshot.len(), 64);
    assert!(snapshot.values().all(|v| v == "done"));
}
