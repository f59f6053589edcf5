#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;

use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn no_arguments_is_help() {
    assert_eq!(parse_args(&[]).unwrap(), Command::Help);
    assert_eq!(parse_args(&args(&["--help"])).unwrap(), Command::Help);
}

#[test]
fn tree_and_lex_take_one_path() {
    assert_eq!(
        parse_args(&args(&["tree", "a.smscr"])).unwrap(),
        Command::Tree {
            path: "a.smscr".to_owned()
        }
    );
    assert_eq!(
        parse_args(&args(&["lex", "a.smscr"])).unwrap(),
        Command::Lex {
            path: "a.smscr".to_owned()
        }
    );
    assert!(matches!(
        parse_args(&args(&["lex"])),
        Err(CliError::Usage(_))
    ));
    assert!(matches!(
        parse_args(&args(&["tree", "a", "b"])),
        Err(CliError::Usage(_))
    ));
}

#[test]
fn render_collects_options_in_any_order() {
    let command = parse_args(&args(&[
        "render", "-p", "a=1", "page.smscr", "-P", "visits=3", "-t", "x=y=z", "--headers",
        "--mime", "text/plain", "--encoding", "utf8",
    ]))
    .unwrap();

    let Command::Render { path, options } = command else {
        panic!("expected render, got {command:?}");
    };
    assert_eq!(path, "page.smscr");
    assert_eq!(options.parameters.get("a").map(String::as_str), Some("1"));
    assert_eq!(options.persistent.get("visits").map(String::as_str), Some("3"));
    assert_eq!(options.temporary.get("x").map(String::as_str), Some("y=z"));
    assert!(options.headers);
    assert_eq!(options.mime_type.as_deref(), Some("text/plain"));
    assert_eq!(options.encoding.as_deref(), Some("utf8"));
}

#[test]
fn render_errors() {
    for bad in [
        &["render"][..],
        &["render", "a", "b"],
        &["render", "a", "-p"],
        &["render", "a", "-p", "novalue"],
        &["render", "a", "--mime"],
        &["render", "a", "--bogus"],
    ] {
        let err = parse_args(&args(bad)).unwrap_err();
        assert!(matches!(err, CliError::Usage(_)), "{bad:?}: {err}");
        assert_eq!(err.exit_code(), 2);
    }
}

#[test]
fn unknown_command() {
    let err = parse_args(&args(&["serve"])).unwrap_err();
    assert_eq!(err.to_string(), "unknown command `serve`");
}

#[test]
fn assignment_splits_on_first_equals() {
    assert_eq!(
        parse_assignment("k=").unwrap(),
        ("k".to_owned(), String::new())
    );
    assert!(parse_assignment("=v").is_err());
}
