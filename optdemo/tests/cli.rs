//! End-to-end tests of the optdemo binary: exit status, stdout and stderr.

use std::process::Command;

const USAGE: &str =
    "optdemo [-f|--foo] [-b|--bar] [-h|--help] -s|--str STR [-n|--count N] [-v|--verbose] path\n";

struct Run {
    code: Option<i32>,
    stdout: String,
    stderr: String,
}

fn optdemo(args: &[&str]) -> Run {
    let output = Command::new(env!("CARGO_BIN_EXE_optdemo"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run optdemo");
    Run {
        code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

#[test]
fn parses_long_short_and_positional() {
    let run = optdemo(&["--foo", "-b", "pos1", "-s", "val"]);
    assert_eq!(run.code, Some(0), "stderr:\n{}", run.stderr);
    assert_eq!(
        run.stdout,
        "foo=1 bar=1 verbose=0 count=(null) path=pos1 str=val\n"
    );
    assert!(run.stderr.is_empty(), "unexpected stderr:\n{}", run.stderr);
}

#[test]
fn grouped_short_flags() {
    let run = optdemo(&["-fb", "pos1", "-s", "val"]);
    assert_eq!(run.code, Some(0), "stderr:\n{}", run.stderr);
    assert_eq!(
        run.stdout,
        "foo=1 bar=1 verbose=0 count=(null) path=pos1 str=val\n"
    );
}

#[test]
fn counter_and_integer() {
    let run = optdemo(&["-vvs", "val", "--count", "-4", "pos1", "--verbose"]);
    assert_eq!(run.code, Some(0), "stderr:\n{}", run.stderr);
    assert_eq!(run.stdout, "foo=0 bar=0 verbose=3 count=-4 path=pos1 str=val\n");
}

#[test]
fn missing_required_option() {
    let run = optdemo(&["pos1"]);
    assert_eq!(run.code, Some(64));
    assert!(run.stdout.is_empty());
    assert_eq!(run.stderr, format!("option required: -s|--str\n{}", USAGE));
}

#[test]
fn unknown_option() {
    let run = optdemo(&["--nope"]);
    assert_eq!(run.code, Some(64));
    assert_eq!(run.stderr, format!("unknown option: --nope\n{}", USAGE));
}

#[test]
fn missing_option_value() {
    let run = optdemo(&["--str"]);
    assert_eq!(run.code, Some(64));
    assert_eq!(
        run.stderr,
        format!("option requires an argument: --str\n{}", USAGE)
    );
}

#[test]
fn missing_positional() {
    let run = optdemo(&["-s", "val"]);
    assert_eq!(run.code, Some(64));
    assert_eq!(
        run.stderr,
        format!("expected a positional argument: path\n{}", USAGE)
    );
}

#[test]
fn extra_positional() {
    let run = optdemo(&["a", "b", "-s", "val"]);
    assert_eq!(run.code, Some(64));
    assert_eq!(
        run.stderr,
        format!("unexpected positional argument: b\n{}", USAGE)
    );
}

#[test]
fn two_value_options_in_group() {
    let run = optdemo(&["-sn", "val", "3", "pos1"]);
    assert_eq!(run.code, Some(64));
    assert_eq!(
        run.stderr,
        format!(
            "one argument option allowed per short option group: -sn -n\n{}",
            USAGE
        )
    );
}

#[test]
fn bad_integer() {
    let run = optdemo(&["-s", "val", "-n", "12x", "pos1"]);
    assert_eq!(run.code, Some(64));
    assert_eq!(
        run.stderr,
        format!("required argument of type int: -n\n{}", USAGE)
    );
}

#[test]
fn help_wins_over_parse_errors() {
    let run = optdemo(&["-h"]);
    assert_eq!(run.code, Some(0), "stderr:\n{}", run.stderr);
    assert!(run.stderr.is_empty(), "unexpected stderr:\n{}", run.stderr);

    let mut lines = run.stdout.lines();
    assert_eq!(lines.next(), Some(USAGE.trim_end()));
    let table: Vec<&str> = lines.collect();
    assert_eq!(
        table,
        [
            format!("{:<30}{}", "  -f|--foo", "foo option"),
            format!("{:<30}{}", "  -b|--bar", "bar option"),
            format!("{:<30}{}", "  -h|--help", "show help message"),
            format!("{:<30}{}", "  -s|--str STR", "string option"),
            format!("{:<30}{}", "  -n|--count N", "a number"),
            format!("{:<30}{}", "  -v|--verbose", "verbosity level"),
            format!("{:<30}{}", "  path", "a path"),
        ]
    );
}

#[test]
fn help_taken_as_option_value_is_not_help() {
    let run = optdemo(&["-s", "-h"]);
    assert_eq!(run.code, Some(64));
    assert!(run.stdout.is_empty(), "unexpected stdout:\n{}", run.stdout);
    assert_eq!(
        run.stderr,
        format!("expected a positional argument: path\n{}", USAGE)
    );
}

#[test]
fn help_after_failing_token_is_not_help() {
    let run = optdemo(&["--nope", "-h"]);
    assert_eq!(run.code, Some(64));
    assert!(run.stdout.is_empty(), "unexpected stdout:\n{}", run.stdout);
    assert_eq!(run.stderr, format!("unknown option: --nope\n{}", USAGE));

    let run = optdemo(&["--nope", "-xh"]);
    assert_eq!(run.code, Some(64));
    assert_eq!(run.stderr, format!("unknown option: --nope\n{}", USAGE));
}

#[test]
fn help_before_failing_token() {
    let run = optdemo(&["-fh", "--nope"]);
    assert_eq!(run.code, Some(0), "stderr:\n{}", run.stderr);
    assert!(run.stdout.starts_with(USAGE));
    assert!(run.stderr.is_empty(), "unexpected stderr:\n{}", run.stderr);
}

#[test]
fn help_after_valid_command_line() {
    let run = optdemo(&["pos1", "-s", "val", "--help"]);
    assert_eq!(run.code, Some(0));
    assert!(run.stdout.starts_with(USAGE));
    assert!(!run.stdout.contains("foo="));
}

#[test]
fn debug_logging_goes_to_stderr() {
    let output = Command::new(env!("CARGO_BIN_EXE_optdemo"))
        .args(["pos1", "-s", "val"])
        .env("RUST_LOG", "debug")
        .output()
        .expect("failed to run optdemo");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stdout, "foo=0 bar=0 verbose=0 count=(null) path=pos1 str=val\n");
    assert!(stderr.contains("positional"), "stderr:\n{}", stderr);
}
