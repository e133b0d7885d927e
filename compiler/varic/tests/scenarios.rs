// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Whole-program tests through the driver.
//!
//! Every program runs in a fresh interpreter with a capturing print
//! handler, so output, warnings and the final environment are all checked.

use pretty_assertions::assert_eq;
use vari_diagnostic::ErrorCode;
use vari_eval::EvalError;
use vari_ir::Span;
use vari_parse::{Expectation, ParseError};
use varic::{run_source, RunError, SAMPLE_PROGRAM};

fn error_code(source: &str) -> ErrorCode {
    let run = run_source(source);
    run.result.expect_err("program should fail").to_diagnostic().code
}

#[test]
fn declaration_then_print_sum() {
    let run = run_source("variable a = 10; print(a + 5);");
    assert_eq!(run.result, Ok(()));
    assert_eq!(run.output, "15\n");
    assert_eq!(run.env.sorted_bindings(), vec![("a", 10)]);
}

#[test]
fn redeclaration_overwrites_value() {
    let run = run_source("variable x = 1; variable x = 2; print(x);");
    assert_eq!(run.result, Ok(()));
    assert_eq!(run.output, "2\n");
    assert_eq!(run.env.lookup("x"), Some(2));
}

#[test]
fn undefined_variable_is_a_runtime_error_with_no_output() {
    let run = run_source("print(a);");
    assert_eq!(run.output, "");
    assert_eq!(
        run.result,
        Err(RunError::Eval(EvalError::UndefinedVariable {
            name: "a".to_string(),
            span: Span::new(6, 7),
        }))
    );
}

#[test]
fn chained_addition_is_left_associative() {
    let run = run_source("variable b = 1 + 2 + 3;");
    assert_eq!(run.result, Ok(()));
    assert_eq!(run.output, "");
    assert_eq!(run.env.sorted_bindings(), vec![("b", 6)]);
}

#[test]
fn values_are_read_at_the_point_of_use() {
    let run = run_source(
        "variable a = 1; print(a); variable a = a + 10; print(a); variable b = a + a; print(b);",
    );
    assert_eq!(run.result, Ok(()));
    assert_eq!(run.output, "1\n11\n22\n");
    assert_eq!(run.env.sorted_bindings(), vec![("a", 11), ("b", 22)]);
}

#[test]
fn undefined_variable_halts_before_later_output() {
    let run = run_source("print(1); print(nope); print(2);");
    assert_eq!(run.output, "1\n");
    assert_eq!(error_code("print(1); print(nope); print(2);"), ErrorCode::E6001);
}

#[test]
fn missing_assign_is_a_syntax_error() {
    let run = run_source("variable a 10;");
    assert_eq!(run.output, "");
    assert!(run.env.is_empty());
    assert!(matches!(
        run.result,
        Err(RunError::Parse(ParseError::Expected {
            expected: Expectation::AssignAfterName,
            ..
        }))
    ));
}

#[test]
fn missing_close_paren_halts_before_evaluation() {
    let run = run_source("variable a = 1; print(a;");
    assert_eq!(run.output, "");
    assert_eq!(run.env.lookup("a"), Some(1));
    assert_eq!(error_code("variable a = 1; print(a;"), ErrorCode::E1001);
}

#[test]
fn missing_semicolon_halts_before_evaluation() {
    let run = run_source("print(4) print(5);");
    assert_eq!(run.output, "");
    assert!(matches!(
        run.result,
        Err(RunError::Parse(ParseError::Expected {
            expected: Expectation::PrintSemicolon,
            span,
            ..
        })) if span == Span::new(9, 14)
    ));
}

#[test]
fn missing_variable_name() {
    assert_eq!(error_code("variable = 3;"), ErrorCode::E1004);
}

#[test]
fn dangling_plus() {
    assert_eq!(error_code("print(1 +);"), ErrorCode::E1002);
}

#[test]
fn statement_must_start_with_a_keyword() {
    assert_eq!(error_code("a = 1;"), ErrorCode::E1005);
}

#[test]
fn keyword_prefixes_are_identifiers() {
    let run = run_source("variable variance = 3; variable printer = 4; print(variance + printer);");
    assert_eq!(run.result, Ok(()));
    assert_eq!(run.output, "7\n");
}

#[test]
fn unknown_characters_are_skipped_with_warnings() {
    let run = run_source("variable a = 1; @ print(a + 2);");
    assert_eq!(run.result, Ok(()));
    assert_eq!(run.output, "3\n");
    assert_eq!(run.warnings.len(), 1);
    assert_eq!(run.warnings[0].span(), Span::new(16, 17));
}

#[test]
fn whitespace_is_insignificant() {
    let run = run_source("variable\n\ta\n=\n7\n;\nprint  (  a  )  ;");
    assert_eq!(run.result, Ok(()));
    assert_eq!(run.output, "7\n");
}

#[test]
fn integer_limits() {
    assert_eq!(
        run_source("print(9223372036854775807);").output,
        "9223372036854775807\n"
    );
    assert_eq!(error_code("print(9223372036854775808);"), ErrorCode::E6002);
    assert_eq!(error_code("print(9223372036854775807 + 1);"), ErrorCode::E6003);
}

#[test]
fn sample_program_prints_fifteen() {
    let run = run_source(SAMPLE_PROGRAM);
    assert_eq!(run.result, Ok(()));
    assert_eq!(run.output, "15\n");
}

#[test]
fn very_long_addition_chain() {
    let source = format!("variable n = 1{}; print(n + 1);", " + 1".repeat(200_000));
    let run = run_source(&source);
    assert_eq!(run.result, Ok(()));
    assert_eq!(run.output, "200002\n");
    assert_eq!(run.env.lookup("n"), Some(200_001));
}

#[test]
fn non_breaking_space_is_reported_not_skipped_silently() {
    let run = run_source("variable a = 1;\u{a0}print(a);");
    assert_eq!(run.result, Ok(()));
    assert_eq!(run.output, "1\n");
    assert_eq!(run.warnings.len(), 1);
    assert_eq!(run.warnings[0].span(), Span::new(15, 17));
}
