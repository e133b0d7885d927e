// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Rendering of driver errors and warnings through the terminal emitter.

use pretty_assertions::assert_eq;
use vari_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use vari_diagnostic::Diagnostic;
use varic::run_source;

fn render(source: &str, diagnostics: &[Diagnostic]) -> String {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false)
        .with_source(source)
        .with_file_path("prog.vari");
    emitter.emit_all(diagnostics);
    String::from_utf8(emitter.into_inner()).unwrap()
}

#[test]
fn missing_semicolon_points_at_next_line() {
    let source = "variable a = 1\nprint(a);";
    let err = run_source(source).result.unwrap_err();
    assert_eq!(
        render(source, &[err.to_diagnostic()]),
        "error[E1001]: expected ';' at the end of statement, found `print`\n\
         \x20 --> prog.vari:2:1: expected ';' at the end of statement\n\
         \x20  = help: every statement ends with `;`\n"
    );
}

#[test]
fn undefined_variable_suggests_a_declaration() {
    let source = "print(1);\nprint(1 + total);";
    let err = run_source(source).result.unwrap_err();
    assert_eq!(
        render(source, &[err.to_diagnostic()]),
        "error[E6001]: undefined variable `total`\n\
         \x20 --> prog.vari:2:11: not declared before this use\n\
         \x20  = help: declare it first: `variable total = 0;`\n"
    );
}

#[test]
fn unknown_character_renders_as_warning() {
    let source = "print(2 # + 3);";
    let run = run_source(source);
    assert_eq!(run.result, Ok(()));
    let diagnostics: Vec<Diagnostic> = run.warnings.iter().map(|w| w.to_diagnostic()).collect();
    assert_eq!(
        render(source, &diagnostics),
        "warning[E0002]: unknown character `#`\n\
         \x20 --> prog.vari:1:9: skipped\n"
    );
}

#[test]
fn overflow_carries_a_range_note() {
    let source = "print(9223372036854775807 + 1);";
    let err = run_source(source).result.unwrap_err();
    assert_eq!(
        render(source, &[err.to_diagnostic()]),
        "error[E6003]: integer overflow evaluating `9223372036854775807 + 1`\n\
         \x20 --> prog.vari:1:7: sum overflows\n\
         \x20  = note: integers range from -9223372036854775808 to 9223372036854775807\n"
    );
}
