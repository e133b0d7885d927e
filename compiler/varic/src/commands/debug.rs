//! Debug commands: `lex` and `parse` for inspecting the front end.

use vari_diagnostic::emitter::DiagnosticEmitter;
use vari_lexer::LexWarning;
use vari_parse::Parser;

use super::{fail, read_file, source_emitter};
use crate::RunConfig;

/// Lex a file and display the token stream.
pub fn lex_file(path: &str, config: RunConfig) {
    let content = read_file(path);
    let mut emitter = source_emitter(&content, path, config);

    let (tokens, warnings) = vari_lexer::tokenize(&content);
    let diagnostics: Vec<_> = warnings.iter().map(LexWarning::to_diagnostic).collect();
    emitter.emit_all(&diagnostics);
    emitter.flush();

    println!("Tokens for '{}' ({} tokens):", path, tokens.len());
    for tok in &tokens {
        println!("  {:?} @ {}", tok.kind, tok.span);
    }
}

/// Parse a file and display each statement as an S-expression.
pub fn parse_file(path: &str, config: RunConfig) {
    let content = read_file(path);
    let mut emitter = source_emitter(&content, path, config);
    let mut parser = Parser::new(&content);

    loop {
        let parsed = parser.parse_statement();
        for warning in parser.take_warnings() {
            emitter.emit(&warning.to_diagnostic());
        }
        match parsed {
            Ok(Some(stmt)) => println!("{stmt}"),
            Ok(None) => break,
            Err(err) => fail(&mut emitter, &err.to_diagnostic()),
        }
    }
    emitter.flush();
}
