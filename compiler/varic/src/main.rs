//! The `vari` command-line interpreter.

use varic::commands::{eval_source, lex_file, parse_file, run_demo, run_file};
use varic::{init_tracing, RunConfig};

fn main() {
    init_tracing();

    let mut config = RunConfig::default();
    let mut args: Vec<String> = Vec::new();
    for arg in std::env::args().skip(1) {
        match config.apply_flag(&arg) {
            Ok(true) => {}
            Ok(false) => args.push(arg),
            Err(value) => {
                eprintln!("error: invalid value '{value}' for --color (expected auto, always or never)");
                std::process::exit(2);
            }
        }
    }

    let Some(command) = args.first() else {
        print_usage();
        std::process::exit(2);
    };

    match command.as_str() {
        "run" => run_file(require_arg(&args, "run <file>"), config),
        "eval" => eval_source(require_arg(&args, "eval <source>"), config),
        "lex" => lex_file(require_arg(&args, "lex <file>"), config),
        "parse" => parse_file(require_arg(&args, "parse <file>"), config),
        "demo" => run_demo(config),
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-V" => {
            println!("vari {}", env!("CARGO_PKG_VERSION"));
        }
        other => {
            eprintln!("error: unknown command '{other}'");
            eprintln!();
            print_usage_to_stderr();
            std::process::exit(2);
        }
    }
}

/// The single positional argument after the command, or a usage error.
fn require_arg<'a>(args: &'a [String], usage: &str) -> &'a str {
    match args.get(1..).unwrap_or_default() {
        [arg] => arg,
        [] => {
            eprintln!("Usage: vari {usage}");
            std::process::exit(2);
        }
        [_, extra, ..] => {
            eprintln!("error: unexpected argument '{extra}'");
            eprintln!("Usage: vari {usage}");
            std::process::exit(2);
        }
    }
}

const USAGE: &str = "\
vari - a tiny integer interpreter

Usage: vari [--color=auto|always|never] <command> [args]

Commands:
  run <file>       Parse and evaluate a program file
  eval <source>    Parse and evaluate source text
  lex <file>       Tokenize and display tokens
  parse <file>     Parse and display each statement
  demo             Run the sample program `variable a = 10; print(a + 5);`
  help             Show this help message
  version          Show version information

Environment:
  VARI_LOG         Tracing filter (falls back to RUST_LOG), e.g. VARI_LOG=debug";

fn print_usage() {
    println!("{USAGE}");
}

fn print_usage_to_stderr() {
    eprintln!("{USAGE}");
}
