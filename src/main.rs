// ABOUTME: Thin CLI driver: loads a standardized AST as JSON and evaluates it

use clap::Parser;
use rpal_cse::ast::Ast;
use rpal_cse::value::Value;
use rpal_cse::{config, evaluate, evaluate_with_max_depth};
use std::path::PathBuf;
use std::process::ExitCode;

/// Evaluates a standardized RPAL AST with the CSE machine
#[derive(Parser, Debug)]
#[command(name = "rpal-cse")]
#[command(version = config::VERSION)]
#[command(about = "Control-Stack-Environment machine for standardized RPAL ASTs")]
struct CliArgs {
    /// Path to a JSON-encoded standardized AST
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Abort with an error once lambda-application nesting exceeds this depth
    #[arg(long = "max-depth", value_name = "N")]
    max_depth: Option<usize>,
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let source = match std::fs::read_to_string(&args.file) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("rpal-cse: could not read {}: {e}", args.file.display());
            return ExitCode::from(2);
        }
    };

    let ast: Ast = match serde_json::from_str(&source) {
        Ok(ast) => ast,
        Err(e) => {
            eprintln!("rpal-cse: malformed standardized AST in {}: {e}", args.file.display());
            return ExitCode::from(2);
        }
    };

    let result = match args.max_depth {
        Some(max_depth) => evaluate_with_max_depth(&ast, max_depth),
        None => evaluate(&ast),
    };

    match result {
        // `Print`/`print` already wrote the program's visible output as a
        // side effect (spec §4.5); echoing the `Dummy` it returns would
        // append a spurious "dummy" after that output (spec §8 scenario 1
        // expects exactly `5`, not `5dummy`). Only echo a genuine result
        // value, e.g. for a program whose last expression isn't a `Print`.
        Ok(Value::Dummy) => ExitCode::SUCCESS,
        Ok(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("rpal-cse: {e}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_args_parse_file_only() {
        let args = CliArgs::parse_from(["rpal-cse", "program.json"]);
        assert_eq!(args.file, PathBuf::from("program.json"));
        assert_eq!(args.max_depth, None);
    }

    #[test]
    fn test_cli_args_parse_with_max_depth() {
        let args = CliArgs::parse_from(["rpal-cse", "program.json", "--max-depth", "500"]);
        assert_eq!(args.max_depth, Some(500));
    }

    #[test]
    fn test_cli_verifies_clap_invariants() {
        CliArgs::command().debug_assert();
    }
}
