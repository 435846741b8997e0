use std::{
    io::{self, BufRead, Write},
    process::ExitCode,
};

use arithex::{evaluate, interpreter::lexer::tokenize};
use clap::Parser;
use tracing_subscriber::EnvFilter;

const PROMPT: &str = "Enter your arithmetic expression: ";

/// arithex evaluates a single integer arithmetic expression with `+`, `-`,
/// `*`, `/` and prefix signs.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Only report whether the expression is valid, without its value.
    #[arg(short, long)]
    check: bool,

    /// Print the tokens of the expression instead of evaluating it.
    #[arg(short, long, conflicts_with = "check")]
    tokens: bool,

    /// The expression to evaluate. Read from standard input when omitted.
    expression: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env())
                             .with_writer(io::stderr)
                             .init();

    tracing::trace!("CLI args = {:?}", args);

    let source = match args.expression {
        Some(expression) => expression,
        None => match read_expression() {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Failed to read the expression from standard input: {e}");
                return ExitCode::FAILURE;
            },
        },
    };

    if args.tokens {
        return match tokenize(&source) {
            Ok(tokens) => {
                for token in tokens {
                    println!("{token}");
                }
                ExitCode::SUCCESS
            },
            Err(e) => {
                eprintln!("Error: {e}");
                ExitCode::FAILURE
            },
        };
    }

    match evaluate(&source) {
        Ok(value) => {
            println!("The expression has been parsed successfully");
            if !args.check {
                println!("Result: {value}");
            }
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        },
    }
}

/// Prompts on standard output and reads one line from standard input, without
/// its line terminator.
fn read_expression() -> io::Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "{PROMPT}")?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let trimmed = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed);
    Ok(line)
}
