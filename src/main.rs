use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use squid::{
    interpreter::{
        evaluator::core::{DEFAULT_MAX_DEPTH, Interpreter},
        value::core::Value,
    },
    repl, run_file,
};

/// squid is a small, dynamically typed scripting language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The `.sqd` script to run. Starts the interactive prompt when omitted.
    file: Option<PathBuf>,

    /// Maximum number of nested function calls before a script is stopped.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Enables debug logging. `RUST_LOG` takes precedence when set.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    execute(&args)
}

fn execute(args: &Args) -> ExitCode {
    let mut interpreter = Interpreter::new().with_max_depth(args.max_depth);

    let Some(path) = &args.file else {
        let user = std::env::var("USER").or_else(|_| std::env::var("USERNAME"))
                                        .unwrap_or_else(|_| "there".to_string());
        println!("{}", repl::greeting(&user));

        return match repl::start(&mut interpreter) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        };
    };

    match run_file(&mut interpreter, path) {
        Ok(Some(error @ Value::Error(_))) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        },
        Ok(Some(value)) => {
            println!("{value}");
            ExitCode::SUCCESS
        },
        Ok(None) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
