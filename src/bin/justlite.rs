//! CLI wrapper for the justlite interpreter.
//!
//! Usage:
//!   justlite <file.js>          # Run a script file
//!   justlite -e "code"          # Run inline code
//!   justlite < file.js          # Run a script read from stdin
//!   justlite --ast <file.js>    # Print the lowered AST instead of running

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use justlite::parser::{parse_to_token_tree, JsParser};
use justlite::runner::api::execute;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "justlite", version, about = "Run a script in the justlite interpreter")]
struct Cli {
    /// Script to run. Read from stdin when absent.
    path: Option<PathBuf>,

    /// Run this code instead of a file.
    #[arg(short = 'e', long = "eval", conflicts_with = "path")]
    eval: Option<String>,

    /// Print the lowered AST and exit.
    #[arg(long)]
    ast: bool,

    /// Print the raw parse tree and exit.
    #[arg(long, conflicts_with = "ast")]
    tokens: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let source = match read_source(&cli) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading script: {}", e);
            process::exit(1);
        }
    };

    if cli.tokens {
        match parse_to_token_tree(&source) {
            Ok(tree) => println!("{}", tree),
            Err(e) => fail(e),
        }
        return;
    }

    let ast = match JsParser::parse_to_ast_from_str(&source) {
        Ok(program) => program,
        Err(e) => fail(e),
    };

    if cli.ast {
        println!("{:#?}", ast);
        return;
    }

    println!("{}", execute(&ast.body));
}

fn read_source(cli: &Cli) -> io::Result<String> {
    if let Some(code) = &cli.eval {
        return Ok(code.clone());
    }
    match &cli.path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

fn fail(e: impl std::fmt::Display) -> ! {
    eprintln!("{}", e);
    process::exit(1);
}
