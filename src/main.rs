//! The `bsc-lexer` command.
//!
//! Tokenizes one BSC source file, echoes every token to the console and
//! writes the same listing to a symbol table file.
//!
//! Options:
//! - `-o, --output` - Where to write the symbol table (default `symbol_table.txt`)
//! - `--skip-comments` - Leave comment tokens out of the listing
//! - `-q, --quiet` - Do not echo tokens to the console
//!
//! Set `RUST_LOG` (e.g. `RUST_LOG=bsc_lexer=trace`) to see scanner logs.

use std::{path::PathBuf, process, time::Instant};

use bsc_lexer::{
    display_error, get_line_at_position,
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    read_source,
    symbol_table::write_symbol_table,
};
use clap::Parser;
use tracing::{debug, warn};

#[derive(Parser)]
#[command(name = "bsc-lexer", version, about = "Tokenize a BSC source file")]
struct Cli {
    /// Source file to tokenize
    #[arg(default_value = "text.bsc")]
    input: PathBuf,

    /// Where to write the symbol table
    #[arg(short, long, default_value = "symbol_table.txt")]
    output: PathBuf,

    /// Leave comment tokens out of the listing
    #[arg(long = "skip-comments")]
    skip_comments: bool,

    /// Do not echo tokens to the console
    #[arg(short, long)]
    quiet: bool,
}

fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    // Only initialize if RUST_LOG is set
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn report_unknown(source: &str, tokens: &[Token]) {
    for token in tokens.iter().filter(|token| token.kind == TokenKind::Unknown) {
        match get_line_at_position(source, token.span.start.0) {
            Some((line, _, column)) => {
                warn!(value = ?token.value, line, column = column + 1, "unrecognised character")
            }
            None => warn!(value = ?token.value, "unrecognised character"),
        }
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let source = match read_source(&cli.input) {
        Ok(source) => source,
        Err(error) => {
            display_error(&error);
            process::exit(1);
        }
    };

    let start = Instant::now();
    let tokens: Vec<Token> = Lexer::new(&source)
        .filter(|token| !(cli.skip_comments && token.kind.is_comment()))
        .collect();
    debug!(count = tokens.len(), elapsed = ?start.elapsed(), "tokenized");

    report_unknown(&source, &tokens);

    if !cli.quiet {
        for token in &tokens {
            println!("{}", token);
        }
    }

    if let Err(error) = write_symbol_table(&cli.output, &tokens) {
        display_error(&error);
        warn!("continuing without symbol table output");
    }
}
