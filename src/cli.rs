use std::path::PathBuf;

use clap::Parser;

/// Checks sentences against a context-free grammar with the CYK algorithm.
/// Without --sentence, --demo, --sample or --enumerate, sentences are read
/// from standard input, one per line.
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// File containing the grammar (default: a built-in toy english grammar)
    #[arg(short, long, value_name = "FILE")]
    pub grammar: Option<PathBuf>,

    /// Start symbol (default: first in the file)
    #[arg(short, long, value_name = "SYMBOL")]
    pub start: Option<String>,

    /// Sentence to check
    #[arg(long, value_name = "TEXT")]
    pub sentence: Option<String>,

    /// Check the demo sentences
    #[arg(long)]
    pub demo: bool,

    /// Print the grammar after conversion to Chomsky normal form
    #[arg(long)]
    pub show_grammar: bool,

    /// Generate and check random sentences
    #[arg(short = 'n', long, value_name = "AMOUNT")]
    pub sample: Option<u32>,

    /// List every sentence of at most LEN tokens
    #[arg(long, value_name = "LEN")]
    pub enumerate: Option<usize>,
}
