mod cli;
mod cyk;
mod error_handling;
mod generator;
mod grammar;
mod normalizer;
mod reader;
mod sentence;

use std::io::BufRead;
use std::process::ExitCode;

use clap::Parser;
use itertools::Itertools;

use cli::Cli;
use cyk::CykParser;
use error_handling::{Error, Location};
use grammar::Grammar;

const DEMO: [&str; 7] = [
    "She eats a cake with a fork.",
    "The cat drinks the beer.",
    "She eat a cake with a fork.",
    "She eats cake with a fork.",
    "He cuts the meat in the oven.",
    "The cat the beer drinks.",
    "She drinks the juice.",
];

const SAMPLE_DEPTH: usize = 12;
const SAMPLE_ATTEMPTS: usize = 100;

fn load_grammar(cli: &Cli) -> Result<Grammar, Vec<String>> {
    let grammar = match &cli.grammar {
        Some(path) => reader::read_file(path)
            .map_err(|errors| errors.iter().map(ToString::to_string).collect_vec())?,
        None => grammar::english::english().map_err(|e| vec![e.to_string()])?,
    };

    match &cli.start {
        Some(start) => grammar.with_start(start).map_err(|e| vec![e.to_string()]),
        None => Ok(grammar),
    }
}

fn verdict(accepted: bool) -> &'static str {
    if accepted { "YES" } else { "NO" }
}

fn run_sentence(parser: &CykParser, sentence: &str) {
    let tokens = sentence::tokenize(sentence);
    let outcome = parser.parse(&tokens);

    println!("Input:  {}", sentence);
    println!("Tokens: {:?}", tokens);
    if outcome.table.is_empty() {
        println!("Result: NO  |  No tokens");
        return;
    }

    println!("Result: {}  |  Time: {:.3} ms", verdict(outcome.accepted), outcome.elapsed.as_secs_f64() * 1000.0);
    if let Some(root) = &outcome.root {
        let derivations = outcome.table.witnesses(0, outcome.table.len() - 1, parser.start()).len();
        println!("Parse tree (1 of {}):", derivations);
        println!("{}", root);
    }
}

fn run_samples(source: &Grammar, parser: &CykParser, amount: u32) {
    let mut rng = rand::thread_rng();

    for _ in 0..amount {
        let mut result = generator::sample(source, &mut rng, SAMPLE_DEPTH);
        for _ in 1..SAMPLE_ATTEMPTS {
            if result.is_ok() {
                break;
            }
            result = generator::sample(source, &mut rng, SAMPLE_DEPTH);
        }

        match result {
            Ok(tokens) => println!("{}  [{}]", tokens.join(" "), verdict(parser.parse(&tokens).accepted)),
            Err(error) => eprintln!("{}", Error { location: Location::inline(0), error }),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let source = match load_grammar(&cli) {
        Ok(grammar) => grammar,
        Err(errors) => {
            for error in errors {
                eprintln!("{}", error);
            }
            return ExitCode::FAILURE;
        }
    };
    let normalized = normalizer::normalize(&source);
    let parser = CykParser::new(&normalized);

    if normalized.is_empty() {
        eprintln!("Warning: `{}` derives no sentence, every input will be rejected", source.start());
    }

    if cli.show_grammar {
        print!("{}", normalized);
        println!("terminals: {}", normalized.terminals().iter().join(" "));
    }

    if let Some(len) = cli.enumerate {
        for sentence in generator::bounded_language(&source, len) {
            if !sentence.is_empty() {
                println!("{}", sentence.join(" "));
            }
        }
    }

    if let Some(amount) = cli.sample {
        run_samples(&source, &parser, amount);
    }

    if let Some(sentence) = &cli.sentence {
        run_sentence(&parser, sentence);
    }

    if cli.demo {
        for sentence in DEMO {
            println!("{}", "-".repeat(72));
            run_sentence(&parser, sentence);
        }
    }

    let batch = cli.show_grammar || cli.enumerate.is_some() || cli.sample.is_some() || cli.sentence.is_some() || cli.demo;
    if batch {
        return ExitCode::SUCCESS;
    }

    println!("Type a sentence and press Enter (Ctrl+D to quit):");
    for line in std::io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Could not read standard input: {}", e);
                return ExitCode::FAILURE;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        run_sentence(&parser, line.trim());
        println!();
    }

    ExitCode::SUCCESS
}
