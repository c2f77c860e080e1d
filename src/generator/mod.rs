/*
    This module generates sentences
*/

use std::collections::{BTreeSet, HashMap};
use std::fmt::Display;

use itertools::Itertools;
use rand::prelude::*;

use crate::error_handling::ErrorType;
use crate::grammar::*;

#[derive(Debug, PartialEq)]
pub enum GenerateErrorType {
    // A nonterminal without productions was reached
    UndefinedNonterminal(String),
    // The derivation got deeper than allowed
    TooDeep,
}

impl ErrorType for GenerateErrorType {}

impl Display for GenerateErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateErrorType::UndefinedNonterminal(nonterminal) => write!(f, "No definition for nonterminal `{}`", nonterminal),
            GenerateErrorType::TooDeep => write!(f, "Derivation went too deep"),
        }
    }
}

pub type GenResult = Result<Vec<String>, GenerateErrorType>;

// Generates a random sentence of the grammar, picking right sides
// uniformly and giving up below `max_depth` levels of derivation
pub fn sample<R: Rng + ?Sized>(grammar: &Grammar, rng: &mut R, max_depth: usize) -> GenResult {
    let mut sentence = Vec::new();
    generate_symbol(grammar.start(), grammar, rng, max_depth, &mut sentence)?;
    Ok(sentence)
}

fn generate_symbol<R: Rng + ?Sized>(
    symbol: &str,
    grammar: &Grammar,
    rng: &mut R,
    depth_left: usize,
    sentence: &mut Vec<String>,
) -> Result<(), GenerateErrorType> {
    if is_terminal(symbol) {
        sentence.push(symbol.to_string());
        return Ok(());
    }

    if depth_left == 0 {
        return Err(GenerateErrorType::TooDeep);
    }

    let right = grammar.rights_of(symbol)
        .choose(rng)
        .ok_or_else(|| GenerateErrorType::UndefinedNonterminal(symbol.to_string()))?;

    for s in right {
        generate_symbol(s, grammar, rng, depth_left - 1, sentence)?;
    }

    Ok(())
}

// Every sentence of at most `max_len` tokens derivable from the start
// symbol, the empty one included. The sets per non-terminal grow until
// none of them changes.
pub fn bounded_language(grammar: &Grammar, max_len: usize) -> BTreeSet<Vec<String>> {
    let mut languages: HashMap<&str, BTreeSet<Vec<String>>> = HashMap::new();

    let mut changed = true;
    while changed {
        changed = false;
        for p in grammar.productions() {
            let mut partial = BTreeSet::from([Vec::new()]);

            for symbol in &p.right {
                let options = if is_nonterminal(symbol) {
                    languages.get(symbol.as_str()).cloned().unwrap_or_default()
                } else {
                    BTreeSet::from([vec![symbol.clone()]])
                };

                partial = partial.iter()
                    .cartesian_product(options.iter())
                    .filter(|(prefix, suffix)| prefix.len() + suffix.len() <= max_len)
                    .map(|(prefix, suffix)| prefix.iter().chain(suffix).cloned().collect_vec())
                    .collect();

                if partial.is_empty() {
                    break;
                }
            }

            let language = languages.entry(p.left.as_str()).or_default();
            for sentence in partial {
                changed |= language.insert(sentence);
            }
        }
    }

    languages.remove(grammar.start()).unwrap_or_default()
}
