/*
    This module is for storing and manipulating grammars
*/

pub mod english;

use std::collections::{BTreeSet, HashMap};
use std::fmt::Display;

use itertools::Itertools;

use crate::error_handling::*;

// Non-terminals start with an upper-case letter, everything else
// (including the empty string) is a terminal
pub fn is_nonterminal(symbol: &str) -> bool {
    symbol.chars().next().is_some_and(char::is_uppercase)
}

pub fn is_terminal(symbol: &str) -> bool {
    !is_nonterminal(symbol)
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Production {
    pub left: String,
    pub right: Vec<String>,
}

impl Production {
    pub fn new(left: &str, right: &[&str]) -> Self {
        Production {
            left: left.to_string(),
            right: right.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn is_epsilon(&self) -> bool {
        self.right.is_empty()
    }

    // A -> B
    pub fn is_unit(&self) -> bool {
        self.right.len() == 1 && is_nonterminal(&self.right[0])
    }

    // A -> a or A -> B C
    pub fn is_cnf(&self) -> bool {
        match self.right.as_slice() {
            [a] => is_terminal(a),
            [b, c] => is_nonterminal(b) && is_nonterminal(c),
            _ => false,
        }
    }
}

impl Display for Production {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.right.is_empty() {
            write!(f, "{} -> ε", self.left)
        } else {
            write!(f, "{} -> {}", self.left, self.right.iter().join(" "))
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum InvalidGrammarType {
    // The left side of a production is not a non-terminal
    NonterminalExpected(String),
    // A right side contains "" as a symbol
    EmptySymbol,
    // The start symbol is not a non-terminal
    InvalidStart(String),
    // The chosen start symbol has no productions
    UndefinedStart(String),
}

impl ErrorType for InvalidGrammarType {}

impl Display for InvalidGrammarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidGrammarType::NonterminalExpected(symbol) => write!(f, "`{}` is not a nonterminal and cannot be rewritten", symbol),
            InvalidGrammarType::EmptySymbol => write!(f, "Empty symbol on the right side of a production"),
            InvalidGrammarType::InvalidStart(symbol) => write!(f, "Start symbol `{}` is not a nonterminal", symbol),
            InvalidGrammarType::UndefinedStart(symbol) => write!(f, "Could not find definition for start symbol `{}`", symbol),
        }
    }
}

pub type InvalidGrammar = Error<InvalidGrammarType>;

// A start symbol and an ordered, duplicate-free list of productions.
// The non-terminal and terminal sets and the by-left index are derived
// from the productions and rebuilt with every new grammar value.
#[derive(Debug, Clone, PartialEq)]
pub struct Grammar {
    start: String,
    productions: Vec<Production>,
    nonterminals: BTreeSet<String>,
    terminals: BTreeSet<String>,
    by_left: HashMap<String, Vec<Vec<String>>>,
}

impl Grammar {
    pub fn new(start: &str, productions: Vec<Production>) -> Result<Self, InvalidGrammar> {
        if !is_nonterminal(start) {
            return Err(InvalidGrammar {
                location: Location::inline(0),
                error: InvalidGrammarType::InvalidStart(start.to_string()),
            });
        }

        for (num, production) in productions.iter().enumerate() {
            let error = if !is_nonterminal(&production.left) {
                Some(InvalidGrammarType::NonterminalExpected(production.left.clone()))
            } else if production.right.iter().any(String::is_empty) {
                Some(InvalidGrammarType::EmptySymbol)
            } else {
                None
            };

            if let Some(error) = error {
                return Err(InvalidGrammar { location: Location::inline(num + 1), error });
            }
        }

        Ok(Grammar::rebuilt(start.to_string(), productions))
    }

    // Builds a grammar from productions already known to be well formed.
    // Duplicates are dropped, keeping the first occurrence.
    pub(crate) fn rebuilt(start: String, productions: impl IntoIterator<Item = Production>) -> Self {
        let productions = productions.into_iter().unique().collect_vec();

        let nonterminals = productions.iter().map(|p| p.left.clone()).collect();
        let terminals = productions.iter()
            .flat_map(|p| p.right.iter())
            .filter(|s| is_terminal(s))
            .cloned()
            .collect();

        let mut by_left: HashMap<String, Vec<Vec<String>>> = HashMap::new();
        for p in &productions {
            by_left.entry(p.left.clone()).or_default().push(p.right.clone());
        }

        Grammar {
            start,
            productions,
            nonterminals,
            terminals,
            by_left,
        }
    }

    // Same productions, different start symbol, which has to be one of
    // the defined non-terminals
    pub fn with_start(self, start: &str) -> Result<Self, InvalidGrammar> {
        let error = if !is_nonterminal(start) {
            InvalidGrammarType::InvalidStart(start.to_string())
        } else if !self.nonterminals.contains(start) {
            InvalidGrammarType::UndefinedStart(start.to_string())
        } else {
            return Ok(Grammar { start: start.to_string(), ..self });
        };

        Err(InvalidGrammar { location: Location::inline(0), error })
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn productions(&self) -> &[Production] {
        &self.productions
    }

    pub fn nonterminals(&self) -> &BTreeSet<String> {
        &self.nonterminals
    }

    pub fn terminals(&self) -> &BTreeSet<String> {
        &self.terminals
    }

    // All right sides of `nonterminal`, in production order
    pub fn rights_of(&self, nonterminal: &str) -> &[Vec<String>] {
        self.by_left.get(nonterminal).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.productions.is_empty()
    }

    pub fn is_cnf(&self) -> bool {
        self.productions.iter().all(Production::is_cnf)
    }

    // Every symbol on any right side, in order of first appearance
    pub fn right_symbols(&self) -> impl Iterator<Item = &str> + '_ {
        self.productions.iter()
            .flat_map(|p| p.right.iter().map(String::as_str))
            .unique()
    }
}

impl Display for Grammar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "start: {}", self.start)?;
        for production in &self.productions {
            writeln!(f, "{}", production)?;
        }
        Ok(())
    }
}
