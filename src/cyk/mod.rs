/*
    This module decides membership of token sequences with the CYK
    algorithm and builds derivation trees
*/

mod table;
mod tree;

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::grammar::{is_nonterminal, is_terminal, Grammar};
pub use table::ParseTable;
pub use tree::Node;

#[derive(Debug)]
pub struct ParseOutcome {
    pub accepted: bool,
    pub table: ParseTable,
    // First derivation of the start symbol over the whole input
    pub root: Option<Node>,
    // Time spent filling the table
    pub elapsed: Duration,
}

// A parser for one grammar in Chomsky normal form. The indices are never
// changed after construction, so a parser can be shared between threads.
// Productions that are not `A -> a` or `A -> B C` are ignored.
#[derive(Debug, Clone)]
pub struct CykParser {
    start: String,
    // a -> every A with A -> a
    term_index: HashMap<String, Vec<String>>,
    // B -> C -> every A with A -> B C
    bin_index: HashMap<String, HashMap<String, Vec<String>>>,
}

impl CykParser {
    pub fn new(grammar: &Grammar) -> Self {
        let mut term_index: HashMap<String, Vec<String>> = HashMap::new();
        let mut bin_index: HashMap<String, HashMap<String, Vec<String>>> = HashMap::new();

        for p in grammar.productions() {
            match p.right.as_slice() {
                [a] if is_terminal(a) => {
                    term_index.entry(a.clone()).or_default().push(p.left.clone());
                }
                [b, c] if is_nonterminal(b) && is_nonterminal(c) => {
                    bin_index.entry(b.clone()).or_default()
                        .entry(c.clone()).or_default()
                        .push(p.left.clone());
                }
                _ => {}
            }
        }

        CykParser {
            start: grammar.start().to_string(),
            term_index,
            bin_index,
        }
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    fn preterminals(&self, token: &str) -> &[String] {
        self.term_index.get(token).map(Vec::as_slice).unwrap_or(&[])
    }

    fn parents(&self, left: &str, right: &str) -> &[String] {
        self.bin_index.get(left)
            .and_then(|by_right| by_right.get(right))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    // Fills the table bottom-up by span length, keeping one node per
    // combination of left witness, right witness and parent. Unknown
    // tokens and empty input are rejected, not reported as errors.
    pub fn parse<S: AsRef<str>>(&self, tokens: &[S]) -> ParseOutcome {
        let n = tokens.len();
        if n == 0 {
            return ParseOutcome {
                accepted: false,
                table: ParseTable::new(0),
                root: None,
                elapsed: Duration::ZERO,
            };
        }

        let mut table = ParseTable::new(n);
        let timer = Instant::now();

        for (i, token) in tokens.iter().enumerate() {
            let token = token.as_ref();
            for a in self.preterminals(token) {
                table.add(Node::leaf(a, i, token));
            }
        }

        for span in 2..=n {
            for i in 0..=n - span {
                let j = i + span - 1;
                let mut found = Vec::new();

                for k in i..j {
                    let (Some(left_cell), Some(right_cell)) = (table.cell(i, k), table.cell(k + 1, j)) else {
                        continue;
                    };

                    for (b, left_nodes) in left_cell {
                        for (c, right_nodes) in right_cell {
                            for a in self.parents(b, c) {
                                for left in left_nodes {
                                    for right in right_nodes {
                                        found.push(Node::binary(a, left.clone(), right.clone()));
                                    }
                                }
                            }
                        }
                    }
                }

                for node in found {
                    table.add(node);
                }
            }
        }

        let elapsed = timer.elapsed();
        let root = table.witnesses(0, n - 1, &self.start).first().cloned();

        ParseOutcome {
            accepted: root.is_some(),
            table,
            root,
            elapsed,
        }
    }
}
