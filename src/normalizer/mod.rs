/*
    This module converts grammars to Chomsky normal form
*/

mod closures;
mod fresh;
mod shaping;

use crate::grammar::{Grammar, Production};
use closures::{remove_epsilon, remove_unit, remove_useless};
use fresh::FreshNames;
use shaping::{binarize, isolate_terminals};

// Converts a grammar into Chomsky normal form, keeping its non-empty
// strings. The start symbol of the result never appears on a right side,
// and a grammar whose start symbol derives nothing comes back empty.
pub fn normalize(grammar: &Grammar) -> Grammar {
    let g = remove_useless(grammar);
    let g = remove_epsilon(&g);
    let g = remove_unit(&g);
    let g = isolate_terminals(&g);
    let g = binarize(&g);
    let g = rebind_start(g);
    let g = drop_epsilon(&g);

    debug_assert!(g.is_cnf(), "not in normal form:\n{}", g);
    g
}

// Gives the grammar a start symbol that no right side mentions.
// `S0 -> S` is resolved on the spot by copying the productions of `S`.
fn rebind_start(grammar: Grammar) -> Grammar {
    let start = grammar.start();
    if !grammar.right_symbols().any(|s| s == start) {
        return grammar;
    }

    let new_start = FreshNames::for_grammar(&grammar).fresh("S0");
    let copies = grammar.rights_of(start).iter()
        .map(|right| Production { left: new_start.clone(), right: right.clone() });
    let productions = grammar.productions().iter().cloned().chain(copies).collect::<Vec<_>>();

    Grammar::rebuilt(new_start, productions)
}

// Removes `S -> ε` along with anything it leaves without a derivation
fn drop_epsilon(grammar: &Grammar) -> Grammar {
    let productions = grammar.productions().iter()
        .filter(|p| !p.is_epsilon())
        .cloned();

    remove_useless(&Grammar::rebuilt(grammar.start().to_string(), productions))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use expect_test::expect;
    use itertools::Itertools;

    use super::*;
    use crate::grammar::english::english;
    use crate::grammar::is_nonterminal;

    fn grammar(start: &str, productions: &[(&str, &[&str])]) -> Grammar {
        Grammar::new(start, productions.iter().map(|(l, r)| Production::new(l, r)).collect()).unwrap()
    }

    fn production_set(grammar: &Grammar) -> HashSet<Production> {
        grammar.productions().iter().cloned().collect()
    }

    // Exercises every stage: epsilon, units, terminals in long right
    // sides, long right sides, useless symbols and a recursive start
    fn busy_grammar() -> Grammar {
        grammar("S", &[
            ("S", &["A", "S", "B"]),
            ("S", &["a", "b"]),
            ("S", &["C"]),
            ("A", &["a"]),
            ("A", &[]),
            ("B", &["b"]),
            ("C", &["c", "C", "c", "c"]),
            ("C", &["d"]),
            ("D", &["d"]),
            ("E", &["E", "e"]),
            ("S", &["E"]),
        ])
    }

    #[test]
    fn normalize_balanced_brackets() {
        let g = grammar("S", &[
            ("S", &["a", "S", "b"]),
            ("S", &[]),
        ]);

        expect![[r#"
            start: S0
            S -> T_a BIN_S
            BIN_S -> S T_b
            S -> T_a T_b
            T_a -> a
            T_b -> b
            S0 -> T_a BIN_S
            S0 -> T_a T_b
        "#]].assert_eq(&normalize(&g).to_string());
    }

    #[test]
    fn english_is_already_in_shape() {
        let source = english().unwrap();
        let normalized = normalize(&source);

        assert_eq!(normalized.start(), "S");
        assert_eq!(production_set(&normalized), production_set(&source));
    }

    #[test]
    fn shape_invariant() {
        for g in [busy_grammar(), english().unwrap()] {
            let normalized = normalize(&g);

            assert!(!normalized.is_empty());
            assert!(normalized.is_cnf(), "not in normal form:\n{}", normalized);
            assert!(!normalized.right_symbols().contains(&normalized.start()));
        }
    }

    #[test]
    fn normalizing_twice_changes_nothing() {
        for g in [busy_grammar(), english().unwrap()] {
            let once = normalize(&g);
            let twice = normalize(&once);

            assert_eq!(twice.start(), once.start());
            assert_eq!(production_set(&twice), production_set(&once));
        }
    }

    #[test]
    fn deterministic() {
        assert_eq!(normalize(&busy_grammar()), normalize(&busy_grammar()));
    }

    #[test]
    fn fresh_names_are_unique() {
        let source = busy_grammar();
        let normalized = normalize(&source);

        // Each introduced non-terminal has its own productions, so two
        // introductions sharing a name would show up as extra rules
        // under one left side
        let introduced = normalized.nonterminals().iter()
            .filter(|nt| !source.nonterminals().contains(*nt))
            .collect_vec();
        assert!(introduced.iter().all(|nt| is_nonterminal(nt)));
        assert!(introduced.iter().all(|nt| nt.starts_with("T_") || nt.starts_with("BIN_") || nt.starts_with("S0")));

        // `C -> c C c c` needs two links
        let links = introduced.iter().filter(|nt| nt.starts_with("BIN_C")).count();
        assert_eq!(links, 2);
        for link in introduced.iter().filter(|nt| nt.starts_with("BIN_")) {
            assert_eq!(normalized.rights_of(link).len(), 1);
        }
    }

    #[test]
    fn start_deriving_nothing() {
        let g = grammar("S", &[
            ("S", &["A", "b"]),
            ("A", &["A", "a"]),
        ]);
        let normalized = normalize(&g);

        assert!(normalized.is_empty());
        assert_eq!(normalized.start(), "S");
    }

    #[test]
    fn only_epsilon() {
        let g = grammar("S", &[("S", &[])]);

        assert!(normalize(&g).is_empty());
    }

    #[test]
    fn start_name_taken() {
        let g = grammar("S", &[
            ("S", &["S", "S0"]),
            ("S", &["s"]),
            ("S0", &["z"]),
        ]);
        let normalized = normalize(&g);

        assert_eq!(normalized.start(), "S01");
        assert!(normalized.is_cnf());
    }
}
