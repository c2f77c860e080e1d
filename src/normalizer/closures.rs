/*
    The fixed-point stages of the normalizer: useless symbols, epsilon
    productions and unit productions
*/

use std::collections::HashSet;

use itertools::Itertools;

use crate::grammar::{is_nonterminal, Grammar, Production};

// Every symbol is a terminal or in `known`
fn all_known(right: &[String], known: &HashSet<&str>) -> bool {
    right.iter().all(|s| !is_nonterminal(s) || known.contains(s.as_str()))
}

// Non-terminals that derive at least one string of terminals
pub fn generating(grammar: &Grammar) -> HashSet<&str> {
    let mut generating = HashSet::new();

    let mut changed = true;
    while changed {
        changed = false;
        for p in grammar.productions() {
            if !generating.contains(p.left.as_str()) && all_known(&p.right, &generating) {
                generating.insert(p.left.as_str());
                changed = true;
            }
        }
    }

    generating
}

// Non-terminals reachable from `start` through `productions`
pub fn reachable<'a>(start: &'a str, productions: &[&'a Production]) -> HashSet<&'a str> {
    let mut reachable = HashSet::from([start]);

    let mut changed = true;
    while changed {
        changed = false;
        for &p in productions {
            if !reachable.contains(p.left.as_str()) {
                continue;
            }
            for symbol in p.right.iter().filter(|s| is_nonterminal(s)) {
                changed |= reachable.insert(symbol.as_str());
            }
        }
    }

    reachable
}

// Non-terminals that derive the empty string
pub fn nullable(grammar: &Grammar) -> HashSet<&str> {
    let mut nullable = HashSet::new();

    let mut changed = true;
    while changed {
        changed = false;
        for p in grammar.productions() {
            if nullable.contains(p.left.as_str()) {
                continue;
            }
            if p.right.iter().all(|s| is_nonterminal(s) && nullable.contains(s.as_str())) {
                nullable.insert(p.left.as_str());
                changed = true;
            }
        }
    }

    nullable
}

// `nonterminal` followed by everything it reaches through unit
// productions, in discovery order
pub fn unit_closure<'a>(grammar: &'a Grammar, nonterminal: &'a str) -> Vec<&'a str> {
    let mut closure = vec![nonterminal];
    let mut seen = HashSet::from([nonterminal]);
    let mut frontier = vec![nonterminal];

    while let Some(current) = frontier.pop() {
        let targets = grammar.productions().iter()
            .filter(|p| p.left == current && p.is_unit())
            .map(|p| p.right[0].as_str());

        for target in targets {
            if seen.insert(target) {
                closure.push(target);
                frontier.push(target);
            }
        }
    }

    closure
}

pub fn remove_useless(grammar: &Grammar) -> Grammar {
    let generating = generating(grammar);
    let productive = grammar.productions().iter()
        .filter(|p| generating.contains(p.left.as_str()) && all_known(&p.right, &generating))
        .collect_vec();

    let reachable = reachable(grammar.start(), &productive);
    let kept = productive.into_iter()
        .filter(|p| reachable.contains(p.left.as_str()))
        .cloned()
        .collect_vec();

    Grammar::rebuilt(grammar.start().to_string(), kept)
}

pub fn remove_epsilon(grammar: &Grammar) -> Grammar {
    let nullable = nullable(grammar);
    let start = grammar.start();
    let mut productions = Vec::new();

    for p in grammar.productions() {
        if p.is_epsilon() {
            // Only the start symbol keeps its epsilon production
            if p.left == start {
                productions.push(p.clone());
            }
            continue;
        }

        let positions = p.right.iter()
            .positions(|s| is_nonterminal(s) && nullable.contains(s.as_str()))
            .collect_vec();

        for dropped in positions.into_iter().powerset() {
            let right = p.right.iter()
                .enumerate()
                .filter(|(i, _)| !dropped.contains(i))
                .map(|(_, s)| s.clone())
                .collect_vec();

            if !right.is_empty() || p.left == start {
                productions.push(Production { left: p.left.clone(), right });
            }
        }
    }

    Grammar::rebuilt(start.to_string(), productions)
}

pub fn remove_unit(grammar: &Grammar) -> Grammar {
    let mut productions = Vec::new();

    for a in grammar.nonterminals() {
        for b in unit_closure(grammar, a) {
            let copies = grammar.productions().iter()
                .filter(|p| p.left == b && !p.is_unit())
                .map(|p| Production { left: a.clone(), right: p.right.clone() });
            productions.extend(copies);
        }
    }

    Grammar::rebuilt(grammar.start().to_string(), productions)
}
