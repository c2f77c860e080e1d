/*
    The stages that reshape right sides: moving terminals out of long
    right sides and splitting right sides into pairs
*/

use std::collections::HashMap;

use crate::grammar::{is_nonterminal, Grammar, Production};
use super::fresh::FreshNames;

// Replaces every terminal `a` in a right side of length >= 2 by a
// preterminal `T_a` with the single production `T_a -> a`
pub fn isolate_terminals(grammar: &Grammar) -> Grammar {
    let mut names = FreshNames::for_grammar(grammar);
    let mut preterminals: HashMap<&str, String> = HashMap::new();
    let mut introduced = Vec::new();
    let mut productions = Vec::new();

    for p in grammar.productions() {
        if p.right.len() < 2 {
            productions.push(p.clone());
            continue;
        }

        let mut right = Vec::with_capacity(p.right.len());
        for symbol in &p.right {
            if is_nonterminal(symbol) {
                right.push(symbol.clone());
                continue;
            }

            let preterminal = preterminals.entry(symbol.as_str()).or_insert_with(|| {
                let name = names.fresh(&format!("T_{}", symbol));
                introduced.push(Production { left: name.clone(), right: vec![symbol.clone()] });
                name
            });
            right.push(preterminal.clone());
        }

        productions.push(Production { left: p.left.clone(), right });
    }

    productions.extend(introduced);
    Grammar::rebuilt(grammar.start().to_string(), productions)
}

// Splits `A -> X1 X2 ... Xk` (k >= 3) into
// `A -> X1 Y1`, `Y1 -> X2 Y2`, ..., `Y(k-2) -> X(k-1) Xk`
pub fn binarize(grammar: &Grammar) -> Grammar {
    let mut names = FreshNames::for_grammar(grammar);
    let mut productions = Vec::new();

    for p in grammar.productions() {
        let k = p.right.len();
        if k <= 2 {
            productions.push(p.clone());
            continue;
        }

        let base = format!("BIN_{}", p.left);
        let mut left = p.left.clone();
        for symbol in &p.right[..k - 2] {
            let next = names.fresh(&base);
            productions.push(Production { left, right: vec![symbol.clone(), next.clone()] });
            left = next;
        }
        productions.push(Production { left, right: p.right[k - 2..].to_vec() });
    }

    Grammar::rebuilt(grammar.start().to_string(), productions)
}
