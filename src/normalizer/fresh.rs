use std::collections::HashSet;

use crate::grammar::{is_nonterminal, Grammar};

// Hands out non-terminal names unused in a grammar and not handed out
// before: `base` when free, otherwise the first free of `base1`, `base2`...
pub struct FreshNames {
    used: HashSet<String>,
}

impl FreshNames {
    pub fn for_grammar(grammar: &Grammar) -> Self {
        let used = grammar.nonterminals().iter().cloned()
            .chain(grammar.right_symbols().filter(|s| is_nonterminal(s)).map(str::to_string))
            .collect();

        FreshNames { used }
    }

    pub fn fresh(&mut self, base: &str) -> String {
        let mut candidate = base.to_string();
        let mut suffix = 1;
        while self.used.contains(&candidate) {
            candidate = format!("{}{}", base, suffix);
            suffix += 1;
        }

        self.used.insert(candidate.clone());
        candidate
    }
}
