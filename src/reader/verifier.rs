use std::collections::HashSet;

use crate::grammar::is_nonterminal;
use super::ReadErrorType::UndefinedNonterminal;
use super::{FileResult, ReadError, ReadErrors, Rule};

fn get_rule_undefined_symbols(rule: &Rule, defined: &HashSet<&str>) -> ReadErrors {
    // Keep the nonterminals of every alternative which no rule defines,
    // reporting each one once per line
    let mut reported = HashSet::new();
    rule.rewrite.iter()
        .flatten()
        .filter(|symbol| is_nonterminal(symbol) && !defined.contains(symbol.as_str()))
        .filter(|&symbol| reported.insert(symbol.as_str()))
        .map(|symbol| ReadError {
            location: rule.location.clone(),
            error: UndefinedNonterminal(symbol.clone())
        })
        .collect()
}

fn get_undefined_symbols(rules: &[Rule]) -> ReadErrors {
    let defined: HashSet<&str> = rules.iter().map(|rule| rule.symbol.as_str()).collect();

    // Get the undefined nonterminals of each rule, while flattening
    // into all the undefined nonterminals of the file
    rules.iter()
        .flat_map(|rule| get_rule_undefined_symbols(rule, &defined))
        .collect()
}

pub fn verify_rules(rules: &[Rule]) -> FileResult<()> {
    let errors = get_undefined_symbols(rules);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::Location;

    fn rule(symbol: &str, rewrite: &[&[&str]], line: usize) -> Rule {
        Rule {
            symbol: symbol.to_string(),
            rewrite: rewrite.iter().map(|alt| alt.iter().map(|s| s.to_string()).collect()).collect(),
            location: Location::inline(line),
        }
    }

    #[test]
    fn accept_defined_symbols() {
        let rules = vec![
            rule("S", &[&["NP", "VP"]], 1),
            rule("NP", &[&["she"], &[]], 2),
            rule("VP", &[&["eats"]], 3),
        ];

        assert_eq!(verify_rules(&rules), Ok(()));
    }

    #[test]
    fn report_each_undefined_symbol_once_per_line() {
        let rules = vec![
            rule("S", &[&["NP", "VP"], &["VP", "NP"]], 1),
            rule("NP", &[&["Det", "N"]], 2),
        ];

        assert_eq!(verify_rules(&rules), Err(vec![
            ReadError { location: Location::inline(1), error: UndefinedNonterminal("VP".to_string()) },
            ReadError { location: Location::inline(2), error: UndefinedNonterminal("Det".to_string()) },
            ReadError { location: Location::inline(2), error: UndefinedNonterminal("N".to_string()) },
        ]));
    }
}
