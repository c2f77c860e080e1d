/*
    The toy english grammar used when no grammar file is given
*/

use super::{Grammar, InvalidGrammar, Production};

const VERBS: [&str; 4] = ["cooks", "drinks", "eats", "cuts"];
const NOUNS: [&str; 11] = [
    "cat", "dog", "beer", "cake", "juice", "meat", "soup", "fork", "knife", "oven", "spoon",
];

pub fn english() -> Result<Grammar, InvalidGrammar> {
    let mut productions = vec![
        Production::new("S", &["NP", "VP"]),
        Production::new("VP", &["VP", "PP"]),
        Production::new("VP", &["V", "NP"]),
    ];
    productions.extend(VERBS.into_iter().map(|verb| Production::new("VP", &[verb])));
    productions.extend([
        Production::new("PP", &["P", "NP"]),
        Production::new("NP", &["Det", "N"]),
        Production::new("NP", &["he"]),
        Production::new("NP", &["she"]),
    ]);
    productions.extend(VERBS.into_iter().map(|verb| Production::new("V", &[verb])));
    productions.extend(["in", "with"].into_iter().map(|p| Production::new("P", &[p])));
    productions.extend(NOUNS.into_iter().map(|noun| Production::new("N", &[noun])));
    productions.extend(["a", "the"].into_iter().map(|det| Production::new("Det", &[det])));

    Grammar::new("S", productions)
}
