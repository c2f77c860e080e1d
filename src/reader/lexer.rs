use itertools::{Itertools, PeekingNext};

use super::{ReadErrorType, Result};

#[derive(PartialEq, Debug)]
pub enum Token {
    Equals,
    Or,
    // A bare word, which has to name a nonterminal
    Word(String),
    // A double-quoted terminal, "" being the empty string
    Quoted(String)
}

pub fn lex_quoted(line: &mut impl PeekingNext<Item = char>) -> Result<Token> {
    line.next(); // Consume open quote
    let text = line.peeking_take_while(|&c| c != '\"').collect();

    // Check if there is a close quote and consume it if there is
    if line.next() != Some('\"') {
        return Err(ReadErrorType::UnmatchedQuote);
    }

    Ok(Token::Quoted(text))
}

// A word ends at whitespace or at the start of another token
pub fn lex_word(line: &mut impl PeekingNext<Item = char>) -> Result<Token> {
    Ok(Token::Word(line.peeking_take_while(|&c| !c.is_whitespace() && !"=|\"".contains(c)).collect()))
}

pub fn lex_line(line: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();

    let mut line_chars = line.chars().peekable();

    while let Some(c) = line_chars.peek() {
        if *c == '=' {
            line_chars.next();
            tokens.push(Token::Equals);
        } else if *c == '|' {
            line_chars.next();
            tokens.push(Token::Or);
        } else if *c == '\"' {
            tokens.push(lex_quoted(&mut line_chars)?);
        } else if !c.is_whitespace() {
            tokens.push(lex_word(&mut line_chars)?);
        } else {
            line_chars.next();
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use std::iter::zip;

    use super::*;

    #[test]
    fn lex_normal_quoted() {
        let lines = vec![
            "\"she\" NP",
            "\"with\"",
            "\"a\"\"the\"\"an\"",
            "\"\" | NP",
        ];
        // (result from the function, rest of the iterator)
        let answers = vec![
            (Token::Quoted("she".to_string()), " NP"),
            (Token::Quoted("with".to_string()), ""),
            (Token::Quoted("a".to_string()), "\"the\"\"an\""),
            (Token::Quoted("".to_string()), " | NP"),
        ];

        for (line, (answer_token, answer_rest)) in zip(lines, answers) {
            let mut chars = line.chars().peekable();
            assert_eq!(lex_quoted(&mut chars).unwrap(), answer_token);
            assert_eq!(chars.collect::<String>(), answer_rest);
        }
    }

    #[test]
    fn lex_mismatched_quoted() {
        let lines = vec![
            "\"cake",
            "\"she eats cake"
        ];

        for line in lines {
            let mut chars = line.chars().peekable();

            assert_eq!(lex_quoted(&mut chars).unwrap_err(), ReadErrorType::UnmatchedQuote);
        }
    }

    #[test]
    fn lex_normal_word() {
        let lines = vec![
            "NP VP",
            "Det",
            "VP|PP",
            "S=NP",
        ];
        // (result from the function, rest of the iterator)
        let answers = vec![
            (Token::Word("NP".to_string()), " VP"),
            (Token::Word("Det".to_string()), ""),
            (Token::Word("VP".to_string()), "|PP"),
            (Token::Word("S".to_string()), "=NP"),
        ];

        for (line, (answer_token, answer_rest)) in zip(lines, answers) {
            let mut chars = line.chars().peekable();
            assert_eq!(lex_word(&mut chars).unwrap(), answer_token);
            assert_eq!(chars.collect::<String>(), answer_rest);
        }
    }

    #[test]
    fn lex_normal_line() {
        let lines = vec![
            "NP = Det N | \"he\" | \"she\"",
            "Opt = \"\"|Adj",
        ];
        let answers = vec![
            vec![
                Token::Word("NP".to_string()),
                Token::Equals,
                Token::Word("Det".to_string()),
                Token::Word("N".to_string()),
                Token::Or,
                Token::Quoted("he".to_string()),
                Token::Or,
                Token::Quoted("she".to_string())
            ],
            vec![
                Token::Word("Opt".to_string()),
                Token::Equals,
                Token::Quoted("".to_string()),
                Token::Or,
                Token::Word("Adj".to_string())
            ]
        ];

        for (line, answer) in zip(lines, answers) {
            assert_eq!(lex_line(line).unwrap(), answer)
        }
    }
}
