/*
    This module reads grammars from BNF-style files
*/

mod lexer;
mod verifier;

use std::fmt::Display;
use std::fs::File;
use std::io::BufRead;
use std::path::Path;

use crate::grammar::*;
use crate::error_handling::*;
use itertools::Itertools;
use lexer::*;
use verifier::verify_rules;

#[derive(Debug)]
pub enum ReadErrorType {
    // A line which should contain a rule does not
    MissingEquals,
    // A rule has multiple equals signs
    UnexpectedEquals,
    // The line starts with something other than a nonterminal
    MissingNonterminal,
    // There is an unclosed quote
    UnmatchedQuote,
    // Nothing between two `|`, or after `=`
    EmptyAlternative,
    // A bare word that would be read as a terminal
    UnquotedTerminal(String),
    // A quoted word that would be read as a nonterminal
    QuotedNonterminal(String),
    // An undefined nonterminal was used
    UndefinedNonterminal(String),
    // The file has no rules, so there is no start symbol
    NoRules,
    // Somehow a full rewrite was parsed as a single alternative
    // This is a problem with the reader, not the grammar
    UnsplitRewrite,
    // A blank line got too deep into the reader
    // This is a problem with the reader, not the grammar
    UnexpectedBlankLine,
    // The rules do not make a valid grammar
    InvalidGrammar(InvalidGrammarType),
    // There was an issue with reading a file
    FileError(std::io::Error),
}

impl ErrorType for ReadErrorType {}

impl PartialEq for ReadErrorType {
    fn eq(&self, other: &Self) -> bool {
        use ReadErrorType::*;
        match (self, other) {
            (FileError(a), FileError(b)) => a.kind() == b.kind(),
            (UnquotedTerminal(a), UnquotedTerminal(b))
            | (QuotedNonterminal(a), QuotedNonterminal(b))
            | (UndefinedNonterminal(a), UndefinedNonterminal(b)) => a == b,
            (InvalidGrammar(a), InvalidGrammar(b)) => a == b,
            _ => std::mem::discriminant(self) == std::mem::discriminant(other),
        }
    }
}

impl Display for ReadErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReadErrorType::MissingEquals => write!(f, "Expected `=` after nonterminal"),
            ReadErrorType::UnexpectedEquals => write!(f, "Unexpected `=` encountered"),
            ReadErrorType::MissingNonterminal => write!(f, "Tried to define something other than a nonterminal"),
            ReadErrorType::UnmatchedQuote => write!(f, "Unmatched quotes"),
            ReadErrorType::EmptyAlternative => write!(f, "Empty alternative (write \"\" for the empty string)"),
            ReadErrorType::UnquotedTerminal(word) => write!(f, "`{}` does not start upper-case; quote it to make it a terminal", word),
            ReadErrorType::QuotedNonterminal(word) => write!(f, "Terminal \"{}\" starts upper-case and would be read as a nonterminal", word),
            ReadErrorType::UndefinedNonterminal(nonterminal) => write!(f, "Could not find definition for `{}`", nonterminal),
            ReadErrorType::NoRules => write!(f, "No rules found"),
            ReadErrorType::UnsplitRewrite => write!(f, "Rewrite was not fully split (this is a problem with the reader, not the grammar)"),
            ReadErrorType::UnexpectedBlankLine => write!(f, "Blank line encountered in rule reader (this is a problem with the reader, not the grammar)"),
            ReadErrorType::InvalidGrammar(e) => write!(f, "{}", e),
            ReadErrorType::FileError(e) => write!(f, "File error: {}", e),
        }
    }
}

pub type ReadError = Error<ReadErrorType>;
pub type ReadErrors = Errors<ReadErrorType>;

fn io_error(error: std::io::Error, path: &Path) -> ReadError {
    ReadError {
        location: Location::file(path.to_path_buf(), 0),
        error: ReadErrorType::FileError(error)
    }
}

pub type Result<T> = std::result::Result<T, ReadErrorType>;
pub type LineResult<T> = std::result::Result<T, ReadError>;
pub type FileResult<T> = std::result::Result<T, ReadErrors>;

// The alternatives of one line, epsilon being an empty alternative
pub type Rewrite = Vec<Vec<String>>;

#[derive(PartialEq, Debug)]
struct Rule {
    symbol: String,
    rewrite: Rewrite,
    location: Location
}

fn parse_symbol(token: &Token) -> Result<Option<String>> {
    match token {
        Token::Equals => Err(ReadErrorType::UnexpectedEquals),
        Token::Or => Err(ReadErrorType::UnsplitRewrite),
        Token::Word(s) if is_nonterminal(s) => Ok(Some(s.clone())),
        Token::Word(s) => Err(ReadErrorType::UnquotedTerminal(s.clone())),
        Token::Quoted(s) if s.is_empty() => Ok(None),
        Token::Quoted(s) if is_nonterminal(s) => Err(ReadErrorType::QuotedNonterminal(s.clone())),
        Token::Quoted(s) => Ok(Some(s.clone())),
    }
}

fn parse_alternative(tokens: &[Token]) -> Result<Vec<String>> {
    if tokens.is_empty() {
        return Err(ReadErrorType::EmptyAlternative);
    }

    let symbols = tokens.iter().map(parse_symbol).collect::<Result<Vec<_>>>()?;
    Ok(symbols.into_iter().flatten().collect())
}

fn parse_rewrite(tokens: &[Token]) -> Result<Rewrite> {
    tokens.split(|t| *t == Token::Or).map(parse_alternative).collect()
}

fn parse_line(tokens: &[Token], location: Location) -> Result<Rule> {
    // Try to get the nonterminal the rule is for. The match returns a
    // result which is then unwrapped with the ? operator
    let symbol = match tokens.first() {
        Some(Token::Word(s)) if is_nonterminal(s) => Ok(s.clone()),
        Some(_) => Err(ReadErrorType::MissingNonterminal),
        None => Err(ReadErrorType::UnexpectedBlankLine)
    }?;

    if tokens.get(1) != Some(&Token::Equals) {
        return Err(ReadErrorType::MissingEquals)
    }

    let rewrite = parse_rewrite(&tokens[2..])?;

    Ok(Rule {
        symbol,
        rewrite,
        location
    })
}

fn parse_lex_line(line: &str, location: Location) -> LineResult<Rule> {
    lexer::lex_line(line)
        .and_then(|lexed_line| parse_line(&lexed_line, location.clone()))
        .map_err(|error| ReadError { location, error })
}

fn is_rule_line(line: &String) -> bool {
    let line = line.trim();
    !line.is_empty() && !line.starts_with(';')
}

// Returns an iterator over the rule lines of a file, with the io errors
// wrapped in ReadError and the line numbers attached
fn file_line_nums<'a>(reader: impl BufRead + 'a, path: &'a Path) -> impl Iterator<Item = (usize, LineResult<String>)> + 'a {
    reader
        .lines()
        .map(move |line| line.map_err(|e| io_error(e, path)))
        .enumerate()
        .filter(|(_, line)| line.as_ref().is_ok_and(is_rule_line) || line.is_err())
        .map(|(num, line)| (num + 1, line))
}

fn grammar_from_rules(rules: Vec<Rule>, path: &Path) -> FileResult<Grammar> {
    let Some(first) = rules.first() else {
        return Err(vec![ReadError {
            location: Location::file(path.to_path_buf(), 0),
            error: ReadErrorType::NoRules
        }]);
    };
    let start = first.symbol.clone();

    verify_rules(&rules)?;

    let productions = rules.into_iter()
        .flat_map(|rule| {
            let symbol = rule.symbol;
            rule.rewrite.into_iter().map(move |right| Production { left: symbol.clone(), right })
        })
        .collect_vec();

    Grammar::new(&start, productions).map_err(|e| vec![ReadError {
        location: Location::file(path.to_path_buf(), 0),
        error: ReadErrorType::InvalidGrammar(e.error)
    }])
}

// Reads a grammar from `reader`, reporting problems against `path`
pub fn read_grammar<'a>(reader: impl BufRead + 'a, path: &'a Path) -> FileResult<Grammar> {
    let lines = file_line_nums(reader, path);

    let parsed_lines = lines.map(|(num, line_res)| {
        line_res.and_then(|line| parse_lex_line(&line, Location::file(path.to_path_buf(), num)))
    });

    let (rules, errors): (Vec<_>, Vec<_>) = parsed_lines.partition_result();
    if !errors.is_empty() {
        return Err(errors);
    }

    grammar_from_rules(rules, path)
}

pub fn read_file(path: &Path) -> FileResult<Grammar> {
    let file = File::open(path).map_err(|e| vec![io_error(e, path)])?;
    read_grammar(std::io::BufReader::new(file), path)
}
