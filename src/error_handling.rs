use std::path::PathBuf;
use std::fmt::Display;

pub trait ErrorType: Display + PartialEq {}

// Where a grammar came from
#[derive(Debug, PartialEq, Clone)]
pub enum Origin {
    File(PathBuf),
    // Built in code, e.g. the toy english grammar
    Inline,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Location {
    pub origin: Origin,
    // File line, or 1-based production number for inline grammars.
    // Zero means the whole grammar.
    pub line: usize
}

impl Location {
    pub fn file(path: PathBuf, line: usize) -> Self {
        Location { origin: Origin::File(path), line }
    }

    pub fn inline(line: usize) -> Self {
        Location { origin: Origin::Inline, line }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.origin, self.line) {
            (Origin::File(path), 0) => write!(f, "{}", path.display()),
            (Origin::File(path), line) => write!(f, "{}:{}", path.display(), line),
            (Origin::Inline, 0) => write!(f, "grammar"),
            (Origin::Inline, line) => write!(f, "grammar, production {}", line),
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Error<T: ErrorType> {
    pub location: Location,
    pub error: T
}

impl<T: ErrorType> Display for Error<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\x1b[31;49;1m[{}]\x1b[39;49;1m  {}\x1b[0m", self.location, self.error)
    }
}

pub type Errors<T> = Vec<Error<T>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_display() {
        assert_eq!(Location::file(PathBuf::from("a.bnf"), 3).to_string(), "a.bnf:3");
        assert_eq!(Location::file(PathBuf::from("a.bnf"), 0).to_string(), "a.bnf");
        assert_eq!(Location::inline(2).to_string(), "grammar, production 2");
        assert_eq!(Location::inline(0).to_string(), "grammar");
    }
}
