use std::fmt::Display;

// How a node's span was derived
#[derive(Debug, Clone, PartialEq)]
pub enum Derivation {
    // A -> a, holding the matched token
    Leaf(String),
    // A -> B C, where B covers [i, k] and C covers [k + 1, j]
    Binary(Box<Node>, Box<Node>),
}

// One derivation of the tokens `start..=end` from `symbol`. Nodes own
// their children, so derivations in the table never share subtrees.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub symbol: String,
    pub start: usize,
    pub end: usize,
    pub derivation: Derivation,
}

impl Node {
    pub fn leaf(symbol: &str, position: usize, token: &str) -> Self {
        Node {
            symbol: symbol.to_string(),
            start: position,
            end: position,
            derivation: Derivation::Leaf(token.to_string()),
        }
    }

    pub fn binary(symbol: &str, left: Node, right: Node) -> Self {
        Node {
            symbol: symbol.to_string(),
            start: left.start,
            end: right.end,
            derivation: Derivation::Binary(Box::new(left), Box::new(right)),
        }
    }

    // The tokens under this node, left to right
    #[cfg(test)]
    pub fn tokens(&self) -> Vec<&str> {
        let mut tokens = Vec::with_capacity(self.end + 1 - self.start);
        let mut pending = vec![self];

        while let Some(node) = pending.pop() {
            match &node.derivation {
                Derivation::Leaf(token) => tokens.push(token.as_str()),
                Derivation::Binary(left, right) => {
                    pending.push(right);
                    pending.push(left);
                }
            }
        }

        tokens
    }
}

// (S (NP she) (VP eats)), one pair of brackets per node
impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.derivation {
            Derivation::Leaf(token) => write!(f, "({} {})", self.symbol, token),
            Derivation::Binary(left, right) => write!(f, "({} {} {})", self.symbol, left, right),
        }
    }
}
