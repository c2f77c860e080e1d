use std::collections::BTreeMap;

use super::tree::Node;

// Every derivation found for a span, per non-terminal, in the order
// they were found
pub type Cell = BTreeMap<String, Vec<Node>>;

// The cells `(i, j)` with `i <= j < len`, stored row by row as an upper
// triangle
#[derive(Debug, Clone, PartialEq)]
pub struct ParseTable {
    len: usize,
    cells: Vec<Cell>,
}

impl ParseTable {
    pub fn new(len: usize) -> Self {
        ParseTable {
            len,
            cells: vec![Cell::new(); len * (len + 1) / 2],
        }
    }

    // Number of tokens the table spans
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn offset(&self, i: usize, j: usize) -> Option<usize> {
        if i > j || j >= self.len {
            return None;
        }
        // Rows before i hold len, len - 1, ... cells
        Some(i * (2 * self.len + 1 - i) / 2 + (j - i))
    }

    pub fn cell(&self, i: usize, j: usize) -> Option<&Cell> {
        self.offset(i, j).map(|offset| &self.cells[offset])
    }

    pub fn witnesses(&self, i: usize, j: usize, symbol: &str) -> &[Node] {
        self.cell(i, j)
            .and_then(|cell| cell.get(symbol))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub(super) fn add(&mut self, node: Node) {
        if let Some(offset) = self.offset(node.start, node.end) {
            self.cells[offset].entry(node.symbol.clone()).or_default().push(node);
        }
    }
}
