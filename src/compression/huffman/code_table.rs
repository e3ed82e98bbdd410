use std::collections::{BTreeMap, HashMap};

use bitvec::prelude::*;
use log::debug;

use super::frequency::FrequencyTable;
use super::tree::{HuffmanNode, HuffmanTree};
use crate::error::{Error, Result};

/// A single Huffman code, most significant (first transmitted) bit first.
pub type Code = BitVec<u8, Msb0>;

/// Mapping from every symbol of a tree to its prefix-free code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<char, Code>,
}

impl CodeTable {
    /// Walk the tree, appending `0` for left and `1` for right.
    ///
    /// If the tree consists of a single leaf (i.e. one unique symbol), the
    /// code "0" is assigned.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StructuralInvariantViolation`] if some leaf ends up
    /// without a code, which can only happen if a symbol appears in more
    /// than one leaf.
    pub fn from_tree(tree: &HuffmanTree) -> Result<Self> {
        let mut codes = BTreeMap::new();
        assign_codes(tree.root(), Code::new(), &mut codes);

        let leaves = tree.leaf_count();
        if codes.len() != leaves {
            return Err(Error::StructuralInvariantViolation(format!(
                "{} leaves but {} codes",
                leaves,
                codes.len()
            )));
        }

        debug!(
            "code table: {} symbols, longest code {} bits",
            codes.len(),
            codes.values().map(|code| code.len()).max().unwrap_or(0)
        );
        Ok(CodeTable { codes })
    }

    /// The code for `ch`, if it has one.
    pub fn get(&self, ch: char) -> Option<&BitSlice<u8, Msb0>> {
        self.codes.get(&ch).map(|code| code.as_bitslice())
    }

    /// The code for `ch` as a string of `'0'` and `'1'` characters.
    pub fn code_string(&self, ch: char) -> Option<String> {
        self.get(ch)
            .map(|code| code.iter().map(|bit| if *bit { '1' } else { '0' }).collect())
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate `(symbol, code)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &BitSlice<u8, Msb0>)> + '_ {
        self.codes.iter().map(|(&ch, code)| (ch, code.as_bitslice()))
    }

    /// Number of bits needed to encode a text with these frequencies.
    ///
    /// Symbols with no code contribute nothing.
    pub fn encoded_len(&self, freq_table: &FrequencyTable) -> usize {
        freq_table
            .iter()
            .filter_map(|(ch, count)| self.codes.get(&ch).map(|code| code.len() * count))
            .sum()
    }

    /// Build the inverse mapping used for decoding.
    pub fn reverse(&self) -> ReverseMapping {
        let symbols = self
            .codes
            .iter()
            .map(|(&ch, code)| (code.clone(), ch))
            .collect();
        let max_code_len = self.codes.values().map(|code| code.len()).max().unwrap_or(0);
        ReverseMapping {
            symbols,
            max_code_len,
        }
    }
}

fn assign_codes(node: &HuffmanNode, prefix: Code, codes: &mut BTreeMap<char, Code>) {
    match node {
        HuffmanNode::Leaf { ch, .. } => {
            let code = if prefix.is_empty() {
                bitvec![u8, Msb0; 0]
            } else {
                prefix
            };
            codes.insert(*ch, code);
        }
        HuffmanNode::Internal { left, right, .. } => {
            let mut left_prefix = prefix.clone();
            left_prefix.push(false);
            assign_codes(left, left_prefix, codes);
            let mut right_prefix = prefix;
            right_prefix.push(true);
            assign_codes(right, right_prefix, codes);
        }
    }
}

/// Mapping from code to symbol, the inverse of a [`CodeTable`].
#[derive(Debug, Clone)]
pub struct ReverseMapping {
    symbols: HashMap<Code, char>,
    max_code_len: usize,
}

impl ReverseMapping {
    /// The symbol whose code is exactly `bits`.
    pub fn get(&self, bits: &BitSlice<u8, Msb0>) -> Option<char> {
        if bits.is_empty() || bits.len() > self.max_code_len {
            return None;
        }
        self.symbols.get(bits).copied()
    }

    /// Length of the longest code; an accumulator past this can never match.
    pub fn max_code_len(&self) -> usize {
        self.max_code_len
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl From<&CodeTable> for ReverseMapping {
    fn from(table: &CodeTable) -> Self {
        table.reverse()
    }
}
