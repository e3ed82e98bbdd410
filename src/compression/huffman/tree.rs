use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::{debug, trace};

use super::frequency::FrequencyTable;
use crate::error::{Error, Result};

/// Represents a node in the Huffman tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanNode {
    /// A leaf node contains a character and its frequency.
    Leaf { ch: char, freq: usize },
    /// An internal node with left and right children and combined frequency.
    Internal {
        freq: usize,
        left: Box<HuffmanNode>,
        right: Box<HuffmanNode>,
    },
}

impl HuffmanNode {
    /// Returns the frequency of the node.
    pub fn freq(&self) -> usize {
        match self {
            HuffmanNode::Leaf { freq, .. } => *freq,
            HuffmanNode::Internal { freq, .. } => *freq,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffmanNode::Leaf { .. })
    }

    fn leaf_count(&self) -> usize {
        match self {
            HuffmanNode::Leaf { .. } => 1,
            HuffmanNode::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    fn depth(&self) -> usize {
        match self {
            HuffmanNode::Leaf { .. } => 0,
            HuffmanNode::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

/// Heap entry for tree construction.
///
/// Ordered so that `BinaryHeap` pops the lowest frequency first, and among
/// equal frequencies the node created earliest.
#[derive(Debug)]
struct NodeWrapper {
    seq: usize,
    node: HuffmanNode,
}

impl PartialEq for NodeWrapper {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for NodeWrapper {}

impl Ord for NodeWrapper {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse: lower frequency, then lower sequence number, comes first.
        (other.node.freq(), other.seq).cmp(&(self.node.freq(), self.seq))
    }
}

impl PartialOrd for NodeWrapper {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A complete Huffman tree over the symbols of one frequency table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: HuffmanNode,
}

impl HuffmanTree {
    /// Build the tree by repeatedly merging the two lightest nodes.
    ///
    /// Leaves are seeded in symbol order and every node gets a sequence
    /// number at creation; equal frequencies are broken by that number, so
    /// the same table always yields the same tree. The first node popped
    /// becomes the left child.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] if `freq_table` has no entries, and
    /// [`Error::StructuralInvariantViolation`] if the counts sum past
    /// `usize::MAX`.
    pub fn build(freq_table: &FrequencyTable) -> Result<Self> {
        let mut heap = BinaryHeap::with_capacity(freq_table.len());
        let mut seq = 0;
        for (ch, freq) in freq_table.iter() {
            heap.push(NodeWrapper {
                seq,
                node: HuffmanNode::Leaf { ch, freq },
            });
            seq += 1;
        }

        loop {
            let first = heap.pop().ok_or(Error::EmptyInput)?;
            let Some(second) = heap.pop() else {
                let tree = HuffmanTree { root: first.node };
                debug!(
                    "built Huffman tree: {} leaves, depth {}, weight {}",
                    freq_table.len(),
                    tree.depth(),
                    tree.freq()
                );
                return Ok(tree);
            };

            let freq = first
                .node
                .freq()
                .checked_add(second.node.freq())
                .ok_or_else(|| {
                    Error::StructuralInvariantViolation(
                        "total frequency does not fit in usize".to_string(),
                    )
                })?;
            trace!(
                "merging seq {} and seq {} into seq {} (freq {})",
                first.seq,
                second.seq,
                seq,
                freq
            );
            heap.push(NodeWrapper {
                seq,
                node: HuffmanNode::Internal {
                    freq,
                    left: Box::new(first.node),
                    right: Box::new(second.node),
                },
            });
            seq += 1;
        }
    }

    pub fn root(&self) -> &HuffmanNode {
        &self.root
    }

    /// Total weight of the tree, equal to the length of the counted text.
    pub fn freq(&self) -> usize {
        self.root.freq()
    }

    /// Number of leaves, one per distinct symbol.
    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// Length of the longest root-to-leaf path; 0 for a lone leaf.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf_freq_sum(node: &HuffmanNode) -> usize {
        match node {
            HuffmanNode::Leaf { freq, .. } => *freq,
            HuffmanNode::Internal { left, right, .. } => leaf_freq_sum(left) + leaf_freq_sum(right),
        }
    }

    fn check_internal_sums(node: &HuffmanNode) {
        if let HuffmanNode::Internal { freq, left, right } = node {
            assert_eq!(*freq, left.freq() + right.freq());
            check_internal_sums(left);
            check_internal_sums(right);
        }
    }

    #[test]
    fn test_empty_table_rejected() {
        let freq = FrequencyTable::from_text("");
        assert!(matches!(HuffmanTree::build(&freq), Err(Error::EmptyInput)));
    }

    #[test]
    fn test_single_symbol_is_leaf() {
        let freq = FrequencyTable::from_text("aaaa");
        let tree = HuffmanTree::build(&freq).unwrap();
        assert_eq!(tree.root(), &HuffmanNode::Leaf { ch: 'a', freq: 4 });
        assert_eq!(tree.depth(), 0);
        assert_eq!(tree.leaf_count(), 1);
    }

    #[test]
    fn test_frequency_conservation() {
        let text = "this is an example for huffman encoding";
        let freq = FrequencyTable::from_text(text);
        let tree = HuffmanTree::build(&freq).unwrap();
        assert_eq!(tree.freq(), text.chars().count());
        assert_eq!(leaf_freq_sum(tree.root()), tree.freq());
        assert_eq!(tree.leaf_count(), freq.len());
        check_internal_sums(tree.root());
    }

    #[test]
    fn test_tie_break_shape() {
        // c(1) and b(2) merge first; the merged node (3) ties with a(3) and
        // loses to it because a was created earlier.
        let freq = FrequencyTable::from_text("aaabbc");
        let tree = HuffmanTree::build(&freq).unwrap();
        let expected = HuffmanNode::Internal {
            freq: 6,
            left: Box::new(HuffmanNode::Leaf { ch: 'a', freq: 3 }),
            right: Box::new(HuffmanNode::Internal {
                freq: 3,
                left: Box::new(HuffmanNode::Leaf { ch: 'c', freq: 1 }),
                right: Box::new(HuffmanNode::Leaf { ch: 'b', freq: 2 }),
            }),
        };
        assert_eq!(tree.root(), &expected);
    }

    #[test]
    fn test_overflowing_weights_rejected() {
        let freq: FrequencyTable = vec![('a', usize::MAX), ('b', usize::MAX)]
            .into_iter()
            .collect();
        assert!(matches!(
            HuffmanTree::build(&freq),
            Err(Error::StructuralInvariantViolation(_))
        ));
    }

    #[test]
    fn test_equal_frequencies_are_deterministic() {
        let freq = FrequencyTable::from_text("abcdefgh");
        let first = HuffmanTree::build(&freq).unwrap();
        for _ in 0..10 {
            assert_eq!(HuffmanTree::build(&freq).unwrap(), first);
        }
        // Eight equal weights give a perfectly balanced tree.
        assert_eq!(first.depth(), 3);
    }
}
