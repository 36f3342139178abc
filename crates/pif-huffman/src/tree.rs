//! Frequency-driven Huffman tree construction

use crate::{Code, Frequencies};
use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeMap, BinaryHeap};

/// Huffman tree node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanNode {
    Leaf {
        symbol: u8,
        weight: u64,
    },
    Internal {
        weight: u64,
        left: Box<HuffmanNode>,
        right: Box<HuffmanNode>,
    },
}

impl HuffmanNode {
    pub fn weight(&self) -> u64 {
        match self {
            HuffmanNode::Leaf { weight, .. } | HuffmanNode::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffmanNode::Leaf { .. })
    }

    /// Number of leaves below (and including) this node
    pub fn leaf_count(&self) -> usize {
        match self {
            HuffmanNode::Leaf { .. } => 1,
            HuffmanNode::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }
}

/// Symbol to code word mapping produced by a tree walk
pub type CodeMap = BTreeMap<u8, Code>;

/// Priority queue entry, ordered by weight then insertion sequence
struct QueueEntry {
    weight: u64,
    sequence: usize,
    node: HuffmanNode,
}

impl QueueEntry {
    fn key(&self) -> (u64, usize) {
        (self.weight, self.sequence)
    }
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// Build a Huffman tree from symbol frequencies
///
/// Ties between equal weights go to the node inserted first: leaves are queued
/// in ascending symbol order, and every merged node is queued after all nodes
/// that existed before it. The first node popped becomes the left child.
/// Returns `None` when every frequency is zero.
pub fn build_tree(frequencies: &Frequencies) -> Option<HuffmanNode> {
    let mut queue = BinaryHeap::new();
    let mut sequence = 0usize;

    for (symbol, &weight) in frequencies.iter().enumerate() {
        if weight > 0 {
            queue.push(Reverse(QueueEntry {
                weight,
                sequence,
                node: HuffmanNode::Leaf {
                    symbol: symbol as u8,
                    weight,
                },
            }));
            sequence += 1;
        }
    }

    while queue.len() > 1 {
        let (Some(Reverse(left)), Some(Reverse(right))) = (queue.pop(), queue.pop()) else {
            break;
        };
        let weight = left.weight + right.weight;
        queue.push(Reverse(QueueEntry {
            weight,
            sequence,
            node: HuffmanNode::Internal {
                weight,
                left: Box::new(left.node),
                right: Box::new(right.node),
            },
        }));
        sequence += 1;
    }

    queue.pop().map(|Reverse(entry)| entry.node)
}

/// Assign each leaf the path leading to it: `0` for left, `1` for right
///
/// A root that is itself a leaf gets the one-bit code `0`, so every symbol
/// always costs at least one bit in the stream.
pub fn initial_codes(root: &HuffmanNode) -> CodeMap {
    let mut codes = CodeMap::new();
    match root {
        HuffmanNode::Leaf { symbol, .. } => {
            let mut code = Code::new();
            code.push(false);
            codes.insert(*symbol, code);
        }
        HuffmanNode::Internal { .. } => {
            let mut prefix = Code::new();
            collect_codes(root, &mut prefix, &mut codes);
        }
    }
    codes
}

fn collect_codes(node: &HuffmanNode, prefix: &mut Code, codes: &mut CodeMap) {
    match node {
        HuffmanNode::Leaf { symbol, .. } => {
            codes.insert(*symbol, prefix.clone());
        }
        HuffmanNode::Internal { left, right, .. } => {
            prefix.push(false);
            collect_codes(left, prefix, codes);
            prefix.pop();

            prefix.push(true);
            collect_codes(right, prefix, codes);
            prefix.pop();
        }
    }
}
