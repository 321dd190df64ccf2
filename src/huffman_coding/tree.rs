//! Builds a Huffman tree from symbol frequencies.
//!
//! The classic greedy construction: every symbol starts as a leaf in a min-priority queue,
//! and the two lightest nodes are repeatedly joined under a new parent until one node (the
//! root) is left. Equal weights are broken by queue insertion order, first inserted wins, so
//! a given frequency table always gives the same tree. Leaves are inserted in the table's
//! first-occurrence order and each new parent is inserted after all nodes already queued.

use std::collections::BinaryHeap;
use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, trace};

use super::node::{Node, NodeData, QueueEntry};
use crate::error::{HuffmanError, Result};
use crate::tools::freq_count::FrequencyTable;

/// A Huffman tree. Always holds at least one leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree<S> {
    root: Node<S>,
}

impl<S: Hash + Eq + Clone> HuffmanTree<S> {
    /// Count the symbols and build a tree from the counts. Fails with EmptyInput if there are
    /// no symbols.
    pub fn from_symbols<I: IntoIterator<Item = S>>(symbols: I) -> Result<Self> {
        Self::from_frequencies(&FrequencyTable::count(symbols))
    }

    /// Build a tree from a prepared frequency table. Every count must be at least 1.
    pub fn from_frequencies(freqs: &FrequencyTable<S>) -> Result<Self> {
        if freqs.is_empty() {
            return Err(HuffmanError::EmptyInput);
        }
        if let Some(pos) = freqs.iter().position(|(_, count)| count == 0) {
            return Err(HuffmanError::Argument(format!(
                "frequency entry {} has a count of zero",
                pos
            )));
        }

        // Load the queue with one leaf per symbol, stamping each with its insertion order
        let mut heap = BinaryHeap::with_capacity(freqs.len());
        let mut seq = 0;
        for (sym, count) in freqs.iter() {
            heap.push(QueueEntry {
                seq,
                node: Node::leaf(sym.clone(), count),
            });
            seq += 1;
        }

        // ...then pare it down to one single node, lightest pair first.
        let root = loop {
            let first = heap.pop().ok_or(HuffmanError::EmptyInput)?;
            match heap.pop() {
                None => break first.node,
                Some(second) => {
                    trace!(
                        "merge #{} (w {}) + #{} (w {}) -> #{}",
                        first.seq,
                        first.node.weight,
                        second.seq,
                        second.node.weight,
                        seq
                    );
                    heap.push(QueueEntry {
                        seq,
                        node: Node::merge(first.node, second.node),
                    });
                    seq += 1;
                }
            }
        };

        let tree = HuffmanTree { root };
        debug!(
            "Built tree: {} symbols, total weight {}, depth {}",
            freqs.len(),
            tree.weight(),
            tree.depth()
        );
        Ok(tree)
    }
}

/// Build the Huffman tree for `symbols`. Fails with EmptyInput on an empty sequence.
pub fn build_tree<S, I>(symbols: I) -> Result<HuffmanTree<S>>
where
    S: Hash + Eq + Clone,
    I: IntoIterator<Item = S>,
{
    HuffmanTree::from_symbols(symbols)
}

impl<S> HuffmanTree<S> {
    pub fn root(&self) -> &Node<S> {
        &self.root
    }

    /// Total weight, i.e. the length of the input the tree was built from.
    pub fn weight(&self) -> usize {
        self.root.weight
    }

    /// True when the alphabet has a single symbol and the root is itself a leaf.
    pub fn is_singleton(&self) -> bool {
        self.root.is_leaf()
    }

    /// Number of leaves (distinct symbols).
    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        self.walk(|node, _| {
            if node.is_leaf() {
                count += 1
            }
        });
        count
    }

    /// Length of the longest root-to-leaf path. A singleton tree has depth 0.
    pub fn depth(&self) -> usize {
        let mut max = 0;
        self.walk(|_, depth| max = max.max(depth));
        max
    }

    /// Total bits needed to encode the input this tree was built from. Each internal node
    /// adds one bit to every symbol occurrence below it, so this is the sum of internal
    /// weights. The singleton case uses one bit per occurrence.
    pub fn weighted_path_length(&self) -> usize {
        if self.is_singleton() {
            return self.root.weight;
        }
        let mut total = 0;
        self.walk(|node, _| {
            if !node.is_leaf() {
                total += node.weight
            }
        });
        total
    }

    /// Visit every node with its depth, parents before children, left before right.
    /// Uses an explicit stack so deep (skewed) trees can't overflow the call stack.
    fn walk<F: FnMut(&Node<S>, usize)>(&self, mut visit: F) {
        let mut stack = vec![(&self.root, 0_usize)];
        while let Some((node, depth)) = stack.pop() {
            visit(node, depth);
            if let Some((left, right)) = node.kids() {
                stack.push((right, depth + 1));
                stack.push((left, depth + 1));
            }
        }
    }
}

impl<S: Debug> HuffmanTree<S> {
    /// Indented text rendering of the tree, one node per line.
    pub fn structure(&self) -> String {
        let mut out = String::new();
        let mut stack = vec![(&self.root, 0_usize, "root")];
        while let Some((node, depth, label)) = stack.pop() {
            let indent = "  ".repeat(depth);
            let line = match &node.node_data {
                NodeData::Leaf(sym) => format!(
                    "{}{} -> Leaf {:?} [weight: {}]\n",
                    indent, label, sym, node.weight
                ),
                NodeData::Kids(left, right) => {
                    stack.push((&**right, depth + 1, "1"));
                    stack.push((&**left, depth + 1, "0"));
                    format!("{}{} -> Internal [weight: {}]\n", indent, label, node.weight)
                }
            };
            out.push_str(&line);
        }
        out
    }
}
