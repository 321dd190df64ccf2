//! Walks a Huffman tree and assigns each leaf symbol its code.
//!
//! Going left appends a 0, going right appends a 1. A tree whose root is a leaf (a single
//! symbol alphabet) has no edges to walk, so its symbol gets the one bit code `0`.

use std::hash::Hash;

use log::debug;
use rustc_hash::FxHashMap;

use super::node::NodeData;
use super::tree::HuffmanTree;
use crate::bitstream::BitString;
use crate::tools::freq_count::FrequencyTable;

/// A code is the root-to-leaf path of a symbol.
pub type Code = BitString;

/// Symbol to code lookup, built once per tree.
#[derive(Debug, Clone)]
pub struct CodeMapping<S> {
    /// (symbol, code) in left-to-right leaf order.
    entries: Vec<(S, Code)>,
    index: FxHashMap<S, usize>,
}

impl<S: Hash + Eq + Clone> CodeMapping<S> {
    /// Generate the code for every leaf of `tree`. Each call starts from a fresh mapping.
    pub fn from_tree(tree: &HuffmanTree<S>) -> Self {
        let mut mapping = CodeMapping::default();

        if let NodeData::Leaf(sym) = &tree.root().node_data {
            let mut code = Code::new();
            code.push(false);
            mapping.insert(sym.clone(), code);
            debug!("Singleton alphabet, sole symbol gets code 0");
            return mapping;
        }

        // Depth first, left before right, with an explicit stack of (node, path so far).
        let mut stack = vec![(tree.root(), Code::new())];
        while let Some((node, code)) = stack.pop() {
            match &node.node_data {
                NodeData::Leaf(sym) => mapping.insert(sym.clone(), code),
                NodeData::Kids(left, right) => {
                    let mut right_code = code.clone();
                    right_code.push(true);
                    let mut left_code = code;
                    left_code.push(false);
                    stack.push((&**right, right_code));
                    stack.push((&**left, left_code));
                }
            }
        }

        debug!("Generated {} codes", mapping.len());
        mapping
    }

    fn insert(&mut self, sym: S, code: Code) {
        self.index.insert(sym.clone(), self.entries.len());
        self.entries.push((sym, code));
    }

    /// Code for `sym`, if the tree had that symbol.
    pub fn get(&self, sym: &S) -> Option<&Code> {
        self.index.get(sym).map(|&i| &self.entries[i].1)
    }

    /// Bits needed to encode an input with these frequencies. Symbols without a code are
    /// ignored.
    pub fn encoded_len(&self, freqs: &FrequencyTable<S>) -> usize {
        freqs
            .iter()
            .filter_map(|(sym, count)| self.get(sym).map(|code| code.len() * count))
            .sum()
    }
}

/// Generate the symbol to code mapping for `tree`.
pub fn build_code_mapping<S: Hash + Eq + Clone>(tree: &HuffmanTree<S>) -> CodeMapping<S> {
    CodeMapping::from_tree(tree)
}

impl<S> CodeMapping<S> {
    /// Number of symbols with a code.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// (symbol, code) pairs in left-to-right leaf order, so codes come out in increasing
    /// binary order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &Code)> + '_ {
        self.entries.iter().map(|(sym, code)| (sym, code))
    }
}

impl<S> Default for CodeMapping<S> {
    fn default() -> Self {
        CodeMapping {
            entries: Vec::new(),
            index: FxHashMap::default(),
        }
    }
}
