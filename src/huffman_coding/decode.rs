use log::debug;

use super::node::NodeData;
use super::tree::HuffmanTree;
use crate::bitstream::BitString;
use crate::error::{HuffmanError, Result};

/// Decode `bits` by walking `tree`: 0 goes left, 1 goes right, and reaching a leaf emits its
/// symbol and restarts at the root. The bits must end exactly on a leaf, otherwise the
/// input was truncated or corrupt and MalformedEncoding is returned.
///
/// A singleton tree has no edges, so each `0` bit stands for one occurrence of its symbol.
pub fn decode<S: Clone>(bits: &BitString, tree: &HuffmanTree<S>) -> Result<Vec<S>> {
    let root = tree.root();

    if let NodeData::Leaf(sym) = &root.node_data {
        if let Some(pos) = bits.iter().position(|bit| bit) {
            return Err(HuffmanError::MalformedEncoding {
                consumed: pos,
                len: bits.len(),
            });
        }
        debug!("Decoded {} bits as a run of the sole symbol", bits.len());
        return Ok(vec![sym.clone(); bits.len()]);
    }

    let mut result = Vec::new();
    let mut current = root;
    let mut consumed = 0;
    for bit in bits.iter() {
        // current is always internal here: leaves send us straight back to the root.
        let next = match &current.node_data {
            NodeData::Kids(left, right) => {
                if bit {
                    &**right
                } else {
                    &**left
                }
            }
            NodeData::Leaf(_) => {
                return Err(HuffmanError::MalformedEncoding {
                    consumed,
                    len: bits.len(),
                })
            }
        };
        consumed += 1;
        match &next.node_data {
            NodeData::Leaf(sym) => {
                result.push(sym.clone());
                current = root;
            }
            NodeData::Kids(..) => current = next,
        }
    }

    // Ending anywhere but the root means the last code was cut short
    if !std::ptr::eq(current, root) {
        return Err(HuffmanError::MalformedEncoding {
            consumed,
            len: bits.len(),
        });
    }

    debug!("Decoded {} bits into {} symbols", bits.len(), result.len());
    Ok(result)
}
