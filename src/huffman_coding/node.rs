//! Tree nodes and the priority queue entry used while building a tree.

use std::cmp::Ordering;

/// What a node holds: either two children or a symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData<S> {
    Kids(Box<Node<S>>, Box<Node<S>>),
    Leaf(S),
}

/// A node of a Huffman tree. `weight` is the sum of the leaf counts below (or at) this node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<S> {
    pub weight: usize,
    pub node_data: NodeData<S>,
}

impl<S> Node<S> {
    /// Create a new leaf node
    pub fn leaf(sym: S, weight: usize) -> Node<S> {
        Node {
            weight,
            node_data: NodeData::Leaf(sym),
        }
    }

    /// Join two nodes under a new parent. `left` becomes the 0 branch, `right` the 1 branch.
    pub fn merge(left: Node<S>, right: Node<S>) -> Node<S> {
        Node {
            weight: left.weight + right.weight,
            node_data: NodeData::Kids(Box::new(left), Box::new(right)),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.node_data, NodeData::Leaf(_))
    }

    /// The symbol held by a leaf, None for an internal node.
    pub fn symbol(&self) -> Option<&S> {
        match &self.node_data {
            NodeData::Leaf(sym) => Some(sym),
            NodeData::Kids(..) => None,
        }
    }

    /// (left, right) children of an internal node, None for a leaf.
    pub fn kids(&self) -> Option<(&Node<S>, &Node<S>)> {
        match &self.node_data {
            NodeData::Kids(left, right) => Some((left, right)),
            NodeData::Leaf(_) => None,
        }
    }
}

/// A node waiting in the builder's queue, stamped with the order it was inserted.
///
/// Ordered so that `BinaryHeap` (a max-heap) pops the lowest weight first, and among equal
/// weights the earliest inserted.
#[derive(Debug)]
pub struct QueueEntry<S> {
    pub seq: usize,
    pub node: Node<S>,
}

impl<S> PartialEq for QueueEntry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.node.weight == other.node.weight && self.seq == other.seq
    }
}

impl<S> Eq for QueueEntry<S> {}

impl<S> PartialOrd for QueueEntry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for QueueEntry<S> {
    /// Sort by decreasing weight, then decreasing sequence number
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .node
            .weight
            .cmp(&self.node.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

#[cfg(test)]
mod test {
    use super::{Node, QueueEntry};
    use std::collections::BinaryHeap;

    #[test]
    fn merge_sums_weights() {
        let n = Node::merge(Node::leaf('a', 3), Node::leaf('b', 4));
        assert_eq!(n.weight, 7);
        assert!(!n.is_leaf());
        let (l, r) = n.kids().unwrap();
        assert_eq!(l.symbol(), Some(&'a'));
        assert_eq!(r.symbol(), Some(&'b'));
    }

    #[test]
    fn queue_pops_lightest_then_oldest() {
        let mut heap = BinaryHeap::new();
        for (seq, (sym, w)) in [('a', 2), ('b', 1), ('c', 2), ('d', 1)].into_iter().enumerate() {
            heap.push(QueueEntry {
                seq,
                node: Node::leaf(sym, w),
            });
        }
        let order: Vec<char> = std::iter::from_fn(|| heap.pop())
            .map(|e| *e.node.symbol().unwrap())
            .collect();
        assert_eq!(order, vec!['b', 'd', 'a', 'c']);
    }
}
