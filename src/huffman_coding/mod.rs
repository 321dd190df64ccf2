//! The huffman_coding module holds the coder itself.
//!
//! A tree is built from symbol frequencies (tree), each leaf's root-to-leaf path becomes its
//! code (code_map), a symbol sequence is encoded by concatenating codes (encode), and a
//! bit-string is decoded by walking the tree from the root (decode).
//!
//! Everything here is a pure function of its inputs. Nothing is shared between calls.
//!
pub mod code_map;
pub mod codec;
pub mod decode;
pub mod encode;
pub mod node;
pub mod tree;
