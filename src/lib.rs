//! Static Huffman coding over any hashable symbol type.
//!
//! Builds an optimal prefix code from the symbol frequencies of an input sequence, encodes
//! the sequence into a bit-string and decodes it back. There is no framing, streaming or
//! adaptive coding: the tree built for an input is what decodes it.
//!
//! Basic usage:
//!
//! ```
//! use huffcode::{build_code_mapping, build_tree, decode, encode};
//!
//! let text: Vec<char> = "abracadabra".chars().collect();
//! let tree = build_tree(text.iter().copied())?;
//! let mapping = build_code_mapping(&tree);
//! let bits = encode(&text, &mapping)?;
//! assert_eq!(bits.len(), 23);
//! assert_eq!(decode(&bits, &tree)?, text);
//! # Ok::<(), huffcode::HuffmanError>(())
//! ```
//!
//! The `huffcode` binary wraps this for a phrase typed at the terminal, printing the
//! encoding, the decoded text and the compression ratio against 8 bits per character.
//!
pub mod bitstream;
pub mod error;
pub mod huffman_coding;
pub mod tools;

pub use bitstream::BitString;
pub use error::{HuffmanError, Result};
pub use huffman_coding::code_map::{build_code_mapping, Code, CodeMapping};
pub use huffman_coding::codec::{round_trip, HuffmanCodec};
pub use huffman_coding::decode::decode;
pub use huffman_coding::encode::encode;
pub use huffman_coding::tree::{build_tree, HuffmanTree};
pub use tools::freq_count::FrequencyTable;
