//! Size comparisons between the raw input and its Huffman encoding, and the text report
//! the binary prints.

use log::info;

use super::cli::HuffOpts;
use crate::bitstream::BitString;
use crate::error::Result;
use crate::huffman_coding::codec::HuffmanCodec;

/// Size in bits of the input stored at a fixed width per symbol.
pub fn fixed_width_len(input_len: usize, bits_per_symbol: usize) -> usize {
    input_len * bits_per_symbol
}

/// How many times smaller the encoding is than the fixed width baseline:
/// `(input_len * bits_per_symbol) / encoded_len`. None when nothing was encoded.
pub fn compression_ratio(input_len: usize, bits_per_symbol: usize, encoded_len: usize) -> Option<f64> {
    if encoded_len == 0 {
        return None;
    }
    Some(fixed_width_len(input_len, bits_per_symbol) as f64 / encoded_len as f64)
}

/// Encode and decode `text` with a code built from its own characters, and describe the
/// result: original, encoding, decoded text, optional code table and tree, sizes and ratio.
/// Empty text skips the tree and reports an empty encoding.
pub fn render(text: &str, opts: &HuffOpts) -> Result<String> {
    let symbols: Vec<char> = text.chars().collect();
    let codec = if symbols.is_empty() {
        info!("Empty input, nothing to encode");
        None
    } else {
        Some(HuffmanCodec::from_symbols(symbols.iter().copied())?)
    };

    let (encoded, decoded) = match &codec {
        Some(codec) => {
            let encoded = codec.encode(&symbols)?;
            let decoded: String = codec.decode(&encoded)?.into_iter().collect();
            (encoded, decoded)
        }
        None => (BitString::new(), String::new()),
    };

    let mut out = String::new();
    out.push_str(&format!("\nOriginal text: {}\n", text));
    out.push_str(&format!("Huffman encoding: {}\n", encoded));
    out.push_str(&format!("Decoded text: {}\n", decoded));

    if let Some(codec) = &codec {
        if opts.show_table {
            out.push_str("\nCode table:\n");
            for (sym, code) in codec.mapping().iter() {
                out.push_str(&format!("  {:?}\t{}\n", sym, code));
            }
        }
        if opts.show_tree {
            out.push_str(&format!("\nTree structure:\n{}", codec.tree().structure()));
        }
    }

    out.push_str(&format!(
        "\nSizes: {} bits fixed width, {} bits encoded ({} bytes packed, {} padding bits)\n",
        fixed_width_len(symbols.len(), opts.bits_per_symbol),
        encoded.len(),
        encoded.as_bytes().len(),
        encoded.padding()
    ));
    match compression_ratio(symbols.len(), opts.bits_per_symbol, encoded.len()) {
        Some(ratio) => out.push_str(&format!(
            "Compression ratio against {} bits per symbol: {}\n",
            opts.bits_per_symbol, ratio
        )),
        None => out.push_str("Compression ratio: n/a (nothing encoded)\n"),
    }
    Ok(out)
}
