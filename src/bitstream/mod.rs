//! The bitstream module holds the bit container shared by the coder.
//!
//! Codes and encoded messages are both plain sequences of bits. The container packs them
//! MSB first into bytes so the packed size of an encoded message can be reported, and it
//! prints and parses the '0'/'1' text form used on the command line.
//!
pub mod bitstring;

pub use bitstring::{BitString, Bits};
