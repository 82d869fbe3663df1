//! # Alphabet primitives for sequence edits
//!
//! The symbol/sequence layer that edit models are generic over. It provides:
//!
//! - capability traits ([`Symbol`], [`Sequence`]) for anything that can be
//!   decoded from and encoded to alphabet characters
//! - a concrete DNA alphabet ([`Nucleotide`], [`DnaSequence`])
//! - pass-through impls for `char`/`String` (the ASCII-letter alphabet)

pub mod alphabet;
pub mod dna;

pub use alphabet::{AlphabetError, Sequence, Symbol};
pub use dna::{DnaSequence, Nucleotide};
