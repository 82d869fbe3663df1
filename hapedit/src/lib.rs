//! # Reference-sequence edit models
//!
//! Models a single point of change between a reference sequence and an
//! observed sequence — a substitution, an insertion, or a deletion — and
//! the compact token notation used to exchange such edits. It provides:
//!
//! - the [`Edit`] tagged union with validating constructors
//! - position arithmetic (`length`, `left_position`, `right_position`,
//!   `length_delta`)
//! - equality, hashing, and a total order (left position, then length)
//! - the token codec (`FromStr` to parse, `Display` to render)
//!
//! Edits are generic over the sequence/symbol alphabet; the DNA alphabet
//! from `hapedit-core` is wired up as [`DnaEdit`].

pub mod edit;
pub mod errors;

mod notation;

pub use edit::{DnaEdit, Edit};
pub use errors::{InvalidEditError, NotationError};
