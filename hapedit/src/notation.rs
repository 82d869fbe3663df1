//! The compact single-token edit notation.
//!
//! Three token shapes, tried in order; the grammar is unambiguous, so the
//! order is for clarity only:
//!
//! | Token   | Meaning                                                      |
//! |---------|--------------------------------------------------------------|
//! | `Δ4-7`  | deletion of reference positions 4 through 7 inclusive        |
//! | `11TAC` | insertion of `TAC` immediately after reference position 11   |
//! | `G16C`  | substitution at position 16 to `C`                           |
//!
//! The substitution's leading letter annotates the original base for human
//! readers; it is matched but not carried into the edit value. Rendering
//! emits `N` in that slot, so parsing a rendered token reproduces an equal
//! edit.

use std::fmt::{self, Display};
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use hapedit_core::{Sequence, Symbol};

use crate::edit::Edit;
use crate::errors::{InvalidEditError, NotationError};

static DELETION_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^Δ(\d+)-(\d+)$").unwrap());

// Anchored so that a token with a leading letter never lands here; only the
// substitution shape may carry one.
static INSERTION_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)([A-Za-z]+)$").unwrap());

static SUBSTITUTION_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z](\d+)([A-Za-z])$").unwrap());

/// Parse a digit run, reporting overflow as an unrecognized token.
fn parse_position(digits: &str, token: &str) -> Result<u64, NotationError> {
    digits
        .parse::<u64>()
        .map_err(|_| NotationError::UnrecognizedToken(token.to_string()))
}

impl<S, T> FromStr for Edit<S, T>
where
    S: Sequence,
    T: Symbol,
{
    type Err = NotationError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        if let Some(caps) = DELETION_TOKEN.captures(token) {
            let start = parse_position(&caps[1], token)?;
            let stop = parse_position(&caps[2], token)?;
            if stop < start {
                return Err(InvalidEditError::InvertedRange { start, stop }.into());
            }
            return Ok(Edit::deletion(start, stop - start + 1)?);
        }

        if let Some(caps) = INSERTION_TOKEN.captures(token) {
            let position = parse_position(&caps[1], token)?;
            let bases = S::from_text(&caps[2]).map_err(|source| NotationError::Symbol {
                token: token.to_string(),
                source,
            })?;
            return Ok(Edit::insertion(position, bases)?);
        }

        if let Some(caps) = SUBSTITUTION_TOKEN.captures(token) {
            let position = parse_position(&caps[1], token)?;
            let base_char = caps[2]
                .chars()
                .next()
                .ok_or_else(|| NotationError::UnrecognizedToken(token.to_string()))?;
            let base = T::from_char(base_char).map_err(|source| NotationError::Symbol {
                token: token.to_string(),
                source,
            })?;
            return Ok(Edit::substitution(position, base)?);
        }

        Err(NotationError::UnrecognizedToken(token.to_string()))
    }
}

impl<S, T> Display for Edit<S, T>
where
    S: Sequence,
    T: Symbol,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edit::Substitution { position, base } => {
                write!(f, "N{}{}", position, base.as_char())
            }
            Edit::Insertion { position, bases } => write!(f, "{}{}", position, bases.to_text()),
            Edit::Deletion { position, length } => {
                write!(f, "Δ{}-{}", position, position + length - 1)
            }
        }
    }
}
