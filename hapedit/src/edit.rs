use std::cmp::Ordering;

use hapedit_core::{DnaSequence, Nucleotide, Sequence, Symbol};

use crate::errors::InvalidEditError;

/// A single edit relating a reference sequence to an observed sequence.
///
/// Positions are 1-based coordinates on the reference. The variant set is
/// closed; consumers match exhaustively rather than dispatching through an
/// open hierarchy. Construct through [`Edit::substitution`],
/// [`Edit::insertion`], and [`Edit::deletion`], which enforce the per-variant
/// invariants, or parse a notation token with `str::parse`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Edit<S, T>
where
    S: Sequence,
    T: Symbol,
{
    /// The reference symbol at `position` is replaced by `base`.
    Substitution { position: u64, base: T },

    /// `bases` are inserted between reference positions `position` and
    /// `position + 1`.
    Insertion { position: u64, bases: S },

    /// The reference range `[position, position + length - 1]` is removed.
    Deletion { position: u64, length: u64 },
}

/// An edit over the DNA alphabet.
pub type DnaEdit = Edit<DnaSequence, Nucleotide>;

impl<S, T> Edit<S, T>
where
    S: Sequence,
    T: Symbol,
{
    /// Replacement of the reference symbol at `position` (>= 1) with `base`.
    pub fn substitution(position: u64, base: T) -> Result<Self, InvalidEditError> {
        if position == 0 {
            return Err(InvalidEditError::ZeroPosition);
        }
        Ok(Edit::Substitution { position, base })
    }

    /// Insertion of the non-empty `bases` immediately after `position` (>= 1).
    pub fn insertion(position: u64, bases: S) -> Result<Self, InvalidEditError> {
        if position == 0 {
            return Err(InvalidEditError::ZeroPosition);
        }
        if bases.is_empty() {
            return Err(InvalidEditError::EmptyInsertion);
        }
        Ok(Edit::Insertion { position, bases })
    }

    /// Removal of `length` (>= 1) reference symbols starting at `position` (>= 1).
    pub fn deletion(position: u64, length: u64) -> Result<Self, InvalidEditError> {
        if position == 0 {
            return Err(InvalidEditError::ZeroPosition);
        }
        if length == 0 {
            return Err(InvalidEditError::ZeroLengthDeletion);
        }
        Ok(Edit::Deletion { position, length })
    }

    /// Number of symbols this edit touches: 1 for a substitution, the run
    /// length for an insertion or a deletion.
    pub fn length(&self) -> u64 {
        match self {
            Edit::Substitution { .. } => 1,
            Edit::Insertion { bases, .. } => bases.len() as u64,
            Edit::Deletion { length, .. } => *length,
        }
    }

    /// Leftmost reference position the edit is anchored to.
    pub fn left_position(&self) -> u64 {
        match self {
            Edit::Substitution { position, .. }
            | Edit::Insertion { position, .. }
            | Edit::Deletion { position, .. } => *position,
        }
    }

    /// Rightmost reference coordinate the edit reaches.
    ///
    /// For an insertion this is `left_position() + 1`: the inserted run sits
    /// in the zero-width gap between the two coordinates and spans no
    /// reference range of its own.
    pub fn right_position(&self) -> u64 {
        match self {
            Edit::Substitution { position, .. } => *position,
            Edit::Insertion { position, .. } => position + 1,
            Edit::Deletion { position, length } => position + length - 1,
        }
    }

    /// Net change in sequence length were this edit applied: 0 for a
    /// substitution, `+length` for an insertion, `-length` for a deletion.
    pub fn length_delta(&self) -> i64 {
        match self {
            Edit::Substitution { .. } => 0,
            Edit::Insertion { bases, .. } => bases.len() as i64,
            Edit::Deletion { length, .. } => -(*length as i64),
        }
    }

    fn variant_rank(&self) -> u8 {
        match self {
            Edit::Substitution { .. } => 0,
            Edit::Insertion { .. } => 1,
            Edit::Deletion { .. } => 2,
        }
    }
}

// Edits order by left position, then by length. Variant rank and payload
// only separate edits that already coincide on both keys, so `cmp` returns
// `Equal` exactly for equal edits.
impl<S, T> Ord for Edit<S, T>
where
    S: Sequence + Ord,
    T: Symbol + Ord,
{
    #[inline]
    fn cmp(&self, other: &Edit<S, T>) -> Ordering {
        match self.left_position().cmp(&other.left_position()) {
            Ordering::Less => Ordering::Less,
            Ordering::Greater => Ordering::Greater,
            Ordering::Equal => self
                .length()
                .cmp(&other.length())
                .then_with(|| self.variant_rank().cmp(&other.variant_rank()))
                .then_with(|| self.payload_cmp(other)),
        }
    }
}

impl<S, T> PartialOrd for Edit<S, T>
where
    S: Sequence + Ord,
    T: Symbol + Ord,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S, T> Edit<S, T>
where
    S: Sequence + Ord,
    T: Symbol + Ord,
{
    fn payload_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Edit::Substitution { base: a, .. }, Edit::Substitution { base: b, .. }) => a.cmp(b),
            (Edit::Insertion { bases: a, .. }, Edit::Insertion { bases: b, .. }) => a.cmp(b),
            // Same-variant deletions agreeing on position and length are
            // equal; cross-variant pairs were separated by rank already.
            _ => Ordering::Equal,
        }
    }
}
