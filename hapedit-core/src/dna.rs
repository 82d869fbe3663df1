use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::alphabet::{AlphabetError, Sequence, Symbol};

/// A single DNA base. `N` stands for an unresolved base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Nucleotide {
    A,
    C,
    G,
    T,
    N,
}

impl Symbol for Nucleotide {
    fn from_char(c: char) -> Result<Self, AlphabetError> {
        match c.to_ascii_uppercase() {
            'A' => Ok(Nucleotide::A),
            'C' => Ok(Nucleotide::C),
            'G' => Ok(Nucleotide::G),
            'T' => Ok(Nucleotide::T),
            'N' => Ok(Nucleotide::N),
            _ => Err(AlphabetError::UnknownSymbol {
                character: c,
                alphabet: "DNA",
            }),
        }
    }

    fn as_char(&self) -> char {
        match self {
            Nucleotide::A => 'A',
            Nucleotide::C => 'C',
            Nucleotide::G => 'G',
            Nucleotide::T => 'T',
            Nucleotide::N => 'N',
        }
    }
}

impl Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

///
/// DnaSequence struct, a DNA sequence stored one base per element.
///
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DnaSequence(Vec<Nucleotide>);

impl DnaSequence {
    pub fn new(bases: Vec<Nucleotide>) -> Self {
        DnaSequence(bases)
    }

    pub fn bases(&self) -> &[Nucleotide] {
        &self.0
    }
}

impl Sequence for DnaSequence {
    fn from_text(text: &str) -> Result<Self, AlphabetError> {
        text.chars()
            .map(Nucleotide::from_char)
            .collect::<Result<Vec<_>, _>>()
            .map(DnaSequence)
    }

    fn len(&self) -> usize {
        self.0.len()
    }

    fn to_text(&self) -> String {
        self.0.iter().map(Nucleotide::as_char).collect()
    }
}

impl FromStr for DnaSequence {
    type Err = AlphabetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DnaSequence::from_text(s)
    }
}

impl Display for DnaSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_text())
    }
}
