//! End-to-end tests for DNA edits: construction, ordering, and the token
//! notation, exercised through the public API.

use hapedit::{DnaEdit, InvalidEditError, NotationError};
use hapedit_core::{AlphabetError, DnaSequence, Nucleotide, Sequence};

fn dna(text: &str) -> DnaSequence {
    DnaSequence::from_text(text).unwrap()
}

// ============================================================================
// Construction and positional arithmetic
// ============================================================================

#[test]
fn test_substitution_reads_back_its_geometry() {
    let edit = DnaEdit::substitution(16, Nucleotide::C).unwrap();
    assert_eq!(
        (
            edit.left_position(),
            edit.right_position(),
            edit.length(),
            edit.length_delta()
        ),
        (16, 16, 1, 0)
    );
}

#[test]
fn test_deletion_right_edge_and_delta() {
    for (position, length) in [(1, 1), (1, 2), (40, 7)] {
        let edit = DnaEdit::deletion(position, length).unwrap();
        assert_eq!(edit.right_position(), position + length - 1);
        assert_eq!(edit.length_delta(), -(length as i64));
    }
}

#[test]
fn test_insertion_right_edge_is_a_boundary() {
    for text in ["A", "TAC", "GGGGGGGG"] {
        let edit = DnaEdit::insertion(11, dna(text)).unwrap();
        assert_eq!(edit.right_position(), 12);
        assert_eq!(edit.length_delta(), text.len() as i64);
    }
}

#[test]
fn test_invariant_violations_fail_construction() {
    assert_eq!(
        DnaEdit::substitution(0, Nucleotide::A),
        Err(InvalidEditError::ZeroPosition)
    );
    assert_eq!(
        DnaEdit::deletion(4, 0),
        Err(InvalidEditError::ZeroLengthDeletion)
    );
    assert_eq!(
        DnaEdit::insertion(4, dna("")),
        Err(InvalidEditError::EmptyInsertion)
    );
}

// ============================================================================
// Ordering across a haplotype's worth of edits
// ============================================================================

#[test]
fn test_edits_sort_left_to_right_then_shortest_first() {
    let mut edits = vec![
        DnaEdit::deletion(21, 3).unwrap(),
        DnaEdit::insertion(5, dna("TT")).unwrap(),
        DnaEdit::substitution(5, Nucleotide::G).unwrap(),
        DnaEdit::deletion(2, 8).unwrap(),
    ];
    edits.sort();

    assert_eq!(
        edits,
        vec![
            DnaEdit::deletion(2, 8).unwrap(),
            DnaEdit::substitution(5, Nucleotide::G).unwrap(),
            DnaEdit::insertion(5, dna("TT")).unwrap(),
            DnaEdit::deletion(21, 3).unwrap(),
        ]
    );
}

// ============================================================================
// Notation: parse vectors
// ============================================================================

#[test]
fn test_parse_deletion_token() {
    let edit: DnaEdit = "Δ1-2".parse().unwrap();
    assert_eq!(edit, DnaEdit::deletion(1, 2).unwrap());
    assert_eq!(edit.right_position(), 2);
}

#[test]
fn test_parse_insertion_token() {
    let edit: DnaEdit = "11TAC".parse().unwrap();
    assert_eq!(edit, DnaEdit::insertion(11, dna("TAC")).unwrap());
    assert_eq!(edit.right_position(), 12);
    assert_eq!(edit.length_delta(), 3);
}

#[test]
fn test_parse_substitution_token() {
    let edit: DnaEdit = "G16C".parse().unwrap();
    assert_eq!(edit, DnaEdit::substitution(16, Nucleotide::C).unwrap());
    assert_eq!(edit.length(), 1);
    assert_eq!(edit.length_delta(), 0);
}

// ============================================================================
// Notation: failure vectors
// ============================================================================

#[test]
fn test_inverted_deletion_is_not_a_grammar_error() {
    assert_eq!(
        "Δ5-3".parse::<DnaEdit>().unwrap_err(),
        NotationError::InvalidEdit(InvalidEditError::InvertedRange { start: 5, stop: 3 })
    );
}

#[test]
fn test_token_without_a_shape_names_itself() {
    assert_eq!(
        "abc".parse::<DnaEdit>().unwrap_err(),
        NotationError::UnrecognizedToken("abc".to_string())
    );
}

#[test]
fn test_foreign_base_fails_the_whole_token() {
    // Structurally a valid insertion, but E is not a DNA base.
    let err = "11TEC".parse::<DnaEdit>().unwrap_err();
    assert_eq!(
        err,
        NotationError::Symbol {
            token: "11TEC".to_string(),
            source: AlphabetError::UnknownSymbol {
                character: 'E',
                alphabet: "DNA",
            },
        }
    );

    assert!("G16Z".parse::<DnaEdit>().is_err());
}

// ============================================================================
// Notation: round trips
// ============================================================================

#[test]
fn test_rendered_edits_reparse_equal() {
    let edits = vec![
        DnaEdit::deletion(1, 2).unwrap(),
        DnaEdit::deletion(9, 1).unwrap(),
        DnaEdit::insertion(11, dna("TAC")).unwrap(),
        DnaEdit::insertion(1, dna("N")).unwrap(),
        DnaEdit::substitution(16, Nucleotide::C).unwrap(),
    ];
    for edit in edits {
        let reparsed: DnaEdit = edit.to_string().parse().unwrap();
        assert_eq!(reparsed, edit);
    }
}

#[test]
fn test_rendered_shapes() {
    assert_eq!(DnaEdit::deletion(1, 2).unwrap().to_string(), "Δ1-2");
    assert_eq!(
        DnaEdit::insertion(11, dna("TAC")).unwrap().to_string(),
        "11TAC"
    );
    // The original base is not recorded, so rendering annotates with N.
    assert_eq!(
        DnaEdit::substitution(16, Nucleotide::C).unwrap().to_string(),
        "N16C"
    );
}
