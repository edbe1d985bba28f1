//! Decision-tree construction: recursive selection of discriminating
//! character positions.
//!
//! This is the heart of the generator. [`discriminate`] picks, for a set of
//! equal-length candidate keys, the character position whose partitioning
//! best separates them, and recurses on each partition until a single
//! candidate remains. The result is a target-language-agnostic
//! [`DecisionNode`] tree, built bottom-up and never mutated afterwards.

use crate::keys::KeyTable;
use crate::partition::{length_groups, CharPartitioning, LengthGroup};

/// Decision tree for one lookup table, built once per generation request and
/// consumed once by the emitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecisionNode {
    /// A single candidate remains; the emitter guards it with a full-key
    /// comparison unless the key is empty.
    Leaf(usize),
    /// Dispatch on the character at `position`; a character without a branch
    /// means no match.
    SwitchOnChar {
        position: usize,
        branches: Vec<(char, DecisionNode)>,
    },
    /// Root dispatch on the query length; a length without a branch means no
    /// match.
    SwitchOnLength {
        branches: Vec<(usize, DecisionNode)>,
    },
}

/// Builds the full decision tree for `table`: a length dispatch whose
/// branches discriminate each length group on character positions.
pub fn build_tree(table: &KeyTable) -> DecisionNode {
    let branches = length_groups(table)
        .into_iter()
        .map(|LengthGroup { length, indices }| (length, discriminate(table, &indices, length)))
        .collect();

    DecisionNode::SwitchOnLength { branches }
}

/// Discriminates `candidates`, all keys of length `length`, until each
/// remaining subset holds a single key.
///
/// Positions are scanned in increasing order. A position that separates
/// every candidate into its own partition is taken immediately; no later
/// position could do better. Otherwise, among the positions with more than
/// one partition, the one with the most partitions wins and the earliest
/// scanned position wins ties. Each partition is then discriminated
/// independently with a fresh scan over all positions: a position that is
/// useless for the whole set may still discriminate inside one partition.
///
/// The greedy choice is deliberately local, not globally depth-optimal;
/// callers depend on the exact shape of the generated dispatch.
///
/// # Panics
///
/// Panics if `candidates` is empty, or if no position discriminates a
/// multi-candidate set. Neither can happen for pairwise-distinct keys of
/// equal length, so either indicates a caller bug such as duplicate keys.
pub fn discriminate(table: &KeyTable, candidates: &[usize], length: usize) -> DecisionNode {
    assert!(!candidates.is_empty(), "empty candidate set");
    if candidates.len() == 1 {
        return DecisionNode::Leaf(candidates[0]);
    }
    assert!(length > 0, "multiple zero-length keys cannot be distinct");

    let mut best: Option<CharPartitioning> = None;
    for position in 0..length {
        let partitioning = CharPartitioning::at_position(table, candidates, position);
        if partitioning.separates_fully() {
            best = Some(partitioning);
            break;
        }
        if !partitioning.is_discriminating() {
            continue;
        }
        let replaces = match &best {
            Some(current) => partitioning.covering_size() > current.covering_size(),
            None => true,
        };
        if replaces {
            best = Some(partitioning);
        }
    }

    let best = best.expect("distinct keys of equal length differ at some position");
    tracing::trace!(
        target: "codegen",
        "position {} splits {} candidates into {} partitions",
        best.position(),
        candidates.len(),
        best.covering_size(),
    );

    let position = best.position();
    let branches = best
        .into_partitions()
        .into_iter()
        .map(|(ch, indices)| (ch, discriminate(table, &indices, length)))
        .collect();

    DecisionNode::SwitchOnChar { position, branches }
}
