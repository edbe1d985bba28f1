//! Length and character partitioning of candidate key sets.
//!
//! Length is always checked first: it is the cheapest discriminator and each
//! length group never needs to consider keys of other lengths. Within a
//! group, [`CharPartitioning`] splits a candidate set by the character found
//! at one position.

use crate::keys::KeyTable;
use indexmap::IndexMap;
use smallvec::SmallVec;

/// Candidate key indices; most partitions are small.
pub type IndexList = SmallVec<[usize; 8]>;

/// All key indices sharing one text length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthGroup {
    pub length: usize,
    pub indices: IndexList,
}

/// Groups the table's key indices by length, ordered by first occurrence of
/// each length. The groups partition the full index set exactly.
pub fn length_groups(table: &KeyTable) -> Vec<LengthGroup> {
    let mut groups: IndexMap<usize, IndexList> = IndexMap::new();
    for key in table.keys() {
        groups.entry(key.len()).or_default().push(key.index());
    }

    groups
        .into_iter()
        .map(|(length, indices)| LengthGroup { length, indices })
        .collect()
}

/// Partitioning of a candidate set by the character at one position.
///
/// Each distinct character maps to the candidates carrying it at that
/// position, in first-occurrence order. The partitions are disjoint and
/// their union is the candidate set; the partition count is the number of
/// branches a switch on this position would need.
#[derive(Debug)]
pub struct CharPartitioning {
    position: usize,
    partitions: IndexMap<char, IndexList>,
}

impl CharPartitioning {
    /// Partitions `candidates` by the character at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position` is not inside every candidate; the candidates of
    /// one length group all share that length.
    pub fn at_position(table: &KeyTable, candidates: &[usize], position: usize) -> Self {
        let mut partitions: IndexMap<char, IndexList> = IndexMap::new();
        for &index in candidates {
            let key = table.key(index);
            assert!(
                position < key.len(),
                "position {position} is outside key `{}`",
                key.text()
            );
            partitions.entry(key.char_at(position)).or_default().push(index);
        }

        Self { position, partitions }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of partitions: the branch count of a switch on this position.
    pub fn covering_size(&self) -> usize {
        self.partitions.len()
    }

    /// True if every candidate sits alone in its own partition.
    pub fn separates_fully(&self) -> bool {
        self.partitions.values().all(|indices| indices.len() == 1)
    }

    /// True if this position distinguishes at least two candidates. A single
    /// partition carries no information.
    pub fn is_discriminating(&self) -> bool {
        self.partitions.len() > 1
    }

    pub fn partitions(&self) -> impl Iterator<Item = (char, &IndexList)> {
        self.partitions.iter().map(|(ch, indices)| (*ch, indices))
    }

    pub fn into_partitions(self) -> IndexMap<char, IndexList> {
        self.partitions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::indexmap;
    use smol_str::SmolStr;

    fn table(keys: &[&str]) -> KeyTable {
        KeyTable::build(
            keys.iter()
                .map(|k| (SmolStr::new(k), format!("V_{k}")))
                .collect(),
        )
    }

    #[test]
    fn groups_follow_first_occurrence_of_length() {
        let table = table(&["int", "if", "do", "while"]);
        let groups = length_groups(&table);

        let shape: Vec<(usize, Vec<usize>)> = groups
            .iter()
            .map(|g| (g.length, g.indices.to_vec()))
            .collect();
        assert_eq!(shape, vec![(3, vec![0]), (2, vec![1, 2]), (5, vec![3])]);
    }

    #[test]
    fn groups_cover_every_index_exactly_once() {
        let table = table(&["a", "bb", "cc", "d", "eee"]);
        let mut seen: Vec<usize> = length_groups(&table)
            .iter()
            .flat_map(|g| g.indices.iter().copied())
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn zero_length_key_forms_its_own_group() {
        let table = KeyTable::build(indexmap! {
            SmolStr::new("") => "EMPTY".to_string(),
            SmolStr::new("x") => "X".to_string(),
        });
        let groups = length_groups(&table);
        assert_eq!(groups[0].length, 0);
        assert_eq!(groups[0].indices.to_vec(), vec![0]);
    }

    #[test]
    fn partitions_are_disjoint_and_cover_candidates() {
        let table = table(&["car", "cat", "bar", "bus"]);
        let candidates = [0, 1, 2, 3];
        let partitioning = CharPartitioning::at_position(&table, &candidates, 0);

        assert_eq!(partitioning.covering_size(), 2);
        let mut union: Vec<usize> = partitioning
            .partitions()
            .flat_map(|(_, indices)| indices.iter().copied())
            .collect();
        union.sort_unstable();
        assert_eq!(union, candidates);
    }

    #[test]
    fn branch_order_is_first_occurrence() {
        let table = table(&["car", "cat", "bar", "bus"]);
        let partitioning = CharPartitioning::at_position(&table, &[0, 1, 2, 3], 2);

        let chars: Vec<char> = partitioning.partitions().map(|(ch, _)| ch).collect();
        assert_eq!(chars, vec!['r', 't', 's']);
    }

    #[test]
    fn single_partition_is_not_discriminating() {
        let table = table(&["car", "cat"]);
        let partitioning = CharPartitioning::at_position(&table, &[0, 1], 0);
        assert!(!partitioning.is_discriminating());
        assert_eq!(partitioning.covering_size(), 1);
        assert!(!partitioning.separates_fully());
    }

    #[test]
    #[should_panic(expected = "outside key")]
    fn out_of_bounds_position_panics() {
        let table = table(&["ab", "cd"]);
        CharPartitioning::at_position(&table, &[0, 1], 2);
    }
}
