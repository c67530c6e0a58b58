//! Kill maps: which tests kill which mutants.
//!
//! ## Usage
//!
//! ```
//! use dominar::killmap::KillMap;
//!
//! let mut kills = KillMap::new();
//! kills.insert_kill("m1", "t1");
//! kills.insert_kill("m1", "t2");
//! kills.insert_mutant("m2"); // live mutant, killed by nothing
//!
//! assert_eq!(kills.len(), 2);
//! assert_eq!(kills.distinct_tests().len(), 2);
//! ```

pub mod csv;

use crate::mutant::{MutantId, TestId};
use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::{BTreeMap, BTreeSet};

pub use self::csv::{parse_kill_map, read_kill_map, ColumnRef, CsvOptions};

/// Mapping from each mutant to the set of tests that kill it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KillMap {
    kills: BTreeMap<MutantId, BTreeSet<TestId>>,
}

impl KillMap {
    /// Create an empty kill map
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `test` kills `mutant`.
    ///
    /// Returns `false` when the kill was already recorded.
    pub fn insert_kill(&mut self, mutant: impl Into<MutantId>, test: impl Into<TestId>) -> bool {
        self.kills
            .entry(mutant.into())
            .or_default()
            .insert(test.into())
    }

    /// Record a mutant without kills. Existing kills are kept.
    pub fn insert_mutant(&mut self, mutant: impl Into<MutantId>) {
        self.kills.entry(mutant.into()).or_default();
    }

    /// Tests killing `mutant`, or `None` for an unknown mutant
    #[must_use]
    pub fn tests_for(&self, mutant: &MutantId) -> Option<&BTreeSet<TestId>> {
        self.kills.get(mutant)
    }

    /// All known mutants in identifier order
    pub fn mutants(&self) -> impl Iterator<Item = &MutantId> {
        self.kills.keys()
    }

    /// Iterate over `(mutant, killing tests)` in identifier order
    pub fn iter(&self) -> btree_map::Iter<'_, MutantId, BTreeSet<TestId>> {
        self.kills.iter()
    }

    /// Union of every test that kills at least one mutant
    #[must_use]
    pub fn distinct_tests(&self) -> BTreeSet<TestId> {
        self.kills.values().flatten().cloned().collect()
    }

    /// Total number of recorded kill events
    #[must_use]
    pub fn kill_count(&self) -> usize {
        self.kills.values().map(BTreeSet::len).sum()
    }

    /// Number of known mutants
    #[must_use]
    pub fn len(&self) -> usize {
        self.kills.len()
    }

    /// Whether no mutant is known
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kills.is_empty()
    }
}

impl<M, T> FromIterator<(M, T)> for KillMap
where
    M: Into<MutantId>,
    T: Into<TestId>,
{
    fn from_iter<I: IntoIterator<Item = (M, T)>>(iter: I) -> Self {
        let mut kills = Self::new();
        for (mutant, test) in iter {
            kills.insert_kill(mutant, test);
        }
        kills
    }
}

impl<'a> IntoIterator for &'a KillMap {
    type Item = (&'a MutantId, &'a BTreeSet<TestId>);
    type IntoIter = btree_map::Iter<'a, MutantId, BTreeSet<TestId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_kill_deduplicates() {
        let mut kills = KillMap::new();
        assert!(kills.insert_kill("m1", "t1"));
        assert!(!kills.insert_kill("m1", "t1"));
        assert_eq!(kills.kill_count(), 1);
    }

    #[test]
    fn test_insert_mutant_keeps_existing_kills() {
        let mut kills = KillMap::new();
        kills.insert_kill("m1", "t1");
        kills.insert_mutant("m1");
        kills.insert_mutant("m2");

        assert_eq!(kills.tests_for(&"m1".into()).unwrap().len(), 1);
        assert!(kills.tests_for(&"m2".into()).unwrap().is_empty());
        assert!(kills.tests_for(&"m3".into()).is_none());
    }

    #[test]
    fn test_from_iterator_groups_by_mutant() {
        let kills: KillMap = [("1", "a"), ("2", "b"), ("1", "c")].into_iter().collect();
        assert_eq!(kills.len(), 2);
        assert_eq!(kills.kill_count(), 3);
        let tests: Vec<&str> = kills
            .tests_for(&MutantId::from(1))
            .unwrap()
            .iter()
            .map(TestId::as_str)
            .collect();
        assert_eq!(tests, vec!["a", "c"]);
    }

    #[test]
    fn test_mutants_in_natural_order() {
        let kills: KillMap = [("10", "t"), ("9", "t"), ("100", "t")].into_iter().collect();
        let ids: Vec<&str> = kills.mutants().map(MutantId::as_str).collect();
        assert_eq!(ids, vec!["9", "10", "100"]);
    }

    #[test]
    fn test_distinct_tests() {
        let kills: KillMap = [("m1", "t1"), ("m2", "t1"), ("m2", "t2")].into_iter().collect();
        assert_eq!(kills.distinct_tests().len(), 2);
    }

    #[test]
    fn test_empty() {
        let kills = KillMap::new();
        assert!(kills.is_empty());
        assert_eq!(kills.len(), 0);
        assert!(kills.distinct_tests().is_empty());
    }

    #[test]
    fn test_json_shape() {
        let kills: KillMap = [("m1", "t1")].into_iter().collect();
        let json = serde_json::to_string(&kills).unwrap();
        assert_eq!(json, r#"{"m1":["t1"]}"#);
        let back: KillMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, kills);
    }
}
