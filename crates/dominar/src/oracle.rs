//! Coverage oracles and dominator mutant analysis.
//!
//! The curve builder only needs one capability from upstream: "which tests
//! cover mutant M". [`CoverageOracle`] is that capability. Any map from
//! mutants to test sets is an oracle, which keeps stubs trivial in tests.
//!
//! [`DominatorOracle`] computes the dominator set of a [`KillMap`] using the
//! subsumption relation between mutants:
//!
//! ```text
//! a subsumes b  <=>  tests(a) ⊆ tests(b)      (both killed)
//! ```
//!
//! Any test that kills `a` also kills `b`, so `b` is redundant once `a` is
//! examined. Mutants killed by exactly the same tests are indistinguishable
//! and collapse into one group, represented by the group's smallest
//! identifier. The dominators are the representatives of the groups that no
//! other killed mutant strictly subsumes. Live mutants take no part.

use crate::killmap::KillMap;
use crate::mutant::{MutantId, TestId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::hash::BuildHasher;
use tracing::debug;

/// Capability answering "which tests cover this mutant"
pub trait CoverageOracle {
    /// Tests covering `mutant`, or `None` when the oracle knows nothing about it.
    ///
    /// `Some` of an empty set means the mutant is known but covered by no test.
    fn tests_covered(&self, mutant: &MutantId) -> Option<&BTreeSet<TestId>>;
}

impl<O: CoverageOracle + ?Sized> CoverageOracle for &O {
    fn tests_covered(&self, mutant: &MutantId) -> Option<&BTreeSet<TestId>> {
        (**self).tests_covered(mutant)
    }
}

impl CoverageOracle for BTreeMap<MutantId, BTreeSet<TestId>> {
    fn tests_covered(&self, mutant: &MutantId) -> Option<&BTreeSet<TestId>> {
        self.get(mutant)
    }
}

impl<S: BuildHasher> CoverageOracle for HashMap<MutantId, BTreeSet<TestId>, S> {
    fn tests_covered(&self, mutant: &MutantId) -> Option<&BTreeSet<TestId>> {
        self.get(mutant)
    }
}

impl CoverageOracle for KillMap {
    fn tests_covered(&self, mutant: &MutantId) -> Option<&BTreeSet<TestId>> {
        self.tests_for(mutant)
    }
}

/// Indistinguishable dominator mutants: all killed by exactly the same tests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DominatorGroup {
    /// Smallest identifier in the group; this is the member in the dominator set
    pub representative: MutantId,
    /// Every member, representative first
    pub members: Vec<MutantId>,
    /// Number of tests killing each member
    pub test_count: usize,
}

/// Counts describing a dominator analysis
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DominatorSummary {
    /// Mutants in the kill map
    pub total_mutants: usize,
    /// Mutants killed by at least one test
    pub killed_mutants: usize,
    /// Mutants killed by no test
    pub live_mutants: usize,
    /// Size of the dominator set
    pub dominator_mutants: usize,
    /// Distinct tests killing at least one mutant
    pub distinct_tests: usize,
}

impl DominatorSummary {
    /// Fraction of killed mutants that are dominators (0.0 when nothing is killed)
    #[must_use]
    pub fn dominator_ratio(&self) -> f64 {
        if self.killed_mutants == 0 {
            0.0
        } else {
            self.dominator_mutants as f64 / self.killed_mutants as f64
        }
    }
}

/// Dominator set of a kill map, answering coverage queries from that kill map
#[derive(Debug, Clone)]
pub struct DominatorOracle {
    kills: KillMap,
    dominators: Vec<MutantId>,
    groups: Vec<DominatorGroup>,
    live: Vec<MutantId>,
}

impl DominatorOracle {
    /// Compute the dominator set of `kills`
    #[must_use]
    pub fn from_kill_map(kills: &KillMap) -> Self {
        let mut by_tests: BTreeMap<&BTreeSet<TestId>, Vec<MutantId>> = BTreeMap::new();
        let mut live = Vec::new();

        for (mutant, tests) in kills {
            if tests.is_empty() {
                live.push(mutant.clone());
            } else {
                // kill map iterates in identifier order, so members stay sorted
                by_tests.entry(tests).or_default().push(mutant.clone());
            }
        }

        let distinct: Vec<&BTreeSet<TestId>> = by_tests.keys().copied().collect();
        let mut groups: Vec<DominatorGroup> = by_tests
            .iter()
            .filter(|(tests, _)| {
                !distinct
                    .iter()
                    .any(|other| other.len() < tests.len() && other.is_subset(tests))
            })
            .filter_map(|(tests, members)| {
                members.first().map(|representative| DominatorGroup {
                    representative: representative.clone(),
                    members: members.clone(),
                    test_count: tests.len(),
                })
            })
            .collect();
        groups.sort_by(|a, b| a.representative.cmp(&b.representative));

        let dominators: Vec<MutantId> = groups
            .iter()
            .map(|group| group.representative.clone())
            .collect();

        debug!(
            mutants = kills.len(),
            live = live.len(),
            distinct_kill_sets = distinct.len(),
            dominators = dominators.len(),
            "computed dominator set"
        );

        Self {
            kills: kills.clone(),
            dominators,
            groups,
            live,
        }
    }

    /// Dominator mutants in identifier order
    #[must_use]
    pub fn dominators(&self) -> &[MutantId] {
        &self.dominators
    }

    /// Indistinguishable groups behind each dominator, in identifier order
    #[must_use]
    pub fn groups(&self) -> &[DominatorGroup] {
        &self.groups
    }

    /// Mutants no test kills
    #[must_use]
    pub fn live(&self) -> &[MutantId] {
        &self.live
    }

    /// The analysed kill map
    #[must_use]
    pub fn kill_map(&self) -> &KillMap {
        &self.kills
    }

    /// Whether `mutant` is in the dominator set
    #[must_use]
    pub fn is_dominator(&self, mutant: &MutantId) -> bool {
        self.dominators.binary_search(mutant).is_ok()
    }

    /// Summary counts
    #[must_use]
    pub fn summary(&self) -> DominatorSummary {
        DominatorSummary {
            total_mutants: self.kills.len(),
            killed_mutants: self.kills.len() - self.live.len(),
            live_mutants: self.live.len(),
            dominator_mutants: self.dominators.len(),
            distinct_tests: self.kills.distinct_tests().len(),
        }
    }
}

impl CoverageOracle for DominatorOracle {
    fn tests_covered(&self, mutant: &MutantId) -> Option<&BTreeSet<TestId>> {
        self.kills.tests_for(mutant)
    }
}
