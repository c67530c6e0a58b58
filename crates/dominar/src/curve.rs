//! Greedy test completeness curve.
//!
//! Orders dominator mutants by greedy maximum marginal coverage and records,
//! after each mutant examined, how many distinct tests have been accounted for.
//!
//! ## Algorithm
//!
//! ```text
//! remaining[m] = tests_covered(m)           for every dominator m
//! claimed      = {}
//! points       = [(0, 0)]
//! repeat N times:
//!     pick m with the largest |remaining[m]|   (ties: smallest MutantId)
//!     claimed  = claimed ∪ remaining[m]
//!     points  += (step, |claimed|)
//!     remaining[o] -= claimed                  for every other o
//!     drop remaining[m]
//! ```
//!
//! A test is counted at most once: as soon as a selection claims it, it is
//! removed from every other mutant's remaining set. A mutant whose tests were
//! all claimed earlier still costs one unit of work and adds a flat segment.
//!
//! ## Example
//!
//! ```
//! use dominar::curve::build_completeness_curve;
//! use dominar::killmap::KillMap;
//! use dominar::mutant::MutantId;
//!
//! let kills: KillMap = [("m1", "t1"), ("m1", "t2"), ("m2", "t3")].into_iter().collect();
//! let dominators = [MutantId::from("m1"), MutantId::from("m2")];
//!
//! let curve = build_completeness_curve(&dominators, &kills).unwrap();
//! assert_eq!(curve.to_pairs(), vec![(0, 0), (1, 2), (2, 3)]);
//! ```

use crate::mutant::{MutantId, TestId};
use crate::oracle::CoverageOracle;
use crate::result::{DominarError, DominarResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// One point of the curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Mutants examined so far
    pub work: usize,
    /// Distinct tests accounted for so far
    pub coverage: usize,
}

impl CurvePoint {
    /// Create a point
    #[must_use]
    pub const fn new(work: usize, coverage: usize) -> Self {
        Self { work, coverage }
    }

    /// The seed point every curve starts from
    pub const ORIGIN: Self = Self::new(0, 0);
}

impl From<CurvePoint> for (usize, usize) {
    fn from(point: CurvePoint) -> Self {
        (point.work, point.coverage)
    }
}

/// Mutant chosen at one step and the tests it newly accounted for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Step number (1-based; equals the work coordinate of the emitted point)
    pub work: usize,
    /// Selected mutant
    pub mutant: MutantId,
    /// Tests this mutant claimed that no earlier selection had claimed
    pub new_tests: BTreeSet<TestId>,
}

impl Selection {
    /// Whether this step added no coverage
    #[must_use]
    pub fn is_flat(&self) -> bool {
        self.new_tests.is_empty()
    }
}

/// Cumulative (work, coverage) curve plus the selection order behind it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletenessCurve {
    points: Vec<CurvePoint>,
    selections: Vec<Selection>,
}

impl CompletenessCurve {
    /// Curve points, starting at (0, 0)
    #[must_use]
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Selections in the order they were made
    #[must_use]
    pub fn selections(&self) -> &[Selection] {
        &self.selections
    }

    /// Points as plain `(work, coverage)` pairs
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(usize, usize)> {
        self.points.iter().copied().map(Into::into).collect()
    }

    /// Number of mutants examined (N)
    #[must_use]
    pub fn work(&self) -> usize {
        self.selections.len()
    }

    /// Distinct tests accounted for once every mutant is examined
    #[must_use]
    pub fn final_coverage(&self) -> usize {
        self.points.last().map_or(0, |point| point.coverage)
    }

    /// Number of selections that added no coverage
    #[must_use]
    pub fn flat_steps(&self) -> usize {
        self.selections.iter().filter(|s| s.is_flat()).count()
    }

    /// Coverage after examining `work` mutants
    #[must_use]
    pub fn coverage_at(&self, work: usize) -> Option<usize> {
        self.points.get(work).map(|point| point.coverage)
    }

    /// Least work needed to reach `target` distinct tests, if reachable
    #[must_use]
    pub fn work_for_coverage(&self, target: usize) -> Option<usize> {
        self.points
            .iter()
            .find(|point| point.coverage >= target)
            .map(|point| point.work)
    }
}

/// Build the test completeness curve for a dominator set.
///
/// Every dominator is looked up in `oracle` once, before any selection. A
/// dominator the oracle does not know is a caller bug and fails with
/// [`DominarError::MissingCoverage`]; a known dominator with no tests is fine
/// and just contributes a flat step. Repeated identifiers count once.
///
/// The oracle's sets are copied, never modified.
pub fn build_completeness_curve<'a, I, O>(
    dominators: I,
    oracle: &O,
) -> DominarResult<CompletenessCurve>
where
    I: IntoIterator<Item = &'a MutantId>,
    O: CoverageOracle + ?Sized,
{
    let mut remaining: BTreeMap<MutantId, BTreeSet<TestId>> = BTreeMap::new();
    for mutant in dominators {
        let tests = oracle
            .tests_covered(mutant)
            .ok_or_else(|| DominarError::missing_coverage(mutant.clone()))?;
        remaining.insert(mutant.clone(), tests.clone());
    }

    let total = remaining.len();
    let mut claimed: BTreeSet<TestId> = BTreeSet::new();
    let mut points = Vec::with_capacity(total + 1);
    let mut selections = Vec::with_capacity(total);
    points.push(CurvePoint::ORIGIN);

    while let Some((mutant, new_tests)) = take_next(&mut remaining) {
        // remaining sets never hold a claimed test, so this is the whole gain
        claimed.extend(new_tests.iter().cloned());
        for tests in remaining.values_mut() {
            tests.retain(|test| !new_tests.contains(test));
        }

        let work = selections.len() + 1;
        debug!(
            work,
            mutant = %mutant,
            gained = new_tests.len(),
            coverage = claimed.len(),
            "selected dominator mutant"
        );
        points.push(CurvePoint::new(work, claimed.len()));
        selections.push(Selection {
            work,
            mutant,
            new_tests,
        });
    }

    debug!(
        mutants = total,
        coverage = claimed.len(),
        "built completeness curve"
    );
    Ok(CompletenessCurve { points, selections })
}

/// Remove and return the mutant with the largest remaining set; the smallest
/// identifier wins ties.
fn take_next(
    remaining: &mut BTreeMap<MutantId, BTreeSet<TestId>>,
) -> Option<(MutantId, BTreeSet<TestId>)> {
    let mut best: Option<(&MutantId, usize)> = None;
    // ascending identifier order, so only a strictly larger set displaces the best
    for (mutant, tests) in remaining.iter() {
        if best.map_or(true, |(_, size)| tests.len() > size) {
            best = Some((mutant, tests.len()));
        }
    }
    let key = best.map(|(mutant, _)| mutant.clone())?;
    remaining.remove_entry(&key)
}
