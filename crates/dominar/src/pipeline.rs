//! End-to-end completeness analysis: kill map -> dominators -> curve.

use crate::curve::{build_completeness_curve, CompletenessCurve};
use crate::killmap::{read_kill_map, CsvOptions, KillMap};
use crate::mutant::MutantId;
use crate::oracle::{DominatorOracle, DominatorSummary};
use crate::result::DominarResult;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Dominator summary together with the completeness curve over the dominators
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletenessAnalysis {
    /// Counts from the dominator analysis
    pub summary: DominatorSummary,
    /// Dominator set in identifier order
    pub dominators: Vec<MutantId>,
    /// Greedy completeness curve over the dominator set
    pub curve: CompletenessCurve,
}

/// Compute dominators of `kills` and their completeness curve
pub fn analyze_kill_map(kills: &KillMap) -> DominarResult<CompletenessAnalysis> {
    let oracle = DominatorOracle::from_kill_map(kills);
    let curve = build_completeness_curve(oracle.dominators(), &oracle)?;
    let summary = oracle.summary();

    info!(
        mutants = summary.total_mutants,
        killed = summary.killed_mutants,
        dominators = summary.dominator_mutants,
        tests = curve.final_coverage(),
        "completeness analysis finished"
    );

    Ok(CompletenessAnalysis {
        summary,
        dominators: oracle.dominators().to_vec(),
        curve,
    })
}

/// Read a kill-map CSV and analyze it
pub fn analyze_csv(path: &Path, options: &CsvOptions) -> DominarResult<CompletenessAnalysis> {
    info!(path = %path.display(), "reading kill map");
    let kills = read_kill_map(path, options)?;
    analyze_kill_map(&kills)
}
