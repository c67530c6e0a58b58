//! Dominators command handler

use super::{reporter, resolve_csv_options};
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::Reporter;
use crate::{DominatorsArgs, ListFormatArg};
use dominar::{read_kill_map, DominatorGroup, DominatorOracle, DominatorSummary, MutantId};
use serde::Serialize;
use std::fmt::Write as _;

/// JSON shape of the dominators listing
#[derive(Debug, Serialize)]
struct DominatorReport<'a> {
    summary: DominatorSummary,
    dominators: &'a [MutantId],
    #[serde(skip_serializing_if = "Option::is_none")]
    groups: Option<&'a [DominatorGroup]>,
    live: &'a [MutantId],
}

/// Execute the dominators command
pub fn execute_dominators(config: &CliConfig, args: &DominatorsArgs) -> CliResult<()> {
    let reporter = reporter(config);
    let options = resolve_csv_options(&config.settings.csv, &args.input)?;
    let kills = read_kill_map(&args.input.input, &options)?;
    let oracle = DominatorOracle::from_kill_map(&kills);

    let rendered = match args.format {
        ListFormatArg::Text => render_dominators_text(&oracle, args.groups, &reporter),
        ListFormatArg::Json => render_dominators_json(&oracle, args.groups)?,
    };
    reporter.result(&rendered)?;
    Ok(())
}

/// Human-readable dominator listing
#[must_use]
pub fn render_dominators_text(
    oracle: &DominatorOracle,
    with_groups: bool,
    reporter: &Reporter,
) -> String {
    let summary = oracle.summary();
    let mut out = String::new();

    let _ = writeln!(out, "{}", reporter.heading("Dominator Analysis"));
    let _ = writeln!(
        out,
        "  Mutants:     {} (killed {}, live {})",
        summary.total_mutants, summary.killed_mutants, summary.live_mutants
    );
    let _ = writeln!(
        out,
        "  Dominators:  {} ({:.1}% of killed)",
        summary.dominator_mutants,
        summary.dominator_ratio() * 100.0
    );
    let _ = writeln!(out, "  Tests:       {}", summary.distinct_tests);

    if oracle.groups().is_empty() {
        return out;
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", reporter.heading("Dominator set"));
    let width = oracle
        .groups()
        .iter()
        .map(|g| g.representative.as_str().chars().count())
        .max()
        .unwrap_or(0);
    for group in oracle.groups() {
        let _ = write!(
            out,
            "  {:<width$}  ({} tests)",
            group.representative.as_str(),
            group.test_count
        );
        if with_groups && group.members.len() > 1 {
            let members: Vec<&str> = group.members.iter().map(MutantId::as_str).collect();
            let _ = write!(out, "  = {}", members.join(", "));
        }
        let _ = writeln!(out);
    }
    out
}

fn render_dominators_json(oracle: &DominatorOracle, with_groups: bool) -> CliResult<String> {
    let report = DominatorReport {
        summary: oracle.summary(),
        dominators: oracle.dominators(),
        groups: with_groups.then(|| oracle.groups()),
        live: oracle.live(),
    };
    serde_json::to_string_pretty(&report)
        .map_err(|e| CliError::report_generation(format!("failed to serialize dominators: {e}")))
}
