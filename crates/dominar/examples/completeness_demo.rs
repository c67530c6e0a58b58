//! Completeness Demo - dominator mutants and the greedy curve
//!
//! Parses a small Major-style kill map, reports its dominator set, and
//! prints the test completeness curve as a table and as CSV.
//!
//! # Running
//!
//! ```bash
//! cargo run --example completeness_demo -p dominar
//! ```

#![allow(clippy::uninlined_format_args)]

use dominar::{
    analyze_kill_map, parse_kill_map, render_csv, render_text, CsvOptions, DominarResult,
    DominatorOracle,
};

const KILL_MAP: &str = "\
TestNo,MutantNo,[FAIL | TIME | EXC]
1,1,FAIL
2,1,FAIL
2,2,FAIL
3,2,EXC
1,3,FAIL
2,3,FAIL
3,3,FAIL
4,4,TIME
";

fn main() -> DominarResult<()> {
    println!("=== Dominar Completeness Demo ===\n");

    let kills = parse_kill_map(KILL_MAP, &CsvOptions::default())?;
    let oracle = DominatorOracle::from_kill_map(&kills);
    let summary = oracle.summary();

    println!("Kill map: {} mutants, {} tests", summary.total_mutants, summary.distinct_tests);
    for group in oracle.groups() {
        println!(
            "  dominator {} killed by {} tests",
            group.representative, group.test_count
        );
    }
    println!();

    let analysis = analyze_kill_map(&kills)?;
    println!("{}", render_text(&analysis.curve)?);
    println!("{}", render_csv(&analysis.curve)?);

    if let Some(work) = analysis.curve.work_for_coverage(analysis.curve.final_coverage()) {
        println!("Full completeness after {} of {} dominators", work, analysis.curve.work());
    }

    Ok(())
}
