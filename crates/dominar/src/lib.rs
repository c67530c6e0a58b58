//! Dominar: Test Completeness Curves from Dominator Mutants
//!
//! Dominar (Spanish: "to dominate") measures how much of a test suite's killing
//! power a minimal, non-redundant set of mutants captures. Given which tests
//! kill which mutants, it finds the dominator mutants and orders them greedily
//! by the number of tests each one newly accounts for. The cumulative count of
//! distinct tests against the number of mutants examined is the test
//! completeness curve.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │ Kill map CSV │    │ Dominator    │    │ Greedy curve │    │ Renderers    │
//! │ (killmap)    │───►│ oracle       │───►│ builder      │───►│ text/csv/    │
//! │              │    │ (oracle)     │    │ (curve)      │    │ json/svg     │
//! └──────────────┘    └──────────────┘    └──────────────┘    └──────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use dominar::{analyze_kill_map, KillMap};
//!
//! let kills: KillMap = [
//!     ("m1", "t1"), ("m1", "t2"),
//!     ("m2", "t2"), ("m2", "t3"),
//!     ("m3", "t4"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let analysis = analyze_kill_map(&kills).unwrap();
//! assert_eq!(analysis.curve.to_pairs(), vec![(0, 0), (1, 2), (2, 3), (3, 4)]);
//! ```

#![warn(missing_docs)]
// Lints are configured in workspace Cargo.toml [workspace.lints.clippy]

/// File-based configuration
pub mod config;

/// Greedy completeness curve (the core algorithm)
pub mod curve;

/// Kill maps and the kill-map CSV reader
pub mod killmap;

/// Mutant and test identifiers
pub mod mutant;

/// Coverage oracles and dominator analysis
pub mod oracle;

/// Kill map to curve in one call
pub mod pipeline;

/// Text, CSV, JSON and SVG rendering of curves
pub mod render;

mod result;

pub use config::DominarConfig;
pub use curve::{build_completeness_curve, CompletenessCurve, CurvePoint, Selection};
pub use killmap::{parse_kill_map, read_kill_map, ColumnRef, CsvOptions, KillMap};
pub use mutant::{MutantId, TestId};
pub use oracle::{CoverageOracle, DominatorGroup, DominatorOracle, DominatorSummary};
pub use pipeline::{analyze_csv, analyze_kill_map, CompletenessAnalysis};
pub use render::{render_csv, render_json, render_text, ChartConfig, CurveFormat, SvgChart};
pub use result::{DominarError, DominarResult};

/// Prelude for convenient imports
pub mod prelude {
    pub use super::{
        analyze_csv, analyze_kill_map, build_completeness_curve, ChartConfig,
        CompletenessAnalysis, CompletenessCurve, CoverageOracle, CsvOptions, CurveFormat,
        CurvePoint, DominarConfig, DominarError, DominarResult, DominatorOracle, KillMap,
        MutantId, Selection, SvgChart, TestId,
    };
}
