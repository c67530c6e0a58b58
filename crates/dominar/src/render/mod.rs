//! Curve rendering adapters.
//!
//! Nothing here feeds back into the curve builder. The builder guarantees a
//! dense `0..=N` work axis and a non-decreasing coverage axis, so every
//! renderer emits points as they are without resampling.

mod svg;

pub use svg::{ChartConfig, SvgChart};

use crate::curve::CompletenessCurve;
use crate::result::{DominarError, DominarResult};
use serde::{Deserialize, Serialize};
use std::fmt::Write as FmtWrite;

/// Column header for the work axis
pub const WORK_LABEL: &str = "Work";
/// Column header for the coverage axis
pub const COVERAGE_LABEL: &str = "Test Completeness";

/// Textual output formats for a curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveFormat {
    /// Aligned table for terminals
    #[default]
    Text,
    /// `work,test_completeness` rows
    Csv,
    /// Pretty-printed JSON of points and selections
    Json,
}

impl CurveFormat {
    /// Render `curve` in this format
    pub fn render(self, curve: &CompletenessCurve) -> DominarResult<String> {
        match self {
            Self::Text => render_text(curve),
            Self::Csv => render_csv(curve),
            Self::Json => render_json(curve),
        }
    }
}

pub(crate) fn fmt_error(e: std::fmt::Error) -> DominarError {
    DominarError::render(e.to_string())
}

/// Render the curve as an aligned table, one row per point
pub fn render_text(curve: &CompletenessCurve) -> DominarResult<String> {
    let mutant_width = curve
        .selections()
        .iter()
        .map(|s| s.mutant.as_str().chars().count())
        .max()
        .unwrap_or(0)
        .max("Mutant".len());

    let mut out = String::new();
    writeln!(
        out,
        "{WORK_LABEL:>6}  {COVERAGE_LABEL:>17}  {:<mutant_width$}  New Tests",
        "Mutant"
    )
    .map_err(fmt_error)?;
    writeln!(
        out,
        "{}  {}  {}  {}",
        "-".repeat(6),
        "-".repeat(17),
        "-".repeat(mutant_width),
        "-".repeat(9)
    )
    .map_err(fmt_error)?;

    for point in curve.points() {
        let (mutant, gained) = point
            .work
            .checked_sub(1)
            .and_then(|idx| curve.selections().get(idx))
            .map_or(("-", String::from("-")), |s| {
                (s.mutant.as_str(), s.new_tests.len().to_string())
            });
        writeln!(
            out,
            "{:>6}  {:>17}  {:<mutant_width$}  {:>9}",
            point.work, point.coverage, mutant, gained
        )
        .map_err(fmt_error)?;
    }

    Ok(out)
}

/// Render the curve as CSV with a `work,test_completeness` header
pub fn render_csv(curve: &CompletenessCurve) -> DominarResult<String> {
    let mut out = String::from("work,test_completeness\n");
    for point in curve.points() {
        writeln!(out, "{},{}", point.work, point.coverage).map_err(fmt_error)?;
    }
    Ok(out)
}

/// Render the curve (points and selections) as pretty JSON
pub fn render_json(curve: &CompletenessCurve) -> DominarResult<String> {
    Ok(serde_json::to_string_pretty(curve)?)
}
