//! SVG line chart of a completeness curve.

use super::{fmt_error, COVERAGE_LABEL, WORK_LABEL};
use crate::curve::CompletenessCurve;
use crate::result::{DominarError, DominarResult};
use serde::{Deserialize, Serialize};
use std::fmt::Write as FmtWrite;
use std::path::Path;

const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 60.0;

/// Upper bound on tick labels per axis; larger ranges widen the step
const MAX_TICKS: usize = 20;

/// Configuration for the curve chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Chart title
    pub title: Option<String>,
    /// Distance between work-axis ticks
    pub x_tick_step: usize,
    /// Distance between coverage-axis ticks
    pub y_tick_step: usize,
    /// Stroke color of the curve
    pub line_color: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: None,
            x_tick_step: 5,
            y_tick_step: 25,
            line_color: "#1f77b4".to_string(),
        }
    }
}

impl ChartConfig {
    /// Create a config with the given dimensions
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Set the title
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set tick spacing for both axes
    #[must_use]
    pub const fn with_tick_steps(mut self, x_step: usize, y_step: usize) -> Self {
        self.x_tick_step = x_step;
        self.y_tick_step = y_step;
        self
    }

    /// Set the curve stroke color
    #[must_use]
    pub fn with_line_color(mut self, color: impl Into<String>) -> Self {
        self.line_color = color.into();
        self
    }

    /// Check that the chart can be drawn
    pub fn validate(&self) -> DominarResult<()> {
        let min_width = (MARGIN_LEFT + MARGIN_RIGHT) as u32 + 1;
        let min_height = (MARGIN_TOP + MARGIN_BOTTOM) as u32 + 1;
        if self.width < min_width || self.height < min_height {
            return Err(DominarError::config(format!(
                "chart must be at least {min_width}x{min_height}, got {}x{}",
                self.width, self.height
            )));
        }
        if self.x_tick_step == 0 || self.y_tick_step == 0 {
            return Err(DominarError::config("tick steps must be positive"));
        }
        Ok(())
    }
}

/// Renders a [`CompletenessCurve`] as an SVG line chart
#[derive(Debug, Clone, Default)]
pub struct SvgChart {
    config: ChartConfig,
}

impl SvgChart {
    /// Create a chart renderer with default config
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a chart renderer with custom config
    #[must_use]
    pub const fn with_config(config: ChartConfig) -> Self {
        Self { config }
    }

    /// Get the current config
    #[must_use]
    pub const fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Render the chart to an SVG document
    pub fn render(&self, curve: &CompletenessCurve) -> DominarResult<String> {
        self.config.validate()?;

        let width = f64::from(self.config.width);
        let height = f64::from(self.config.height);
        let plot_w = width - MARGIN_LEFT - MARGIN_RIGHT;
        let plot_h = height - MARGIN_TOP - MARGIN_BOTTOM;
        let x_max = curve.work().max(1);
        let y_max = curve.final_coverage().max(1);
        let x_of = |work: usize| MARGIN_LEFT + plot_w * work as f64 / x_max as f64;
        let y_of = |coverage: usize| MARGIN_TOP + plot_h * (1.0 - coverage as f64 / y_max as f64);
        let x_axis_y = MARGIN_TOP + plot_h;

        let mut svg = String::with_capacity(4096);
        svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        writeln!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" \
             viewBox=\"0 0 {w} {h}\" font-family=\"sans-serif\" font-size=\"10\">",
            w = self.config.width,
            h = self.config.height
        )
        .map_err(fmt_error)?;

        if let Some(ref title) = self.config.title {
            let title = escape_xml(title);
            writeln!(svg, "  <title>{title}</title>").map_err(fmt_error)?;
            writeln!(
                svg,
                "  <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"14\">{title}</text>",
                width / 2.0,
                MARGIN_TOP / 2.0
            )
            .map_err(fmt_error)?;
        }

        // axes
        writeln!(
            svg,
            "  <g id=\"axes\" stroke=\"#333\" stroke-width=\"1\">\n    \
             <line x1=\"{l:.1}\" y1=\"{b:.1}\" x2=\"{r:.1}\" y2=\"{b:.1}\"/>\n    \
             <line x1=\"{l:.1}\" y1=\"{t:.1}\" x2=\"{l:.1}\" y2=\"{b:.1}\"/>\n  </g>",
            l = MARGIN_LEFT,
            r = MARGIN_LEFT + plot_w,
            t = MARGIN_TOP,
            b = x_axis_y
        )
        .map_err(fmt_error)?;

        svg.push_str("  <g id=\"x-ticks\" text-anchor=\"middle\">\n");
        for work in ticks(x_max, self.config.x_tick_step) {
            let x = x_of(work);
            writeln!(
                svg,
                "    <line x1=\"{x:.1}\" y1=\"{b:.1}\" x2=\"{x:.1}\" y2=\"{e:.1}\" stroke=\"#333\"/>\n    \
                 <text x=\"{x:.1}\" y=\"{ty:.1}\">{work}</text>",
                b = x_axis_y,
                e = x_axis_y + 5.0,
                ty = x_axis_y + 18.0
            )
            .map_err(fmt_error)?;
        }
        svg.push_str("  </g>\n");

        svg.push_str("  <g id=\"y-ticks\" text-anchor=\"end\">\n");
        for coverage in ticks(y_max, self.config.y_tick_step) {
            let y = y_of(coverage);
            writeln!(
                svg,
                "    <line x1=\"{s:.1}\" y1=\"{y:.1}\" x2=\"{l:.1}\" y2=\"{y:.1}\" stroke=\"#333\"/>\n    \
                 <text x=\"{tx:.1}\" y=\"{ty:.1}\">{coverage}</text>",
                s = MARGIN_LEFT - 5.0,
                l = MARGIN_LEFT,
                tx = MARGIN_LEFT - 8.0,
                ty = y + 3.0
            )
            .map_err(fmt_error)?;
        }
        svg.push_str("  </g>\n");

        writeln!(
            svg,
            "  <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"12\">{WORK_LABEL}</text>",
            MARGIN_LEFT + plot_w / 2.0,
            height - 15.0
        )
        .map_err(fmt_error)?;
        writeln!(
            svg,
            "  <text x=\"18\" y=\"{y:.1}\" text-anchor=\"middle\" font-size=\"12\" \
             transform=\"rotate(-90 18 {y:.1})\">{COVERAGE_LABEL}</text>",
            y = MARGIN_TOP + plot_h / 2.0
        )
        .map_err(fmt_error)?;

        let points: Vec<String> = curve
            .points()
            .iter()
            .map(|p| format!("{:.1},{:.1}", x_of(p.work), y_of(p.coverage)))
            .collect();
        writeln!(
            svg,
            "  <polyline id=\"curve\" fill=\"none\" stroke=\"{}\" stroke-width=\"2\" points=\"{}\"/>",
            escape_xml(&self.config.line_color),
            points.join(" ")
        )
        .map_err(fmt_error)?;

        svg.push_str("</svg>\n");
        Ok(svg)
    }

    /// Render the chart and write it to `path`
    pub fn write_svg(&self, curve: &CompletenessCurve, path: &Path) -> DominarResult<()> {
        let svg = self.render(curve)?;
        std::fs::write(path, svg)?;
        Ok(())
    }
}

/// Tick positions `0, step, 2*step, ..` up to `max`, widening `step` when too dense
fn ticks(max: usize, step: usize) -> Vec<usize> {
    let mut step = step.max(1);
    while max / step >= MAX_TICKS {
        step *= 2;
    }
    (0..=max).step_by(step).collect()
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
