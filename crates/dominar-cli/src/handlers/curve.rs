//! Curve command handler

use super::{reporter, resolve_csv_options};
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::CurveArgs;
use dominar::{analyze_csv, ChartConfig, CompletenessAnalysis, CurveFormat, SvgChart};

/// Execute the curve command
pub fn execute_curve(config: &CliConfig, args: &CurveArgs) -> CliResult<()> {
    let reporter = reporter(config);
    check_output_paths(args)?;
    let options = resolve_csv_options(&config.settings.csv, &args.input)?;
    let analysis = analyze_csv(&args.input.input, &options)?;

    if analysis.dominators.is_empty() {
        reporter.warning("no killed mutants in the kill map; the curve is the seed point only");
    }

    let format = args
        .format
        .map_or(config.settings.format, CurveFormat::from);
    let rendered = format.render(&analysis.curve)?;

    if let Some(ref path) = args.output {
        std::fs::write(path, &rendered)?;
        reporter.success(&format!("Curve written to {}", path.display()));
    } else {
        reporter.result(&rendered)?;
    }

    if let Some(ref svg_path) = args.svg {
        SvgChart::with_config(chart_config(config, args)).write_svg(&analysis.curve, svg_path)?;
        reporter.success(&format!("Chart written to {}", svg_path.display()));
    }

    if config.verbosity.is_verbose() {
        reporter.success(&summary_line(&analysis));
    }

    Ok(())
}

/// Reject `--output` and `--svg` naming the same file
pub fn check_output_paths(args: &CurveArgs) -> CliResult<()> {
    match (&args.output, &args.svg) {
        (Some(output), Some(svg)) if output == svg => Err(CliError::invalid_argument(format!(
            "--output and --svg both point to {}",
            output.display()
        ))),
        _ => Ok(()),
    }
}

/// Chart settings from config, with the `--title` flag taking precedence
#[must_use]
pub fn chart_config(config: &CliConfig, args: &CurveArgs) -> ChartConfig {
    let mut chart = config.settings.chart.clone();
    if let Some(ref title) = args.title {
        chart.title = Some(title.clone());
    }
    chart
}

/// One-line description of an analysis
#[must_use]
pub fn summary_line(analysis: &CompletenessAnalysis) -> String {
    let curve = &analysis.curve;
    format!(
        "{} dominator mutants of {} killed account for {} distinct tests ({} flat steps)",
        curve.work(),
        analysis.summary.killed_mutants,
        curve.final_coverage(),
        curve.flat_steps()
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::commands::InputArgs;
    use crate::config::ColorChoice;
    use dominar::{analyze_kill_map, DominarConfig, KillMap};
    use std::path::PathBuf;

    fn args(title: Option<&str>) -> CurveArgs {
        CurveArgs {
            input: InputArgs {
                input: PathBuf::from("unused.csv"),
                ..InputArgs::default()
            },
            format: None,
            output: None,
            svg: None,
            title: title.map(str::to_string),
        }
    }

    #[test]
    fn test_chart_config_title_override() {
        let mut settings = DominarConfig::default();
        settings.chart.title = Some("From file".to_string());
        let config = CliConfig::new().with_settings(settings);

        assert_eq!(
            chart_config(&config, &args(None)).title.as_deref(),
            Some("From file")
        );
        assert_eq!(
            chart_config(&config, &args(Some("Flag"))).title.as_deref(),
            Some("Flag")
        );
    }

    #[test]
    fn test_summary_line() {
        let kills: KillMap = [("m1", "t1"), ("m1", "t2"), ("m2", "t3")].into_iter().collect();
        let analysis = analyze_kill_map(&kills).unwrap();
        assert_eq!(
            summary_line(&analysis),
            "2 dominator mutants of 2 killed account for 3 distinct tests (0 flat steps)"
        );
    }

    #[test]
    fn test_execute_writes_output_and_svg() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("killMap.csv");
        std::fs::write(&input, "TestNo,MutantNo\n1,1\n2,1\n3,2\n").unwrap();
        let output = dir.path().join("curve.csv");
        let svg = dir.path().join("curve.svg");

        let mut curve_args = args(Some("Run"));
        curve_args.input.input = input;
        curve_args.format = Some(crate::CurveFormatArg::Csv);
        curve_args.output = Some(output.clone());
        curve_args.svg = Some(svg.clone());

        let config = CliConfig::new().with_color(ColorChoice::Never);
        execute_curve(&config, &curve_args).unwrap();

        assert_eq!(
            std::fs::read_to_string(output).unwrap(),
            "work,test_completeness\n0,0\n1,2\n2,3\n"
        );
        assert!(std::fs::read_to_string(svg).unwrap().contains("<title>Run</title>"));
    }

    #[test]
    fn test_same_output_and_svg_path_rejected() {
        let mut curve_args = args(None);
        curve_args.output = Some(PathBuf::from("curve.out"));
        curve_args.svg = Some(PathBuf::from("curve.out"));
        let err = execute_curve(&CliConfig::new(), &curve_args).unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument { .. }));

        curve_args.svg = Some(PathBuf::from("curve.svg"));
        assert!(check_output_paths(&curve_args).is_ok());
    }

    #[test]
    fn test_execute_missing_input_fails() {
        let config = CliConfig::new();
        let err = execute_curve(&config, &args(None)).unwrap_err();
        assert!(err.to_string().contains("I/O"));
    }
}
