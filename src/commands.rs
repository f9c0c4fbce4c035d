//! The functions behind the `rankratioviz` subcommands.
//!
//! Each runs one check and returns a [`CommandOutput`] carrying its
//! [`Report`], so the command line tool (or any other caller) can show the
//! caveats of a passing check.

use log::{info, warn};
use std::path::Path;

use crate::{
    error::RankRatiovizError,
    io::read_ranks,
    params::{describe, PARAMETER_DESCRIPTIONS},
    plots::{
        rank::validate_rank_plot_against, sample::UNCHECKED_SAMPLE_PLOT_PROPERTIES,
        validate_basic_schema, validate_sample_plot, PlotSpec,
    },
    reporting::{CommandOutput, Report},
    tolerance::Tolerance,
};

/// Validate a rank plot against its ranks file. The output value is the
/// number of features checked.
pub fn rrv_validate_rank(
    ranks: &Path,
    plot: &Path,
    rank_column: usize,
    tolerance: &Tolerance,
) -> Result<CommandOutput<usize>, RankRatiovizError> {
    let mut report = Report::new();

    let ranked = read_ranks(ranks, rank_column)?;
    if ranked.is_empty() {
        warn!("ranks file {} has no features", ranks.display());
    }
    if !ranked.duplicates.is_empty() {
        report.add_issue(format!(
            "{} feature(s) repeated in the ranks file; the last value of each was used: {}",
            ranked.duplicates.len(),
            ranked.duplicates.join(", ")
        ));
    }

    validate_rank_plot_against(&ranked, plot, tolerance)?;
    Ok(CommandOutput::new(ranked.len(), report))
}

/// Validate the chart-level properties of a sample plot.
pub fn rrv_validate_sample(
    table: &Path,
    metadata: &Path,
    plot: &Path,
) -> Result<CommandOutput<()>, RankRatiovizError> {
    let mut report = Report::new();
    validate_sample_plot(table, metadata, plot)?;
    for property in UNCHECKED_SAMPLE_PLOT_PROPERTIES {
        report.add_issue(format!("not checked: {}", property));
    }
    info!("sample plot {} passed", plot.display());
    Ok(CommandOutput::new((), report))
}

/// Run only the basic Vega-Lite `$schema` check on a plot.
pub fn rrv_validate_schema(plot: &Path) -> Result<CommandOutput<()>, RankRatiovizError> {
    let spec = PlotSpec::from_path(plot)?;
    validate_basic_schema(spec.as_value())?;
    info!("plot {} has a Vega-Lite $schema", plot.display());
    Ok(CommandOutput::new((), Report::new()))
}

/// Collect parameter descriptions, either all of them or the one named.
pub fn rrv_params(
    name: Option<&str>,
) -> Result<CommandOutput<Vec<(String, &'static str)>>, RankRatiovizError> {
    let descriptions = match name {
        Some(name) => {
            let description = describe(name)
                .ok_or_else(|| RankRatiovizError::UnknownParameter(name.to_string()))?;
            vec![(name.to_string(), description)]
        }
        None => PARAMETER_DESCRIPTIONS
            .iter()
            .map(|(name, description)| (name.to_string(), *description))
            .collect(),
    };
    Ok(CommandOutput::new(descriptions, Report::new()))
}
