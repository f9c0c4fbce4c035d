//! Sample plot validation.
//!
//! The sample plot is a scatter plot of per-sample log ratios. Only its
//! chart-level properties are checked: the records are not compared against
//! the BIOM table or the sample metadata.

use log::debug;
use std::path::Path;

use super::schema::validate_basic_schema;
use super::spec::PlotSpec;
use crate::error::RankRatiovizError;

pub const SAMPLE_PLOT_MARK: &str = "circle";
pub const SAMPLE_PLOT_TITLE: &str = "Log Ratio of Abundances in Samples";

/// Properties of a sample plot that [`validate_sample_plot()`] does not check.
pub const UNCHECKED_SAMPLE_PLOT_PROPERTIES: [&str; 2] = [
    "every metadata sample is present in the sample plot",
    "sample plot log ratios match the BIOM table abundances",
];

/// Validate the chart-level properties of the sample plot JSON at
/// `sample_plot_json`.
///
/// `biom_table` and `metadata` name the inputs the plot was built from; they
/// are not read (see [`UNCHECKED_SAMPLE_PLOT_PROPERTIES`]).
pub fn validate_sample_plot(
    biom_table: impl AsRef<Path>,
    metadata: impl AsRef<Path>,
    sample_plot_json: impl AsRef<Path>,
) -> Result<(), RankRatiovizError> {
    let plot = PlotSpec::from_path(sample_plot_json.as_ref())?;
    plot.expect_mark(SAMPLE_PLOT_MARK)?;
    plot.expect_title(SAMPLE_PLOT_TITLE)?;
    validate_basic_schema(plot.as_value())?;
    let dataset_name = plot.dataset_name()?;

    debug!(
        "sample plot dataset '{}' not compared against {} or {}",
        dataset_name,
        biom_table.as_ref().display(),
        metadata.as_ref().display()
    );
    Ok(())
}
