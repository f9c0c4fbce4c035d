//! Rank plot validation.
//!
//! A rank plot is a bar chart with one bar per feature, sorted by rank. The
//! chart embeds its data as records of `index` (feature identifier), `coefs`
//! (rank value) and `x` (bar position). [`validate_rank_plot()`] checks that
//! data against the ranks file the plot was built from:
//!
//!  1. every record's `coefs` matches the rank in the ranks file,
//!  2. records are sorted by non-decreasing `coefs`,
//!  3. `x` runs 0, 1, 2, … in record order,
//!
//! and that there is exactly one record per ranked feature.

use indexmap::IndexMap;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

use super::schema::validate_basic_schema;
use super::spec::PlotSpec;
use crate::error::RankRatiovizError;
use crate::io::{read_ranks, RankedFeatures};
use crate::tolerance::Tolerance;

pub const RANK_PLOT_MARK: &str = "bar";
pub const RANK_PLOT_TITLE: &str = "Ranks";

/// One bar of a rank plot. Any other fields in the record are ignored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RankRecord {
    pub index: String,
    pub coefs: f64,
    pub x: i64,
}

impl RankRecord {
    pub fn new(index: impl Into<String>, coefs: f64, x: i64) -> Self {
        Self {
            index: index.into(),
            coefs,
            x,
        }
    }

    /// Deserialize the record at `position` of a plot dataset.
    pub fn from_value(position: usize, value: &Value) -> Result<Self, RankRatiovizError> {
        RankRecord::deserialize(value).map_err(|e| RankRatiovizError::MalformedRecord {
            position,
            message: e.to_string(),
        })
    }
}

/// The state carried while walking rank plot records in order.
#[derive(Debug)]
pub struct RankWalk<'a> {
    ranks: &'a IndexMap<String, f64>,
    tolerance: Tolerance,
    prev_coefs: f64,
    prev_x: i64,
    position: usize,
}

impl<'a> RankWalk<'a> {
    pub fn new(ranks: &'a IndexMap<String, f64>, tolerance: Tolerance) -> Self {
        Self {
            ranks,
            tolerance,
            prev_coefs: f64::NEG_INFINITY,
            prev_x: -1,
            position: 0,
        }
    }

    /// Check the next record against the ranks and the previous record.
    pub fn step(&mut self, record: &RankRecord) -> Result<(), RankRatiovizError> {
        let position = self.position;
        let expected = *self
            .ranks
            .get(&record.index)
            .ok_or_else(|| RankRatiovizError::UnknownFeature {
                position,
                feature: record.index.clone(),
            })?;
        // the tolerance is relative to the plotted value
        if !self.tolerance.approx_eq(expected, record.coefs) {
            return Err(RankRatiovizError::CoefsMismatch {
                position,
                feature: record.index.clone(),
                expected,
                found: record.coefs,
            });
        }

        // Ties are not compared, so float noise between equal ranks in
        // either direction is allowed.
        let tied = self.tolerance.approx_eq(record.coefs, self.prev_coefs);
        if !tied && !(record.coefs >= self.prev_coefs) {
            return Err(RankRatiovizError::OutOfOrder {
                position,
                feature: record.index.clone(),
                previous: self.prev_coefs,
                found: record.coefs,
            });
        }

        if record.x != self.prev_x + 1 {
            return Err(RankRatiovizError::NonContiguousX {
                position,
                expected: self.prev_x + 1,
                found: record.x,
            });
        }

        self.prev_coefs = record.coefs;
        self.prev_x = record.x;
        self.position += 1;
        Ok(())
    }
}

/// Check in-memory rank plot records against `ranks`.
pub fn check_rank_records(
    ranks: &IndexMap<String, f64>,
    records: &[RankRecord],
    tolerance: &Tolerance,
) -> Result<(), RankRatiovizError> {
    if records.len() != ranks.len() {
        return Err(RankRatiovizError::RecordCountMismatch {
            expected: ranks.len(),
            found: records.len(),
        });
    }
    let mut walk = RankWalk::new(ranks, *tolerance);
    for record in records {
        walk.step(record)?;
    }
    Ok(())
}

/// Validate the rank plot JSON at `rank_plot_json` against the ranks file at
/// `input_ranks`, reading ranks from column `rank_column` and using the
/// default [`Tolerance`].
pub fn validate_rank_plot(
    input_ranks: impl AsRef<Path>,
    rank_plot_json: impl AsRef<Path>,
    rank_column: usize,
) -> Result<(), RankRatiovizError> {
    validate_rank_plot_with(input_ranks, rank_plot_json, rank_column, &Tolerance::default())
}

/// Like [`validate_rank_plot()`], with an explicit [`Tolerance`].
pub fn validate_rank_plot_with(
    input_ranks: impl AsRef<Path>,
    rank_plot_json: impl AsRef<Path>,
    rank_column: usize,
    tolerance: &Tolerance,
) -> Result<(), RankRatiovizError> {
    let input_ranks = input_ranks.as_ref();
    let ranked = read_ranks(input_ranks, rank_column)?;
    debug!(
        "read {} features from column {} of {}",
        ranked.len(),
        rank_column,
        input_ranks.display()
    );
    validate_rank_plot_against(&ranked, rank_plot_json, tolerance)
}

/// Validate the rank plot JSON at `rank_plot_json` against ranks that have
/// already been read.
pub fn validate_rank_plot_against(
    ranked: &RankedFeatures,
    rank_plot_json: impl AsRef<Path>,
    tolerance: &Tolerance,
) -> Result<(), RankRatiovizError> {
    let rank_plot_json = rank_plot_json.as_ref();
    let plot = PlotSpec::from_path(rank_plot_json)?;
    plot.expect_mark(RANK_PLOT_MARK)?;
    plot.expect_title(RANK_PLOT_TITLE)?;
    validate_basic_schema(plot.as_value())?;

    let dataset = plot.dataset()?;
    if dataset.len() != ranked.len() {
        return Err(RankRatiovizError::RecordCountMismatch {
            expected: ranked.len(),
            found: dataset.len(),
        });
    }

    let mut walk = RankWalk::new(&ranked.ranks, *tolerance);
    for (position, value) in dataset.iter().enumerate() {
        let record = RankRecord::from_value(position, value)?;
        walk.step(&record)?;
    }

    info!(
        "rank plot {} matches {} ranked features",
        rank_plot_json.display(),
        dataset.len()
    );
    Ok(())
}
