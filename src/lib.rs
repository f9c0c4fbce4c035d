//! Parameter descriptions and plot checks for rankratioviz.
//!
//! rankratioviz draws two Vega-Lite plots from omics data: a bar chart of
//! feature ranks, and a scatter plot of per-sample log ratios of feature
//! abundances. This crate holds the help text for the tool's parameters
//! ([`params`]) and checks that generated plot JSON is consistent with the
//! data it was drawn from ([`plots`]).
//!
//! ```no_run
//! use rankratioviz::prelude::*;
//!
//! // Ranks are in the second column of ranks.csv.
//! validate_rank_plot("ranks.csv", "rank_plot.json", 1)?;
//! # Ok::<(), RankRatiovizError>(())
//! ```

pub mod commands;
pub mod error;
pub mod io;
pub mod params;
pub mod plots;
pub mod reporting;
pub mod test_utilities;
pub mod tolerance;

pub use error::RankRatiovizError;

pub mod prelude {
    pub use crate::error::{ErrorKind, RankRatiovizError};
    pub use crate::io::{read_ranks, RankedFeatures};
    pub use crate::plots::{
        check_rank_records, validate_basic_schema, validate_rank_plot, validate_rank_plot_with,
        validate_sample_plot, PlotSpec, RankRecord,
    };
    pub use crate::tolerance::Tolerance;
}
