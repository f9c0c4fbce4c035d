//! Checks for the Vega-Lite plots rankratioviz generates.
//!
//! Each check loads a plot JSON file, verifies the chart type and title, runs
//! the shared [`validate_basic_schema()`] gate, and then checks whatever the
//! plot's embedded data can be checked against. All checks stop at the first
//! failure and return it as a [`RankRatiovizError`].
//!
//! [`RankRatiovizError`]: crate::error::RankRatiovizError

pub mod rank;
pub mod sample;
pub mod schema;
pub mod spec;

pub use rank::{
    check_rank_records, validate_rank_plot, validate_rank_plot_against, validate_rank_plot_with,
    RankRecord,
};
pub use sample::validate_sample_plot;
pub use schema::validate_basic_schema;
pub use spec::PlotSpec;
