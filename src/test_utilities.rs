//! Test cases and test utility functions.
//!

use indexmap::IndexMap;
use rand::{thread_rng, Rng};
use serde_json::{json, Value};
use std::io::Write;
use std::path::PathBuf;
use tempfile::{Builder, NamedTempFile};

use crate::plots::{
    rank::{RANK_PLOT_MARK, RANK_PLOT_TITLE},
    sample::{SAMPLE_PLOT_MARK, SAMPLE_PLOT_TITLE},
    RankRecord,
};

// Stochastic test ranks defaults
//
// This is the number of random features to use in tests.
// The tradeoff is catching stochastic errors vs test time.
pub const NRANDOM_FEATURES: usize = 1000;

// rank value range
pub const MIN_RANK: f64 = -10.0;
pub const MAX_RANK: f64 = 10.0;

pub const VEGA_LITE_SCHEMA: &str = "https://vega.github.io/schema/vega-lite/v2.6.0.json";

/// A small ranks file with two rank columns.
pub const EXAMPLE_RANKS: &str = "feature,rankA,rankB\ntaxonX,1.0,5.0\ntaxonY,2.0,3.0\n";

/// Get the path to the `rankratioviz` command line tool built next to the
/// running test binary.
pub fn rankratioviz_binary_path() -> PathBuf {
    let mut path = std::env::current_exe().expect("could not locate test executable");
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.join(format!("rankratioviz{}", std::env::consts::EXE_SUFFIX))
}

/// Write `contents` to a new temporary file ending in `suffix`.
pub fn temp_file_with(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("could not create temporary file");
    file.write_all(contents.as_bytes())
        .expect("could not write temporary file");
    file.flush().expect("could not flush temporary file");
    file
}

/// Write a JSON document to a new temporary `.json` file.
pub fn temp_json_file(value: &Value) -> NamedTempFile {
    temp_file_with(".json", &value.to_string())
}

/// Build random ranks for `n` features named `F0`, `F1`, ….
pub fn random_ranks(n: usize) -> IndexMap<String, f64> {
    let mut rng = thread_rng();
    (0..n)
        .map(|i| (format!("F{}", i), rng.gen_range(MIN_RANK..MAX_RANK)))
        .collect()
}

/// Write ranks as a ranks file with a single rank column (column 1).
pub fn ranks_file(ranks: &IndexMap<String, f64>) -> NamedTempFile {
    let mut contents = String::from("feature,rank\n");
    for (feature, value) in ranks {
        contents.push_str(&format!("{},{}\n", feature, value));
    }
    temp_file_with(".csv", &contents)
}

/// Build the records of a correct rank plot for `ranks`: sorted by rank
/// (ties keep their ranks file order), with `x` numbered from zero.
pub fn sorted_rank_records(ranks: &IndexMap<String, f64>) -> Vec<RankRecord> {
    let mut features: Vec<(&String, f64)> = ranks.iter().map(|(k, v)| (k, *v)).collect();
    features.sort_by(|a, b| a.1.total_cmp(&b.1));
    features
        .into_iter()
        .enumerate()
        .map(|(x, (feature, coefs))| RankRecord::new(feature.clone(), coefs, x as i64))
        .collect()
}

/// Build a Vega-Lite rank plot document embedding `records`, shaped like the
/// bar charts rankratioviz generates.
pub fn rank_plot_json(records: &[RankRecord]) -> Value {
    json!({
        "$schema": VEGA_LITE_SCHEMA,
        "config": {"view": {"width": 400, "height": 300}},
        "data": {"name": "data-ranks"},
        "mark": RANK_PLOT_MARK,
        "title": RANK_PLOT_TITLE,
        "encoding": {
            "x": {"type": "ordinal", "field": "x", "axis": {"labels": false}},
            "y": {"type": "quantitative", "field": "coefs"},
            "tooltip": [
                {"type": "quantitative", "field": "x"},
                {"type": "quantitative", "field": "coefs"},
                {"type": "nominal", "field": "index"}
            ]
        },
        "datasets": {"data-ranks": records}
    })
}

/// Build a Vega-Lite sample plot document shaped like the scatter plots
/// rankratioviz generates.
pub fn sample_plot_json() -> Value {
    json!({
        "$schema": VEGA_LITE_SCHEMA,
        "config": {"view": {"width": 400, "height": 300}},
        "data": {"name": "data-samples"},
        "mark": SAMPLE_PLOT_MARK,
        "title": SAMPLE_PLOT_TITLE,
        "encoding": {
            "x": {"type": "quantitative", "field": "Sample ID"},
            "y": {"type": "quantitative", "field": "rankratioviz_balance"}
        },
        "datasets": {"data-samples": [
            {"Sample ID": "S1", "rankratioviz_balance": 0.25},
            {"Sample ID": "S2", "rankratioviz_balance": -1.5}
        ]}
    })
}
