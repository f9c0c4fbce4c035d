//! Validation of the `rankratioviz` command line tool against fixture plots.

use rankratioviz::{params, test_utilities::rankratioviz_binary_path};
use std::process::Command;

#[test]
fn test_validate_rank_fixture() {
    let output = Command::new(rankratioviz_binary_path())
        .arg("validate-rank")
        .arg("--ranks")
        .arg("tests_data/ranks.csv")
        .arg("--plot")
        .arg("tests_data/rank_plot.json")
        .arg("--rank-column")
        .arg("1")
        .output()
        .expect("rankratioviz validate-rank failed");

    assert!(output.status.success(), "{:?}", output);
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "rank plot OK (4 features)\n"
    );
}

#[test]
fn test_validate_rank_fixture_wrong_column() {
    let output = Command::new(rankratioviz_binary_path())
        .arg("validate-rank")
        .arg("--ranks")
        .arg("tests_data/ranks.csv")
        .arg("--plot")
        .arg("tests_data/rank_plot.json")
        .arg("--rank-column")
        .arg("2")
        .output()
        .expect("rankratioviz validate-rank failed");

    assert_eq!(output.status.code(), Some(1), "{:?}", output);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("Error: "), "{}", stderr);
    assert!(stderr.contains("taxonZ"), "{}", stderr);
}

#[test]
fn test_validate_rank_fixture_strict_tolerance() {
    // taxonW is drawn at 2.0000000001 but ranked at 2.0
    let output = Command::new(rankratioviz_binary_path())
        .arg("validate-rank")
        .arg("--ranks")
        .arg("tests_data/ranks.csv")
        .arg("--plot")
        .arg("tests_data/rank_plot.json")
        .arg("--rank-column")
        .arg("1")
        .arg("--rel-tol")
        .arg("0")
        .arg("--abs-tol")
        .arg("0")
        .output()
        .expect("rankratioviz validate-rank failed");

    assert!(!output.status.success(), "{:?}", output);
    assert!(String::from_utf8_lossy(&output.stderr).contains("taxonW"));
}

#[test]
fn test_validate_sample_fixture() {
    let output = Command::new(rankratioviz_binary_path())
        .arg("validate-sample")
        .arg("--table")
        .arg("tests_data/table.biom")
        .arg("--metadata")
        .arg("tests_data/metadata.tsv")
        .arg("--plot")
        .arg("tests_data/sample_plot.json")
        .output()
        .expect("rankratioviz validate-sample failed");

    assert!(output.status.success(), "{:?}", output);
    assert_eq!(String::from_utf8_lossy(&output.stdout), "sample plot OK\n");
    assert!(String::from_utf8_lossy(&output.stderr).contains("not checked"));
}

#[test]
fn test_validate_sample_rejects_rank_plot() {
    let output = Command::new(rankratioviz_binary_path())
        .arg("validate-sample")
        .arg("--table")
        .arg("tests_data/table.biom")
        .arg("--metadata")
        .arg("tests_data/metadata.tsv")
        .arg("--plot")
        .arg("tests_data/rank_plot.json")
        .output()
        .expect("rankratioviz validate-sample failed");

    assert_eq!(output.status.code(), Some(1), "{:?}", output);
}

#[test]
fn test_validate_schema_fixtures() {
    for plot in ["tests_data/rank_plot.json", "tests_data/sample_plot.json"] {
        let output = Command::new(rankratioviz_binary_path())
            .arg("validate-schema")
            .arg(plot)
            .output()
            .expect("rankratioviz validate-schema failed");
        assert!(output.status.success(), "{:?}", output);
    }

    let output = Command::new(rankratioviz_binary_path())
        .arg("validate-schema")
        .arg("tests_data/ranks.csv")
        .output()
        .expect("rankratioviz validate-schema failed");
    assert_eq!(output.status.code(), Some(1), "{:?}", output);
}

#[test]
fn test_params() {
    let output = Command::new(rankratioviz_binary_path())
        .arg("params")
        .arg("--")
        .arg("--extreme-feature-count")
        .output()
        .expect("rankratioviz params failed");

    assert!(output.status.success(), "{:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(params::EXTREME_FEATURE_COUNT));

    let output = Command::new(rankratioviz_binary_path())
        .arg("validate-sample")
        .arg("--help")
        .output()
        .expect("rankratioviz validate-sample --help failed");
    assert!(output.status.success(), "{:?}", output);
    assert!(String::from_utf8_lossy(&output.stdout).contains("A BIOM table describing"));
}
