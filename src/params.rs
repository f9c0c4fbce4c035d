//! Human-readable descriptions of the rankratioviz command line parameters.
//!
//! These are plain display strings for help output. [`PARAMETER_DESCRIPTIONS`]
//! maps each option name to its text, in the order the options are documented.

use indexmap::IndexMap;
use lazy_static::lazy_static;

pub const TABLE: &str = "A BIOM table describing the abundances of the ranked features in samples.";

pub const EXTREME_FEATURE_COUNT: &str = "If specified, rankratioviz will only use this many \
\"extreme\" features from either end of all of the rankings. This is useful when dealing \
with huge datasets (e.g. with BIOM tables exceeding 1 million entries), for which running \
rankratioviz normally might take a long amount of time or crash due to memory limits.";

lazy_static! {
    /// Option name to description.
    pub static ref PARAMETER_DESCRIPTIONS: IndexMap<&'static str, &'static str> = {
        let mut descriptions = IndexMap::new();
        descriptions.insert("TABLE", TABLE);
        descriptions.insert("EXTREME_FEATURE_COUNT", EXTREME_FEATURE_COUNT);
        descriptions
    };
}

/// Look up the description of an option.
///
/// Accepts both the constant-style name (`EXTREME_FEATURE_COUNT`) and the
/// command line flag spelling (`--extreme-feature-count`).
pub fn describe(name: &str) -> Option<&'static str> {
    let key = name.trim_start_matches('-').replace('-', "_").to_uppercase();
    PARAMETER_DESCRIPTIONS.get(key.as_str()).copied()
}
