//! The [`PlotSpec`] type, a Vega-Lite chart specification loaded from JSON.
//!
//! Plot JSON is produced by a plotting library, so only the handful of keys
//! the checks rely on are given typed accessors here. Everything else in the
//! document is left alone.

use serde_json::Value;
use std::path::PathBuf;

use crate::error::RankRatiovizError;
use crate::io::read_json;

/// Look up `key` in a JSON object. `path` is the dotted location of the key,
/// used in error messages.
pub fn get_key<'a>(
    value: &'a Value,
    key: &str,
    path: &str,
) -> Result<&'a Value, RankRatiovizError> {
    let object = value.as_object().ok_or_else(|| RankRatiovizError::WrongType {
        key: parent_path(path).to_string(),
        expected: "an object",
    })?;
    object
        .get(key)
        .ok_or_else(|| RankRatiovizError::MissingKey(path.to_string()))
}

/// Look up `key` in a JSON object and require that it is a string.
pub fn get_str<'a>(value: &'a Value, key: &str, path: &str) -> Result<&'a str, RankRatiovizError> {
    get_key(value, key, path)?
        .as_str()
        .ok_or_else(|| RankRatiovizError::WrongType {
            key: path.to_string(),
            expected: "a string",
        })
}

fn parent_path(path: &str) -> &str {
    path.rsplit_once('.').map_or("<root>", |(parent, _)| parent)
}

/// A parsed Vega-Lite chart specification.
#[derive(Clone, Debug)]
pub struct PlotSpec {
    value: Value,
}

impl PlotSpec {
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    /// Load a plot specification from a (possibly gzip-compressed) JSON file.
    pub fn from_path(filepath: impl Into<PathBuf>) -> Result<Self, RankRatiovizError> {
        Ok(Self::new(read_json(filepath)?))
    }

    pub fn as_value(&self) -> &Value {
        &self.value
    }

    /// Require the top-level `key` to be exactly the string `expected`.
    ///
    /// A missing key is a schema error; any other value (including a
    /// non-string one) is reported as an unexpected value.
    pub fn expect_top_level(
        &self,
        key: &'static str,
        expected: &'static str,
    ) -> Result<(), RankRatiovizError> {
        let found = get_key(&self.value, key, key)?;
        if found.as_str() == Some(expected) {
            Ok(())
        } else {
            Err(RankRatiovizError::UnexpectedValue {
                key,
                expected,
                found: found.to_string(),
            })
        }
    }

    pub fn expect_mark(&self, expected: &'static str) -> Result<(), RankRatiovizError> {
        self.expect_top_level("mark", expected)
    }

    pub fn expect_title(&self, expected: &'static str) -> Result<(), RankRatiovizError> {
        self.expect_top_level("title", expected)
    }

    /// The name of the dataset the chart draws from (`data.name`).
    pub fn dataset_name(&self) -> Result<&str, RankRatiovizError> {
        let data = get_key(&self.value, "data", "data")?;
        get_str(data, "name", "data.name")
    }

    /// The records of the chart's named dataset (`datasets[data.name]`).
    pub fn dataset(&self) -> Result<&[Value], RankRatiovizError> {
        let name = self.dataset_name()?;
        let datasets = get_key(&self.value, "datasets", "datasets")?;
        let path = format!("datasets.{}", name);
        get_key(datasets, name, &path)?
            .as_array()
            .map(|records| records.as_slice())
            .ok_or(RankRatiovizError::WrongType {
                key: path,
                expected: "an array",
            })
    }
}
