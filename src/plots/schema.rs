//! Basic Vega-Lite checks shared by every plot.
//!
//! This is a sanity gate, not a Vega-Lite schema validator: it only looks at
//! the `$schema` URL.

use serde_json::Value;

use super::spec::get_str;
use crate::error::RankRatiovizError;

pub const VEGA_SCHEMA_PREFIX: &str = "https://vega.github.io/schema";
pub const VEGA_SCHEMA_SUFFIX: &str = ".json";

/// Check that `json` has a `$schema` string that looks like a Vega schema URL.
pub fn validate_basic_schema(json: &Value) -> Result<(), RankRatiovizError> {
    let schema = get_str(json, "$schema", "$schema")?;
    if schema.starts_with(VEGA_SCHEMA_PREFIX) && schema.ends_with(VEGA_SCHEMA_SUFFIX) {
        Ok(())
    } else {
        Err(RankRatiovizError::InvalidSchemaUrl(schema.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_valid_schema() {
        let plot = json!({"$schema": "https://vega.github.io/schema/vega-lite/v2.6.0.json"});
        validate_basic_schema(&plot).unwrap();
    }

    #[test]
    fn test_bad_prefix_or_suffix() {
        for url in [
            "http://vega.github.io/schema/vega-lite/v2.json",
            "https://example.com/schema/vega-lite/v2.json",
            "https://vega.github.io/schema/vega-lite/v2",
            "https://vega.github.io/schema/vega-lite/v2.json5",
            "",
        ] {
            let err = validate_basic_schema(&json!({ "$schema": url })).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Invariant, "{}", url);
        }
    }

    #[test]
    fn test_missing_or_wrong_type() {
        let err = validate_basic_schema(&json!({"mark": "bar"})).unwrap_err();
        assert!(matches!(err, RankRatiovizError::MissingKey(ref key) if key == "$schema"));

        let err = validate_basic_schema(&json!({"$schema": 2})).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Schema);

        let err = validate_basic_schema(&json!([1, 2])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Schema);
    }
}
