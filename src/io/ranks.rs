//! Ranks file parsing.
//!
//! A ranks file is comma-separated text with a single header line, a feature
//! identifier in the first column, and one or more numeric rank columns. The
//! [`RanksIterator`] is a *parsing iterator*: each data line is yielded as a
//! `(feature, rank)` pair, with the rank taken from a caller-chosen column.
//! [`read_ranks()`] collects these into a [`RankedFeatures`] lookup.
//!
//! Lines are split on every comma, with no quoting, after trimming whitespace
//! from the ends of the line. Blank data lines are not skipped: they have a
//! single empty field, and so fail like any other short line.

use indexmap::IndexMap;
use log::warn;
use std::io::{BufRead, BufReader, Lines, Read};
use std::path::PathBuf;

use crate::error::RankRatiovizError;
use crate::io::file::InputFile;

/// A parsing iterator over the data lines of a ranks file, yielding each
/// feature identifier with the value of the rank column.
pub struct RanksIterator {
    lines: Lines<BufReader<Box<dyn Read>>>,
    line_number: u64,
    rank_column: usize,
}

impl std::fmt::Debug for RanksIterator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RanksIterator")
            .field("line_number", &self.line_number)
            .field("rank_column", &self.rank_column)
            .finish_non_exhaustive()
    }
}

impl RanksIterator {
    /// Create a new ranks parsing iterator over `filepath`, reading rank
    /// values from the zero-based column `rank_column`.
    pub fn new(
        filepath: impl Into<PathBuf>,
        rank_column: usize,
    ) -> Result<Self, RankRatiovizError> {
        let lines = InputFile::new(filepath).reader()?.lines();
        Ok(Self {
            lines,
            line_number: 0,
            rank_column,
        })
    }

    fn parse_line(&self, line: &str) -> Result<(String, f64), RankRatiovizError> {
        let fields: Vec<&str> = line.trim().split(',').collect();
        let field = fields
            .get(self.rank_column)
            .ok_or(RankRatiovizError::RanksTooFewColumns {
                line: self.line_number,
                found: fields.len(),
                column: self.rank_column,
            })?;
        let value = field
            .trim()
            .parse::<f64>()
            .map_err(|_| RankRatiovizError::InvalidRankValue {
                line: self.line_number,
                value: field.to_string(),
            })?;
        Ok((fields[0].to_string(), value))
    }
}

impl Iterator for RanksIterator {
    type Item = Result<(String, f64), RankRatiovizError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            self.line_number += 1;
            // header
            if self.line_number == 1 {
                continue;
            }
            return Some(self.parse_line(&line));
        }
    }
}

/// Ranks read from a ranks file: feature identifier to rank value, in the
/// order features first appear.
#[derive(Clone, Debug, Default)]
pub struct RankedFeatures {
    pub ranks: IndexMap<String, f64>,
    /// Identifiers that appeared more than once. Their value in `ranks` is
    /// the one from the last occurrence.
    pub duplicates: Vec<String>,
}

impl RankedFeatures {
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    pub fn get(&self, feature: &str) -> Option<f64> {
        self.ranks.get(feature).copied()
    }
}

impl FromIterator<(String, f64)> for RankedFeatures {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        let mut ranked = RankedFeatures::default();
        for (feature, value) in iter {
            if let Some(previous) = ranked.ranks.insert(feature.clone(), value) {
                warn!(
                    "feature '{}' is repeated in the ranks file; replacing {} with {}",
                    feature, previous, value
                );
                if !ranked.duplicates.contains(&feature) {
                    ranked.duplicates.push(feature);
                }
            }
        }
        ranked
    }
}

/// Read a ranks file into a [`RankedFeatures`] lookup, taking each feature's
/// rank from the zero-based column `rank_column`.
pub fn read_ranks(
    filepath: impl Into<PathBuf>,
    rank_column: usize,
) -> Result<RankedFeatures, RankRatiovizError> {
    RanksIterator::new(filepath, rank_column)?.collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::test_utilities::temp_file_with;

    #[test]
    fn test_read_ranks_column_selection() {
        let file = temp_file_with(
            ".csv",
            "feature,rankA,rankB\ntaxonX,1.0,5.0\ntaxonY,2.0,3.0\n",
        );

        let ranked = read_ranks(file.path(), 1).unwrap();
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked.get("taxonX"), Some(1.0));
        assert_eq!(ranked.get("taxonY"), Some(2.0));

        let ranked = read_ranks(file.path(), 2).unwrap();
        assert_eq!(ranked.get("taxonX"), Some(5.0));
        assert_eq!(ranked.get("taxonY"), Some(3.0));
        assert!(ranked.duplicates.is_empty());
    }

    #[test]
    fn test_header_only() {
        let file = temp_file_with(".csv", "feature,rank\n");
        let ranked = read_ranks(file.path(), 1).unwrap();
        assert!(ranked.is_empty());

        let file = temp_file_with(".csv", "");
        assert!(read_ranks(file.path(), 1).unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_feature_last_wins() {
        let file = temp_file_with(".csv", "feature,rank\nA,1.0\nB,2.0\nA,3.5\nA,4.0\n");
        let ranked = read_ranks(file.path(), 1).unwrap();
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked.get("A"), Some(4.0));
        assert_eq!(ranked.duplicates, vec!["A".to_string()]);
        // first-appearance order is kept
        let features: Vec<_> = ranked.ranks.keys().cloned().collect();
        assert_eq!(features, vec!["A", "B"]);
    }

    #[test]
    fn test_line_ends_trimmed_fields_kept() {
        let file = temp_file_with(
            ".csv",
            "feature,rank\r\n taxonX , 1.5 \r\ntaxonY,-2e-3\r\n",
        );
        let ranked = read_ranks(file.path(), 1).unwrap();
        // only the ends of the line are trimmed, so the space before the
        // comma stays in the identifier
        assert_eq!(ranked.get("taxonX "), Some(1.5));
        assert_eq!(ranked.get("taxonX"), None);
        assert_eq!(ranked.get("taxonY"), Some(-0.002));
    }

    #[test]
    fn test_blank_line_is_short() {
        let file = temp_file_with(".csv", "feature,rank\nA,1.0\n\nB,2.0\n");
        let err = read_ranks(file.path(), 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(matches!(
            err,
            RankRatiovizError::RanksTooFewColumns { line: 3, found: 1, column: 1 }
        ));

        // with the identifier column as the rank, the empty field fails to parse
        let file = temp_file_with(".csv", "feature,rank\n1.0,1.0\n\n");
        let err = read_ranks(file.path(), 0).unwrap_err();
        assert!(matches!(
            err,
            RankRatiovizError::InvalidRankValue { line: 3, ref value } if value.is_empty()
        ));
    }

    #[test]
    fn test_quotes_are_not_special() {
        let file = temp_file_with(".csv", "feature,rank\n\"a,b\",1.0\n");
        let err = read_ranks(file.path(), 1).unwrap_err();
        assert!(matches!(
            err,
            RankRatiovizError::InvalidRankValue { line: 2, ref value } if value == "b\""
        ));

        let ranked = read_ranks(file.path(), 2).unwrap();
        assert_eq!(ranked.get("\"a"), Some(1.0));
    }

    #[test]
    fn test_too_few_columns() {
        let file = temp_file_with(
            ".csv",
            "feature,rankA,rankB\ntaxonX,1.0,5.0\ntaxonY,2.0\n",
        );
        let err = read_ranks(file.path(), 2).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        match err {
            RankRatiovizError::RanksTooFewColumns {
                line,
                found,
                column,
            } => {
                assert_eq!(line, 3);
                assert_eq!(found, 2);
                assert_eq!(column, 2);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_rank() {
        let file = temp_file_with(".csv", "feature,rank\ntaxonX,high\n");
        let err = read_ranks(file.path(), 1).unwrap_err();
        assert!(matches!(
            err,
            RankRatiovizError::InvalidRankValue { ref value, .. } if value == "high"
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = read_ranks("tests_data/does_not_exist.csv", 1).unwrap_err();
        assert!(matches!(err, RankRatiovizError::IOError(_)));
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn test_ranks_iterator() {
        let file = temp_file_with(".csv", "feature,rank\nA,0.25\nB,bad\n");
        let mut iter = RanksIterator::new(file.path(), 1).unwrap();
        assert_eq!(iter.next().unwrap().unwrap(), ("A".to_string(), 0.25));
        assert!(iter.next().unwrap().is_err());
        assert!(iter.next().is_none());
    }
}
