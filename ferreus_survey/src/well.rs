/////////////////////////////////////////////////////////////////////////////////////////////
//
// Defines well entities holding a location and depth-aligned named log arrays.
//
// Created on: 14 Oct 2026     Author: Daniel Owen
//
// Copyright (c) 2026, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

use crate::{
    config::NearestSearch,
    error::{Result, SurveyError},
};
use ferreus_survey_utils::{is_sorted_ascending, nearest_index, nearest_index_sorted};
use indexmap::IndexMap;

/// Name given to the depth log by [`Well::new`].
pub const DEFAULT_DEPTH_LOG: &str = "depth";

/// A well with a surface location and a set of named logs.
///
/// Every log is sampled at the same positions as the well's depth log, so
/// index `i` of any log belongs to depth `depth()[i]`. The constructors
/// enforce this.
#[derive(Debug, Clone, PartialEq)]
pub struct Well {
    name: String,
    location: [f64; 2],
    depth_log: String,
    logs: IndexMap<String, Vec<f64>>,
}

impl Well {
    /// Creates a well whose depth log is called `"depth"`.
    ///
    /// # Errors
    /// - [`SurveyError::EmptyDepthLog`] if `depth` has no samples.
    pub fn new(name: impl Into<String>, location: [f64; 2], depth: Vec<f64>) -> Result<Self> {
        Self::with_depth_log(name, location, DEFAULT_DEPTH_LOG, depth)
    }

    /// Creates a well whose depth log has a custom name, e.g. `"tvdss"`.
    pub fn with_depth_log(
        name: impl Into<String>,
        location: [f64; 2],
        depth_log: impl Into<String>,
        depth: Vec<f64>,
    ) -> Result<Self> {
        let name = name.into();
        if depth.is_empty() {
            return Err(SurveyError::EmptyDepthLog { well: name });
        }

        let depth_log = depth_log.into();
        let mut logs = IndexMap::new();
        logs.insert(depth_log.clone(), depth);

        Ok(Well {
            name,
            location,
            depth_log,
            logs,
        })
    }

    /// Adds a log, consuming and returning the well.
    pub fn with_log(mut self, name: impl Into<String>, values: Vec<f64>) -> Result<Self> {
        self.insert_log(name, values)?;
        Ok(self)
    }

    /// Adds or replaces a log.
    ///
    /// # Errors
    /// - [`SurveyError::LogLengthMismatch`] if `values` does not have one
    ///   sample per depth sample. Replacing the depth log itself is held to
    ///   the same length so existing logs stay aligned.
    pub fn insert_log(&mut self, name: impl Into<String>, values: Vec<f64>) -> Result<()> {
        let name = name.into();
        let expected = self.depth().len();
        if values.len() != expected {
            return Err(SurveyError::LogLengthMismatch {
                well: self.name.clone(),
                log: name,
                expected,
                got: values.len(),
            });
        }
        self.logs.insert(name, values);
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Geographic location of the well head.
    pub fn location(&self) -> [f64; 2] {
        self.location
    }

    pub fn depth_log_name(&self) -> &str {
        &self.depth_log
    }

    /// The depth log. Never empty.
    pub fn depth(&self) -> &[f64] {
        self.logs
            .get(&self.depth_log)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Looks up a log by name.
    ///
    /// # Errors
    /// - [`SurveyError::LogNotFound`] if the well has no such log.
    pub fn log(&self, name: &str) -> Result<&[f64]> {
        self.logs
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| SurveyError::LogNotFound {
                well: self.name.clone(),
                log: name.to_string(),
            })
    }

    /// Log names in insertion order, starting with the depth log.
    pub fn log_names(&self) -> impl Iterator<Item = &str> {
        self.logs.keys().map(String::as_str)
    }

    /// Index of the depth sample nearest to `depth`.
    pub fn nearest_depth_index(&self, depth: f64, search: NearestSearch) -> usize {
        let depths = self.depth();
        let found = match search {
            NearestSearch::BinarySearch if is_sorted_ascending(depths) => {
                nearest_index_sorted(depths, depth)
            }
            _ => nearest_index(depths, depth),
        };
        // The depth log is never empty.
        found.unwrap_or(0)
    }

    /// Value of `log` at the depth sample nearest to `depth`.
    ///
    /// No interpolation: the sample at the nearest depth is returned as is,
    /// and on an exact tie between two depths the smaller one wins.
    pub fn nearest_log_value(&self, log: &str, depth: f64, search: NearestSearch) -> Result<f64> {
        let values = self.log(log)?;
        let idx = self.nearest_depth_index(depth, search);
        Ok(values[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_well() -> Well {
        Well::new("W1", [512.0, 128.0], vec![1000.0, 1010.0, 1020.0, 1030.0])
            .unwrap()
            .with_log("vp", vec![2000.0, 2100.0, 2200.0, 2300.0])
            .unwrap()
            .with_log("gr", vec![40.0, 55.0, 60.0, 80.0])
            .unwrap()
    }

    #[test]
    fn rejects_empty_depth_log() {
        let err = Well::new("W0", [0.0, 0.0], vec![]).unwrap_err();
        assert_eq!(err, SurveyError::EmptyDepthLog { well: "W0".into() });
    }

    #[test]
    fn rejects_misaligned_logs() {
        let err = Well::new("W1", [0.0, 0.0], vec![1.0, 2.0])
            .unwrap()
            .with_log("vp", vec![1.0])
            .unwrap_err();

        assert_eq!(
            err,
            SurveyError::LogLengthMismatch {
                well: "W1".into(),
                log: "vp".into(),
                expected: 2,
                got: 1,
            }
        );
    }

    #[test]
    fn missing_log_is_an_error() {
        let well = sample_well();
        assert_eq!(
            well.log("rho"),
            Err(SurveyError::LogNotFound {
                well: "W1".into(),
                log: "rho".into()
            })
        );
        assert_eq!(
            well.nearest_log_value("rho", 1000.0, NearestSearch::LinearScan),
            Err(SurveyError::LogNotFound {
                well: "W1".into(),
                log: "rho".into()
            })
        );
    }

    #[test]
    fn log_names_keep_insertion_order() {
        let well = sample_well();
        assert_eq!(well.log_names().collect::<Vec<_>>(), vec!["depth", "vp", "gr"]);
        assert_eq!(well.depth_log_name(), "depth");
    }

    #[test]
    fn nearest_value_picks_smaller_depth_on_tie() {
        let well = sample_well();
        for search in [NearestSearch::LinearScan, NearestSearch::BinarySearch] {
            assert_eq!(well.nearest_log_value("vp", 1014.0, search), Ok(2100.0));
            assert_eq!(well.nearest_log_value("vp", 1016.0, search), Ok(2200.0));
            assert_eq!(well.nearest_log_value("vp", 1015.0, search), Ok(2100.0));
            assert_eq!(well.nearest_log_value("gr", 5000.0, search), Ok(80.0));
            assert_eq!(well.nearest_log_value("gr", 0.0, search), Ok(40.0));
        }
    }

    #[test]
    fn binary_search_falls_back_on_unsorted_depths() {
        let well = Well::new("W2", [0.0, 0.0], vec![1030.0, 1000.0, 1020.0])
            .unwrap()
            .with_log("vp", vec![3.0, 1.0, 2.0])
            .unwrap();

        assert_eq!(well.nearest_log_value("vp", 1001.0, NearestSearch::BinarySearch), Ok(1.0));
        assert_eq!(well.nearest_log_value("vp", 1026.0, NearestSearch::BinarySearch), Ok(3.0));
    }

    #[test]
    fn depth_log_can_be_read_as_a_log() {
        let well = Well::with_depth_log("W3", [1.0, 2.0], "tvdss", vec![5.0, 6.0]).unwrap();
        assert_eq!(well.log("tvdss"), Ok(&[5.0, 6.0][..]));
        assert_eq!(well.depth(), &[5.0, 6.0]);
        assert!(well.log("depth").is_err());
    }
}
