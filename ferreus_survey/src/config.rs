/////////////////////////////////////////////////////////////////////////////////////////////
//
// Declares configuration types for well log lookup and sparse mesh construction.
//
// Created on: 14 Oct 2026     Author: Daniel Owen
//
// Copyright (c) 2026, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

//! Declares configuration types for well log lookup and sparse mesh construction.
use serde::{Deserialize, Serialize};

/// Strategy used to find the well depth sample nearest to a query depth.
///
/// Both strategies return the same index: on an exact tie the smaller
/// depth wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NearestSearch {
    /// Scan every depth sample. Works on depth logs in any order.
    LinearScan,

    /// Binary search on the depth log. Only used when the depth log is
    /// ascending; other logs fall back to [`NearestSearch::LinearScan`].
    BinarySearch,
}

/// A convenience builder for constructing a [`SurveySettings`] instance.
///
/// The builder should be called via the [`SurveySettings::builder`] method.
///
/// See [`SurveySettings`] for details on each field.
#[derive(Debug, Clone, Copy)]
pub struct SurveySettingsBuilder {
    pub no_data: f64,
    pub nearest_search: NearestSearch,
}

impl SurveySettingsBuilder {
    fn new() -> Self {
        let defaults = SurveySettings::default();
        Self {
            no_data: defaults.no_data,
            nearest_search: defaults.nearest_search,
        }
    }

    /// Sets the sentinel written to mesh cells without a well.
    pub fn no_data(mut self, no_data: f64) -> Self {
        self.no_data = no_data;
        self
    }

    pub fn nearest_search(mut self, nearest_search: NearestSearch) -> Self {
        self.nearest_search = nearest_search;
        self
    }

    /// Builds and returns an instance of [`SurveySettings`] from the values
    /// defined in the builder.
    pub fn build(self) -> SurveySettings {
        SurveySettings {
            no_data: self.no_data,
            nearest_search: self.nearest_search,
        }
    }
}

/// Settings shared by every query a [`crate::Survey`] answers.
///
/// ### Default Values
/// - `no_data`: `NaN`
/// - `nearest_search`: [`NearestSearch::LinearScan`]
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SurveySettings {
    /// Value of mesh cells that no well maps to. The default `NaN` cannot
    /// collide with a real log value; use [`crate::is_no_data`] to test for it.
    pub no_data: f64,

    /// How the nearest depth sample of a well is located.
    pub nearest_search: NearestSearch,
}

impl Default for SurveySettings {
    fn default() -> Self {
        SurveySettings {
            no_data: f64::NAN,
            nearest_search: NearestSearch::LinearScan,
        }
    }
}

impl SurveySettings {
    /// Returns a new [`SurveySettingsBuilder`] initialised with the defaults.
    pub fn builder() -> SurveySettingsBuilder {
        SurveySettingsBuilder::new()
    }
}
