/////////////////////////////////////////////////////////////////////////////////////////////
//
// Defines the error type returned by well construction and survey queries.
//
// Created on: 14 Oct 2026     Author: Daniel Owen
//
// Copyright (c) 2026, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

//! Error type for well construction and survey queries.
//!
//! Only conditions that prevent a query from producing a meaningful answer
//! are errors. Recoverable conditions (an unknown well name, a depth outside
//! or between grid values) are reported as [`crate::Advisory`] notices instead.

use ferreus_survey_utils::{GridAxisError, GridIndex};
use std::{error::Error, fmt};

/// Result alias for survey operations.
pub type Result<T> = std::result::Result<T, SurveyError>;

/// Errors raised by [`crate::Well`] and [`crate::Survey`].
#[derive(Debug, Clone, PartialEq)]
pub enum SurveyError {
    /// The well has no log with the requested name.
    LogNotFound { well: String, log: String },

    /// A log array does not line up with the well's depth log.
    LogLengthMismatch {
        well: String,
        log: String,
        expected: usize,
        got: usize,
    },

    /// A well was created without any depth samples.
    EmptyDepthLog { well: String },

    /// A tie inside the grid does not sit on an exact step multiple, so it
    /// cannot be placed on a mesh cell without truncation.
    MisalignedTie {
        well: String,
        tie: GridIndex,
        source: GridAxisError,
    },

    /// The radius could not be read as a non-negative whole number of steps.
    InvalidRadius { input: String },

    /// The volume's grid descriptor is malformed.
    Grid(GridAxisError),
}

impl fmt::Display for SurveyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurveyError::LogNotFound { well, log } => {
                write!(f, "well {:?} has no log named {:?}", well, log)
            }
            SurveyError::LogLengthMismatch {
                well,
                log,
                expected,
                got,
            } => write!(
                f,
                "log {:?} of well {:?} has {} samples, expected {} to match the depth log",
                log, well, got, expected
            ),
            SurveyError::EmptyDepthLog { well } => {
                write!(f, "well {:?} has an empty depth log", well)
            }
            SurveyError::MisalignedTie { well, tie, source } => {
                write!(f, "tie {} of well {:?} is misaligned: {}", tie, well, source)
            }
            SurveyError::InvalidRadius { input } => {
                write!(f, "radius {:?} is not a non-negative number", input)
            }
            SurveyError::Grid(source) => write!(f, "invalid survey grid: {}", source),
        }
    }
}

impl Error for SurveyError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SurveyError::MisalignedTie { source, .. } | SurveyError::Grid(source) => Some(source),
            _ => None,
        }
    }
}

impl From<GridAxisError> for SurveyError {
    fn from(err: GridAxisError) -> Self {
        SurveyError::Grid(err)
    }
}
