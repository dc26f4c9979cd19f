/////////////////////////////////////////////////////////////////////////////////////////////
//
// Defines advisory notices and the result wrapper that carries them alongside a payload.
//
// Created on: 14 Oct 2026     Author: Daniel Owen
//
// Copyright (c) 2026, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

//! Advisory notices attached to survey query results.
use std::fmt;

/// A recoverable condition detected while answering a query.
///
/// Advisories never change the control flow of the query that raised them:
/// the payload is always the best-effort nearest answer.
#[derive(Debug, Clone, PartialEq)]
pub enum Advisory {
    /// Requested depth lies below the last grid depth; the deepest grid value was used.
    OutOfRangeHigh { requested: f64, snapped: i64 },

    /// Requested depth lies above the first grid depth; the shallowest grid value was used.
    OutOfRangeLow { requested: f64, snapped: i64 },

    /// Requested depth is inside the grid but between grid values.
    SnappedToNearest { requested: f64, snapped: i64 },

    /// No well is registered under this name.
    WellNotFound { name: String },
}

impl Advisory {
    pub const OUT_OF_RANGE_HIGH: &'static str = "OUT_OF_RANGE_HIGH";
    pub const OUT_OF_RANGE_LOW: &'static str = "OUT_OF_RANGE_LOW";
    pub const SNAPPED_TO_NEAREST: &'static str = "SNAPPED_TO_NEAREST";
    pub const WELL_NOT_FOUND: &'static str = "WELL_NOT_FOUND";

    /// Stable code identifying the kind of advisory.
    pub fn code(&self) -> &'static str {
        match self {
            Advisory::OutOfRangeHigh { .. } => Self::OUT_OF_RANGE_HIGH,
            Advisory::OutOfRangeLow { .. } => Self::OUT_OF_RANGE_LOW,
            Advisory::SnappedToNearest { .. } => Self::SNAPPED_TO_NEAREST,
            Advisory::WellNotFound { .. } => Self::WELL_NOT_FOUND,
        }
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::OutOfRangeHigh { requested, snapped } => write!(
                f,
                "depth {} is larger than the maximum grid depth, using {}",
                requested, snapped
            ),
            Advisory::OutOfRangeLow { requested, snapped } => write!(
                f,
                "depth {} is smaller than the minimum grid depth, using {}",
                requested, snapped
            ),
            Advisory::SnappedToNearest { requested, snapped } => write!(
                f,
                "depth {} is not on the grid, returning values on nearest depth {}",
                requested, snapped
            ),
            Advisory::WellNotFound { name } => write!(f, "well {:?} not found", name),
        }
    }
}

/// A query payload together with any advisories raised while computing it.
#[derive(Debug, Clone, PartialEq)]
pub struct Advised<T> {
    pub value: T,
    pub notices: Vec<Advisory>,
}

impl<T> Advised<T> {
    /// Wraps a payload that raised no advisories.
    pub fn clean(value: T) -> Self {
        Advised {
            value,
            notices: Vec::new(),
        }
    }

    pub fn with_notices(value: T, notices: Vec<Advisory>) -> Self {
        Advised { value, notices }
    }

    /// True if no advisories were raised.
    pub fn is_clean(&self) -> bool {
        self.notices.is_empty()
    }

    /// True if an advisory with the given code was raised.
    pub fn has(&self, code: &str) -> bool {
        self.notices.iter().any(|n| n.code() == code)
    }

    /// Codes of all raised advisories, in the order they were raised.
    pub fn codes(&self) -> Vec<&'static str> {
        self.notices.iter().map(Advisory::code).collect()
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Advised<U> {
        Advised {
            value: f(self.value),
            notices: self.notices,
        }
    }

    /// Discards the advisories.
    pub fn into_inner(self) -> T {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        let notices = vec![
            Advisory::OutOfRangeHigh { requested: 2500.0, snapped: 2000 },
            Advisory::OutOfRangeLow { requested: 10.0, snapped: 1000 },
            Advisory::SnappedToNearest { requested: 1997.0, snapped: 2000 },
            Advisory::WellNotFound { name: "ghost".into() },
        ];
        let advised = Advised::with_notices((), notices);

        assert_eq!(
            advised.codes(),
            vec![
                "OUT_OF_RANGE_HIGH",
                "OUT_OF_RANGE_LOW",
                "SNAPPED_TO_NEAREST",
                "WELL_NOT_FOUND"
            ]
        );
        assert!(advised.has(Advisory::WELL_NOT_FOUND));
        assert!(!advised.is_clean());
    }

    #[test]
    fn map_keeps_notices() {
        let advised = Advised::with_notices(
            3,
            vec![Advisory::SnappedToNearest { requested: 1.5, snapped: 2 }],
        );
        let mapped = advised.map(|v| v * 2);
        assert_eq!(mapped.value, 6);
        assert!(mapped.has(Advisory::SNAPPED_TO_NEAREST));
        assert!(Advised::clean("x").is_clean());
    }
}
