/////////////////////////////////////////////////////////////////////////////////////////////
//
// Defines grid axes, survey grid descriptors and the line/crossline index pair.
//
// Created on: 14 Oct 2026     Author: Daniel Owen
//
// Copyright (c) 2026, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

use serde::{Deserialize, Serialize};
use std::{error::Error, fmt};

/// A (line, crossline) position on the survey grid.
///
/// This is the type of a well *tie* and of every trace location returned
/// by neighbourhood queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridIndex {
    pub line: i64,
    pub crossline: i64,
}

impl GridIndex {
    pub fn new(line: i64, crossline: i64) -> Self {
        GridIndex { line, crossline }
    }
}

impl fmt::Display for GridIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.line, self.crossline)
    }
}

/// Errors raised when an axis is malformed or a value cannot be mapped onto it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridAxisError {
    /// The step between grid values must be a positive integer.
    InvalidStep { step: i64 },

    /// The axis ends before it starts.
    InvertedRange { start: i64, end: i64 },

    /// The value lies outside `[start, end]`.
    OutOfRange { value: i64, start: i64, end: i64 },

    /// The value is inside the axis but not on a multiple of the step.
    Misaligned { value: i64, start: i64, step: i64 },

    /// The axis holds more grid values than an `i64` can count.
    SpanOverflow { start: i64, end: i64 },
}

impl fmt::Display for GridAxisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridAxisError::InvalidStep { step } => {
                write!(f, "grid step must be positive, got {}", step)
            }
            GridAxisError::InvertedRange { start, end } => {
                write!(f, "grid axis end {} is smaller than start {}", end, start)
            }
            GridAxisError::OutOfRange { value, start, end } => {
                write!(f, "value {} lies outside the grid axis [{}, {}]", value, start, end)
            }
            GridAxisError::Misaligned { value, start, step } => write!(
                f,
                "value {} is not on the grid axis starting at {} with step {}",
                value, start, step
            ),
            GridAxisError::SpanOverflow { start, end } => {
                write!(f, "grid axis [{}, {}] is too wide to index", start, end)
            }
        }
    }
}

impl Error for GridAxisError {}

/// A closed, regularly stepped axis `{start, start + step, ..., end}`.
///
/// `end` is inclusive. When `end - start` is not a multiple of `step` the last
/// grid value is the largest multiple that does not exceed `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridAxis {
    pub start: i64,
    pub end: i64,
    pub step: i64,
}

impl GridAxis {
    /// Creates a validated axis.
    ///
    /// # Errors
    /// - [`GridAxisError::InvalidStep`] if `step <= 0`.
    /// - [`GridAxisError::InvertedRange`] if `end < start`.
    /// - [`GridAxisError::SpanOverflow`] if the number of grid values overflows `i64`.
    pub fn new(start: i64, end: i64, step: i64) -> Result<Self, GridAxisError> {
        let axis = GridAxis { start, end, step };
        axis.validate()?;
        Ok(axis)
    }

    /// Checks the axis invariants. Axes that arrive through serde are not
    /// validated on construction, so callers holding one should check it here.
    pub fn validate(&self) -> Result<(), GridAxisError> {
        if self.step <= 0 {
            return Err(GridAxisError::InvalidStep { step: self.step });
        }
        if self.end < self.start {
            return Err(GridAxisError::InvertedRange {
                start: self.start,
                end: self.end,
            });
        }
        let overflow = GridAxisError::SpanOverflow {
            start: self.start,
            end: self.end,
        };
        let span = self.end.checked_sub(self.start).ok_or(overflow)?;
        (span / self.step).checked_add(1).ok_or(overflow)?;
        Ok(())
    }

    /// Number of grid values on the axis.
    ///
    /// Only meaningful on a validated axis.
    #[inline]
    pub fn count(&self) -> usize {
        ((self.end - self.start) / self.step + 1) as usize
    }

    /// Largest grid value, i.e. `end` rounded down onto the step lattice.
    #[inline]
    pub fn last(&self) -> i64 {
        self.start + (self.count() as i64 - 1) * self.step
    }

    /// Iterates the grid values in ascending order.
    pub fn values(&self) -> impl Iterator<Item = i64> {
        stepped_range(self.start, self.end, self.step)
    }

    #[inline]
    pub fn contains(&self, value: i64) -> bool {
        self.start <= value && value <= self.end
    }

    /// True if `value` is inside the axis and on a multiple of the step.
    #[inline]
    pub fn is_on_grid(&self, value: i64) -> bool {
        self.contains(value) && (value - self.start) % self.step == 0
    }

    /// Grid value nearest to `value`.
    ///
    /// Values at or beyond either end resolve to the first or last grid value.
    /// On an exact midpoint the smaller grid value wins. `NaN` resolves to the
    /// first grid value.
    pub fn nearest_value(&self, value: f64) -> i64 {
        let last = self.last();
        if value.is_nan() || value <= self.start as f64 {
            return self.start;
        }
        if value >= last as f64 {
            return last;
        }

        let k = ((value - self.start as f64) / self.step as f64).floor() as i64;
        let mut lower = self.start + k.clamp(0, self.count() as i64 - 1) * self.step;

        // The division can round across a grid value; settle on lower <= value < lower + step.
        if lower as f64 > value {
            lower -= self.step;
        } else if (lower + self.step) as f64 <= value {
            lower += self.step;
        }
        let upper = lower + self.step;

        match value - lower as f64 <= upper as f64 - value {
            true => lower,
            false => upper,
        }
    }

    /// Zero-based position of an on-grid value along the axis.
    ///
    /// # Errors
    /// - [`GridAxisError::OutOfRange`] if the value is outside the axis.
    /// - [`GridAxisError::Misaligned`] if the value falls between grid values.
    pub fn offset_of(&self, value: i64) -> Result<usize, GridAxisError> {
        if !self.contains(value) {
            return Err(GridAxisError::OutOfRange {
                value,
                start: self.start,
                end: self.end,
            });
        }
        if (value - self.start) % self.step != 0 {
            return Err(GridAxisError::Misaligned {
                value,
                start: self.start,
                step: self.step,
            });
        }
        Ok(((value - self.start) / self.step) as usize)
    }

    /// Grid values within `radius` steps of `centre`, clamped to the axis.
    ///
    /// The window bounds are `centre - radius * step` and `centre + radius * step`,
    /// each saturated to the axis; the values are walked upward from the lower
    /// bound in `step` increments. The result is strictly increasing. It is empty
    /// only when `centre` is so far outside the axis that the clamped bounds cross.
    pub fn stepped_window(&self, centre: i64, radius: usize) -> Vec<i64> {
        let reach = i64::try_from(radius)
            .unwrap_or(i64::MAX)
            .saturating_mul(self.step);

        let low = centre.saturating_sub(reach).max(self.start);
        let high = centre.saturating_add(reach).min(self.end);

        stepped_range(low, high, self.step).collect()
    }
}

/// Inclusive ascending range `start, start + step, ... <= end`.
///
/// Yields nothing when `end < start`, when `step` is not positive, or when
/// `end - start` overflows `i64`.
pub fn stepped_range(start: i64, end: i64, step: i64) -> impl Iterator<Item = i64> {
    let count = match end.checked_sub(start) {
        Some(span) if span >= 0 && step > 0 => (span / step) as usize + 1,
        _ => 0,
    };
    (0..count).map(move |k| start + k as i64 * step)
}

/// Line, crossline and depth axes of a regularly gridded survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDescriptor {
    pub line: GridAxis,
    pub crossline: GridAxis,
    pub depth: GridAxis,
}

impl GridDescriptor {
    pub fn new(line: GridAxis, crossline: GridAxis, depth: GridAxis) -> Self {
        GridDescriptor {
            line,
            crossline,
            depth,
        }
    }

    /// Validates all three axes.
    pub fn validate(&self) -> Result<(), GridAxisError> {
        self.line.validate()?;
        self.crossline.validate()?;
        self.depth.validate()
    }

    /// `(crossline count, line count)`: the rows and columns of a sparse mesh.
    pub fn shape(&self) -> (usize, usize) {
        (self.crossline.count(), self.line.count())
    }

    /// True if both coordinates of `index` lie inside their axes.
    pub fn contains(&self, index: GridIndex) -> bool {
        self.line.contains(index.line) && self.crossline.contains(index.crossline)
    }

    /// Total number of traces on the grid.
    pub fn num_traces(&self) -> usize {
        self.line.count() * self.crossline.count()
    }
}
