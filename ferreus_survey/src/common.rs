/////////////////////////////////////////////////////////////////////////////////////////////
//
// Defines shared helpers for no-data checks and sparse list conversion and CSV export.
//
// Created on: 14 Oct 2026     Author: Daniel Owen
//
// Copyright (c) 2026, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

use crate::survey::SparsePoint;
use csv::Writer;
use faer::Mat;
use std::error::Error;

/// True if a mesh cell holds the no-data sentinel.
///
/// Handles a `NaN` sentinel, which never compares equal to itself.
///
/// # Example
/// ```
/// use ferreus_survey::is_no_data;
///
/// assert!(is_no_data(f64::NAN, f64::NAN));
/// assert!(is_no_data(-999.25, -999.25));
/// assert!(!is_no_data(1.0, f64::NAN));
/// ```
#[inline]
pub fn is_no_data(value: f64, sentinel: f64) -> bool {
    match sentinel.is_nan() {
        true => value.is_nan(),
        false => value == sentinel,
    }
}

/// Split a sparse list into point and value matrices.
///
/// # Returns
/// `(points, values)` where `points` has shape `(n, 2)` holding line and
/// crossline, and `values` has shape `(n, 1)`. Rows follow the list order.
pub fn sparse_list_to_point_arrays(points: &[SparsePoint]) -> (Mat<f64>, Mat<f64>) {
    let locations = Mat::from_fn(points.len(), 2, |i, j| match j {
        0 => points[i].line as f64,
        _ => points[i].crossline as f64,
    });
    let values = Mat::from_fn(points.len(), 1, |i, _| points[i].value);

    (locations, values)
}

/// Write a sparse list to a CSV file with headers `Line, Crossline, Value`.
///
/// # Arguments
/// * `points` - Sparse list, e.g. from [`crate::Survey::build_sparse_list`].
/// * `filename` - Output CSV filename.
///
/// # Errors
/// Returns an error if writing to disk fails.
pub fn sparse_list_to_csv(points: &[SparsePoint], filename: &str) -> Result<(), Box<dyn Error>> {
    let mut wtr = Writer::from_path(filename)?;
    write_sparse_list(&mut wtr, points)?;
    wtr.flush()?;
    Ok(())
}

fn write_sparse_list<W: std::io::Write>(
    wtr: &mut Writer<W>,
    points: &[SparsePoint],
) -> Result<(), Box<dyn Error>> {
    wtr.write_record(["Line", "Crossline", "Value"])?;

    for point in points {
        wtr.write_record(&[
            point.line.to_string(),
            point.crossline.to_string(),
            point.value.to_string(),
        ])?;
    }

    Ok(())
}
