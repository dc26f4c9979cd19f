/////////////////////////////////////////////////////////////////////////////////////////////
//
// Exposes the public API and high-level documentation for tying well logs to seismic grids.
//
// Created on: 14 Oct 2026     Author: Daniel Owen
//
// Copyright (c) 2026, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

//! # Tying well logs to a seismic survey grid.
//!
//! Well logs are sampled along a borehole at a single surface location, while a
//! seismic volume is sampled on a regular (line, crossline, depth) grid. This
//! crate connects the two:
//!
//! - **Grid ties** - each registered well is mapped once, through a
//!   [`GridIndexTransform`], to the (line, crossline) trace nearest its location.
//! - **Neighbourhood queries** - [`Survey::get_samples`] reads a volume attribute
//!   at the tie and, optionally, in a clamped window of grid steps around it.
//! - **Sparse meshes** - [`Survey::build_mesh`] places every well's log value at a
//!   chosen depth on a full-size 2D grid, the usual starting point for gridding
//!   well data over a survey. [`Survey::build_sparse_list`] returns the same
//!   values as a point list.
//!
//! Requested depths are snapped to the nearest grid depth. Conditions that do
//! not stop a query (a depth off or outside the grid, an unknown well) are
//! returned as [`Advisory`] notices alongside the result, and forwarded to an
//! optional [`progress::ProgressSink`].
//!
//! The coordinate transform and the seismic volume are supplied by the caller
//! through the traits re-exported from [`ferreus_survey_utils`].
//!
//! # Examples
//!
//! ```
//! use ferreus_survey::{
//!     Advisory, GridAxis, GridDescriptor, GridIndex, Survey, VolumeSampler, Well,
//! };
//!
//! struct Volume {
//!     grid: GridDescriptor,
//! }
//!
//! impl VolumeSampler for Volume {
//!     type Sample = f64;
//!
//!     fn grid(&self) -> &GridDescriptor {
//!         &self.grid
//!     }
//!
//!     fn sample_at(&self, index: GridIndex, _attribute: &str) -> f64 {
//!         (index.line + index.crossline) as f64
//!     }
//! }
//!
//! let grid = GridDescriptor::new(
//!     GridAxis::new(100, 110, 2).unwrap(),
//!     GridAxis::new(200, 206, 2).unwrap(),
//!     GridAxis::new(1000, 2000, 10).unwrap(),
//! );
//!
//! // Locations here are already in grid units.
//! let transform = |p: [f64; 2]| GridIndex::new(p[0] as i64, p[1] as i64);
//!
//! let well = Well::new("W", [104.0, 202.0], vec![1000.0, 1500.0, 2000.0])
//!     .unwrap()
//!     .with_log("vp", vec![2500.0, 2700.0, 3100.0])
//!     .unwrap();
//!
//! let survey = Survey::builder(transform, Volume { grid })
//!     .well(well)
//!     .build()
//!     .unwrap();
//!
//! // Nine traces around the tie, line-major.
//! let samples = survey.get_samples("W", "amp", 1).into_inner();
//! assert_eq!(samples.len(), 9);
//! assert_eq!(samples.locations[0], GridIndex::new(102, 200));
//!
//! // 1997 is not a grid depth; it snaps to 2000.
//! let mesh = survey.build_mesh(1997.0, "vp").unwrap();
//! assert!(mesh.has(Advisory::SNAPPED_TO_NEAREST));
//! assert_eq!(mesh.value[(1, 2)], 3100.0);
//! ```
pub mod config;

mod common;

mod error;

mod notices;

pub mod progress;

mod survey;

mod well;

pub use {
    common::{is_no_data, sparse_list_to_csv, sparse_list_to_point_arrays},
    config::{NearestSearch, SurveySettings, SurveySettingsBuilder},
    error::{Result, SurveyError},
    notices::{Advised, Advisory},
    survey::{Samples, SparsePoint, Survey, SurveyBuilder, parse_radius},
    well::{DEFAULT_DEPTH_LOG, Well},
};

pub use ferreus_survey_utils::{
    GridAxis, GridAxisError, GridDescriptor, GridIndex, GridIndexTransform, VolumeSampler,
};
