/////////////////////////////////////////////////////////////////////////////////////////////
//
// Re-exports grid types, collaborator traits, and nearest-value helpers used by ferreus_survey.
//
// Created on: 14 Oct 2026     Author: Daniel Owen
//
// Copyright (c) 2026, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

//! # Utilities for the [`ferreus_survey`] crate
//!
//! Holds the pieces of a well-to-seismic tie that do not depend on wells at all:
//! the stepped grid axes of a survey, the traits through which the coordinate
//! transform and the seismic volume are consumed, and the nearest-value searches
//! used for depth snapping.
mod grid;
mod traits;
mod utils;

pub use {
    grid::{GridAxis, GridAxisError, GridDescriptor, GridIndex, stepped_range},
    traits::{GridIndexTransform, VolumeSampler},
    utils::{argmin, is_sorted_ascending, nearest_index, nearest_index_sorted},
};
