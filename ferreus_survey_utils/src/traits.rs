/////////////////////////////////////////////////////////////////////////////////////////////
//
// Declares the collaborator traits consumed by the survey: coordinate transform and volume.
//
// Created on: 14 Oct 2026     Author: Daniel Owen
//
// Copyright (c) 2026, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

use crate::grid::{GridDescriptor, GridIndex};

/// Maps a geographic point onto the survey's (line, crossline) lattice.
///
/// Implementors are expected to land on exact step multiples of the grid
/// they target; the survey checks this when placing wells on a mesh.
pub trait GridIndexTransform {
    fn coordinate_to_grid_index(&self, point: [f64; 2]) -> GridIndex;
}

impl<F> GridIndexTransform for F
where
    F: Fn([f64; 2]) -> GridIndex,
{
    #[inline]
    fn coordinate_to_grid_index(&self, point: [f64; 2]) -> GridIndex {
        self(point)
    }
}

/// Read access to a regularly gridded volume.
pub trait VolumeSampler {
    /// Whatever the volume returns for one (line, crossline) location,
    /// e.g. a full trace or a single amplitude.
    type Sample;

    /// Grid bounds and steps of the volume.
    fn grid(&self) -> &GridDescriptor;

    /// Reads `attribute` at `index`.
    fn sample_at(&self, index: GridIndex, attribute: &str) -> Self::Sample;
}
