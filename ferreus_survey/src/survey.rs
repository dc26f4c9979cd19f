/////////////////////////////////////////////////////////////////////////////////////////////
//
// Implements the survey coordinator: well ties, neighbourhood queries, and sparse meshes.
//
// Created on: 14 Oct 2026     Author: Daniel Owen
//
// Copyright (c) 2026, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

use crate::{
    config::SurveySettings,
    error::{Result, SurveyError},
    notices::{Advised, Advisory},
    progress::{self, ProgressMsg, ProgressSink},
    well::Well,
};

use faer::Mat;
use ferreus_survey_utils::{
    GridDescriptor, GridIndex, GridIndexTransform, VolumeSampler,
};
use indexmap::IndexMap;
use std::sync::Arc;

/// Trace locations around a well and the volume samples read at them.
///
/// `locations[i]` is where `samples[i]` was read.
#[derive(Debug, Clone, PartialEq)]
pub struct Samples<S> {
    pub locations: Vec<GridIndex>,
    pub samples: Vec<S>,
}

impl<S> Samples<S> {
    pub fn empty() -> Self {
        Samples {
            locations: Vec::new(),
            samples: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Iterates `(location, sample)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&GridIndex, &S)> {
        self.locations.iter().zip(self.samples.iter())
    }
}

/// One well's log value at a tie location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SparsePoint {
    pub line: i64,
    pub crossline: i64,
    pub value: f64,
}

#[derive(Debug, Clone)]
struct TiedWell {
    well: Well,
    tie: GridIndex,
}

/// Combines a seismic volume with a set of wells tied to its grid.
///
/// Each well is tied once, when it is registered, by passing its location
/// through the coordinate transform. Queries then work from the cached ties
/// and read the volume on demand.
///
/// Wells are kept in registration order. Re-registering a name replaces the
/// well and its tie together and keeps the original position, so iteration
/// order (and therefore which well wins a shared mesh cell) is stable.
pub struct Survey<T, V> {
    transform: T,
    volume: V,
    settings: SurveySettings,
    wells: IndexMap<String, TiedWell>,
    progress_callback: Option<Arc<dyn ProgressSink>>,
}

/// Builder for a [`Survey`].
///
/// Created via [`Survey::builder`].
pub struct SurveyBuilder<T, V> {
    transform: T,
    volume: V,
    settings: SurveySettings,
    wells: Vec<Well>,
    progress_callback: Option<Arc<dyn ProgressSink>>,
}

impl<T, V> SurveyBuilder<T, V>
where
    T: GridIndexTransform,
    V: VolumeSampler,
{
    fn new(transform: T, volume: V) -> Self {
        Self {
            transform,
            volume,
            settings: SurveySettings::default(),
            wells: Vec::new(),
            progress_callback: None,
        }
    }

    pub fn settings(mut self, settings: SurveySettings) -> Self {
        self.settings = settings;
        self
    }

    /// Installs a sink that receives tie, advisory and mesh progress events.
    pub fn progress_callback(mut self, sink: Arc<dyn ProgressSink>) -> Self {
        self.progress_callback = Some(sink);
        self
    }

    /// Queues a well to be registered on build.
    pub fn well(mut self, well: Well) -> Self {
        self.wells.push(well);
        self
    }

    pub fn wells(mut self, wells: impl IntoIterator<Item = Well>) -> Self {
        self.wells.extend(wells);
        self
    }

    /// Validates the volume's grid and registers the queued wells in order.
    ///
    /// # Errors
    /// - [`SurveyError::Grid`] if any axis of the volume's grid is malformed.
    pub fn build(self) -> Result<Survey<T, V>> {
        self.volume.grid().validate()?;

        let mut survey = Survey {
            transform: self.transform,
            volume: self.volume,
            settings: self.settings,
            wells: IndexMap::with_capacity(self.wells.len()),
            progress_callback: self.progress_callback,
        };

        for well in self.wells {
            survey.register(well);
        }

        Ok(survey)
    }
}

impl<T, V> Survey<T, V>
where
    T: GridIndexTransform,
    V: VolumeSampler,
{
    /// Returns a [`SurveyBuilder`] over the given transform and volume.
    pub fn builder(transform: T, volume: V) -> SurveyBuilder<T, V> {
        SurveyBuilder::new(transform, volume)
    }

    /// Ties `well` to the grid and stores it, replacing any well of the same name.
    ///
    /// Returns the tie.
    pub fn register(&mut self, well: Well) -> GridIndex {
        let tie = self.transform.coordinate_to_grid_index(well.location());
        let name = well.name().to_string();

        progress::emit(
            &self.progress_callback,
            ProgressMsg::WellTied {
                name: name.clone(),
                tie,
            },
        );

        self.wells.insert(name, TiedWell { well, tie });
        tie
    }

    pub fn grid(&self) -> &GridDescriptor {
        self.volume.grid()
    }

    pub fn settings(&self) -> &SurveySettings {
        &self.settings
    }

    /// Cached tie of a registered well.
    pub fn tie(&self, well_name: &str) -> Option<GridIndex> {
        self.wells.get(well_name).map(|entry| entry.tie)
    }

    pub fn well(&self, well_name: &str) -> Option<&Well> {
        self.wells.get(well_name).map(|entry| &entry.well)
    }

    /// Registered wells and their ties, in registration order.
    pub fn wells(&self) -> impl Iterator<Item = (&Well, GridIndex)> {
        self.wells.values().map(|entry| (&entry.well, entry.tie))
    }

    pub fn len(&self) -> usize {
        self.wells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wells.is_empty()
    }

    /// Reads `attribute` from the volume at and around a well's tie.
    ///
    /// With `radius == 0` only the tie itself is read. Otherwise the window
    /// spans `radius` grid steps either side of the tie on both axes, using
    /// each axis' own step, clamped to the grid. Locations are the Cartesian
    /// product of the line and crossline windows, line-major.
    ///
    /// An unknown well name gives an empty result with a
    /// [`Advisory::WellNotFound`] notice.
    pub fn get_samples(
        &self,
        well_name: &str,
        attribute: &str,
        radius: usize,
    ) -> Advised<Samples<V::Sample>> {
        let Some(tie) = self.tie(well_name) else {
            let notice = Advisory::WellNotFound {
                name: well_name.to_string(),
            };
            self.report(&notice);
            return Advised::with_notices(Samples::empty(), vec![notice]);
        };

        if radius == 0 {
            let sample = self.volume.sample_at(tie, attribute);
            return Advised::clean(Samples {
                locations: vec![tie],
                samples: vec![sample],
            });
        }

        let grid = self.volume.grid();
        let lines = grid.line.stepped_window(tie.line, radius);
        let crosslines = grid.crossline.stepped_window(tie.crossline, radius);

        let capacity = lines.len() * crosslines.len();
        let mut locations = Vec::with_capacity(capacity);
        let mut samples = Vec::with_capacity(capacity);

        for &line in &lines {
            for &crossline in &crosslines {
                let index = GridIndex::new(line, crossline);
                samples.push(self.volume.sample_at(index, attribute));
                locations.push(index);
            }
        }

        Advised::clean(Samples { locations, samples })
    }

    /// Resolves `depth` to the nearest value on the grid's depth axis.
    ///
    /// An exact midpoint snaps to the shallower value. Depths outside the
    /// axis snap to its first or last value. `NaN` is treated as out of range
    /// low and snaps to the first value. Every case other than an exact grid
    /// depth also raises an advisory.
    pub fn snap_depth(&self, depth: f64) -> Advised<i64> {
        let axis = self.volume.grid().depth;
        let snapped = axis.nearest_value(depth);

        let notice = if depth > axis.end as f64 {
            Some(Advisory::OutOfRangeHigh {
                requested: depth,
                snapped,
            })
        } else if depth < axis.start as f64 || depth.is_nan() {
            Some(Advisory::OutOfRangeLow {
                requested: depth,
                snapped,
            })
        } else if depth != snapped as f64 {
            Some(Advisory::SnappedToNearest {
                requested: depth,
                snapped,
            })
        } else {
            None
        };

        match notice {
            Some(notice) => {
                self.report(&notice);
                Advised::with_notices(snapped, vec![notice])
            }
            None => Advised::clean(snapped),
        }
    }

    /// Value of `log` in one well at the sample nearest to the snapped `depth`.
    ///
    /// The payload is `None` (with a [`Advisory::WellNotFound`] notice) when
    /// no well has that name.
    ///
    /// # Errors
    /// - [`SurveyError::LogNotFound`] if the well has no such log.
    pub fn log_value_at(
        &self,
        well_name: &str,
        log: &str,
        depth: f64,
    ) -> Result<Advised<Option<f64>>> {
        let Some(entry) = self.wells.get(well_name) else {
            let notice = Advisory::WellNotFound {
                name: well_name.to_string(),
            };
            self.report(&notice);
            return Ok(Advised::with_notices(None, vec![notice]));
        };

        let Advised {
            value: snapped,
            notices,
        } = self.snap_depth(depth);

        let value = entry
            .well
            .nearest_log_value(log, snapped as f64, self.settings.nearest_search)?;

        Ok(Advised::with_notices(Some(value), notices))
    }

    /// Places each well's `log` value at the snapped `depth` on a full-size grid.
    ///
    /// The mesh has one row per crossline and one column per line. Cells
    /// without a well hold the configured no-data value. Wells whose tie lies
    /// outside the grid are skipped, though they still count toward the
    /// reported progress. When two wells share a cell the one registered
    /// later wins.
    ///
    /// # Errors
    /// - [`SurveyError::LogNotFound`] if any placed well lacks `log`.
    /// - [`SurveyError::MisalignedTie`] if a tie inside the grid falls between
    ///   grid lines.
    pub fn build_mesh(&self, depth: f64, log: &str) -> Result<Advised<Mat<f64>>> {
        let Advised {
            value: snapped,
            notices,
        } = self.snap_depth(depth);

        let grid = self.volume.grid();
        let (num_rows, num_cols) = grid.shape();
        let no_data = self.settings.no_data;
        let mut mesh = Mat::from_fn(num_rows, num_cols, |_, _| no_data);

        let wells_total = self.wells.len();
        for (wells_done, entry) in self.wells.values().enumerate() {
            let (well, tie) = (&entry.well, entry.tie);

            if grid.contains(tie) {
                let misaligned = |source| SurveyError::MisalignedTie {
                    well: well.name().to_string(),
                    tie,
                    source,
                };
                let row = grid.crossline.offset_of(tie.crossline).map_err(misaligned)?;
                let col = grid.line.offset_of(tie.line).map_err(misaligned)?;

                mesh[(row, col)] =
                    well.nearest_log_value(log, snapped as f64, self.settings.nearest_search)?;
            } else {
                progress::emit(
                    &self.progress_callback,
                    ProgressMsg::Message {
                        message: format!(
                            "well {:?} tie {} lies outside the grid and is left off the mesh",
                            well.name(),
                            tie
                        ),
                    },
                );
            }

            progress::emit(
                &self.progress_callback,
                ProgressMsg::MeshProgress {
                    wells_done: wells_done + 1,
                    wells_total,
                },
            );
        }

        Ok(Advised::with_notices(mesh, notices))
    }

    /// Each well's `log` value at the snapped `depth`, with its tie.
    ///
    /// One point per registered well, in registration order. Unlike
    /// [`Survey::build_mesh`] no grid is allocated and ties are not checked
    /// against the grid.
    ///
    /// # Errors
    /// - [`SurveyError::LogNotFound`] if any well lacks `log`.
    pub fn build_sparse_list(&self, depth: f64, log: &str) -> Result<Advised<Vec<SparsePoint>>> {
        let Advised {
            value: snapped,
            notices,
        } = self.snap_depth(depth);

        let wells_total = self.wells.len();
        let mut points = Vec::with_capacity(wells_total);

        for (wells_done, entry) in self.wells.values().enumerate() {
            let value =
                entry
                    .well
                    .nearest_log_value(log, snapped as f64, self.settings.nearest_search)?;

            points.push(SparsePoint {
                line: entry.tie.line,
                crossline: entry.tie.crossline,
                value,
            });

            progress::emit(
                &self.progress_callback,
                ProgressMsg::MeshProgress {
                    wells_done: wells_done + 1,
                    wells_total,
                },
            );
        }

        Ok(Advised::with_notices(points, notices))
    }

    fn report(&self, notice: &Advisory) {
        progress::emit(
            &self.progress_callback,
            ProgressMsg::Advisory {
                notice: notice.clone(),
            },
        );
    }
}

/// Reads a neighbourhood radius from text.
///
/// Accepts whole numbers (`"2"`) and reals (`"2.0"`, `"2.7"`), truncating the
/// latter toward zero.
///
/// # Errors
/// - [`SurveyError::InvalidRadius`] for negative, non-finite or non-numeric input.
pub fn parse_radius(input: &str) -> Result<usize> {
    let trimmed = input.trim();
    let invalid = || SurveyError::InvalidRadius {
        input: input.to_string(),
    };

    if let Ok(whole) = trimmed.parse::<usize>() {
        return Ok(whole);
    }

    let real: f64 = trimmed.parse().map_err(|_| invalid())?;
    if !real.is_finite() || real < 0.0 || real >= usize::MAX as f64 {
        return Err(invalid());
    }

    Ok(real.trunc() as usize)
}
