/////////////////////////////////////////////////////////////////////////////////////////////
//
// Example tying a handful of synthetic wells to a survey grid, reading traces around one
// well, and building a sparse velocity mesh at a requested depth.
//
// Created on: 14 Oct 2026     Author: Daniel Owen
//
// Copyright (c) 2026, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

use ferreus_survey::{
    GridAxis, GridDescriptor, GridIndex, Survey, VolumeSampler, Well, is_no_data, parse_radius,
    progress::{ProgressMsg, ProgressSink, closure_sink},
    sparse_list_to_csv, sparse_list_to_point_arrays,
};
use std::{env, sync::Arc, thread::JoinHandle};

/// Synthetic volume returning a constant-gradient trace for every location.
struct SyntheticVolume {
    grid: GridDescriptor,
}

impl VolumeSampler for SyntheticVolume {
    type Sample = Vec<f64>;

    fn grid(&self) -> &GridDescriptor {
        &self.grid
    }

    fn sample_at(&self, index: GridIndex, _attribute: &str) -> Vec<f64> {
        self.grid
            .depth
            .values()
            .map(|d| 1500.0 + 0.6 * d as f64 + 0.1 * (index.line + index.crossline) as f64)
            .collect()
    }
}

/// Generates a callback closure_sink and the handle of its listener thread
fn get_callback_sink() -> (Arc<dyn ProgressSink>, JoinHandle<()>) {
    closure_sink(256, |msg| match msg {
        ProgressMsg::WellTied { name, tie } => {
            println!("Tied {:<6} to {}", name, tie);
        }
        ProgressMsg::Advisory { notice } => {
            println!("[{}] {}", notice.code(), notice);
        }
        ProgressMsg::MeshProgress {
            wells_done,
            wells_total,
        } => {
            println!("Mesh: {:>3}/{:<3} wells", wells_done, wells_total);
        }
        ProgressMsg::Message { message } => {
            println!("{message}");
        }
    })
}

/// Straight-line velocity log sampled every 5m down to 2500m.
fn synthetic_well(name: &str, location: [f64; 2], v0: f64) -> Result<Well, Box<dyn std::error::Error>> {
    let depth: Vec<f64> = (0..=300).map(|i| 1000.0 + 5.0 * i as f64).collect();
    let vp: Vec<f64> = depth.iter().map(|d| v0 + 0.55 * (d - 1000.0)).collect();

    Ok(Well::new(name, location, depth)?.with_log("vp", vp)?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let grid = GridDescriptor::new(
        GridAxis::new(1000, 1200, 4)?,
        GridAxis::new(3000, 3100, 2)?,
        GridAxis::new(1000, 2400, 4)?,
    );

    // Rotation-free georeference: 25m bins, origin at (500000, 7000000).
    let transform = move |p: [f64; 2]| {
        let line = 1000 + 4 * ((p[0] - 500_000.0) / 25.0).round() as i64;
        let crossline = 3000 + 2 * ((p[1] - 7_000_000.0) / 25.0).round() as i64;
        GridIndex::new(line, crossline)
    };

    let wells = vec![
        synthetic_well("W-01", [500_250.0, 7_000_300.0], 2100.0)?,
        synthetic_well("W-02", [501_000.0, 7_000_100.0], 2050.0)?,
        synthetic_well("W-03", [500_600.0, 7_001_050.0], 2200.0)?,
    ];

    let (sink, listener) = get_callback_sink();
    let survey = Survey::builder(transform, SyntheticVolume { grid })
        .progress_callback(sink)
        .wells(wells)
        .build()?;

    let radius_arg = env::args().nth(1).unwrap_or_else(|| "1".to_string());
    let radius = parse_radius(&radius_arg)?;

    let traces = survey.get_samples("W-01", "vp", radius).into_inner();
    println!("Read {} traces around W-01", traces.len());

    let mesh = survey.build_mesh(1997.0, "vp")?;
    let populated = mesh
        .value
        .col_iter()
        .flat_map(|col| col.iter().copied().collect::<Vec<_>>())
        .filter(|v| !is_no_data(*v, survey.settings().no_data))
        .count();
    println!(
        "Mesh {}x{} with {} populated cells",
        mesh.value.nrows(),
        mesh.value.ncols(),
        populated
    );

    let sparse = survey.build_sparse_list(1997.0, "vp")?.into_inner();
    let (_points, _values) = sparse_list_to_point_arrays(&sparse);

    let out_path = env::temp_dir().join("well_tie_sparse_list.csv");
    sparse_list_to_csv(&sparse, out_path.to_str().unwrap_or("well_tie_sparse_list.csv"))?;
    println!("Wrote {}", out_path.display());

    // The listener exits once the survey drops the last sender.
    drop(survey);
    listener
        .join()
        .map_err(|_| "progress listener panicked")?;

    Ok(())
}
