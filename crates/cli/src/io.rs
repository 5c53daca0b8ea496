//! JSON polygon files: `[{"x": .., "y": ..}, ...]` per polygon.
//!
//! Coordinates parse to the exact `f64` that was written (`float_roundtrip`),
//! so split output can be fed back as an operand without moving crossings.

use anyhow::{Context, Result};
use polysect::api::Polygon;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointJson {
    pub x: f64,
    pub y: f64,
}

pub fn to_json(p: &Polygon) -> Vec<PointJson> {
    p.v.iter().map(|q| PointJson { x: q.x, y: q.y }).collect()
}

pub fn from_json(pts: &[PointJson]) -> Polygon {
    Polygon::from_xy(&pts.iter().map(|q| (q.x, q.y)).collect::<Vec<_>>())
}

pub fn read_polygon(path: &Path) -> Result<Polygon> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let pts: Vec<PointJson> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing polygon JSON in {}", path.display()))?;
    Ok(from_json(&pts))
}

/// Write a list of polygons as pretty JSON to `out`, or to stdout when `None`.
pub fn write_polygons(out: Option<&Path>, polys: &[Polygon]) -> Result<()> {
    let doc: Vec<Vec<PointJson>> = polys.iter().map(to_json).collect();
    let bytes = serde_json::to_vec_pretty(&doc)?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)
                        .with_context(|| format!("creating output dir {}", parent.display()))?;
                }
            }
            fs::write(path, &bytes).with_context(|| format!("writing {}", path.display()))?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&bytes)?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}
