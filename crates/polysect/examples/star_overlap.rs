//! Print the overlap of a random star with a shifted copy and with a tangle.
//!
//! Usage:
//!   cargo run -p polysect --example star_overlap -- [seed]

use nalgebra::Vector2;
use polysect::prelude::*;

fn main() {
    let seed: u64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(2025);
    let cfg = StarCfg::default();
    let star = draw_star(cfg, ReplayToken { seed, index: 0 });
    let shifted = star.translated(Vector2::new(0.5, 0.25));
    let tangle = draw_tangle(cfg, ReplayToken { seed, index: 1 }, 5);

    report("star ∩ shifted star", &star, &shifted);
    println!("tangle splits into {} pieces", split_polygon(&tangle, ClipCfg::default()).len());
    report("star ∩ tangle", &star, &tangle);
}

fn report(label: &str, a: &Polygon, b: &Polygon) {
    let out = intersect_polygons(a, b);
    let area: f64 = out.iter().map(|p| 0.5 * p.doubled_area()).sum();
    println!("{label}: {} rings, total area {area:.6}", out.len());
    for (i, ring) in out.iter().enumerate() {
        println!("  ring {i}: {} vertices", ring.len());
    }
}
