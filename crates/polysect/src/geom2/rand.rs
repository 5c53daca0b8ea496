//! Random polygons in 2D (radial jitter + replay tokens).
//!
//! Purpose
//! - Deterministic samplers for benches, property tests and demos: simple
//!   star-shaped loops and self-intersecting "tangles" derived from them.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular and
//!   radial jitter, sort by angle and emit the loop (counterclockwise, simple).
//! - A tangle visits the same vertices in the order `k·step mod n`.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{Point, Polygon};

/// How many vertices a star gets. Counts below 3 are raised to 3.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    /// Inclusive range, drawn uniformly per star.
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn draw(self, rng: &mut StdRng) -> usize {
        let (lo, hi) = match self {
            VertexCount::Fixed(n) => (n, n),
            VertexCount::Uniform { min, max } => (min, max),
        };
        let lo = lo.max(3);
        if hi <= lo {
            lo
        } else {
            rng.gen_range(lo..=hi)
        }
    }
}

/// Shape of a random star: jittered angles around `center`, jittered radii.
#[derive(Clone, Copy, Debug)]
pub struct StarCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radii = `base_radius * (1 + u)`, with `u∈[-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    pub base_radius: f64,
    /// Rotate the whole star by a random angle.
    pub random_phase: bool,
    pub center: Vector2<f64>,
}
impl Default for StarCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 1.0,
            random_phase: true,
            center: Vector2::zeros(),
        }
    }
}

/// Names one star: `(seed, index)` always yields the same polygon, and
/// neighbouring indices give unrelated ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    fn rng(self) -> StdRng {
        let k = splitmix(self.seed ^ splitmix(self.index.wrapping_add(GOLDEN_GAMMA)));
        StdRng::seed_from_u64(k)
    }
}

const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

/// SplitMix64 finalizer.
fn splitmix(x: u64) -> u64 {
    let x = (x ^ (x >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    let x = (x ^ (x >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    x ^ (x >> 31)
}

/// Draw a simple star-shaped polygon around `cfg.center` (counterclockwise).
pub fn draw_star(cfg: StarCfg, tok: ReplayToken) -> Polygon {
    let mut rng = tok.rng();
    let n = cfg.vertex_count.draw(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.9);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = 2.0 * std::f64::consts::PI / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * 2.0 * std::f64::consts::PI
    } else {
        0.0
    };
    let mut angles: Vec<f64> = (0..n)
        .map(|k| {
            let base = phase + (k as f64) * delta;
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            base + jitter
        })
        .collect();
    angles.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let v: Vec<Point> = angles
        .into_iter()
        .map(|th| {
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u) * r0;
            cfg.center + Vector2::new(th.cos() * r, th.sin() * r)
        })
        .collect();
    Polygon::new(v)
}

/// Draw a star and reorder its vertices as `k·step mod n`.
///
/// For `step` coprime to `n` and `1 < step < n − 1` the loop crosses itself;
/// `step = 1` returns the star unchanged. Non-coprime steps are bumped to the
/// next coprime value so that every vertex is visited exactly once.
pub fn draw_tangle(cfg: StarCfg, tok: ReplayToken, step: usize) -> Polygon {
    let star = draw_star(cfg, tok);
    let n = star.len();
    let mut s = step.max(1) % n;
    while s == 0 || gcd(s, n) != 1 {
        s = (s + 1) % n;
    }
    Polygon::new((0..n).map(|k| star.v[(k * s) % n]).collect())
}

fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}
