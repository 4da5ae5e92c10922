use serde::{Deserialize, Serialize};

use crate::complex::Complex;

/// Squared escape radius. An orbit has escaped once `|z|² > 4`, i.e. once
/// `|z|` exceeds 2 — past that the Mandelbrot-family maps diverge.
pub const ESCAPE_RADIUS_SQ: f64 = 4.0;

/// The result of iterating a single seed.
///
/// Only raw iteration data is stored; the continuous refinement
/// ([`smooth_count`]) is computed lazily by color strategies that want it,
/// keeping the hot loop lean.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IterationResult {
    /// The orbit escaped after `iterations` applications of the map
    /// (1-based). `norm_sq` is `|z|²` at the moment of escape.
    Escaped { iterations: u32, norm_sq: f64 },

    /// The iteration budget ran out without the orbit escaping.
    Captured,
}

/// The closed set of iteration maps.
///
/// A tagged enum rather than a stored callable: the renderer dispatches
/// with a plain match, the compiler can inline each arm, and configuration
/// stays serializable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IterateMap {
    /// `z ← z² + c`
    #[default]
    Mandelbrot,
    /// `z ← z³ + c`
    Cubic,
    /// `z ← (|Re z| + i·|Im z|)² + c`
    BurningShip,
}

impl IterateMap {
    pub fn label(self) -> &'static str {
        match self {
            Self::Mandelbrot => "mandelbrot",
            Self::Cubic => "cubic",
            Self::BurningShip => "burning-ship",
        }
    }

    /// One application of the map.
    #[inline]
    pub fn step(self, z: Complex, seed: Complex) -> Complex {
        match self {
            Self::Mandelbrot => z * z + seed,
            Self::Cubic => z * z * z + seed,
            Self::BurningShip => {
                let folded = Complex::new(z.re.abs(), z.im.abs());
                folded * folded + seed
            }
        }
    }

    /// Iterate from `z₀ = 0`, bounded by `max_iterations`.
    ///
    /// The escape test runs strictly **after** each application — the
    /// pre-seed `z = 0` is never tested — and the returned count is the
    /// number of completed applications, so seed `(3, 0)` escapes at
    /// iteration 1. Terminates in at most `max_iterations` steps.
    pub fn iterate(self, seed: Complex, max_iterations: u32) -> IterationResult {
        let mut z = Complex::ZERO;
        for n in 1..=max_iterations {
            z = self.step(z, seed);
            let norm_sq = z.norm_sq();
            if norm_sq > ESCAPE_RADIUS_SQ {
                return IterationResult::Escaped {
                    iterations: n,
                    norm_sq,
                };
            }
        }
        IterationResult::Captured
    }
}

/// Continuous (smoothed) escape index for banding-free coloring.
///
/// Standard normalized iteration count: `n + 1 − ln(ln|z|) / ln 2`, a pure
/// function of the raw count and the squared escape magnitude. Degenerate
/// logs (`|z| ≤ 1`) fall back to the raw count, and the index is floored at
/// zero so first-iteration escapes of far seeds stay in range.
pub fn smooth_count(iterations: u32, norm_sq: f64) -> f64 {
    let log_z = norm_sq.ln() * 0.5; // ln|z|
    if log_z <= 0.0 {
        return iterations as f64;
    }
    (iterations as f64 + 1.0 - log_z.ln() / std::f64::consts::LN_2).max(0.0)
}
