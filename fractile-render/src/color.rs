use serde::{Deserialize, Serialize};

use fractile_core::{smooth_count, Complex, IterationResult};

/// The sentinel for captured pixels: opaque black, whatever the strategy.
pub const CAPTURED_COLOR: [u8; 4] = [0, 0, 0, 255];

/// One RGB channel of the sinusoidal loop: `sin(f·s + φ)·(255 − min) + min`
/// over the continuous escape index `s`, clamped into `[0, 255]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChannelWave {
    pub frequency: f64,
    pub phase: f64,
    /// Offset added to the wave, in `[0, 255]`; the wave's amplitude is
    /// `255 - min`, so a higher offset narrows and brightens the loop.
    pub min: u8,
}

impl ChannelWave {
    pub fn new(frequency: f64, phase: f64, min: u8) -> Self {
        Self {
            frequency,
            phase,
            min,
        }
    }

    #[inline]
    fn value(&self, s: f64) -> u8 {
        let amplitude = 255.0 - self.min as f64;
        let v = (self.frequency * s + self.phase).sin() * amplitude + self.min as f64;
        v.clamp(0.0, 255.0) as u8
    }
}

/// The closed set of color strategies.
///
/// Every strategy is a pure function of the iteration result (and the
/// pixel's plane coordinate), so pixel evaluations share no mutable state
/// and could later run in parallel without synchronization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Coloring {
    /// Two fixed constants: one for captured pixels, one for any escape.
    Flat {
        captured: [u8; 4],
        escaped: [u8; 4],
    },
    /// Phased sinusoidal loop over the smoothed escape index, one wave per
    /// RGB channel. Captured pixels are always the black sentinel; the
    /// loop never colors a capture.
    Sinusoid {
        red: ChannelWave,
        green: ChannelWave,
        blue: ChannelWave,
    },
}

impl Coloring {
    /// Black-and-white flat coloring: captured → black, escaped → white.
    pub fn flat() -> Self {
        Self::Flat {
            captured: CAPTURED_COLOR,
            escaped: [255, 255, 255, 255],
        }
    }

    /// A pleasant default loop: equal frequency per channel, phases a third
    /// of a turn apart.
    pub fn sinusoid() -> Self {
        const THIRD_TURN: f64 = 2.0 * std::f64::consts::PI / 3.0;
        Self::Sinusoid {
            red: ChannelWave::new(0.1, 0.0, 0),
            green: ChannelWave::new(0.1, THIRD_TURN, 0),
            blue: ChannelWave::new(0.1, 2.0 * THIRD_TURN, 0),
        }
    }

    /// Map one pixel's iteration result to RGBA.
    ///
    /// `_point` is the pixel's plane coordinate; neither built-in strategy
    /// consumes it, but it is part of the contract for coordinate-aware
    /// strategies. The smoothed index is computed here, lazily, only for
    /// the strategy that wants it.
    pub fn color_of(&self, result: IterationResult, _point: Complex) -> [u8; 4] {
        match (self, result) {
            (Self::Flat { captured, .. }, IterationResult::Captured) => *captured,
            (Self::Flat { escaped, .. }, IterationResult::Escaped { .. }) => *escaped,
            (Self::Sinusoid { .. }, IterationResult::Captured) => CAPTURED_COLOR,
            (
                Self::Sinusoid { red, green, blue },
                IterationResult::Escaped {
                    iterations,
                    norm_sq,
                },
            ) => {
                let s = smooth_count(iterations, norm_sq);
                [red.value(s), green.value(s), blue.value(s), 255]
            }
        }
    }
}

impl Default for Coloring {
    fn default() -> Self {
        Self::sinusoid()
    }
}
