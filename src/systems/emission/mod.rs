//! Emission Policy - turns detected features into new particles
//!
//! Per sample: measure activation, check the threshold gate, check the
//! per-feature rate limiter, then drop one particle per emission point.
//! Every successful insertion advances the shared hue.

mod pattern;
mod rate_limit;

pub use pattern::{EmissionPattern, Measurement};
pub use rate_limit::RateLimiter;

use crate::domain::color::HueCycle;
use crate::domain::config::{EffectConfig, EmissionConfig, GateDirection};
use crate::grid::Grid;

/// Integer display pixel
pub type PixelPoint = (i32, i32);

/// Landmark position in normalized image coordinates (0..1)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn distance(self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    #[inline]
    pub fn mirrored(self) -> Point {
        Point::new(1.0 - self.x, self.y)
    }
}

/// One detected feature for one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FeatureSample {
    Pinch {
        hand: u32,
        thumb: Point,
        index: Point,
    },
    Mouth {
        face: u32,
        upper_lip: Point,
        lower_lip: Point,
        left_corner: Point,
        right_corner: Point,
    },
}

impl FeatureSample {
    pub fn feature_id(&self) -> u32 {
        match *self {
            FeatureSample::Pinch { hand, .. } => hand,
            FeatureSample::Mouth { face, .. } => face,
        }
    }

    /// Same sample seen in a horizontally flipped image
    pub fn mirrored(&self) -> FeatureSample {
        match *self {
            FeatureSample::Pinch { hand, thumb, index } => FeatureSample::Pinch {
                hand,
                thumb: thumb.mirrored(),
                index: index.mirrored(),
            },
            FeatureSample::Mouth { face, upper_lip, lower_lip, left_corner, right_corner } => {
                FeatureSample::Mouth {
                    face,
                    upper_lip: upper_lip.mirrored(),
                    lower_lip: lower_lip.mirrored(),
                    left_corner: left_corner.mirrored(),
                    right_corner: right_corner.mirrored(),
                }
            }
        }
    }
}

/// Display size plus the display-to-grid mapping
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub cell_size: u32,
    pub cols: u32,
    pub rows: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32, cell_size: u32, cols: u32, rows: u32) -> Self {
        Self { width, height, cell_size, cols, rows }
    }

    pub fn from_config(config: &EffectConfig) -> Self {
        Self::new(
            config.display_width,
            config.display_height,
            config.cell_size(),
            config.cols,
            config.rows,
        )
    }

    /// Normalized landmark to integer display pixel (truncating)
    #[inline]
    pub fn to_pixel(&self, p: Point) -> PixelPoint {
        ((p.x * self.width as f32) as i32, (p.y * self.height as f32) as i32)
    }

    /// Display pixel to grid cell, clamped into the grid
    #[inline]
    pub fn to_cell(&self, px: f32, py: f32) -> (i32, i32) {
        let cs = self.cell_size.max(1) as f32;
        let max_x = self.cols.saturating_sub(1) as i32;
        let max_y = self.rows.saturating_sub(1) as i32;
        let gx = (px / cs).floor() as i32;
        let gy = (py / cs).floor() as i32;
        (gx.clamp(0, max_x), gy.clamp(0, max_y))
    }
}

/// Threshold crossing that switches emission on
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActivationGate {
    pub direction: GateDirection,
    pub threshold: f32,
}

impl ActivationGate {
    #[inline]
    pub fn passes(&self, activation: f32) -> bool {
        match self.direction {
            GateDirection::Below => activation < self.threshold,
            GateDirection::Above => activation > self.threshold,
        }
    }
}

/// What happened to one sample this frame (feeds overlays and the HUD)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EmissionOutcome {
    pub feature_id: u32,
    pub measurement: Measurement,
    pub gate_open: bool,
    pub rate_limited: bool,
    pub inserted: u32,
    /// Pixel positions particles were dropped at (empty unless emitting)
    pub emission_points: Vec<PixelPoint>,
}

pub struct EmissionPolicy {
    pattern: EmissionPattern,
    gate: ActivationGate,
    limiter: RateLimiter,
    scratch: Vec<Point>,
}

impl EmissionPolicy {
    pub fn new(config: &EmissionConfig) -> Self {
        Self {
            pattern: EmissionPattern::from_config(&config.pattern),
            gate: ActivationGate {
                direction: config.gate,
                threshold: config.threshold,
            },
            limiter: RateLimiter::new(config.min_interval_ms),
            scratch: Vec::with_capacity(16),
        }
    }

    #[inline]
    pub fn pattern(&self) -> &EmissionPattern {
        &self.pattern
    }

    #[inline]
    pub fn limiter(&self) -> &RateLimiter {
        &self.limiter
    }

    /// Run one sample through the policy. `None` when the sample does not
    /// belong to this effect's pattern.
    pub fn emit(
        &mut self,
        sample: &FeatureSample,
        now_ms: f64,
        viewport: &Viewport,
        grid: &mut Grid,
        hue: &mut HueCycle,
    ) -> Option<EmissionOutcome> {
        let measurement = self.pattern.measure(sample, viewport)?;
        let feature_id = sample.feature_id();

        let mut outcome = EmissionOutcome {
            feature_id,
            gate_open: self.gate.passes(measurement.activation),
            measurement,
            ..EmissionOutcome::default()
        };
        if !outcome.gate_open {
            return Some(outcome);
        }
        if !self.limiter.ready(feature_id, now_ms) {
            outcome.rate_limited = true;
            return Some(outcome);
        }

        self.scratch.clear();
        self.pattern.emission_points(sample, viewport, &mut self.scratch);

        for p in self.scratch.iter() {
            outcome.emission_points.push((p.x as i32, p.y as i32));
            let (gx, gy) = viewport.to_cell(p.x, p.y);
            if grid.insert(gx, gy, hue.color()) {
                hue.advance();
                outcome.inserted += 1;
            }
        }

        if outcome.inserted > 0 {
            self.limiter.record(feature_id, now_ms);
        }
        Some(outcome)
    }
}
