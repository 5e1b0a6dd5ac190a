//! Emission patterns - where particles come from for each kind of feature
//!
//! Pinch: one point between thumb and index tips, activation is the tip
//! distance in normalized image units.
//! Mouth fan: a row of points between the mouth corners, activation is the
//! lip gap relative to the mouth width.

use crate::domain::config::PatternConfig;

use super::{FeatureSample, PixelPoint, Point, Viewport};

/// Geometry measured for one sample, in display pixels
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Measurement {
    pub activation: f32,
    pub key_points: Vec<PixelPoint>,
    pub segments: Vec<(PixelPoint, PixelPoint)>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum EmissionPattern {
    Pinch,
    MouthFan {
        min_points: u32,
        spacing_px: f32,
        inward_offset: f32,
    },
}

impl EmissionPattern {
    pub fn from_config(config: &PatternConfig) -> Self {
        match *config {
            PatternConfig::Pinch => EmissionPattern::Pinch,
            PatternConfig::MouthFan { min_points, spacing_px, inward_offset } => {
                EmissionPattern::MouthFan { min_points, spacing_px, inward_offset }
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EmissionPattern::Pinch => "pinch",
            EmissionPattern::MouthFan { .. } => "mouth_fan",
        }
    }

    pub fn accepts(&self, sample: &FeatureSample) -> bool {
        matches!(
            (self, sample),
            (EmissionPattern::Pinch, FeatureSample::Pinch { .. })
                | (EmissionPattern::MouthFan { .. }, FeatureSample::Mouth { .. })
        )
    }

    /// Radius of the marker drawn at each emission point in the debug view
    pub fn marker_radius(&self) -> i32 {
        match self {
            EmissionPattern::Pinch => 10,
            EmissionPattern::MouthFan { .. } => 3,
        }
    }

    /// Activation and debug geometry. `None` when the sample kind does not
    /// belong to this pattern.
    pub fn measure(&self, sample: &FeatureSample, viewport: &Viewport) -> Option<Measurement> {
        if !self.accepts(sample) {
            return None;
        }
        match *sample {
            FeatureSample::Pinch { thumb, index, .. } => {
                let t = viewport.to_pixel(thumb);
                let i = viewport.to_pixel(index);
                Some(Measurement {
                    activation: thumb.distance(index),
                    key_points: vec![t, i],
                    segments: vec![(t, i)],
                })
            }
            FeatureSample::Mouth { upper_lip, lower_lip, left_corner, right_corner, .. } => {
                let mouth = MouthPixels::new(viewport, upper_lip, lower_lip, left_corner, right_corner);
                Some(Measurement {
                    activation: mouth.opening_ratio(),
                    key_points: vec![mouth.upper, mouth.lower],
                    segments: vec![(mouth.left, mouth.right), (mouth.upper, mouth.lower)],
                })
            }
        }
    }

    /// Pixel positions to drop particles at, appended to `out`
    pub fn emission_points(&self, sample: &FeatureSample, viewport: &Viewport, out: &mut Vec<Point>) {
        match (self, *sample) {
            (EmissionPattern::Pinch, FeatureSample::Pinch { thumb, index, .. }) => {
                let mid = Point::new((thumb.x + index.x) / 2.0, (thumb.y + index.y) / 2.0);
                out.push(Point::new(
                    mid.x * viewport.width as f32,
                    mid.y * viewport.height as f32,
                ));
            }
            (
                EmissionPattern::MouthFan { min_points, spacing_px, inward_offset },
                FeatureSample::Mouth { upper_lip, lower_lip, left_corner, right_corner, .. },
            ) => {
                let mouth = MouthPixels::new(viewport, upper_lip, lower_lip, left_corner, right_corner);
                let width = mouth.width();
                // At most one point per display pixel, however far out the corners sit
                let count = (*min_points)
                    .max((width / spacing_px) as u32)
                    .min(viewport.width.max(1));
                let offset_y = (mouth.opening() * inward_offset) as i32;

                let (lx, ly) = (mouth.left.0 as f32, mouth.left.1 as f32);
                let (rx, ry) = (mouth.right.0 as f32, mouth.right.1 as f32);
                for i in 0..count {
                    let t = if count > 1 { i as f32 / (count - 1) as f32 } else { 0.5 };
                    let px = (lx + t * (rx - lx)) as i32;
                    let py = ((ly + t * (ry - ly)) as i32).saturating_add(offset_y);
                    out.push(Point::new(px as f32, py as f32));
                }
            }
            _ => {}
        }
    }
}

/// Mouth landmarks snapped to integer display pixels
struct MouthPixels {
    upper: PixelPoint,
    lower: PixelPoint,
    left: PixelPoint,
    right: PixelPoint,
}

impl MouthPixels {
    fn new(viewport: &Viewport, upper: Point, lower: Point, left: Point, right: Point) -> Self {
        Self {
            upper: viewport.to_pixel(upper),
            lower: viewport.to_pixel(lower),
            left: viewport.to_pixel(left),
            right: viewport.to_pixel(right),
        }
    }

    fn opening(&self) -> f32 {
        pixel_distance(self.upper, self.lower)
    }

    fn width(&self) -> f32 {
        pixel_distance(self.left, self.right)
    }

    /// Lip gap over mouth width; a collapsed width reads as a closed mouth
    fn opening_ratio(&self) -> f32 {
        let width = self.width();
        if width > 0.0 {
            self.opening() / width
        } else {
            0.0
        }
    }
}

#[inline]
fn pixel_distance(a: PixelPoint, b: PixelPoint) -> f32 {
    let dx = a.0 as f32 - b.0 as f32;
    let dy = a.1 as f32 - b.1 as f32;
    (dx * dx + dy * dy).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(800, 600, 10, 80, 60)
    }

    fn fan() -> EmissionPattern {
        EmissionPattern::MouthFan { min_points: 5, spacing_px: 8.0, inward_offset: 0.2 }
    }

    fn mouth(left_x: f32, right_x: f32, gap: f32) -> FeatureSample {
        FeatureSample::Mouth {
            face: 0,
            upper_lip: Point::new(0.5, 0.5),
            lower_lip: Point::new(0.5, 0.5 + gap),
            left_corner: Point::new(left_x, 0.5),
            right_corner: Point::new(right_x, 0.5),
        }
    }

    #[test]
    fn pinch_activation_is_normalized_tip_distance() {
        let sample = FeatureSample::Pinch {
            hand: 0,
            thumb: Point::new(0.5, 0.5),
            index: Point::new(0.53125, 0.5),
        };
        let m = EmissionPattern::Pinch.measure(&sample, &viewport()).unwrap();
        assert_eq!(m.activation, 0.03125);
        assert_eq!(m.key_points, vec![(400, 300), (425, 300)]);

        let mut points = Vec::new();
        EmissionPattern::Pinch.emission_points(&sample, &viewport(), &mut points);
        assert_eq!(points, vec![Point::new(412.5, 300.0)]);
    }

    #[test]
    fn mouth_ratio_uses_pixel_geometry() {
        // corners 350..450px wide, lips 300 and 318 (318.75 truncated)
        let m = fan().measure(&mouth(0.4375, 0.5625, 0.03125), &viewport()).unwrap();
        assert!((m.activation - 0.18).abs() < 1e-5);
        assert_eq!(m.key_points, vec![(400, 300), (400, 318)]);
        assert_eq!(m.segments.len(), 2);
    }

    #[test]
    fn collapsed_mouth_reads_as_closed() {
        let m = fan().measure(&mouth(0.5, 0.5, 0.0625), &viewport()).unwrap();
        assert_eq!(m.activation, 0.0);
    }

    #[test]
    fn wide_mouth_gets_one_point_per_spacing() {
        let mut points = Vec::new();
        fan().emission_points(&mouth(0.4375, 0.5625, 0.03125), &viewport(), &mut points);
        // 100px / 8 = 12 points, corners inclusive, shifted down by int(18 * 0.2) = 3
        assert_eq!(points.len(), 12);
        assert_eq!(points[0], Point::new(350.0, 303.0));
        assert_eq!(points[11], Point::new(450.0, 303.0));
    }

    #[test]
    fn narrow_mouth_still_gets_minimum_points() {
        let mut points = Vec::new();
        fan().emission_points(&mouth(0.484375, 0.515625, 0.03125), &viewport(), &mut points);
        assert_eq!(points.len(), 5);
    }

    #[test]
    fn single_point_fan_sits_at_the_middle() {
        let pattern = EmissionPattern::MouthFan { min_points: 1, spacing_px: 1000.0, inward_offset: 0.0 };
        let mut points = Vec::new();
        pattern.emission_points(&mouth(0.4375, 0.5625, 0.03125), &viewport(), &mut points);
        assert_eq!(points, vec![Point::new(400.0, 300.0)]);
    }

    #[test]
    fn mismatched_sample_kind_is_ignored() {
        let sample = mouth(0.4375, 0.5625, 0.03125);
        assert!(EmissionPattern::Pinch.measure(&sample, &viewport()).is_none());
        let mut points = Vec::new();
        EmissionPattern::Pinch.emission_points(&sample, &viewport(), &mut points);
        assert!(points.is_empty());
    }

    #[test]
    fn far_out_corners_are_measured_without_overflow() {
        // Both corners saturate to the ends of the i32 pixel range
        let sample = mouth(-3.0e6, 3.0e6, 0.03125);
        let m = fan().measure(&sample, &viewport()).unwrap();
        assert!(m.activation >= 0.0 && m.activation.is_finite());

        let mut points = Vec::new();
        fan().emission_points(&sample, &viewport(), &mut points);
        assert_eq!(points.len(), 800);
    }
}
