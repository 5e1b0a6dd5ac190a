use crate::emission::{FeatureSample, Point};

use super::render::CameraFrame;
use super::EffectCore;

pub(super) fn push_sample(effect: &mut EffectCore, sample: FeatureSample) {
    effect.samples.push(sample);
}

pub(super) fn push_debug_landmarks(effect: &mut EffectCore, points: Vec<Point>) {
    if !points.is_empty() {
        effect.debug_landmarks.push(points);
    }
}

/// Replace the camera background. A rejected frame leaves the previous one in place.
pub(super) fn upload_camera_frame(
    effect: &mut EffectCore,
    width: u32,
    height: u32,
    rgba: &[u8],
) -> Result<(), String> {
    let frame = CameraFrame::from_rgba(width, height, rgba)?;
    effect.camera = Some(frame);
    Ok(())
}

pub(super) fn clear_camera_frame(effect: &mut EffectCore) {
    effect.camera = None;
}

/// Interleaved `[x0, y0, x1, y1, ...]` to points; a trailing odd value is ignored
pub(crate) fn points_from_flat(coords: &[f32]) -> Vec<Point> {
    coords
        .chunks_exact(2)
        .map(|xy| Point::new(xy[0], xy[1]))
        .collect()
}
