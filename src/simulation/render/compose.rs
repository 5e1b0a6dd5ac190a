//! Render pass - composite one display frame
//!
//! Order is fixed: camera background, debug overlays, grid cells. HUD text
//! goes on top, drawn by the host. Cells come after the overlays so a
//! landmark skeleton never hides a particle.

use crate::domain::color::Rgb;
use crate::emission::{EmissionOutcome, EmissionPattern, Point, Viewport};
use crate::grid::Grid;

use super::background::CameraFrame;
use super::surface::{FrameBuffer, BG_COLOR};
use super::ViewMode;

const LANDMARK_RADIUS: i32 = 2;
const KEY_POINT_RADIUS: i32 = 3;
const SEGMENT_THICKNESS: u32 = 2;

pub(crate) struct RenderInputs<'a> {
    pub camera: Option<&'a CameraFrame>,
    pub mirror: bool,
    pub view: ViewMode,
    pub viewport: &'a Viewport,
    pub grid: &'a Grid,
    pub pattern: &'a EmissionPattern,
    pub outcomes: &'a [EmissionOutcome],
    pub landmarks: &'a [Vec<Point>],
}

pub(crate) fn compose(fb: &mut FrameBuffer, inputs: &RenderInputs) {
    draw_background(fb, inputs.camera, inputs.mirror);

    if inputs.view == ViewMode::Debug {
        draw_landmarks(fb, inputs.viewport, inputs.landmarks, inputs.mirror);
        draw_outcomes(fb, inputs.outcomes, inputs.pattern.marker_radius());
    }

    inputs.grid.render(fb, inputs.viewport.cell_size);
}

fn draw_background(fb: &mut FrameBuffer, camera: Option<&CameraFrame>, mirror: bool) {
    match camera {
        Some(frame) => frame.draw_scaled(fb, mirror),
        None => fb.fill(BG_COLOR),
    }
}

fn draw_landmarks(fb: &mut FrameBuffer, viewport: &Viewport, sets: &[Vec<Point>], mirror: bool) {
    for set in sets {
        for p in set {
            let p = if mirror { p.mirrored() } else { *p };
            let (x, y) = viewport.to_pixel(p);
            fb.fill_circle(x, y, LANDMARK_RADIUS, Rgb::RED);
        }
    }
}

fn draw_outcomes(fb: &mut FrameBuffer, outcomes: &[EmissionOutcome], marker_radius: i32) {
    for o in outcomes {
        for &(a, b) in o.measurement.segments.iter() {
            fb.draw_line(a.0, a.1, b.0, b.1, SEGMENT_THICKNESS, Rgb::YELLOW);
        }
        for &(x, y) in o.measurement.key_points.iter() {
            fb.fill_circle(x, y, KEY_POINT_RADIUS, Rgb::RED);
        }
        for &(x, y) in o.emission_points.iter() {
            fb.fill_circle(x, y, marker_radius, Rgb::GREEN);
        }
    }
}
