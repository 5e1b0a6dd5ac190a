//! HUD text - what the host should draw on top of the frame
//!
//! The engine does not rasterize fonts; it decides content, placement and
//! color, and the host draws the lines after blitting the frame buffer.

use crate::domain::color::Rgb;
use crate::emission::{EmissionOutcome, EmissionPattern};

use super::ViewMode;

pub const TITLE_SIZE_PX: u32 = 36;
pub const TEXT_SIZE_PX: u32 = 24;
const TOP_LINE_STEP_PX: i32 = 40;

#[derive(Clone, Debug, PartialEq)]
pub struct HudLine {
    pub text: String,
    pub x: i32,
    pub y: i32,
    pub color: Rgb,
    pub size_px: u32,
}

impl HudLine {
    fn new(text: impl Into<String>, x: i32, y: i32, color: Rgb, size_px: u32) -> Self {
        Self { text: text.into(), x, y, color, size_px }
    }
}

pub(crate) fn build_hud(
    out: &mut Vec<HudLine>,
    view: ViewMode,
    pattern: &EmissionPattern,
    outcomes: &[EmissionOutcome],
    paused: bool,
    display_height: u32,
) {
    out.clear();
    let h = display_height as i32;
    // Top-left block grows downward; instructions are anchored to the bottom
    let mut top_y = 10;

    match view {
        ViewMode::Clean => {
            out.push(HudLine::new(
                "Clean View - Press V to toggle debug view",
                10,
                top_y,
                Rgb::WHITE,
                TEXT_SIZE_PX,
            ));
            top_y += TOP_LINE_STEP_PX;
        }
        ViewMode::Debug => {
            if let Some(first) = outcomes.first() {
                let activation = first.measurement.activation;
                let (metric, prompt, how_to) = match pattern {
                    EmissionPattern::Pinch => (
                        format!("Pinch Distance: {:.3}", activation),
                        "Pinch thumb and index finger to pour sand",
                        "- Pinch thumb and index finger to pour rainbow sand",
                    ),
                    EmissionPattern::MouthFan { .. } => (
                        format!("Mouth Opening: {:.2}", activation),
                        "Open your mouth to generate particles",
                        "- Open your mouth to create rainbow particles",
                    ),
                };

                out.push(HudLine::new(metric, 10, top_y, Rgb::WHITE, TITLE_SIZE_PX));
                top_y += TOP_LINE_STEP_PX;
                if outcomes.iter().any(|o| o.gate_open) {
                    out.push(HudLine::new("Generating particles!", 10, top_y, Rgb::GREEN, TEXT_SIZE_PX));
                } else {
                    out.push(HudLine::new(prompt, 10, top_y, Rgb::YELLOW, TEXT_SIZE_PX));
                }
                top_y += TOP_LINE_STEP_PX;

                let instructions = [
                    "Instructions:",
                    how_to,
                    "- Particles will fall like sand and stay in the screen",
                    "- Press ESC to exit, C to clear, V to toggle view",
                ];
                for (i, text) in instructions.iter().enumerate() {
                    let y = h - 100 + 20 * i as i32;
                    out.push(HudLine::new(*text, 10, y, Rgb::LIGHT_GRAY, TEXT_SIZE_PX));
                }
            }
        }
    }

    if paused {
        out.push(HudLine::new("Paused - Press SPACE to resume", 10, top_y, Rgb::WHITE, TEXT_SIZE_PX));
    }
}
