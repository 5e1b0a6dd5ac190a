use wasm_bindgen::prelude::*;

use crate::domain::config::EffectConfig;
use crate::emission::{FeatureSample, Point};

use super::input::points_from_flat;
use super::perf_stats::PerfStats;
use super::render::ViewMode;
use super::EffectCore;

#[wasm_bindgen]
pub struct Effect {
    core: EffectCore,
}

#[wasm_bindgen]
impl Effect {
    /// Create an effect from a named preset ("hand_sand" or "mouth_rainbow")
    #[wasm_bindgen(constructor)]
    pub fn new(preset: &str) -> Result<Effect, JsValue> {
        let core = EffectCore::from_preset(preset).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self { core })
    }

    /// Create an effect from a JSON configuration; missing fields take hand_sand defaults
    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: &str) -> Result<Effect, JsValue> {
        let core = EffectCore::from_config_json(json).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self { core })
    }

    /// Active configuration as JSON
    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }

    #[wasm_bindgen(getter)]
    pub fn cols(&self) -> u32 { self.core.cols() }

    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> u32 { self.core.rows() }

    #[wasm_bindgen(getter)]
    pub fn cell_size(&self) -> u32 { self.core.cell_size() }

    #[wasm_bindgen(getter)]
    pub fn display_width(&self) -> u32 { self.core.frame_buffer().width() }

    #[wasm_bindgen(getter)]
    pub fn display_height(&self) -> u32 { self.core.frame_buffer().height() }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.core.particle_count() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn hue(&self) -> u16 { self.core.hue() }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool { self.core.running() }

    #[wasm_bindgen(getter)]
    pub fn paused(&self) -> bool { self.core.paused() }

    #[wasm_bindgen(getter)]
    pub fn debug_view(&self) -> bool { self.core.view() == ViewMode::Debug }

    pub fn set_debug_view(&mut self, enabled: bool) {
        self.core.set_view(if enabled { ViewMode::Debug } else { ViewMode::Clean });
    }

    pub fn set_mirror(&mut self, mirror: bool) {
        self.core.set_mirror(mirror);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    // === INPUT ===

    /// Thumb tip and index tip of one hand, normalized to [0, 1]
    pub fn push_pinch(&mut self, hand: u32, thumb_x: f32, thumb_y: f32, index_x: f32, index_y: f32) {
        self.core.push_sample(FeatureSample::Pinch {
            hand,
            thumb: Point::new(thumb_x, thumb_y),
            index: Point::new(index_x, index_y),
        });
    }

    /// Lip landmarks of one face, normalized to [0, 1].
    /// `lips` is `[upper_x, upper_y, lower_x, lower_y, left_x, left_y, right_x, right_y]`.
    pub fn push_mouth(&mut self, face: u32, lips: &[f32]) -> Result<(), JsValue> {
        if lips.len() != 8 {
            return Err(JsValue::from_str(&format!(
                "mouth sample needs 8 coordinates, got {}",
                lips.len()
            )));
        }
        self.core.push_sample(FeatureSample::Mouth {
            face,
            upper_lip: Point::new(lips[0], lips[1]),
            lower_lip: Point::new(lips[2], lips[3]),
            left_corner: Point::new(lips[4], lips[5]),
            right_corner: Point::new(lips[6], lips[7]),
        });
        Ok(())
    }

    /// Landmark dots for the debug view, as interleaved normalized `[x, y, ...]`
    pub fn push_debug_landmarks(&mut self, coords: &[f32]) {
        self.core.push_debug_landmarks(points_from_flat(coords));
    }

    /// RGBA8 camera frame; scaled to the display when composited
    pub fn upload_camera_frame(&mut self, width: u32, height: u32, rgba: &[u8]) -> Result<(), JsValue> {
        self.core
            .upload_camera_frame(width, height, rgba)
            .map_err(|e| JsValue::from_str(&e))
    }

    pub fn clear_camera_frame(&mut self) {
        self.core.clear_camera_frame();
    }

    /// Queue the command bound to `key`. Returns false for unbound keys.
    pub fn handle_key(&mut self, key: &str) -> bool {
        self.core.handle_key(key)
    }

    // === FRAME ===

    /// Advance one frame at host time `now_ms`. Returns false once quit.
    pub fn step(&mut self, now_ms: f64) -> bool {
        self.core.step(now_ms)
    }

    /// Advance one frame using the engine clock
    pub fn step_now(&mut self) -> bool {
        self.core.step_now()
    }

    /// Pointer to the ABGR frame buffer in wasm memory
    pub fn frame_ptr(&self) -> *const u32 {
        self.core.frame_buffer().as_ptr()
    }

    /// Frame buffer length in pixels
    pub fn frame_len(&self) -> usize {
        self.core.frame_buffer().pixels().len()
    }

    pub fn frame_byte_len(&self) -> usize {
        self.frame_len() * 4
    }

    /// `0xRRGGBB` of the particle at (x, y), or -1 when empty or out of range
    pub fn cell_color(&self, x: i32, y: i32) -> i32 {
        match self.core.grid().get(x, y) {
            Some(c) => c.to_rgb_hex() as i32,
            None => -1,
        }
    }

    // === HUD ===

    pub fn hud_line_count(&self) -> usize {
        self.core.hud_lines().len()
    }

    pub fn hud_line_text(&self, i: usize) -> String {
        self.core.hud_lines().get(i).map(|l| l.text.clone()).unwrap_or_default()
    }

    pub fn hud_line_x(&self, i: usize) -> i32 {
        self.core.hud_lines().get(i).map_or(0, |l| l.x)
    }

    pub fn hud_line_y(&self, i: usize) -> i32 {
        self.core.hud_lines().get(i).map_or(0, |l| l.y)
    }

    /// `0xRRGGBB`
    pub fn hud_line_color(&self, i: usize) -> u32 {
        self.core.hud_lines().get(i).map_or(0, |l| l.color.to_rgb_hex())
    }

    pub fn hud_line_size(&self, i: usize) -> u32 {
        self.core.hud_lines().get(i).map_or(0, |l| l.size_px)
    }
}

impl Effect {
    /// Native constructor for hosts that build the configuration in Rust
    pub fn with_config(config: EffectConfig) -> Result<Effect, String> {
        Ok(Self { core: EffectCore::new(config)? })
    }

    pub fn core(&self) -> &EffectCore {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut EffectCore {
        &mut self.core
    }
}
