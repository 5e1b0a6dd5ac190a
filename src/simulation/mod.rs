//! Effect - one running gesture-driven sand effect
//!
//! EffectCore owns everything that lives across frames: the grid, the
//! rolling hue, the emission policy with its rate limits, the view state
//! and the frame buffer. The host drives it one frame at a time:
//!
//! 1. upload a camera frame, push detected features and key presses
//! 2. `step(now_ms)`: apply commands, emit, settle once, render
//! 3. read the frame buffer and HUD lines
//!
//! Emission lives in systems/emission, the grid in spatial/grid,
//! compositing in render/.

use crate::domain::color::HueCycle;
use crate::domain::config::EffectConfig;
use crate::emission::{EmissionOutcome, EmissionPolicy, FeatureSample, Point, Viewport};
use crate::grid::Grid;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "commands/commands.rs"]
mod commands;
#[path = "input/input.rs"]
mod input;
#[path = "step/step.rs"]
mod step;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
pub mod render;
mod facade;

pub use commands::Command;
pub use facade::Effect;
pub use perf_stats::PerfStats;
pub use render::{CameraFrame, FrameBuffer, HudLine, ViewMode};

use perf_timer::PerfTimer;

/// The simulation context for one effect
pub struct EffectCore {
    config: EffectConfig,
    viewport: Viewport,
    grid: Grid,
    hue: HueCycle,
    emission: EmissionPolicy,

    // State
    view: ViewMode,
    running: bool,
    paused: bool,
    frame: u64,

    // Per-frame input, consumed by `step`
    pending_commands: Vec<Command>,
    samples: Vec<FeatureSample>,
    debug_landmarks: Vec<Vec<Point>>,
    camera: Option<CameraFrame>,

    // Per-frame output
    outcomes: Vec<EmissionOutcome>,
    frame_buffer: FrameBuffer,
    hud: Vec<HudLine>,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl EffectCore {
    /// Create an effect from a validated configuration
    pub fn new(config: EffectConfig) -> Result<Self, String> {
        init::create_effect_core(config)
    }

    pub fn from_preset(name: &str) -> Result<Self, String> {
        Self::new(EffectConfig::preset(name)?)
    }

    pub fn from_config_json(json: &str) -> Result<Self, String> {
        Self::new(EffectConfig::from_json(json)?)
    }

    pub fn config(&self) -> &EffectConfig { &self.config }

    pub fn viewport(&self) -> &Viewport { &self.viewport }

    pub fn grid(&self) -> &Grid { &self.grid }

    pub fn cols(&self) -> u32 { self.grid.cols() }

    pub fn rows(&self) -> u32 { self.grid.rows() }

    pub fn cell_size(&self) -> u32 { self.viewport.cell_size }

    pub fn particle_count(&self) -> u32 { self.grid.occupied_count() as u32 }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn hue(&self) -> u16 { self.hue.hue() }

    pub fn view(&self) -> ViewMode { self.view }

    pub fn running(&self) -> bool { self.running }

    pub fn paused(&self) -> bool { self.paused }

    pub fn emission(&self) -> &EmissionPolicy { &self.emission }

    /// Outcomes of the samples processed by the last step
    pub fn outcomes(&self) -> &[EmissionOutcome] { &self.outcomes }

    pub fn hud_lines(&self) -> &[HudLine] { &self.hud }

    pub fn frame_buffer(&self) -> &FrameBuffer { &self.frame_buffer }

    // === Settings ===

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    pub fn set_view(&mut self, view: ViewMode) {
        settings::set_view(self, view);
    }

    pub fn set_mirror(&mut self, mirror: bool) {
        settings::set_mirror(self, mirror);
    }

    // === Input ===

    pub fn push_sample(&mut self, sample: FeatureSample) {
        input::push_sample(self, sample);
    }

    /// Landmark set drawn as dots in the debug view (normalized coordinates)
    pub fn push_debug_landmarks(&mut self, points: Vec<Point>) {
        input::push_debug_landmarks(self, points);
    }

    pub fn upload_camera_frame(&mut self, width: u32, height: u32, rgba: &[u8]) -> Result<(), String> {
        input::upload_camera_frame(self, width, height, rgba)
    }

    pub fn clear_camera_frame(&mut self) {
        input::clear_camera_frame(self);
    }

    /// Queue a command; applied at the start of the next step
    pub fn queue_command(&mut self, command: Command) {
        commands::queue_command(self, command);
    }

    /// Map a key name to a command and queue it. Returns false for unbound keys.
    pub fn handle_key(&mut self, key: &str) -> bool {
        commands::handle_key(self, key)
    }

    // === Frame ===

    /// Advance one frame. Returns false once the effect has been quit.
    pub fn step(&mut self, now_ms: f64) -> bool {
        step::step(self, now_ms)
    }

    /// Advance one frame using the engine's own clock
    pub fn step_now(&mut self) -> bool {
        step::step(self, perf_timer::now_ms())
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
