use crate::domain::color::HueCycle;
use crate::domain::config::EffectConfig;
use crate::emission::{EmissionPolicy, Viewport};
use crate::grid::Grid;

use super::perf_stats::PerfStats;
use super::render::{FrameBuffer, ViewMode};
use super::EffectCore;

pub(super) fn create_effect_core(config: EffectConfig) -> Result<EffectCore, String> {
    config.validate()?;

    let viewport = Viewport::from_config(&config);
    let view = if config.start_in_debug_view { ViewMode::Debug } else { ViewMode::Clean };
    let emission = EmissionPolicy::new(&config.emission);

    log::info!(
        "effect created: {}x{} grid, {}px cells, {} pattern",
        config.cols,
        config.rows,
        viewport.cell_size,
        emission.pattern().name()
    );

    Ok(EffectCore {
        grid: Grid::new(config.cols, config.rows),
        hue: HueCycle::new(config.emission.hue_step),
        emission,
        frame_buffer: FrameBuffer::new(config.display_width, config.display_height),
        viewport,
        view,
        running: true,
        paused: false,
        frame: 0,

        pending_commands: Vec::with_capacity(4),
        samples: Vec::with_capacity(4),
        debug_landmarks: Vec::new(),
        camera: None,

        outcomes: Vec::with_capacity(4),
        hud: Vec::with_capacity(8),

        perf_enabled: false,
        perf_stats: PerfStats::default(),
        config,
    })
}
