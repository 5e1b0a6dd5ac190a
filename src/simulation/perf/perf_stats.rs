use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Clone, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) commands_ms: f64,
    pub(super) emission_ms: f64,
    pub(super) settle_ms: f64,
    pub(super) render_ms: f64,
    pub(super) samples_processed: u32,
    pub(super) samples_ignored: u32,
    pub(super) particles_inserted: u32,
    pub(super) particles_moved: u32,
    pub(super) particle_count: u32,
    pub(super) grid_size: u32,
    pub(super) frame_bytes: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn commands_ms(&self) -> f64 { self.commands_ms }
    #[wasm_bindgen(getter)]
    pub fn emission_ms(&self) -> f64 { self.emission_ms }
    #[wasm_bindgen(getter)]
    pub fn settle_ms(&self) -> f64 { self.settle_ms }
    #[wasm_bindgen(getter)]
    pub fn render_ms(&self) -> f64 { self.render_ms }
    #[wasm_bindgen(getter)]
    pub fn samples_processed(&self) -> u32 { self.samples_processed }
    #[wasm_bindgen(getter)]
    pub fn samples_ignored(&self) -> u32 { self.samples_ignored }
    #[wasm_bindgen(getter)]
    pub fn particles_inserted(&self) -> u32 { self.particles_inserted }
    #[wasm_bindgen(getter)]
    pub fn particles_moved(&self) -> u32 { self.particles_moved }
    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.particle_count }
    #[wasm_bindgen(getter)]
    pub fn grid_size(&self) -> u32 { self.grid_size }
    #[wasm_bindgen(getter)]
    pub fn frame_bytes(&self) -> u32 { self.frame_bytes }
}
