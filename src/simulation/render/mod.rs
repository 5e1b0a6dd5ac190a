//! Render - frame buffer compositing and HUD content

mod background;
mod compose;
mod hud;
mod surface;

pub use background::CameraFrame;
pub use hud::{HudLine, TEXT_SIZE_PX, TITLE_SIZE_PX};
pub use surface::{FrameBuffer, Surface};

pub(crate) use compose::{compose, RenderInputs};
pub(crate) use hud::build_hud;

/// Which overlays are drawn; never affects the simulation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewMode {
    Clean,
    Debug,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Clean => ViewMode::Debug,
            ViewMode::Debug => ViewMode::Clean,
        }
    }
}
