//! Effect configuration - presets and JSON loading
//!
//! Mirrors the content bundle flow: parse with serde_json, then validate,
//! reporting problems as plain strings.

use serde::{Deserialize, Serialize};

pub const PRESET_HAND_SAND: &str = "hand_sand";
pub const PRESET_MOUTH_RAINBOW: &str = "mouth_rainbow";

/// Which side of the threshold activates emission
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateDirection {
    /// Activation must be strictly below the threshold (pinch closes)
    Below,
    /// Activation must be strictly above the threshold (mouth opens)
    Above,
}

/// Emission point generation strategy
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PatternConfig {
    /// One point at the thumb/index midpoint
    Pinch,
    /// Points spread between the mouth corners
    MouthFan {
        min_points: u32,
        spacing_px: f32,
        inward_offset: f32,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmissionConfig {
    pub pattern: PatternConfig,
    pub gate: GateDirection,
    pub threshold: f32,
    pub min_interval_ms: f64,
    pub hue_step: u16,
}

impl Default for EmissionConfig {
    fn default() -> Self {
        Self {
            pattern: PatternConfig::Pinch,
            gate: GateDirection::Below,
            threshold: 0.05,
            min_interval_ms: 10.0,
            hue_step: 1,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectConfig {
    pub display_width: u32,
    pub display_height: u32,
    pub cols: u32,
    pub rows: u32,
    /// Flip the camera background and incoming landmarks horizontally
    pub mirror: bool,
    pub start_in_debug_view: bool,
    pub emission: EmissionConfig,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self::hand_sand()
    }
}

impl EffectConfig {
    pub fn hand_sand() -> Self {
        Self {
            display_width: 800,
            display_height: 600,
            cols: 80,
            rows: 60,
            mirror: true,
            start_in_debug_view: true,
            emission: EmissionConfig::default(),
        }
    }

    pub fn mouth_rainbow() -> Self {
        Self {
            display_width: 800,
            display_height: 600,
            cols: 80,
            rows: 60,
            mirror: true,
            start_in_debug_view: false,
            emission: EmissionConfig {
                pattern: PatternConfig::MouthFan {
                    min_points: 5,
                    spacing_px: 8.0,
                    inward_offset: 0.2,
                },
                gate: GateDirection::Above,
                threshold: 0.12,
                min_interval_ms: 15.0,
                hue_step: 3,
            },
        }
    }

    pub fn preset(name: &str) -> Result<Self, String> {
        match name {
            PRESET_HAND_SAND => Ok(Self::hand_sand()),
            PRESET_MOUTH_RAINBOW => Ok(Self::mouth_rainbow()),
            other => Err(format!(
                "unknown preset '{}' (expected '{}' or '{}')",
                other, PRESET_HAND_SAND, PRESET_MOUTH_RAINBOW
            )),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: EffectConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Pixel edge of one grid cell (display width / cols, integer division)
    #[inline]
    pub fn cell_size(&self) -> u32 {
        if self.cols == 0 {
            0
        } else {
            self.display_width / self.cols
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.cols == 0 || self.rows == 0 {
            return Err(format!("grid must be non-empty, got {}x{}", self.cols, self.rows));
        }
        if self.display_width == 0 || self.display_height == 0 {
            return Err(format!(
                "display must be non-empty, got {}x{}",
                self.display_width, self.display_height
            ));
        }
        if self.display_width < self.cols {
            return Err(format!(
                "display width {} is narrower than {} columns",
                self.display_width, self.cols
            ));
        }
        // The floor row has to be on screen
        let grid_height_px = self.rows.checked_mul(self.cell_size());
        if grid_height_px.map_or(true, |px| px > self.display_height) {
            return Err(format!(
                "{} rows of {}px cells do not fit a {}px tall display",
                self.rows,
                self.cell_size(),
                self.display_height
            ));
        }

        let e = &self.emission;
        if !e.threshold.is_finite() {
            return Err("emission threshold must be finite".to_string());
        }
        if !e.min_interval_ms.is_finite() || e.min_interval_ms < 0.0 {
            return Err(format!("min_interval_ms must be >= 0, got {}", e.min_interval_ms));
        }
        if let PatternConfig::MouthFan { min_points, spacing_px, inward_offset } = &e.pattern {
            if *min_points == 0 || *min_points > self.display_width {
                return Err(format!(
                    "mouth_fan.min_points must be in 1..={}, got {}",
                    self.display_width, min_points
                ));
            }
            if !spacing_px.is_finite() || *spacing_px <= 0.0 {
                return Err(format!("mouth_fan.spacing_px must be > 0, got {}", spacing_px));
            }
            if !inward_offset.is_finite() {
                return Err("mouth_fan.inward_offset must be finite".to_string());
            }
        }
        Ok(())
    }
}
