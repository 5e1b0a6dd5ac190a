//! Color Generator - rolling hue to saturated RGB
//!
//! Colors are stored as plain RGB triples inside the grid and packed to
//! ABGR only when written into the frame buffer.

use serde::{Deserialize, Serialize};

/// 8-bit RGB triple
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    pub const YELLOW: Rgb = Rgb::new(255, 255, 0);
    pub const LIGHT_GRAY: Rgb = Rgb::new(200, 200, 200);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pack as opaque ABGR (little-endian bytes: [R, G, B, A]) for canvas ImageData
    #[inline]
    pub const fn to_abgr(self) -> u32 {
        0xFF00_0000 | ((self.b as u32) << 16) | ((self.g as u32) << 8) | (self.r as u32)
    }

    #[inline]
    pub const fn from_abgr(packed: u32) -> Self {
        Self {
            r: (packed & 0xFF) as u8,
            g: ((packed >> 8) & 0xFF) as u8,
            b: ((packed >> 16) & 0xFF) as u8,
        }
    }

    /// 0xRRGGBB, the form handed to JS for HUD text colors
    #[inline]
    pub const fn to_rgb_hex(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }
}

/// HSV (h in degrees, s and v in 0..1) to RGB.
///
/// `h` is wrapped into 0..360 first; channels are truncated, not rounded.
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Rgb {
    let h = h.rem_euclid(360.0);
    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    let channel = |f: f32| ((f + m) * 255.0).clamp(0.0, 255.0) as u8;
    Rgb::new(channel(r), channel(g), channel(b))
}

/// Rolling hue shared by every emitter of an effect
#[derive(Clone, Debug, PartialEq)]
pub struct HueCycle {
    hue: u16,
    step: u16,
}

impl HueCycle {
    pub fn new(step: u16) -> Self {
        Self { hue: 0, step: step % 360 }
    }

    #[inline]
    pub fn hue(&self) -> u16 {
        self.hue
    }

    #[inline]
    pub fn step(&self) -> u16 {
        self.step
    }

    /// Full saturation / full value color for the current hue
    #[inline]
    pub fn color(&self) -> Rgb {
        hsv_to_rgb(self.hue as f32, 1.0, 1.0)
    }

    #[inline]
    pub fn advance(&mut self) {
        self.hue = (self.hue + self.step) % 360;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_sextant_boundaries() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), Rgb::new(255, 0, 0));
        assert_eq!(hsv_to_rgb(60.0, 1.0, 1.0), Rgb::new(255, 255, 0));
        assert_eq!(hsv_to_rgb(120.0, 1.0, 1.0), Rgb::new(0, 255, 0));
        assert_eq!(hsv_to_rgb(180.0, 1.0, 1.0), Rgb::new(0, 255, 255));
        assert_eq!(hsv_to_rgb(240.0, 1.0, 1.0), Rgb::new(0, 0, 255));
        assert_eq!(hsv_to_rgb(300.0, 1.0, 1.0), Rgb::new(255, 0, 255));
    }

    #[test]
    fn hue_is_wrapped() {
        assert_eq!(hsv_to_rgb(360.0, 1.0, 1.0), hsv_to_rgb(0.0, 1.0, 1.0));
        assert_eq!(hsv_to_rgb(-120.0, 1.0, 1.0), hsv_to_rgb(240.0, 1.0, 1.0));
    }

    #[test]
    fn zero_value_is_black() {
        assert_eq!(hsv_to_rgb(200.0, 1.0, 0.0), Rgb::BLACK);
    }

    #[test]
    fn hue_cycle_wraps_at_360() {
        let mut cycle = HueCycle::new(3);
        for _ in 0..120 {
            cycle.advance();
        }
        assert_eq!(cycle.hue(), 0);
        cycle.advance();
        assert_eq!(cycle.hue(), 3);
        assert_eq!(cycle.color(), hsv_to_rgb(3.0, 1.0, 1.0));
    }

    #[test]
    fn abgr_packing_matches_canvas_byte_order() {
        let c = Rgb::new(0x11, 0x22, 0x33);
        let packed = c.to_abgr();
        assert_eq!(packed.to_le_bytes(), [0x11, 0x22, 0x33, 0xFF]);
        assert_eq!(Rgb::from_abgr(packed), c);
        assert_eq!(c.to_rgb_hex(), 0x112233);
    }
}
