//! Frame buffer and the few raster primitives the render pass needs.
//!
//! Pixels are packed ABGR so the buffer can be handed to a canvas as
//! `ImageData` without conversion.

use crate::domain::color::Rgb;

/// Something the grid and overlays can draw into
pub trait Surface {
    /// Fill an axis-aligned rectangle; parts outside the surface are clipped
    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Rgb);
}

// Background when no camera frame has been uploaded: RGB(10,10,10), opaque
pub(crate) const BG_COLOR: u32 = 0xFF0A0A0A;

pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![BG_COLOR; (width as usize) * (height as usize)],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 { self.width }

    #[inline]
    pub fn height(&self) -> u32 { self.height }

    #[inline]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    #[inline]
    pub(crate) fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
    }

    /// Get pointer to pixel array (for JS canvas upload)
    pub fn as_ptr(&self) -> *const u32 {
        self.pixels.as_ptr()
    }

    pub fn fill(&mut self, packed: u32) {
        self.pixels.fill(packed);
    }

    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(Rgb::from_abgr(self.pixels[(y * self.width + x) as usize]))
    }

    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgb) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let idx = (y as u32 * self.width + x as u32) as usize;
        self.pixels[idx] = color.to_abgr();
    }

    pub fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Rgb) {
        let (x, y, r) = (cx as i64, cy as i64, radius as i64);
        if r < 0 || x + r < 0 || y + r < 0 || x - r >= self.width as i64 || y - r >= self.height as i64 {
            return;
        }
        let r2 = radius * radius;
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy <= r2 {
                    self.set_pixel(cx + dx, cy + dy, color);
                }
            }
        }
    }

    /// Bresenham line with a square pen of `thickness` pixels.
    ///
    /// The segment is clipped to the frame (plus the pen width) first, so
    /// endpoints anywhere in the i32 range cost only the visible part.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, thickness: u32, color: Rgb) {
        let pen = thickness.max(1);
        let half = (pen / 2) as i32;
        let margin = pen as f64;
        let Some((x0, y0, x1, y1)) = clip_segment(
            (x0 as f64, y0 as f64),
            (x1 as f64, y1 as f64),
            (-margin, -margin),
            (self.width as f64 + margin, self.height as f64 + margin),
        ) else {
            return;
        };

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);

        loop {
            self.fill_rect(x - half, y - half, pen, pen, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }
}

/// Liang-Barsky clip of segment `a..b` to the box `min..max`, rounded back to pixels
fn clip_segment(
    a: (f64, f64),
    b: (f64, f64),
    min: (f64, f64),
    max: (f64, f64),
) -> Option<(i32, i32, i32, i32)> {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let (mut t0, mut t1) = (0.0f64, 1.0f64);

    for (p, q) in [(-dx, a.0 - min.0), (dx, max.0 - a.0), (-dy, a.1 - min.1), (dy, max.1 - a.1)] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    Some((
        (a.0 + t0 * dx).round() as i32,
        (a.1 + t0 * dy).round() as i32,
        (a.0 + t1 * dx).round() as i32,
        (a.1 + t1 * dy).round() as i32,
    ))
}

impl Surface for FrameBuffer {
    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Rgb) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x as i64 + w as i64).min(self.width as i64) as i32;
        let y1 = (y as i64 + h as i64).min(self.height as i64) as i32;
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let packed = color.to_abgr();
        let width = self.width as usize;
        for row in y0..y1 {
            let start = row as usize * width;
            self.pixels[start + x0 as usize..start + x1 as usize].fill(packed);
        }
    }
}
