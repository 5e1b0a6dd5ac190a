use super::surface::FrameBuffer;

/// Last camera image uploaded by the host, packed ABGR
pub struct CameraFrame {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl CameraFrame {
    /// Build from tightly packed RGBA bytes (canvas `getImageData` layout).
    /// Alpha is forced opaque.
    pub fn from_rgba(width: u32, height: u32, rgba: &[u8]) -> Result<Self, String> {
        if width == 0 || height == 0 {
            return Err(format!("camera frame must be non-empty, got {}x{}", width, height));
        }
        let expected = (width as usize) * (height as usize) * 4;
        if rgba.len() != expected {
            return Err(format!(
                "camera frame {}x{} needs {} bytes, got {}",
                width,
                height,
                expected,
                rgba.len()
            ));
        }

        let pixels = rgba
            .chunks_exact(4)
            .map(|px| u32::from_le_bytes([px[0], px[1], px[2], 0xFF]))
            .collect();

        Ok(Self { width, height, pixels })
    }

    #[inline]
    pub fn width(&self) -> u32 { self.width }

    #[inline]
    pub fn height(&self) -> u32 { self.height }

    /// Nearest-neighbor scale onto the whole frame buffer, optionally mirrored
    pub fn draw_scaled(&self, fb: &mut FrameBuffer, mirror: bool) {
        let dst_w = fb.width() as usize;
        let dst_h = fb.height() as usize;
        if dst_w == 0 || dst_h == 0 {
            return;
        }
        let src_w = self.width as usize;
        let src_h = self.height as usize;
        let src = &self.pixels;

        let scale_row = |dy: usize, row: &mut [u32]| {
            let sy = dy * src_h / dst_h;
            let src_row = &src[sy * src_w..(sy + 1) * src_w];
            for (dx, out) in row.iter_mut().enumerate() {
                let sx = dx * src_w / dst_w;
                let sx = if mirror { src_w - 1 - sx } else { sx };
                *out = src_row[sx];
            }
        };

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            fb.pixels_mut()
                .par_chunks_mut(dst_w)
                .enumerate()
                .for_each(|(dy, row)| scale_row(dy, row));
        }
        #[cfg(not(feature = "parallel"))]
        {
            for (dy, row) in fb.pixels_mut().chunks_mut(dst_w).enumerate() {
                scale_row(dy, row);
            }
        }
    }
}
