use super::*;
use crate::simulation::render::Surface;

impl Grid {
    /// Draw one filled `cell_size` square per occupied cell.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S, cell_size: u32) {
        if cell_size == 0 || self.occupied == 0 {
            return;
        }
        for y in 0..self.rows {
            if !self.row_has_data(y) {
                continue;
            }
            let py = cell_origin(y, cell_size);
            for x in 0..self.cols {
                if let Cell::Occupied(color) = self.cells[self.index(x, y)] {
                    surface.fill_rect(cell_origin(x, cell_size), py, cell_size, cell_size, color);
                }
            }
        }
    }
}

/// Pixel origin of a cell edge, saturated so large grids clip instead of wrapping
#[inline]
fn cell_origin(i: u32, cell_size: u32) -> i32 {
    (i as i64 * cell_size as i64).min(i32::MAX as i64) as i32
}
