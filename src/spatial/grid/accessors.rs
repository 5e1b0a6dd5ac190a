use super::*;

impl Grid {
    /// Color at `(x, y)`, `None` when empty or out of bounds
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Rgb> {
        if !self.in_bounds(x, y) {
            return None;
        }
        self.cells[self.index(x as u32, y as u32)].color()
    }

    #[inline]
    pub fn occupied_count(&self) -> usize {
        self.occupied
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    /// Place a particle if `(x, y)` is inside the grid and free.
    ///
    /// Returns whether the particle was placed; out of range and occupied
    /// targets are silent no-ops.
    pub fn insert(&mut self, x: i32, y: i32, color: Rgb) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        let (ux, uy) = (x as u32, y as u32);
        let idx = self.index(ux, uy);
        if !self.cells[idx].is_empty() {
            return false;
        }
        self.cells[idx] = Cell::Occupied(color);
        self.occupied += 1;
        self.mark_cell_non_empty(uy);
        true
    }

    /// Clear the entire grid
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
        self.row_non_empty.fill(0);
        self.occupied = 0;
    }

    /// Every occupied cell as `(x, y, color)`, row-major
    pub fn occupied(&self) -> impl Iterator<Item = (u32, u32, Rgb)> + '_ {
        let cols = self.cols as usize;
        self.cells.iter().enumerate().filter_map(move |(idx, cell)| {
            cell.color()
                .map(|c| ((idx % cols) as u32, (idx / cols) as u32, c))
        })
    }
}
