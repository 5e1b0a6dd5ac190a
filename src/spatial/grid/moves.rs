use super::*;

impl Grid {
    /// Move the particle at `(x, y)` into the empty cell `(tx, ty)`.
    ///
    /// Caller guarantees both coordinates are in bounds, the source is
    /// occupied and the target is empty.
    #[inline]
    pub(super) fn move_particle(&mut self, x: u32, y: u32, tx: u32, ty: u32) {
        let from = self.index(x, y);
        let to = self.index(tx, ty);
        debug_assert!(!self.cells[from].is_empty(), "move_particle: empty source ({}, {})", x, y);
        debug_assert!(self.cells[to].is_empty(), "move_particle: occupied target ({}, {})", tx, ty);

        self.cells[to] = self.cells[from];
        self.cells[from] = Cell::Empty;

        if y != ty {
            self.mark_cell_empty(y);
            self.mark_cell_non_empty(ty);
        }
    }

    /// Falling target for `(x, y)` in priority order: down, down-left, down-right.
    #[inline]
    pub(super) fn fall_target(&self, x: u32, y: u32) -> Option<(u32, u32)> {
        let below = y + 1;
        if below >= self.rows {
            return None;
        }
        if self.cells[self.index(x, below)].is_empty() {
            return Some((x, below));
        }
        if x > 0 && self.cells[self.index(x - 1, below)].is_empty() {
            return Some((x - 1, below));
        }
        if x + 1 < self.cols && self.cells[self.index(x + 1, below)].is_empty() {
            return Some((x + 1, below));
        }
        None
    }
}
