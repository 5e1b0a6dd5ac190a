//! Settle - one gravity step over the whole grid
//!
//! CRITICAL: rows are processed bottom to top. A particle that falls lands
//! in a row that has already been processed, so it moves at most one cell
//! per step. Top to bottom would let it drop through the whole column.

use super::*;

impl Grid {
    /// Advance the simulation by one step. Returns the number of particles moved.
    pub fn settle(&mut self) -> u32 {
        if self.rows < 2 || self.occupied == 0 {
            return 0;
        }

        let mut moved = 0u32;

        // Bottom row is the floor and never moves
        for y in (0..self.rows - 1).rev() {
            if !self.row_has_data(y) {
                continue;
            }
            for x in 0..self.cols {
                if self.cells[self.index(x, y)].is_empty() {
                    continue;
                }
                if let Some((tx, ty)) = self.fall_target(x, y) {
                    self.move_particle(x, y, tx, ty);
                    moved += 1;
                }
            }
        }

        moved + self.settle_walls()
    }

    /// Wall correction: particles resting in the outer columns keep falling
    /// if the cell below is free, otherwise slide diagonally inward.
    fn settle_walls(&mut self) -> u32 {
        let last = self.cols - 1;
        let mut moved = self.settle_wall_column(0, 1);
        if last > 0 {
            moved += self.settle_wall_column(last, last - 1);
        }
        moved
    }

    fn settle_wall_column(&mut self, wall_x: u32, inward_x: u32) -> u32 {
        let mut moved = 0u32;
        for y in (0..self.rows - 1).rev() {
            if !self.row_has_data(y) || self.cells[self.index(wall_x, y)].is_empty() {
                continue;
            }
            let below = y + 1;
            if self.cells[self.index(wall_x, below)].is_empty() {
                self.move_particle(wall_x, y, wall_x, below);
                moved += 1;
            } else if self.cols > 1 && self.cells[self.index(inward_x, below)].is_empty() {
                self.move_particle(wall_x, y, inward_x, below);
                moved += 1;
            }
        }
        moved
    }
}
