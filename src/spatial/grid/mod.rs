//! Grid - fixed-size occupancy field for falling particles
//!
//! One `Cell` per position, row-major. A particle has no identity beyond
//! its cell and color, so moving a particle is just moving the cell value.
//!
//! Alongside the cells we keep per-row occupied counts so the settle pass
//! can skip rows with nothing in them.

use crate::domain::color::Rgb;

mod indexing;
mod accessors;
mod moves;
mod settle;
mod render;

/// One grid position
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Rgb),
}

impl Cell {
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    #[inline]
    pub fn color(&self) -> Option<Rgb> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(c) => Some(*c),
        }
    }
}

pub struct Grid {
    cols: u32,
    rows: u32,
    cells: Vec<Cell>,

    occupied: usize,
    row_non_empty: Vec<u32>,
}

impl Grid {
    pub fn new(cols: u32, rows: u32) -> Self {
        let size = (cols as usize) * (rows as usize);
        Self {
            cols,
            rows,
            cells: vec![Cell::Empty; size],
            occupied: 0,
            row_non_empty: vec![0u32; rows as usize],
        }
    }

    // === Sparse helpers ===
    fn mark_cell_non_empty(&mut self, y: u32) {
        let yi = y as usize;
        self.row_non_empty[yi] = self.row_non_empty[yi].saturating_add(1);
    }

    fn mark_cell_empty(&mut self, y: u32) {
        let yi = y as usize;
        if self.row_non_empty[yi] > 0 {
            self.row_non_empty[yi] -= 1;
        }
    }

    #[inline]
    fn row_has_data(&self, y: u32) -> bool {
        self.row_non_empty[y as usize] > 0
    }
}

#[cfg(test)]
mod tests;
