use super::*;
use crate::simulation::render::Surface;

const RED: Rgb = Rgb::new(255, 0, 0);
const BLUE: Rgb = Rgb::new(0, 0, 255);

fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

fn fill_bottom_row(grid: &mut Grid) {
    let y = grid.rows() as i32 - 1;
    for x in 0..grid.cols() as i32 {
        assert!(grid.insert(x, y, BLUE));
    }
}

#[test]
fn particle_falls_one_row_per_step_to_the_floor() {
    let mut grid = Grid::new(10, 10);
    assert!(grid.insert(5, 0, RED));

    for step in 1..=9 {
        grid.settle();
        assert_eq!(grid.get(5, step), Some(RED), "after {} steps", step);
    }

    assert_eq!(grid.get(5, 9), Some(RED));
    assert_eq!(grid.occupied_count(), 1);
    assert_eq!(grid.occupied().collect::<Vec<_>>(), vec![(5, 9, RED)]);
}

#[test]
fn out_of_range_inserts_are_rejected() {
    let mut grid = Grid::new(10, 10);
    assert!(!grid.insert(-1, 3, RED));
    assert!(!grid.insert(10, 3, RED));
    assert!(!grid.insert(3, -1, RED));
    assert!(!grid.insert(3, 10, RED));
    assert!(grid.is_empty());
}

#[test]
fn insert_into_occupied_cell_keeps_original_color() {
    let mut grid = Grid::new(4, 4);
    assert!(grid.insert(1, 1, RED));
    assert!(!grid.insert(1, 1, BLUE));
    assert_eq!(grid.get(1, 1), Some(RED));
    assert_eq!(grid.occupied_count(), 1);
}

#[test]
fn blocked_particle_prefers_down_left() {
    let mut grid = Grid::new(10, 10);
    assert!(grid.insert(5, 9, BLUE));
    assert!(grid.insert(6, 9, BLUE));
    assert!(grid.insert(5, 8, RED));

    grid.settle();

    assert_eq!(grid.get(4, 9), Some(RED));
    assert_eq!(grid.get(5, 8), None);
}

#[test]
fn blocked_particle_falls_back_to_down_right() {
    let mut grid = Grid::new(10, 10);
    assert!(grid.insert(4, 9, BLUE));
    assert!(grid.insert(5, 9, BLUE));
    assert!(grid.insert(5, 8, RED));

    grid.settle();

    assert_eq!(grid.get(6, 9), Some(RED));
}

#[test]
fn full_column_pushes_top_particle_diagonally() {
    let mut grid = Grid::new(10, 10);
    // Floor is full so the column itself cannot slide away.
    fill_bottom_row(&mut grid);
    assert!(grid.insert(5, 8, BLUE));
    assert!(grid.insert(5, 7, RED));

    grid.settle();

    assert_eq!(grid.get(5, 7), None);
    assert_eq!(grid.get(4, 8), Some(RED));
    assert_eq!(grid.get(5, 8), Some(BLUE));
}

#[test]
fn particle_with_every_target_blocked_stays() {
    let mut grid = Grid::new(10, 10);
    fill_bottom_row(&mut grid);
    for x in 4..=6 {
        assert!(grid.insert(x, 8, BLUE));
    }
    assert!(grid.insert(5, 7, RED));

    grid.settle();

    assert_eq!(grid.get(5, 7), Some(RED));
}

#[test]
fn floor_particles_never_move() {
    let mut grid = Grid::new(8, 6);
    assert!(grid.insert(0, 5, RED));
    assert!(grid.insert(3, 5, RED));
    assert!(grid.insert(7, 5, RED));

    for _ in 0..50 {
        assert_eq!(grid.settle(), 0);
    }

    assert_eq!(grid.get(0, 5), Some(RED));
    assert_eq!(grid.get(3, 5), Some(RED));
    assert_eq!(grid.get(7, 5), Some(RED));
}

#[test]
fn wall_particle_keeps_falling_in_correction_pass() {
    let mut grid = Grid::new(10, 10);
    assert!(grid.insert(0, 0, RED));

    grid.settle();

    // Main pass drops it to row 1, the wall pass drops it once more.
    assert_eq!(grid.get(0, 2), Some(RED));
    assert_eq!(grid.occupied_count(), 1);
}

#[test]
fn wall_particle_slides_inward_when_blocked() {
    let mut grid = Grid::new(10, 10);
    assert!(grid.insert(0, 9, BLUE));
    assert!(grid.insert(0, 7, RED));
    assert!(grid.insert(9, 9, BLUE));
    assert!(grid.insert(9, 7, RED));

    grid.settle();

    assert_eq!(grid.get(1, 9), Some(RED));
    assert_eq!(grid.get(8, 9), Some(RED));
    assert_eq!(grid.get(0, 8), None);
    assert_eq!(grid.get(9, 8), None);
}

#[test]
fn single_column_grid_only_falls_straight() {
    let mut grid = Grid::new(1, 5);
    assert!(grid.insert(0, 4, BLUE));
    assert!(grid.insert(0, 3, RED));
    assert!(grid.insert(0, 0, RED));

    for _ in 0..5 {
        grid.settle();
    }

    assert_eq!(grid.get(0, 4), Some(BLUE));
    assert_eq!(grid.get(0, 3), Some(RED));
    assert_eq!(grid.get(0, 2), Some(RED));
    assert_eq!(grid.occupied_count(), 3);
}

#[test]
fn single_row_grid_is_all_floor() {
    let mut grid = Grid::new(5, 1);
    assert!(grid.insert(2, 0, RED));
    assert_eq!(grid.settle(), 0);
    assert_eq!(grid.get(2, 0), Some(RED));
}

#[test]
fn random_inserts_and_settles_keep_particles_contained_and_conserved() {
    let mut grid = Grid::new(17, 13);
    let mut rng = 0x9E37_79B9u32;
    let mut expected = 0usize;

    for _ in 0..400 {
        let x = (xorshift32(&mut rng) % 21) as i32 - 2;
        let y = (xorshift32(&mut rng) % 17) as i32 - 2;
        if grid.insert(x, y, RED) {
            expected += 1;
        }

        let before = grid.occupied_count();
        grid.settle();
        assert_eq!(grid.occupied_count(), before);
        assert_eq!(grid.occupied().count(), expected);
        for (cx, cy, _) in grid.occupied() {
            assert!(cx < grid.cols() && cy < grid.rows());
        }
    }

    let row_total: u32 = grid.row_non_empty.iter().sum();
    assert_eq!(row_total as usize, expected);
}

#[test]
fn pile_settles_into_a_stable_state() {
    let mut grid = Grid::new(9, 6);
    for _ in 0..20 {
        grid.insert(4, 0, RED);
        grid.settle();
    }
    for _ in 0..20 {
        grid.settle();
    }
    assert_eq!(grid.settle(), 0);
    // Center column is the tallest part of the pile.
    let height = |x: i32| (0..6).filter(|&y| grid.get(x, y).is_some()).count();
    assert!(height(4) >= height(0));
    assert!(height(4) >= height(8));
}

#[test]
fn reset_is_idempotent() {
    let mut grid = Grid::new(6, 6);
    for x in 0..6 {
        grid.insert(x, x, RED);
    }
    grid.reset();
    assert!(grid.is_empty());
    let once: Vec<Cell> = grid.cells.clone();
    grid.reset();
    assert_eq!(grid.cells, once);
    assert!(grid.cells.iter().all(Cell::is_empty));
    assert!(grid.row_non_empty.iter().all(|&n| n == 0));
}

struct RecordingSurface {
    rects: Vec<(i32, i32, u32, u32, Rgb)>,
}

impl Surface for RecordingSurface {
    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Rgb) {
        self.rects.push((x, y, w, h, color));
    }
}

#[test]
fn render_draws_one_scaled_rect_per_particle() {
    let mut grid = Grid::new(4, 3);
    grid.insert(1, 2, RED);
    grid.insert(3, 0, BLUE);

    let mut surface = RecordingSurface { rects: Vec::new() };
    grid.render(&mut surface, 10);

    assert_eq!(surface.rects, vec![(30, 0, 10, 10, BLUE), (10, 20, 10, 10, RED)]);
}

#[test]
fn render_origins_saturate_instead_of_wrapping() {
    let mut grid = Grid::new(3, 3);
    grid.insert(2, 2, RED);

    let mut surface = RecordingSurface { rects: Vec::new() };
    grid.render(&mut surface, 3_000_000_000);

    assert_eq!(surface.rects, vec![(i32::MAX, i32::MAX, 3_000_000_000, 3_000_000_000, RED)]);
}
