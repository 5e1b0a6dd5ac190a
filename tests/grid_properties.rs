use rainbow_sand_engine::color::Rgb;
use rainbow_sand_engine::grid::Grid;

/// Deterministic xorshift so failures reproduce
struct Rng(u32);

impl Rng {
    fn next(&mut self) -> u32 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.0 = x;
        x
    }
}

#[test]
fn settle_conserves_particles_and_stays_in_bounds() {
    for (cols, rows) in [(1u32, 1u32), (1, 12), (12, 1), (7, 9), (80, 60)] {
        let mut grid = Grid::new(cols, rows);
        let mut rng = Rng(0x9E37_79B9 ^ cols ^ (rows << 8));
        let mut inserted = 0usize;

        for _ in 0..(cols * rows) {
            let x = (rng.next() % cols) as i32;
            let y = (rng.next() % rows) as i32;
            if grid.insert(x, y, Rgb::new(x as u8, y as u8, 7)) {
                inserted += 1;
            }
        }

        for _ in 0..(rows * 3) {
            grid.settle();
            assert_eq!(grid.occupied_count(), inserted);
            assert_eq!(grid.occupied().count(), inserted);
            for (x, y, _) in grid.occupied() {
                assert!(x < cols && y < rows);
            }
        }
    }
}

#[test]
fn a_settled_pile_stops_moving() {
    let mut grid = Grid::new(10, 10);
    for y in 0..5 {
        assert!(grid.insert(4, y, Rgb::WHITE));
    }
    for _ in 0..200 {
        grid.settle();
    }
    assert_eq!(grid.settle(), 0);
    assert_eq!(grid.occupied_count(), 5);
}

#[test]
fn out_of_range_insertions_are_refused() {
    let mut grid = Grid::new(10, 10);
    assert!(!grid.insert(10, 0, Rgb::WHITE));
    assert!(!grid.insert(0, 10, Rgb::WHITE));
    assert!(!grid.insert(-1, 3, Rgb::WHITE));
    assert!(grid.is_empty());

    assert!(grid.insert(3, 3, Rgb::WHITE));
    assert!(!grid.insert(3, 3, Rgb::RED));
    assert_eq!(grid.get(3, 3), Some(Rgb::WHITE));
}
