use rand::Rng;

use crate::grid::{Cell, GridSize};
use crate::snake::Snake;

/// Picks a fruit cell that the snake does not occupy.
///
/// Uses rejection sampling: uniformly random cells are drawn until one is
/// free. Termination is probabilistic and a board with no free cell is not
/// guarded against; the loop would never finish.
#[must_use]
pub fn spawn_fruit<R: Rng + ?Sized>(rng: &mut R, grid: GridSize, snake: &Snake) -> Cell {
    debug_assert!(grid.width > 0 && grid.height > 0);

    loop {
        let candidate = Cell::new(
            rng.gen_range(0..i32::from(grid.width)),
            rng.gen_range(0..i32::from(grid.height)),
        );

        if !snake.occupies(candidate) {
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::grid::{Cell, GridSize};
    use crate::snake::Snake;

    use super::spawn_fruit;

    #[test]
    fn fruit_never_lands_on_snake() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = GridSize {
            width: 8,
            height: 6,
            cell_size: 30,
        };
        let snake = Snake::from_segments(vec![
            Cell::new(0, 0),
            Cell::new(1, 0),
            Cell::new(2, 0),
            Cell::new(2, 1),
        ]);

        for _ in 0..200 {
            let fruit = spawn_fruit(&mut rng, grid, &snake);
            assert!(!snake.occupies(fruit));
            assert!(grid.in_bounds(fruit));
        }
    }

    #[test]
    fn nearly_full_board_picks_the_last_free_cell() {
        let mut rng = StdRng::seed_from_u64(11);
        let grid = GridSize {
            width: 3,
            height: 2,
            cell_size: 30,
        };
        let snake = Snake::from_segments(vec![
            Cell::new(0, 0),
            Cell::new(1, 0),
            Cell::new(2, 0),
            Cell::new(2, 1),
            Cell::new(1, 1),
        ]);

        assert_eq!(spawn_fruit(&mut rng, grid, &snake), Cell::new(0, 1));
    }
}
