use std::collections::VecDeque;

use crate::grid::Cell;

/// Ordered snake body, head first.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Cell>,
}

impl Snake {
    /// Creates a one-cell snake at `start`.
    #[must_use]
    pub fn new(start: Cell) -> Self {
        let mut body = VecDeque::new();
        body.push_front(start);

        Self { body }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// # Panics
    ///
    /// Panics when `segments` is empty.
    #[cfg(test)]
    #[must_use]
    pub fn from_segments(segments: Vec<Cell>) -> Self {
        assert!(!segments.is_empty(), "snake needs at least one segment");

        Self {
            body: VecDeque::from(segments),
        }
    }

    /// Places a new head in front of the current one.
    pub fn push_head(&mut self, head: Cell) {
        self.body.push_front(head);
    }

    /// Drops the tail segment, never shrinking below one cell.
    pub fn pop_tail(&mut self) -> Option<Cell> {
        if self.body.len() > 1 {
            self.body.pop_back()
        } else {
            None
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Cell {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl DoubleEndedIterator<Item = &Cell> + ExactSizeIterator {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::grid::Cell;

    use super::Snake;

    #[test]
    fn push_then_pop_keeps_length() {
        let mut snake = Snake::new(Cell::new(5, 5));

        snake.push_head(Cell::new(6, 5));
        assert_eq!(snake.pop_tail(), Some(Cell::new(5, 5)));

        assert_eq!(snake.head(), Cell::new(6, 5));
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn pop_tail_never_empties_the_body() {
        let mut snake = Snake::new(Cell::new(1, 1));

        assert_eq!(snake.pop_tail(), None);
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn single_segment_never_overlaps_itself() {
        let snake = Snake::new(Cell::new(2, 2));
        assert!(!snake.head_overlaps_body());
    }

    #[test]
    fn head_on_body_is_detected() {
        let snake = Snake::from_segments(vec![
            Cell::new(2, 2),
            Cell::new(3, 2),
            Cell::new(3, 3),
            Cell::new(2, 3),
            Cell::new(2, 2),
        ]);

        assert!(snake.head_overlaps_body());
        assert!(snake.occupies(Cell::new(3, 3)));
        assert!(!snake.occupies(Cell::new(4, 4)));
    }
}
