/// A cell of the grid. Coordinates are signed so that callers can ask about
/// positions just outside the grid and get a range error back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Site {
    pub row: isize,
    pub col: isize,
}

impl Site {
    pub fn new(row: isize, col: isize) -> Site {
        Site { row, col }
    }

    pub fn step(&self, dir: Direction) -> Site {
        let (d_row, d_col) = dir.offset();
        Site {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    West, East, North, South,
}

impl Direction {
    /// (row, col) delta. Row 0 is the top of the grid.
    pub fn offset(&self) -> (isize, isize) {
        match self {
            Direction::West => (0, -1),
            Direction::East => (0, 1),
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
        }
    }

    // left, right, up, down
    pub fn adjacent_directions() -> [Direction; 4] {
        [Direction::West, Direction::East, Direction::North, Direction::South]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_reach_the_four_neighbours() {
        let s = Site::new(2, 3);
        let around: Vec<Site> = Direction::adjacent_directions()
            .iter()
            .map(|&d| s.step(d))
            .collect();
        assert_eq!(around, vec![
            Site::new(2, 2), Site::new(2, 4), Site::new(1, 3), Site::new(3, 3),
        ]);
    }
}
