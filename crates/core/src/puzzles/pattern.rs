//! Pattern puzzle - tap grid cells in a target order

use arrayvec::ArrayVec;

use super::MAX_SEQUENCE;

/// Pattern puzzle configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternConfig {
    /// Number of tappable cells
    pub cells: usize,
    /// Correct tap order as cell indices
    pub order: Vec<usize>,
}

impl Default for PatternConfig {
    fn default() -> Self {
        // 2x2 grid, taps go top-left, bottom-left, top-right, bottom-right
        Self {
            cells: 4,
            order: vec![0, 2, 1, 3],
        }
    }
}

/// Tap-order puzzle state
#[derive(Debug, Clone)]
pub struct PatternPuzzle {
    cells: usize,
    order: ArrayVec<usize, MAX_SEQUENCE>,
    input: ArrayVec<usize, MAX_SEQUENCE>,
    solved: bool,
}

impl PatternPuzzle {
    pub fn new(config: PatternConfig) -> Self {
        let order: ArrayVec<usize, MAX_SEQUENCE> = config
            .order
            .into_iter()
            .filter(|&i| i < config.cells)
            .take(MAX_SEQUENCE)
            .collect();

        Self {
            cells: config.cells,
            // An empty target is vacuously satisfied
            solved: order.is_empty(),
            order,
            input: ArrayVec::new(),
        }
    }

    /// Tap a cell; returns false when the full attempt mismatched and reset
    pub fn tap(&mut self, cell: usize) -> bool {
        if self.solved {
            return true;
        }
        if cell >= self.cells {
            // Not a cell; ignored
            return true;
        }

        self.input.push(cell);
        if self.input.len() == self.order.len() {
            if self.input.as_slice() == self.order.as_slice() {
                self.solved = true;
            } else {
                self.input.clear();
                return false;
            }
        }
        true
    }

    /// Cells tapped so far in the current attempt
    pub fn tapped(&self) -> &[usize] {
        &self.input
    }

    pub fn solved(&self) -> bool {
        self.solved
    }
}
