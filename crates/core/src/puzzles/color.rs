//! Color puzzle - reproduce a color sequence from a palette
//!
//! Presses accumulate until the input is as long as the target sequence; a
//! full mismatching attempt clears the input, a matching one solves the
//! puzzle.

use arrayvec::ArrayVec;

use super::MAX_SEQUENCE;

/// Color puzzle configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorConfig {
    /// Palette shown to the player (display names)
    pub palette: Vec<String>,
    /// Correct sequence as indices into the palette
    pub sequence: Vec<usize>,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            palette: vec![
                "red".to_string(),
                "green".to_string(),
                "blue".to_string(),
                "yellow".to_string(),
            ],
            sequence: vec![0, 2, 3],
        }
    }
}

/// Color-sequence puzzle state
#[derive(Debug, Clone)]
pub struct ColorPuzzle {
    palette_len: usize,
    sequence: ArrayVec<usize, MAX_SEQUENCE>,
    input: ArrayVec<usize, MAX_SEQUENCE>,
    solved: bool,
}

impl ColorPuzzle {
    pub fn new(config: ColorConfig) -> Self {
        // Sequences beyond the cap are truncated; indices outside the
        // palette are dropped so the target stays reachable.
        let sequence: ArrayVec<usize, MAX_SEQUENCE> = config
            .sequence
            .into_iter()
            .filter(|&i| i < config.palette.len())
            .take(MAX_SEQUENCE)
            .collect();

        Self {
            palette_len: config.palette.len(),
            // An empty target is vacuously satisfied
            solved: sequence.is_empty(),
            sequence,
            input: ArrayVec::new(),
        }
    }

    /// Press a palette color; returns false when the attempt was cleared
    pub fn press(&mut self, color: usize) -> bool {
        if self.solved {
            return true;
        }
        if color >= self.palette_len {
            // Not a palette color; ignored
            return true;
        }

        self.input.push(color);
        if self.input.len() == self.sequence.len() {
            if self.input.as_slice() == self.sequence.as_slice() {
                self.solved = true;
            } else {
                self.input.clear();
                return false;
            }
        }
        true
    }

    /// Colors entered so far in the current attempt
    pub fn selected(&self) -> &[usize] {
        &self.input
    }

    pub fn solved(&self) -> bool {
        self.solved
    }
}
