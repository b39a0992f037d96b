//! Word-chain puzzle - transform a word one letter at a time
//!
//! Every submission replaces one letter of the current word. The result must
//! be a different word and must appear in the puzzle's dictionary. Reaching
//! the target solves the puzzle; running out of attempts fails the attempt
//! (the level can still be retried or skipped, so failure is not terminal
//! for the session).

use std::collections::BTreeSet;

/// Outcome of one letter submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The chain advanced to a new valid word
    Advanced,
    /// The chain reached the target word
    Solved,
    /// The replacement did not change the word
    Unchanged,
    /// The result is not in the dictionary (costs an attempt)
    NotAWord,
    /// No attempts remain
    OutOfAttempts,
}

/// Word-chain puzzle configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordChainConfig {
    pub start: String,
    pub target: String,
    /// Valid intermediate words (start and target included)
    pub dictionary: Vec<String>,
    /// Submissions allowed, valid or not
    pub max_attempts: u32,
}

impl Default for WordChainConfig {
    fn default() -> Self {
        Self {
            start: "COLD".to_string(),
            target: "WARM".to_string(),
            dictionary: ["COLD", "CORD", "WORD", "WORM", "WARM"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            max_attempts: 4,
        }
    }
}

/// Word-chain puzzle state
#[derive(Debug, Clone)]
pub struct WordChainPuzzle {
    current: String,
    target: String,
    dictionary: BTreeSet<String>,
    chain: Vec<String>,
    attempts: u32,
    max_attempts: u32,
    solved: bool,
}

impl WordChainPuzzle {
    pub fn new(config: WordChainConfig) -> Self {
        Self {
            chain: vec![config.start.clone()],
            current: config.start,
            target: config.target,
            dictionary: config.dictionary.into_iter().collect(),
            attempts: 0,
            max_attempts: config.max_attempts,
            solved: false,
        }
    }

    pub fn current_word(&self) -> &str {
        &self.current
    }

    /// Words reached so far, starting word first
    pub fn chain(&self) -> &[String] {
        &self.chain
    }

    pub fn attempts_left(&self) -> u32 {
        self.max_attempts.saturating_sub(self.attempts)
    }

    /// Whether the attempt limit was hit before reaching the target
    pub fn failed(&self) -> bool {
        !self.solved && self.attempts >= self.max_attempts
    }

    /// Replace the letter at `position` with `letter`
    pub fn submit(&mut self, position: usize, letter: char) -> SubmitOutcome {
        if self.solved {
            return SubmitOutcome::Solved;
        }
        if self.failed() {
            return SubmitOutcome::OutOfAttempts;
        }

        let mut candidate: Vec<char> = self.current.chars().collect();
        match candidate.get_mut(position) {
            Some(slot) => *slot = letter.to_ascii_uppercase(),
            None => return SubmitOutcome::Unchanged,
        }
        let candidate: String = candidate.into_iter().collect();

        if candidate == self.current {
            return SubmitOutcome::Unchanged;
        }

        self.attempts += 1;
        if !self.dictionary.contains(&candidate) {
            return SubmitOutcome::NotAWord;
        }

        self.current = candidate.clone();
        self.chain.push(candidate);

        if self.current == self.target {
            self.solved = true;
            SubmitOutcome::Solved
        } else {
            SubmitOutcome::Advanced
        }
    }

    pub fn solved(&self) -> bool {
        self.solved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cold_to_warm() {
        let mut puzzle = WordChainPuzzle::new(WordChainConfig::default());

        assert_eq!(puzzle.submit(2, 'R'), SubmitOutcome::Advanced); // CORD
        assert_eq!(puzzle.submit(0, 'W'), SubmitOutcome::Advanced); // WORD
        assert_eq!(puzzle.submit(3, 'M'), SubmitOutcome::Advanced); // WORM
        assert_eq!(puzzle.submit(1, 'A'), SubmitOutcome::Solved); // WARM

        assert!(puzzle.solved());
        assert_eq!(puzzle.chain().len(), 5);
    }

    #[test]
    fn test_invalid_word_costs_attempt() {
        let mut puzzle = WordChainPuzzle::new(WordChainConfig::default());
        assert_eq!(puzzle.submit(0, 'X'), SubmitOutcome::NotAWord); // XOLD
        assert_eq!(puzzle.current_word(), "COLD");
        assert_eq!(puzzle.attempts_left(), 3);
    }

    #[test]
    fn test_unchanged_letter_is_free() {
        let mut puzzle = WordChainPuzzle::new(WordChainConfig::default());
        assert_eq!(puzzle.submit(0, 'C'), SubmitOutcome::Unchanged);
        assert_eq!(puzzle.attempts_left(), 4);
    }

    #[test]
    fn test_lowercase_input_uppercased() {
        let mut puzzle = WordChainPuzzle::new(WordChainConfig::default());
        assert_eq!(puzzle.submit(2, 'r'), SubmitOutcome::Advanced);
        assert_eq!(puzzle.current_word(), "CORD");
    }

    #[test]
    fn test_out_of_attempts_blocks_further_play() {
        let mut puzzle = WordChainPuzzle::new(WordChainConfig::default());
        for _ in 0..4 {
            puzzle.submit(0, 'X');
        }
        assert!(puzzle.failed());
        assert_eq!(puzzle.submit(2, 'R'), SubmitOutcome::OutOfAttempts);
        assert!(!puzzle.solved());
    }

    #[test]
    fn test_position_out_of_bounds() {
        let mut puzzle = WordChainPuzzle::new(WordChainConfig::default());
        assert_eq!(puzzle.submit(10, 'R'), SubmitOutcome::Unchanged);
        assert_eq!(puzzle.attempts_left(), 4);
    }

    #[test]
    fn test_submission_after_solved_absorbed() {
        let mut puzzle = WordChainPuzzle::new(WordChainConfig {
            start: "COLD".to_string(),
            target: "CORD".to_string(),
            dictionary: vec!["COLD".to_string(), "CORD".to_string()],
            max_attempts: 4,
        });
        assert_eq!(puzzle.submit(2, 'R'), SubmitOutcome::Solved);
        assert_eq!(puzzle.submit(0, 'X'), SubmitOutcome::Solved);
        assert_eq!(puzzle.current_word(), "CORD");
    }
}
