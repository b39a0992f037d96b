//! Light-bulb puzzle - the obvious tap is not enough
//!
//! The bulb lights only after enough taps "warm it up". Classic level-1
//! trick puzzle.

/// Light-bulb puzzle configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightBulbConfig {
    /// Tap count at which the bulb lights
    pub presses_required: u32,
}

impl Default for LightBulbConfig {
    fn default() -> Self {
        Self {
            presses_required: 3,
        }
    }
}

/// Tap-the-bulb puzzle state
#[derive(Debug, Clone)]
pub struct LightBulbPuzzle {
    presses_required: u32,
    presses: u32,
    lit: bool,
}

impl LightBulbPuzzle {
    pub fn new(config: LightBulbConfig) -> Self {
        Self {
            // A zero threshold would light the bulb before any input
            presses_required: config.presses_required.max(1),
            presses: 0,
            lit: false,
        }
    }

    /// Tap the bulb; returns true once it is lit
    pub fn press(&mut self) -> bool {
        if self.lit {
            return true;
        }
        self.presses += 1;
        if self.presses >= self.presses_required {
            self.lit = true;
        }
        self.lit
    }

    pub fn presses(&self) -> u32 {
        self.presses
    }

    pub fn solved(&self) -> bool {
        self.lit
    }
}
