//! Economy module - the bulb balance and its spend/credit rules
//!
//! Bulbs are the consumable hint/skip currency. The economy owns the balance
//! exclusively: every spend is an atomic check-then-decrement that fails
//! closed, so the balance can never go negative. Persistence is the session's
//! job (the balance is loaded once at session start and flushed after every
//! mutation); the economy itself is pure.

use thiserror::Error;

use brain_master_types::STARTING_BULBS;

/// Spend rejected: not enough bulbs
///
/// Recoverable; surfaced to the player as a message. No state is mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("not enough bulbs: need {required}, have {available}")]
pub struct InsufficientBulbs {
    pub required: u32,
    pub available: u32,
}

/// The player's bulb balance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulbEconomy {
    count: u32,
}

impl BulbEconomy {
    /// Create an economy with the given balance
    pub fn new(count: u32) -> Self {
        Self { count }
    }

    /// Current balance
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Check whether a spend of `amount` would succeed
    pub fn can_afford(&self, amount: u32) -> bool {
        self.count >= amount
    }

    /// Atomic check-then-decrement
    ///
    /// Fails closed: on [`InsufficientBulbs`] the balance is untouched.
    pub fn spend(&mut self, amount: u32) -> Result<(), InsufficientBulbs> {
        if self.count < amount {
            return Err(InsufficientBulbs {
                required: amount,
                available: self.count,
            });
        }
        self.count -= amount;
        Ok(())
    }

    /// Unconditional credit (saturating)
    pub fn credit(&mut self, amount: u32) {
        self.count = self.count.saturating_add(amount);
    }
}

impl Default for BulbEconomy {
    /// First-run balance
    fn default() -> Self {
        Self::new(STARTING_BULBS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_balance_is_starting_bulbs() {
        assert_eq!(BulbEconomy::default().count(), 5);
    }

    #[test]
    fn test_spend_decrements() {
        let mut economy = BulbEconomy::new(5);
        assert!(economy.spend(1).is_ok());
        assert_eq!(economy.count(), 4);
        assert!(economy.spend(3).is_ok());
        assert_eq!(economy.count(), 1);
    }

    #[test]
    fn test_spend_fails_closed() {
        let mut economy = BulbEconomy::new(2);
        let err = economy.spend(3).unwrap_err();

        assert_eq!(err.required, 3);
        assert_eq!(err.available, 2);
        // Balance untouched after a rejected spend
        assert_eq!(economy.count(), 2);
    }

    #[test]
    fn test_spend_exact_balance() {
        let mut economy = BulbEconomy::new(3);
        assert!(economy.spend(3).is_ok());
        assert_eq!(economy.count(), 0);
        assert!(economy.spend(1).is_err());
    }

    #[test]
    fn test_credit() {
        let mut economy = BulbEconomy::new(0);
        economy.credit(2);
        assert_eq!(economy.count(), 2);
        economy.credit(1);
        assert_eq!(economy.count(), 3);
    }

    #[test]
    fn test_credit_saturates() {
        let mut economy = BulbEconomy::new(u32::MAX - 1);
        economy.credit(5);
        assert_eq!(economy.count(), u32::MAX);
    }

    #[test]
    fn test_never_negative_over_mixed_sequence() {
        let mut economy = BulbEconomy::new(1);
        let _ = economy.spend(1);
        let _ = economy.spend(1);
        economy.credit(2);
        let _ = economy.spend(5);
        // Every state along the way is representable as u32; the final
        // balance reflects only the successful operations.
        assert_eq!(economy.count(), 2);
    }

    #[test]
    fn test_can_afford() {
        let economy = BulbEconomy::new(3);
        assert!(economy.can_afford(0));
        assert!(economy.can_afford(3));
        assert!(!economy.can_afford(4));
    }
}
