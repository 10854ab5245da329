use serde::{Deserialize, Serialize};

use super::types::GameError;

/// Pins standing at the top of every delivery.
const ALL_PINS: u32 = 10;
/// Frames in a regulation game.
const FRAMES: usize = 10;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Game {
    rolls: Vec<u32>,
}

impl Game {
    pub fn new() -> Self {
        Self { rolls: Vec::new() }
    }

    // Getters
    pub fn rolls(&self) -> &[u32] {
        &self.rolls
    }

    //  --- Public mutators ---
    #[tracing::instrument(skip(self))]
    pub fn record(&mut self, pins: i32) -> Result<(), GameError> {
        // Range check happens before the completion check: an out-of-range
        // roll against a finished game reports InvalidRoll.
        if !(0..=10).contains(&pins) {
            tracing::warn!(pins, "rejected out-of-range roll");
            return Err(GameError::InvalidRoll(pins));
        }
        if self.is_complete() {
            tracing::warn!(pins, "rejected roll, game already complete");
            return Err(GameError::GameComplete);
        }

        self.rolls.push(pins as u32);
        Ok(())
    }

    //  --- Queries ---
    pub fn is_complete(&self) -> bool {
        let mut pos = 0;

        // Walk frames one through nine. A frame that has not received its
        // second roll yet still advances the cursor by two; the bounds check
        // at the top of the next iteration catches the shortfall.
        for _ in 0..FRAMES - 1 {
            if pos >= self.rolls.len() {
                return false;
            }
            if self.is_strike(pos) {
                pos += 1;
            } else {
                pos += 2;
            }
        }

        // Tenth frame.
        if pos >= self.rolls.len() {
            return false;
        }

        let first = self.rolls[pos];
        let second = self.rolls.get(pos + 1).copied();

        if first == ALL_PINS {
            // A strike in the tenth owes two bonus rolls.
            return self.rolls.len() >= pos + 3;
        }

        if let Some(second) = second {
            if first + second == ALL_PINS {
                // A spare in the tenth owes one bonus roll.
                return self.rolls.len() >= pos + 3;
            }
        }

        // An open tenth frame ends with its second roll.
        second.is_some()
    }

    pub fn score(&self) -> Result<u32, GameError> {
        if !self.is_complete() {
            return Err(GameError::GameNotComplete);
        }

        let mut total = 0;
        let mut pos = 0;

        // Completeness guarantees every lookahead index below exists.
        for _ in 0..FRAMES {
            if self.is_strike(pos) {
                total += ALL_PINS + self.rolls[pos + 1] + self.rolls[pos + 2];
                pos += 1;
            } else if self.is_spare(pos) {
                total += ALL_PINS + self.rolls[pos + 2];
                pos += 2;
            } else {
                total += self.rolls[pos] + self.rolls[pos + 1];
                pos += 2;
            }
        }

        Ok(total)
    }

    //  --- Private helpers ---
    fn is_strike(&self, pos: usize) -> bool {
        self.rolls[pos] == ALL_PINS
    }

    fn is_spare(&self, pos: usize) -> bool {
        self.rolls[pos] + self.rolls[pos + 1] == ALL_PINS
    }
}
