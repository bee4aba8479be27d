//! Per-game AI memory
//!
//! Owned by whoever drives the AI and passed into every decision, so a
//! fresh state plus a fixed seed always replays the same choices.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::ai::opening::OpeningProgress;
use crate::core::types::Position;

#[derive(Debug, Clone)]
pub struct AiState {
    /// Decisions made so far this game
    pub move_count: u32,
    /// Where this AI's pawn stood before its last pawn move
    pub previous_position: Option<Position>,
    pub opening: OpeningProgress,
    seed: u64,
    rng: ChaCha8Rng,
}

impl AiState {
    pub fn new(seed: u64) -> Self {
        Self {
            move_count: 0,
            previous_position: None,
            opening: OpeningProgress::default(),
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Forget everything about the current game and rewind the RNG
    pub fn reset(&mut self) {
        *self = Self::new(self.seed);
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn rng(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }
}

impl Default for AiState {
    fn default() -> Self {
        Self::new(42)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_reset_rewinds_everything() {
        let mut state = AiState::new(9);
        let first: u64 = state.rng().gen();
        state.move_count = 5;
        state.previous_position = Some(Position::new(3, 3));
        state.opening = OpeningProgress::Abandoned;

        state.reset();
        assert_eq!(state.move_count, 0);
        assert_eq!(state.previous_position, None);
        assert_eq!(state.opening, OpeningProgress::Undecided);
        assert_eq!(state.rng().gen::<u64>(), first);
        assert_eq!(state.seed(), 9);
    }
}
