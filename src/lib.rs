pub mod game;

pub use game::{Game, GameError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_game_through_public_surface() {
        // A realistic scorecard: spares, strikes, and open frames,
        // finishing with a spare in the tenth. Final score 133.
        let rolls = [
            1, 4, 4, 5, 6, 4, 5, 5, 10, 0, 1, 7, 3, 6, 4, 10, 2, 8, 6,
        ];

        let mut game = Game::new();
        for pins in rolls {
            game.record(pins).expect("legal roll was rejected");
        }

        assert!(game.is_complete());
        assert_eq!(game.score(), Ok(133));
        assert_eq!(game.record(0), Err(GameError::GameComplete));
    }
}
