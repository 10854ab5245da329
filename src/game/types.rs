use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid roll of {0} pins, a roll must knock down between 0 and 10 pins")]
    InvalidRoll(i32),

    #[error("no more rolls allowed, the game has ended")]
    GameComplete,

    #[error("the game is not over yet, the score is not final")]
    GameNotComplete,
}
