pub mod domain;
pub mod types;


pub use domain::Game;
pub use types::GameError;
