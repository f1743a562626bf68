//! Error types for the duel.
//!
//! None of these end a game. Losing is a [`GameStatus`](crate::game::GameStatus),
//! not an error.

use thiserror::Error;

use crate::game::PlayerId;

/// A line of input that does not select a playable card.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChoiceError {
    #[error("{0} is invalid.")]
    Invalid(String),

    #[error("{0} is not in your hand")]
    NotInHand(u32),

    #[error("not enough mana to play card {cost} (mana: {mana})")]
    InsufficientMana { cost: u32, mana: u32 },
}

/// A card play that was refused. The player is left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlayError {
    #[error("not enough mana to play card {cost} (mana: {mana})")]
    InsufficientMana { cost: u32, mana: u32 },

    #[error("card {0} is not in hand")]
    NotInHand(u32),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("a game needs exactly two players, got {0}")]
    PlayerCount(usize),

    #[error("active player index must be 0 or 1, got {0}")]
    InvalidActivePlayer(usize),

    #[error("turn count starts at 1")]
    InvalidTurnCount,

    #[error("both players have id {0}")]
    DuplicatePlayerId(PlayerId),

    #[error("input for player {0} was closed")]
    InputClosed(PlayerId),
}

pub type Result<T> = std::result::Result<T, GameError>;
