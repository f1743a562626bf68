//! A two-player card duel: draw, gain mana, play cards as damage until one
//! player runs out of health.

pub mod action;
pub mod card;
pub mod deck;
pub mod error;
pub mod events;
pub mod game;
pub mod input;
pub mod player;
pub mod turn;

pub use action::Decision;
pub use card::Card;
pub use deck::Deck;
pub use error::{ChoiceError, GameError, PlayError};
pub use events::{ConsoleNarrator, Event, LogNarrator, Narrator, RecordingNarrator};
pub use game::{GameConfig, GameStatus, Gameplay, PlayerId};
pub use input::{ConsoleInput, InputSource, NoInput, ScriptedInput};
pub use player::{Draw, Outcome, Player};
