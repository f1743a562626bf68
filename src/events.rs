use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::{
    card::Card,
    error::{ChoiceError, PlayError},
    player::Player,
};

/// Something that happened during a game, in a form that can be shown to
/// the players.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    TurnStarted { player: String, turn: u32 },
    Stats { attacker: Stats, defender: Stats },
    CardDrawn { player: String },
    CardDiscarded { player: String, card: Card },
    BledOut { player: String, health: i32 },
    Hand { player: String, cards: Vec<Card> },
    Prompt { player: String },
    InvalidChoice { player: String, error: ChoiceError },
    Passed { player: String },
    CardPlayed { player: String, target: String, card: Card },
    PlayRefused { player: String, error: PlayError },
    GameOver { winner: String, loser: String, turns: u32 },
}

/// Snapshot of a player's resources at the beginning of a turn.
#[derive(Clone, Debug, PartialEq)]
pub struct Stats {
    pub name: String,
    pub health: i32,
    pub mana: u32,
    pub mana_capacity: u32,
    pub hand: usize,
    pub deck: usize,
}

impl Stats {
    pub fn of(player: &Player) -> Stats {
        Stats {
            name: player.name().to_string(),
            health: player.displayed_health(),
            mana: player.mana(),
            mana_capacity: player.mana_capacity(),
            hand: player.hand().len(),
            deck: player.deck().len(),
        }
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: Health: {} Mana: {}/{} Hand: {} Deck: {}",
            self.name, self.health, self.mana, self.mana_capacity, self.hand, self.deck
        )
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::TurnStarted { player, turn } => write!(f, "Turn {turn}: now it's {player}'s turn"),
            Event::Stats { attacker, defender } => {
                write!(f, "Attacking {attacker}\nDefending {defender}")
            }
            Event::CardDrawn { player } => write!(f, "{player} draws a card"),
            Event::CardDiscarded { player, card } => {
                write!(f, "{player} reached the hand limit. {card} is discarded.")
            }
            Event::BledOut { player, health } => write!(
                f,
                "{player} doesn't have any card in deck. {player} is bleeding out (health: {health})."
            ),
            Event::Hand { player, cards } => {
                let cards: Vec<String> = cards.iter().map(Card::to_string).collect();
                write!(f, "Cards in {player}'s hand: {}", cards.join(" - "))
            }
            Event::Prompt { player } => write!(
                f,
                "{player}, enter the cost of the card you want to play. Enter P to pass your turn, H to show your hand."
            ),
            Event::InvalidChoice { error, .. } => write!(f, "{error}"),
            Event::Passed { player } => write!(f, "{player} passed turn"),
            Event::CardPlayed { player, target, card } => {
                write!(f, "{player} plays card {card}: {card} damage to {target}")
            }
            Event::PlayRefused { player, error } => write!(f, "{player} cannot play: {error}"),
            Event::GameOver { winner, loser, turns } => write!(
                f,
                "Game is over! Winner is {winner} and {loser} has lost the game. Game lasted for {turns} turns"
            ),
        }
    }
}

/// Receives narration of a game.
pub trait Narrator {
    fn narrate(&mut self, event: &Event);
}

/// Forwards narration to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNarrator;

impl Narrator for LogNarrator {
    fn narrate(&mut self, event: &Event) {
        match event {
            Event::InvalidChoice { .. } | Event::PlayRefused { .. } => log::warn!("{event}"),
            _ => log::info!("{event}"),
        }
    }
}

/// Prints narration for someone sitting at the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNarrator;

impl Narrator for ConsoleNarrator {
    fn narrate(&mut self, event: &Event) {
        match event {
            Event::Stats { .. } => println!("\n%%%%%%%%%%%%%%%%%%%%%%%%%\n{event}\n%%%%%%%%%%%%%%%%%%%%%%%%%\n"),
            Event::GameOver { .. } => println!("\n{event}"),
            _ => println!("{event}"),
        }
    }
}

/// Keeps every event in a buffer that can be shared with the caller.
#[derive(Debug, Default, Clone)]
pub struct RecordingNarrator {
    events: Rc<RefCell<Vec<Event>>>,
}

impl RecordingNarrator {
    pub fn new() -> RecordingNarrator {
        RecordingNarrator::default()
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }
}

impl Narrator for RecordingNarrator {
    fn narrate(&mut self, event: &Event) {
        self.events.borrow_mut().push(event.clone());
    }
}
