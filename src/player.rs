use std::fmt;

use rand::Rng;

use crate::{
    action::{any_playable, select_card, Decision},
    card::Card,
    deck::Deck,
    error::{GameError, PlayError},
    events::{Event, Narrator},
    game::PlayerId,
    input::{Command, InputSource, NoInput},
};

pub const STARTING_HEALTH: i32 = 30;
pub const MAX_MANA_CAPACITY: u32 = 10;
pub const MAX_HAND_SIZE: usize = 5;
pub const INITIAL_HAND_SIZE: usize = 3;

/// Result of anything that can reduce a player's health.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Defeated(PlayerId),
}

/// What happened to a single draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Draw {
    Drawn(Card),
    /// The hand was full and the card was lost.
    Discarded(Card),
    /// The deck was empty and the player lost a point of health.
    BledOut(Outcome),
}

pub struct Player {
    id: PlayerId,
    name: String,
    health: i32,
    mana: u32,
    mana_capacity: u32,
    deck: Deck,
    hand: Vec<Card>,
    hand_limit: usize,
    input: Box<dyn InputSource>,
}

impl Player {
    /// A fresh player with the standard deck and no cards in hand.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Player {
        Player::with_state(id, name, STARTING_HEALTH, 0, 0, Deck::standard(), vec![])
    }

    /// A player restored from explicit state.
    pub fn with_state(
        id: PlayerId,
        name: impl Into<String>,
        health: i32,
        mana: u32,
        mana_capacity: u32,
        deck: impl Into<Deck>,
        hand: Vec<Card>,
    ) -> Player {
        Player {
            id,
            name: name.into(),
            health,
            mana,
            mana_capacity: mana_capacity.min(MAX_MANA_CAPACITY),
            deck: deck.into(),
            hand,
            hand_limit: MAX_HAND_SIZE,
            input: Box::new(NoInput),
        }
    }

    pub fn with_input(mut self, input: impl InputSource + 'static) -> Player {
        self.input = Box::new(input);
        self
    }

    pub fn with_hand_limit(mut self, hand_limit: usize) -> Player {
        self.hand_limit = hand_limit;
        self
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    /// Health as shown to players, never below zero.
    pub fn displayed_health(&self) -> i32 {
        self.health.max(0)
    }

    pub fn mana(&self) -> u32 {
        self.mana
    }

    pub fn mana_capacity(&self) -> u32 {
        self.mana_capacity
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn hand_limit(&self) -> usize {
        self.hand_limit
    }

    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }

    /// Draws a random card from the deck. Drawing from an empty deck costs
    /// one point of health instead.
    pub fn draw_card<R: Rng>(&mut self, rng: &mut R) -> Draw {
        let Some(card) = self.deck.draw(rng) else {
            log::debug!("{} bleeds out on an empty deck", self.name);
            return Draw::BledOut(self.lose_health(1));
        };

        if self.hand.len() < self.hand_limit {
            self.hand.push(card);
            Draw::Drawn(card)
        } else {
            log::debug!("{} discards {} over the hand limit", self.name, card);
            Draw::Discarded(card)
        }
    }

    pub fn starting_hand<R: Rng>(&mut self, rng: &mut R) -> Vec<Draw> {
        (0..INITIAL_HAND_SIZE).map(|_| self.draw_card(rng)).collect()
    }

    pub fn increment_mana_capacity(&mut self) {
        self.mana_capacity = (self.mana_capacity + 1).min(MAX_MANA_CAPACITY);
    }

    pub fn refill_mana(&mut self) {
        self.mana = self.mana_capacity;
    }

    pub fn inflict_damage(&mut self, damage: u32) -> Outcome {
        self.lose_health(damage)
    }

    pub fn deal_damage(&self, damage: u32, opponent: &mut Player) -> Outcome {
        opponent.inflict_damage(damage)
    }

    pub fn can_play_any_move(&self) -> bool {
        any_playable(&self.hand, self.mana)
    }

    /// Asks the player's input for a card until a playable one is named or
    /// the player passes. Bad input is narrated and asked for again.
    pub fn decide_on_card(&mut self, narrator: &mut dyn Narrator) -> Result<Decision, GameError> {
        loop {
            narrator.narrate(&Event::Prompt {
                player: self.name.clone(),
            });
            let line = self.input.next_line().ok_or(GameError::InputClosed(self.id))?;

            let choice = Command::parse(&line).and_then(|command| match command {
                Command::Pass => Ok(Some(Decision::Pass)),
                Command::ShowHand => Ok(None),
                Command::Play(cost) => {
                    select_card(&self.hand, self.mana, cost).map(|card| Some(Decision::Play(card)))
                }
            });

            match choice {
                Ok(Some(Decision::Pass)) => {
                    narrator.narrate(&Event::Passed {
                        player: self.name.clone(),
                    });
                    return Ok(Decision::Pass);
                }
                Ok(Some(decision)) => return Ok(decision),
                Ok(None) => narrator.narrate(&Event::Hand {
                    player: self.name.clone(),
                    cards: self.hand.clone(),
                }),
                Err(error) => {
                    log::debug!("{} made an invalid choice: {error}", self.name);
                    narrator.narrate(&Event::InvalidChoice {
                        player: self.name.clone(),
                        error,
                    });
                }
            }
        }
    }

    /// Plays `card` from hand against `opponent`. A refused play leaves both
    /// players untouched.
    pub fn play_card(&mut self, card: Card, opponent: &mut Player) -> Result<Outcome, PlayError> {
        let cost = card.cost();
        if self.mana < cost {
            return Err(PlayError::InsufficientMana { cost, mana: self.mana });
        }

        let index = self
            .hand
            .iter()
            .position(|held| *held == card)
            .ok_or(PlayError::NotInHand(cost))?;

        self.hand.remove(index);
        self.mana -= cost;
        Ok(self.deal_damage(cost, opponent))
    }

    fn lose_health(&mut self, amount: u32) -> Outcome {
        let amount = i32::try_from(amount).unwrap_or(i32::MAX);
        self.health = self.health.saturating_sub(amount);

        if self.health <= 0 {
            Outcome::Defeated(self.id)
        } else {
            Outcome::Continue
        }
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("health", &self.health)
            .field("mana", &self.mana)
            .field("mana_capacity", &self.mana_capacity)
            .field("deck", &self.deck)
            .field("hand", &self.hand)
            .finish()
    }
}
