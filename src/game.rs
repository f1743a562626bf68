use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{
    card::Card,
    error::{GameError, PlayError, Result},
    events::{Event, LogNarrator, Narrator},
    player::{Draw, Outcome, Player},
    turn::{action_phase, end_phase, start_phase, Phase, Turn},
};

pub type PlayerId = usize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Play,
    Lose(PlayerId),
}

/// How a game is set up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Seed for the game's random source. `None` seeds from the OS.
    pub seed: Option<u64>,
    pub turn_count: u32,
    /// Index of the player who goes first. `None` picks at random.
    pub active_player: Option<usize>,
}

impl Default for GameConfig {
    fn default() -> GameConfig {
        GameConfig {
            seed: None,
            turn_count: 1,
            active_player: None,
        }
    }
}

pub struct Gameplay {
    pub(crate) turn: Turn,
    status: GameStatus,
    players: [Player; 2],
    rng: StdRng,
    narrator: Box<dyn Narrator>,
}

impl Gameplay {
    /// A new game with a random first player.
    pub fn new(first: Player, second: Player) -> Result<Gameplay> {
        Gameplay::with_config(first, second, GameConfig::default(), LogNarrator)
    }

    /// A game resumed at `turn_count` with the player at `active_player` to move.
    pub fn with_sides(
        first: Player,
        second: Player,
        turn_count: u32,
        active_player: usize,
    ) -> Result<Gameplay> {
        let config = GameConfig {
            turn_count,
            active_player: Some(active_player),
            ..GameConfig::default()
        };
        Gameplay::with_config(first, second, config, LogNarrator)
    }

    pub fn from_players(players: Vec<Player>) -> Result<Gameplay> {
        let count = players.len();
        let [first, second]: [Player; 2] = players
            .try_into()
            .map_err(|_| GameError::PlayerCount(count))?;
        Gameplay::new(first, second)
    }

    /// Sets up a game. On the first turn both players draw their starting
    /// hand before anything else happens.
    pub fn with_config(
        first: Player,
        second: Player,
        config: GameConfig,
        narrator: impl Narrator + 'static,
    ) -> Result<Gameplay> {
        if first.id() == second.id() {
            return Err(GameError::DuplicatePlayerId(first.id()));
        }
        if config.turn_count == 0 {
            return Err(GameError::InvalidTurnCount);
        }

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let active = match config.active_player {
            Some(active) if active > 1 => return Err(GameError::InvalidActivePlayer(active)),
            Some(active) => active,
            None => rng.gen_range(0..2),
        };

        let mut game = Gameplay {
            turn: Turn::new(config.turn_count, active),
            status: GameStatus::Play,
            players: [first, second],
            rng,
            narrator: Box::new(narrator),
        };
        log::debug!(
            "Game set up at turn {}, {} goes first",
            game.turn.count,
            game.active_player().name()
        );

        if game.turn.count == 1 {
            for index in 0..game.players.len() {
                let draws = game.players[index].starting_hand(&mut game.rng);
                for draw in draws {
                    game.report_draw(index, draw);
                }
            }
        }
        Ok(game)
    }

    /// Plays turns until one player loses and returns the winner's id.
    /// An interrupted game picks up at the phase it stopped in.
    pub fn run_game(&mut self) -> Result<PlayerId> {
        loop {
            if let Some(winner) = self.winner() {
                return Ok(winner.id());
            }

            match self.turn.phase {
                Phase::Start => start_phase(self),
                Phase::Action => action_phase(self)?,
                Phase::End => end_phase(self),
            }
        }
    }

    /// The active player plays `card` against the defending player.
    pub fn use_card(&mut self, card: Card) -> std::result::Result<Outcome, PlayError> {
        let (active, defending, narrator) = self.parts_mut();
        let result = active.play_card(card, defending);

        let event = match &result {
            Ok(_) => Event::CardPlayed {
                player: active.name().to_string(),
                target: defending.name().to_string(),
                card,
            },
            Err(error) => Event::PlayRefused {
                player: active.name().to_string(),
                error: error.clone(),
            },
        };
        narrator.narrate(&event);

        if let Ok(outcome) = result {
            self.resolve(outcome);
        }
        result
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|player| player.id() == id)
    }

    pub fn active_player(&self) -> &Player {
        &self.players[self.turn.active]
    }

    pub fn defending_player(&self) -> &Player {
        &self.players[self.turn.defending()]
    }

    pub fn active_index(&self) -> usize {
        self.turn.active
    }

    pub fn turn_count(&self) -> u32 {
        self.turn.count
    }

    pub fn turn(&self) -> &Turn {
        &self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status != GameStatus::Play
    }

    pub fn winner(&self) -> Option<&Player> {
        match self.status {
            GameStatus::Play => None,
            GameStatus::Lose(loser) => self.players.iter().find(|player| player.id() != loser),
        }
    }

    pub fn loser(&self) -> Option<&Player> {
        match self.status {
            GameStatus::Play => None,
            GameStatus::Lose(loser) => self.player(loser),
        }
    }

    pub(crate) fn narrate(&mut self, event: Event) {
        self.narrator.narrate(&event);
    }

    /// Active player, defending player and the narrator, borrowed together.
    pub(crate) fn parts_mut(&mut self) -> (&mut Player, &mut Player, &mut dyn Narrator) {
        let [first, second] = &mut self.players;
        let narrator = self.narrator.as_mut();
        if self.turn.active == 0 {
            (first, second, narrator)
        } else {
            (second, first, narrator)
        }
    }

    pub(crate) fn sides_mut(&mut self) -> (&mut Player, &mut Player) {
        let (active, defending, _) = self.parts_mut();
        (active, defending)
    }

    pub(crate) fn draw_for(&mut self, index: usize) {
        let draw = self.players[index].draw_card(&mut self.rng);
        self.report_draw(index, draw);
    }

    fn report_draw(&mut self, index: usize, draw: Draw) {
        let player = self.players[index].name().to_string();

        match draw {
            Draw::Drawn(_) => self.narrate(Event::CardDrawn { player }),
            Draw::Discarded(card) => {
                self.narrate(Event::CardDrawn { player: player.clone() });
                self.narrate(Event::CardDiscarded { player, card });
            }
            Draw::BledOut(outcome) => {
                let health = self.players[index].displayed_health();
                self.narrate(Event::BledOut { player, health });
                self.resolve(outcome);
            }
        }
    }

    /// Ends the game on the first defeat. Later defeats change nothing.
    pub(crate) fn resolve(&mut self, outcome: Outcome) {
        let Outcome::Defeated(loser) = outcome else {
            return;
        };
        if self.is_finished() {
            log::debug!("Player {loser} defeated after the game ended, ignoring");
            return;
        }

        self.status = GameStatus::Lose(loser);

        let winner = self.winner().map(|player| player.name().to_string()).unwrap_or_default();
        let loser = self.loser().map(|player| player.name().to_string()).unwrap_or_default();
        let turns = self.turn.count;
        log::debug!("{winner} wins after {turns} turns");
        self.narrate(Event::GameOver { winner, loser, turns });
    }
}
