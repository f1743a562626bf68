use crate::{
    action::Decision,
    error::GameError,
    events::{Event, Stats},
    game::Gameplay,
};

pub struct Turn {
    /// The phase that runs next.
    pub phase: Phase,
    pub count: u32,
    pub active: usize,
}

impl Turn {
    pub fn new(count: u32, active: usize) -> Turn {
        Turn {
            phase: Phase::Start,
            count,
            active,
        }
    }

    pub fn defending(&self) -> usize {
        (self.active + 1) % 2
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Start,
    Action,
    End,
}

/// The active player gains a mana slot, refills and draws (except on the
/// very first turn of the game).
pub fn start_phase(game: &mut Gameplay) {
    if game.is_finished() {
        return;
    }

    let turn = game.turn.count;
    let active = game.turn.active;
    game.narrate(Event::TurnStarted {
        player: game.active_player().name().to_string(),
        turn,
    });

    let (player, _) = game.sides_mut();
    player.increment_mana_capacity();
    player.refill_mana();

    if turn != 1 {
        game.draw_for(active);
    }

    game.narrate(Event::Stats {
        attacker: Stats::of(game.active_player()),
        defender: Stats::of(game.defending_player()),
    });
    game.turn.phase = Phase::Action;
}

/// Lets the active player play cards until they pass, run out of playable
/// cards, or win. If the player's input closes, the turn stays in the action
/// phase.
pub fn action_phase(game: &mut Gameplay) -> Result<(), GameError> {
    if game.is_finished() {
        return Ok(());
    }

    if !game.active_player().can_play_any_move() {
        log::debug!("{} has no playable card", game.active_player().name());
        game.turn.phase = Phase::End;
        return Ok(());
    }

    game.narrate(Event::Hand {
        player: game.active_player().name().to_string(),
        cards: game.active_player().hand().to_vec(),
    });

    while !game.is_finished() && game.active_player().can_play_any_move() {
        let decision = {
            let (player, _, narrator) = game.parts_mut();
            player.decide_on_card(narrator)?
        };

        match decision {
            Decision::Pass => break,
            Decision::Play(card) => {
                // Refusals are narrated by use_card.
                let _ = game.use_card(card);
            }
        }
    }
    game.turn.phase = Phase::End;
    Ok(())
}

/// Hands the turn to the other player.
pub fn end_phase(game: &mut Gameplay) {
    if game.is_finished() {
        return;
    }
    game.turn.active = game.turn.defending();
    game.turn.count += 1;
    game.turn.phase = Phase::Start;
}

#[cfg(test)]
mod tests {
    use crate::{
        card::cards,
        error::GameError,
        events::{Event, RecordingNarrator},
        game::{GameConfig, Gameplay},
        input::ScriptedInput,
        player::Player,
        turn::{action_phase, end_phase, start_phase, Phase},
    };

    fn game(first: Player, second: Player, turn_count: u32) -> (Gameplay, RecordingNarrator) {
        let recorder = RecordingNarrator::new();
        let config = GameConfig {
            seed: Some(3),
            turn_count,
            active_player: Some(0),
        };
        let game = Gameplay::with_config(first, second, config, recorder.clone()).unwrap();
        (game, recorder)
    }

    #[test]
    fn test_first_turn_no_draw() {
        let (mut game, _) = game(Player::new(1, "Active"), Player::new(2, "Defending"), 1);

        start_phase(&mut game);

        let active = game.active_player();
        assert_eq!(active.name(), "Active");
        assert_eq!(active.hand().len(), 3);
        assert_eq!(active.mana_capacity(), 1);
        assert_eq!(active.mana(), 1);
        assert_eq!(game.turn().phase, Phase::Action);
    }

    #[test]
    fn test_start_phase_mana_and_draw() {
        let active = Player::with_state(1, "Active", 30, 2, 4, cards(&[1, 2, 4]), cards(&[3]));
        let (mut game, _) = game(active, Player::new(2, "Defending"), 2);

        start_phase(&mut game);

        let active = game.active_player();
        assert_eq!(active.mana_capacity(), 5);
        assert_eq!(active.mana(), 5);
        assert_eq!(active.hand().len(), 2);
        assert_eq!(active.deck().len(), 2);
    }

    #[test]
    fn test_start_phase_narrates_both_players() {
        let active = Player::with_state(1, "Active", 30, 0, 0, cards(&[1]), vec![]);
        let defending = Player::with_state(2, "Defending", 12, 3, 3, cards(&[]), cards(&[4]));
        let (mut game, recorder) = game(active, defending, 2);

        start_phase(&mut game);

        let stats = recorder.events().into_iter().find_map(|event| match event {
            Event::Stats { attacker, defender } => Some((attacker, defender)),
            _ => None,
        });
        let (attacker, defender) = stats.unwrap();
        assert_eq!(attacker.name, "Active");
        assert_eq!(attacker.mana, 1);
        assert_eq!(defender.name, "Defending");
        assert_eq!(defender.health, 12);
        assert_eq!(defender.hand, 1);
    }

    #[test]
    fn test_bleed_out_loses_game() {
        let active = Player::with_state(1, "Active", 1, 0, 0, cards(&[]), vec![]);
        let (mut game, _) = game(active, Player::new(2, "Defending"), 2);

        start_phase(&mut game);

        assert_eq!(game.active_player().health(), 0);
        assert!(game.is_finished());
        assert_eq!(game.winner().unwrap().name(), "Defending");
        assert_eq!(game.loser().unwrap().name(), "Active");
    }

    #[test]
    fn test_end_phase_switches_player() {
        let (mut game, _) = game(Player::new(1, "Player A"), Player::new(2, "Player B"), 1);
        assert_eq!(game.active_player().name(), "Player A");

        end_phase(&mut game);

        assert_eq!(game.active_player().name(), "Player B");
        assert_eq!(game.defending_player().name(), "Player A");
        assert_eq!(game.turn_count(), 2);
        assert_eq!(game.turn().phase, Phase::Start);

        end_phase(&mut game);
        assert_eq!(game.active_player().name(), "Player A");
        assert_eq!(game.turn_count(), 3);
    }

    #[test]
    fn test_action_phase_plays_until_pass() {
        let active = Player::with_state(1, "Active", 30, 0, 4, cards(&[]), cards(&[1, 2, 9]))
            .with_input(ScriptedInput::new(["9", "2", "p"]));
        let (mut game, _) = game(active, Player::new(2, "Defending"), 2);

        start_phase(&mut game);
        action_phase(&mut game).unwrap();

        assert_eq!(game.active_player().hand(), &cards(&[1, 9])[..]);
        assert_eq!(game.active_player().mana(), 3);
        assert_eq!(game.defending_player().health(), 28);
        assert_eq!(game.turn().phase, Phase::End);
    }

    #[test]
    fn test_action_phase_stops_when_out_of_mana() {
        let active = Player::with_state(1, "Active", 30, 0, 2, cards(&[]), cards(&[1, 2, 1]))
            .with_input(ScriptedInput::new(["1", "2", "1"]));
        let (mut game, _) = game(active, Player::new(2, "Defending"), 2);

        start_phase(&mut game);
        action_phase(&mut game).unwrap();

        // Three mana: 1 + 2, then nothing left for the second 1.
        assert_eq!(game.active_player().mana(), 0);
        assert_eq!(game.active_player().hand(), &cards(&[1])[..]);
        assert_eq!(game.defending_player().health(), 27);
    }

    #[test]
    fn test_action_phase_skipped_without_moves() {
        let active = Player::with_state(1, "Active", 30, 0, 0, cards(&[]), cards(&[5]));
        let (mut game, recorder) = game(active, Player::new(2, "Defending"), 2);

        start_phase(&mut game);
        assert_eq!(action_phase(&mut game), Ok(()));

        assert!(!recorder
            .events()
            .iter()
            .any(|event| matches!(event, Event::Prompt { .. })));
    }

    #[test]
    fn test_action_phase_stops_on_win() {
        let active = Player::with_state(1, "Active", 30, 0, 9, cards(&[]), cards(&[8, 1]))
            .with_input(ScriptedInput::new(["8"]));
        let defending = Player::with_state(2, "Defending", 5, 0, 0, cards(&[]), vec![]);
        let (mut game, _) = game(active, defending, 2);

        start_phase(&mut game);
        action_phase(&mut game).unwrap();

        assert!(game.is_finished());
        assert_eq!(game.active_player().hand(), &cards(&[1])[..]);
        assert_eq!(game.winner().unwrap().id(), 1);
    }

    #[test]
    fn test_action_phase_input_closed() {
        let active = Player::with_state(7, "Active", 30, 0, 3, cards(&[]), cards(&[1]));
        let (mut game, _) = game(active, Player::new(2, "Defending"), 2);

        start_phase(&mut game);
        assert_eq!(action_phase(&mut game), Err(GameError::InputClosed(7)));
        assert_eq!(game.turn().phase, Phase::Action);
    }

    #[test]
    fn test_phases_idle_after_game_over() {
        let active = Player::with_state(1, "Active", 1, 0, 0, cards(&[]), vec![]);
        let (mut game, _) = game(active, Player::new(2, "Defending"), 2);

        start_phase(&mut game);
        assert!(game.is_finished());

        action_phase(&mut game).unwrap();
        end_phase(&mut game);
        start_phase(&mut game);

        assert_eq!(game.turn_count(), 2);
        assert_eq!(game.active_player().name(), "Active");
        assert_eq!(game.active_player().health(), 0);
    }
}
