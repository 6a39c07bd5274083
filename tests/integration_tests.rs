//! Integration tests for the game session as the terminal runner drives it

use crossterm::event::{KeyCode, KeyEvent};

use tui_2048::core::{is_terminal, Board};
use tui_2048::engine::{GameState, Phase};
use tui_2048::input::{handle_key_event, handle_prompt_key};
use tui_2048::types::{Decision, Direction, GameAction, Prompt};

/// Feed keys the way the runner does: prompt keys while a prompt is up,
/// game keys otherwise.
fn press(game: GameState, code: KeyCode) -> GameState {
    let key = KeyEvent::from(code);
    if game.prompt().is_some() {
        match handle_prompt_key(key) {
            Some(decision) => game.resolve(decision),
            None => game,
        }
    } else {
        match handle_key_event(key) {
            Some(action) => game.apply_action(action).state,
            None => game,
        }
    }
}

#[test]
fn test_game_lifecycle() {
    let game = GameState::new(12345);
    assert_eq!(game.phase(), Phase::Playing);
    assert_eq!(game.board().tile_count(), 2);
    assert_eq!(game.score(), 0);
    assert!(game.accepts_moves());
}

#[test]
fn test_score_is_running_sum_of_deltas() {
    let mut game = GameState::new(99);
    let mut total = 0;
    let mut moves = 0;

    for i in 0..500 {
        if game.is_game_over() {
            break;
        }
        let step = game.apply_move(Direction::ALL[i % 4]);
        total += step.score_delta;
        if step.moved {
            moves += 1;
            assert!(step.spawned.is_some(), "a move always leaves room for a spawn");
        }
        game = match step.state.prompt() {
            Some(Prompt::Won) => step.state.resolve(Decision::Dismiss),
            _ => step.state,
        };
    }

    assert_eq!(game.score(), total);
    assert_eq!(game.moves(), moves);
}

#[test]
fn test_played_out_game_ends_frozen() {
    let mut game = GameState::new(4);
    let mut i = 0usize;

    while !game.is_game_over() {
        // cycle through directions, skipping ones that do nothing
        let step = game.apply_move(Direction::ALL[i % 4]);
        i += 1;
        game = if step.state.prompt() == Some(Prompt::Won) {
            step.state.resolve(Decision::Dismiss)
        } else {
            step.state
        };
        assert!(i < 100_000, "game should end");
    }

    assert!(is_terminal(game.board()));
    assert_eq!(game.prompt(), Some(Prompt::GameOver));

    // moves are ignored, restart is not
    for dir in Direction::ALL {
        assert!(!game.apply_move(dir).moved);
    }
    let fresh = game.apply_action(GameAction::Restart).state;
    assert_eq!(fresh.phase(), Phase::Playing);
    assert_eq!(fresh.score(), 0);
}

#[test]
fn test_keys_drive_moves() {
    let start = Board::from_values([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
    let game = press(GameState::from_board(start, 1), KeyCode::Left);

    assert_eq!(game.score(), 4);
    assert_eq!(game.board().value(0, 0), 4);

    let unchanged = press(game.clone(), KeyCode::Char('x'));
    assert_eq!(unchanged, game);
}

#[test]
fn test_win_prompt_answered_with_keys() {
    let start = Board::from_values([[1024, 1024, 0, 0], [0; 4], [0; 4], [0; 4]]);
    let won = press(GameState::from_board(start, 1), KeyCode::Left);
    assert_eq!(won.prompt(), Some(Prompt::Won));

    // arrows do nothing while the prompt is up
    let still = press(won.clone(), KeyCode::Right);
    assert_eq!(still, won);

    let keep_playing = press(won.clone(), KeyCode::Char('n'));
    assert_eq!(keep_playing.prompt(), None);
    assert!(keep_playing.won());
    assert_eq!(keep_playing.board(), won.board());

    let restarted = press(won, KeyCode::Char('y'));
    assert_eq!(restarted.prompt(), None);
    assert!(!restarted.won());
    assert_eq!(restarted.score(), 0);
    assert_eq!(restarted.episode_id(), 1);
}

#[test]
fn test_restart_key_mid_game() {
    let game = GameState::new(3);
    let game = press(game, KeyCode::Up);
    let game = press(game, KeyCode::Left);

    let fresh = press(game.clone(), KeyCode::Char('r'));
    assert_eq!(fresh.moves(), 0);
    assert_eq!(fresh.score(), 0);
    assert_eq!(fresh.episode_id(), game.episode_id() + 1);
    assert_eq!(fresh.board().tile_count(), 2);
}

#[test]
fn test_custom_target() {
    let game = GameState::with_target(1, 8);
    assert_eq!(game.target(), 8);

    let start = Board::from_values([[4, 4, 0, 0], [0; 4], [0; 4], [0; 4]]);
    let game = GameState::from_board(start, 1);
    // from_board uses the default target
    let step = game.apply_move(Direction::Left);
    assert_eq!(step.state.prompt(), None);
}
