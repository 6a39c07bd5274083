use tui_2048::core::{Board, GameSnapshot, MergeEvent};
use tui_2048::engine::GameState;
use tui_2048::term::{AnchorY, FrameBuffer, GameView, MergeFlash, Viewport};
use tui_2048::types::Prompt;

fn screen_text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

fn snapshot_of(values: [[u32; 4]; 4]) -> GameSnapshot {
    GameState::from_board(Board::from_values(values), 1).snapshot()
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();

    // 4 tiles of 7x3 with 1-cell gaps, plus border => 35x19
    let fb = view.render(&snap, &[], Viewport::new(35, 19));

    assert_eq!(fb.get(0, 0).unwrap().ch, '╭');
    assert_eq!(fb.get(34, 0).unwrap().ch, '╮');
    assert_eq!(fb.get(0, 18).unwrap().ch, '╰');
    assert_eq!(fb.get(34, 18).unwrap().ch, '╯');
}

#[test]
fn term_view_draws_tile_value_centered() {
    let snap = snapshot_of([[2048, 0, 0, 0], [0; 4], [0; 4], [0, 0, 0, 8]]);
    let view = GameView::default();
    let fb = view.render(&snap, &[], Viewport::new(35, 19));

    // tile (0,0) starts at (2,2); middle row is y=3; "2048" centered in 7 columns
    let (x0, y0) = view.tile_origin(0, 0, 0, 0);
    assert_eq!((x0, y0), (2, 2));
    let row: String = (x0..x0 + 7).map(|x| fb.get(x, y0 + 1).unwrap().ch).collect();
    assert_eq!(row, " 2048  ");

    let (x3, y3) = view.tile_origin(0, 0, 3, 3);
    assert_eq!(fb.get(x3 + 3, y3 + 1).unwrap().ch, '8');
}

#[test]
fn term_view_highlights_merged_tiles_only() {
    let snap = snapshot_of([[4, 4, 0, 0], [0; 4], [0; 4], [0; 4]]);
    let view = GameView::default();
    let vp = Viewport::new(35, 19);

    let plain = view.render(&snap, &[], vp);
    let flash = [MergeEvent {
        row: 0,
        col: 0,
        value: 4,
    }];
    let lit = view.render(&snap, &flash, vp);

    let (x0, y0) = view.tile_origin(0, 0, 0, 0);
    let (x1, y1) = view.tile_origin(0, 0, 0, 1);
    assert_ne!(plain.get(x0, y0), lit.get(x0, y0));
    assert_eq!(plain.get(x1, y1), lit.get(x1, y1));
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = GameState::new(1).snapshot();
    snap.score = 1234;

    let fb = GameView::default().render(&snap, &[], Viewport::new(80, 24));
    let all = screen_text(&fb);
    assert!(all.contains("SCORE"));
    assert!(all.contains("1234"));
    assert!(all.contains("TARGET"));
}

#[test]
fn term_view_skips_side_panel_when_narrow() {
    let snap = GameState::new(1).snapshot();
    let fb = GameView::default().render(&snap, &[], Viewport::new(35, 19));
    assert!(!screen_text(&fb).contains("SCORE"));
}

#[test]
fn term_view_shows_prompt_overlay() {
    let mut snap = GameState::new(1).snapshot();
    snap.prompt = Some(Prompt::Won);
    let fb = GameView::default().render(&snap, &[], Viewport::new(80, 24));
    let all = screen_text(&fb);
    assert!(all.contains("YOU WIN!"));
    assert!(all.contains("Restart? (y/n)"));

    let frozen = snapshot_of([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
    assert_eq!(frozen.prompt, Some(Prompt::GameOver));
    let all = screen_text(&GameView::default().render(&frozen, &[], Viewport::new(80, 24)));
    assert!(all.contains("GAME OVER"));
}

#[test]
fn term_view_top_anchor() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&snap, &[], Viewport::new(35, 40));
    assert_eq!(fb.get(0, 0).unwrap().ch, '╭');

    // centered by default: (40 - 19) / 2 = 10
    let fb = GameView::default().render(&snap, &[], Viewport::new(35, 40));
    assert_eq!(fb.get(0, 10).unwrap().ch, '╭');
}

#[test]
fn merge_flash_expires_after_duration() {
    let mut flash = MergeFlash::new();
    let events = [MergeEvent {
        row: 1,
        col: 2,
        value: 8,
    }];

    flash.start(&events, 120);
    assert!(flash.is_active());
    assert!(flash.contains(1, 2));

    assert!(!flash.tick(100));
    assert!(flash.is_active());
    assert!(flash.tick(20));
    assert!(!flash.is_active());
    assert!(!flash.tick(16));
}

#[test]
fn merge_flash_with_no_events_is_inactive() {
    let mut flash = MergeFlash::new();
    flash.start(&[], 120);
    assert!(!flash.is_active());
    assert!(flash.events().is_empty());
}
