use std::io::Cursor;
use std::path::Path;

use draughts_console::{Console, EngineConfig};
use draughts_core::{Board, Color, Piece, Square, snapshot};

fn sq(column: u8, row: u8) -> Square {
    Square::new(column, row).unwrap()
}

fn run_with(console: Console, script: &str) -> Vec<String> {
    let mut output = Vec::new();
    console.run(Cursor::new(script), &mut output).unwrap();
    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

fn run(script: &str) -> Vec<String> {
    run_with(Console::new(), script)
}

fn write_board(path: &Path, board: &Board) {
    snapshot::save(board, path).unwrap();
}

#[test]
fn show_prints_initial_board() {
    let lines = run("show\n");
    assert_eq!(lines.len(), 9);
    assert_eq!(lines[0], "7  b   b   b   b  ");
    assert_eq!(lines[7], "0    w   w   w   w");
    assert!(lines[8].ends_with("white to move"));
}

#[test]
fn legal_move_hands_over_turn() {
    let lines = run("move 1 2 0 3\n");
    assert!(lines.last().unwrap().ends_with("black to move"));
    assert_eq!(lines[4], "3  w   .   .   .  ");
}

#[test]
fn illegal_move_is_reported() {
    let lines = run("move 1 2 1 3\nmove 0 5 1 4\n");
    assert_eq!(lines, vec!["illegal move", "illegal move"]);
}

#[test]
fn malformed_command_prints_error_and_continues() {
    let lines = run("move 1\nedit 9 9\nshow\n");
    assert!(lines[0].starts_with("error "));
    assert!(lines[1].starts_with("error "));
    assert!(lines.last().unwrap().ends_with("white to move"));
}

#[test]
fn unknown_and_blank_lines_are_ignored() {
    let lines = run("\nfrobnicate\n   \n");
    assert!(lines.is_empty());
}

#[test]
fn quit_stops_reading() {
    let lines = run("quit\nshow\n");
    assert!(lines.is_empty());
}

#[test]
fn engine_moves_for_side_on_turn() {
    let lines = run("setoption depth 2\ngo\ngo\n");
    assert_eq!(lines[0], "ok");
    assert!(lines[9].ends_with("black to move"));
    assert!(lines[18].ends_with("white to move"));
}

#[test]
fn undo_takes_back_a_move() {
    let lines = run("move 3 2 4 3\nundo\n");
    let initial = run("show\n");
    assert_eq!(lines[9..], initial[..]);
}

#[test]
fn flip_shows_other_side() {
    let lines = run("flip\n");
    assert_eq!(lines[0], "7  w   w   w   w  ");
    assert!(lines[8].ends_with("black to move"));
}

#[test]
fn edit_cycles_a_square() {
    let lines = run("edit 0 3\nedit 0 3\n");
    assert_eq!(lines[4], "3  w   .   .   .  ");
    assert_eq!(lines[13], "3  W   .   .   .  ");
}

#[test]
fn capture_of_last_piece_ends_game() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("endgame.txt");
    let board = Board::empty(Color::White)
        .with_cell(sq(2, 3), Some(Piece::WHITE_MAN))
        .with_cell(sq(3, 4), Some(Piece::BLACK_MAN));
    write_board(&path, &board);

    let script = format!("load {}\nmove 2 3 4 5\nshow\n", path.display());
    let lines = run(&script);
    assert_eq!(lines.last().unwrap(), "winner white");
    // load board + move board + winner; `show` is never reached.
    assert_eq!(lines.len(), 9 + 9 + 1);
}

#[test]
fn blocked_side_gets_no_move() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blocked.txt");
    let board = Board::empty(Color::White)
        .with_cell(sq(0, 1), Some(Piece::WHITE_MAN))
        .with_cell(sq(1, 2), Some(Piece::BLACK_MAN))
        .with_cell(sq(2, 3), Some(Piece::BLACK_MAN));
    write_board(&path, &board);

    let lines = run(&format!("load {}\ngo\n", path.display()));
    assert_eq!(lines.last().unwrap(), "no move");
}

#[test]
fn save_then_load_restores_position() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("game.txt");
    let script = format!(
        "move 1 2 0 3\nsave {path}\nnew\nload {path}\n",
        path = path.display()
    );
    let lines = run(&script);
    assert_eq!(lines[9], "ok");
    let loaded = &lines[lines.len() - 9..];
    assert_eq!(loaded, &lines[..9]);

    let saved = snapshot::load(&path).unwrap();
    assert_eq!(saved.piece_on(sq(0, 3)), Some(Piece::WHITE_MAN));
    assert_eq!(saved.side_to_move(), Color::Black);
}

#[test]
fn loading_missing_file_reports_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");
    let lines = run(&format!("load {}\nshow\n", path.display()));
    assert!(lines[0].starts_with("error "));
    assert!(lines.last().unwrap().ends_with("white to move"));
}

#[test]
fn seeded_consoles_play_the_same_game() {
    let config = EngineConfig {
        depth: 2,
        seed: Some(5),
    };
    let script = "go\ngo\ngo\ngo\n";
    let a = run_with(Console::with_config(config), script);
    let b = run_with(Console::with_config(config), script);
    assert_eq!(a, b);
}

#[test]
fn default_config_uses_first_wins_at_depth_four() {
    let console = Console::new();
    assert_eq!(console.config(), EngineConfig { depth: 4, seed: None });
    assert_eq!(*console.session().board(), Board::initial_state());
}

#[test]
fn loading_won_position_ends_game() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("won.txt");
    let board = Board::empty(Color::Black).with_cell(sq(3, 4), Some(Piece::WHITE_KING));
    write_board(&path, &board);

    let lines = run(&format!("load {}\nshow\ngo\n", path.display()));
    assert_eq!(lines.len(), 9 + 1);
    assert_eq!(lines.last().unwrap(), "winner white");
}

#[test]
fn editing_away_last_piece_ends_game() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("last.txt");
    let board = Board::empty(Color::White)
        .with_cell(sq(0, 3), Some(Piece::WHITE_MAN))
        .with_cell(sq(3, 4), Some(Piece::BLACK_MAN));
    write_board(&path, &board);

    // A black man cycles to an empty square.
    let lines = run(&format!("load {}\nedit 3 4\nshow\n", path.display()));
    assert_eq!(lines.len(), 9 + 9 + 1);
    assert_eq!(lines.last().unwrap(), "winner white");
}
