use othello_core::flip::compute_flips;
use othello_core::player::choose_move;
use othello_core::rating;
use othello_core::{Board, Color, GameState, Position, Turn, find_legal_moves};

fn check_position(game: &GameState) {
    let board = game.board();
    let color = game.side_to_move();
    for &m in &game.legal_moves() {
        assert!(board.is_empty_at(m), "{m} is occupied");
        assert!(!compute_flips(board, m, color).is_empty(), "{m} flips nothing");
        assert_eq!(rating::rate(board, m, color), rating::rate(board, m, color));
    }
}

/// Plays `opening` and then lets the computer play both sides to the end.
fn play_out(opening: Position) -> GameState {
    let mut game = GameState::new();
    let mut next = Some(opening);
    let mut plies = 0;

    while let Some(pos) = next {
        check_position(&game);
        let color = game.side_to_move();
        let before = game.score();

        let turn = game.play_move(pos).unwrap();
        plies += 1;

        let after = game.score();
        let flipped = game.history().last().unwrap().flipped.len() as u32;
        assert_eq!(after.total(), before.total() + 1);
        assert_eq!(after.of(color), before.of(color) + 1 + flipped);
        assert_eq!(after.of(color.opposite()), before.of(color.opposite()) - flipped);

        next = match turn {
            Turn::Move(c) | Turn::Pass { next: c, .. } => {
                assert_eq!(c, game.side_to_move());
                Some(choose_move(game.board(), c).unwrap().position)
            }
            Turn::GameOver(_) => None,
        };
        assert!(plies <= 60);
    }
    game
}

#[test]
fn test_selfplay_from_every_opening() {
    for &opening in &find_legal_moves(&Board::new(), Color::Black) {
        let game = play_out(opening);
        let outcome = game.outcome().unwrap();
        let board = game.board();

        assert!(find_legal_moves(board, Color::Black).is_empty() || board.is_full());
        assert!(find_legal_moves(board, Color::White).is_empty() || board.is_full());
        assert_eq!(outcome.stalemate, !board.is_full());
        assert_eq!(outcome.score, board.count_disks());
        assert_eq!(outcome.winner, outcome.score.leader());
        assert_eq!(game.history().count() as u32 + 4, outcome.score.total());
    }
}

#[test]
fn test_selfplay_is_deterministic() {
    let first = play_out("c4".parse().unwrap());
    let second = play_out("c4".parse().unwrap());
    assert_eq!(first.board(), second.board());
    assert_eq!(first.outcome(), second.outcome());
}

#[test]
fn test_undo_whole_game() {
    let mut game = play_out("f5".parse().unwrap());
    while game.undo() {}
    assert_eq!(*game.board(), Board::new());
    assert!(!game.is_game_over());
}
