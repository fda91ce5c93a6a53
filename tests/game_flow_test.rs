//! Tests for the game controller.

use tictactoe_timeline::{Game, GameStatus, Mark, Move, MoveError, Position};

fn game_after(cells: &[usize]) -> Game {
    let mut game = Game::new();
    for cell in cells {
        game.handle_cell_click(*cell).expect("Valid move");
    }
    game
}

#[test]
fn test_lifecycle() {
    let mut game = Game::new();
    assert_eq!(game.status(), GameStatus::InProgress { next: Mark::X });

    let mov = game.handle_cell_click(4).expect("Valid move");
    assert_eq!(mov, Move::new(Mark::X, Position::Center));
    assert_eq!(game.status(), GameStatus::InProgress { next: Mark::O });
    assert_eq!(game.move_status(), "You are at move #1");
}

#[test]
fn test_occupied_cell_rejected() {
    let mut game = game_after(&[4]);
    let result = game.handle_cell_click(4);
    assert!(matches!(result, Err(MoveError::SquareOccupied(Position::Center))));
    assert_eq!(game.history().len(), 2);
}

#[test]
fn test_win_detection() {
    // X takes the left column.
    let game = game_after(&[0, 1, 3, 2, 6]);
    match game.status() {
        GameStatus::Won(win) => {
            assert_eq!(win.mark, Mark::X);
            assert_eq!(win.line.indices(), [0, 3, 6]);
        }
        other => panic!("Expected a win, got {other:?}"),
    }
}

#[test]
fn test_draw_detection() {
    let game = game_after(&[0, 4, 2, 1, 7, 3, 5, 8, 6]);
    assert_eq!(game.status(), GameStatus::Draw);
}

#[test]
fn test_no_moves_after_win() {
    let mut game = game_after(&[0, 1, 3, 2, 6]);
    assert_eq!(game.handle_cell_click(8), Err(MoveError::GameOver));
    assert_eq!(game.history().len(), 6);
}

#[test]
fn test_time_travel_then_branch() {
    let mut game = game_after(&[4, 0]);
    game.jump_to(1).unwrap();
    assert_eq!(game.status(), GameStatus::InProgress { next: Mark::O });

    let mov = game.handle_cell_click(8).unwrap();
    assert_eq!(mov, Move::new(Mark::O, Position::BottomRight));
    assert_eq!(game.history().len(), 3);
    assert_eq!(game.history().cursor(), 2);
    assert!(game.history().current_snapshot().is_empty(Position::TopLeft));
}

#[test]
fn test_view_follows_cursor() {
    let mut game = game_after(&[0, 1, 3, 2, 6]);
    assert!(game.view().cells.iter().any(|c| c.highlighted));

    game.jump_to(2).unwrap();
    let view = game.view();
    assert!(view.cells.iter().all(|c| !c.highlighted));
    assert_eq!(view.cursor, 2);
    assert_eq!(view.moves.iter().filter(|m| m.is_current).count(), 1);
    assert!(view.moves[2].is_current);
}
