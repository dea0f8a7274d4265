use proptest::prelude::*;

/// Property-based tests for win detection and turn alternation
use crate::domain::board::{Board, Cell, Mark};
use crate::domain::rules::{decode_cell, GRID};
use crate::domain::session::{GameSession, MarkAssignment, Status, UserId};

fn cell_strategy() -> impl Strategy<Value = Cell> {
    prop_oneof![
        Just(Cell::Empty),
        Just(Cell::Taken(Mark::X)),
        Just(Cell::Taken(Mark::O)),
    ]
}

fn board_strategy() -> impl Strategy<Value = Board> {
    proptest::array::uniform3(proptest::array::uniform3(cell_strategy())).prop_map(Board::from_cells)
}

/// Oracle: scan all 8 candidate lines explicitly.
fn oracle_line_win(board: &Board, mark: Mark) -> bool {
    let lines: [[(usize, usize); 3]; 8] = [
        [(0, 0), (0, 1), (0, 2)],
        [(1, 0), (1, 1), (1, 2)],
        [(2, 0), (2, 1), (2, 2)],
        [(0, 0), (1, 0), (2, 0)],
        [(0, 1), (1, 1), (2, 1)],
        [(0, 2), (1, 2), (2, 2)],
        [(0, 0), (1, 1), (2, 2)],
        [(0, 2), (1, 1), (2, 0)],
    ];
    lines.iter().any(|line| {
        line.iter()
            .all(|&(row, col)| board.cell(row, col) == Cell::Taken(mark))
    })
}

fn started_session() -> GameSession {
    let first = UserId::new("p1");
    let second = UserId::new("p2");
    let mut session = GameSession::new(first.clone());
    session.seat_opponent(second.clone()).unwrap();
    session.begin(MarkAssignment {
        x: first,
        o: second,
    });
    session
}

proptest! {
    /// Property: `has_won` is true iff some full row, column, or diagonal is
    /// entirely the target mark, for any board whatsoever.
    #[test]
    fn has_won_matches_the_line_oracle(board in board_strategy()) {
        for mark in [Mark::X, Mark::O] {
            prop_assert_eq!(board.has_won(mark), oracle_line_win(&board, mark),
                "has_won disagrees with oracle for {:?} on {:?}", mark, board);
        }
    }

    /// Property: `is_full` is true iff no cell is empty.
    #[test]
    fn is_full_matches_the_cell_scan(board in board_strategy()) {
        let any_empty = (0..GRID).any(|row| (0..GRID).any(|col| board.cell(row, col) == Cell::Empty));
        prop_assert_eq!(board.is_full(), !any_empty);
    }

    /// Property: under any submission sequence, accepted moves strictly
    /// alternate marks starting from X, rejections mutate nothing, and a
    /// finished session never changes again.
    #[test]
    fn random_play_keeps_the_alternation_invariant(attempts in prop::collection::vec(0u8..9, 1..40)) {
        let mut session = started_session();
        let mut accepted = 0usize;

        for index in attempts {
            let (row, col) = decode_cell(index).unwrap();
            let before = session.clone();
            let expected_mark = session.turn;

            match session.record_move(row, col) {
                Ok(_) => {
                    prop_assert_eq!(before.status, Status::InProgress);
                    // Accepted move k (0-based) belongs to X on even k.
                    let mark = if accepted % 2 == 0 { Mark::X } else { Mark::O };
                    prop_assert_eq!(expected_mark, mark);
                    prop_assert_eq!(session.board.cell(row, col), Cell::Taken(mark));
                    accepted += 1;
                }
                Err(_) => {
                    // Rejection is idempotent: nothing moved.
                    prop_assert_eq!(&session, &before);
                }
            }

            // Placement counts never drift further than one apart.
            let mut x_count = 0i32;
            let mut o_count = 0i32;
            for r in 0..GRID {
                for c in 0..GRID {
                    match session.board.cell(r, c) {
                        Cell::Taken(Mark::X) => x_count += 1,
                        Cell::Taken(Mark::O) => o_count += 1,
                        Cell::Empty => {}
                    }
                }
            }
            prop_assert!(x_count == o_count || x_count == o_count + 1,
                "placements drifted: {} X vs {} O", x_count, o_count);
        }
    }
}
