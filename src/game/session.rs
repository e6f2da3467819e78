use super::{Board, Player};

/// Where the game stands. Starts `InProgress` and transitions at most once,
/// to `Won` or `Tied`; never backward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Tied,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// What a move request produced. This is the whole outbound contract with
/// the view layer: it carries everything needed to update a display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Piece landed at (row, col); the game continues.
    Placed { row: usize, col: usize, by: Player },
    /// Piece landed and completed a run of four or more.
    Won { row: usize, col: usize, by: Player },
    /// Piece landed and filled the board with no winner.
    Tied { row: usize, col: usize, by: Player },
    /// Non-actionable request: full or out-of-range column, or the game is
    /// already over. Nothing changed.
    Ignored,
}

/// One game of Connect Four: the board, whose turn it is, and whether the
/// game has ended. Create one per game; there is no shared or global state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSession {
    board: Board,
    active_player: Player,
    status: GameStatus,
}

impl GameSession {
    /// Start a new game with Player 1 to move
    pub fn new() -> Self {
        Self::with_starting_player(Player::One)
    }

    /// Start a new game with the given player to move
    pub fn with_starting_player(player: Player) -> Self {
        GameSession {
            board: Board::new(),
            active_player: player,
            status: GameStatus::InProgress,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose turn it is. After the game ends this stays on the
    /// player who moved last.
    pub fn active_player(&self) -> Player {
        self.active_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Drop the active player's piece into `column`.
    ///
    /// The piece lands in the lowest unoccupied cell of the column. A full
    /// column, a column index past the right edge, and any request after
    /// the game has ended are all ignored rather than treated as errors:
    /// the board, the active player, and the status stay exactly as they
    /// were and `MoveOutcome::Ignored` is reported.
    pub fn drop_piece(&mut self, column: usize) -> MoveOutcome {
        if self.is_over() {
            return MoveOutcome::Ignored;
        }

        let by = self.active_player;
        let Some(row) = self.board.drop_piece(column, by) else {
            return MoveOutcome::Ignored;
        };

        if self.board.check_win(row, column) {
            self.status = GameStatus::Won(by);
            MoveOutcome::Won { row, col: column, by }
        } else if self.board.is_full() {
            self.status = GameStatus::Tied;
            MoveOutcome::Tied { row, col: column, by }
        } else {
            self.active_player = by.other();
            MoveOutcome::Placed { row, col: column, by }
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{COLS, ROWS};

    #[test]
    fn test_initial_state() {
        let session = GameSession::new();
        assert_eq!(session.active_player(), Player::One);
        assert_eq!(session.status(), GameStatus::InProgress);
        assert!(!session.is_over());
        assert_eq!(session.board().occupied(), 0);
    }

    #[test]
    fn test_with_starting_player() {
        let session = GameSession::with_starting_player(Player::Two);
        assert_eq!(session.active_player(), Player::Two);
    }

    #[test]
    fn test_placed_reports_landing_cell() {
        let mut session = GameSession::new();
        let outcome = session.drop_piece(3);
        assert_eq!(
            outcome,
            MoveOutcome::Placed {
                row: 5,
                col: 3,
                by: Player::One
            }
        );
        assert_eq!(session.board().get(5, 3), Some(Player::One));
    }

    #[test]
    fn test_players_alternate_on_successful_moves() {
        let mut session = GameSession::new();
        let mut expected = Player::One;

        for col in [0, 1, 2, 0, 1, 2, 4, 5] {
            assert_eq!(session.active_player(), expected);
            assert!(matches!(
                session.drop_piece(col),
                MoveOutcome::Placed { .. }
            ));
            expected = expected.other();
        }
    }

    #[test]
    fn test_no_toggle_on_ignored_move() {
        let mut session = GameSession::new();

        // Fill column 0
        for _ in 0..ROWS {
            session.drop_piece(0);
        }
        let before = session.active_player();

        assert_eq!(session.drop_piece(0), MoveOutcome::Ignored);
        assert_eq!(session.active_player(), before);

        assert_eq!(session.drop_piece(COLS + 1), MoveOutcome::Ignored);
        assert_eq!(session.active_player(), before);
    }

    #[test]
    fn test_occupied_count_tracks_successful_drops() {
        let mut session = GameSession::new();
        let mut successes = 0;

        // Column 9 never succeeds; column 0 succeeds six times then fills
        for col in [0, 9, 0, 0, 9, 0, 0, 0, 0, 0] {
            if !matches!(session.drop_piece(col), MoveOutcome::Ignored) {
                successes += 1;
            }
        }

        assert_eq!(successes, ROWS);
        assert_eq!(session.board().occupied(), successes);
    }

    #[test]
    fn test_seventh_drop_into_a_column_is_ignored() {
        let mut session = GameSession::new();
        for _ in 0..ROWS {
            assert!(matches!(
                session.drop_piece(2),
                MoveOutcome::Placed { col: 2, .. }
            ));
        }
        assert_eq!(session.drop_piece(2), MoveOutcome::Ignored);
        assert_eq!(session.board().occupied(), ROWS);
    }

    #[test]
    fn test_bottom_row_win() {
        let mut session = GameSession::new();

        // Player 1 claims columns 0..3 along the bottom row; Player 2
        // stacks on top and never completes anything.
        for col in 0..3 {
            assert!(matches!(
                session.drop_piece(col),
                MoveOutcome::Placed { row: 5, by: Player::One, .. }
            ));
            assert_eq!(session.status(), GameStatus::InProgress);
            session.drop_piece(col); // Player 2 on top
        }

        assert_eq!(
            session.drop_piece(3),
            MoveOutcome::Won {
                row: 5,
                col: 3,
                by: Player::One
            }
        );
        assert_eq!(session.status(), GameStatus::Won(Player::One));
        assert!(session.is_over());
    }

    #[test]
    fn test_diagonal_win() {
        let mut session = GameSession::new();

        // Player 1 builds the rising diagonal (5,0) (4,1) (3,2) (2,3);
        // Player 2's replies and Player 1's fillers at (5,3) and (5,6)
        // provide the supporting cells.
        let moves = [0, 1, 1, 2, 3, 2, 2, 3, 6, 3];
        for col in moves {
            assert!(matches!(
                session.drop_piece(col),
                MoveOutcome::Placed { .. }
            ));
        }

        assert_eq!(
            session.drop_piece(3),
            MoveOutcome::Won {
                row: 2,
                col: 3,
                by: Player::One
            }
        );
        assert_eq!(session.status(), GameStatus::Won(Player::One));
    }

    #[test]
    fn test_terminal_state_freezes_everything() {
        let mut session = GameSession::new();

        // Quick vertical win for Player 1 in column 0
        for _ in 0..3 {
            session.drop_piece(0);
            session.drop_piece(1);
        }
        assert!(matches!(session.drop_piece(0), MoveOutcome::Won { .. }));

        let frozen = session;
        for col in 0..COLS {
            assert_eq!(session.drop_piece(col), MoveOutcome::Ignored);
        }
        assert_eq!(session, frozen);
    }

    #[test]
    fn test_winner_stays_active_after_the_game() {
        let mut session = GameSession::new();
        for _ in 0..3 {
            session.drop_piece(0);
            session.drop_piece(1);
        }
        session.drop_piece(0);
        assert_eq!(session.active_player(), Player::One);
    }

    /// Fill the whole board without ever forming a run of four. The target
    /// position colors cell (row, col) by ((col / 2) + row) % 2, which
    /// keeps every axis at runs of at most two:
    ///
    ///   top    2 2 1 1 2 2 1
    ///          1 1 2 2 1 1 2
    ///          2 2 1 1 2 2 1
    ///          1 1 2 2 1 1 2
    ///          2 2 1 1 2 2 1
    ///   bottom 1 1 2 2 1 1 2
    ///
    /// Columns 0/1/4/5 want Player 1 on the bottom; columns 2/3/6 want
    /// Player 2. Interleaving each such pair of columns keeps the turn
    /// order legal all the way to the 42nd piece.
    #[test]
    fn test_full_board_without_a_run_ties() {
        let pair = |a: usize, b: usize| [a, b, b, a, a, b, b, a, a, b, b, a];
        let moves: Vec<usize> = pair(0, 2)
            .into_iter()
            .chain(pair(1, 3))
            .chain(pair(4, 6))
            .chain([5, 5, 5, 5, 5, 5])
            .collect();
        assert_eq!(moves.len(), ROWS * COLS);

        let mut session = GameSession::new();
        for (i, &col) in moves.iter().enumerate() {
            let outcome = session.drop_piece(col);
            if i < moves.len() - 1 {
                assert!(
                    matches!(outcome, MoveOutcome::Placed { .. }),
                    "move {i} into column {col} gave {outcome:?}"
                );
            } else {
                assert!(matches!(outcome, MoveOutcome::Tied { .. }));
            }
        }

        assert_eq!(session.status(), GameStatus::Tied);
        assert_eq!(session.board().occupied(), ROWS * COLS);

        // Terminal: further requests change nothing
        let frozen = session;
        assert_eq!(session.drop_piece(3), MoveOutcome::Ignored);
        assert_eq!(session, frozen);
    }
}
