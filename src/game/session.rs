use tracing::{debug, info};

use super::{Board, GameState, Player};

/// Wins per player for the lifetime of one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scores {
    red: u32,
    yellow: u32,
}

impl Scores {
    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::Red => self.red,
            Player::Yellow => self.yellow,
        }
    }

    fn record_win(&mut self, player: Player) {
        match player {
            Player::Red => self.red += 1,
            Player::Yellow => self.yellow += 1,
        }
    }
}

/// Snapshot returned by [`GameSession::apply_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// Board after the move (unchanged when the move was ignored)
    pub board: Board,
    /// (row, col) of the placed piece, `None` when the move was ignored
    pub placed: Option<(usize, usize)>,
    /// Set only when this very move completed a run
    pub winner: Option<Player>,
}

impl MoveResult {
    pub fn was_accepted(&self) -> bool {
        self.placed.is_some()
    }
}

/// One sitting at the game screen: two named players, the current game and
/// the running score. Restarting keeps the score; dropping the session
/// discards it.
#[derive(Debug, Clone)]
pub struct GameSession {
    names: [String; 2],
    state: GameState,
    scores: Scores,
}

/// Open a session for two players. Names are taken verbatim, empty included.
pub fn start_game(first_name: impl Into<String>, second_name: impl Into<String>) -> GameSession {
    GameSession::new(first_name, second_name)
}

impl GameSession {
    pub fn new(first_name: impl Into<String>, second_name: impl Into<String>) -> Self {
        let names = [first_name.into(), second_name.into()];
        info!(first = %names[0], second = %names[1], "game session started");
        GameSession {
            names,
            state: GameState::initial(),
            scores: Scores::default(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn board(&self) -> &Board {
        self.state.board()
    }

    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// Display name entered for `player`
    pub fn player_name(&self, player: Player) -> &str {
        match player {
            Player::Red => &self.names[0],
            Player::Yellow => &self.names[1],
        }
    }

    /// Drop the current player's piece into `column`.
    ///
    /// Full or out-of-range columns and moves after a win are ignored: the
    /// result then carries the untouched board and no placement.
    pub fn apply_move(&mut self, column: usize) -> MoveResult {
        let mover = self.state.current_player();
        match self.state.apply_move(column) {
            Ok(placement) => {
                debug!(
                    player = mover.name(),
                    row = placement.row,
                    col = placement.col,
                    "piece dropped"
                );
                if let Some(winner) = placement.winner {
                    self.scores.record_win(winner);
                    info!(
                        player = winner.name(),
                        name = self.player_name(winner),
                        score = self.scores.get(winner),
                        "game won"
                    );
                }
                MoveResult {
                    board: *self.state.board(),
                    placed: Some((placement.row, placement.col)),
                    winner: placement.winner,
                }
            }
            Err(reason) => {
                debug!(column, %reason, "move ignored");
                MoveResult {
                    board: *self.state.board(),
                    placed: None,
                    winner: None,
                }
            }
        }
    }

    /// Start a fresh game with the same players. Scores are kept.
    pub fn reset(&mut self) {
        self.state.reset();
        info!("game restarted");
    }
}

#[cfg(test)]
mod tests {
    use super::super::{Cell, GameStatus, COLS, ROWS};
    use super::*;

    /// Column order that fills the board without anyone connecting four.
    fn drawn_game_moves() -> Vec<usize> {
        let order = [0, 1, 2, 4, 3, 5, 6];
        let blocks: Vec<usize> = order.iter().flat_map(|&c| [c; 3]).collect();
        blocks.iter().chain(blocks.iter()).copied().collect()
    }

    #[test]
    fn test_start_game_keeps_names() {
        let session = start_game("Ada", "");
        assert_eq!(session.player_name(Player::Red), "Ada");
        assert_eq!(session.player_name(Player::Yellow), "");
        assert_eq!(session.scores(), Scores::default());
        assert_eq!(session.state().status(), GameStatus::InProgress);
    }

    #[test]
    fn test_move_reports_placement() {
        let mut session = start_game("A", "B");
        let result = session.apply_move(4);
        assert_eq!(result.placed, Some((ROWS - 1, 4)));
        assert_eq!(result.board.get(ROWS - 1, 4), Cell::Red);
        assert_eq!(result.winner, None);
        assert_eq!(session.state().current_player(), Player::Yellow);
    }

    #[test]
    fn test_column_three_scenario() {
        let mut session = start_game("A", "B");
        for _ in 0..3 {
            assert_eq!(session.apply_move(3).winner, None);
            assert_eq!(session.apply_move(0).winner, None);
        }
        let result = session.apply_move(3);

        assert_eq!(result.winner, Some(Player::Red));
        assert_eq!(result.placed, Some((2, 3)));
        assert_eq!(session.state().status(), GameStatus::Won(Player::Red));
        assert_eq!(session.scores().get(Player::Red), 1);
        assert_eq!(session.scores().get(Player::Yellow), 0);
    }

    #[test]
    fn test_moves_after_win_are_ignored() {
        let mut session = start_game("A", "B");
        for _ in 0..3 {
            session.apply_move(3);
            session.apply_move(0);
        }
        session.apply_move(3);
        let board = *session.board();

        for col in 0..COLS {
            let result = session.apply_move(col);
            assert!(!result.was_accepted());
            assert_eq!(result.winner, None);
            assert_eq!(result.board, board);
        }
        assert_eq!(session.scores().get(Player::Red), 1);
        assert_eq!(session.state().status(), GameStatus::Won(Player::Red));
    }

    #[test]
    fn test_full_column_is_a_no_op() {
        let mut session = start_game("A", "B");
        for _ in 0..ROWS {
            session.apply_move(6);
        }
        let before = *session.state();
        let result = session.apply_move(6);
        assert_eq!(result.placed, None);
        assert_eq!(*session.state(), before);
    }

    #[test]
    fn test_out_of_range_column_is_a_no_op() {
        let mut session = start_game("A", "B");
        let result = session.apply_move(COLS);
        assert!(!result.was_accepted());
        assert_eq!(*session.state(), GameState::initial());
    }

    #[test]
    fn test_full_board_without_winner() {
        let mut session = start_game("A", "B");
        for col in drawn_game_moves() {
            let result = session.apply_move(col);
            assert!(result.was_accepted());
            assert_eq!(result.winner, None);
        }
        assert!(session.state().is_board_full());
        assert_eq!(session.state().status(), GameStatus::InProgress);

        let board = *session.board();
        for col in 0..COLS {
            let result = session.apply_move(col);
            assert_eq!(result.board, board);
            assert_eq!(result.winner, None);
            assert_eq!(result.placed, None);
        }
        assert_eq!(session.scores(), Scores::default());
    }

    #[test]
    fn test_reset_keeps_scores() {
        let mut session = start_game("A", "B");
        for _ in 0..3 {
            session.apply_move(3);
            session.apply_move(0);
        }
        session.apply_move(3);
        session.reset();

        assert_eq!(*session.state(), GameState::initial());
        assert_eq!(session.state().current_player(), Player::Red);
        assert_eq!(session.scores().get(Player::Red), 1);

        // Yellow wins the second game
        session.apply_move(0);
        for _ in 0..3 {
            session.apply_move(6);
            session.apply_move(1);
        }
        let result = session.apply_move(6);
        assert_eq!(result.winner, Some(Player::Yellow));
        assert_eq!(session.scores().get(Player::Red), 1);
        assert_eq!(session.scores().get(Player::Yellow), 1);
    }
}
