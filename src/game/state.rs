use super::board;
use super::{Board, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column is full")]
    ColumnFull,
    #[error("column is out of range")]
    InvalidColumn,
    #[error("game is already won")]
    GameOver,
}

impl From<board::MoveError> for MoveError {
    fn from(e: board::MoveError) -> Self {
        match e {
            board::MoveError::ColumnFull => MoveError::ColumnFull,
            board::MoveError::InvalidColumn => MoveError::InvalidColumn,
        }
    }
}

/// Where an accepted move landed and whether it won the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub winner: Option<Player>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    status: GameStatus,
    last_move: Option<(usize, usize)>,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::FIRST,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Winning player once the game is over
    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::Won(player) => Some(player),
            GameStatus::InProgress => None,
        }
    }

    /// Check if the game is over
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some()
    }

    /// No column has room left. Not a terminal state of its own: moves
    /// simply stop being accepted.
    pub fn is_board_full(&self) -> bool {
        self.board.is_full()
    }

    /// Cells of the winning run, once the game is won
    pub fn winning_run(&self) -> Option<Vec<(usize, usize)>> {
        let winner = self.winner()?;
        let (row, col) = self.last_move?;
        board::winning_run(&self.board, row, col, winner.to_cell())
    }

    /// Drop the current player's piece into `column`.
    ///
    /// On error nothing changes. On a win the turn is left with the winner;
    /// otherwise it passes to the other player.
    pub fn apply_move(&mut self, column: usize) -> Result<Placement, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let mover = self.current_player;
        let row = self.board.drop_piece(column, mover.to_cell())?;
        self.last_move = Some((row, column));

        let winner = if board::detect_win(&self.board, row, column, mover.to_cell()) {
            self.status = GameStatus::Won(mover);
            Some(mover)
        } else {
            self.current_player = mover.other();
            None
        };

        Ok(Placement {
            row,
            col: column,
            winner,
        })
    }

    /// Back to an empty board with the first player to move
    pub fn reset(&mut self) {
        *self = GameState::initial();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
