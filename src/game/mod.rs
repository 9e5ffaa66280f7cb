//! Core game logic: board with gravity drops, four-axis win detection, the
//! turn/status state machine and the scored two-player session on top.

mod board;
mod player;
mod session;
mod state;

pub use board::{detect_win, winning_run, Board, Cell, COLS, ROWS, WIN_LENGTH};
pub use player::Player;
pub use session::{start_game, GameSession, MoveResult, Scores};
pub use state::{GameState, GameStatus, MoveError, Placement};
