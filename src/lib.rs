//! # Raise To Four
//!
//! A two-player drop-four board game in the terminal. Players enter their
//! names, then take turns dropping pieces into a six-by-seven grid; the first
//! to line up four in a row, column or diagonal wins the round and a point.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, player, win detection, scored session
//! - [`ui`]: Terminal UI: start screen, game screen
//! - [`config`]: TOML configuration loading and validation
//! - [`logging`]: File-backed `tracing` subscriber
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;
