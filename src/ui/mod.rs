//! Terminal UI: name entry screen and the game screen.

mod app;
mod game_view;
mod start_view;

pub use app::{App, GameScreen, Screen, StartScreen};
