use crate::config::AppConfig;
use crate::game::{start_game, GameSession, COLS};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;
use tracing::info;

/// Name entry screen state.
#[derive(Debug, Clone, Default)]
pub struct StartScreen {
    pub(crate) names: [String; 2],
    pub(crate) focus: usize,
}

impl StartScreen {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        StartScreen {
            names: [first.into(), second.into()],
            focus: 0,
        }
    }

    pub fn names(&self) -> (&str, &str) {
        (&self.names[0], &self.names[1])
    }

    fn switch_focus(&mut self) {
        self.focus = 1 - self.focus;
    }
}

/// Game screen state: the session plus the column cursor.
#[derive(Debug, Clone)]
pub struct GameScreen {
    pub(crate) session: GameSession,
    pub(crate) selected_column: usize,
    pub(crate) start_column: usize,
    pub(crate) message: Option<String>,
}

impl GameScreen {
    fn new(session: GameSession, start_column: usize) -> Self {
        GameScreen {
            session,
            selected_column: start_column,
            start_column,
            message: None,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Drop a piece into `column` and describe what happened
    fn drop_piece(&mut self, column: usize) {
        self.selected_column = column;

        if self.session.state().is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        let result = self.session.apply_move(column);
        if !result.was_accepted() {
            self.message = Some(if self.session.state().is_board_full() {
                "Board is full! Press 'r' to restart.".to_string()
            } else {
                "Column is full!".to_string()
            });
        } else if self.session.state().is_board_full() && result.winner.is_none() {
            self.message = Some("Board is full! Press 'r' to restart.".to_string());
        }
    }

    fn restart(&mut self) {
        self.session.reset();
        self.selected_column = self.start_column;
        self.message = Some("New game started!".to_string());
    }
}

#[derive(Debug, Clone)]
pub enum Screen {
    Start(StartScreen),
    Game(GameScreen),
}

pub struct App {
    screen: Screen,
    config: AppConfig,
    should_quit: bool,
}

impl App {
    /// Open on the start screen with the name inputs prefilled
    pub fn new(config: AppConfig, first: impl Into<String>, second: impl Into<String>) -> Self {
        App {
            screen: Screen::Start(StartScreen::new(first, second)),
            config,
            should_quit: false,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        let timeout = Duration::from_millis(self.config.ui.poll_interval_ms);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        let next = match &mut self.screen {
            Screen::Start(start) => match key.code {
                KeyCode::Esc => {
                    self.should_quit = true;
                    None
                }
                KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                    start.switch_focus();
                    None
                }
                KeyCode::Backspace => {
                    start.names[start.focus].pop();
                    None
                }
                KeyCode::Char(c) => {
                    start.names[start.focus].push(c);
                    None
                }
                KeyCode::Enter => {
                    let (first, second) = start.names();
                    let session = start_game(first, second);
                    Some(Screen::Game(GameScreen::new(
                        session,
                        self.config.ui.start_column,
                    )))
                }
                _ => None,
            },
            Screen::Game(game) => {
                game.message = None;
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => {
                        self.should_quit = true;
                        None
                    }
                    KeyCode::Char('b') | KeyCode::Backspace => {
                        info!("left the game screen");
                        let first = game.session.player_name(crate::game::Player::Red);
                        let second = game.session.player_name(crate::game::Player::Yellow);
                        Some(Screen::Start(StartScreen::new(first, second)))
                    }
                    KeyCode::Left => {
                        game.selected_column = game.selected_column.saturating_sub(1);
                        None
                    }
                    KeyCode::Right => {
                        if game.selected_column + 1 < COLS {
                            game.selected_column += 1;
                        }
                        None
                    }
                    KeyCode::Enter | KeyCode::Char(' ') => {
                        game.drop_piece(game.selected_column);
                        None
                    }
                    KeyCode::Char(c @ '1'..='7') => {
                        game.drop_piece(c as usize - '1' as usize);
                        None
                    }
                    KeyCode::Char('r') => {
                        game.restart();
                        None
                    }
                    _ => None,
                }
            }
        };

        if let Some(screen) = next {
            self.screen = screen;
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        match &self.screen {
            Screen::Start(start) => super::start_view::render(frame, start, &self.config.players),
            Screen::Game(game) => super::game_view::render(frame, game),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default(), "", "")
    }
}
