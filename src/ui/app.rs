//! Terminal lifecycle and event loop
//!
//! Owns the terminal session (raw mode, alternate screen) and the one
//! place where events meet game state: key presses decoded by the input
//! layer and tick messages from the timer thread, processed one at a
//! time. The ticker runs exactly while the game is playing; every
//! command dispatch re-syncs its lifecycle, and dropping the app
//! cancels it on teardown.

use std::io::{self, Stdout};
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use log::info;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::app::controller::Game;
use crate::app::state::GameState;
use crate::app::ticker::{Tick, Ticker};
use crate::config::GameConfig;
use crate::input::{Command, map_key};
use crate::ui::renderer;

/// How long one event poll waits before checking the tick channel.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Errors raised by the terminal frontend.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),
}

/// The running frontend: game state plus the tick plumbing.
pub struct App {
    game: Game,
    config: GameConfig,
    tick_tx: Sender<Tick>,
    tick_rx: Receiver<Tick>,
    ticker: Option<Ticker>,
}

impl App {
    pub fn new(config: GameConfig) -> App {
        let (tick_tx, tick_rx) = mpsc::channel();
        App {
            game: Game::new(config),
            config,
            tick_tx,
            tick_rx,
            ticker: None,
        }
    }

    /// Applies one command to the game.
    ///
    /// # Returns
    /// false when the command ends the program.
    fn dispatch(&mut self, command: Command) -> bool {
        match command {
            Command::Start => self.game.start(),
            Command::Pause => self.game.pause(),
            Command::Stop => self.game.stop(),
            Command::Reset => self.game.reset(),
            Command::NewPuzzle => self.game.new_puzzle(),
            Command::CycleOperation => self.game.cycle_operation(),
            Command::CycleDifficulty => self.game.cycle_difficulty(),
            Command::Move(direction) => self.game.step(direction),
            Command::TabForward => self.game.tab_forward(),
            Command::TabBackward => self.game.tab_backward(),
            Command::Type(c) => self.game.type_char(c),
            Command::Erase => self.game.erase_char(),
            Command::ClearCell => self.game.clear_answer(),
            Command::Quit => return false,
        }
        self.sync_ticker();
        true
    }

    /// Starts the ticker on entering play and cancels it on leaving, so
    /// exactly one recurring process exists while the timer should run.
    fn sync_ticker(&mut self) {
        let playing = self.game.state() == GameState::Playing;
        if playing && self.ticker.is_none() {
            self.ticker = Some(Ticker::spawn(
                self.config.tick_interval,
                self.tick_tx.clone(),
            ));
        } else if !playing && self.ticker.is_some() {
            // Dropping the handle cancels the thread.
            self.ticker = None;
        }
    }

    /// Feeds queued tick messages into the game. Stale ticks raced past
    /// a pause or stop are discarded by the game itself.
    fn drain_ticks(&mut self) {
        while self.tick_rx.try_recv().is_ok() {
            self.game.tick();
        }
    }

    /// Runs the event loop until the player quits.
    pub fn run(mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<(), AppError> {
        info!("event loop started");
        loop {
            self.drain_ticks();
            terminal.draw(|frame| renderer::draw(frame, &self.game))?;

            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            if let Event::Key(key) = event::read()? {
                if let Some(command) = map_key(key) {
                    if !self.dispatch(command) {
                        break;
                    }
                }
            }
        }
        info!("event loop finished");
        Ok(())
    }
}

/// Sets up the terminal, runs the app, and restores the terminal even
/// when the loop fails.
pub fn run(config: GameConfig) -> Result<(), AppError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = App::new(config).run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result
}
