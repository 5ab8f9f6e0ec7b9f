//! Game controller and coordination layer
//!
//! [`Game`] owns the whole session: headers, answer sheet, cursor,
//! phase, timer count and the final results. Every inbound operation of
//! the game runs through here, so state invariants (headers and answers
//! replaced together, results existing only once completed, timer
//! advancing only while playing) hold by construction. The controller
//! never touches the terminal; the ui layer reads its accessors and
//! forwards events.

use log::debug;
use rand::Rng;

use crate::app::state::{GameState, StateEvent, StateMachine};
use crate::config::GameConfig;
use crate::domain::answers::{AnswerFormat, AnswerSheet};
use crate::domain::cell::CellId;
use crate::domain::navigation::{Cursor, Direction, Navigator};
use crate::domain::puzzle::{Difficulty, Headers, Operation};
use crate::domain::scoring::{self, CellOutcome, Results};

/// Presentation class for one cell, derived from phase and selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStyle {
    /// Playable and not selected.
    Normal,
    /// Playable and currently selected.
    Selected,
    /// Completed: no answer was given.
    Unanswered,
    /// Completed: answer matched exactly.
    Correct,
    /// Completed: answer present but wrong.
    Incorrect,
}

/// One full drill session.
pub struct Game {
    config: GameConfig,
    operation: Operation,
    difficulty: Difficulty,
    headers: Headers,
    answers: AnswerSheet,
    navigator: Navigator,
    state: GameState,
    elapsed_seconds: u64,
    results: Option<Results>,
}

impl Game {
    /// Creates a session with a freshly generated puzzle, ready to start.
    pub fn new(config: GameConfig) -> Game {
        Game::with_rng(config, &mut rand::thread_rng())
    }

    /// Creates a session drawing the initial puzzle from the given rng.
    pub fn with_rng<R: Rng>(config: GameConfig, rng: &mut R) -> Game {
        let operation = Operation::Addition;
        let difficulty = Difficulty::Medium;
        Game {
            config,
            operation,
            difficulty,
            headers: Headers::generate(operation, difficulty, config.size, rng),
            answers: AnswerSheet::new(),
            navigator: Navigator::new(config.size),
            state: GameState::default(),
            elapsed_seconds: 0,
            results: None,
        }
    }

    /// Replaces headers and clears the answer sheet as one step, so the
    /// grid never shows old answers against new headers.
    fn regenerate(&mut self) {
        self.headers = Headers::generate(
            self.operation,
            self.difficulty,
            self.config.size,
            &mut rand::thread_rng(),
        );
        self.answers.clear();
        debug!(
            "new {} puzzle at {} difficulty",
            self.operation.label(),
            self.difficulty.label()
        );
    }

    /// Runs one state machine event; true if the phase changed.
    fn apply(&mut self, event: StateEvent) -> bool {
        let next = StateMachine::process_event(self.state, event);
        if next == self.state {
            return false;
        }
        debug!("state {} -> {} on {:?}", self.state, next, event);
        self.state = next;
        true
    }

    // --- inbound: session control -------------------------------------

    /// Starts or resumes play. No-op unless ready or paused.
    pub fn start(&mut self) {
        self.apply(StateEvent::Start);
    }

    /// Freezes the timer. No-op unless playing.
    pub fn pause(&mut self) {
        self.apply(StateEvent::Pause);
    }

    /// Ends the attempt and scores every cell. No-op unless playing or
    /// paused.
    pub fn stop(&mut self) {
        if self.apply(StateEvent::Stop) {
            let results = scoring::score(
                &self.headers,
                &self.answers,
                self.operation,
                self.elapsed_seconds,
            );
            debug!(
                "scored: {} correct, {} incorrect, {} unanswered",
                results.correct, results.incorrect, results.unanswered
            );
            self.results = Some(results);
        }
    }

    /// Returns to ready: timer cleared, puzzle regenerated, selection
    /// and results dropped. Legal from every phase.
    pub fn reset(&mut self) {
        self.apply(StateEvent::Reset);
        self.elapsed_seconds = 0;
        self.results = None;
        self.regenerate();
        self.navigator.clear();
    }

    /// Draws a fresh puzzle without touching phase or timer. Refused
    /// while playing.
    pub fn new_puzzle(&mut self) {
        if self.state == GameState::Playing {
            return;
        }
        self.regenerate();
        self.navigator.clear();
    }

    /// Switches the operation and fully resets the session.
    pub fn set_operation(&mut self, operation: Operation) {
        self.operation = operation;
        self.reset();
    }

    /// Switches the difficulty tier and fully resets the session.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.reset();
    }

    /// Advances to the next operation in display order.
    pub fn cycle_operation(&mut self) {
        self.set_operation(self.operation.next());
    }

    /// Advances to the next difficulty tier.
    pub fn cycle_difficulty(&mut self) {
        self.set_difficulty(self.difficulty.next());
    }

    /// Counts one elapsed second. Ignored outside of play, so a stale
    /// tick arriving after a pause or stop cannot advance the clock.
    pub fn tick(&mut self) {
        if self.state == GameState::Playing {
            self.elapsed_seconds += 1;
        }
    }

    // --- inbound: answers ---------------------------------------------

    /// Stores answer text for a cell, subject to the operation's format.
    /// Honored only while playing; malformed text is silently dropped
    /// and the prior value kept.
    pub fn set_answer(&mut self, cell: CellId, text: &str) {
        if self.state != GameState::Playing {
            return;
        }
        self.answers.set(cell, text, self.answer_format());
    }

    /// Appends one character to the selected cell's answer.
    pub fn type_char(&mut self, c: char) {
        let Some(cell) = self.navigator.selected_cell() else {
            return;
        };
        let mut text = self.answers.get(cell).to_string();
        text.push(c);
        self.set_answer(cell, &text);
    }

    /// Removes the last character of the selected cell's answer.
    pub fn erase_char(&mut self) {
        let Some(cell) = self.navigator.selected_cell() else {
            return;
        };
        let mut text = self.answers.get(cell).to_string();
        text.pop();
        self.set_answer(cell, &text);
    }

    /// Clears the selected cell's answer.
    pub fn clear_answer(&mut self) {
        if let Some(cell) = self.navigator.selected_cell() {
            self.set_answer(cell, "");
        }
    }

    // --- inbound: navigation ------------------------------------------

    /// Pointer-style selection. Ignored once completed or out of range.
    pub fn select(&mut self, row: usize, col: usize) {
        if self.state == GameState::Completed {
            return;
        }
        self.navigator.select(row, col);
    }

    /// Directional step. Ignored once completed.
    pub fn step(&mut self, direction: Direction) {
        if self.state == GameState::Completed {
            return;
        }
        self.navigator.step(direction);
    }

    /// Tab order, forward. Ignored once completed.
    pub fn tab_forward(&mut self) {
        if self.state == GameState::Completed {
            return;
        }
        self.navigator.tab_forward();
    }

    /// Tab order, backward. Ignored once completed.
    pub fn tab_backward(&mut self) {
        if self.state == GameState::Completed {
            return;
        }
        self.navigator.tab_backward();
    }

    // --- outbound ------------------------------------------------------

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Number of regular rows/columns.
    pub fn size(&self) -> usize {
        self.config.size
    }

    pub fn selection(&self) -> Option<Cursor> {
        self.navigator.selection()
    }

    pub fn selected_cell(&self) -> Option<CellId> {
        self.navigator.selected_cell()
    }

    /// Raw answer text for a cell; empty when unanswered.
    pub fn answer(&self, cell: CellId) -> &str {
        self.answers.get(cell)
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    /// Result summary; present only once completed.
    pub fn results(&self) -> Option<&Results> {
        self.results.as_ref()
    }

    /// Text format answers must match under the current operation.
    pub fn answer_format(&self) -> AnswerFormat {
        AnswerFormat::for_operation(self.operation)
    }

    /// Presentation class for a cell: outcome colors once completed,
    /// selection highlight while playable.
    pub fn cell_style(&self, cell: CellId) -> CellStyle {
        if self.state == GameState::Completed {
            let expected = scoring::expected_for_cell(&self.headers, cell, self.operation);
            return match scoring::classify(self.answers.get(cell), expected) {
                CellOutcome::Unanswered => CellStyle::Unanswered,
                CellOutcome::Correct => CellStyle::Correct,
                CellOutcome::Incorrect => CellStyle::Incorrect,
            };
        }
        if self.navigator.selected_cell() == Some(cell) {
            CellStyle::Selected
        } else {
            CellStyle::Normal
        }
    }
}
