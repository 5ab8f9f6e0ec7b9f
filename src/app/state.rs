//! Game state machine
//!
//! A session is in exactly one of four phases. Transitions are pure:
//! the controller applies them and performs any side effects (scoring,
//! regeneration) only when the phase actually changed. Events that have
//! no legal transition from the current phase fall through as no-ops.

use std::fmt;

/// Session phase gating which actions are permitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Puzzle generated, timer at zero, waiting for start.
    Ready,
    /// Timer running, answers accepted.
    Playing,
    /// Timer frozen; resuming continues the same attempt.
    Paused,
    /// Scored. Terminal except via reset.
    Completed,
}

impl Default for GameState {
    fn default() -> Self {
        GameState::Ready
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GameState::Ready => "ready",
            GameState::Playing => "playing",
            GameState::Paused => "paused",
            GameState::Completed => "completed",
        };
        f.write_str(label)
    }
}

/// Events that drive the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateEvent {
    Start,
    Pause,
    Stop,
    Reset,
}

/// State machine for session phase transitions.
pub struct StateMachine;

impl StateMachine {
    /// Processes a state event and returns the new state.
    ///
    /// # Arguments
    /// * `current` - current session phase
    /// * `event` - event to process
    ///
    /// # Returns
    /// The new phase; identical to `current` when the event has no
    /// legal transition.
    pub fn process_event(current: GameState, event: StateEvent) -> GameState {
        match (current, event) {
            (GameState::Ready, StateEvent::Start) => GameState::Playing,
            (GameState::Paused, StateEvent::Start) => GameState::Playing,

            (GameState::Playing, StateEvent::Pause) => GameState::Paused,

            (GameState::Playing, StateEvent::Stop) => GameState::Completed,
            (GameState::Paused, StateEvent::Stop) => GameState::Completed,

            // Reset is legal from anywhere.
            (_, StateEvent::Reset) => GameState::Ready,

            // Invalid transitions - ignore event.
            (state, _) => state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_ready() {
        assert_eq!(GameState::default(), GameState::Ready);
    }

    #[test]
    fn start_from_ready_and_paused() {
        assert_eq!(
            StateMachine::process_event(GameState::Ready, StateEvent::Start),
            GameState::Playing
        );
        assert_eq!(
            StateMachine::process_event(GameState::Paused, StateEvent::Start),
            GameState::Playing
        );
    }

    #[test]
    fn start_is_noop_elsewhere() {
        assert_eq!(
            StateMachine::process_event(GameState::Playing, StateEvent::Start),
            GameState::Playing
        );
        assert_eq!(
            StateMachine::process_event(GameState::Completed, StateEvent::Start),
            GameState::Completed
        );
    }

    #[test]
    fn pause_only_while_playing() {
        assert_eq!(
            StateMachine::process_event(GameState::Playing, StateEvent::Pause),
            GameState::Paused
        );
        for state in [GameState::Ready, GameState::Paused, GameState::Completed] {
            assert_eq!(StateMachine::process_event(state, StateEvent::Pause), state);
        }
    }

    #[test]
    fn stop_from_playing_or_paused() {
        assert_eq!(
            StateMachine::process_event(GameState::Playing, StateEvent::Stop),
            GameState::Completed
        );
        assert_eq!(
            StateMachine::process_event(GameState::Paused, StateEvent::Stop),
            GameState::Completed
        );
        for state in [GameState::Ready, GameState::Completed] {
            assert_eq!(StateMachine::process_event(state, StateEvent::Stop), state);
        }
    }

    #[test]
    fn reset_is_always_legal() {
        for state in [
            GameState::Ready,
            GameState::Playing,
            GameState::Paused,
            GameState::Completed,
        ] {
            assert_eq!(
                StateMachine::process_event(state, StateEvent::Reset),
                GameState::Ready
            );
        }
    }

    #[test]
    fn completed_is_terminal_except_reset() {
        for event in [StateEvent::Start, StateEvent::Pause, StateEvent::Stop] {
            assert_eq!(
                StateMachine::process_event(GameState::Completed, event),
                GameState::Completed
            );
        }
    }
}
