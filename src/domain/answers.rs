//! Answer sheet: raw text per cell with per-format validation
//!
//! Answers are stored as the text the player typed, not as parsed
//! numbers, so intermediate typing states ("-", "3.") survive and the
//! scoring pass decides what they are worth. Text that does not match
//! the active answer format is silently dropped and the prior value
//! kept; there is no range or plausibility checking.

use std::collections::HashMap;

use crate::domain::cell::CellId;
use crate::domain::puzzle::Operation;

/// Shape of text accepted into a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerFormat {
    /// Optional leading minus followed by digits.
    Integer,
    /// Optional leading minus, digits, at most one decimal point.
    Decimal,
}

impl AnswerFormat {
    /// Division quotients may be fractional; every other operation
    /// produces integers.
    pub fn for_operation(operation: Operation) -> AnswerFormat {
        match operation {
            Operation::Division => AnswerFormat::Decimal,
            _ => AnswerFormat::Integer,
        }
    }

    /// Checks whether the text is a (possibly partial) literal of this
    /// format. The empty string is always accepted: it clears the cell.
    pub fn accepts(&self, text: &str) -> bool {
        let digits = text.strip_prefix('-').unwrap_or(text);
        match self {
            AnswerFormat::Integer => digits.chars().all(|c| c.is_ascii_digit()),
            AnswerFormat::Decimal => {
                let mut seen_point = false;
                digits.chars().all(|c| {
                    if c == '.' {
                        !std::mem::replace(&mut seen_point, true)
                    } else {
                        c.is_ascii_digit()
                    }
                })
            }
        }
    }
}

/// Mapping from cell id to raw answer text.
///
/// A cell that is absent, or present with an empty string, counts as
/// unanswered.
#[derive(Debug, Clone, Default)]
pub struct AnswerSheet {
    entries: HashMap<CellId, String>,
}

impl AnswerSheet {
    pub fn new() -> AnswerSheet {
        AnswerSheet::default()
    }

    /// Stores the text for a cell if it matches the format; otherwise
    /// the call is a no-op and the prior value is retained.
    pub fn set(&mut self, cell: CellId, text: &str, format: AnswerFormat) {
        if !format.accepts(text) {
            log::debug!("rejected answer text {:?} for {}", text, cell);
            return;
        }
        self.entries.insert(cell, text.to_string());
    }

    /// Raw text for a cell; empty string if never written.
    pub fn get(&self, cell: CellId) -> &str {
        self.entries.get(&cell).map(String::as_str).unwrap_or("")
    }

    /// True if the cell holds non-empty text.
    pub fn is_answered(&self, cell: CellId) -> bool {
        !self.get(cell).is_empty()
    }

    /// Drops every stored answer.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
