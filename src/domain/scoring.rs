//! Scoring: expected answers, totals and the result summary
//!
//! Every cell — regular, row total, column total, grand total — is
//! classified against the same [`expected_answer`] function, so the
//! totals are by construction the sums of the per-cell expectations.
//! Comparison is exact: the parsed answer must equal the expected value
//! to full `f64` precision, with no tolerance.

use crate::domain::answers::AnswerSheet;
use crate::domain::cell::CellId;
use crate::domain::puzzle::{Headers, Operation};

/// How one cell scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellOutcome {
    /// No text, or only the empty string, was stored.
    Unanswered,
    /// Parsed value equals the expected value exactly.
    Correct,
    /// Text was present but wrong, or not parseable as a number.
    Incorrect,
}

/// Snapshot computed once when the game completes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Results {
    pub correct: usize,
    pub incorrect: usize,
    pub unanswered: usize,
    /// Whole seconds the game ran.
    pub total_time: u64,
    /// `total_time / (correct + incorrect)`, 0 when nothing was answered.
    pub average_time_per_answer: f64,
}

/// Expected value for one regular cell. Division is real-valued, not
/// integer-truncated; a zero divisor yields a non-finite value, which
/// never compares equal to any parsed finite answer.
pub fn expected_answer(a: i64, b: i64, operation: Operation) -> f64 {
    match operation {
        Operation::Addition => (a + b) as f64,
        Operation::Subtraction => (a - b) as f64,
        Operation::Multiplication => (a * b) as f64,
        Operation::Division => a as f64 / b as f64,
    }
}

/// Expected total of one row: the row header against every column.
pub fn row_total(headers: &Headers, row: usize, operation: Operation) -> f64 {
    headers
        .cols()
        .iter()
        .map(|&col| expected_answer(headers.row(row), col, operation))
        .sum()
}

/// Expected total of one column: every row header against it.
pub fn col_total(headers: &Headers, col: usize, operation: Operation) -> f64 {
    headers
        .rows()
        .iter()
        .map(|&row| expected_answer(row, headers.col(col), operation))
        .sum()
}

/// Expected total over all regular cells.
pub fn grand_total(headers: &Headers, operation: Operation) -> f64 {
    headers
        .rows()
        .iter()
        .map(|&row| {
            headers
                .cols()
                .iter()
                .map(|&col| expected_answer(row, col, operation))
                .sum::<f64>()
        })
        .sum()
}

/// Expected value for any cell id.
pub fn expected_for_cell(headers: &Headers, cell: CellId, operation: Operation) -> f64 {
    match cell {
        CellId::Cell { row, col } => {
            expected_answer(headers.row(row), headers.col(col), operation)
        }
        CellId::RowTotal(row) => row_total(headers, row, operation),
        CellId::ColTotal(col) => col_total(headers, col, operation),
        CellId::GrandTotal => grand_total(headers, operation),
    }
}

/// Classifies one cell's stored text against its expected value.
pub fn classify(text: &str, expected: f64) -> CellOutcome {
    if text.is_empty() {
        return CellOutcome::Unanswered;
    }
    match text.parse::<f64>() {
        // Exact equality: totals and quotients must match to full precision.
        Ok(value) if value == expected => CellOutcome::Correct,
        _ => CellOutcome::Incorrect,
    }
}

/// Scores every cell of the grid and produces the result summary.
///
/// The classification walks the full cell enumeration, so
/// `correct + incorrect + unanswered` always equals the grid's cell
/// count regardless of answer content.
pub fn score(
    headers: &Headers,
    answers: &AnswerSheet,
    operation: Operation,
    elapsed_seconds: u64,
) -> Results {
    let mut correct = 0;
    let mut incorrect = 0;
    let mut unanswered = 0;

    for cell in CellId::all(headers.size()) {
        let expected = expected_for_cell(headers, cell, operation);
        match classify(answers.get(cell), expected) {
            CellOutcome::Correct => correct += 1,
            CellOutcome::Incorrect => incorrect += 1,
            CellOutcome::Unanswered => unanswered += 1,
        }
    }

    let answered = correct + incorrect;
    let average_time_per_answer = if answered > 0 {
        elapsed_seconds as f64 / answered as f64
    } else {
        0.0
    };

    Results {
        correct,
        incorrect,
        unanswered,
        total_time: elapsed_seconds,
        average_time_per_answer,
    }
}
