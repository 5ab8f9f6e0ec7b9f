//! Puzzle generation: operations, difficulty tiers and header drawing
//!
//! A puzzle is two sequences of header numbers. Regular cells combine
//! `row op column`; the operation and difficulty select the integer
//! range the headers are drawn from. Division puzzles are generated in
//! divisor/dividend pairs so that at least the same-index row/column
//! pair always divides evenly.

use std::ops::RangeInclusive;

use rand::Rng;

/// The arithmetic function applied to paired row/column headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

impl Operation {
    /// Display symbol shown in the grid corner.
    pub fn symbol(&self) -> char {
        match self {
            Operation::Addition => '+',
            Operation::Subtraction => '-',
            Operation::Multiplication => '×',
            Operation::Division => '÷',
        }
    }

    /// Lowercase name for titles and logging.
    pub fn label(&self) -> &'static str {
        match self {
            Operation::Addition => "addition",
            Operation::Subtraction => "subtraction",
            Operation::Multiplication => "multiplication",
            Operation::Division => "division",
        }
    }

    /// The next operation in display order, wrapping around.
    pub fn next(&self) -> Operation {
        match self {
            Operation::Addition => Operation::Subtraction,
            Operation::Subtraction => Operation::Multiplication,
            Operation::Multiplication => Operation::Division,
            Operation::Division => Operation::Addition,
        }
    }
}

/// Named tier controlling the numeric magnitude used during generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// The next tier in order, wrapping around.
    pub fn next(&self) -> Difficulty {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }
}

/// Header value range for an (operation, difficulty) pair.
///
/// Division ranges are divisor ranges; dividends are derived from them.
pub fn value_range(operation: Operation, difficulty: Difficulty) -> RangeInclusive<i64> {
    match (operation, difficulty) {
        (Operation::Division, Difficulty::Easy) => 2..=10,
        (Operation::Division, Difficulty::Medium) => 2..=12,
        (Operation::Division, Difficulty::Hard) => 2..=20,
        (_, Difficulty::Easy) => 1..=20,
        (_, Difficulty::Medium) => 10..=99,
        (_, Difficulty::Hard) => 30..=999,
    }
}

/// Largest dividend multiplier for division puzzles (times-table range).
const MAX_MULTIPLIER: i64 = 12;

/// The two header sequences forming the operands of every regular cell.
///
/// Immutable once generated; a new puzzle replaces the whole value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Headers {
    rows: Vec<i64>,
    cols: Vec<i64>,
}

impl Headers {
    /// Draws a fresh set of headers for the given operation and tier.
    ///
    /// Non-division operations draw rows and columns independently and
    /// uniformly from the tier range; the medium tier resamples values
    /// ending in zero, and multiplication resamples zero itself.
    /// Division draws column headers as divisors and derives each row
    /// header from the same-index divisor times a multiplier in
    /// `[1, MAX_MULTIPLIER]`, so same-index pairs divide evenly. Cross
    /// pairs carry no such guarantee and usually have fractional
    /// quotients.
    pub fn generate<R: Rng>(
        operation: Operation,
        difficulty: Difficulty,
        size: usize,
        rng: &mut R,
    ) -> Headers {
        if operation == Operation::Division {
            let cols: Vec<i64> = (0..size)
                .map(|_| draw_value(operation, difficulty, rng))
                .collect();
            let rows: Vec<i64> = cols
                .iter()
                .map(|&divisor| divisor * rng.gen_range(1..=MAX_MULTIPLIER))
                .collect();
            return Headers { rows, cols };
        }

        let rows = (0..size)
            .map(|_| draw_value(operation, difficulty, rng))
            .collect();
        let cols = (0..size)
            .map(|_| draw_value(operation, difficulty, rng))
            .collect();
        Headers { rows, cols }
    }

    /// Number of rows (and columns) in the grid.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[i64] {
        &self.rows
    }

    pub fn cols(&self) -> &[i64] {
        &self.cols
    }

    pub fn row(&self, index: usize) -> i64 {
        self.rows[index]
    }

    pub fn col(&self, index: usize) -> i64 {
        self.cols[index]
    }

    /// Builds headers from explicit values. Both sequences must have the
    /// same length.
    pub fn from_values(rows: Vec<i64>, cols: Vec<i64>) -> Headers {
        assert_eq!(rows.len(), cols.len(), "header sequences must match in length");
        Headers { rows, cols }
    }
}

/// Draws one header value for a non-division cell, or one divisor.
fn draw_value<R: Rng>(operation: Operation, difficulty: Difficulty, rng: &mut R) -> i64 {
    let range = value_range(operation, difficulty);

    if operation == Operation::Division {
        return rng.gen_range(range);
    }

    if difficulty == Difficulty::Medium {
        // Medium keeps the units digit non-zero: two-digit values that
        // are not round numbers.
        loop {
            let value = rng.gen_range(range.clone());
            if value % 10 != 0 {
                return value;
            }
        }
    }

    loop {
        let value = rng.gen_range(range.clone());
        if operation == Operation::Multiplication && value == 0 {
            continue;
        }
        return value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const ALL_OPERATIONS: [Operation; 4] = [
        Operation::Addition,
        Operation::Subtraction,
        Operation::Multiplication,
        Operation::Division,
    ];
    const ALL_DIFFICULTIES: [Difficulty; 3] =
        [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    #[test]
    fn headers_have_requested_size() {
        let mut rng = StdRng::seed_from_u64(1);
        let headers = Headers::generate(Operation::Addition, Difficulty::Easy, 10, &mut rng);
        assert_eq!(headers.size(), 10);
        assert_eq!(headers.rows().len(), 10);
        assert_eq!(headers.cols().len(), 10);
    }

    #[test]
    fn non_division_values_stay_in_range() {
        for operation in [
            Operation::Addition,
            Operation::Subtraction,
            Operation::Multiplication,
        ] {
            for difficulty in ALL_DIFFICULTIES {
                let mut rng = StdRng::seed_from_u64(7);
                let range = value_range(operation, difficulty);
                let headers = Headers::generate(operation, difficulty, 10, &mut rng);
                for &value in headers.rows().iter().chain(headers.cols()) {
                    assert!(
                        range.contains(&value),
                        "{} {} produced {} outside {:?}",
                        operation.label(),
                        difficulty.label(),
                        value,
                        range
                    );
                }
            }
        }
    }

    #[test]
    fn division_divisors_stay_in_range() {
        for difficulty in ALL_DIFFICULTIES {
            let mut rng = StdRng::seed_from_u64(11);
            let range = value_range(Operation::Division, difficulty);
            let headers = Headers::generate(Operation::Division, difficulty, 10, &mut rng);
            for &divisor in headers.cols() {
                assert!(range.contains(&divisor));
            }
        }
    }

    #[test]
    fn division_same_index_pairs_divide_evenly() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let headers = Headers::generate(Operation::Division, Difficulty::Medium, 10, &mut rng);
            for i in 0..headers.size() {
                assert_eq!(
                    headers.row(i) % headers.col(i),
                    0,
                    "row {} not a multiple of its divisor",
                    i
                );
                let quotient = headers.row(i) / headers.col(i);
                assert!((1..=MAX_MULTIPLIER).contains(&quotient));
            }
        }
    }

    #[test]
    fn medium_tier_units_digit_is_never_zero() {
        for operation in [
            Operation::Addition,
            Operation::Subtraction,
            Operation::Multiplication,
        ] {
            let mut rng = StdRng::seed_from_u64(3);
            let headers = Headers::generate(operation, Difficulty::Medium, 10, &mut rng);
            for &value in headers.rows().iter().chain(headers.cols()) {
                assert_ne!(value % 10, 0);
            }
        }
    }

    #[test]
    fn operation_cycle_visits_all() {
        let mut op = Operation::Addition;
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(op);
            op = op.next();
        }
        assert_eq!(op, Operation::Addition);
        assert_eq!(seen, ALL_OPERATIONS);
    }

    #[test]
    fn difficulty_cycle_visits_all() {
        let mut tier = Difficulty::Easy;
        for expected in ALL_DIFFICULTIES {
            assert_eq!(tier, expected);
            tier = tier.next();
        }
        assert_eq!(tier, Difficulty::Easy);
    }

    #[test]
    fn operation_symbols() {
        assert_eq!(Operation::Addition.symbol(), '+');
        assert_eq!(Operation::Subtraction.symbol(), '-');
        assert_eq!(Operation::Multiplication.symbol(), '×');
        assert_eq!(Operation::Division.symbol(), '÷');
    }
}
