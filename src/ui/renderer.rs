//! Grid rendering
//!
//! Draws the full drill screen: title, status line, the answer grid
//! with header rows/columns and total lines, the results summary once
//! the game completes, and a key help line. Pure formatting helpers are
//! kept separate from the drawing code so they can be tested without a
//! terminal.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};

use crate::app::controller::{CellStyle, Game};
use crate::app::state::GameState;
use crate::domain::cell::CellId;
use crate::domain::scoring::Results;

const ROW_HEADER_WIDTH: u16 = 7;
const CELL_WIDTH: u16 = 9;

/// Formats elapsed whole seconds as `mins:secs` with zero-padded
/// seconds.
pub fn format_elapsed(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Lines of the post-completion summary.
pub fn summary_lines(results: &Results) -> Vec<String> {
    vec![
        format!("correct    {}", results.correct),
        format!("incorrect  {}", results.incorrect),
        format!("unanswered {}", results.unanswered),
        format!("total time {}", format_elapsed(results.total_time)),
        format!("per answer {:.1}s", results.average_time_per_answer),
    ]
}

fn cell_text_style(style: CellStyle) -> Style {
    match style {
        CellStyle::Normal => Style::default(),
        CellStyle::Selected => Style::default()
            .bg(Color::Blue)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        CellStyle::Unanswered => Style::default().fg(Color::DarkGray),
        CellStyle::Correct => Style::default().fg(Color::Green),
        CellStyle::Incorrect => Style::default().fg(Color::Red),
    }
}

fn header_style(highlighted: bool) -> Style {
    if highlighted {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    }
}

/// Draws the whole screen.
pub fn draw(frame: &mut Frame, game: &Game) {
    let completed = game.state() == GameState::Completed;
    let mut constraints = vec![
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(5),
    ];
    if completed {
        constraints.push(Constraint::Length(7));
    }
    constraints.push(Constraint::Length(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.area());

    draw_title(frame, game, chunks[0]);
    draw_status(frame, game, chunks[1]);
    draw_grid(frame, game, chunks[2]);
    if completed {
        draw_summary(frame, game, chunks[3]);
        draw_help(frame, chunks[4]);
    } else {
        draw_help(frame, chunks[3]);
    }
}

fn draw_title(frame: &mut Frame, game: &Game, area: Rect) {
    let mut label = game.operation().label().to_string();
    if let Some(first) = label.get_mut(..1) {
        first.make_ascii_uppercase();
    }
    let title = Line::from(Span::styled(
        format!("Math {} Practice", label),
        Style::default().add_modifier(Modifier::BOLD),
    ))
    .centered();
    frame.render_widget(Paragraph::new(title), area);
}

fn draw_status(frame: &mut Frame, game: &Game, area: Rect) {
    let status = Line::from(vec![
        Span::styled(
            format!(" {} ", game.state()),
            Style::default().add_modifier(Modifier::REVERSED),
        ),
        Span::raw(format!("  {}", format_elapsed(game.elapsed_seconds()))),
        Span::styled(
            format!(
                "  {} · {}",
                game.operation().label(),
                game.difficulty().label()
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(status), area);
}

fn draw_grid(frame: &mut Frame, game: &Game, area: Rect) {
    let size = game.size();
    let selection = game.selection();

    let answer_cell = |cell: CellId| -> Cell<'static> {
        let text = game.answer(cell);
        let shown = if text.is_empty() {
            "·".to_string()
        } else {
            text.to_string()
        };
        Cell::from(shown).style(cell_text_style(game.cell_style(cell)))
    };

    // Top line: operation symbol, column headers, the total column.
    let mut top = vec![Cell::from(game.operation().symbol().to_string())];
    for (col, &value) in game.headers().cols().iter().enumerate() {
        let highlighted = selection.is_some_and(|cursor| cursor.col == col);
        top.push(Cell::from(value.to_string()).style(header_style(highlighted)));
    }
    top.push(
        Cell::from("Total").style(header_style(
            selection.is_some_and(|cursor| cursor.col == size),
        )),
    );
    let header = Row::new(top);

    let mut rows = Vec::with_capacity(size + 1);
    for (row, &value) in game.headers().rows().iter().enumerate() {
        let highlighted = selection.is_some_and(|cursor| cursor.row == row);
        let mut cells = vec![Cell::from(value.to_string()).style(header_style(highlighted))];
        for col in 0..size {
            cells.push(answer_cell(CellId::Cell { row, col }));
        }
        cells.push(answer_cell(CellId::RowTotal(row)));
        rows.push(Row::new(cells));
    }

    let mut totals = vec![
        Cell::from("Total").style(header_style(
            selection.is_some_and(|cursor| cursor.row == size),
        )),
    ];
    for col in 0..size {
        totals.push(answer_cell(CellId::ColTotal(col)));
    }
    totals.push(answer_cell(CellId::GrandTotal));
    rows.push(Row::new(totals));

    let mut widths = vec![Constraint::Length(ROW_HEADER_WIDTH)];
    widths.extend(std::iter::repeat(Constraint::Length(CELL_WIDTH)).take(size + 1));

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(table, area);
}

fn draw_summary(frame: &mut Frame, game: &Game, area: Rect) {
    let Some(results) = game.results() else {
        return;
    };
    let lines: Vec<Line<'_>> = summary_lines(results).into_iter().map(Line::from).collect();
    let panel =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" results "));
    frame.render_widget(panel, area);
}

fn draw_help(frame: &mut Frame, area: Rect) {
    let help = Line::from(Span::styled(
        " arrows/tab move · digits answer · s start · p pause · e stop · r reset · n new puzzle · o operation · d difficulty · q quit",
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(Paragraph::new(help), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_formatting_zero_pads_seconds() {
        assert_eq!(format_elapsed(0), "0:00");
        assert_eq!(format_elapsed(9), "0:09");
        assert_eq!(format_elapsed(65), "1:05");
        assert_eq!(format_elapsed(600), "10:00");
    }

    #[test]
    fn summary_reports_all_counts() {
        let results = Results {
            correct: 3,
            incorrect: 2,
            unanswered: 106,
            total_time: 125,
            average_time_per_answer: 25.0,
        };
        let lines = summary_lines(&results);
        assert_eq!(lines.len(), 5);
        assert!(lines[0].contains('3'));
        assert!(lines[1].contains('2'));
        assert!(lines[2].contains("106"));
        assert!(lines[3].contains("2:05"));
        assert!(lines[4].contains("25.0"));
    }
}
