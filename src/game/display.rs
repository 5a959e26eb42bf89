use std::fmt::Write;

use termion::{clear, color, cursor};

use crate::board::{Board, Coordinate, BOARD_SIZE};
use crate::difficulty::Difficulty;
use crate::recorder::{summarize, DecisionRecord};

pub struct GameDisplay {
    buffer: String,
    clear_screen: bool,
}

impl Default for GameDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl GameDisplay {
    pub fn new() -> Self {
        Self {
            buffer: String::with_capacity(512),
            clear_screen: true,
        }
    }

    /// Frames are appended below each other instead of redrawing the terminal.
    pub fn without_clearing() -> Self {
        Self {
            clear_screen: false,
            ..Self::new()
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        if self.clear_screen {
            let _ = write!(self.buffer, "{}{}", cursor::Goto(1, 1), clear::All);
        }
    }

    pub fn render_game_state(
        &mut self,
        board: &Board,
        difficulty: Difficulty,
        last_move: Option<Coordinate>,
        stats: Option<&str>,
    ) {
        self.clear();
        self.buffer.push_str(&render_board(board));
        self.buffer.push('\n');

        let (r, g, b) = difficulty.profile().color;
        let _ = writeln!(
            self.buffer,
            "Difficulty: {}{}{} ({})",
            color::Fg(color::Rgb(r, g, b)),
            difficulty,
            color::Fg(color::Reset),
            difficulty.profile().description
        );
        let _ = writeln!(self.buffer, "Turn: {}", board.to_move());

        if let Some(coordinate) = last_move {
            let _ = writeln!(self.buffer, "Last move: {}", coordinate);
        }

        if let Some(stats) = stats {
            let _ = write!(self.buffer, "\n{}\n", stats);
        }

        print!("{}", self.buffer);
    }

    pub fn buffer(self) -> String {
        self.buffer
    }
}

pub fn render_board(board: &Board) -> String {
    let mut out = String::from("   0   1   2\n");
    for (row, cells) in board.rows().iter().enumerate() {
        let squares: Vec<String> = cells.iter().map(|cell| cell.to_char().to_string()).collect();
        let _ = writeln!(out, "{}  {}", row, squares.join(" | "));
        if row < BOARD_SIZE - 1 {
            out.push_str("  -----------\n");
        }
    }
    out
}

/// Describes a single AI decision: nodes evaluated and time spent.
pub fn render_decision(record: &DecisionRecord) -> String {
    format!(
        "Decision #{} [{}]: {} nodes evaluated at depth {} in {:.3} ms",
        record.sequence_number,
        record.difficulty_label,
        record.nodes_evaluated,
        record.depth_used,
        record.elapsed.as_secs_f64() * 1000.0
    )
}

pub fn render_summary(records: &[DecisionRecord]) -> String {
    let summary = match summarize(records) {
        Some(summary) => summary,
        None => return String::from("No AI decisions recorded."),
    };

    let mut out = String::new();
    let _ = writeln!(out, "AI decisions:      {}", summary.decisions);
    let _ = writeln!(out, "Total nodes:       {}", summary.total_nodes);
    let _ = writeln!(out, "Average nodes:     {:.1}", summary.average_nodes);
    let _ = writeln!(
        out,
        "Total time:        {:.3} ms",
        summary.total_elapsed.as_secs_f64() * 1000.0
    );
    let _ = writeln!(
        out,
        "Average time:      {:.3} ms",
        summary.average_elapsed.as_secs_f64() * 1000.0
    );
    let _ = write!(out, "Deepest search:    {}", summary.max_depth);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe_board;
    use std::time::Duration;

    #[test]
    fn test_render_board() {
        let board = tictactoe_board! {
            X O .
            . X .
            . . O
            x
        };
        let expected = "   0   1   2\n\
                        0  X | O | .\n  -----------\n\
                        1  . | X | .\n  -----------\n\
                        2  . | . | O\n";
        assert_eq!(render_board(&board), expected);
    }

    #[test]
    fn test_render_decision() {
        let record = DecisionRecord {
            sequence_number: 3,
            nodes_evaluated: 120,
            depth_used: 3,
            elapsed: Duration::from_micros(1500),
            difficulty_label: "Normal",
        };
        assert_eq!(
            render_decision(&record),
            "Decision #3 [Normal]: 120 nodes evaluated at depth 3 in 1.500 ms"
        );
    }

    #[test]
    fn test_render_empty_summary() {
        assert_eq!(render_summary(&[]), "No AI decisions recorded.");
    }

    #[test]
    fn test_frame_without_clearing_has_no_escape_codes_before_board() {
        let mut display = GameDisplay::without_clearing();
        display.render_game_state(&Board::new(), Difficulty::Easy, None, None);
        let frame = display.buffer();
        assert!(frame.starts_with("   0   1   2\n"));
        assert!(frame.contains("Turn: X"));
    }
}
