//! Terminal presentation of boards and results.

use std::io::{self, Write};

use crate::board::Board;

/// Display form of a tile: title case, with a lone `q` shown as `Qu`.
pub fn display_tile(tile: &str) -> String {
    if tile == "q" {
        return "Qu".to_string();
    }
    title_case(tile)
}

/// Uppercase the first character, lowercase the rest
pub fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// The tiles concatenated in row-major order
pub fn board_code(board: &Board) -> String {
    board.tiles().concat()
}

const CELL_WIDTH: usize = 10;

/// Draw the board as a box-drawing grid.
pub fn render_board(board: &Board) -> String {
    let cols = board.cols();
    let span = cols * CELL_WIDTH + (cols - 1);
    let blank_row = format!("│{}│", vec![" ".repeat(CELL_WIDTH); cols].join("│"));
    let divider = format!("│{}│", vec!["─".repeat(CELL_WIDTH); cols].join("┼"));

    let mut lines = vec![format!("┌{}┐", "─".repeat(span))];
    for (i, row) in board.tile_rows().enumerate() {
        if i > 0 {
            lines.push(divider.clone());
        }
        let cells: Vec<String> = row
            .iter()
            .map(|tile| format!("{:^width$}", display_tile(tile), width = CELL_WIDTH))
            .collect();
        lines.push(blank_row.clone());
        lines.push(format!("│{}│", cells.join("│")));
        lines.push(blank_row.clone());
    }
    lines.push(format!("└{}┘", "─".repeat(span)));
    lines.join("\n")
}

/// Streams words to a writer, wrapping lines at a fixed width.
pub struct WordPrinter<W: Write> {
    out: W,
    width: usize,
    capitalize: bool,
    line_length: usize,
    count: usize,
}

impl<W: Write> WordPrinter<W> {
    /// A `width` of 0 prints one word per line.
    pub fn new(out: W, width: usize, capitalize: bool) -> Self {
        Self {
            out,
            width,
            capitalize,
            line_length: 0,
            count: 0,
        }
    }

    pub fn print(&mut self, word: &str) -> io::Result<()> {
        self.count += 1;
        let shown = if self.capitalize {
            title_case(word)
        } else {
            word.to_string()
        };

        if self.width == 0 {
            writeln!(self.out, "{shown}")?;
            return self.out.flush();
        }

        let length = word.chars().count();
        if self.line_length + length + 2 > self.width {
            writeln!(self.out)?;
            self.line_length = 0;
        }
        self.line_length += length;
        write!(self.out, "{shown}, ")?;
        self.out.flush()
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Write the summary line and hand back the writer.
    pub fn finish(mut self) -> io::Result<W> {
        writeln!(self.out, "\n[found: {}]", self.count)?;
        self.out.flush()?;
        Ok(self.out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_tile() {
        assert_eq!(display_tile("q"), "Qu");
        assert_eq!(display_tile("qu"), "Qu");
        assert_eq!(display_tile("e"), "E");
        assert_eq!(title_case(""), "");
        assert_eq!(title_case("hELLO"), "Hello");
    }

    #[test]
    fn test_render_board_shape() {
        let board = Board::new(2, 3, ["a", "b", "q", "d", "e", "f"]).unwrap();
        let drawn = render_board(&board);
        let lines: Vec<&str> = drawn.lines().collect();
        // top, 3 lines per row, one divider, bottom
        assert_eq!(lines.len(), 1 + 3 * 2 + 1 + 1);
        assert!(lines[0].starts_with('┌'));
        assert!(lines[2].contains("Qu"));
        assert!(lines[2].contains(" A "));
        let width = lines[0].chars().count();
        assert!(lines.iter().all(|l| l.chars().count() == width));
    }

    #[test]
    fn test_board_code() {
        let board = Board::new(1, 3, ["qu", "i", "T"]).unwrap();
        assert_eq!(board_code(&board), "quit");
    }

    #[test]
    fn test_word_printer_wraps() {
        let mut printer = WordPrinter::new(Vec::new(), 11, false);
        for w in ["cat", "dog", "bird"] {
            printer.print(w).unwrap();
        }
        assert_eq!(printer.count(), 3);
        let out = String::from_utf8(printer.finish().unwrap()).unwrap();
        assert_eq!(out, "cat, dog, \nbird, \n[found: 3]\n");
    }

    #[test]
    fn test_word_printer_counts_characters() {
        // "été" is five bytes; counted as three letters "mer" still fits
        let mut printer = WordPrinter::new(Vec::new(), 8, false);
        printer.print("été").unwrap();
        printer.print("mer").unwrap();
        let out = String::from_utf8(printer.finish().unwrap()).unwrap();
        assert_eq!(out, "été, mer, \n[found: 2]\n");
    }

    #[test]
    fn test_word_printer_one_per_line() {
        let mut printer = WordPrinter::new(Vec::new(), 0, true);
        printer.print("cat").unwrap();
        printer.print("dog").unwrap();
        let out = String::from_utf8(printer.finish().unwrap()).unwrap();
        assert_eq!(out, "Cat\nDog\n\n[found: 2]\n");
    }
}
