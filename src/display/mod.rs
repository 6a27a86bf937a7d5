use crate::core::{Board, Cell, Position, BOARD_SIZE};
use crossterm::{cursor, execute, style::Stylize, terminal};
use std::io::{self, stdout, Write};

// Screen layout of the grid. Mouse hit-testing in `cell_at` depends on these.
pub const GRID_TOP: u16 = 3;
pub const GRID_LEFT: u16 = 4;
pub const CELL_WIDTH: u16 = 5;
pub const CELL_HEIGHT: u16 = 3;

pub struct DisplayState {
    pub cursor: Position,
    pub highlights: Vec<usize>,
    pub status_msg: Option<String>,
    pub show_cursor: bool,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            cursor: Position::new(1, 1),
            highlights: Vec::new(),
            status_msg: None,
            show_cursor: false,
        }
    }
}

impl DisplayState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Maps a terminal coordinate to the cell drawn there. Borders map to `None`.
pub fn cell_at(column: u16, row: u16) -> Option<usize> {
    let dx = column.checked_sub(GRID_LEFT + 1)?;
    let dy = row.checked_sub(GRID_TOP + 1)?;
    let (x, offset_x) = (dx / (CELL_WIDTH + 1), dx % (CELL_WIDTH + 1));
    let (y, offset_y) = (dy / (CELL_HEIGHT + 1), dy % (CELL_HEIGHT + 1));
    if x as usize >= BOARD_SIZE
        || y as usize >= BOARD_SIZE
        || offset_x == CELL_WIDTH
        || offset_y == CELL_HEIGHT
    {
        return None;
    }
    Some(Position::new(x as usize, y as usize).index())
}

pub fn render_board(board: &Board, state: &DisplayState) -> io::Result<()> {
    let mut out = stdout();

    execute!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;

    print!("=== Tic Tac Toe ===\r\n");
    if let Some(msg) = &state.status_msg {
        print!("{}\r\n", msg.clone().bold().yellow());
    } else {
        print!("\r\n");
    }
    print!("\r\n");

    let indent = " ".repeat(GRID_LEFT as usize);
    let border = format!(
        "{}+{}\r\n",
        indent,
        format!("{}+", "-".repeat(CELL_WIDTH as usize)).repeat(BOARD_SIZE)
    );
    let padding = format!(
        "{}|{}\r\n",
        indent,
        format!("{}|", " ".repeat(CELL_WIDTH as usize)).repeat(BOARD_SIZE)
    );

    print!("{}", border);
    for y in 0..BOARD_SIZE {
        print!("{}", padding);
        print!("{}|", indent);
        for x in 0..BOARD_SIZE {
            let pos = Position::new(x, y);
            let index = pos.index();
            let is_cursor = state.show_cursor && state.cursor == pos;
            let is_highlight = state.highlights.contains(&index);

            let (prefix, suffix) = if is_cursor { ("[", "]") } else { (" ", " ") };
            let text = format!(" {}{}{} ", prefix, board[index].symbol(), suffix);

            if is_highlight {
                print!("{}", text.green().bold());
            } else if is_cursor {
                print!("{}", text.yellow());
            } else {
                match board[index] {
                    Cell::Player1 => print!("{}", text.cyan()),
                    Cell::Player2 => print!("{}", text.magenta()),
                    Cell::Empty => print!("{}", format!("  {}  ", index + 1).dark_grey()),
                }
            }
            print!("|");
        }
        print!("\r\n");
        print!("{}", padding);
        print!("{}", border);
    }

    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_at_centres() {
        // middle row of each cell, middle column
        for index in 0..9 {
            let pos = Position::from_index(index);
            let column = GRID_LEFT + 1 + pos.x as u16 * (CELL_WIDTH + 1) + CELL_WIDTH / 2;
            let row = GRID_TOP + 1 + pos.y as u16 * (CELL_HEIGHT + 1) + CELL_HEIGHT / 2;
            assert_eq!(cell_at(column, row), Some(index));
        }
    }

    #[test]
    fn test_cell_at_edges_and_borders() {
        assert_eq!(cell_at(GRID_LEFT + 1, GRID_TOP + 1), Some(0));
        assert_eq!(cell_at(GRID_LEFT + CELL_WIDTH, GRID_TOP + CELL_HEIGHT), Some(0));
        // vertical border between cells 0 and 1
        assert_eq!(cell_at(GRID_LEFT + 1 + CELL_WIDTH, GRID_TOP + 1), None);
        // horizontal border between rows
        assert_eq!(cell_at(GRID_LEFT + 1, GRID_TOP + 1 + CELL_HEIGHT), None);
        // outside the grid
        assert_eq!(cell_at(0, 0), None);
        assert_eq!(cell_at(GRID_LEFT, GRID_TOP + 1), None);
        assert_eq!(cell_at(GRID_LEFT + 1 + 3 * (CELL_WIDTH + 1), GRID_TOP + 1), None);
        assert_eq!(cell_at(GRID_LEFT + 1, GRID_TOP + 1 + 3 * (CELL_HEIGHT + 1)), None);
    }
}
