use crate::core::{Board, PlayerId, Position, BOARD_SIZE};
use crate::display::{cell_at, render_board, DisplayState};
use crate::player::{Decision, PlayerController};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use std::time::Duration;
use tracing::warn;

pub struct TuiController {
    player_id: PlayerId,
    name: String,
}

/// Key press translated into a board action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Select(usize),
    Step(isize, isize),
    Confirm,
    Restart,
    Quit,
    Ignore,
}

fn interpret_key(code: KeyCode) -> Input {
    match code {
        KeyCode::Char(c @ '1'..='9') => Input::Select(c as usize - '1' as usize),
        KeyCode::Up => Input::Step(0, -1),
        KeyCode::Down => Input::Step(0, 1),
        KeyCode::Left => Input::Step(-1, 0),
        KeyCode::Right => Input::Step(1, 0),
        KeyCode::Enter | KeyCode::Char(' ') => Input::Confirm,
        KeyCode::Char('r') | KeyCode::Char('R') => Input::Restart,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Input::Quit,
        _ => Input::Ignore,
    }
}

fn step(cursor: Position, dx: isize, dy: isize) -> Position {
    let clamp = |v: usize, d: isize| v.saturating_add_signed(d).min(BOARD_SIZE - 1);
    Position::new(clamp(cursor.x, dx), clamp(cursor.y, dy))
}

impl TuiController {
    pub fn new(player_id: PlayerId, name: &str) -> Self {
        Self {
            player_id,
            name: name.to_string(),
        }
    }
}

impl PlayerController for TuiController {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_human(&self) -> bool {
        true
    }

    fn choose_move(&self, board: &Board, legal_moves: &[usize]) -> Decision {
        let mut state = DisplayState {
            show_cursor: true,
            status_msg: Some(format!("{}'s turn ({})", self.name, self.player_id)),
            ..DisplayState::default()
        };
        if let Some(&first) = legal_moves.first() {
            if !legal_moves.contains(&state.cursor.index()) {
                state.cursor = Position::from_index(first);
            }
        }

        loop {
            if let Err(err) = render_board(board, &state) {
                warn!(error = %err, "failed to draw board");
                return Decision::Quit;
            }
            print!("[1-9]/[Click]/[Arrows+Enter]: Play | [r]: Restart | [q]: Quit\r\n");

            let event = match event::poll(Duration::from_millis(100)) {
                Ok(true) => match event::read() {
                    Ok(event) => event,
                    Err(err) => {
                        warn!(error = %err, "failed to read terminal event");
                        return Decision::Quit;
                    }
                },
                Ok(false) => continue,
                Err(err) => {
                    warn!(error = %err, "failed to poll terminal events");
                    return Decision::Quit;
                }
            };

            let picked = match event {
                Event::Key(KeyEvent { code, kind, .. }) if kind != KeyEventKind::Release => {
                    match interpret_key(code) {
                        Input::Select(cell) => Some(cell),
                        Input::Step(dx, dy) => {
                            state.cursor = step(state.cursor, dx, dy);
                            None
                        }
                        Input::Confirm => Some(state.cursor.index()),
                        Input::Restart => return Decision::Restart,
                        Input::Quit => return Decision::Quit,
                        Input::Ignore => None,
                    }
                }
                Event::Mouse(MouseEvent {
                    kind: MouseEventKind::Down(MouseButton::Left),
                    column,
                    row,
                    ..
                }) => cell_at(column, row),
                _ => None,
            };

            match picked {
                Some(cell) if legal_moves.contains(&cell) => return Decision::Play(cell),
                Some(cell) => {
                    state.cursor = Position::from_index(cell);
                    state.status_msg = Some(format!("Cell {} is taken, pick another", cell + 1));
                }
                None => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_keys_map_row_major() {
        assert_eq!(interpret_key(KeyCode::Char('1')), Input::Select(0));
        assert_eq!(interpret_key(KeyCode::Char('5')), Input::Select(4));
        assert_eq!(interpret_key(KeyCode::Char('9')), Input::Select(8));
        assert_eq!(interpret_key(KeyCode::Char('0')), Input::Ignore);
        assert_eq!(interpret_key(KeyCode::Char('r')), Input::Restart);
        assert_eq!(interpret_key(KeyCode::Esc), Input::Quit);
    }

    #[test]
    fn test_cursor_stays_on_board() {
        let corner = Position::new(0, 0);
        assert_eq!(step(corner, -1, 0), corner);
        assert_eq!(step(corner, 0, -1), corner);
        assert_eq!(step(corner, 1, 1), Position::new(1, 1));
        let far = Position::new(2, 2);
        assert_eq!(step(far, 1, 0), far);
        assert_eq!(step(far, 0, 1), far);
    }
}
