use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::{cursor, execute, terminal};
use std::io::{self, Write};
use std::time::Duration;

pub mod selection;

/// Clears the screen and prints a numbered menu.
pub fn show_menu(title: &str, options: &[&str]) -> anyhow::Result<()> {
    execute!(
        io::stdout(),
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;
    print!("=== {} ===\r\n\r\n", title);
    for (i, option) in options.iter().enumerate() {
        print!("{}. {}\r\n", i + 1, option);
    }
    print!("\r\n[q]: Quit\r\n");
    io::stdout().flush()?;
    Ok(())
}

/// Blocks until one of the digit keys `1..=count` is pressed.
/// Returns the zero-based choice, or `None` for `q`/Esc.
pub fn read_choice(count: usize) -> anyhow::Result<Option<usize>> {
    loop {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(None),
                    KeyCode::Char(c) => {
                        if let Some(choice) = digit_choice(c, count) {
                            return Ok(Some(choice));
                        }
                    }
                    _ => {}
                }
            }
        }
    }
}

fn digit_choice(c: char, count: usize) -> Option<usize> {
    let n = c.to_digit(10)? as usize;
    (1..=count).contains(&n).then(|| n - 1)
}

/// Waits for any key press.
pub fn wait_for_key() -> anyhow::Result<()> {
    loop {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Release {
                    return Ok(());
                }
            }
        }
    }
}
