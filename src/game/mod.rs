use crate::core::{Board, PlayerId};
use crate::display::{render_board, DisplayState};
use crate::logic::{apply_move, evaluate, legal_moves, winning_line, Outcome};
use crate::player::{Decision, PlayerController};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use std::time::Duration;
use tracing::info;

/// How a single round stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEnd {
    Finished(Outcome),
    Restart,
    Quit,
}

/// Owns the one mutable board of a match.
pub struct Game {
    pub board: Board,
    pub current_player: PlayerId,
    pub history: Vec<usize>,
    pub think_delay: Duration,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            current_player: PlayerId::Player1,
            history: Vec::new(),
            think_delay: Duration::ZERO,
        }
    }

    pub fn with_think_delay(mut self, delay: Duration) -> Self {
        self.think_delay = delay;
        self
    }

    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_player = PlayerId::Player1;
        self.history.clear();
    }

    fn controller<'a>(
        &self,
        p1: &'a dyn PlayerController,
        p2: &'a dyn PlayerController,
    ) -> &'a dyn PlayerController {
        match self.current_player {
            PlayerId::Player1 => p1,
            PlayerId::Player2 => p2,
        }
    }

    fn play_move(&mut self, cell: usize) -> anyhow::Result<()> {
        self.board = apply_move(&self.board, cell, self.current_player)?;
        self.history.push(cell);
        self.current_player = self.current_player.opponent();
        Ok(())
    }

    /// Interactive match in the terminal; rounds repeat until a player quits.
    pub fn play(
        &mut self,
        p1: &dyn PlayerController,
        p2: &dyn PlayerController,
    ) -> anyhow::Result<()> {
        loop {
            match self.play_round(p1, p2)? {
                RoundEnd::Finished(outcome) => {
                    info!(?outcome, moves = self.history.len(), "game finished");
                    if !self.show_result(outcome, p1, p2)? {
                        return Ok(());
                    }
                }
                RoundEnd::Restart => info!("game restarted"),
                RoundEnd::Quit => return Ok(()),
            }
            self.reset();
        }
    }

    fn play_round(
        &mut self,
        p1: &dyn PlayerController,
        p2: &dyn PlayerController,
    ) -> anyhow::Result<RoundEnd> {
        loop {
            let outcome = evaluate(&self.board);
            if outcome.is_terminal() {
                return Ok(RoundEnd::Finished(outcome));
            }

            let controller = self.controller(p1, p2);
            if !controller.is_human() {
                let state = DisplayState {
                    status_msg: Some(format!(
                        "{} ({}) is thinking...",
                        controller.name(),
                        self.current_player
                    )),
                    ..DisplayState::default()
                };
                render_board(&self.board, &state)?;

                // the human may restart or quit while the AI "thinks"
                if event::poll(self.think_delay)? {
                    if let Event::Key(key) = event::read()? {
                        if key.kind != KeyEventKind::Release {
                            match key.code {
                                KeyCode::Char('q') | KeyCode::Esc => return Ok(RoundEnd::Quit),
                                KeyCode::Char('r') => return Ok(RoundEnd::Restart),
                                _ => {}
                            }
                        }
                    }
                }
            }

            let moves = legal_moves(&self.board);
            match controller.choose_move(&self.board, &moves) {
                Decision::Play(cell) => self.play_move(cell)?,
                Decision::Restart => return Ok(RoundEnd::Restart),
                Decision::Quit => return Ok(RoundEnd::Quit),
            }
        }
    }

    /// Shows the final board. Returns true if the player asked for another round.
    fn show_result(
        &self,
        outcome: Outcome,
        p1: &dyn PlayerController,
        p2: &dyn PlayerController,
    ) -> anyhow::Result<bool> {
        let message = match outcome.winner() {
            Some(PlayerId::Player1) => format!("{} (X) wins!", p1.name()),
            Some(PlayerId::Player2) => format!("{} (O) wins!", p2.name()),
            None => "It's a tie!".to_string(),
        };
        let state = DisplayState {
            status_msg: Some(message),
            highlights: winning_line(&self.board).map(Vec::from).unwrap_or_default(),
            ..DisplayState::default()
        };
        render_board(&self.board, &state)?;
        print!("[r]: Play again | [q]: Quit\r\n");

        loop {
            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Release {
                        continue;
                    }
                    match key.code {
                        KeyCode::Char('r') | KeyCode::Enter => return Ok(true),
                        KeyCode::Char('q') | KeyCode::Esc => return Ok(false),
                        _ => {}
                    }
                }
            }
        }
    }

    /// Plays one round to completion without touching the terminal.
    pub fn run_silent(
        &mut self,
        p1: &dyn PlayerController,
        p2: &dyn PlayerController,
    ) -> anyhow::Result<Outcome> {
        loop {
            let outcome = evaluate(&self.board);
            if outcome.is_terminal() {
                return Ok(outcome);
            }

            let controller = self.controller(p1, p2);
            let moves = legal_moves(&self.board);
            match controller.choose_move(&self.board, &moves) {
                Decision::Play(cell) => self.play_move(cell)?,
                decision => anyhow::bail!(
                    "{} stopped the game with {:?} after {} moves",
                    controller.name(),
                    decision,
                    self.history.len()
                ),
            }
        }
    }
}
