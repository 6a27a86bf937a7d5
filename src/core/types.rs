use serde::{Deserialize, Serialize};
use std::fmt;

/// Player identity. Player1 plays X and maximizes, Player2 plays O and minimizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    Player1,
    Player2,
}

impl Default for PlayerId {
    fn default() -> Self {
        PlayerId::Player1
    }
}

impl PlayerId {
    pub fn opponent(self) -> PlayerId {
        match self {
            PlayerId::Player1 => PlayerId::Player2,
            PlayerId::Player2 => PlayerId::Player1,
        }
    }

    /// True for the side whose score the search maximizes
    pub fn is_maximizer(self) -> bool {
        self == PlayerId::Player1
    }

    pub fn symbol(self) -> char {
        match self {
            PlayerId::Player1 => 'X',
            PlayerId::Player2 => 'O',
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?} ({})", self, self.symbol())
    }
}

/// Contents of a single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Player1,
    Player2,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn owner(self) -> Option<PlayerId> {
        match self {
            Cell::Empty => None,
            Cell::Player1 => Some(PlayerId::Player1),
            Cell::Player2 => Some(PlayerId::Player2),
        }
    }

    pub fn symbol(self) -> char {
        match self.owner() {
            Some(player) => player.symbol(),
            None => '.',
        }
    }

    /// Numeric encoding: 0 = Empty, 1 = Player1, 2 = Player2
    pub fn from_code(code: u8) -> Option<Cell> {
        match code {
            0 => Some(Cell::Empty),
            1 => Some(Cell::Player1),
            2 => Some(Cell::Player2),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Player1 => 1,
            Cell::Player2 => 2,
        }
    }

    pub fn from_symbol(c: char) -> Option<Cell> {
        match c.to_ascii_uppercase() {
            'X' => Some(Cell::Player1),
            'O' => Some(Cell::Player2),
            '.' | '-' | '_' | ' ' => Some(Cell::Empty),
            _ => None,
        }
    }
}

impl From<PlayerId> for Cell {
    fn from(player: PlayerId) -> Self {
        match player {
            PlayerId::Player1 => Cell::Player1,
            PlayerId::Player2 => Cell::Player2,
        }
    }
}

/// Board coordinates (0-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Position { x, y }
    }

    pub fn from_index(index: usize) -> Self {
        Position {
            x: index % 3,
            y: index / 3,
        }
    }

    pub fn index(self) -> usize {
        self.y * 3 + self.x
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
