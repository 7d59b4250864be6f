use super::*;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MIN_SIZE: usize = 3;

/// The four orientations of a tippy (an S or Z tetromino), as row/column
/// offsets from the top-left corner of their bounding box.
const SHAPES: [[(usize, usize); 4]; 4] = [
    [(0, 0), (0, 1), (1, 1), (1, 2)],
    [(0, 1), (0, 2), (1, 0), (1, 1)],
    [(0, 0), (1, 0), (1, 1), (2, 1)],
    [(0, 1), (1, 0), (1, 1), (2, 0)],
];

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    fn of(p: Player) -> Mark {
        match p {
            Player::P1 => Mark::X,
            Player::P2 => Mark::O,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match *self {
                Mark::X => "x",
                Mark::O => "o",
            }
        )
    }
}

/// A cell, zero-based. Displayed one-based, row first.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Place {
    pub row: usize,
    pub col: usize,
}

impl Place {
    pub fn new(row: usize, col: usize) -> Self {
        Place { row, col }
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "row {}, column {}", self.row + 1, self.col + 1)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Tippy {
    size: usize,
    cells: Vec<Option<Mark>>,
    next: Player,
    winner: Option<Player>,
}

impl Tippy {
    pub fn new(next: Player, size: usize) -> Self {
        let size = size.max(MIN_SIZE);
        Tippy {
            size,
            cells: vec![None; size * size],
            next,
            winner: None,
        }
    }

    /// Builds a position from rows of `x`, `o` and `.`. Panics on a ragged or
    /// non-square grid; intended for fixtures.
    pub fn from_rows(next: Player, rows: &[&str]) -> Self {
        let size = rows.len();
        let mut game = Tippy {
            size,
            cells: Vec::with_capacity(size * size),
            next,
            winner: None,
        };
        for row in rows {
            assert_eq!(row.len(), size, "grid must be square");
            game.cells.extend(row.chars().map(|c| match c {
                'x' => Some(Mark::X),
                'o' => Some(Mark::O),
                _ => None,
            }));
        }
        game.winner = [Player::P1, Player::P2]
            .iter()
            .cloned()
            .find(|&p| game.has_tippy(Mark::of(p)));
        game
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// `None` for an empty cell or a place off the board.
    pub fn get(&self, p: Place) -> Option<Mark> {
        if p.row >= self.size || p.col >= self.size {
            return None;
        }
        self.cells[p.row * self.size + p.col]
    }

    fn set(&mut self, p: Place, m: Mark) {
        self.cells[p.row * self.size + p.col] = Some(m);
    }

    fn has_tippy(&self, m: Mark) -> bool {
        (0..self.size).any(|i| {
            (0..self.size).any(|j| {
                SHAPES.iter().any(|shape| {
                    shape.iter().all(|&(di, dj)| self.get(Place::new(i + di, j + dj)) == Some(m))
                })
            })
        })
    }

    fn empties(&self) -> impl Iterator<Item = Place> + '_ {
        let size = self.size;
        (0..size * size)
            .filter(move |&n| self.cells[n].is_none())
            .map(move |n| Place::new(n / size, n % size))
    }

    /// Empty cells where `m` would complete a tippy.
    fn completions(&self, m: Mark) -> usize {
        self.empties()
            .filter(|&p| {
                let mut after = self.clone();
                after.set(p, m);
                after.has_tippy(m)
            })
            .count()
    }
}

impl fmt::Display for Tippy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "   ")?;
        for j in 0..self.size {
            write!(f, " {} ", j + 1)?;
        }
        writeln!(f)?;
        for i in 0..self.size {
            write!(f, "{:>2}:", i + 1)?;
            for j in 0..self.size {
                match self.get(Place::new(i, j)) {
                    None => write!(f, " . ")?,
                    Some(m) => write!(f, " {} ", m)?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "Next player: {}", self.next)
    }
}

impl Position for Tippy {
    type Move = Place;

    fn next_player(&self) -> Player {
        self.next
    }

    fn is_terminal(&self) -> bool {
        self.winner.is_some() || self.cells.iter().all(|c| c.is_some())
    }

    fn possible_next_moves(&self) -> Vec<Place> {
        if self.winner.is_some() {
            return Vec::new();
        }
        self.empties().collect()
    }

    fn apply_move(&self, m: &Place) -> Result<Self> {
        if self.winner.is_some()
            || m.row >= self.size
            || m.col >= self.size
            || self.get(*m).is_some()
        {
            return Err(Error::IllegalMove(format!("{:?}", m)));
        }
        let mark = Mark::of(self.next);
        let mut game = self.clone();
        game.set(*m, mark);
        if game.has_tippy(mark) {
            game.winner = Some(self.next);
        }
        game.next = self.next.opponent();
        Ok(game)
    }

    fn outcome(&self) -> Score {
        match self.winner {
            Some(p) if p == self.next => Score::Win,
            Some(_) => Score::Loss,
            None => Score::Tie,
        }
    }

    fn rough_outcome(&self) -> Score {
        if self.is_terminal() {
            return self.outcome();
        }
        if self.completions(Mark::of(self.next)) > 0 {
            Score::Win
        } else if self.completions(Mark::of(self.next.opponent())) > 1 {
            Score::Loss
        } else {
            Score::Tie
        }
    }
}

impl ParseMove for Tippy {
    fn parse_move(&self, input: &str) -> Option<Place> {
        let nums: Vec<usize> = input
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|w| !w.is_empty())
            .map(|w| w.parse::<usize>())
            .collect::<std::result::Result<_, _>>()
            .ok()?;
        match nums.as_slice() {
            &[row, col] if row > 0 && col > 0 => Some(Place::new(row - 1, col - 1)),
            _ => None,
        }
    }

    fn instructions(&self) -> &str {
        "Enter a row and a column (e.g. `2 3`) to place your mark. \
         The first player to form a tippy (an S or Z shape of four) wins."
    }
}
