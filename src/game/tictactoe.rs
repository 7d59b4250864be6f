use super::*;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const SIZE: usize = 3;
pub const REQ: usize = 3;

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Marker {
    X,
    O,
}

impl Marker {
    fn of(p: Player) -> Marker {
        match p {
            Player::P1 => Marker::X,
            Player::P2 => Marker::O,
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match *self {
                Marker::X => "X",
                Marker::O => "O",
            }
        )
    }
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Square(Option<Marker>);

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            None => write!(f, " "),
            Some(x) => write!(f, "{}", x),
        }
    }
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    board: [Square; SIZE * SIZE],
}

impl Board {
    pub fn get(&self, i: usize, j: usize) -> Square {
        self.board[i * SIZE + j]
    }

    pub fn set(&mut self, i: usize, j: usize, x: Marker) {
        self.board[i * SIZE + j] = Square(Some(x));
    }

    fn is_full(&self) -> bool {
        self.board.iter().all(|s| s.0.is_some())
    }

    fn has_won(&self, marker: Marker) -> bool {
        let value = |i: usize, j: Option<usize>| match j {
            Some(j) if i < SIZE && j < SIZE && self.get(i, j) == Square(Some(marker)) => 1,
            _ => 0,
        };
        for i in 0..SIZE {
            for j in 0..SIZE {
                let lines = [
                    (0..REQ).map(|n| value(i, Some(j + n))).sum::<usize>(),
                    (0..REQ).map(|n| value(i + n, Some(j))).sum::<usize>(),
                    (0..REQ).map(|n| value(i + n, Some(j + n))).sum::<usize>(),
                    (0..REQ).map(|n| value(i + n, j.checked_sub(n))).sum::<usize>(),
                ];
                if lines.iter().any(|&l| l == REQ) {
                    return true;
                }
            }
        }
        false
    }

    /// Empty squares where `marker` would complete a line.
    fn threats(&self, marker: Marker) -> usize {
        (0..SIZE * SIZE)
            .filter(|&n| self.board[n].0.is_none())
            .filter(|&n| {
                let mut after = *self;
                after.set(n / SIZE, n % SIZE, marker);
                after.has_won(marker)
            })
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board {
            board: [Square(None); SIZE * SIZE],
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let dashes: String = (0..SIZE * 3).map(|_| "-").collect();
        writeln!(f, "|{}|", dashes.as_str())?;
        for i in 0..SIZE {
            write!(f, "|")?;
            for j in 0..SIZE {
                write!(f, " {} ", self.get(i, j))?;
            }
            writeln!(f, "| {}", i + 1)?;
        }
        writeln!(f, "|{}|", dashes.as_str())?;
        write!(f, " ")?;
        for i in 0..SIZE {
            write!(f, " {} ", i + 1)?;
        }
        write!(f, " ")
    }
}

/// Zero-based row and column.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Mark(pub usize, pub usize);

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.0 + 1, self.1 + 1)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Hash, PartialEq, Eq)]
pub struct TicTacToe {
    state: Board,
    to_act: Player,
    winner: Option<Player>,
}

impl TicTacToe {
    pub fn new(start: Player) -> Self {
        TicTacToe {
            state: Board::default(),
            to_act: start,
            winner: None,
        }
    }

    /// Rows of `X`, `O` and `.`; for fixtures.
    pub fn from_rows(to_act: Player, rows: [&str; SIZE]) -> Self {
        let mut state = Board::default();
        for (i, row) in rows.iter().enumerate() {
            for (j, c) in row.chars().take(SIZE).enumerate() {
                match c {
                    'X' | 'x' => state.set(i, j, Marker::X),
                    'O' | 'o' => state.set(i, j, Marker::O),
                    _ => (),
                }
            }
        }
        let winner = [Player::P1, Player::P2]
            .iter()
            .cloned()
            .find(|&p| state.has_won(Marker::of(p)));
        TicTacToe {
            state,
            to_act,
            winner,
        }
    }

    pub fn board(&self) -> &Board {
        &self.state
    }
}

impl fmt::Display for TicTacToe {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.state)?;
        write!(f, "Acting: {}", Marker::of(self.to_act))
    }
}

impl Position for TicTacToe {
    type Move = Mark;

    fn next_player(&self) -> Player {
        self.to_act
    }

    fn is_terminal(&self) -> bool {
        self.winner.is_some() || self.state.is_full()
    }

    fn possible_next_moves(&self) -> Vec<Mark> {
        let mut moves = Vec::new();
        if self.winner.is_some() {
            return moves;
        }
        for i in 0..SIZE {
            for j in 0..SIZE {
                if self.state.get(i, j).0.is_none() {
                    moves.push(Mark(i, j));
                }
            }
        }
        moves
    }

    fn apply_move(&self, m: &Mark) -> Result<Self> {
        let &Mark(i, j) = m;
        if self.winner.is_some() || i >= SIZE || j >= SIZE || self.state.get(i, j).0.is_some() {
            return Err(Error::IllegalMove(format!("{:?}", m)));
        }
        let marker = Marker::of(self.to_act);
        let mut game = self.clone();
        game.state.set(i, j, marker);
        if game.state.has_won(marker) {
            game.winner = Some(self.to_act);
        }
        game.to_act = self.to_act.opponent();
        Ok(game)
    }

    fn outcome(&self) -> Score {
        match self.winner {
            Some(p) if p == self.to_act => Score::Win,
            Some(_) => Score::Loss,
            None => Score::Tie,
        }
    }

    fn rough_outcome(&self) -> Score {
        if self.is_terminal() {
            return self.outcome();
        }
        if self.state.threats(Marker::of(self.to_act)) > 0 {
            Score::Win
        } else if self.state.threats(Marker::of(self.to_act.opponent())) > 1 {
            Score::Loss
        } else {
            Score::Tie
        }
    }
}

impl ParseMove for TicTacToe {
    fn parse_move(&self, input: &str) -> Option<Mark> {
        let mut words = input.split_whitespace();
        let mut it = Vec::new();
        for _ in 0..2 {
            match words.next().and_then(|w| w.parse::<usize>().ok()) {
                Some(n) if n > 0 => it.push(n - 1),
                _ => return None,
            }
        }
        Some(Mark(it[0], it[1]))
    }

    fn instructions(&self) -> &str {
        "Enter a row and a column (e.g. `1 3`). Three in a row wins."
    }
}
