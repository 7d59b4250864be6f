use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::ops::Neg;

pub mod subtract;
pub mod tictactoe;
pub mod tippy;

/// Canonical encoding of a position, used as a cache key.
pub type Key = Vec<u8>;

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Player {
    P1,
    P2,
}

impl Player {
    pub fn opponent(&self) -> Player {
        match *self {
            Player::P1 => Player::P2,
            Player::P2 => Player::P1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match *self {
                Player::P1 => "p1",
                Player::P2 => "p2",
            }
        )
    }
}

/// Result of a position for one player. Declaration order gives
/// `Loss < Tie < Win`.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Score {
    Loss,
    Tie,
    Win,
}

impl Neg for Score {
    type Output = Score;

    fn neg(self) -> Score {
        match self {
            Score::Loss => Score::Win,
            Score::Tie => Score::Tie,
            Score::Win => Score::Loss,
        }
    }
}

impl From<Score> for i32 {
    fn from(s: Score) -> Self {
        match s {
            Score::Loss => -1,
            Score::Tie => 0,
            Score::Win => 1,
        }
    }
}

impl TryFrom<i32> for Score {
    type Error = Error;

    fn try_from(n: i32) -> Result<Self> {
        match n {
            -1 => Ok(Score::Loss),
            0 => Ok(Score::Tie),
            1 => Ok(Score::Win),
            _ => Err(Error::ScoreOutOfRange(n)),
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", i32::from(*self))
    }
}

/// One configuration of a two-player, sequential, zero-sum game plus whose
/// turn it is. Positions are values: `apply_move` returns a new position and
/// leaves `self` untouched.
///
/// Every score returned here is stated from the viewpoint of
/// `next_player()`.
pub trait Position: Clone + Eq + Hash + Serialize {
    type Move: Clone + Eq + fmt::Debug + fmt::Display;

    fn next_player(&self) -> Player;

    fn is_terminal(&self) -> bool;

    /// Legal moves in a fixed order. Empty iff the position is terminal.
    fn possible_next_moves(&self) -> Vec<Self::Move>;

    /// Fails with `Error::IllegalMove` unless `m` is currently legal.
    fn apply_move(&self, m: &Self::Move) -> Result<Self>;

    /// Only meaningful on terminal positions.
    fn outcome(&self) -> Score;

    /// Cheap estimate, valid on any position.
    fn rough_outcome(&self) -> Score;

    /// Covers the board and the player to move, so equal boards with
    /// different movers never share a key.
    fn key(&self) -> Result<Key> {
        Ok(bincode::serialize(self)?)
    }

    fn is_legal(&self, m: &Self::Move) -> bool {
        self.possible_next_moves().contains(m)
    }

    fn winner(&self) -> Option<Player> {
        if !self.is_terminal() {
            return None;
        }
        match self.outcome() {
            Score::Win => Some(self.next_player()),
            Score::Loss => Some(self.next_player().opponent()),
            Score::Tie => None,
        }
    }
}

/// Text input for the interactive runner.
pub trait ParseMove: Position {
    fn parse_move(&self, input: &str) -> Option<Self::Move>;
    fn instructions(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negation_flips_perspective() {
        assert_eq!(-Score::Win, Score::Loss);
        assert_eq!(-Score::Loss, Score::Win);
        assert_eq!(-Score::Tie, Score::Tie);
        assert_eq!(-(-Score::Win), Score::Win);
    }

    #[test]
    fn scores_order_like_integers() {
        assert!(Score::Loss < Score::Tie && Score::Tie < Score::Win);
        for s in &[Score::Loss, Score::Tie, Score::Win] {
            assert_eq!(Score::try_from(i32::from(*s)).unwrap(), *s);
        }
    }

    #[test]
    fn out_of_range_integers_are_rejected() {
        match Score::try_from(2) {
            Err(Error::ScoreOutOfRange(2)) => (),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn opponent_alternates() {
        assert_eq!(Player::P1.opponent(), Player::P2);
        assert_eq!(Player::P2.opponent().opponent(), Player::P2);
    }
}
