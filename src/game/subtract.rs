use super::*;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Remove a positive perfect square from the running total.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Subtract(pub u32);

impl fmt::Display for Subtract {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "subtract {}", self.0)
    }
}

/// Players alternately subtract a square from `total`; whoever brings it to
/// zero wins.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubtractSquare {
    total: u32,
    next: Player,
}

impl SubtractSquare {
    pub fn new(next: Player, total: u32) -> Self {
        SubtractSquare { total, next }
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    fn squares(&self) -> impl Iterator<Item = u32> + '_ {
        (1u32..)
            .map_while(|n| n.checked_mul(n))
            .take_while(move |&sq| sq <= self.total)
    }
}

fn is_square(n: u32) -> bool {
    let root = (n as f64).sqrt() as u32;
    (root.saturating_sub(1)..=root + 1).any(|r| r.checked_mul(r) == Some(n))
}

impl fmt::Display for SubtractSquare {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Current total: {}", self.total)?;
        write!(f, "Next player: {}", self.next)
    }
}

impl Position for SubtractSquare {
    type Move = Subtract;

    fn next_player(&self) -> Player {
        self.next
    }

    fn is_terminal(&self) -> bool {
        self.total == 0
    }

    fn possible_next_moves(&self) -> Vec<Subtract> {
        self.squares().map(Subtract).collect()
    }

    fn apply_move(&self, m: &Subtract) -> Result<Self> {
        if m.0 == 0 || m.0 > self.total || !is_square(m.0) {
            return Err(Error::IllegalMove(format!("{:?}", m)));
        }
        Ok(SubtractSquare {
            total: self.total - m.0,
            next: self.next.opponent(),
        })
    }

    fn outcome(&self) -> Score {
        // the previous mover emptied the total
        Score::Loss
    }

    fn rough_outcome(&self) -> Score {
        if self.is_terminal() {
            self.outcome()
        } else if is_square(self.total) {
            Score::Win
        } else if self.squares().all(|sq| is_square(self.total - sq)) {
            Score::Loss
        } else {
            Score::Tie
        }
    }
}

impl ParseMove for SubtractSquare {
    fn parse_move(&self, input: &str) -> Option<Subtract> {
        input.trim().parse::<u32>().ok().map(Subtract)
    }

    fn instructions(&self) -> &str {
        "Subtract a positive perfect square no larger than the current total. \
         Whoever reaches zero wins."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_are_ascending_squares() {
        let game = SubtractSquare::new(Player::P1, 20);
        assert_eq!(
            game.possible_next_moves(),
            vec![Subtract(1), Subtract(4), Subtract(9), Subtract(16)]
        );
    }

    #[test]
    fn zero_is_terminal_and_lost_for_the_mover() {
        let game = SubtractSquare::new(Player::P1, 4)
            .apply_move(&Subtract(4))
            .unwrap();
        assert!(game.is_terminal());
        assert!(game.possible_next_moves().is_empty());
        assert_eq!(game.next_player(), Player::P2);
        assert_eq!(game.outcome(), Score::Loss);
        assert_eq!(game.winner(), Some(Player::P1));
    }

    #[test]
    fn non_squares_and_overdraws_are_illegal() {
        let game = SubtractSquare::new(Player::P1, 10);
        for m in &[Subtract(0), Subtract(2), Subtract(16)] {
            match game.apply_move(m) {
                Err(Error::IllegalMove(_)) => (),
                other => panic!("{:?} accepted: {:?}", m, other),
            }
            assert!(!game.is_legal(m));
        }
    }

    #[test]
    fn apply_leaves_the_original_untouched() {
        let game = SubtractSquare::new(Player::P2, 10);
        let next = game.apply_move(&Subtract(9)).unwrap();
        assert_eq!(game.total(), 10);
        assert_eq!(next.total(), 1);
        assert_eq!(next.next_player(), Player::P1);
    }

    #[test]
    fn rough_outcome() {
        assert_eq!(SubtractSquare::new(Player::P1, 9).rough_outcome(), Score::Win);
        assert_eq!(SubtractSquare::new(Player::P1, 2).rough_outcome(), Score::Loss);
        assert_eq!(SubtractSquare::new(Player::P1, 7).rough_outcome(), Score::Tie);
    }

    #[test]
    fn totals_near_the_top_of_the_range() {
        let game = SubtractSquare::new(Player::P1, u32::MAX);
        let moves = game.possible_next_moves();
        assert_eq!(moves.len(), 65535);
        assert_eq!(moves.last(), Some(&Subtract(65535 * 65535)));
        assert_eq!(game.rough_outcome(), Score::Tie);
        let next = game.apply_move(&Subtract(65535 * 65535)).unwrap();
        assert_eq!(next.total(), u32::MAX - 65535 * 65535);

        let game = SubtractSquare::new(Player::P1, u32::MAX - 1);
        assert_eq!(game.rough_outcome(), Score::Tie);
        assert!(!game.is_legal(&Subtract(u32::MAX - 1)));
    }

    #[test]
    fn keys_distinguish_the_mover() {
        let a = SubtractSquare::new(Player::P1, 12);
        let b = SubtractSquare::new(Player::P2, 12);
        assert_ne!(a.key().unwrap(), b.key().unwrap());
        assert_eq!(a.key().unwrap(), a.clone().key().unwrap());
    }

    #[test]
    fn parses_numbers() {
        let game = SubtractSquare::new(Player::P1, 10);
        assert_eq!(game.parse_move(" 4 "), Some(Subtract(4)));
        assert_eq!(game.parse_move("four"), None);
    }
}
