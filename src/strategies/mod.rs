use crate::error::{Error, Result};
use crate::game::{Position, Score};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::str::FromStr;

pub mod memoize;
pub mod minimax;
pub mod myopic;
pub mod prune;
pub mod random;

pub use self::memoize::Memoize;
pub use self::minimax::Minimax;
pub use self::myopic::{Myopic, MyopicParams};
pub use self::prune::Prune;
pub use self::random::Random;

pub trait Strategy<G: Position> {
    /// Fails with `Error::TerminalPosition` on a finished game.
    fn suggest_move(&mut self, position: &G) -> Result<G::Move>;
}

/// Strategies that compute an exact or estimated score per position.
pub trait Scorer<G: Position> {
    /// Score of `position` for the player who just moved into it.
    fn score(&mut self, position: &G) -> Result<Score>;

    /// Score of `position` for the player about to move.
    fn value(&mut self, position: &G) -> Result<Score> {
        self.score(position).map(|s| -s)
    }

    /// Positions scored since creation.
    fn visits(&self) -> usize;
}

#[derive(Clone, Debug, Default)]
pub struct SearchParams {
    /// Seeds the fallback move picker; entropy when absent.
    pub seed: Option<u64>,
}

pub(crate) fn rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::from_entropy(),
    }
}

/// First move scoring a win, else the first scoring a tie, else any legal
/// move at random. `score` sees each child from the viewpoint of the player
/// choosing here.
pub(crate) fn select<G, R, F>(position: &G, rng: &mut R, mut score: F) -> Result<G::Move>
where
    G: Position,
    R: Rng,
    F: FnMut(&G) -> Result<Score>,
{
    if position.is_terminal() {
        return Err(Error::TerminalPosition);
    }
    let moves = position.possible_next_moves();
    let mut tie = None;
    for m in &moves {
        let s = score(&position.apply_move(m)?)?;
        log::trace!("{:<24}{}", m, s);
        match s {
            Score::Win => {
                log::debug!("winning move {}", m);
                return Ok(m.clone());
            }
            Score::Tie if tie.is_none() => tie = Some(m.clone()),
            _ => (),
        }
    }
    if let Some(m) = tie {
        log::debug!("tying move {}", m);
        return Ok(m);
    }
    let m = moves.choose(rng).cloned().ok_or(Error::NoLegalMoves)?;
    log::debug!("every move loses, picked {}", m);
    Ok(m)
}

/// Worst score over the children of a non-terminal position, each negated so
/// it reads from the mover's side.
pub(crate) fn min_over_children<G, F>(position: &G, mut score: F) -> Result<Score>
where
    G: Position,
    F: FnMut(&G) -> Result<Score>,
{
    let mut worst = None;
    for m in position.possible_next_moves() {
        let s = -score(&position.apply_move(&m)?)?;
        worst = Some(worst.map_or(s, |w: Score| w.min(s)));
    }
    worst.ok_or(Error::NoLegalMoves)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StrategyKind {
    Minimax,
    Memoize,
    Prune,
    Myopic,
    Random,
}

impl StrategyKind {
    pub const ALL: [&'static str; 5] = ["minimax", "memoize", "prune", "myopic", "random"];

    pub fn build<G: Position + 'static>(&self, limit: usize, seed: Option<u64>) -> Box<dyn Strategy<G>> {
        let params = SearchParams { seed };
        match *self {
            StrategyKind::Minimax => Box::new(Minimax::create(params)),
            StrategyKind::Memoize => Box::new(Memoize::<G>::create(params)),
            StrategyKind::Prune => Box::new(Prune::create(params)),
            StrategyKind::Myopic => Box::new(Myopic::create(MyopicParams { limit, seed })),
            StrategyKind::Random => Box::new(Random::create(params)),
        }
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "minimax" => Ok(StrategyKind::Minimax),
            "memoize" => Ok(StrategyKind::Memoize),
            "prune" => Ok(StrategyKind::Prune),
            "myopic" => Ok(StrategyKind::Myopic),
            "random" => Ok(StrategyKind::Random),
            _ => Err(format!("unknown strategy `{}`", s)),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            StrategyKind::Minimax => "minimax",
            StrategyKind::Memoize => "memoize",
            StrategyKind::Prune => "prune",
            StrategyKind::Myopic => "myopic",
            StrategyKind::Random => "random",
        };
        write!(f, "{}", name)
    }
}
