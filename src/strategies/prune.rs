use super::*;
use rand::rngs::SmallRng;

/// Which side a node of the search plays for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Turn {
    Max,
    Min,
}

impl Turn {
    fn flip(self) -> Turn {
        match self {
            Turn::Max => Turn::Min,
            Turn::Min => Turn::Max,
        }
    }

    /// Multiplies `s` by +1 or -1.
    fn sign(self, s: Score) -> Score {
        match self {
            Turn::Max => s,
            Turn::Min => -s,
        }
    }
}

/// Minimax with alpha-beta cutoffs. Returns the same scores as `Minimax`
/// while skipping siblings that cannot change the caller's decision.
pub struct Prune {
    pub params: SearchParams,
    rng: SmallRng,
    visits: usize,
}

impl Prune {
    pub fn create(params: SearchParams) -> Self {
        Prune {
            rng: rng(params.seed),
            params,
            visits: 0,
        }
    }

    fn score_of<G: Position>(visits: &mut usize, position: &G, turn: Turn, bound: Score) -> Result<Score> {
        *visits += 1;
        if position.is_terminal() {
            return Ok(turn.sign(position.outcome()));
        }
        let mut guarantee = turn.sign(Score::Loss);
        let moves = position.possible_next_moves();
        if moves.is_empty() {
            return Err(Error::NoLegalMoves);
        }
        for m in moves {
            let child = position.apply_move(&m)?;
            let s = Self::score_of(visits, &child, turn.flip(), guarantee)?;
            match turn {
                Turn::Max => {
                    guarantee = guarantee.max(s);
                    if guarantee >= bound {
                        return Ok(bound);
                    }
                }
                Turn::Min => {
                    guarantee = guarantee.min(s);
                    if guarantee <= bound {
                        return Ok(bound);
                    }
                }
            }
        }
        Ok(guarantee)
    }
}

impl<G: Position> Scorer<G> for Prune {
    fn score(&mut self, position: &G) -> Result<Score> {
        Self::score_of(&mut self.visits, position, Turn::Min, Score::Loss)
    }

    fn value(&mut self, position: &G) -> Result<Score> {
        Self::score_of(&mut self.visits, position, Turn::Max, Score::Win)
    }

    fn visits(&self) -> usize {
        self.visits
    }
}

impl<G: Position> Strategy<G> for Prune {
    fn suggest_move(&mut self, position: &G) -> Result<G::Move> {
        let visits = &mut self.visits;
        let m = select(position, &mut self.rng, |child| {
            Self::score_of(visits, child, Turn::Min, Score::Loss)
        });
        log::debug!("prune scored {} positions", self.visits);
        m
    }
}
