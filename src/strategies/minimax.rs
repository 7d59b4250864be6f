use super::*;
use rand::rngs::SmallRng;

/// Exhaustive search of the game tree.
pub struct Minimax {
    pub params: SearchParams,
    rng: SmallRng,
    visits: usize,
}

impl Minimax {
    pub fn create(params: SearchParams) -> Self {
        Minimax {
            rng: rng(params.seed),
            params,
            visits: 0,
        }
    }

    fn score_of<G: Position>(visits: &mut usize, position: &G) -> Result<Score> {
        *visits += 1;
        if position.is_terminal() {
            return Ok(-position.outcome());
        }
        min_over_children(position, |child| Self::score_of(visits, child))
    }
}

impl<G: Position> Scorer<G> for Minimax {
    fn score(&mut self, position: &G) -> Result<Score> {
        Self::score_of(&mut self.visits, position)
    }

    fn visits(&self) -> usize {
        self.visits
    }
}

impl<G: Position> Strategy<G> for Minimax {
    fn suggest_move(&mut self, position: &G) -> Result<G::Move> {
        let visits = &mut self.visits;
        let m = select(position, &mut self.rng, |child| Self::score_of(visits, child));
        log::debug!("minimax scored {} positions", self.visits);
        m
    }
}
