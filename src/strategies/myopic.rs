use super::*;
use rand::rngs::SmallRng;

#[derive(Clone, Debug)]
pub struct MyopicParams {
    /// Plies searched exactly before falling back to `rough_outcome`.
    pub limit: usize,
    pub seed: Option<u64>,
}

impl Default for MyopicParams {
    fn default() -> Self {
        MyopicParams {
            limit: 3,
            seed: None,
        }
    }
}

/// Minimax cut off at a fixed horizon. Past `limit` plies a position is
/// judged by its heuristic estimate, so the suggestion may be suboptimal but
/// is always legal.
pub struct Myopic {
    pub params: MyopicParams,
    rng: SmallRng,
    visits: usize,
}

impl Myopic {
    pub fn create(params: MyopicParams) -> Self {
        Myopic {
            rng: rng(params.seed),
            params,
            visits: 0,
        }
    }

    fn score_of<G: Position>(
        visits: &mut usize,
        limit: usize,
        position: &G,
        depth: usize,
    ) -> Result<Score> {
        *visits += 1;
        if position.is_terminal() {
            return Ok(-position.outcome());
        }
        if depth >= limit {
            return Ok(-position.rough_outcome());
        }
        min_over_children(position, |child| {
            Self::score_of(visits, limit, child, depth + 1)
        })
    }
}

impl<G: Position> Scorer<G> for Myopic {
    fn score(&mut self, position: &G) -> Result<Score> {
        Self::score_of(&mut self.visits, self.params.limit, position, 0)
    }

    fn visits(&self) -> usize {
        self.visits
    }
}

impl<G: Position> Strategy<G> for Myopic {
    fn suggest_move(&mut self, position: &G) -> Result<G::Move> {
        let visits = &mut self.visits;
        let limit = self.params.limit;
        let m = select(position, &mut self.rng, |child| {
            Self::score_of(visits, limit, child, 0)
        });
        log::debug!("myopic(limit {}) scored {} positions", limit, self.visits);
        m
    }
}
