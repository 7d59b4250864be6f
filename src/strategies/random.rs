use super::*;
use rand::rngs::SmallRng;

/// Picks any legal move, uniformly.
pub struct Random {
    pub params: SearchParams,
    rng: SmallRng,
}

impl Random {
    pub fn create(params: SearchParams) -> Self {
        Random {
            rng: rng(params.seed),
            params,
        }
    }
}

impl<G: Position> Strategy<G> for Random {
    fn suggest_move(&mut self, position: &G) -> Result<G::Move> {
        if position.is_terminal() {
            return Err(Error::TerminalPosition);
        }
        position
            .possible_next_moves()
            .choose(&mut self.rng)
            .cloned()
            .ok_or(Error::NoLegalMoves)
    }
}
