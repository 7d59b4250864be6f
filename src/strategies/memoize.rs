use super::*;
use crate::game::Key;
use rand::rngs::SmallRng;
use std::collections::HashMap;
use std::marker::PhantomData;

/// Minimax that remembers the score of every position it has seen. The cache
/// lives as long as the strategy and is never evicted. Bound to one game type
/// so keys from different games never meet in one cache.
pub struct Memoize<G> {
    pub params: SearchParams,
    rng: SmallRng,
    cache: HashMap<Key, Score>,
    visits: usize,
    _phantom: PhantomData<G>,
}

impl<G: Position> Memoize<G> {
    pub fn create(params: SearchParams) -> Self {
        Memoize {
            rng: rng(params.seed),
            params,
            cache: HashMap::new(),
            visits: 0,
            _phantom: PhantomData,
        }
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    fn score_of(
        cache: &mut HashMap<Key, Score>,
        visits: &mut usize,
        position: &G,
    ) -> Result<Score> {
        let key = position.key()?;
        if let Some(&s) = cache.get(&key) {
            return Ok(s);
        }
        *visits += 1;
        let s = if position.is_terminal() {
            -position.outcome()
        } else {
            min_over_children(position, |child| Self::score_of(cache, visits, child))?
        };
        cache.insert(key, s);
        Ok(s)
    }
}

impl<G: Position> Scorer<G> for Memoize<G> {
    fn score(&mut self, position: &G) -> Result<Score> {
        Self::score_of(&mut self.cache, &mut self.visits, position)
    }

    fn visits(&self) -> usize {
        self.visits
    }
}

impl<G: Position> Strategy<G> for Memoize<G> {
    fn suggest_move(&mut self, position: &G) -> Result<G::Move> {
        let cache = &mut self.cache;
        let visits = &mut self.visits;
        let m = select(position, &mut self.rng, |child| Self::score_of(cache, visits, child));
        log::debug!("memoize scored {} positions, {} cached", self.visits, self.cache.len());
        m
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::subtract::SubtractSquare;
    use crate::game::tictactoe::TicTacToe;
    use crate::game::Player;
    use crate::strategies::Minimax;

    fn memoize<G: Position>() -> Memoize<G> {
        Memoize::create(SearchParams { seed: Some(9) })
    }

    #[test]
    fn agrees_with_plain_minimax() {
        let mut plain = Minimax::create(SearchParams::default());
        let mut memo: Memoize<SubtractSquare> = memoize();
        for total in 0..30 {
            for &p in &[Player::P1, Player::P2] {
                let game = SubtractSquare::new(p, total);
                assert_eq!(
                    memo.score(&game).unwrap(),
                    plain.score(&game).unwrap(),
                    "total {}",
                    total
                );
            }
        }
    }

    #[test]
    fn agrees_on_tictactoe() {
        let game = TicTacToe::from_rows(Player::P1, ["X..", ".O.", "..."]);
        let mut plain = Minimax::create(SearchParams::default());
        let mut memo: Memoize<TicTacToe> = memoize();
        assert_eq!(memo.score(&game).unwrap(), plain.score(&game).unwrap());
        for m in game.possible_next_moves() {
            let child = game.apply_move(&m).unwrap();
            assert_eq!(memo.score(&child).unwrap(), plain.score(&child).unwrap());
        }
    }

    #[test]
    fn hits_skip_the_search() {
        let mut memo: Memoize<SubtractSquare> = memoize();
        let game = SubtractSquare::new(Player::P1, 30);
        let first = memo.score(&game).unwrap();
        let (visits, len) = (memo.visits(), memo.cache_len());
        // one entry per distinct total and mover reached
        assert!(len > 30 && len <= 62);
        assert_eq!(visits, len);
        assert_eq!(memo.score(&game).unwrap(), first);
        assert_eq!(memo.visits(), visits);
        assert_eq!(memo.cache_len(), len);
    }

    #[test]
    fn does_less_work_than_plain_minimax() {
        let game = SubtractSquare::new(Player::P1, 30);
        let mut plain = Minimax::create(SearchParams::default());
        let mut memo: Memoize<SubtractSquare> = memoize();
        plain.score(&game).unwrap();
        memo.score(&game).unwrap();
        assert!(
            memo.visits() * 10 < Scorer::<SubtractSquare>::visits(&plain)
        );
    }

    #[test]
    fn cache_grows_across_moves() {
        let mut memo: Memoize<SubtractSquare> = memoize();
        let game = SubtractSquare::new(Player::P1, 12);
        let m = memo.suggest_move(&game).unwrap();
        let after_first = memo.cache_len();
        assert!(after_first > 0);
        let next = game.apply_move(&m).unwrap();
        if !next.is_terminal() {
            let reply = memo.suggest_move(&next).unwrap();
            assert!(next.is_legal(&reply));
        }
        assert!(memo.cache_len() >= after_first);
    }

    #[test]
    fn separate_instances_do_not_share_a_cache() {
        let mut a: Memoize<SubtractSquare> = memoize();
        let b: Memoize<SubtractSquare> = memoize();
        a.score(&SubtractSquare::new(Player::P1, 9)).unwrap();
        assert!(a.cache_len() > 0);
        assert_eq!(b.cache_len(), 0);
    }
}
