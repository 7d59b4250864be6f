use crate::error::{Error, Result};
use crate::game::{ParseMove, Player, Position};
use crate::strategies::Strategy;
use std::fmt;
use std::io::{self, BufRead};

pub trait Participant<G: Position> {
    fn choose_move(&mut self, game: &G) -> Result<G::Move>;
    fn display_name(&self) -> &str;
    fn player_type(&self) -> &str;
    fn full_name(&self) -> String {
        format!("{} ({})", self.display_name(), self.player_type())
    }
}

pub struct HumanPlayer {
    name: String,
}

impl HumanPlayer {
    pub fn new(name: &str) -> Self {
        HumanPlayer {
            name: String::from(name),
        }
    }
}

impl<G> Participant<G> for HumanPlayer
where
    G: ParseMove + fmt::Display,
{
    fn display_name(&self) -> &str {
        self.name.as_str()
    }

    fn player_type(&self) -> &str {
        "Human"
    }

    fn choose_move(&mut self, game: &G) -> Result<G::Move> {
        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();
        loop {
            println!("What is your move?");
            let choice = match lines.next() {
                Some(line) => line?,
                None => {
                    return Err(Error::Io(io::Error::new(
                        io::ErrorKind::UnexpectedEof,
                        "input closed before a move was chosen",
                    )))
                }
            };
            println!();

            let choice = match game.parse_move(choice.trim()) {
                Some(m) => m,
                None => {
                    println!("Could not read that move.\n{}", game.instructions());
                    continue;
                }
            };

            if !game.is_legal(&choice) {
                println!("Illegal move: {}\nPlease try again.\n", choice);
                println!("{}", game);
                continue;
            }

            println!("You choose: {}", choice);
            return Ok(choice);
        }
    }
}

pub struct AIPlayer<G: Position> {
    name: String,
    strategy: Box<dyn Strategy<G>>,
}

impl<G: Position> AIPlayer<G> {
    pub fn new(name: &str, strategy: Box<dyn Strategy<G>>) -> Self {
        AIPlayer {
            name: String::from(name),
            strategy,
        }
    }
}

impl<G: Position> Participant<G> for AIPlayer<G> {
    fn display_name(&self) -> &str {
        self.name.as_str()
    }

    fn player_type(&self) -> &str {
        "Computer"
    }

    fn choose_move(&mut self, game: &G) -> Result<G::Move> {
        log::debug!("{} is thinking", self.name);
        let m = self.strategy.suggest_move(game)?;
        println!("{} chooses: {}", self.name, m);
        Ok(m)
    }
}

pub type Plr<'a, G> = &'a mut dyn Participant<G>;

/// Alternates two participants over one game. `players.0` moves for
/// `Player::P1`.
pub struct Runner<'a, G: Position> {
    board: G,
    players: (Plr<'a, G>, Plr<'a, G>),
}

impl<'a, G> Runner<'a, G>
where
    G: Position + fmt::Display,
{
    pub fn new(board: G, p1: Plr<'a, G>, p2: Plr<'a, G>) -> Self {
        Runner {
            board,
            players: (p1, p2),
        }
    }

    pub fn board(&self) -> &G {
        &self.board
    }

    fn init(&self) {
        println!("Player 1 is {}", self.players.0.full_name());
        println!("Player 2 is {}", self.players.1.full_name());
        println!("{} goes first!", self.board.next_player());
    }

    fn step(&mut self) -> Result<()> {
        println!("{}", self.board);
        let m = match self.board.next_player() {
            Player::P1 => self.players.0.choose_move(&self.board)?,
            Player::P2 => self.players.1.choose_move(&self.board)?,
        };
        self.board = self.board.apply_move(&m)?;
        println!();
        Ok(())
    }

    fn game_loop(&mut self) -> Result<Option<Player>> {
        while !self.board.is_terminal() {
            self.step()?;
        }
        println!("{}", self.board);
        let winner = self.board.winner();
        match winner {
            Some(p) => println!("Winner is: {}", p),
            None => println!("We tied..."),
        }
        log::info!("game over, winner {:?}", winner);
        Ok(winner)
    }

    pub fn run(board: G, p1: Plr<'a, G>, p2: Plr<'a, G>) -> Result<Option<Player>> {
        let mut runner = Runner::new(board, p1, p2);
        runner.init();
        runner.game_loop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::subtract::SubtractSquare;
    use crate::game::tictactoe::TicTacToe;
    use crate::game::tippy::Tippy;
    use crate::strategies::StrategyKind;

    fn computer<G: Position + 'static>(kind: StrategyKind) -> AIPlayer<G> {
        AIPlayer::new(&kind.to_string(), kind.build(3, Some(2)))
    }

    #[test]
    fn perfect_players_decide_subtract_square_by_the_start() {
        // 20 is lost for whoever moves first
        let mut a = computer::<SubtractSquare>(StrategyKind::Memoize);
        let mut b = computer::<SubtractSquare>(StrategyKind::Prune);
        let winner = Runner::run(SubtractSquare::new(Player::P1, 20), &mut a, &mut b).unwrap();
        assert_eq!(winner, Some(Player::P2));

        let mut a = computer::<SubtractSquare>(StrategyKind::Minimax);
        let mut b = computer::<SubtractSquare>(StrategyKind::Memoize);
        let winner = Runner::run(SubtractSquare::new(Player::P1, 21), &mut a, &mut b).unwrap();
        assert_eq!(winner, Some(Player::P1));
    }

    #[test]
    fn perfect_tictactoe_is_a_tie() {
        let mut a = computer::<TicTacToe>(StrategyKind::Memoize);
        let mut b = computer::<TicTacToe>(StrategyKind::Memoize);
        let winner = Runner::run(TicTacToe::new(Player::P1), &mut a, &mut b).unwrap();
        assert_eq!(winner, None);
    }

    #[test]
    fn random_games_finish() {
        let mut a = computer::<Tippy>(StrategyKind::Random);
        let mut b = computer::<Tippy>(StrategyKind::Myopic);
        let mut runner = Runner::new(Tippy::new(Player::P2, 3), &mut a, &mut b);
        runner.game_loop().unwrap();
        assert!(runner.board().is_terminal());
    }

    #[test]
    fn names() {
        let ai = computer::<SubtractSquare>(StrategyKind::Prune);
        assert_eq!(Participant::<SubtractSquare>::full_name(&ai), "prune (Computer)");
        let human = HumanPlayer::new("Justin");
        assert_eq!(Participant::<Tippy>::full_name(&human), "Justin (Human)");
    }
}
