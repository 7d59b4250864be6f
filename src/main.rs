use clap::builder::RangedU64ValueParser;
use clap::{value_parser, Arg, ArgAction, Command};
use minimax::game::subtract::SubtractSquare;
use minimax::game::tictactoe::TicTacToe;
use minimax::game::tippy::{Tippy, MIN_SIZE};
use minimax::game::{ParseMove, Player, Position};
use minimax::runner::{AIPlayer, HumanPlayer, Plr, Runner};
use minimax::strategies::StrategyKind;
use std::fmt;

struct Config {
    strategy: StrategyKind,
    limit: usize,
    seed: Option<u64>,
    computer_first: bool,
    autoplay: bool,
}

fn seat<'a, G>(
    game: G,
    computer_first: bool,
    computer: Plr<'a, G>,
    other: Plr<'a, G>,
) -> minimax::Result<Option<Player>>
where
    G: Position + fmt::Display,
{
    if computer_first {
        Runner::run(game, computer, other)
    } else {
        Runner::run(game, other, computer)
    }
}

fn play<G>(game: G, config: &Config) -> minimax::Result<Option<Player>>
where
    G: ParseMove + fmt::Display + 'static,
{
    println!("{}", game.instructions());
    let mut computer = AIPlayer::new("Computer", config.strategy.build(config.limit, config.seed));
    if config.autoplay {
        let seed = config.seed.map(|s| s.wrapping_add(1));
        let mut other = AIPlayer::new("Sparring partner", config.strategy.build(config.limit, seed));
        seat(game, config.computer_first, &mut computer, &mut other)
    } else {
        let mut other = HumanPlayer::new("You");
        seat(game, config.computer_first, &mut computer, &mut other)
    }
}

fn cli() -> Command {
    Command::new("minimax")
        .version("0.1.0")
        .about("Play two-player games against minimax strategies")
        .arg(
            Arg::new("game")
                .short('g')
                .long("game")
                .value_name("GAME")
                .value_parser(["tippy", "subtract", "tictactoe"])
                .default_value("tippy")
                .help("Which game to play."),
        )
        .arg(
            Arg::new("strategy")
                .short('s')
                .long("strategy")
                .value_name("STRATEGY")
                .value_parser(StrategyKind::ALL)
                .default_value("prune")
                .help("How the computer picks its moves."),
        )
        .arg(
            Arg::new("limit")
                .short('l')
                .long("limit")
                .value_name("UINT")
                .value_parser(value_parser!(usize))
                .default_value("3")
                .help("Plies the myopic strategy searches before using its heuristic."),
        )
        .arg(
            Arg::new("size")
                .long("size")
                .value_name("UINT")
                .value_parser(RangedU64ValueParser::<usize>::new().range(MIN_SIZE as u64..))
                .default_value("3")
                .help("Tippy grid dimension, at least 3."),
        )
        .arg(
            Arg::new("total")
                .long("total")
                .value_name("UINT")
                .value_parser(value_parser!(u32))
                .default_value("20")
                .help("Starting total for Subtract-a-Square."),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("UINT")
                .value_parser(value_parser!(u64))
                .help("Seed for the random fallback when every move loses."),
        )
        .arg(
            Arg::new("computer-first")
                .short('c')
                .long("computer-first")
                .action(ArgAction::SetTrue)
                .help("Let the computer make the first move."),
        )
        .arg(
            Arg::new("autoplay")
                .long("autoplay")
                .action(ArgAction::SetTrue)
                .help("Computer plays both sides."),
        )
}

fn do_main() -> minimax::Result<()> {
    let matches = cli().get_matches();

    let strategy = matches
        .get_one::<String>("strategy")
        .and_then(|s| s.parse::<StrategyKind>().ok())
        .unwrap_or(StrategyKind::Prune);
    let config = Config {
        strategy,
        limit: matches.get_one::<usize>("limit").copied().unwrap_or(3),
        seed: matches.get_one::<u64>("seed").copied(),
        computer_first: matches.get_flag("computer-first"),
        autoplay: matches.get_flag("autoplay"),
    };
    log::info!(
        "strategy {} (limit {}), computer first: {}",
        config.strategy,
        config.limit,
        config.computer_first
    );

    let game = matches.get_one::<String>("game").map(String::as_str);
    match game {
        Some("subtract") => {
            let total = matches.get_one::<u32>("total").copied().unwrap_or(20);
            play(SubtractSquare::new(Player::P1, total), &config)?;
        }
        Some("tictactoe") => {
            play(TicTacToe::new(Player::P1), &config)?;
        }
        _ => {
            let size = matches.get_one::<usize>("size").copied().unwrap_or(3);
            play(Tippy::new(Player::P1, size), &config)?;
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(e) = do_main() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
