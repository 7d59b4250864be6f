#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("cannot suggest a move, game is over")]
    TerminalPosition,
    #[error("illegal move: {0}")]
    IllegalMove(String),
    #[error("non-terminal position has no legal moves")]
    NoLegalMoves,
    #[error("score out of range: {0}")]
    ScoreOutOfRange(i32),
    #[error("position key encoding failed: {0}")]
    Key(#[from] bincode::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
