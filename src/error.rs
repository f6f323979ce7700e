use std::io;

#[derive(thiserror::Error, Debug)]
pub enum BoardError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("empty board input")]
    Empty,
    #[error("invalid number: {0:?}")]
    InvalidNumber(String),
    #[error("expected {expected} tiles, found {found}")]
    WrongTileCount { expected: usize, found: usize },
    #[error("board dimension must be at least 2, got {0}")]
    TooSmall(usize),
    #[error("board dimension {0} is too large")]
    TooLarge(usize),
    #[error("row {row} has {len} tiles, expected {expected}")]
    NotSquare { row: usize, len: usize, expected: usize },
    #[error("tile {tile} out of range for a board with {cells} cells")]
    TileOutOfRange { tile: u32, cells: usize },
    #[error("tile {0} appears more than once")]
    DuplicateTile(u32),
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SolverError {
    #[error("no initial board supplied")]
    MissingBoard,
    #[error("search aborted after {expanded} expansions")]
    ExpansionLimit { expanded: usize },
    #[error("both search queues ran dry")]
    Exhausted,
}
