use thiserror::Error;

/// Errors from parsing or validating a board definition.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("board definition is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("board has no tiles")]
    EmptyBoard,

    #[error("board has {actual} tiles but size {expected}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("tile {tile} sits at position {position}, outside a board of size {size}")]
    PositionOutOfRange {
        tile: String,
        position: usize,
        size: usize,
    },

    #[error("position {position} is claimed by both {first} and {second}")]
    DuplicatePosition {
        position: usize,
        first: String,
        second: String,
    },

    #[error("ownable tile {tile} has no cost data")]
    MissingData { tile: String },

    #[error("property {tile} has an empty rent table")]
    EmptyRentTable { tile: String },

    #[error("property {tile} starts at level {level} but only has {levels} rent levels")]
    LevelOutOfRange {
        tile: String,
        level: usize,
        levels: usize,
    },

    #[error("tile {tile} has a negative amount: {amount}")]
    NegativeAmount { tile: String, amount: i64 },
}
