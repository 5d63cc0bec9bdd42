use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board must have at least one row")]
    ZeroRows,
    #[error("board must have at least one column")]
    ZeroCols,
    #[error("wall percent {0} is outside 0..=100")]
    WallPercentOutOfRange(u8),
    #[error("hole percent {0} is outside 0..=100")]
    HolePercentOutOfRange(u8),
    #[error("wall percent {wall} plus hole percent {hole} exceeds 100")]
    PercentSumExceeded { wall: u8, hole: u8 },
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("invalid board configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
    /// More enemies were requested than there are free floor cells to hold them.
    #[error("cannot place {requested} enemies, only {available} eligible floor cells")]
    UnsatisfiableEnemyQuota { requested: usize, available: usize },
}
