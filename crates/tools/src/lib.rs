//! Shared helpers for the board command-line tools.

pub mod board_config_file;
pub mod invariants;
pub mod seed;
pub mod text;
