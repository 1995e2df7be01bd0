//! Command implementations for the ffl-compare CLI

pub mod common;
pub mod compare;
pub mod lookup;
pub mod player_card;

#[cfg(test)]
pub(crate) mod tests;

pub use common::CommandContext;
pub use compare::{compare, CompareError, CompareOptions, CompareRequest, PlayerRef};
pub use player_card::{team_logo, PlayerCard};
