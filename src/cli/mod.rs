//! CLI argument definitions and parsing.

pub mod types;

use clap::{Parser, Subcommand};
use types::{Season, Week};

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compare two players and recommend which one to start.
    ///
    /// Blends season projections, team momentum, recent games and the
    /// opponent's defense into one expected-points figure per player.
    Compare {
        /// Full name of the first player, e.g. "Josh Allen".
        #[clap(long, short = 'a')]
        player_a: String,

        /// Full name of the second player.
        #[clap(long, short = 'b')]
        player_b: String,

        /// Week to start the player in (2 or later).
        #[clap(long, short)]
        week: Week,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Print the provider ID for a player's full name.
    Lookup {
        /// Full player name (case-insensitive).
        name: String,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Show display assets for one player: headshot, team logo and recent form.
    PlayerCard {
        /// Full player name (case-insensitive).
        name: String,

        /// Recent form covers the games before this week.
        #[clap(long, short, default_value_t = Week::new(2))]
        week: Week,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(
    name = "ffl-compare",
    version,
    about = "Fantasy football start/sit comparison"
)]
pub struct FflCompare {
    /// Season year; overrides `FFL_SEASON`.
    #[clap(long, short, global = true)]
    pub season: Option<Season>,

    #[clap(subcommand)]
    pub command: Commands,
}
