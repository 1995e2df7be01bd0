//! Display assets for a single player: headshot, team logo and recent form.
//!
//! Asset reads never fail a command. Anything the provider cannot supply is
//! left as `None` and shown as absent.

use serde::Serialize;
use std::fmt;
use tracing::debug;

use crate::{
    cli::types::{PlayerId, Week},
    model::composite::{last_week_points, recent_average_points},
    stats::{
        source::{StatSource, TeamQuery},
        types::{find_team, TeamInfo},
    },
    Result,
};

use super::common::{print_json, CommandContext};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlayerCard {
    pub name: String,
    pub id: Option<PlayerId>,
    pub position: Option<String>,
    pub headshot: Option<String>,
    pub team: Option<String>,
    pub team_logo: Option<String>,
    pub recent_avg: Option<f64>,
    pub last_week: Option<f64>,
}

impl fmt::Display for PlayerCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn show<T: fmt::Display>(value: &Option<T>) -> String {
            value
                .as_ref()
                .map(|v| v.to_string())
                .unwrap_or_else(|| "-".to_string())
        }
        fn points(value: Option<f64>) -> String {
            value
                .map(|v| format!("{:.2}", v))
                .unwrap_or_else(|| "-".to_string())
        }

        writeln!(f, "{} ({})", self.name, show(&self.id))?;
        writeln!(f, "  Position:    {}", show(&self.position))?;
        writeln!(f, "  Team:        {}", show(&self.team))?;
        writeln!(f, "  Recent avg:  {}", points(self.recent_avg))?;
        writeln!(f, "  Last week:   {}", points(self.last_week))?;
        writeln!(f, "  Headshot:    {}", show(&self.headshot))?;
        writeln!(f, "  Team logo:   {}", show(&self.team_logo))
    }
}

/// Logo URL for `abv`, matched case-insensitively.
pub fn team_logo(teams: &[TeamInfo], abv: &str) -> Option<String> {
    find_team(teams, abv).and_then(|team| team.logo.clone())
}

/// Round to two decimals for display.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Gather display assets for `name`. `id` is used when already resolved,
/// otherwise the provider's player-info ID is used.
pub async fn build_player_card<S>(
    source: &S,
    name: &str,
    id: Option<&PlayerId>,
    week: Week,
) -> PlayerCard
where
    S: StatSource + ?Sized,
{
    let mut card = PlayerCard {
        name: name.to_string(),
        id: id.cloned(),
        ..Default::default()
    };

    if let Some(info) = source.player_info(name, card.id.as_ref()).await {
        if card.id.is_none() && !info.player_id.is_empty() {
            card.id = Some(info.player_id.clone());
        }
        if let Some(long_name) = non_empty(&info.long_name) {
            card.name = long_name;
        }
        card.position = non_empty(&info.pos);
        card.team = non_empty(&info.team);
        card.headshot = info.headshot.as_deref().and_then(non_empty);
    } else {
        debug!(name, "no player info for card");
    }

    if let Some(team) = &card.team {
        if let Some(teams) = source.teams(&TeamQuery::standings()).await {
            card.team_logo = team_logo(&teams, team);
        }
    }

    if let (Some(id), true) = (&card.id, week.prior_games() > 0) {
        if let Some(recent) = source.recent_games(id, Some(week.prior_games())).await {
            card.recent_avg = Some(round2(recent_average_points(&recent, week)));
            card.last_week = Some(round2(last_week_points(&recent)));
        }
    }

    card
}

pub async fn handle_player_card(
    ctx: &CommandContext,
    name: &str,
    week: Week,
    as_json: bool,
) -> Result<()> {
    let card = build_player_card(&ctx.source, name, None, week).await;
    if as_json {
        print_json(&card)?;
    } else {
        print!("{}", card);
    }
    Ok(())
}
