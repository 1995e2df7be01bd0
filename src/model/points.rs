use serde::Serialize;

use crate::stats::types::{PassingLine, ReceivingLine, RushingLine, SeasonProjection};

#[cfg(test)]
mod tests;

/// Regular-season games per team; converts season totals to a per-game figure.
pub const GAMES_PER_SEASON: f64 = 17.0;

/// Points awarded per unit of each stat category (PPR defaults).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoringWeights {
    pub two_point_conversion: f64,
    pub pass_yards: f64,
    pub pass_td: f64,
    pub interception: f64,
    pub reception: f64,
    /// Sent to the provider with projection queries; not part of the total.
    pub rush_carry: f64,
    pub rush_yards: f64,
    pub rush_td: f64,
    pub fumble_lost: f64,
    pub receiving_yards: f64,
    pub receiving_td: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            two_point_conversion: 2.0,
            pass_yards: 0.04,
            pass_td: 4.0,
            interception: -2.0,
            reception: 1.0,
            rush_carry: 0.2,
            rush_yards: 0.1,
            rush_td: 6.0,
            fumble_lost: -2.0,
            receiving_yards: 0.1,
            receiving_td: 6.0,
        }
    }
}

impl ScoringWeights {
    /// Query parameters understood by the projections endpoint.
    pub fn to_query_params(&self) -> Vec<(String, String)> {
        [
            ("twoPointConversions", self.two_point_conversion),
            ("passYards", self.pass_yards),
            ("passTD", self.pass_td),
            ("passInterceptions", self.interception),
            ("pointsPerReception", self.reception),
            ("carries", self.rush_carry),
            ("rushYards", self.rush_yards),
            ("rushTD", self.rush_td),
            ("fumbles", self.fumble_lost),
            ("receivingYards", self.receiving_yards),
            ("receivingTD", self.receiving_td),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }
}

/// A stat record broken out by category. Categories a record lacks are zero.
pub trait CategoryRecord {
    fn rushing(&self) -> &RushingLine;
    fn passing(&self) -> &PassingLine;
    fn receiving(&self) -> &ReceivingLine;

    fn fumbles_lost(&self) -> f64 {
        0.0
    }

    fn two_point_conversions(&self) -> f64 {
        0.0
    }
}

impl CategoryRecord for SeasonProjection {
    fn rushing(&self) -> &RushingLine {
        &self.rushing
    }

    fn passing(&self) -> &PassingLine {
        &self.passing
    }

    fn receiving(&self) -> &ReceivingLine {
        &self.receiving
    }

    fn fumbles_lost(&self) -> f64 {
        self.fumbles_lost
    }

    fn two_point_conversions(&self) -> f64 {
        self.two_point_conversion
    }
}

pub fn rush_points(line: &RushingLine, weights: &ScoringWeights) -> f64 {
    line.rush_yds * weights.rush_yards + line.rush_td * weights.rush_td
}

pub fn pass_points(line: &PassingLine, weights: &ScoringWeights) -> f64 {
    line.pass_yds * weights.pass_yards
        + line.pass_td * weights.pass_td
        + line.interceptions * weights.interception
}

pub fn receiving_points(line: &ReceivingLine, weights: &ScoringWeights) -> f64 {
    line.rec_td * weights.receiving_td
        + line.receptions * weights.reception
        + line.rec_yds * weights.receiving_yards
}

/// Total fantasy points for one record: rush + pass + receiving, less lost
/// fumbles, plus two-point conversions.
pub fn fantasy_points<R>(record: &R, weights: &ScoringWeights) -> f64
where
    R: CategoryRecord + ?Sized,
{
    rush_points(record.rushing(), weights)
        + pass_points(record.passing(), weights)
        + receiving_points(record.receiving(), weights)
        + record.fumbles_lost() * weights.fumble_lost
        + record.two_point_conversions() * weights.two_point_conversion
}

/// Season projection spread across a 17-game season.
pub fn season_average_points(projection: &SeasonProjection, weights: &ScoringWeights) -> f64 {
    fantasy_points(projection, weights) / GAMES_PER_SEASON
}
