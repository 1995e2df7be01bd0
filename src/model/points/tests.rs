//! Unit tests for fantasy point calculation

use super::*;

#[cfg(test)]
mod scoring_tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    fn create_test_projection() -> SeasonProjection {
        SeasonProjection {
            long_name: "Test Quarterback".to_string(),
            pos: "QB".to_string(),
            rushing: RushingLine {
                rush_yds: 400.0,
                rush_td: 5.0,
                carries: 80.0,
            },
            passing: PassingLine {
                pass_yds: 4000.0,
                pass_td: 30.0,
                interceptions: 10.0,
            },
            receiving: ReceivingLine::default(),
            fumbles_lost: 3.0,
            two_point_conversion: 2.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_all_zero_record_scores_zero() {
        let weights = ScoringWeights::default();
        assert_eq!(fantasy_points(&SeasonProjection::default(), &weights), 0.0);
        assert_eq!(season_average_points(&SeasonProjection::default(), &weights), 0.0);
    }

    #[test]
    fn test_category_breakdown() {
        let weights = ScoringWeights::default();
        let projection = create_test_projection();

        // 400 * 0.1 + 5 * 6
        assert_close(rush_points(&projection.rushing, &weights), 70.0);
        // 4000 * 0.04 + 30 * 4 - 10 * 2
        assert_close(pass_points(&projection.passing, &weights), 260.0);
        assert_close(receiving_points(&projection.receiving, &weights), 0.0);

        // 70 + 260 + 0 - 3 * 2 + 2 * 2
        assert_close(fantasy_points(&projection, &weights), 328.0);
    }

    #[test]
    fn test_receiving_points_are_ppr() {
        let weights = ScoringWeights::default();
        let line = ReceivingLine {
            receptions: 100.0,
            rec_yds: 1200.0,
            rec_td: 10.0,
        };
        // 10 * 6 + 100 * 1 + 1200 * 0.1
        assert_close(receiving_points(&line, &weights), 280.0);
    }

    #[test]
    fn test_season_average_divides_by_seventeen() {
        let weights = ScoringWeights::default();
        let projection = create_test_projection();
        assert_close(
            season_average_points(&projection, &weights),
            328.0 / GAMES_PER_SEASON,
        );
    }

    #[test]
    fn test_carries_do_not_score() {
        let weights = ScoringWeights::default();
        let mut projection = SeasonProjection::default();
        projection.rushing.carries = 300.0;
        assert_eq!(fantasy_points(&projection, &weights), 0.0);
    }

    #[test]
    fn test_linear_in_pass_yards() {
        let weights = ScoringWeights::default();
        let base = create_test_projection();
        let base_points = fantasy_points(&base, &weights);
        let contribution = base.passing.pass_yds * weights.pass_yards;

        for k in [0.0, 0.5, 2.0, 3.0] {
            let mut scaled = base.clone();
            scaled.passing.pass_yds *= k;
            let expected = base_points - contribution + contribution * k;
            assert_close(fantasy_points(&scaled, &weights), expected);
        }
    }

    #[test]
    fn test_custom_weights() {
        let weights = ScoringWeights {
            pass_td: 6.0,
            reception: 0.5,
            ..Default::default()
        };
        let mut projection = SeasonProjection::default();
        projection.passing.pass_td = 2.0;
        projection.receiving.receptions = 4.0;
        assert_close(fantasy_points(&projection, &weights), 14.0);
    }

    #[test]
    fn test_query_params_cover_all_weights() {
        let params = ScoringWeights::default().to_query_params();
        assert_eq!(params.len(), 11);
        assert!(params.contains(&("passYards".to_string(), "0.04".to_string())));
        assert!(params.contains(&("passInterceptions".to_string(), "-2".to_string())));
        assert!(params.contains(&("pointsPerReception".to_string(), "1".to_string())));
        assert!(params.contains(&("carries".to_string(), "0.2".to_string())));
    }
}
