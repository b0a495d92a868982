use analysis::scoring;
use analysis::{PlacementRange, RoundConfig};
use pretty_assertions::assert_eq;
use tracing_test::traced_test;

mod common;

#[test]
fn uncapped_kill_points() {
    let mut config = common::config(1, 2.0, &[]);

    for kills in [0, 1, 7, 40] {
        assert_eq!(kills as f64 * 2.0, scoring::kill_points(kills, &config));
    }

    config.kill_cap = -3;
    assert_eq!(80.0, scoring::kill_points(40, &config));
}

#[test]
fn capped_kill_points() {
    let config = RoundConfig {
        kill_cap: 5,
        ..common::config(1, 2.0, &[])
    };

    assert_eq!(6.0, scoring::kill_points(3, &config));
    assert_eq!(10.0, scoring::kill_points(5, &config));
    assert_eq!(10.0, scoring::kill_points(7, &config));
    assert_eq!(10.0, scoring::kill_points(100, &config));
}

#[test]
fn overlapping_ranges() {
    let ranges = [PlacementRange::new(1, 3, 5.0), PlacementRange::new(2, 2, 4.0)];

    assert_eq!(9.0, scoring::placement_points(2, &ranges));
    assert_eq!(5.0, scoring::team_placement_points(2, &ranges));

    assert_eq!(5.0, scoring::placement_points(1, &ranges));
    assert_eq!(5.0, scoring::team_placement_points(1, &ranges));
}

#[test]
fn placement_outside_ranges() {
    let ranges = [PlacementRange::new(1, 1, 10.0), PlacementRange::new(2, 5, 5.0)];

    assert_eq!(0.0, scoring::placement_points(0, &ranges));
    assert_eq!(0.0, scoring::placement_points(6, &ranges));
    assert_eq!(0.0, scoring::team_placement_points(0, &ranges));
}

#[test]
#[traced_test]
fn kill_bonus_and_placement() {
    let config = RoundConfig {
        most_kills_bonus: 5.0,
        ..common::config(1, 1.0, &[(1, 1, 10.0), (2, 5, 5.0)])
    };
    let rows = common::rows(&[("A", "S1", 3, 1), ("B", "S1", 3, 2)]);

    let scored = scoring::score_round(&rows, &config);

    let points: Vec<_> = scored
        .iter()
        .map(|s| (s.kill_points, s.placement_points, s.bonus_points, s.total()))
        .collect();
    assert_eq!(vec![(3.0, 10.0, 5.0, 18.0), (3.0, 5.0, 5.0, 13.0)], points);
}

#[test]
fn kill_bonus_ties() {
    let config = RoundConfig {
        most_kills_bonus: 5.0,
        ..common::config(1, 1.0, &[])
    };
    let rows = common::rows(&[("A", "S1", 4, 1), ("B", "S2", 1, 2), ("C", "S3", 4, 3)]);

    let bonus: Vec<_> = scoring::score_round(&rows, &config)
        .iter()
        .map(|s| s.bonus_points)
        .collect();

    assert_eq!(vec![5.0, 0.0, 5.0], bonus);
}

#[test]
fn kill_bonus_without_kills() {
    let config = RoundConfig {
        most_kills_bonus: 1.0,
        ..common::config(1, 1.0, &[])
    };
    let rows = common::rows(&[("A", "S1", 0, 1), ("B", "S2", 0, 2)]);

    let bonus: Vec<_> = scoring::score_round(&rows, &config)
        .iter()
        .map(|s| s.bonus_points)
        .collect();

    assert_eq!(vec![1.0, 1.0], bonus);
}

#[test]
fn pacifist_round() {
    let config = RoundConfig {
        pacifist: true,
        most_kills_bonus: 5.0,
        ..common::config(1, 2.0, &[(1, 1, 10.0), (1, 3, 3.0)])
    };
    let rows = common::rows(&[("A", "S1", 2, 1), ("B", "S1", 0, 1), ("C", "S2", 9, 3)]);

    let scored = scoring::score_round(&rows, &config);

    let points: Vec<_> = scored
        .iter()
        .map(|s| (s.row.kills, s.kill_points, s.placement_points, s.bonus_points))
        .collect();
    assert_eq!(
        vec![(2, 0.0, 0.0, 0.0), (0, 0.0, 13.0, 0.0), (9, 0.0, 0.0, 0.0)],
        points
    );
}

#[test]
fn score_row_ignores_round_rules() {
    let config = RoundConfig {
        pacifist: true,
        ..common::config(1, 1.5, &[(1, 1, 10.0)])
    };

    let points = scoring::score_row(&common::row("A", "S1", 2, 1), &config);

    assert_eq!(3.0, points.kill_points);
    assert_eq!(10.0, points.placement_points);
}

#[test]
fn empty_round() {
    let config = common::config(1, 1.0, &[(1, 1, 10.0)]);

    assert!(scoring::score_round(&[], &config).is_empty());
}
