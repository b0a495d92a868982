use analysis::perround::{self, PlayerDetail};
use analysis::{Mode, RoundConfig};
use pretty_assertions::assert_eq;

mod common;

#[test]
fn squad_totals() {
    let config = RoundConfig {
        most_kills_bonus: 5.0,
        ..common::config(1, 1.0, &[(1, 1, 10.0), (2, 5, 5.0)])
    };
    let rows = common::rows(&[("A", "S1", 3, 1), ("B", "S1", 3, 2)]);

    let result = perround::aggregate(1, &rows, &config, Mode::Squad);

    assert_eq!(1, result.round_number);
    assert_eq!(1, result.teams.len());

    let team = &result.teams[0];
    assert_eq!("S1", team.squad_id);
    assert_eq!(6, team.total_kills);
    assert_eq!(Some(1), team.best_placement);
    assert_eq!(6.0, team.kill_points);
    assert_eq!(10.0, team.placement_points);
    assert_eq!(16.0, team.total_points);
    assert_eq!(
        vec![
            PlayerDetail {
                player_id: "A".to_owned(),
                name: "Player A".to_owned(),
                kills: 3,
                kill_points: 3.0,
            },
            PlayerDetail {
                player_id: "B".to_owned(),
                name: "Player B".to_owned(),
                kills: 3,
                kill_points: 3.0,
            },
        ],
        team.players
    );
}

#[test]
fn groups_keep_first_seen_order() {
    let config = common::config(1, 1.0, &[]);
    let rows = common::rows(&[("A", "S2", 0, 3), ("B", "S1", 0, 1), ("C", "S2", 0, 3)]);

    let result = perround::aggregate(4, &rows, &config, Mode::Duo);

    let squads: Vec<_> = result
        .teams
        .iter()
        .map(|t| (t.squad_id.as_str(), t.player_ids().collect::<Vec<_>>()))
        .collect();
    assert_eq!(vec![("S2", vec!["A", "C"]), ("S1", vec!["B"])], squads);
}

#[test]
fn solo_groups_by_player() {
    let config = common::config(1, 2.0, &[(1, 1, 10.0)]);
    let rows = common::rows(&[("A", "S1", 2, 1), ("B", "S1", 1, 2)]);

    let result = perround::aggregate(1, &rows, &config, Mode::Solo);

    let totals: Vec<_> = result
        .teams
        .iter()
        .map(|t| (t.squad_id.as_str(), t.total_points))
        .collect();
    assert_eq!(vec![("A", 14.0), ("B", 2.0)], totals);
}

#[test]
fn unknown_placement_is_worst() {
    let config = common::config(1, 1.0, &[(1, 1, 10.0), (2, 2, 6.0)]);
    let rows = common::rows(&[("A", "S1", 0, 0), ("B", "S1", 0, 2), ("C", "S2", 1, 0)]);

    let result = perround::aggregate(1, &rows, &config, Mode::Squad);

    assert_eq!(Some(2), result.teams[0].best_placement);
    assert_eq!(6.0, result.teams[0].placement_points);
    assert_eq!(None, result.teams[1].best_placement);
    assert_eq!(0.0, result.teams[1].placement_points);
    assert_eq!(1.0, result.teams[1].total_points);
}

#[test]
fn cap_applies_to_team_kills() {
    let config = RoundConfig {
        kill_cap: 5,
        ..common::config(1, 2.0, &[])
    };
    let rows = common::rows(&[("A", "S1", 3, 1), ("B", "S1", 4, 1), ("C", "S1", 6, 1)]);

    let result = perround::aggregate(1, &rows, &config, Mode::Squad);

    let team = &result.teams[0];
    assert_eq!(13, team.total_kills);
    assert_eq!(10.0, team.kill_points);

    let player_points: Vec<_> = team.players.iter().map(|p| p.kill_points).collect();
    assert_eq!(vec![6.0, 8.0, 10.0], player_points);
}

#[test]
fn team_placement_uses_first_range() {
    let config = common::config(1, 0.0, &[(1, 5, 5.0), (1, 1, 10.0)]);
    let rows = common::rows(&[("A", "S1", 0, 1)]);

    let result = perround::aggregate(1, &rows, &config, Mode::Squad);

    assert_eq!(5.0, result.teams[0].placement_points);
}

#[test]
fn team_scoring_ignores_pacifist() {
    let config = RoundConfig {
        pacifist: true,
        most_kills_bonus: 3.0,
        ..common::config(1, 1.0, &[(1, 1, 10.0)])
    };
    let rows = common::rows(&[("A", "S1", 2, 1)]);

    let result = perround::aggregate(1, &rows, &config, Mode::Squad);

    assert_eq!(12.0, result.teams[0].total_points);
}
