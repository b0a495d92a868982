use analysis::perround;
use analysis::players::PlayerTotals;
use analysis::scoring;
use analysis::{Mode, RoundConfig};
use pretty_assertions::assert_eq;

mod common;

#[test]
fn accumulates_rounds() {
    let config = RoundConfig {
        most_kills_bonus: 5.0,
        ..common::config(1, 1.0, &[(1, 1, 10.0), (2, 5, 5.0)])
    };
    let pacifist = RoundConfig {
        pacifist: true,
        ..config.clone()
    };

    let mut totals = PlayerTotals::new();
    totals.add_round(&scoring::score_round(
        &common::rows(&[("A", "S1", 3, 1), ("B", "S1", 3, 2)]),
        &config,
    ));
    totals.add_round(&scoring::score_round(
        &common::rows(&[("A", "S1", 2, 1), ("B", "S1", 0, 1)]),
        &pacifist,
    ));

    let a = totals.get("A").unwrap();
    assert_eq!(5, a.kills);
    assert_eq!(3.0, a.kill_points);
    assert_eq!(10.0, a.placement_points);
    assert_eq!(5.0, a.bonus_points);
    assert_eq!(18.0, a.total());

    let b = totals.get("B").unwrap();
    assert_eq!(3, b.kills);
    assert_eq!(15.0, b.placement_points);
    assert_eq!(23.0, b.total());
}

#[test]
fn first_name_sticks() {
    let config = common::config(1, 1.0, &[]);
    let mut renamed = common::row("A", "S1", 0, 1);
    renamed.name = "Someone else".to_owned();

    let mut totals = PlayerTotals::new();
    totals.add_round(&scoring::score_round(&[common::row("A", "S1", 0, 1)], &config));
    totals.add_round(&scoring::score_round(&[renamed], &config));

    assert_eq!("Player A", totals.get("A").unwrap().player_name);
}

#[test]
fn team_points_are_shared() {
    let config = common::config(1, 1.0, &[(1, 1, 10.0)]);
    let rows = common::rows(&[("A", "S1", 3, 1), ("B", "S1", 1, 3), ("C", "S2", 1, 2)]);

    let mut totals = PlayerTotals::new();
    totals.add_round(&scoring::score_round(&rows, &config));
    totals.add_team_points(&perround::aggregate(1, &rows, &config, Mode::Duo));

    let team_points: Vec<_> = totals.iter().map(|p| (p.player_id.as_str(), p.team_points)).collect();
    assert_eq!(vec![("A", 7.0), ("B", 7.0), ("C", 1.0)], team_points);

    // Team points are not part of the player total
    assert_eq!(13.0, totals.get("A").unwrap().total());
}

#[test]
fn first_appearance_order() {
    let config = common::config(1, 1.0, &[]);

    let mut totals = PlayerTotals::new();
    totals.add_round(&scoring::score_round(&common::rows(&[("C", "1", 0, 1), ("A", "2", 0, 2)]), &config));
    totals.add_round(&scoring::score_round(&common::rows(&[("B", "1", 0, 1), ("C", "2", 0, 2)]), &config));

    let order: Vec<_> = totals.into_vec().into_iter().map(|p| p.player_id).collect();
    assert_eq!(vec!["C", "A", "B"], order);
}
