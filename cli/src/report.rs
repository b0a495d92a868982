use common::standings::Standings;

fn points(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value)
    } else {
        format!("{:.2}", value)
    }
}

fn placement(value: Option<u32>) -> String {
    value.map(|p| p.to_string()).unwrap_or_else(|| "-".to_owned())
}

/// Renders the standings as plain text tables.
pub fn generate(standings: &Standings, with_rounds: bool) -> String {
    let mut report = String::new();

    report.push_str(&format!(
        "=== Tournament ({}, {} rounds) ===\n\n",
        standings.mode,
        standings.rounds.len()
    ));

    report.push_str("Teams:\n");
    report.push_str(&format!(
        "{:<5} {:<40} {:>6} {:>10} {:>10} {:>8}  {}\n",
        "#", "Players", "Kills", "Kill Pts", "Place Pts", "Total", "Rounds"
    ));
    report.push_str(&"-".repeat(96));
    report.push('\n');
    for team in standings.teams.iter() {
        let rounds = team
            .rounds
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join(",");
        report.push_str(&format!(
            "{:<5} {:<40} {:>6} {:>10} {:>10} {:>8}  {}\n",
            team.rank,
            team.players.join(", "),
            team.kills,
            points(team.kill_points),
            points(team.placement_points),
            points(team.total_points),
            rounds
        ));
    }
    report.push('\n');

    report.push_str("Players:\n");
    report.push_str(&format!(
        "{:<5} {:<24} {:<20} {:>6} {:>10} {:>10} {:>7} {:>9} {:>8}\n",
        "#", "Player", "ID", "Kills", "Kill Pts", "Place Pts", "Bonus", "Team Pts", "Total"
    ));
    report.push_str(&"-".repeat(107));
    report.push('\n');
    for player in standings.players.iter() {
        report.push_str(&format!(
            "{:<5} {:<24} {:<20} {:>6} {:>10} {:>10} {:>7} {:>9} {:>8}\n",
            player.rank,
            player.name,
            player.player_id,
            player.kills,
            points(player.kill_points),
            points(player.placement_points),
            points(player.bonus_points),
            points(player.team_points),
            points(player.total_points)
        ));
    }

    if with_rounds {
        for round in standings.round_results.iter() {
            report.push_str(&format!("\nRound {}:\n", round.round_number));
            for team in round.teams.iter() {
                let players = team
                    .players
                    .iter()
                    .map(|p| format!("{} ({})", p.name, p.kills))
                    .collect::<Vec<_>>()
                    .join(", ");
                report.push_str(&format!(
                    "  {:<12} place {:>3}  kills {:>3}  {:>6} + {:>6} = {:>6}  {}\n",
                    team.squad_id,
                    placement(team.placement),
                    team.kills,
                    points(team.kill_points),
                    points(team.placement_points),
                    points(team.total_points),
                    players
                ));
            }
        }
    }

    if !standings.errors.is_empty() {
        report.push_str("\nErrors:\n");
        for error in standings.errors.iter() {
            report.push_str(&format!("  {}\n", error));
        }
    }

    report
}
