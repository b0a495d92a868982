use analysis::tournament::TournamentResult;
use common::standings::{
    PlayerStanding, RoundPlayer, RoundStanding, RoundTeam, Standings, TeamStanding,
};

use crate::tournament_file::Tournament;

/// Flattens a scoring pass into the shape the report and JSON output use.
pub fn from_result(tournament: &Tournament, result: &TournamentResult) -> Standings {
    let rounds = tournament
        .rounds
        .iter()
        .enumerate()
        .map(|(i, r)| common::RoundInfo {
            id: r.id,
            number: i as u32 + 1,
            config_name: r.config_name.clone(),
        })
        .collect();

    let teams = result
        .team_totals
        .iter()
        .enumerate()
        .map(|(i, team)| TeamStanding {
            rank: i + 1,
            team_id: team.team_id,
            players: team.players.iter().map(|p| p.name.clone()).collect(),
            kills: team.total_kills,
            kill_points: team.total_kill_points,
            placement_points: team.total_placement_points,
            total_points: team.total_points,
            rounds: team.rounds.clone(),
        })
        .collect();

    let mut players: Vec<_> = result.player_totals.iter().collect();
    players.sort_by(|a, b| b.total().total_cmp(&a.total()));
    let players = players
        .into_iter()
        .enumerate()
        .map(|(i, p)| PlayerStanding {
            rank: i + 1,
            name: p.player_name.clone(),
            player_id: p.player_id.clone(),
            kills: p.kills,
            kill_points: p.kill_points,
            placement_points: p.placement_points,
            bonus_points: p.bonus_points,
            team_points: p.team_points,
            total_points: p.total(),
        })
        .collect();

    let round_results = result
        .round_results
        .iter()
        .map(|round| RoundStanding {
            round_number: round.round_number,
            teams: round
                .teams
                .iter()
                .map(|team| RoundTeam {
                    squad_id: team.squad_id.clone(),
                    players: team
                        .players
                        .iter()
                        .map(|p| RoundPlayer {
                            name: p.name.clone(),
                            player_id: p.player_id.clone(),
                            kills: p.kills,
                            kill_points: p.kill_points,
                        })
                        .collect(),
                    kills: team.total_kills,
                    placement: team.best_placement,
                    kill_points: team.kill_points,
                    placement_points: team.placement_points,
                    total_points: team.total_points,
                })
                .collect(),
        })
        .collect();

    Standings {
        mode: tournament.mode.to_string(),
        rounds,
        teams,
        players,
        round_results,
        errors: result.errors.iter().map(|e| e.to_string()).collect(),
    }
}
