use crate::config::{Mode, RoundConfig};
use crate::rows::PlayerRow;
use crate::scoring;

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlayerDetail {
    pub player_id: String,
    pub name: String,
    pub kills: u32,
    /// Capped kill points, without the pacifist rule or the kill bonus
    pub kill_points: f64,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TeamRoundResult {
    /// The squad id, or the player id when playing solo
    pub squad_id: String,
    pub players: Vec<PlayerDetail>,
    pub total_kills: u32,
    /// `None` if no member had a known placement
    pub best_placement: Option<u32>,
    pub kill_points: f64,
    pub placement_points: f64,
    pub total_points: f64,
}

impl TeamRoundResult {
    pub fn player_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.players.iter().map(|p| p.player_id.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RoundResult {
    pub round_number: u32,
    pub teams: Vec<TeamRoundResult>,
}

/// Groups the rows of one round into teams and scores each team as a whole.
///
/// Team scoring applies the kill cap to the summed kills and only the first
/// placement range matching the best placement of the team.
#[tracing::instrument(skip(rows, config), fields(round = config.id))]
pub fn aggregate(round_number: u32, rows: &[PlayerRow], config: &RoundConfig, mode: Mode) -> RoundResult {
    let groups = crate::rows::group_by(rows, |row| match mode {
        Mode::Solo => row.player_id.as_str(),
        Mode::Duo | Mode::Squad => row.squad_id.as_str(),
    });

    let teams = groups
        .into_iter()
        .map(|(key, members)| {
            let total_kills: u32 = members.iter().map(|r| r.kills).sum();
            let best_placement = members.iter().map(|r| r.placement).filter(|p| *p > 0).min();

            let players = members
                .iter()
                .map(|r| PlayerDetail {
                    player_id: r.player_id.clone(),
                    name: r.name.clone(),
                    kills: r.kills,
                    kill_points: scoring::kill_points(r.kills, config),
                })
                .collect();

            let kill_points = scoring::kill_points(total_kills, config);
            let placement_points = best_placement
                .map(|p| scoring::team_placement_points(p, &config.ranges))
                .unwrap_or(0.0);

            TeamRoundResult {
                squad_id: key.to_owned(),
                players,
                total_kills,
                best_placement,
                kill_points,
                placement_points,
                total_points: kill_points + placement_points,
            }
        })
        .collect();

    RoundResult { round_number, teams }
}
