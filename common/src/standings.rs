#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Standings {
    pub mode: String,
    pub rounds: Vec<super::RoundInfo>,
    pub teams: Vec<TeamStanding>,
    pub players: Vec<PlayerStanding>,
    pub round_results: Vec<RoundStanding>,
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TeamStanding {
    pub rank: usize,
    pub team_id: u32,
    pub players: Vec<String>,
    pub kills: u32,
    pub kill_points: f64,
    pub placement_points: f64,
    pub total_points: f64,
    pub rounds: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlayerStanding {
    pub rank: usize,
    pub name: String,
    pub player_id: String,
    pub kills: u32,
    pub kill_points: f64,
    pub placement_points: f64,
    pub bonus_points: f64,
    pub team_points: f64,
    pub total_points: f64,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RoundStanding {
    pub round_number: u32,
    pub teams: Vec<RoundTeam>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RoundTeam {
    pub squad_id: String,
    pub players: Vec<RoundPlayer>,
    pub kills: u32,
    pub placement: Option<u32>,
    pub kill_points: f64,
    pub placement_points: f64,
    pub total_points: f64,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RoundPlayer {
    pub name: String,
    pub player_id: String,
    pub kills: u32,
    pub kill_points: f64,
}
