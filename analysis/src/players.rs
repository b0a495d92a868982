use std::collections::HashMap;

use crate::perround::RoundResult;
use crate::scoring::ScoredRow;

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlayerTotal {
    pub player_id: String,
    /// The name the player had the first time they showed up
    pub player_name: String,
    pub kills: u32,
    pub kill_points: f64,
    pub placement_points: f64,
    pub bonus_points: f64,
    /// Informational, not part of [`PlayerTotal::total`]
    pub team_points: f64,
}

impl PlayerTotal {
    fn new(player_id: &str, player_name: &str) -> Self {
        Self {
            player_id: player_id.to_owned(),
            player_name: player_name.to_owned(),
            kills: 0,
            kill_points: 0.0,
            placement_points: 0.0,
            bonus_points: 0.0,
            team_points: 0.0,
        }
    }

    pub fn total(&self) -> f64 {
        self.kill_points + self.placement_points + self.bonus_points
    }
}

/// Player totals in the order the players first appeared.
#[derive(Debug, Default)]
pub struct PlayerTotals {
    totals: Vec<PlayerTotal>,
    index: HashMap<String, usize>,
}

impl PlayerTotals {
    pub fn new() -> Self {
        Self::default()
    }

    fn entry(&mut self, player_id: &str, player_name: &str) -> &mut PlayerTotal {
        let position = match self.index.get(player_id) {
            Some(p) => *p,
            None => {
                self.totals.push(PlayerTotal::new(player_id, player_name));
                self.index.insert(player_id.to_owned(), self.totals.len() - 1);
                self.totals.len() - 1
            }
        };

        &mut self.totals[position]
    }

    pub fn add_round(&mut self, rows: &[ScoredRow]) {
        for scored in rows {
            let total = self.entry(&scored.row.player_id, &scored.row.name);
            total.kills += scored.row.kills;
            total.kill_points += scored.kill_points;
            total.placement_points += scored.placement_points;
            total.bonus_points += scored.bonus_points;
        }
    }

    /// Splits every team's round points evenly between its players.
    pub fn add_team_points(&mut self, round: &RoundResult) {
        for team in round.teams.iter() {
            if team.players.is_empty() {
                continue;
            }

            let share = team.total_points / team.players.len() as f64;
            for player in team.players.iter() {
                self.entry(&player.player_id, &player.name).team_points += share;
            }
        }
    }

    pub fn get(&self, player_id: &str) -> Option<&PlayerTotal> {
        self.index.get(player_id).map(|i| &self.totals[*i])
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlayerTotal> {
        self.totals.iter()
    }

    pub fn into_vec(self) -> Vec<PlayerTotal> {
        self.totals
    }
}
