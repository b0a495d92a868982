//! Infers which squads across rounds are actually the same team.
//!
//! Squad ids are only meaningful inside a single round, so teams are tracked
//! by their members instead. A squad is considered to be an existing team if
//! it still contains every known member of that team and is not larger than
//! the mode allows. Anything else is counted as a new team entirely.

use std::collections::HashMap;

use crate::config::Mode;
use crate::rows::PlayerRow;

/// Index of a team inside the [`TeamResolver`]s arena.
pub type TeamIndex = usize;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Team {
    pub id: u32,
    /// Every player ever merged into the team, in the order they joined
    pub players: Vec<String>,
}

impl Team {
    pub fn contains(&self, player: &str) -> bool {
        self.players.iter().any(|p| p == player)
    }
}

/// The team a squad was resolved to in one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub round: u32,
    pub squad_id: String,
    pub team: TeamIndex,
}

#[derive(Debug)]
pub struct TeamResolver {
    mode: Mode,
    teams: Vec<Team>,
    player_team: HashMap<String, TeamIndex>,
    assignments: Vec<Assignment>,
}

impl TeamResolver {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            teams: Vec::new(),
            player_team: HashMap::new(),
            assignments: Vec::new(),
        }
    }

    /// Resolves every squad of a round, rounds have to be observed in order.
    #[tracing::instrument(skip(self, rows), fields(mode = %self.mode))]
    pub fn observe_round(&mut self, round: u32, rows: &[PlayerRow]) -> Vec<TeamIndex> {
        let squads = crate::rows::group_by(rows, |r| r.squad_id.as_str());

        squads
            .into_iter()
            .map(|(squad_id, members)| {
                let mut candidate: Vec<&str> = Vec::with_capacity(members.len());
                for row in members {
                    if !candidate.contains(&row.player_id.as_str()) {
                        candidate.push(row.player_id.as_str());
                    }
                }

                let team = self.resolve(&candidate);
                tracing::debug!(squad_id, team = self.teams[team].id, "Resolved squad");

                self.assignments.push(Assignment {
                    round,
                    squad_id: squad_id.to_owned(),
                    team,
                });
                team
            })
            .collect()
    }

    fn resolve(&mut self, candidate: &[&str]) -> TeamIndex {
        let max_size = self.mode.max_team_size();

        let matched = self.teams.iter().position(|team| {
            let shared = candidate.iter().filter(|p| team.contains(p)).count();
            shared > 0 && shared == team.players.len() && candidate.len() <= max_size
        });

        let index = match matched {
            Some(index) => {
                let team = &mut self.teams[index];
                for player in candidate {
                    if !team.contains(player) {
                        team.players.push((*player).to_owned());
                    }
                }
                index
            }
            None => {
                self.teams.push(Team {
                    id: self.teams.len() as u32 + 1,
                    players: candidate.iter().map(|p| (*p).to_owned()).collect(),
                });
                tracing::trace!(?candidate, "Formed new team");
                self.teams.len() - 1
            }
        };

        for player in candidate {
            self.player_team.insert((*player).to_owned(), index);
        }

        index
    }

    pub fn team(&self, index: TeamIndex) -> Option<&Team> {
        self.teams.get(index)
    }

    /// The team the player was last resolved into.
    pub fn team_of(&self, player: &str) -> Option<&Team> {
        self.player_team
            .get(player)
            .and_then(|index| self.teams.get(*index))
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn into_teams(self) -> Vec<Team> {
        self.teams
    }
}
