use crate::perround::{RoundResult, TeamRoundResult};

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TeamMember {
    pub player_id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TeamTotal {
    pub team_id: u32,
    pub players: Vec<TeamMember>,
    pub total_kills: u32,
    pub total_kill_points: f64,
    pub total_placement_points: f64,
    pub total_points: f64,
    /// Round numbers the team took part in, in the order they were played
    pub rounds: Vec<u32>,
}

impl TeamTotal {
    fn new(team_id: u32, round_number: u32, result: &TeamRoundResult) -> Self {
        let mut total = Self {
            team_id,
            players: Vec::new(),
            total_kills: 0,
            total_kill_points: 0.0,
            total_placement_points: 0.0,
            total_points: 0.0,
            rounds: Vec::new(),
        };
        total.add(round_number, result);
        total
    }

    pub fn contains(&self, player: &str) -> bool {
        self.players.iter().any(|p| p.player_id == player)
    }

    fn add(&mut self, round_number: u32, result: &TeamRoundResult) {
        self.total_points += result.total_points;
        self.total_kills += result.total_kills;
        self.total_placement_points += result.placement_points;
        self.total_kill_points += result.kill_points;
        self.rounds.push(round_number);

        for player in result.players.iter() {
            if !self.contains(&player.player_id) {
                self.players.push(TeamMember {
                    player_id: player.player_id.clone(),
                    name: player.name.clone(),
                });
            }
        }
    }
}

/// Why a round roster was attributed to an existing team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum MatchCase {
    /// Same players as before
    Exact,
    /// Only some of the known players are left
    PlayersLeft,
    /// All known players plus new ones that belong to no other team
    PlayersJoined,
}

struct Candidate<'a> {
    roster: &'a [&'a str],
    existing: usize,
    totals: &'a [TeamTotal],
}

impl Candidate<'_> {
    fn team(&self) -> &TeamTotal {
        &self.totals[self.existing]
    }

    fn shared(&self) -> usize {
        self.roster.iter().filter(|p| self.team().contains(p)).count()
    }
}

type Rule = fn(&Candidate<'_>) -> bool;

/// Checked in order, the first rule that holds decides.
const RULES: [(MatchCase, Rule); 3] = [
    (MatchCase::Exact, |c| {
        let shared = c.shared();
        shared == c.team().players.len() && shared == c.roster.len()
    }),
    (MatchCase::PlayersLeft, |c| c.shared() == c.roster.len()),
    (MatchCase::PlayersJoined, |c| {
        if c.shared() != c.team().players.len() {
            return false;
        }

        let mut joined = c.roster.iter().filter(|p| !c.team().contains(p)).peekable();
        if joined.peek().is_none() {
            return false;
        }

        !joined.any(|p| {
            c.totals
                .iter()
                .enumerate()
                .any(|(i, other)| i != c.existing && other.contains(p))
        })
    }),
];

/// Finds the first existing team, in creation order, the roster belongs to.
pub fn match_team(roster: &[&str], totals: &[TeamTotal]) -> Option<(usize, MatchCase)> {
    (0..totals.len()).find_map(|existing| {
        let candidate = Candidate {
            roster,
            existing,
            totals,
        };

        RULES
            .iter()
            .find(|(_, rule)| rule(&candidate))
            .map(|(case, _)| (existing, *case))
    })
}

/// Merges the per round results into tournament totals, best team first.
#[tracing::instrument(skip(rounds), fields(rounds = rounds.len()))]
pub fn aggregate(rounds: &[RoundResult]) -> Vec<TeamTotal> {
    let mut totals: Vec<TeamTotal> = Vec::new();

    for round in rounds {
        for result in round.teams.iter() {
            let roster: Vec<&str> = result.player_ids().collect();

            match match_team(&roster, &totals) {
                Some((index, case)) => {
                    tracing::debug!(
                        round = round.round_number,
                        squad = %result.squad_id,
                        team = totals[index].team_id,
                        ?case,
                        "Matched existing team"
                    );
                    totals[index].add(round.round_number, result);
                }
                None => {
                    let team_id = totals.len() as u32 + 1;
                    tracing::debug!(
                        round = round.round_number,
                        squad = %result.squad_id,
                        team = team_id,
                        "New team"
                    );
                    totals.push(TeamTotal::new(team_id, round.round_number, result));
                }
            };
        }
    }

    totals.sort_by(|a, b| b.total_points.total_cmp(&a.total_points));
    totals
}
