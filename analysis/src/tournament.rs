use crate::config::{Mode, RoundConfig};
use crate::error::RoundError;
use crate::perround::RoundResult;
use crate::players::{PlayerTotal, PlayerTotals};
use crate::standings::TeamTotal;
use crate::teams::{Team, TeamResolver};

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TournamentResult {
    /// In the order the players first appeared
    pub player_totals: Vec<PlayerTotal>,
    pub round_results: Vec<RoundResult>,
    pub teams: Vec<Team>,
    /// Sorted by points, best first
    pub team_totals: Vec<TeamTotal>,
    pub errors: Vec<RoundError>,
}

impl TournamentResult {
    pub fn player(&self, player_id: &str) -> Option<&PlayerTotal> {
        self.player_totals.iter().find(|p| p.player_id == player_id)
    }

    pub fn round(&self, round_number: u32) -> Option<&RoundResult> {
        self.round_results
            .iter()
            .find(|r| r.round_number == round_number)
    }
}

/// Runs a full scoring pass over all rounds.
///
/// Rounds are numbered by their position, starting at 1. A round that fails
/// validation is reported in [`TournamentResult::errors`] and left out of
/// every total, the remaining rounds are still scored.
#[tracing::instrument(skip(rounds), fields(rounds = rounds.len()))]
pub fn compute(mode: Mode, rounds: &[RoundConfig]) -> TournamentResult {
    let mut resolver = TeamResolver::new(mode);
    let mut players = PlayerTotals::new();
    let mut round_results = Vec::with_capacity(rounds.len());
    let mut errors = Vec::new();

    for (position, config) in rounds.iter().enumerate() {
        let round_number = position as u32 + 1;
        let _guard = tracing::debug_span!("Round", round_number, id = config.id).entered();

        let rows = match crate::rows::parse_validated(&config.raw_text) {
            Ok(rows) => rows,
            Err(e) => {
                tracing::warn!("Skipping round {}: {}", config.id, e);
                errors.push(RoundError::InvalidFormat {
                    round_id: config.id,
                    reason: e.to_string(),
                });
                continue;
            }
        };
        tracing::debug!("Parsed {} rows", rows.len());

        let scored = crate::scoring::score_round(&rows, config);
        players.add_round(&scored);

        resolver.observe_round(round_number, &rows);

        let result = crate::perround::aggregate(round_number, &rows, config, mode);
        players.add_team_points(&result);
        round_results.push(result);
    }

    let team_totals = crate::standings::aggregate(&round_results);

    tracing::info!(
        players = players.len(),
        teams = team_totals.len(),
        errors = errors.len(),
        "Scored tournament"
    );

    TournamentResult {
        player_totals: players.into_vec(),
        round_results,
        teams: resolver.into_teams(),
        team_totals,
        errors,
    }
}
