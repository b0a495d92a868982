use crate::config::{PlacementRange, RoundConfig};
use crate::rows::PlayerRow;

#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RowPoints {
    pub kill_points: f64,
    pub placement_points: f64,
}

/// A row together with the points it earned under its round's rules.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScoredRow {
    pub row: PlayerRow,
    pub kill_points: f64,
    pub placement_points: f64,
    pub bonus_points: f64,
}

impl ScoredRow {
    pub fn total(&self) -> f64 {
        self.kill_points + self.placement_points + self.bonus_points
    }
}

/// Kills above a positive cap are not rewarded.
pub fn kill_points(kills: u32, config: &RoundConfig) -> f64 {
    let counted = if config.is_capped() {
        (kills as i64).min(config.kill_cap)
    } else {
        kills as i64
    };

    counted as f64 * config.points_per_kill
}

/// Every range containing the placement contributes.
pub fn placement_points(placement: u32, ranges: &[PlacementRange]) -> f64 {
    ranges
        .iter()
        .filter(|r| r.contains(placement))
        .map(|r| r.points)
        .sum()
}

/// Only the first range containing the placement counts.
pub fn team_placement_points(placement: u32, ranges: &[PlacementRange]) -> f64 {
    ranges
        .iter()
        .find(|r| r.contains(placement))
        .map(|r| r.points)
        .unwrap_or(0.0)
}

/// Points of a single row, ignoring the round wide pacifist and bonus rules.
pub fn score_row(row: &PlayerRow, config: &RoundConfig) -> RowPoints {
    RowPoints {
        kill_points: kill_points(row.kills, config),
        placement_points: placement_points(row.placement, &config.ranges),
    }
}

/// Scores all rows of a round, applying the pacifist rule and the most
/// kills bonus.
#[tracing::instrument(skip(rows, config), fields(round = config.id, rows = rows.len()))]
pub fn score_round(rows: &[PlayerRow], config: &RoundConfig) -> Vec<ScoredRow> {
    let max_kills = rows.iter().map(|r| r.kills).max();

    rows.iter()
        .map(|row| {
            let mut points = score_row(row, config);
            if config.pacifist && row.kills > 0 {
                points = RowPoints::default();
            }

            let bonus_points = if !config.pacifist && Some(row.kills) == max_kills {
                config.most_kills_bonus
            } else {
                0.0
            };

            ScoredRow {
                row: row.clone(),
                kill_points: points.kill_points,
                placement_points: points.placement_points,
                bonus_points,
            }
        })
        .collect()
}
