#![allow(dead_code)]

use analysis::rows::PlayerRow;
use analysis::{PlacementRange, RoundConfig};

pub const HEADER: &str = "pID\tPlayer\tPlayfabID\tSquadID\tTeamID\tKills\tPlacement";

/// `(player id, squad id, kills, placement)`, names are derived from the id.
pub type Entry<'a> = (&'a str, &'a str, u32, u32);

pub fn row(player_id: &str, squad_id: &str, kills: u32, placement: u32) -> PlayerRow {
    PlayerRow {
        row_id: String::new(),
        player_id: player_id.to_owned(),
        squad_id: squad_id.to_owned(),
        team_id: String::new(),
        name: format!("Player {}", player_id),
        kills,
        placement,
    }
}

pub fn rows(entries: &[Entry<'_>]) -> Vec<PlayerRow> {
    entries
        .iter()
        .map(|(id, squad, kills, placement)| row(id, squad, *kills, *placement))
        .collect()
}

pub fn export(entries: &[Entry<'_>]) -> String {
    let mut text = String::from(HEADER);
    for (i, (id, squad, kills, placement)) in entries.iter().enumerate() {
        text.push_str(&format!(
            "\n{}\tPlayer {}\t{}\t{}\t{}\t{}\t{}",
            i + 1,
            id,
            id,
            squad,
            squad,
            kills,
            placement
        ));
    }
    text
}

pub fn config(id: u32, points_per_kill: f64, ranges: &[(u32, u32, f64)]) -> RoundConfig {
    RoundConfig {
        id,
        points_per_kill,
        ranges: ranges
            .iter()
            .map(|(start, end, points)| PlacementRange::new(*start, *end, *points))
            .collect(),
        ..RoundConfig::new(id)
    }
}

pub fn round(id: u32, points_per_kill: f64, ranges: &[(u32, u32, f64)], entries: &[Entry<'_>]) -> RoundConfig {
    RoundConfig {
        raw_text: export(entries),
        ..config(id, points_per_kill, ranges)
    }
}

pub fn testfile(name: &str) -> String {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../testfiles/")
        .join(name);
    std::fs::read_to_string(path).unwrap()
}
