//! The on-disk description of a tournament.
//!
//! ```json
//! {
//!   "mode": "squad",
//!   "rounds": [
//!     { "id": 1, "configName": "Finals", "pointsPerKill": 1, "ranges": [...], "dataFile": "round1.tsv" }
//!   ]
//! }
//! ```
//!
//! A round either carries its export inline as `rawText` or points to it with
//! `dataFile`, which is resolved relative to the tournament file.

use std::path::{Path, PathBuf};

use analysis::{Mode, RoundConfig};

use crate::Error;

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundEntry {
    #[serde(flatten)]
    pub config: RoundConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TournamentFile {
    #[serde(default)]
    pub mode: Mode,
    pub rounds: Vec<RoundEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tournament {
    pub mode: Mode,
    pub rounds: Vec<RoundConfig>,
}

impl Tournament {
    pub fn round(&self, id: u32) -> Result<&RoundConfig, Error> {
        self.rounds
            .iter()
            .find(|r| r.id == id)
            .ok_or(Error::UnknownRound(id))
    }
}

fn read(path: &Path) -> Result<String, Error> {
    std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_owned(),
        source,
    })
}

#[tracing::instrument]
pub fn load(path: &Path) -> Result<Tournament, Error> {
    let content = read(path)?;
    let file: TournamentFile = serde_json::from_str(&content)?;

    let base = path.parent().unwrap_or(Path::new("."));

    let rounds = file
        .rounds
        .into_iter()
        .map(|entry| {
            let mut config = entry.config;
            if let Some(data_file) = entry.data_file {
                tracing::debug!("Loading round {} from {:?}", config.id, data_file);
                config.raw_text = read(&base.join(data_file))?;
            }
            Ok(config)
        })
        .collect::<Result<Vec<_>, Error>>()?;

    Ok(Tournament {
        mode: file.mode,
        rounds,
    })
}
