//! Share strings for round configurations.
//!
//! A share string is the JSON form of [`SharedConfig`] encoded as standard
//! base64, so it survives being pasted around between sessions.

use base64::Engine;

use crate::config::{Mode, PlacementRange, RoundConfig};
use crate::error::ImportError;

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedConfig {
    #[serde(default)]
    pub config_name: String,
    #[serde(default)]
    pub mode: Mode,
    #[serde(default)]
    pub points_per_kill: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kill_cap: Option<i64>,
    pub ranges: Vec<PlacementRange>,
    #[serde(
        default,
        serialize_with = "crate::config::pacifist::serialize",
        deserialize_with = "crate::config::pacifist::deserialize"
    )]
    pub pacifist: bool,
    #[serde(default)]
    pub most_kills_bonus: f64,
}

impl SharedConfig {
    pub fn new(config: &RoundConfig, mode: Mode) -> Self {
        Self {
            config_name: config.config_name.clone(),
            mode,
            points_per_kill: config.points_per_kill,
            kill_cap: config.is_capped().then_some(config.kill_cap),
            ranges: config.ranges.clone(),
            pacifist: config.pacifist,
            most_kills_bonus: config.most_kills_bonus,
        }
    }

    /// Replaces the rules of `config`, its id and data are left alone.
    pub fn apply(self, config: &mut RoundConfig) -> Mode {
        config.config_name = self.config_name;
        config.points_per_kill = self.points_per_kill;
        config.kill_cap = self.kill_cap.unwrap_or(0);
        config.ranges = self.ranges;
        config.pacifist = self.pacifist;
        config.most_kills_bonus = self.most_kills_bonus;

        self.mode
    }

    pub fn encode(&self) -> Result<String, serde_json::Error> {
        let json = serde_json::to_string(self)?;
        Ok(base64::engine::general_purpose::STANDARD.encode(json))
    }

    pub fn decode(input: &str) -> Result<Self, ImportError> {
        let bytes = base64::engine::general_purpose::STANDARD.decode(input.trim())?;
        let json = String::from_utf8(bytes)?;
        Ok(serde_json::from_str(&json)?)
    }
}

pub fn export(config: &RoundConfig, mode: Mode) -> Result<String, serde_json::Error> {
    SharedConfig::new(config, mode).encode()
}

impl RoundConfig {
    /// Loads the rules from a share string.
    ///
    /// On error the config stays exactly as it was. On success the mode the
    /// config was shared with is returned, since the mode is not part of a
    /// single round.
    pub fn import(&mut self, input: &str) -> Result<Mode, ImportError> {
        let shared = SharedConfig::decode(input).map_err(|e| {
            tracing::warn!(round = self.id, "Rejected config import: {}", e);
            e
        })?;

        Ok(shared.apply(self))
    }
}
