/// Highest placement a lobby can produce, ranges are capped to it unless the
/// config is a plain "Points" table.
pub const MAX_PLACEMENT: u32 = 64;

/// Configs with this name are exempt from the [`MAX_PLACEMENT`] cap.
pub const UNCAPPED_CONFIG_NAME: &str = "Points";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Solo,
    Duo,
    Squad,
}

impl Mode {
    /// The largest squad that can still be considered the same team.
    pub fn max_team_size(&self) -> usize {
        match self {
            Self::Solo => 1,
            Self::Duo => 2,
            Self::Squad => 4,
        }
    }
}

impl core::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Solo => write!(f, "solo"),
            Self::Duo => write!(f, "duo"),
            Self::Squad => write!(f, "squad"),
        }
    }
}

impl core::str::FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solo" => Ok(Self::Solo),
            "duo" => Ok(Self::Duo),
            "squad" => Ok(Self::Squad),
            other => Err(format!("Unknown mode: {:?}", other)),
        }
    }
}

/// An inclusive band of placements worth a fixed amount of points.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlacementRange {
    pub start: u32,
    pub end: u32,
    pub points: f64,
}

impl PlacementRange {
    pub fn new(start: u32, end: u32, points: f64) -> Self {
        Self { start, end, points }
    }

    pub fn contains(&self, placement: u32) -> bool {
        self.start <= placement && placement <= self.end
    }
}

/// The scoring rules of a single round together with its pasted data.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoundConfig {
    pub id: u32,
    pub config_name: String,
    pub points_per_kill: f64,
    /// A value of 0 (or below) disables the cap
    pub kill_cap: i64,
    #[serde(deserialize_with = "pacifist::deserialize")]
    pub pacifist: bool,
    pub most_kills_bonus: f64,
    pub ranges: Vec<PlacementRange>,
    pub raw_text: String,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            id: 1,
            config_name: String::new(),
            points_per_kill: 0.0,
            kill_cap: 0,
            pacifist: false,
            most_kills_bonus: 0.0,
            ranges: vec![PlacementRange::new(1, 1, 0.0)],
            raw_text: String::new(),
        }
    }
}

impl RoundConfig {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    pub fn is_capped(&self) -> bool {
        self.kill_cap > 0
    }

    /// Appends a zero point range directly after the current last one.
    pub fn add_range(&mut self) {
        let next = self.ranges.last().map(|r| r.end + 1).unwrap_or(1);
        self.ranges.push(PlacementRange::new(next, next, 0.0));
    }

    /// Removes the range at `index`, closing the gap it leaves behind.
    ///
    /// The last remaining range can not be removed, returns whether anything
    /// was removed.
    pub fn remove_range(&mut self, index: usize) -> bool {
        if self.ranges.len() <= 1 || index >= self.ranges.len() {
            return false;
        }

        self.ranges.remove(index);

        if index > 0 && index < self.ranges.len() {
            self.ranges[index - 1].end = self.ranges[index].start.saturating_sub(1);
        }

        true
    }

    pub fn set_range_start(&mut self, index: usize, start: u32) {
        if index >= self.ranges.len() {
            return;
        }

        let mut start = if index == 0 { 1 } else { start };
        if index > 0 && start <= self.ranges[index - 1].start {
            start = self.ranges[index - 1].start + 1;
        }
        if index + 1 < self.ranges.len() && start >= self.ranges[index + 1].start {
            start = self.ranges[index + 1].start.saturating_sub(1).max(1);
        }

        let range = &mut self.ranges[index];
        range.start = start;
        if range.start > range.end {
            range.end = range.start;
        }

        self.normalize_ranges();
    }

    /// Only the last range owns its end, every other end follows the start
    /// of its successor.
    pub fn set_range_end(&mut self, index: usize, end: u32) {
        if index >= self.ranges.len() {
            return;
        }

        let last = index + 1 == self.ranges.len();
        let range = &mut self.ranges[index];
        range.end = end;
        if last && range.end < range.start {
            range.end = range.start;
        }

        self.normalize_ranges();
    }

    pub fn set_range_points(&mut self, index: usize, points: f64) {
        if let Some(range) = self.ranges.get_mut(index) {
            range.points = points;
        }
    }

    fn normalize_ranges(&mut self) {
        for i in 0..self.ranges.len().saturating_sub(1) {
            self.ranges[i].end = self.ranges[i + 1].start.saturating_sub(1);
        }

        if self.config_name != UNCAPPED_CONFIG_NAME {
            if let Some(last) = self.ranges.last_mut() {
                last.end = last.end.min(MAX_PLACEMENT);
            }
        }
    }
}

/// The pacifist flag travels as `"yes"`/`"no"` in shared configs, plain
/// booleans are accepted as well.
pub(crate) mod pacifist {
    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    pub fn serialize<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(if *value { "yes" } else { "no" })
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match <Flag as serde::Deserialize>::deserialize(deserializer)? {
            Flag::Bool(v) => Ok(v),
            Flag::Text(t) => match t.as_str() {
                "yes" => Ok(true),
                "no" => Ok(false),
                other => Err(serde::de::Error::custom(format!(
                    "Expected \"yes\" or \"no\", got {:?}",
                    other
                ))),
            },
        }
    }
}
