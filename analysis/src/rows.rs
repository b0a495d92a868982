use crate::error::{ParseError, ValidationError};

/// The columns of a round export the scoring relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    RowId,
    Player,
    PlayerId,
    SquadId,
    TeamId,
    Kills,
    Placement,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::RowId,
        Field::Player,
        Field::PlayerId,
        Field::SquadId,
        Field::TeamId,
        Field::Kills,
        Field::Placement,
    ];

    pub fn header(&self) -> &'static str {
        match self {
            Self::RowId => "pID",
            Self::Player => "Player",
            Self::PlayerId => "PlayfabID",
            Self::SquadId => "SquadID",
            Self::TeamId => "TeamID",
            Self::Kills => "Kills",
            Self::Placement => "Placement",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

pub static HEADERS: phf::Map<&'static str, Field> = phf::phf_map! {
    "pID" => Field::RowId,
    "Player" => Field::Player,
    "PlayfabID" => Field::PlayerId,
    "SquadID" => Field::SquadId,
    "TeamID" => Field::TeamId,
    "Kills" => Field::Kills,
    "Placement" => Field::Placement,
};

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlayerRow {
    pub row_id: String,
    pub player_id: String,
    pub squad_id: String,
    pub team_id: String,
    pub name: String,
    pub kills: u32,
    /// 0 means the placement is unknown
    pub placement: u32,
}

#[derive(Debug)]
struct RawRow<'t> {
    values: [Option<&'t str>; 7],
}

impl<'t> RawRow<'t> {
    fn get(&self, field: Field) -> Option<&'t str> {
        self.values[field.index()]
    }

    fn has_player_id(&self) -> bool {
        self.get(Field::PlayerId)
            .map(|id| !id.trim().is_empty())
            .unwrap_or(false)
    }

    fn into_row(self) -> PlayerRow {
        let text = |field| self.get(field).unwrap_or("").to_owned();

        PlayerRow {
            row_id: text(Field::RowId),
            player_id: text(Field::PlayerId),
            squad_id: text(Field::SquadId),
            team_id: text(Field::TeamId),
            name: text(Field::Player),
            kills: self.get(Field::Kills).map(parse_count).unwrap_or(0),
            placement: self.get(Field::Placement).map(parse_count).unwrap_or(0),
        }
    }
}

struct Export<'t> {
    header_line: usize,
    columns: Vec<Option<Field>>,
    rows: Vec<RawRow<'t>>,
}

impl Export<'_> {
    fn has_column(&self, field: Field) -> bool {
        self.columns.contains(&Some(field))
    }
}

fn split(text: &str) -> Result<Export<'_>, ParseError> {
    let lines: Vec<(usize, &str)> = text
        .lines()
        .enumerate()
        .skip_while(|(_, l)| l.trim().is_empty())
        .map(|(i, l)| (i + 1, l))
        .collect();
    let used = lines
        .iter()
        .rposition(|(_, l)| !l.trim().is_empty())
        .map(|p| p + 1)
        .unwrap_or(0);
    let lines = &lines[..used];

    if lines.len() < 2 {
        return Err(ParseError::TooFewLines(lines.len()));
    }

    let (header_line, header) = lines[0];
    let columns: Vec<Option<Field>> = header
        .trim_start()
        .split('\t')
        .map(|header| HEADERS.get(header).copied())
        .collect();

    let rows = lines[1..]
        .iter()
        .map(|(_, content)| {
            let mut values = [None; 7];
            for (column, value) in columns.iter().zip(content.split('\t')) {
                if let Some(field) = column {
                    values[field.index()] = Some(value);
                }
            }

            RawRow { values }
        })
        .filter(|row| row.has_player_id())
        .collect();

    Ok(Export {
        header_line,
        columns,
        rows,
    })
}

/// Leading digits only, anything unparsable counts as 0.
fn parse_count(value: &str) -> u32 {
    let value = value.trim();
    let value = value.strip_prefix('+').unwrap_or(value);
    let end = value
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(value.len());

    value[..end].parse().unwrap_or(0)
}

/// Lenient parse of a round export.
///
/// Missing values fall back to empty strings and 0, rows without a player id
/// are dropped and input without any data row yields no rows.
pub fn parse(text: &str) -> Vec<PlayerRow> {
    match split(text) {
        Ok(export) => export.rows.into_iter().map(RawRow::into_row).collect(),
        Err(e) => {
            tracing::trace!("Round export without rows: {}", e);
            Vec::new()
        }
    }
}

/// Like [`parse`] but the header has to name every one of the [`Field`]s.
///
/// Rows cut short are still accepted, their missing values count as absent.
pub fn parse_validated(text: &str) -> Result<Vec<PlayerRow>, ValidationError> {
    let export = match split(text) {
        Ok(export) => export,
        Err(e) => {
            tracing::trace!("Round export without rows: {}", e);
            return Ok(Vec::new());
        }
    };

    if let Some(field) = Field::ALL.into_iter().find(|f| !export.has_column(*f)) {
        return Err(ValidationError {
            field,
            line: export.header_line,
        });
    }

    Ok(export.rows.into_iter().map(RawRow::into_row).collect())
}

/// Groups rows by the given key, keeping groups and their members in the
/// order they first appear.
pub(crate) fn group_by<'r, F>(rows: &'r [PlayerRow], key: F) -> Vec<(&'r str, Vec<&'r PlayerRow>)>
where
    F: Fn(&'r PlayerRow) -> &'r str,
{
    let mut index = std::collections::HashMap::<&str, usize>::new();
    let mut groups: Vec<(&str, Vec<&PlayerRow>)> = Vec::new();

    for row in rows {
        let k = key(row);
        let position = *index.entry(k).or_insert_with(|| {
            groups.push((k, Vec::new()));
            groups.len() - 1
        });
        groups[position].1.push(row);
    }

    groups
}
