pub mod report;
pub mod standings;
pub mod tournament_file;

#[derive(Debug)]
pub enum Error {
    Io {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
    Json(serde_json::Error),
    Import(analysis::error::ImportError),
    UnknownRound(u32),
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<analysis::error::ImportError> for Error {
    fn from(value: analysis::error::ImportError) -> Self {
        Self::Import(value)
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "Reading {:?}: {}", path, source),
            Self::Json(e) => write!(f, "Invalid JSON: {}", e),
            Self::Import(e) => write!(f, "{}", e),
            Self::UnknownRound(id) => write!(f, "No round with id {}", id),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json(e) => Some(e),
            Self::Import(e) => Some(e),
            Self::UnknownRound(_) => None,
        }
    }
}
