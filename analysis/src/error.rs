use crate::rows::Field;

/// Raised internally when a round export can not even hold a header and a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    TooFewLines(usize),
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooFewLines(n) => write!(f, "Expected a header and at least one row, got {} lines", n),
        }
    }
}

impl std::error::Error for ParseError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: Field,
    /// 1-based line of the header in the export
    pub line: usize,
}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Missing column {:?} in header on line {}", self.field.header(), self.line)
    }
}

impl std::error::Error for ValidationError {}

/// Per round failure collected during a full scoring pass.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RoundError {
    InvalidFormat { round_id: u32, reason: String },
}

impl RoundError {
    pub fn round_id(&self) -> u32 {
        match self {
            Self::InvalidFormat { round_id, .. } => *round_id,
        }
    }
}

impl core::fmt::Display for RoundError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormat { round_id, .. } => write!(f, "invalid data format in round {}", round_id),
        }
    }
}

impl std::error::Error for RoundError {}

#[derive(Debug)]
pub enum ImportError {
    Base64(base64::DecodeError),
    Utf8(std::string::FromUtf8Error),
    Json(serde_json::Error),
}

impl From<base64::DecodeError> for ImportError {
    fn from(value: base64::DecodeError) -> Self {
        Self::Base64(value)
    }
}

impl From<std::string::FromUtf8Error> for ImportError {
    fn from(value: std::string::FromUtf8Error) -> Self {
        Self::Utf8(value)
    }
}

impl From<serde_json::Error> for ImportError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl core::fmt::Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Base64(e) => write!(f, "Invalid config string: {}", e),
            Self::Utf8(e) => write!(f, "Invalid config string: {}", e),
            Self::Json(e) => write!(f, "Invalid config string: {}", e),
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Base64(e) => Some(e),
            Self::Utf8(e) => Some(e),
            Self::Json(e) => Some(e),
        }
    }
}
