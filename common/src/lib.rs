pub mod standings;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RoundInfo {
    pub id: u32,
    pub number: u32,
    pub config_name: String,
}
