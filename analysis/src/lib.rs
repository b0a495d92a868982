pub mod config;
pub mod error;
pub mod exchange;
pub mod perround;
pub mod players;
pub mod rows;
pub mod scoring;
pub mod standings;
pub mod teams;
pub mod tournament;

pub use config::{Mode, PlacementRange, RoundConfig};
pub use tournament::{compute, TournamentResult};
