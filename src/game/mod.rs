//! Game flow on top of the rules engine

pub mod controller;
pub mod record;

pub use controller::GameController;
pub use record::{GameRecord, Ply};
