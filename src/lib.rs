pub mod archive;
pub mod card;
pub mod compose;
pub mod config;
pub mod error;
pub mod formation;
pub mod geometry;
pub mod model;
pub mod output;
pub mod stats;
pub mod storage;

pub use error::{EngineError, Resolution};
