//! Kaizen - A terminal self-improvement RPG tracker
//!
//! Log real-world activities across five stat categories, accumulate
//! XP, and watch your derived levels and narrative title climb.

pub mod actions;
pub mod progression;
pub mod save;
pub mod stats;
pub mod ui;

// Re-export commonly used types
pub use progression::{classify, level, Title, LEVEL_CAP, RANK_A, RANK_B, RANK_S};
pub use stats::{Category, LevelVector, StatVector};
