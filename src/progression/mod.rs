//! Progression engine
//!
//! The leveling formula and the title classification cascade. Both are
//! pure functions over the stat/level vectors; nothing in here touches
//! I/O or caller state.

pub mod level;
pub mod titles;

pub use level::{level, LEVEL_CAP};
pub use titles::{classify, Title, RANK_A, RANK_B, RANK_S};
