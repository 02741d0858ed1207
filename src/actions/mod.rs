//! Action catalog
//!
//! The XP-earning rules for each category. Every action is a pure value;
//! completing one yields an [`Outcome`] with the earned XP and a log
//! line. The engine never sees actions, only the XP they produce, so
//! every formula here returns a non-negative amount.

pub mod body;
pub mod disc;
pub mod intel;
pub mod looks;
pub mod mind;

pub use body::{BodyAction, WakeTime};
pub use disc::{CleanChecklist, DiscAction, StopChecklist, TaskChecklist};
pub use intel::IntelAction;
pub use looks::{DailyGrooming, LooksAction, SpecialCare};
pub use mind::{MindAction, RecoveryChecklist};

use crate::stats::Category;

/// A completed real-world activity in one of the five categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Body(BodyAction),
    Looks(LooksAction),
    Mind(MindAction),
    Intel(IntelAction),
    Disc(DiscAction),
}

/// Result of completing an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub category: Category,
    pub xp: u64,
    pub message: String,
}

impl Action {
    /// Category this action trains.
    pub fn category(&self) -> Category {
        match self {
            Action::Body(_) => Category::Body,
            Action::Looks(_) => Category::Looks,
            Action::Mind(_) => Category::Mind,
            Action::Intel(_) => Category::Intel,
            Action::Disc(_) => Category::Disc,
        }
    }

    /// XP earned by this action.
    pub fn xp(&self) -> u64 {
        match self {
            Action::Body(a) => a.xp(),
            Action::Looks(a) => a.xp(),
            Action::Mind(a) => a.xp(),
            Action::Intel(a) => a.xp(),
            Action::Disc(a) => a.xp(),
        }
    }

    /// Short human-readable description.
    pub fn summary(&self) -> String {
        match self {
            Action::Body(a) => a.summary(),
            Action::Looks(a) => a.summary(),
            Action::Mind(a) => a.summary(),
            Action::Intel(a) => a.summary(),
            Action::Disc(a) => a.summary(),
        }
    }

    /// Complete the action, producing the XP delta and a log line.
    pub fn complete(&self) -> Outcome {
        let xp = self.xp();
        Outcome {
            category: self.category(),
            xp,
            message: format!("{} +{} XP", self.summary(), xp),
        }
    }
}
