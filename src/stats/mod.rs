//! Stat categories and the persisted XP vector
//!
//! The five categories are a closed set; every vector type in the crate
//! carries all five, always in the same order.

use serde::{Deserialize, Serialize};

use crate::progression::level;

/// The five trainable stat categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Body,
    Looks,
    Mind,
    Intel,
    Disc,
}

impl Category {
    /// Fixed evaluation order. Tie-breaks and iteration everywhere in the
    /// engine follow this order.
    pub const ALL: [Category; 5] = [
        Category::Body,
        Category::Looks,
        Category::Mind,
        Category::Intel,
        Category::Disc,
    ];

    /// Canonical key string, used for sorting combination lookups.
    pub fn key(&self) -> &'static str {
        match self {
            Category::Body => "body",
            Category::Looks => "looks",
            Category::Mind => "mind",
            Category::Intel => "intel",
            Category::Disc => "disc",
        }
    }

    /// Display label for the UI.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Body => "BODY",
            Category::Looks => "LOOKS",
            Category::Mind => "MIND",
            Category::Intel => "INTEL",
            Category::Disc => "DISC",
        }
    }
}

/// Accumulated XP per category. The only persisted quantity.
///
/// XP is unsigned; the only mutations are adding a non-negative delta to
/// one category and a full reset to zero. A missing field in persisted
/// data deserializes as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatVector {
    pub body: u64,
    pub looks: u64,
    pub mind: u64,
    pub intel: u64,
    pub disc: u64,
}

impl StatVector {
    /// XP for a single category.
    pub fn get(&self, category: Category) -> u64 {
        match category {
            Category::Body => self.body,
            Category::Looks => self.looks,
            Category::Mind => self.mind,
            Category::Intel => self.intel,
            Category::Disc => self.disc,
        }
    }

    /// Add earned XP to one category. Saturates rather than wraps.
    pub fn add(&mut self, category: Category, xp: u64) {
        let slot = match category {
            Category::Body => &mut self.body,
            Category::Looks => &mut self.looks,
            Category::Mind => &mut self.mind,
            Category::Intel => &mut self.intel,
            Category::Disc => &mut self.disc,
        };
        *slot = slot.saturating_add(xp);
    }

    /// Reset every category to zero.
    pub fn reset(&mut self) {
        *self = StatVector::default();
    }

    /// Total XP across all categories.
    pub fn total(&self) -> u64 {
        Category::ALL.iter().map(|&c| self.get(c)).sum()
    }

    /// Derive the level vector. Recomputed on every call, never cached.
    pub fn levels(&self) -> LevelVector {
        LevelVector {
            body: level(self.body),
            looks: level(self.looks),
            mind: level(self.mind),
            intel: level(self.intel),
            disc: level(self.disc),
        }
    }
}

/// Derived per-category levels in [0, 1000]. Never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelVector {
    pub body: u32,
    pub looks: u32,
    pub mind: u32,
    pub intel: u32,
    pub disc: u32,
}

impl LevelVector {
    /// Level for a single category.
    pub fn get(&self, category: Category) -> u32 {
        match category {
            Category::Body => self.body,
            Category::Looks => self.looks,
            Category::Mind => self.mind,
            Category::Intel => self.intel,
            Category::Disc => self.disc,
        }
    }

    /// Minimum level across all five categories.
    pub fn min(&self) -> u32 {
        Category::ALL
            .iter()
            .map(|&c| self.get(c))
            .min()
            .unwrap_or(0)
    }

    /// The category holding the highest level. Ties resolve to the first
    /// category in [`Category::ALL`] order.
    pub fn best(&self) -> Category {
        let mut best = Category::Body;
        for &c in &Category::ALL {
            if self.get(c) > self.get(best) {
                best = c;
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_total() {
        let mut stats = StatVector::default();
        stats.add(Category::Body, 120);
        stats.add(Category::Intel, 30);
        stats.add(Category::Body, 5);
        assert_eq!(stats.body, 125);
        assert_eq!(stats.intel, 30);
        assert_eq!(stats.total(), 155);
    }

    #[test]
    fn add_saturates() {
        let mut stats = StatVector::default();
        stats.add(Category::Disc, u64::MAX);
        stats.add(Category::Disc, 100);
        assert_eq!(stats.disc, u64::MAX);
    }

    #[test]
    fn reset_zeroes_everything() {
        let mut stats = StatVector {
            body: 1,
            looks: 2,
            mind: 3,
            intel: 4,
            disc: 5,
        };
        stats.reset();
        assert_eq!(stats, StatVector::default());
    }

    #[test]
    fn missing_fields_deserialize_as_zero() {
        let stats: StatVector = serde_json::from_str(r#"{"body": 500}"#).unwrap();
        assert_eq!(stats.body, 500);
        assert_eq!(stats.looks, 0);
        assert_eq!(stats.disc, 0);
    }

    #[test]
    fn best_breaks_ties_in_fixed_order() {
        let levels = LevelVector {
            body: 0,
            looks: 600,
            mind: 600,
            intel: 0,
            disc: 0,
        };
        assert_eq!(levels.best(), Category::Looks);

        let flat = LevelVector::default();
        assert_eq!(flat.best(), Category::Body);
    }

    #[test]
    fn levels_derive_from_xp() {
        let stats = StatVector {
            body: 0,
            looks: 5,
            mind: 500,
            intel: 5 * 900 * 900,
            disc: u64::MAX,
        };
        let levels = stats.levels();
        assert_eq!(levels.body, 0);
        assert_eq!(levels.looks, 1);
        assert_eq!(levels.mind, 10);
        assert_eq!(levels.intel, 900);
        assert_eq!(levels.disc, 1000);
        // Recomputation is pure: same stats, same levels.
        assert_eq!(stats.levels(), levels);
    }

    #[test]
    fn min_across_categories() {
        let levels = LevelVector {
            body: 900,
            looks: 901,
            mind: 950,
            intel: 899,
            disc: 1000,
        };
        assert_eq!(levels.min(), 899);
    }
}
