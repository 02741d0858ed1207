//! Title classification
//!
//! Maps a derived level vector to exactly one narrative title. The rules
//! form a strict cascade evaluated top to bottom, first match wins:
//!
//! 1. Global thresholds on the *minimum* level across all five categories
//!    (a single weak stat blocks the god tiers, however high the rest go).
//! 2. Exactly four categories at S-rank: keyed by the one missing.
//! 3. Exactly three at S-rank: keyed by the missing pair.
//! 4. Exactly two at S-rank: keyed by the qualifying pair.
//! 5. Highest single category against per-category S/A/B thresholds.
//! 6. NOVICE.
//!
//! The tiers are static tables rather than branch code so the rule set
//! can be audited and checked for completeness in tests. A combination
//! absent from its table falls through to the next tier; the cascade
//! always terminates in a title.

use crate::stats::{Category, LevelVector};

/// Level thresholds used throughout the cascade.
pub const RANK_S: u32 = 900;
pub const RANK_A: u32 = 750;
pub const RANK_B: u32 = 500;

/// A narrative rank: canonical English label plus localized subtitle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Title {
    pub en: &'static str,
    pub jp: &'static str,
}

const fn title(en: &'static str, jp: &'static str) -> Title {
    Title { en, jp }
}

/// Fallback when nothing else matches.
pub const NOVICE: Title = title("NOVICE", "- 原石 -");

/// Tier 1: thresholds against the minimum of all five levels.
const GLOBAL: [(u32, Title); 3] = [
    (RANK_S, title("THE ONE", "- 全能の神 -")),
    (RANK_A, title("GIGACHAD", "- 完全無欠 -")),
    (RANK_B, title("LEGEND", "- 生ける伝説 -")),
];

/// Tier 2: four categories at S-rank, keyed by the single one missing.
const MISSING_ONE: [(Category, Title); 5] = [
    (Category::Mind, title("GLASS ACE", "- 危うき天才 -")),
    (Category::Intel, title("BERSERKER", "- 狂戦士 -")),
    (Category::Looks, title("PHANTOM", "- 幻影 -")),
    (Category::Body, title("MASTERMIND", "- 黒幕 -")),
    (Category::Disc, title("JOKER", "- 規格外 -")),
];

/// Tier 3: three categories at S-rank, keyed by the missing pair.
/// Pairs are stored in canonical order (sorted by category key string).
const MISSING_PAIR: [(Category, Category, Title); 10] = [
    (Category::Body, Category::Disc, title("SAGE", "- 賢者 -")),
    (Category::Body, Category::Intel, title("MONK", "- 修道者 -")),
    (Category::Body, Category::Looks, title("PROFESSOR", "- 教授 -")),
    (Category::Body, Category::Mind, title("TACTICIAN", "- 策士 -")),
    (Category::Disc, Category::Intel, title("HERO", "- 英雄 -")),
    (Category::Disc, Category::Looks, title("WARRIOR POET", "- 文武両道 -")),
    (Category::Disc, Category::Mind, title("PRODIGY", "- 神童 -")),
    (Category::Intel, Category::Looks, title("ASCETIC", "- 求道者 -")),
    (Category::Intel, Category::Mind, title("CHAMPION", "- 覇者 -")),
    (Category::Looks, Category::Mind, title("COMMANDER", "- 指揮官 -")),
];

/// Tier 4: exactly two categories at S-rank, keyed by the qualifying
/// pair, in the same canonical order as [`MISSING_PAIR`].
const ACTIVE_PAIR: [(Category, Category, Title); 10] = [
    (Category::Body, Category::Disc, title("SPARTAN", "- 精鋭 -")),
    (Category::Body, Category::Intel, title("GENERAL", "- 将軍 -")),
    (Category::Body, Category::Looks, title("STAR", "- 綺羅星 -")),
    (Category::Body, Category::Mind, title("STOIC", "- 不動心 -")),
    (Category::Disc, Category::Intel, title("ARCHITECT", "- 設計者 -")),
    (Category::Disc, Category::Looks, title("DANDY", "- 伊達男 -")),
    (Category::Disc, Category::Mind, title("GUARDIAN", "- 守護者 -")),
    (Category::Intel, Category::Looks, title("SILVER TONGUE", "- 弁舌家 -")),
    (Category::Intel, Category::Mind, title("PHILOSOPHER", "- 哲学者 -")),
    (Category::Looks, Category::Mind, title("MUSE", "- 芸術の化身 -")),
];

/// Tier 5: the best single category against S/A/B thresholds.
/// Thresholds are listed highest first; the first cleared one wins.
const SOLO: [(Category, [(u32, Title); 3]); 5] = [
    (
        Category::Body,
        [
            (RANK_S, title("TITAN", "- 巨人神 -")),
            (RANK_A, title("GLADIATOR", "- 剣闘士 -")),
            (RANK_B, title("BOUNCER", "- 用心棒 -")),
        ],
    ),
    (
        Category::Looks,
        [
            (RANK_S, title("ICON", "- 時代の象徴 -")),
            (RANK_A, title("ADONIS", "- 美丈夫 -")),
            (RANK_B, title("DAPPER", "- 洒落者 -")),
        ],
    ),
    (
        Category::Mind,
        [
            (RANK_S, title("SAINT", "- 聖人 -")),
            (RANK_A, title("ZEN MASTER", "- 禅師 -")),
            (RANK_B, title("MEDITATOR", "- 瞑想家 -")),
        ],
    ),
    (
        Category::Intel,
        [
            (RANK_S, title("ORACLE", "- 予言者 -")),
            (RANK_A, title("SCHOLAR", "- 学者 -")),
            (RANK_B, title("BOOKWORM", "- 読書家 -")),
        ],
    ),
    (
        Category::Disc,
        [
            (RANK_S, title("EXECUTOR", "- 執行者 -")),
            (RANK_A, title("SERGEANT", "- 鬼軍曹 -")),
            (RANK_B, title("KEEPER", "- 継続者 -")),
        ],
    ),
];

/// Classify a level vector into exactly one title.
///
/// Total and deterministic; every input produces a title, [`NOVICE`]
/// being the floor.
pub fn classify(levels: &LevelVector) -> Title {
    if let Some(t) = lookup_global(levels.min()) {
        return t;
    }

    let at_s: Vec<Category> = Category::ALL
        .iter()
        .copied()
        .filter(|&c| levels.get(c) >= RANK_S)
        .collect();

    let combo = match at_s.len() {
        4 => Category::ALL
            .iter()
            .copied()
            .find(|c| !at_s.contains(c))
            .and_then(lookup_missing_one),
        3 => {
            let missing: Vec<Category> = Category::ALL
                .iter()
                .copied()
                .filter(|c| !at_s.contains(c))
                .collect();
            lookup_missing_pair(missing[0], missing[1])
        }
        2 => lookup_active_pair(at_s[0], at_s[1]),
        _ => None,
    };
    if let Some(t) = combo {
        return t;
    }

    let best = levels.best();
    lookup_solo(best, levels.get(best)).unwrap_or(NOVICE)
}

fn lookup_global(min_level: u32) -> Option<Title> {
    GLOBAL
        .iter()
        .find(|(threshold, _)| min_level >= *threshold)
        .map(|(_, t)| *t)
}

fn lookup_missing_one(missing: Category) -> Option<Title> {
    MISSING_ONE
        .iter()
        .find(|(c, _)| *c == missing)
        .map(|(_, t)| *t)
}

/// Sort a pair into canonical order by category key string, so lookups
/// are independent of which category was seen first.
fn canonical_pair(a: Category, b: Category) -> (Category, Category) {
    if a.key() <= b.key() {
        (a, b)
    } else {
        (b, a)
    }
}

fn lookup_missing_pair(a: Category, b: Category) -> Option<Title> {
    let (a, b) = canonical_pair(a, b);
    MISSING_PAIR
        .iter()
        .find(|(x, y, _)| *x == a && *y == b)
        .map(|(_, _, t)| *t)
}

fn lookup_active_pair(a: Category, b: Category) -> Option<Title> {
    let (a, b) = canonical_pair(a, b);
    ACTIVE_PAIR
        .iter()
        .find(|(x, y, _)| *x == a && *y == b)
        .map(|(_, _, t)| *t)
}

fn lookup_solo(category: Category, level: u32) -> Option<Title> {
    let (_, tiers) = SOLO.iter().find(|(c, _)| *c == category)?;
    tiers
        .iter()
        .find(|(threshold, _)| level >= *threshold)
        .map(|(_, t)| *t)
}
