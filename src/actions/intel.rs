//! Study and knowledge actions

/// A completed intellectual activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntelAction {
    /// Study session. Programming counts 1 XP per minute; TOEIC and
    /// certification study count half, each floored separately.
    Study {
        programming_min: u32,
        toeic_min: u32,
        cert_min: u32,
    },
    /// Reading, 1 XP per page.
    Reading { pages: u32 },
    /// News and information gathering.
    News { it: bool, general: bool },
}

impl IntelAction {
    pub fn xp(&self) -> u64 {
        match *self {
            IntelAction::Study {
                programming_min,
                toeic_min,
                cert_min,
            } => programming_min as u64 + toeic_min as u64 / 2 + cert_min as u64 / 2,
            IntelAction::Reading { pages } => pages as u64,
            IntelAction::News { it, general } => {
                let mut xp = 0;
                if it {
                    xp += 10;
                }
                if general {
                    xp += 5;
                }
                xp
            }
        }
    }

    pub fn summary(&self) -> String {
        match *self {
            IntelAction::Study { .. } => "Study session done!".to_string(),
            IntelAction::Reading { pages } => format!("Reading done ({} pages)", pages),
            IntelAction::News { .. } => "Caught up on the news!".to_string(),
        }
    }
}
