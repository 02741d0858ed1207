//! Mental recovery actions
//!
//! Meditation, recovery rituals, hobbies and detox.

/// Recovery activity checklist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecoveryChecklist {
    pub sauna: bool,
    pub bath: bool,
    pub journaling: bool,
    pub nature: bool,
}

impl RecoveryChecklist {
    pub fn xp(&self) -> u64 {
        let mut xp = 0;
        if self.sauna {
            xp += 50;
        }
        if self.bath {
            xp += 20;
        }
        if self.journaling {
            xp += 20;
        }
        if self.nature {
            xp += 30;
        }
        xp
    }
}

/// A completed mental-wellbeing activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MindAction {
    /// Mindfulness meditation, 1 XP per minute.
    Meditation { minutes: u32 },
    Recovery(RecoveryChecklist),
    /// Hobby time (1 XP per minute) and phone-free time (30 XP per hour).
    Life {
        music_minutes: u32,
        detox_hours: u32,
    },
}

impl MindAction {
    pub fn xp(&self) -> u64 {
        match *self {
            MindAction::Meditation { minutes } => minutes as u64,
            MindAction::Recovery(checks) => checks.xp(),
            MindAction::Life {
                music_minutes,
                detox_hours,
            } => music_minutes as u64 + detox_hours as u64 * 30,
        }
    }

    pub fn summary(&self) -> String {
        match *self {
            MindAction::Meditation { minutes } => format!("Meditation done ({} min)", minutes),
            MindAction::Recovery(_) => "Recovery time logged!".to_string(),
            MindAction::Life { .. } => "Hobby & detox logged!".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meditation_is_one_per_minute() {
        assert_eq!(MindAction::Meditation { minutes: 15 }.xp(), 15);
        assert_eq!(MindAction::Meditation { minutes: 0 }.xp(), 0);
    }

    #[test]
    fn recovery_checklist_sums() {
        let all = RecoveryChecklist {
            sauna: true,
            bath: true,
            journaling: true,
            nature: true,
        };
        assert_eq!(all.xp(), 120);
        assert_eq!(RecoveryChecklist::default().xp(), 0);
    }

    #[test]
    fn life_combines_music_and_detox() {
        let life = MindAction::Life {
            music_minutes: 30,
            detox_hours: 2,
        };
        assert_eq!(life.xp(), 90);
    }
}
