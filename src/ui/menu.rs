//! Action menus
//!
//! Static per-category menu tables. Each entry either carries a complete
//! action or names the numeric fields needed to build one.

use crate::actions::{
    Action, BodyAction, CleanChecklist, DailyGrooming, DiscAction, IntelAction, LooksAction,
    MindAction, RecoveryChecklist, SpecialCare, StopChecklist, TaskChecklist, WakeTime,
};
use crate::stats::Category;

/// How a menu entry produces its action.
pub enum EntryKind {
    /// Ready to commit as-is.
    Fixed(Action),
    /// Needs one number from the user.
    OneField {
        prompt: &'static str,
        build: fn(u32) -> Action,
    },
    /// Needs two numbers from the user.
    TwoField {
        prompts: [&'static str; 2],
        build: fn(u32, u32) -> Action,
    },
}

pub struct MenuEntry {
    pub label: &'static str,
    pub kind: EntryKind,
}

/// Menu entries for one category, in display order.
pub fn entries(category: Category) -> &'static [MenuEntry] {
    match category {
        Category::Body => &BODY_MENU,
        Category::Looks => &LOOKS_MENU,
        Category::Mind => &MIND_MENU,
        Category::Intel => &INTEL_MENU,
        Category::Disc => &DISC_MENU,
    }
}

const ON_TIME: WakeTime = WakeTime::new(7, 0);
const LATE: WakeTime = WakeTime::new(9, 0);

const BODY_MENU: [MenuEntry; 7] = [
    MenuEntry {
        label: "Gym set",
        kind: EntryKind::TwoField {
            prompts: ["Weight (kg)", "Reps"],
            build: |weight_kg, reps| Action::Body(BodyAction::Gym { weight_kg, reps }),
        },
    },
    MenuEntry {
        label: "Home workout",
        kind: EntryKind::OneField {
            prompt: "Reps",
            build: |reps| Action::Body(BodyAction::Home { reps }),
        },
    },
    MenuEntry {
        label: "Run",
        kind: EntryKind::OneField {
            prompt: "Minutes",
            build: |minutes| Action::Body(BodyAction::Run { minutes }),
        },
    },
    MenuEntry {
        label: "Sleep 7-9h, woke on time (+150)",
        kind: EntryKind::Fixed(Action::Body(BodyAction::Sleep {
            hours: 8,
            target_wake: ON_TIME,
            actual_wake: ON_TIME,
        })),
    },
    MenuEntry {
        label: "Sleep 7-9h (+100)",
        kind: EntryKind::Fixed(Action::Body(BodyAction::Sleep {
            hours: 8,
            target_wake: ON_TIME,
            actual_wake: LATE,
        })),
    },
    MenuEntry {
        label: "Sleep 5-6h (+50)",
        kind: EntryKind::Fixed(Action::Body(BodyAction::Sleep {
            hours: 6,
            target_wake: ON_TIME,
            actual_wake: LATE,
        })),
    },
    MenuEntry {
        label: "Sleep under 5h (+10)",
        kind: EntryKind::Fixed(Action::Body(BodyAction::Sleep {
            hours: 4,
            target_wake: ON_TIME,
            actual_wake: LATE,
        })),
    },
];

const NO_GROOMING: DailyGrooming = DailyGrooming {
    skin_care: false,
    sunscreen: false,
    hair_set: false,
    shave: false,
    ironing: false,
};

const LOOKS_MENU: [MenuEntry; 9] = [
    MenuEntry {
        label: "Skin care (+5)",
        kind: EntryKind::Fixed(Action::Looks(LooksAction::Daily(DailyGrooming {
            skin_care: true,
            ..NO_GROOMING
        }))),
    },
    MenuEntry {
        label: "Sunscreen (+10)",
        kind: EntryKind::Fixed(Action::Looks(LooksAction::Daily(DailyGrooming {
            sunscreen: true,
            ..NO_GROOMING
        }))),
    },
    MenuEntry {
        label: "Hair set (+5)",
        kind: EntryKind::Fixed(Action::Looks(LooksAction::Daily(DailyGrooming {
            hair_set: true,
            ..NO_GROOMING
        }))),
    },
    MenuEntry {
        label: "Shave (+5)",
        kind: EntryKind::Fixed(Action::Looks(LooksAction::Daily(DailyGrooming {
            shave: true,
            ..NO_GROOMING
        }))),
    },
    MenuEntry {
        label: "Iron clothes (+10)",
        kind: EntryKind::Fixed(Action::Looks(LooksAction::Daily(DailyGrooming {
            ironing: true,
            ..NO_GROOMING
        }))),
    },
    MenuEntry {
        label: "Barber visit (+100)",
        kind: EntryKind::Fixed(Action::Looks(LooksAction::Special(SpecialCare::Barber))),
    },
    MenuEntry {
        label: "Eyebrow grooming (+30)",
        kind: EntryKind::Fixed(Action::Looks(LooksAction::Special(SpecialCare::Eyebrows))),
    },
    MenuEntry {
        label: "New clothes (+50)",
        kind: EntryKind::Fixed(Action::Looks(LooksAction::Special(SpecialCare::NewClothes))),
    },
    MenuEntry {
        label: "Dental care (+50)",
        kind: EntryKind::Fixed(Action::Looks(LooksAction::Special(SpecialCare::Dental))),
    },
];

const NO_RECOVERY: RecoveryChecklist = RecoveryChecklist {
    sauna: false,
    bath: false,
    journaling: false,
    nature: false,
};

const MIND_MENU: [MenuEntry; 7] = [
    MenuEntry {
        label: "Meditation",
        kind: EntryKind::OneField {
            prompt: "Minutes",
            build: |minutes| Action::Mind(MindAction::Meditation { minutes }),
        },
    },
    MenuEntry {
        label: "Sauna (+50)",
        kind: EntryKind::Fixed(Action::Mind(MindAction::Recovery(RecoveryChecklist {
            sauna: true,
            ..NO_RECOVERY
        }))),
    },
    MenuEntry {
        label: "Bath (+20)",
        kind: EntryKind::Fixed(Action::Mind(MindAction::Recovery(RecoveryChecklist {
            bath: true,
            ..NO_RECOVERY
        }))),
    },
    MenuEntry {
        label: "Journaling (+20)",
        kind: EntryKind::Fixed(Action::Mind(MindAction::Recovery(RecoveryChecklist {
            journaling: true,
            ..NO_RECOVERY
        }))),
    },
    MenuEntry {
        label: "Nature walk (+30)",
        kind: EntryKind::Fixed(Action::Mind(MindAction::Recovery(RecoveryChecklist {
            nature: true,
            ..NO_RECOVERY
        }))),
    },
    MenuEntry {
        label: "Music / hobby",
        kind: EntryKind::OneField {
            prompt: "Minutes",
            build: |minutes| {
                Action::Mind(MindAction::Life {
                    music_minutes: minutes,
                    detox_hours: 0,
                })
            },
        },
    },
    MenuEntry {
        label: "Digital detox",
        kind: EntryKind::OneField {
            prompt: "Hours",
            build: |hours| {
                Action::Mind(MindAction::Life {
                    music_minutes: 0,
                    detox_hours: hours,
                })
            },
        },
    },
];

const INTEL_MENU: [MenuEntry; 6] = [
    MenuEntry {
        label: "Programming",
        kind: EntryKind::OneField {
            prompt: "Minutes",
            build: |minutes| {
                Action::Intel(IntelAction::Study {
                    programming_min: minutes,
                    toeic_min: 0,
                    cert_min: 0,
                })
            },
        },
    },
    MenuEntry {
        label: "TOEIC study",
        kind: EntryKind::OneField {
            prompt: "Minutes",
            build: |minutes| {
                Action::Intel(IntelAction::Study {
                    programming_min: 0,
                    toeic_min: minutes,
                    cert_min: 0,
                })
            },
        },
    },
    MenuEntry {
        label: "Certification study",
        kind: EntryKind::OneField {
            prompt: "Minutes",
            build: |minutes| {
                Action::Intel(IntelAction::Study {
                    programming_min: 0,
                    toeic_min: 0,
                    cert_min: minutes,
                })
            },
        },
    },
    MenuEntry {
        label: "Reading",
        kind: EntryKind::OneField {
            prompt: "Pages",
            build: |pages| Action::Intel(IntelAction::Reading { pages }),
        },
    },
    MenuEntry {
        label: "IT news (+10)",
        kind: EntryKind::Fixed(Action::Intel(IntelAction::News {
            it: true,
            general: false,
        })),
    },
    MenuEntry {
        label: "General news (+5)",
        kind: EntryKind::Fixed(Action::Intel(IntelAction::News {
            it: false,
            general: true,
        })),
    },
];

const NO_CLEAN: CleanChecklist = CleanChecklist {
    room: false,
    bed: false,
    bathroom: false,
    trash: false,
};
const NO_TASK: TaskChecklist = TaskChecklist {
    punctual: false,
    todo_done: false,
    no_procrastination: false,
};
const NO_STOP: StopChecklist = StopChecklist {
    no_waste: false,
    beat_temptation: false,
    no_overeating: false,
};

const DISC_MENU: [MenuEntry; 10] = [
    MenuEntry {
        label: "Clean room (+30)",
        kind: EntryKind::Fixed(Action::Disc(DiscAction::Clean(CleanChecklist {
            room: true,
            ..NO_CLEAN
        }))),
    },
    MenuEntry {
        label: "Make bed (+10)",
        kind: EntryKind::Fixed(Action::Disc(DiscAction::Clean(CleanChecklist {
            bed: true,
            ..NO_CLEAN
        }))),
    },
    MenuEntry {
        label: "Bathroom cleaning (+50)",
        kind: EntryKind::Fixed(Action::Disc(DiscAction::Clean(CleanChecklist {
            bathroom: true,
            ..NO_CLEAN
        }))),
    },
    MenuEntry {
        label: "Take out trash (+10)",
        kind: EntryKind::Fixed(Action::Disc(DiscAction::Clean(CleanChecklist {
            trash: true,
            ..NO_CLEAN
        }))),
    },
    MenuEntry {
        label: "Punctuality (+20)",
        kind: EntryKind::Fixed(Action::Disc(DiscAction::Task(TaskChecklist {
            punctual: true,
            ..NO_TASK
        }))),
    },
    MenuEntry {
        label: "To-do list done (+50)",
        kind: EntryKind::Fixed(Action::Disc(DiscAction::Task(TaskChecklist {
            todo_done: true,
            ..NO_TASK
        }))),
    },
    MenuEntry {
        label: "No procrastination (+20)",
        kind: EntryKind::Fixed(Action::Disc(DiscAction::Task(TaskChecklist {
            no_procrastination: true,
            ..NO_TASK
        }))),
    },
    MenuEntry {
        label: "No wasteful spending (+30)",
        kind: EntryKind::Fixed(Action::Disc(DiscAction::Stop(StopChecklist {
            no_waste: true,
            ..NO_STOP
        }))),
    },
    MenuEntry {
        label: "Beat temptation (+40)",
        kind: EntryKind::Fixed(Action::Disc(DiscAction::Stop(StopChecklist {
            beat_temptation: true,
            ..NO_STOP
        }))),
    },
    MenuEntry {
        label: "No overeating (+50)",
        kind: EntryKind::Fixed(Action::Disc(DiscAction::Stop(StopChecklist {
            no_overeating: true,
            ..NO_STOP
        }))),
    },
];
