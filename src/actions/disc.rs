//! Discipline actions
//!
//! Environment upkeep, task management and self-restraint.

/// Cleaning checklist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanChecklist {
    pub room: bool,
    pub bed: bool,
    pub bathroom: bool,
    pub trash: bool,
}

impl CleanChecklist {
    pub fn xp(&self) -> u64 {
        let mut xp = 0;
        if self.room {
            xp += 30;
        }
        if self.bed {
            xp += 10;
        }
        if self.bathroom {
            xp += 50;
        }
        if self.trash {
            xp += 10;
        }
        xp
    }
}

/// Task-management checklist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskChecklist {
    pub punctual: bool,
    pub todo_done: bool,
    pub no_procrastination: bool,
}

impl TaskChecklist {
    pub fn xp(&self) -> u64 {
        let mut xp = 0;
        if self.punctual {
            xp += 20;
        }
        if self.todo_done {
            xp += 50;
        }
        if self.no_procrastination {
            xp += 20;
        }
        xp
    }
}

/// Self-restraint checklist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StopChecklist {
    pub no_waste: bool,
    pub beat_temptation: bool,
    pub no_overeating: bool,
}

impl StopChecklist {
    pub fn xp(&self) -> u64 {
        let mut xp = 0;
        if self.no_waste {
            xp += 30;
        }
        if self.beat_temptation {
            xp += 40;
        }
        if self.no_overeating {
            xp += 50;
        }
        xp
    }
}

/// A completed discipline activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscAction {
    Clean(CleanChecklist),
    Task(TaskChecklist),
    Stop(StopChecklist),
}

impl DiscAction {
    pub fn xp(&self) -> u64 {
        match self {
            DiscAction::Clean(c) => c.xp(),
            DiscAction::Task(t) => t.xp(),
            DiscAction::Stop(s) => s.xp(),
        }
    }

    pub fn summary(&self) -> String {
        match self {
            DiscAction::Clean(_) => "Environment in order!".to_string(),
            DiscAction::Task(_) => "Tasks under control!".to_string(),
            DiscAction::Stop(_) => "Discipline held!".to_string(),
        }
    }
}
