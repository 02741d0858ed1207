//! Grooming and appearance actions

/// Daily grooming checklist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DailyGrooming {
    pub skin_care: bool,
    pub sunscreen: bool,
    pub hair_set: bool,
    pub shave: bool,
    pub ironing: bool,
}

impl DailyGrooming {
    pub fn xp(&self) -> u64 {
        let mut xp = 0;
        if self.skin_care {
            xp += 5;
        }
        if self.sunscreen {
            xp += 10;
        }
        if self.hair_set {
            xp += 5;
        }
        if self.shave {
            xp += 5;
        }
        if self.ironing {
            xp += 10;
        }
        xp
    }
}

/// Occasional appearance maintenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialCare {
    Barber,
    Eyebrows,
    NewClothes,
    Dental,
}

impl SpecialCare {
    pub fn xp(&self) -> u64 {
        match self {
            SpecialCare::Barber => 100,
            SpecialCare::Eyebrows => 30,
            SpecialCare::NewClothes => 50,
            SpecialCare::Dental => 50,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SpecialCare::Barber => "Barber visit",
            SpecialCare::Eyebrows => "Eyebrow grooming",
            SpecialCare::NewClothes => "New clothes",
            SpecialCare::Dental => "Dental care",
        }
    }
}

/// A completed appearance activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LooksAction {
    Daily(DailyGrooming),
    Special(SpecialCare),
}

impl LooksAction {
    pub fn xp(&self) -> u64 {
        match self {
            LooksAction::Daily(checks) => checks.xp(),
            LooksAction::Special(care) => care.xp(),
        }
    }

    pub fn summary(&self) -> String {
        match self {
            LooksAction::Daily(_) => "Grooming routine done!".to_string(),
            LooksAction::Special(care) => format!("{}!", care.label()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn daily_checklist_sums_checked_items() {
        let all = DailyGrooming {
            skin_care: true,
            sunscreen: true,
            hair_set: true,
            shave: true,
            ironing: true,
        };
        assert_eq!(all.xp(), 35);
        assert_eq!(DailyGrooming::default().xp(), 0);

        let some = DailyGrooming {
            sunscreen: true,
            ironing: true,
            ..Default::default()
        };
        assert_eq!(some.xp(), 20);
    }

    #[test]
    fn special_care_values() {
        assert_eq!(LooksAction::Special(SpecialCare::Barber).xp(), 100);
        assert_eq!(LooksAction::Special(SpecialCare::Eyebrows).xp(), 30);
        assert_eq!(LooksAction::Special(SpecialCare::NewClothes).xp(), 50);
        assert_eq!(LooksAction::Special(SpecialCare::Dental).xp(), 50);
    }
}
