// Adapter Pattern - expose a legacy contract through the Skill interface.

use crate::console::Console;
use crate::skill::Skill;

pub const LEGACY_MESSAGE: &str = "Executing legacy skill";

/// The older, differently named contract.
pub trait LegacySkill {
    fn execute_legacy_skill(&self, console: &mut dyn Console);
}

// Closures are legacy skills too.
impl<F> LegacySkill for F
where
    F: Fn(&mut dyn Console),
{
    fn execute_legacy_skill(&self, console: &mut dyn Console) {
        self(console);
    }
}

/// Stock legacy implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct LegacyRoutine;

impl LegacySkill for LegacyRoutine {
    fn execute_legacy_skill(&self, console: &mut dyn Console) {
        console.line(LEGACY_MESSAGE);
    }
}

pub struct LegacySkillAdapter<L> {
    legacy: L,
}

impl<L: LegacySkill> LegacySkillAdapter<L> {
    pub fn new(legacy: L) -> Self {
        Self { legacy }
    }
}

impl<L: LegacySkill> Skill for LegacySkillAdapter<L> {
    fn perform(&self, console: &mut dyn Console) {
        self.legacy.execute_legacy_skill(console);
    }

    fn name(&self) -> &str {
        "legacy"
    }
}
