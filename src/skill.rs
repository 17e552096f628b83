// Strategy Pattern - the Skill capability, its two stock variants,
// and a Practitioner context that can swap skills at runtime.

use tracing::debug;

use crate::console::Console;

pub const PROGRAMMING_MESSAGE: &str = "Performing programming skill";
pub const DESIGN_MESSAGE: &str = "Performing design skill";

// ============================================================================
// Capability
// ============================================================================

/// A single "perform an action" contract.
///
/// Performing a skill cannot fail; its only observable effect is the
/// message it writes to the console.
pub trait Skill {
    fn perform(&self, console: &mut dyn Console);

    /// Short label for diagnostics.
    fn name(&self) -> &str;
}

impl<S: Skill + ?Sized> Skill for Box<S> {
    fn perform(&self, console: &mut dyn Console) {
        (**self).perform(console);
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<S: Skill + ?Sized> Skill for &S {
    fn perform(&self, console: &mut dyn Console) {
        (**self).perform(console);
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

// ============================================================================
// Concrete strategies
// ============================================================================

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ProgrammingSkill;

impl Skill for ProgrammingSkill {
    fn perform(&self, console: &mut dyn Console) {
        console.line(PROGRAMMING_MESSAGE);
    }

    fn name(&self) -> &str {
        "programming"
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DesignSkill;

impl Skill for DesignSkill {
    fn perform(&self, console: &mut dyn Console) {
        console.line(DESIGN_MESSAGE);
    }

    fn name(&self) -> &str {
        "design"
    }
}

// ============================================================================
// Context holding the current strategy
// ============================================================================

pub struct Practitioner {
    skill: Box<dyn Skill>,
}

impl Practitioner {
    pub fn new(skill: Box<dyn Skill>) -> Self {
        Self { skill }
    }

    pub fn perform(&self, console: &mut dyn Console) {
        debug!(skill = self.skill.name(), "practitioner performing");
        self.skill.perform(console);
    }

    /// Replaces the current skill, handing back the one it displaced.
    pub fn switch_to(&mut self, skill: Box<dyn Skill>) -> Box<dyn Skill> {
        debug!(from = self.skill.name(), to = skill.name(), "switching skill");
        std::mem::replace(&mut self.skill, skill)
    }

    pub fn skill_name(&self) -> &str {
        self.skill.name()
    }
}
