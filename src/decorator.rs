// Decorator Pattern - wrap a skill, add a step, then delegate.
// Wrappers nest to any depth, statically or through Box<dyn Skill>.

use tracing::trace;

use crate::console::Console;
use crate::skill::Skill;

pub const ADVANCED_MESSAGE: &str = "Performing advanced programming skill";

/// A skill that wraps another skill.
pub trait SkillDecorator: Skill {
    fn inner(&self) -> &dyn Skill;
}

/// Emits its own line, then performs the wrapped skill exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvancedSkill<S> {
    inner: S,
}

impl<S: Skill> AdvancedSkill<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: Skill> Skill for AdvancedSkill<S> {
    fn perform(&self, console: &mut dyn Console) {
        console.line(ADVANCED_MESSAGE);
        trace!(inner = self.inner.name(), "delegating to wrapped skill");
        self.inner.perform(console);
    }

    fn name(&self) -> &str {
        "advanced"
    }
}

impl<S: Skill> SkillDecorator for AdvancedSkill<S> {
    fn inner(&self) -> &dyn Skill {
        &self.inner
    }
}

/// `.advanced()` on any skill.
pub trait SkillExt: Skill + Sized {
    fn advanced(self) -> AdvancedSkill<Self> {
        AdvancedSkill::new(self)
    }
}

impl<S: Skill> SkillExt for S {}

/// Wraps `skill` in `layers` advanced decorators. Zero layers returns it as is.
pub fn decorate(skill: Box<dyn Skill>, layers: u8) -> Box<dyn Skill> {
    (0..layers).fold(skill, |wrapped, _| -> Box<dyn Skill> {
        Box::new(AdvancedSkill::new(wrapped))
    })
}
