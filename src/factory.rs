// Factory Method Pattern - build skills without naming their concrete types.

use tracing::debug;

use crate::skill::{DesignSkill, ProgrammingSkill, Skill};

pub trait SkillFactory {
    fn create_skill(&self) -> Box<dyn Skill>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ProgrammingSkillFactory;

impl SkillFactory for ProgrammingSkillFactory {
    fn create_skill(&self) -> Box<dyn Skill> {
        debug!("creating programming skill");
        Box::new(ProgrammingSkill)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DesignSkillFactory;

impl SkillFactory for DesignSkillFactory {
    fn create_skill(&self) -> Box<dyn Skill> {
        debug!("creating design skill");
        Box::new(DesignSkill)
    }
}

// ============================================================================
// Enum selector
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillKind {
    Programming,
    Design,
}

impl SkillKind {
    pub fn factory(self) -> Box<dyn SkillFactory> {
        match self {
            SkillKind::Programming => Box::new(ProgrammingSkillFactory),
            SkillKind::Design => Box::new(DesignSkillFactory),
        }
    }

    pub fn create(self) -> Box<dyn Skill> {
        self.factory().create_skill()
    }
}
