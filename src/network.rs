// Singleton Pattern - one immutable SkillNet per process.
//
// The instance is either installed explicitly at startup or built with
// default settings on first access. Either way it is created exactly once.

use std::sync::OnceLock;

use tracing::info;

use crate::config::Settings;
use crate::error::{Error, Result};

/// Write-once slot. `install` succeeds only while the slot is empty.
pub struct Singleton<T> {
    cell: OnceLock<T>,
}

impl<T> Singleton<T> {
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    pub fn install(&self, value: T) -> Result<&T> {
        let mut installed = false;
        let current = self.cell.get_or_init(|| {
            installed = true;
            value
        });
        if installed {
            Ok(current)
        } else {
            Err(Error::AlreadyInitialized)
        }
    }

    pub fn get_or_init(&self, init: impl FnOnce() -> T) -> &T {
        self.cell.get_or_init(init)
    }

    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }
}

impl<T> Default for Singleton<T> {
    fn default() -> Self {
        Self::new()
    }
}

static SKILL_NET: Singleton<SkillNet> = Singleton::new();

#[derive(Debug, PartialEq, Eq)]
pub struct SkillNet {
    name: &'static str,
    settings: Settings,
}

impl SkillNet {
    fn new(settings: Settings) -> Self {
        Self {
            name: "AituNET",
            settings,
        }
    }

    /// The process-wide instance, built with default settings if nothing
    /// was installed first.
    pub fn global() -> &'static SkillNet {
        SKILL_NET.get_or_init(|| SkillNet::new(Settings::default()))
    }

    /// Installs the instance with `settings`. Fails once any instance exists.
    pub fn install(settings: Settings) -> Result<&'static SkillNet> {
        let net = SKILL_NET.install(SkillNet::new(settings))?;
        info!(name = net.name, "skill network installed");
        Ok(net)
    }

    pub fn name(&self) -> &str {
        self.name
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
