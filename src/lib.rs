//! # skillnet
//!
//! Classic design patterns wired around a single `Skill` capability:
//!
//! ## Creational
//! - Singleton: [`network::SkillNet`], one immutable instance per process
//! - Factory Method: [`factory::SkillFactory`] and the [`factory::SkillKind`] selector
//!
//! ## Structural
//! - Decorator: [`decorator::AdvancedSkill`], nests to any depth
//! - Adapter: [`adapter::LegacySkillAdapter`]
//!
//! ## Behavioral
//! - Strategy: [`skill::Skill`] variants and the [`skill::Practitioner`] context
//! - Observer: [`observer::Subject`], snapshot broadcast in registration order
//!
//! All output goes through a [`console::Console`], so every pattern can be
//! observed in tests with [`console::RecordingConsole`].
//!
//! Run the demo with:
//! ```bash
//! cargo run --bin skillnet
//! ```

pub mod adapter;
pub mod config;
pub mod console;
pub mod decorator;
pub mod demo;
pub mod error;
pub mod factory;
pub mod network;
pub mod observer;
pub mod skill;

pub use config::Settings;
pub use console::{Console, RecordingConsole, StdoutConsole};
pub use error::{ConfigError, Error, Result};
pub use network::SkillNet;
pub use skill::Skill;
