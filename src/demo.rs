// The fixed demonstration sequence: each pattern fires once, in order.

use std::rc::Rc;

use tracing::{debug, info_span};

use crate::adapter::{LegacySkillAdapter, LEGACY_MESSAGE};
use crate::config::{Settings, MIN_ADVANCED_DEPTH};
use crate::console::Console;
use crate::decorator::decorate;
use crate::factory::{DesignSkillFactory, ProgrammingSkillFactory, SkillFactory};
use crate::network::SkillNet;
use crate::observer::{ConsoleObserver, Observable, Observer, Subject};
use crate::skill::Skill;

/// Runs factory, decorator, adapter and observer against `console`, using
/// the settings held by the network singleton.
pub fn run(net: &SkillNet, console: &mut dyn Console) {
    let _span = info_span!("demo", network = net.name()).entered();
    run_with(net.settings(), console);
}

/// Same sequence; the decorator step wraps the programming skill
/// `advanced_depth` times, and always at least once.
pub fn run_with(settings: &Settings, console: &mut dyn Console) {
    let programming_skill = ProgrammingSkillFactory.create_skill();
    programming_skill.perform(console);

    let design_skill = DesignSkillFactory.create_skill();
    design_skill.perform(console);

    let layers = settings.advanced_depth.max(MIN_ADVANCED_DEPTH);
    let advanced = decorate(programming_skill, layers);
    advanced.perform(console);

    let legacy_skill = |console: &mut dyn Console| console.line(LEGACY_MESSAGE);
    let adapter = LegacySkillAdapter::new(legacy_skill);
    adapter.perform(console);

    let observer: Rc<dyn Observer> = Rc::new(ConsoleObserver);
    let observable = Subject::new();
    observable.add_observer(observer);
    let notified = observable.notify_observers(console);

    debug!(notified, "demo finished");
}
