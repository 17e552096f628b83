use std::env;
use std::path::PathBuf;

use skillnet::{demo, ConfigError, Settings, SkillNet, StdoutConsole};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

const CONFIG_ENV: &str = "SKILLNET_CONFIG";

/// Reads settings from the file named by `SKILLNET_CONFIG`, if any.
fn load_settings() -> Result<Settings, ConfigError> {
    match env::var_os(CONFIG_ENV) {
        Some(path) => Settings::load(&PathBuf::from(path)),
        None => Ok(Settings::default()),
    }
}

fn init_tracing(settings: &Settings) {
    // RUST_LOG wins; otherwise the configured filter. Diagnostics go to stderr.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    // A bad config never stops the demo; it falls back to defaults.
    let (settings, load_error) = match load_settings() {
        Ok(settings) => (settings, None),
        Err(err) => (Settings::default(), Some(err)),
    };
    init_tracing(&settings);
    if let Some(err) = load_error {
        warn!("{}; falling back to default settings", err);
    }
    debug!(?settings, "settings loaded");

    // Nothing touches the singleton before this point.
    let net = SkillNet::install(settings).unwrap_or_else(|err| {
        warn!("{}; using the existing instance", err);
        SkillNet::global()
    });
    demo::run(net, &mut StdoutConsole);
}
