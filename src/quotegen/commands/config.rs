use crate::commands::{CmdMessage, CmdResult, QuotePaths};
use crate::config::{ConfigKey, QuoteConfig};
use crate::error::Result;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(ConfigKey),
    Set(ConfigKey, String),
}

pub fn run(paths: &QuotePaths, action: ConfigAction) -> Result<CmdResult> {
    let mut config = QuoteConfig::load(&paths.config_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {
            for key in ConfigKey::ALL {
                result.add_message(CmdMessage::info(format!("{} = {}", key, config.get(key))));
            }
        }
        ConfigAction::ShowKey(key) => {
            result.add_message(CmdMessage::info(format!("{} = {}", key, config.get(key))));
        }
        ConfigAction::Set(key, value) => {
            config.set(key, &value)?;
            config.save(&paths.config_dir)?;
            info!(key = key.name(), value = %value, "config updated");
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key,
                config.get(key)
            )));
        }
    }

    Ok(result.with_config(config))
}
