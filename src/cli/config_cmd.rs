//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

use super::args::ConfigCmdAction;
use super::presenter::Presenter;

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigCmdAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigCmdAction::Show => handle_show(store, presenter).await,
        ConfigCmdAction::Path => {
            presenter.output(&store.path().to_string_lossy());
            Ok(())
        }
    }
}

/// Print the effective configuration (defaults overlaid with the file)
async fn handle_show<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = AppConfig::defaults().merge(store.load().await?);

    presenter.key_value("model_name", config.model_or_default());
    presenter.key_value("temperature", &config.temperature_or_default().to_string());
    presenter.key_value(
        "max_output_tokens",
        &config.max_output_tokens_or_default().to_string(),
    );
    presenter.key_value("response_mime_type", config.response_mime_type_or_default());
    presenter.key_value(
        "MAX_FILE_SIZE_MB",
        &config.max_file_size_mb_or_default().to_string(),
    );

    Ok(())
}
