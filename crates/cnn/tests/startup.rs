use cnn::common::{read_yaml, save_json};
use cnn::domain::settings::AppSettings;
use cnn::kernel::config::load_config_with_vars;
use cnn::logger::ConsoleStream;
use cnn::logging::build_logger;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

#[test]
fn settings_drive_the_logger() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let log_dir = dir.path().join("logs");
    let log_dir_text = log_dir.to_string_lossy().into_owned();

    let settings: AppSettings = load_config_with_vars(
        None::<&Path>,
        [("CNN__LOGGING__DIR", log_dir_text.as_str()), ("CNN__LOGGING__CONSOLE", "false")],
    )?;
    assert!(!settings.logging.console);

    let config = dir.path().join("config.yaml");
    fs::write(&config, "artifacts_root: artifacts\n")?;

    let logger = build_logger(&settings.logging, ConsoleStream::Stdout)?;
    logger.in_scope(|| -> Result<(), cnn::common::CommonError> {
        let doc = read_yaml(&config)?;
        save_json(dir.path().join("config.json"), &doc)?;
        tracing::warn!("pipeline finished");
        Ok(())
    })?;
    drop(logger);

    let log = fs::read_to_string(log_dir.join(&settings.logging.file_name))?;
    assert!(log.contains(": INFO: yaml: YAML file loaded successfully"));
    assert!(log.contains(": INFO: json: JSON file saved"));
    assert!(log.contains(": WARN: startup: pipeline finished]"));
    Ok(())
}
