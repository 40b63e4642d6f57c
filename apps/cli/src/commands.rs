use crate::args::Command;
use anyhow::{Context, Result};
use cnn::common::{
    create_directories, decode_image, encode_image, get_size, read_yaml, to_json_pretty,
};
use cnn::domain::settings::ArtifactSettings;
use cnn::package::PackageInfo;
use std::fs;
use tracing::info;

/// Runs a single subcommand. Paths a command leaves out come from `artifacts`.
///
/// # Result
/// Returns the text to print, or `None` when the command only writes files.
///
/// # Errors
/// Returns an error if the underlying I/O operation fails.
pub fn execute(command: &Command, artifacts: &ArtifactSettings) -> Result<Option<String>> {
    match command {
        Command::Config { path, params } => {
            let path = match path {
                Some(path) => path,
                None if *params => &artifacts.params_file,
                None => &artifacts.config_file,
            };
            let document = read_yaml(path)?;
            Ok(Some(to_json_pretty(&document)?))
        },
        Command::Prepare {} => {
            create_directories([&artifacts.root], true)?;
            Ok(None)
        },
        Command::Size { path } => Ok(Some(get_size(path)?)),
        Command::EncodeImage { path, output } => {
            let encoded = encode_image(path)?;
            match output {
                Some(output) => {
                    fs::write(output, encoded)
                        .with_context(|| format!("Failed to write {}", output.display()))?;
                    info!(path = %output.display(), "Encoded image written");
                    Ok(None)
                },
                None => Ok(Some(encoded)),
            }
        },
        Command::DecodeImage { input, output } => {
            let encoded = fs::read(input)
                .with_context(|| format!("Failed to read {}", input.display()))?;
            decode_image(encoded, output)?;
            Ok(None)
        },
        Command::About {} => Ok(Some(PackageInfo::current().to_string())),
    }
}
