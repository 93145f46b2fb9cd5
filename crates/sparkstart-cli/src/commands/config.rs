//! `sparkstart config` - read and write configuration values.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
///
/// `file` is the file `init`/`set` write to; `config` is the merged view
/// that `get`/`list` report.
pub fn execute(
    cmd: ConfigCommands,
    file: PathBuf,
    config: &AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Init { force } => {
            init_file(&file, force)?;
            output.success(&format!("Wrote {}", file.display()))?;
        }

        ConfigCommands::Path => {
            output.print(&file.display().to_string())?;
        }

        ConfigCommands::Get { key } => {
            let value = get_config_value(config, &key)?;
            output.print(&value)?;
        }

        ConfigCommands::Set { key, value } => {
            set_config_value(&file, &key, &value)?;
            info!(%key, path = %file.display(), "Config updated");
            output.success(&format!("{key} = {value}"))?;
        }

        ConfigCommands::List => {
            output.print(&to_toml(config)?)?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn config_error(
    message: String,
    source: impl std::error::Error + Send + Sync + 'static,
) -> CliError {
    CliError::ConfigError {
        message,
        source: Some(Box::new(source)),
    }
}

fn to_toml(config: &AppConfig) -> CliResult<String> {
    toml::to_string_pretty(config)
        .map_err(|e| config_error(format!("Failed to serialise config: {e}"), e))
}

fn init_file(path: &Path, force: bool) -> CliResult<()> {
    if path.exists() && !force {
        return Err(CliError::ConfigError {
            message: format!("{} already exists (use --force to overwrite)", path.display()),
            source: None,
        });
    }
    write_file(path, &to_toml(&AppConfig::default())?)
}

fn write_file(path: &Path, content: &str) -> CliResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_cli_context(|| format!("creating {}", parent.display()))?;
    }
    fs::write(path, content).with_cli_context(|| format!("writing {}", path.display()))
}

/// Look up a dotted key in the merged configuration.
fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let value = toml::Value::try_from(config)
        .map_err(|e| config_error(format!("Failed to serialise config: {e}"), e))?;

    let found = key
        .split('.')
        .try_fold(&value, |node, part| node.get(part))
        .filter(|v| !v.is_table())
        .ok_or_else(|| unknown_key(key))?;

    Ok(match found {
        toml::Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}

fn unknown_key(key: &str) -> CliError {
    CliError::ConfigError {
        message: format!(
            "Unknown config key: '{key}' (try one of: {})",
            known_keys().join(", ")
        ),
        source: None,
    }
}

fn known_keys() -> Vec<String> {
    let Ok(toml::Value::Table(root)) = toml::Value::try_from(AppConfig::default()) else {
        return Vec::new();
    };
    root.iter()
        .flat_map(|(section, body)| {
            body.as_table()
                .into_iter()
                .flat_map(|t| t.keys())
                .map(move |k| format!("{section}.{k}"))
        })
        .collect()
}

/// Parse a command-line value with the type the key already has.
fn typed_value(template: &toml::Value, raw: &str) -> Option<toml::Value> {
    match template {
        toml::Value::Boolean(_) => raw.parse().ok().map(toml::Value::Boolean),
        toml::Value::Integer(_) => raw.parse().ok().map(toml::Value::Integer),
        toml::Value::String(_) => Some(toml::Value::String(raw.to_string())),
        _ => None,
    }
}

/// Set `section.key` in the file at `path`, keeping everything else in it.
fn set_config_value(path: &Path, key: &str, raw: &str) -> CliResult<()> {
    let (section, field) = key.split_once('.').ok_or_else(|| unknown_key(key))?;

    let defaults = toml::Value::try_from(AppConfig::default())
        .map_err(|e| config_error(format!("Failed to serialise config: {e}"), e))?;
    let template = defaults
        .get(section)
        .and_then(|s| s.get(field))
        .ok_or_else(|| unknown_key(key))?;
    let value = typed_value(template, raw).ok_or_else(|| CliError::ConfigError {
        message: format!("'{raw}' is not a valid value for {key}"),
        source: None,
    })?;

    let mut document: toml::Table = match fs::read_to_string(path) {
        Ok(text) => text
            .parse()
            .map_err(|e| config_error(format!("Cannot parse {}: {e}", path.display()), e))?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => toml::Table::new(),
        Err(e) => {
            return Err(CliError::IoError {
                message: format!("reading {}", path.display()),
                source: e,
            });
        }
    };

    let table = document
        .entry(section)
        .or_insert(toml::Value::Table(toml::Table::new()));
    let Some(table) = table.as_table_mut() else {
        return Err(CliError::ConfigError {
            message: format!("[{section}] in {} is not a table", path.display()),
            source: None,
        });
    };
    table.insert(field.to_string(), value);

    let text = toml::to_string_pretty(&document)
        .map_err(|e| config_error(format!("Failed to serialise config: {e}"), e))?;

    // Reject edits the loader would not accept.
    toml::from_str::<AppConfig>(&text)
        .map_err(|e| config_error(format!("Resulting config is invalid: {e}"), e))?;

    write_file(path, &text)
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn get_known_keys() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "defaults.language").unwrap(), "python");
        assert_eq!(get_config_value(&cfg, "defaults.venv").unwrap(), "true");
        assert_eq!(get_config_value(&cfg, "github.timeout_secs").unwrap(), "10");
    }

    #[test]
    fn get_unknown_or_section_key_is_error() {
        let cfg = AppConfig::default();
        for key in ["does.not.exist", "defaults", ""] {
            assert!(matches!(
                get_config_value(&cfg, key),
                Err(CliError::ConfigError { .. })
            ));
        }
    }

    #[test]
    fn known_keys_are_dotted() {
        let keys = known_keys();
        assert!(keys.contains(&"defaults.language".to_string()));
        assert!(keys.contains(&"github.api_url".to_string()));
        assert!(keys.contains(&"output.color".to_string()));
    }

    #[test]
    fn init_refuses_to_overwrite_without_force() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("config.toml");

        init_file(&path, false).unwrap();
        assert!(init_file(&path, false).is_err());
        init_file(&path, true).unwrap();

        let written: AppConfig = toml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, AppConfig::default());
    }

    #[test]
    fn set_writes_typed_values_and_keeps_others() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[github]\napi_url = \"http://localhost:9\"\n").unwrap();

        set_config_value(&path, "defaults.tools", "true").unwrap();
        set_config_value(&path, "github.timeout_secs", "3").unwrap();
        set_config_value(&path, "defaults.language", "rust").unwrap();

        let written: AppConfig = toml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert!(written.defaults.tools);
        assert_eq!(written.defaults.language, "rust");
        assert_eq!(written.github.timeout_secs, 3);
        assert_eq!(written.github.api_url, "http://localhost:9");
    }

    #[test]
    fn set_rejects_bad_keys_and_values() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");

        assert!(set_config_value(&path, "defaults.colour", "x").is_err());
        assert!(set_config_value(&path, "language", "rust").is_err());
        assert!(set_config_value(&path, "defaults.tools", "maybe").is_err());
        assert!(!path.exists());
    }
}
