//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.coursedeck/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::Level;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CourseConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub catalog_file: Option<String>,
    pub log_file: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub code_theme: Option<String>,
    pub show_topics: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "coursedeck.log";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_CODE_THEME: &str = "base16-ocean.dark";

// ============================================================================
// Resolved Config (concrete values, no Options except the catalog override)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// `None` means the builtin catalog.
    pub catalog_file: Option<PathBuf>,
    pub log_file: PathBuf,
    pub log_level: String,
    pub code_theme: String,
    pub show_topics: bool,
}

/// Values supplied on the command line. `None` = not specified.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub catalog_file: Option<PathBuf>,
    pub log_level: Option<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.coursedeck/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".coursedeck").join("config.toml"))
}

/// A parsed config file plus the log lines produced while finding it.
///
/// Config is read before the logger exists (the log file and level come from
/// config), so notes are held here and replayed by `main` once logging is up.
#[derive(Debug, Default)]
pub struct LoadedConfig {
    pub config: CourseConfig,
    pub notes: Vec<(Level, String)>,
}

impl LoadedConfig {
    fn note(&mut self, level: Level, message: String) {
        self.notes.push((level, message));
    }

    /// Emit the held notes through the installed logger.
    pub fn replay_notes(&self) {
        for (level, message) in &self.notes {
            log::log!(*level, "{}", message);
        }
    }
}

/// Load config from `~/.coursedeck/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `CourseConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<LoadedConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_at(&path),
        None => {
            let mut loaded = LoadedConfig::default();
            loaded.note(
                Level::Warn,
                "Could not determine home directory, using default config".to_string(),
            );
            Ok(loaded)
        }
    }
}

/// [`load_config`] for an explicit location.
pub fn load_config_at(path: &Path) -> Result<LoadedConfig, ConfigError> {
    let mut loaded = LoadedConfig::default();

    if !path.exists() {
        loaded.note(
            Level::Info,
            format!("No config file found, generating default at {}", path.display()),
        );
        if let Err(e) = generate_default_config(path) {
            loaded.note(Level::Warn, format!("Failed to write default config: {}", e));
        }
        return Ok(loaded);
    }

    loaded.config = load_config_from(path)?;
    loaded.note(Level::Info, format!("Loaded config from {}", path.display()));
    let dump = format!("Config: {:?}", loaded.config);
    loaded.note(Level::Debug, dump);
    Ok(loaded)
}

/// Parse a config file at an explicit path.
pub fn load_config_from(path: &Path) -> Result<CourseConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&contents).map_err(ConfigError::Parse)
}

const DEFAULT_CONFIG_FILE: &str = r#"# coursedeck configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# catalog_file = "/path/to/modules.json"   # Or COURSEDECK_CATALOG; omit for the builtin catalog
# log_file = "coursedeck.log"             # Or COURSEDECK_LOG_FILE
# log_level = "info"                      # "error", "warn", "info", "debug", "trace"; or COURSEDECK_LOG

# [display]
# code_theme = "base16-ocean.dark"        # Any syntect default theme
# show_topics = true
"#;

/// Writes the commented-out default config, creating its directory.
fn generate_default_config(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, DEFAULT_CONFIG_FILE)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &CourseConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`] with an injectable environment lookup.
pub fn resolve_with_env<F>(config: &CourseConfig, cli: &CliOverrides, env: F) -> ResolvedConfig
where
    F: Fn(&str) -> Option<String>,
{
    // Catalog: CLI → env → config → builtin
    let catalog_file = cli
        .catalog_file
        .clone()
        .or_else(|| env("COURSEDECK_CATALOG").map(PathBuf::from))
        .or_else(|| config.general.catalog_file.as_ref().map(PathBuf::from));

    // Log level: CLI → env → config → default
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| env("COURSEDECK_LOG"))
        .or_else(|| config.general.log_level.clone())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

    // Log file: env → config → default
    let log_file = env("COURSEDECK_LOG_FILE")
        .or_else(|| config.general.log_file.clone())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    ResolvedConfig {
        catalog_file,
        log_file,
        log_level,
        code_theme: config
            .display
            .code_theme
            .clone()
            .unwrap_or_else(|| DEFAULT_CODE_THEME.to_string()),
        show_topics: config.display.show_topics.unwrap_or(true),
    }
}
