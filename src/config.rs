use crate::clock::TickRate;
use crate::game::{Entity, Palette};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub(crate) struct Config {
    /// How many times per second the snake moves
    pub(crate) tick_rate: TickRate,

    /// File to write log messages to.  Logging is disabled when unset.
    pub(crate) log_file: Option<PathBuf>,

    /// Overrides for the colors & attributes used on the game screen
    pub(crate) styles: StyleConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("wrapsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }

    /// Load the configuration from `path` if given, or else from the default
    /// path if one can be determined and the file exists
    pub(crate) fn discover(path: Option<&Path>) -> Result<Config, ConfigError> {
        match path {
            Some(p) => Config::load(p, false),
            None => match Config::default_path() {
                Ok(p) => Config::load(&p, true),
                Err(ConfigError::NoPath) => Ok(Config::default()),
                Err(e) => Err(e),
            },
        }
    }
}

/// Style strings in the format accepted by the `parse-style` crate, e.g.
/// `"bold green"` or `"white on red"`
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct StyleConfig {
    snake: Option<parse_style::Style>,
    food: Option<parse_style::Style>,
    border: Option<parse_style::Style>,
    status: Option<parse_style::Style>,
}

impl From<StyleConfig> for Palette {
    fn from(styles: StyleConfig) -> Palette {
        let mut palette = Palette::default();
        if let Some(style) = styles.snake {
            palette.entities[Entity::Snake] = style.into();
        }
        if let Some(style) = styles.food {
            palette.entities[Entity::Food] = style.into();
        }
        if let Some(style) = styles.border {
            palette.border = style.into();
        }
        if let Some(style) = styles.status {
            palette.status = style.into();
        }
        palette
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts;
    use ratatui::style::Modifier;
    use tempfile::tempdir;

    #[test]
    fn load_full() {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("config.toml");
        fs_err::write(
            &path,
            concat!(
                "tick-rate = 12\n",
                "log-file = \"/var/tmp/wrapsnake.log\"\n",
                "\n",
                "[styles]\n",
                "food = \"bold yellow\"\n",
            ),
        )
        .unwrap();
        let cfg = Config::load(&path, false).unwrap();
        assert_eq!(cfg.tick_rate, TickRate::try_from(12).unwrap());
        assert_eq!(
            cfg.log_file.as_deref(),
            Some(Path::new("/var/tmp/wrapsnake.log"))
        );
        let palette = Palette::from(cfg.styles);
        let food = palette.entities[Entity::Food];
        assert_ne!(food, consts::FOOD_STYLE);
        assert!(food.add_modifier.contains(Modifier::BOLD));
        assert_eq!(palette.entities[Entity::Snake], consts::SNAKE_STYLE);
        assert_eq!(palette.border, consts::BORDER_STYLE);
        assert_eq!(palette.status, consts::STATUS_STYLE);
    }

    #[test]
    fn load_empty() {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("config.toml");
        fs_err::write(&path, "").unwrap();
        let cfg = Config::load(&path, false).unwrap();
        assert_eq!(cfg.tick_rate, TickRate::default());
        assert_eq!(cfg.log_file, None);
        assert_eq!(Palette::from(cfg.styles), Palette::default());
    }

    #[test]
    fn load_missing_allowed() {
        let tmpdir = tempdir().unwrap();
        let cfg = Config::load(&tmpdir.path().join("nonexistent.toml"), true).unwrap();
        assert_eq!(cfg.tick_rate, TickRate::default());
        assert_eq!(cfg.log_file, None);
    }

    #[test]
    fn load_missing_not_allowed() {
        let tmpdir = tempdir().unwrap();
        let r = Config::load(&tmpdir.path().join("nonexistent.toml"), false);
        assert!(matches!(r, Err(ConfigError::Read(_))));
    }

    #[test]
    fn discover_explicit_missing() {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("nonexistent.toml");
        let r = Config::discover(Some(&path));
        assert!(matches!(r, Err(ConfigError::Read(_))));
    }

    #[test]
    fn bad_tick_rate() {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("config.toml");
        fs_err::write(&path, "tick-rate = 0\n").unwrap();
        let r = Config::load(&path, false);
        assert!(matches!(r, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn bad_style() {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("config.toml");
        fs_err::write(&path, "[styles]\nsnake = \"not a color at all\"\n").unwrap();
        let r = Config::load(&path, false);
        assert!(matches!(r, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn unknown_key() {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("config.toml");
        fs_err::write(&path, "grid-width = 40\n").unwrap();
        let r = Config::load(&path, false);
        assert!(matches!(r, Err(ConfigError::Parse(_))));
    }
}
