use crate::events::AppEvent;
use async_channel::Sender;
use derive_more::{Deref, From};
use directories::ProjectDirs;
use dpad::PadConfig;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use palette::Srgba;
use serde::Deserialize;
use serde_with::DeserializeFromStr;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// An sRGB color written as `#rrggbb` or `#rrggbbaa`.
#[derive(Debug, Clone, Copy, PartialEq, DeserializeFromStr, Deref, From)]
pub struct HexColor(Srgba<u8>);

impl HexColor {
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(Srgba::new(r, g, b, 255))
    }

    pub fn to_srgba(self) -> Srgba<f64> {
        self.0.into_format()
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b, a) = self.0.into_components();
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid hex color '{0}', expected #rrggbb or #rrggbbaa")]
pub struct ParseColorError(String);

impl FromStr for HexColor {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseColorError(s.to_string());
        let hex = s.trim().trim_start_matches('#');
        if !hex.is_ascii() || !matches!(hex.len(), 6 | 8) {
            return Err(err());
        }

        let channels = (0..hex.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&hex[i..i + 2], 16))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| err())?;

        let alpha = channels.get(3).copied().unwrap_or(255);
        Ok(Self(Srgba::new(channels[0], channels[1], channels[2], alpha)))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub background: HexColor,
    pub wedge: HexColor,
    pub wedge_selected: HexColor,
    pub glyph: HexColor,
    pub glyph_selected: HexColor,
    pub knob: HexColor,
    pub knob_selected: HexColor,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background: HexColor::rgb(0xff, 0x80, 0x00),
            wedge: HexColor::rgb(0x00, 0x00, 0x00),
            wedge_selected: HexColor::rgb(0xff, 0xff, 0xff),
            glyph: HexColor::rgb(0xff, 0xff, 0xff),
            glyph_selected: HexColor::rgb(0x00, 0x00, 0x00),
            knob: HexColor::rgb(0x00, 0x00, 0x00),
            knob_selected: HexColor::rgb(0x30, 0x30, 0x30),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub pad: PadConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Invalid pad: {0}")]
    Pad(#[from] dpad::ConfigurationError),
    #[error("Failed to resolve config path: {0}")]
    Io(#[from] std::io::Error),
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "dpad", "remote").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

/// The config file to use, made absolute so it compares equal to the paths
/// the file watcher reports.
pub fn resolve_config_path(explicit: Option<PathBuf>) -> Result<PathBuf, ConfigError> {
    let path = match explicit {
        Some(path) => path,
        None => get_config_path()?,
    };
    Ok(std::path::absolute(path)?)
}

/// Reads the file at `path` (if any) overlaid with `REMOTE_*` variables, e.g.
/// `REMOTE_PAD__WEDGE_COUNT=8`.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let s = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix("REMOTE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let config: Config = s.try_deserialize()?;
    config.pad.validate()?;
    Ok(config)
}

pub fn write_default_config(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(path, DEFAULT_CONFIG)?;
    }
    Ok(())
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

/// Whether a watcher event changed, created or removed the config file.
/// `config_path` must be absolute, as event paths are.
fn touches_config(event: &notify::Event, config_path: &Path) -> bool {
    matches!(
        event.kind,
        EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
    ) && event.paths.iter().any(|p| p == config_path)
}

/// Sends `ConfigReload` whenever the file at `config_path` changes. Expects a
/// path from [`resolve_config_path`].
pub async fn run_async_watcher(tx: Sender<AppEvent>, config_path: PathBuf) {
    let config_dir = match config_path.parent() {
        Some(p) => p.to_path_buf(),
        None => return,
    };

    if let Err(e) = fs_err::create_dir_all(&config_dir) {
        log::error!("Failed to create config directory for watching: {}", e);
        return;
    }

    let (bridge_tx, bridge_rx) = async_channel::unbounded();

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    ) {
        Ok(w) => w,
        Err(e) => {
            log::error!("Failed to create watcher: {}", e);
            return;
        }
    };

    if let Err(e) = watcher.watch(&config_dir, RecursiveMode::NonRecursive) {
        log::error!("Failed to watch config directory: {}", e);
        return;
    }

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) => {
                if touches_config(&event, &config_path)
                    && tx.send(AppEvent::ConfigReload).await.is_err()
                {
                    break;
                }
            }
            Err(e) => log::error!("Watch error: {}", e),
        }
    }
}
