//! Parses config file
use std::{
    env,
    fs::OpenOptions,
    io::Read,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::pools::{SpritePool, KNOWN_WIMP_VERSION};

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Version of the window manager the pool images were taken from.
    pub wimp_version: u32,
    /// Drop deleted sprites when saving.
    pub squash: bool,
    pub pools: PoolImages,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wimp_version: KNOWN_WIMP_VERSION,
            squash: true,
            pools: PoolImages::default(),
        }
    }
}

/// Memory images of each sprite pool.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PoolImages {
    pub rom: Option<PathBuf>,
    pub ram: Option<PathBuf>,
    pub tool: Option<PathBuf>,
}

impl PoolImages {
    pub fn get(&self, pool: SpritePool) -> Option<&Path> {
        match pool {
            SpritePool::Rom => self.rom.as_deref(),
            SpritePool::Ram => self.ram.as_deref(),
            SpritePool::Tool => self.tool.as_deref(),
        }
    }

    fn relative_to(self, root: &Path) -> Self {
        let resolve = |path: Option<PathBuf>| {
            path.map(|path| {
                if path.is_relative() {
                    root.join(path)
                } else {
                    path
                }
            })
        };

        Self {
            rom: resolve(self.rom),
            ram: resolve(self.ram),
            tool: resolve(self.tool),
        }
    }
}

pub static CONFIG_FILE_NAME: &str = "config.toml";

/// Parse `config.toml` in the same folder as the binary
///
/// Having no config file is fine, defaults are used.
pub fn parse_config() -> eyre::Result<Config> {
    let path = match env::current_exe() {
        Ok(path) => path
            .parent()
            .map(|parent| parent.join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME)),
        Err(_) => PathBuf::from(CONFIG_FILE_NAME),
    };

    if !path.exists() {
        log::debug!("no config at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    parse_config_from_file(path.as_path())
}

pub fn parse_config_from_file(path: &Path) -> eyre::Result<Config> {
    let mut file = OpenOptions::new().read(true).open(path.as_os_str())?;
    let mut buffer = String::new();

    file.read_to_string(&mut buffer)?;

    let root = path.parent().unwrap_or(Path::new("."));

    parse_config_from_str(&buffer, root)
}

/// Relative pool image paths are taken from `root`.
pub fn parse_config_from_str(s: &str, root: &Path) -> eyre::Result<Config> {
    let config: Config = toml::from_str(s)?;

    Ok(Config {
        pools: config.pools.relative_to(root),
        ..config
    })
}
