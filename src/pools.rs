use std::fmt;

use clap::ValueEnum;
use eyre::WrapErr;
use serde::Deserialize;

use crate::{config::Config, err};

/// Latest window manager version this was written against.
pub const KNOWN_WIMP_VERSION: u32 = 321;
/// Tool sprites cannot be located on anything older.
pub const MIN_TOOL_SPRITES_WIMP_VERSION: u32 = 321;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpritePool {
    /// Sprites built into the ROM
    Rom,
    /// Sprites loaded into RAM at run time
    Ram,
    /// Window furniture (tool sprites)
    Tool,
}

impl fmt::Display for SpritePool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SpritePool::Rom => "ROM",
            SpritePool::Ram => "RAM",
            SpritePool::Tool => "tool",
        };

        write!(f, "{name}")
    }
}

/// Somewhere the bytes of a sprite pool can be read from, starting at the area size word.
pub trait PoolSource {
    fn sprite_area(&self, pool: SpritePool) -> eyre::Result<Vec<u8>>;
}

/// Pools captured as memory image files, as listed in the config.
pub struct DumpPools<'a> {
    config: &'a Config,
}

impl<'a> DumpPools<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }
}

impl PoolSource for DumpPools<'_> {
    fn sprite_area(&self, pool: SpritePool) -> eyre::Result<Vec<u8>> {
        if pool == SpritePool::Tool && self.config.wimp_version < MIN_TOOL_SPRITES_WIMP_VERSION {
            return err!(
                "Tool sprites need window manager {} or later (have {})",
                MIN_TOOL_SPRITES_WIMP_VERSION,
                self.config.wimp_version
            );
        }

        let Some(path) = self.config.pools.get(pool) else {
            return err!("No memory image configured for the {} sprite pool", pool);
        };

        log::debug!("reading {} sprite pool from {}", pool, path.display());

        sprite_area::read_bytes(path)
            .wrap_err_with(|| format!("Cannot read {} sprite pool", pool))
    }
}
