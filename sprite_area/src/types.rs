use std::{
    fmt::{self, Write},
    ops::Range,
};

use crate::constants::SPRITE_NAME_LENGTH;

/// Sprite area header as held in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteAreaHeader {
    /// Size of the whole area block. Not part of a saved file.
    pub size: u32,
    pub sprite_count: u32,
    /// Offset of the first sprite from the start of the area.
    pub first: u32,
    /// Offset of the first free byte from the start of the area.
    pub used: u32,
}

/// Sprite area header as stored at the start of a sprite file.
///
/// Offsets still count the area size word that is left out of the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteFileHeader {
    pub sprite_count: u32,
    pub first: u32,
    pub used: u32,
}

// [u8; 12], null padded
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SpriteName(pub [u8; SPRITE_NAME_LENGTH]);

impl SpriteName {
    /// Some desktop versions leave deleted sprites in their RAM pool with the name blanked out.
    pub fn is_tombstone(&self) -> bool {
        self.0[0] == 0
    }
}

impl fmt::Display for SpriteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.iter().take_while(|c| **c != 0) {
            f.write_char(*c as char)?;
        }

        Ok(())
    }
}

impl fmt::Debug for SpriteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SpriteName({:?})", self.to_string())
    }
}

/// A sprite as found while walking an area. Points into the walked bytes, does not own them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteRecord {
    /// Position in the walk, counting deleted sprites too.
    pub index: u32,
    pub offset: usize,
    pub size: u32,
    pub name: SpriteName,
}

impl SpriteRecord {
    pub fn is_valid(&self) -> bool {
        !self.name.is_tombstone()
    }

    pub fn range(&self) -> Range<usize> {
        self.offset..self.offset.saturating_add(self.size as usize)
    }
}

/// Borrowed view of a sprite area in memory, starting at its size word.
#[derive(Debug, Clone, Copy)]
pub struct SpriteArea<'a> {
    pub header: SpriteAreaHeader,
    pub(crate) bytes: &'a [u8],
}

/// Borrowed view of a saved sprite file.
#[derive(Debug, Clone, Copy)]
pub struct SpriteFile<'a> {
    pub header: SpriteFileHeader,
    pub(crate) bytes: &'a [u8],
}

/// What a squashing save did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompactSummary {
    pub valid_count: u32,
    pub skipped_count: u32,
    /// Sum of the sizes of the sprites that were kept.
    pub valid_size: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SaveMode {
    /// Drop deleted sprites and rebuild the header.
    #[default]
    Squash,
    /// Save the area exactly as it is held in memory.
    Verbatim,
}
