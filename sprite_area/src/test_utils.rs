//! Builds sprite areas for tests.

use crate::constants::{SPRITE_AREA_HEADER_LENGTH, SPRITE_NAME_LENGTH};

#[derive(Debug, Clone, Copy)]
pub struct TestSprite {
    name: &'static str,
    deleted: bool,
    pub size: u32,
}

impl TestSprite {
    pub fn new(name: &'static str, size: u32) -> Self {
        Self {
            name,
            deleted: false,
            size,
        }
    }

    /// Name blanked at the first byte only, the way the RAM pool leaves them.
    pub fn deleted(size: u32) -> Self {
        Self {
            name: "xdeleted",
            deleted: true,
            size,
        }
    }

    pub fn bytes(&self, seed: u8) -> Vec<u8> {
        let mut bytes = self.size.to_le_bytes().to_vec();

        let mut name = [0u8; SPRITE_NAME_LENGTH];
        name[..self.name.len()].copy_from_slice(self.name.as_bytes());
        if self.deleted {
            name[0] = 0;
        }
        bytes.extend(name);

        let payload = self.size as usize - bytes.len();
        bytes.extend((0..payload).map(|i| seed.wrapping_mul(31).wrapping_add(i as u8)));

        bytes
    }
}

/// Area with no free space after the last sprite.
pub fn area_bytes(sprites: &[TestSprite]) -> Vec<u8> {
    let records = sprites
        .iter()
        .enumerate()
        .flat_map(|(index, sprite)| sprite.bytes(index as u8))
        .collect::<Vec<u8>>();

    let used = SPRITE_AREA_HEADER_LENGTH + records.len() as u32;

    let mut bytes = vec![];
    bytes.extend(used.to_le_bytes());
    bytes.extend((sprites.len() as u32).to_le_bytes());
    bytes.extend(SPRITE_AREA_HEADER_LENGTH.to_le_bytes());
    bytes.extend(used.to_le_bytes());
    bytes.extend(records);

    bytes
}
