use std::{ffi::OsStr, path::Path};

use crate::{
    constants::{SPRITE_AREA_HEADER_LENGTH, SPRITE_FILE_HEADER_LENGTH},
    error::SpriteAreaError,
    parser::{parse_area_header, parse_file_header},
    records::Records,
    SpriteArea, SpriteFile, SpriteRecord,
};

impl<'a> SpriteArea<'a> {
    /// `bytes` starts at the area size word, as the area sits in memory.
    pub fn from_bytes(bytes: &'a [u8]) -> Result<Self, SpriteAreaError> {
        if bytes.len() > u32::MAX as usize {
            return SpriteAreaError::TooLarge {
                length: bytes.len(),
            }
            .to_result();
        }

        let Ok((_, header)) = parse_area_header(bytes) else {
            return SpriteAreaError::ParseHeader.to_result();
        };

        Ok(Self { header, bytes })
    }

    pub fn records(&self) -> Records<'a> {
        Records::new(
            self.bytes,
            SPRITE_AREA_HEADER_LENGTH as usize,
            self.header.first as usize,
            self.header.sprite_count,
        )
    }

    /// The whole sprite, header and payload. `None` if `record` was not walked from this area.
    pub fn record_bytes(&self, record: &SpriteRecord) -> Option<&'a [u8]> {
        self.bytes.get(record.range())
    }

    /// From `sprite_count` up to `used`, which is what the host itself saves.
    pub fn saved_bytes(&self) -> Result<&'a [u8], SpriteAreaError> {
        let used = self.header.used;

        if used < SPRITE_AREA_HEADER_LENGTH || used as usize > self.bytes.len() {
            return SpriteAreaError::UsedOutOfBounds {
                used,
                length: self.bytes.len(),
            }
            .to_result();
        }

        Ok(&self.bytes[4..used as usize])
    }
}

impl<'a> SpriteFile<'a> {
    pub fn from_bytes(bytes: &'a [u8]) -> Result<Self, SpriteAreaError> {
        let Ok((_, header)) = parse_file_header(bytes) else {
            return SpriteAreaError::ParseHeader.to_result();
        };

        Ok(Self { header, bytes })
    }

    pub fn records(&self) -> Records<'a> {
        // file offsets still count the size word that was not saved
        Records::new(
            self.bytes,
            SPRITE_FILE_HEADER_LENGTH as usize,
            self.header.first.saturating_sub(4) as usize,
            self.header.sprite_count,
        )
    }

    pub fn record_bytes(&self, record: &SpriteRecord) -> Option<&'a [u8]> {
        self.bytes.get(record.range())
    }
}

/// Reads a whole file so it can be viewed with [`SpriteArea::from_bytes`] or
/// [`SpriteFile::from_bytes`].
pub fn read_bytes(path: impl AsRef<OsStr> + AsRef<Path>) -> Result<Vec<u8>, SpriteAreaError> {
    let bytes = std::fs::read(path).map_err(|op| SpriteAreaError::IOError { source: op })?;

    Ok(bytes)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_utils::{area_bytes, TestSprite};

    #[test]
    fn header_too_short() {
        assert!(matches!(
            SpriteArea::from_bytes(&[0u8; 15]),
            Err(SpriteAreaError::ParseHeader)
        ));
        assert!(matches!(
            SpriteFile::from_bytes(&[0u8; 11]),
            Err(SpriteAreaError::ParseHeader)
        ));
    }

    #[test]
    fn empty_area() {
        let bytes = area_bytes(&[]);
        let area = SpriteArea::from_bytes(&bytes).unwrap();

        assert_eq!(area.header.sprite_count, 0);
        assert_eq!(area.records().count(), 0);
        assert_eq!(area.saved_bytes().unwrap().len(), 12);
    }

    #[test]
    fn record_bytes_are_the_whole_sprite() {
        let sprite = TestSprite::new("arrow", 44);
        let bytes = area_bytes(&[TestSprite::deleted(20), sprite]);
        let area = SpriteArea::from_bytes(&bytes).unwrap();

        let record = area.records().nth(1).unwrap().unwrap();

        assert_eq!(area.record_bytes(&record), Some(&sprite.bytes(1)[..]));
    }

    #[test]
    fn record_from_a_bigger_area() {
        let big = area_bytes(&[TestSprite::new("arrow", 44), TestSprite::new("cross", 44)]);
        let small = area_bytes(&[TestSprite::new("arrow", 44)]);

        let big = SpriteArea::from_bytes(&big).unwrap();
        let small = SpriteArea::from_bytes(&small).unwrap();

        let record = big.records().nth(1).unwrap().unwrap();

        assert_eq!(small.record_bytes(&record), None);

        let huge = SpriteRecord {
            offset: usize::MAX,
            ..record
        };
        assert_eq!(big.record_bytes(&huge), None);
    }

    #[test]
    fn used_past_the_end() {
        let mut bytes = area_bytes(&[TestSprite::new("arrow", 44)]);
        bytes[12..16].copy_from_slice(&0x100u32.to_le_bytes());

        let area = SpriteArea::from_bytes(&bytes).unwrap();

        assert!(matches!(
            area.saved_bytes(),
            Err(SpriteAreaError::UsedOutOfBounds { used: 0x100, .. })
        ));
    }
}
