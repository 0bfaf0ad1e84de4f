use std::io::{self, Seek, Write};

use byte_writer::ByteWriter;

use crate::{
    constants::{SPRITE_AREA_HEADER_LENGTH, SPRITE_FILE_HEADER_LENGTH},
    error::SpriteAreaError,
    CompactSummary, SaveMode, SpriteArea, SpriteFileHeader,
};

trait WriteToWriter {
    fn write_to_writer<W: Write + Seek>(&self, writer: &mut ByteWriter<W>) -> io::Result<()>;
}

impl WriteToWriter for SpriteFileHeader {
    fn write_to_writer<W: Write + Seek>(&self, writer: &mut ByteWriter<W>) -> io::Result<()> {
        let Self {
            sprite_count,
            first,
            used,
        } = self;

        writer.append_u32(*sprite_count)?;
        writer.append_u32(*first)?;
        writer.append_u32(*used)?;

        Ok(())
    }
}

impl SpriteFileHeader {
    /// Header for a file holding `sprite_count` sprites that take `sprites_size` bytes in total.
    pub fn for_sprites(sprite_count: u32, sprites_size: u32) -> Self {
        Self {
            sprite_count,
            first: SPRITE_AREA_HEADER_LENGTH,
            used: SPRITE_AREA_HEADER_LENGTH + sprites_size,
        }
    }

    pub fn write_to_bytes(&self) -> io::Result<Vec<u8>> {
        let mut writer = ByteWriter::in_memory();

        self.write_to_writer(&mut writer)?;

        Ok(writer.into_bytes())
    }
}

impl SpriteArea<'_> {
    /// Writes a sprite file holding only the sprites whose name is not blanked out.
    ///
    /// The header is only known after the walk, so its space is skipped first and patched at the
    /// end. Sprites are copied as they are, in the order they are in memory.
    pub fn compact_to_writer<W: Write + Seek>(
        &self,
        writer: &mut ByteWriter<W>,
    ) -> Result<CompactSummary, SpriteAreaError> {
        let header_offset = writer.get_offset();
        writer.skip(SPRITE_FILE_HEADER_LENGTH as u64)?;

        let mut summary = CompactSummary::default();

        for record in self.records() {
            let record = record?;

            if !record.is_valid() {
                log::debug!(
                    "skipping deleted sprite {} at offset {:#x} ({} bytes)",
                    record.index,
                    record.offset,
                    record.size
                );

                summary.skipped_count += 1;
                continue;
            }

            // the walk only yields records inside the area
            let Some(bytes) = self.record_bytes(&record) else {
                continue;
            };

            writer.append_u8_slice(bytes)?;

            summary.valid_count += 1;
            summary.valid_size += record.size;
        }

        let header = SpriteFileHeader::for_sprites(summary.valid_count, summary.valid_size);
        writer.replace(header_offset, &header.write_to_bytes()?)?;

        log::trace!(
            "kept {} sprites ({} bytes), dropped {}",
            summary.valid_count,
            summary.valid_size,
            summary.skipped_count
        );

        Ok(summary)
    }

    pub fn compact_to_bytes(&self) -> Result<Vec<u8>, SpriteAreaError> {
        let mut writer = ByteWriter::in_memory();

        self.compact_to_writer(&mut writer)?;

        Ok(writer.into_bytes())
    }

    /// Writes the area without touching it, minus the size word.
    pub fn write_verbatim_to_writer<W: Write + Seek>(
        &self,
        writer: &mut ByteWriter<W>,
    ) -> Result<(), SpriteAreaError> {
        writer.append_u8_slice(self.saved_bytes()?)?;

        Ok(())
    }

    pub fn write_verbatim_to_bytes(&self) -> Result<Vec<u8>, SpriteAreaError> {
        let mut writer = ByteWriter::in_memory();

        self.write_verbatim_to_writer(&mut writer)?;

        Ok(writer.into_bytes())
    }

    pub fn write_to_writer<W: Write + Seek>(
        &self,
        writer: &mut ByteWriter<W>,
        mode: SaveMode,
    ) -> Result<(), SpriteAreaError> {
        match mode {
            SaveMode::Squash => self.compact_to_writer(writer).map(|_| ()),
            SaveMode::Verbatim => self.write_verbatim_to_writer(writer),
        }
    }
}

#[cfg(test)]
mod test {
    use std::io::{self, Cursor, Seek, SeekFrom, Write};

    use byte_writer::ByteWriter;
    use quickcheck_macros::quickcheck;

    use crate::{
        error::SpriteAreaError,
        test_utils::{area_bytes, TestSprite},
        SpriteArea, SpriteFile, SpriteFileHeader,
    };

    /// Accepts `limit` bytes and then reports the disk as full.
    struct FullDisk {
        inner: Cursor<Vec<u8>>,
        limit: usize,
    }

    impl Write for FullDisk {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.inner.get_ref().len() + buf.len() > self.limit {
                return Err(io::Error::new(io::ErrorKind::Other, "disc full"));
            }

            self.inner.write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Seek for FullDisk {
        fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
            self.inner.seek(pos)
        }
    }

    fn saved_sprites(bytes: &[u8]) -> Vec<Vec<u8>> {
        let file = SpriteFile::from_bytes(bytes).unwrap();

        file.records()
            .map(|record| file.record_bytes(&record.unwrap()).unwrap().to_vec())
            .collect()
    }

    #[test]
    fn all_valid() {
        let sprites = [
            TestSprite::new("one", 40),
            TestSprite::new("two", 52),
            TestSprite::new("three", 36),
        ];
        let bytes = area_bytes(&sprites);
        let area = SpriteArea::from_bytes(&bytes).unwrap();

        let out = area.compact_to_bytes().unwrap();
        let file = SpriteFile::from_bytes(&out).unwrap();

        assert_eq!(file.header.sprite_count, 3);
        assert_eq!(file.header.first, 16);
        assert_eq!(file.header.used, 16 + 128);
        assert_eq!(out.len(), 12 + 128);
        // nothing to drop, so the file is the area minus its size word
        assert_eq!(out, &bytes[4..]);
    }

    #[test]
    fn one_deleted() {
        let sprites = [
            TestSprite::new("one", 40),
            TestSprite::deleted(52),
            TestSprite::new("three", 36),
        ];
        let bytes = area_bytes(&sprites);
        let area = SpriteArea::from_bytes(&bytes).unwrap();

        let summary = area.compact_to_writer(&mut ByteWriter::in_memory()).unwrap();
        assert_eq!(summary.valid_count, 2);
        assert_eq!(summary.skipped_count, 1);
        assert_eq!(summary.valid_size, 76);

        let out = area.compact_to_bytes().unwrap();
        let file = SpriteFile::from_bytes(&out).unwrap();

        assert_eq!(file.header.sprite_count, 2);
        assert_eq!(file.header.used, 16 + 40 + 36);
        assert_eq!(out.len(), 12 + 40 + 36);
        assert_eq!(
            saved_sprites(&out),
            vec![sprites[0].bytes(0), sprites[2].bytes(2)]
        );
    }

    #[test]
    fn empty_pool() {
        let bytes = area_bytes(&[]);
        let area = SpriteArea::from_bytes(&bytes).unwrap();

        let out = area.compact_to_bytes().unwrap();

        assert_eq!(out, SpriteFileHeader::for_sprites(0, 0).write_to_bytes().unwrap());
        assert_eq!(out, [0, 0, 0, 0, 16, 0, 0, 0, 16, 0, 0, 0]);
    }

    #[test]
    fn everything_deleted() {
        let bytes = area_bytes(&[TestSprite::deleted(20), TestSprite::deleted(24)]);
        let area = SpriteArea::from_bytes(&bytes).unwrap();

        let out = area.compact_to_bytes().unwrap();

        assert_eq!(out.len(), 12);
        assert_eq!(SpriteFile::from_bytes(&out).unwrap().header.sprite_count, 0);
    }

    #[test]
    fn write_failure_stops_the_walk() {
        let bytes = area_bytes(&[
            TestSprite::new("one", 40),
            TestSprite::new("two", 40),
            TestSprite::new("three", 40),
        ]);
        let area = SpriteArea::from_bytes(&bytes).unwrap();

        let mut writer = ByteWriter::new(FullDisk {
            inner: Cursor::new(vec![]),
            limit: 12 + 40 + 20,
        });

        let res = area.compact_to_writer(&mut writer);

        assert!(matches!(res, Err(SpriteAreaError::IOError { .. })));
        // second sprite was refused, third never attempted
        assert_eq!(writer.get_offset(), 12 + 40);
    }

    #[test]
    fn verbatim_keeps_deleted_sprites() {
        let bytes = area_bytes(&[TestSprite::new("one", 40), TestSprite::deleted(52)]);
        let area = SpriteArea::from_bytes(&bytes).unwrap();

        let out = area.write_verbatim_to_bytes().unwrap();

        assert_eq!(out, &bytes[4..]);
        assert_eq!(SpriteFile::from_bytes(&out).unwrap().header.sprite_count, 2);
    }

    #[test]
    fn same_area_same_bytes() {
        let bytes = area_bytes(&[TestSprite::deleted(24), TestSprite::new("two", 52)]);
        let area = SpriteArea::from_bytes(&bytes).unwrap();

        assert_eq!(
            area.compact_to_bytes().unwrap(),
            area.compact_to_bytes().unwrap()
        );
    }

    #[quickcheck]
    fn keeps_exactly_the_named_sprites(sprites: Vec<(bool, u8)>) -> bool {
        let sprites = sprites
            .into_iter()
            .map(|(deleted, words)| {
                // at least the size word and the name
                let size = 16 + 4 * (words as u32 % 32);

                if deleted {
                    TestSprite::deleted(size)
                } else {
                    TestSprite::new("sprite", size)
                }
            })
            .collect::<Vec<_>>();

        let bytes = area_bytes(&sprites);
        let area = SpriteArea::from_bytes(&bytes).unwrap();
        let out = area.compact_to_bytes().unwrap();
        let file = SpriteFile::from_bytes(&out).unwrap();

        let expected = sprites
            .iter()
            .enumerate()
            .filter(|(_, sprite)| sprite.bytes(0)[4] != 0)
            .map(|(index, sprite)| sprite.bytes(index as u8))
            .collect::<Vec<_>>();
        let expected_size = expected.iter().map(|sprite| sprite.len() as u32).sum::<u32>();

        file.header.sprite_count == expected.len() as u32
            && file.header.used == 16 + expected_size
            && out.len() as u32 == 12 + expected_size
            && saved_sprites(&out) == expected
    }
}
