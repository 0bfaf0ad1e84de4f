use crate::{
    constants::SPRITE_RECORD_MIN_LENGTH,
    error::{CorruptRecord, SpriteAreaError},
    parser::parse_record_prefix,
    SpriteRecord,
};

/// Steps through `count` sprites starting at `start`, using each sprite's own size to find the
/// next one. Deleted sprites are yielded as well; their size is trusted for navigation the same
/// way.
///
/// Every step is checked against the walked bytes. The first corrupt sprite ends the walk.
#[derive(Debug, Clone)]
pub struct Records<'a> {
    bytes: &'a [u8],
    header_length: usize,
    cursor: usize,
    index: u32,
    remaining: u32,
    done: bool,
}

impl<'a> Records<'a> {
    pub(crate) fn new(bytes: &'a [u8], header_length: usize, start: usize, count: u32) -> Self {
        Self {
            bytes,
            header_length,
            cursor: start,
            index: 0,
            remaining: count,
            done: false,
        }
    }

    fn corrupt(&self, source: CorruptRecord) -> SpriteAreaError {
        SpriteAreaError::CorruptRecord {
            index: self.index,
            offset: self.cursor,
            source,
        }
    }

    fn step(&mut self) -> Result<SpriteRecord, SpriteAreaError> {
        let offset = self.cursor;

        if offset < self.header_length {
            return self.corrupt(CorruptRecord::InsideHeader).to_result();
        }

        let Some(prefix) = self.bytes.get(offset..).filter(|rest| !rest.is_empty()) else {
            return self.corrupt(CorruptRecord::OutOfBounds).to_result();
        };

        let Ok((_, (size, name))) = parse_record_prefix(prefix) else {
            return self.corrupt(CorruptRecord::TruncatedHeader).to_result();
        };

        // a zero size would never move the cursor
        if size < SPRITE_RECORD_MIN_LENGTH {
            return self.corrupt(CorruptRecord::Undersized { size }).to_result();
        }

        let Some(next) = offset
            .checked_add(size as usize)
            .filter(|next| *next <= self.bytes.len())
        else {
            return self.corrupt(CorruptRecord::Overrun { size }).to_result();
        };

        let record = SpriteRecord {
            index: self.index,
            offset,
            size,
            name,
        };

        self.cursor = next;
        self.index += 1;
        self.remaining -= 1;

        Ok(record)
    }
}

impl Iterator for Records<'_> {
    type Item = Result<SpriteRecord, SpriteAreaError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.remaining == 0 {
            return None;
        }

        let res = self.step();

        if res.is_err() {
            self.done = true;
        }

        Some(res)
    }
}
