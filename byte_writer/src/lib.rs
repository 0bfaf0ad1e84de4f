//! Little endian writer that streams into any seekable sink.
//!
//! Offsets are tracked on our side so a header can be reserved up front and patched once the
//! rest of the stream is known, without holding the whole output in memory.

use std::io::{self, Cursor, Seek, SeekFrom, Write};

pub struct ByteWriter<W: Write + Seek> {
    inner: W,
    offset: u64,
}

impl ByteWriter<Cursor<Vec<u8>>> {
    pub fn in_memory() -> Self {
        Self::new(Cursor::new(Vec::new()))
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.inner.into_inner()
    }
}

impl<W: Write + Seek> ByteWriter<W> {
    /// Starts writing at the current position of `inner`, which is treated as offset 0.
    pub fn new(inner: W) -> Self {
        Self { inner, offset: 0 }
    }

    fn offset(&mut self, offset: usize) {
        self.offset += offset as u64;
    }

    pub fn get_offset(&self) -> u64 {
        self.offset
    }

    pub fn into_inner(self) -> W {
        self.inner
    }

    /// Moves past `length` bytes without writing them.
    ///
    /// Whatever ends up there has to be written later with [`ByteWriter::replace`]. Sinks that
    /// support holes (files, cursors) zero fill the gap if nothing is written.
    pub fn skip(&mut self, length: u64) -> io::Result<()> {
        self.inner.seek(SeekFrom::Current(length as i64))?;
        self.offset += length;

        Ok(())
    }

    pub fn append_u32(&mut self, i: u32) -> io::Result<()> {
        self.inner.write_all(&i.to_le_bytes())?;
        self.offset(4);

        Ok(())
    }

    pub fn append_u8_slice(&mut self, i: &[u8]) -> io::Result<()> {
        self.inner.write_all(i)?;
        self.offset(i.len());

        Ok(())
    }

    /// Overwrites bytes at `start` and comes back to the end of the stream.
    pub fn replace(&mut self, start: u64, slice: &[u8]) -> io::Result<()> {
        let rewind = self.offset as i64 - start as i64;

        self.inner.seek(SeekFrom::Current(-rewind))?;
        self.inner.write_all(slice)?;

        // the patch might run past what was appended so far
        let patched_end = start + slice.len() as u64;
        if patched_end > self.offset {
            self.offset = patched_end;
        } else {
            self.inner
                .seek(SeekFrom::Current((self.offset - patched_end) as i64))?;
        }

        Ok(())
    }

    pub fn replace_with_u32(&mut self, start: u64, val: u32) -> io::Result<()> {
        self.replace(start, &val.to_le_bytes())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
