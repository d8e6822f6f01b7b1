//! Bounds-checked little-endian cursor shared by the binary decoders.

use crate::error::{MeshError, Result};
use byteorder::{LittleEndian, ReadBytesExt};
use std::io::Cursor;

pub struct ByteReader<'a> {
    cursor: Cursor<&'a [u8]>,
}

impl<'a> ByteReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(data),
        }
    }

    /// Starts reading at `offset`. Offsets past the end are allowed; the first read fails.
    pub fn at(data: &'a [u8], offset: usize) -> Self {
        let mut reader = Self::new(data);
        reader.cursor.set_position(offset as u64);
        reader
    }

    pub fn position(&self) -> usize {
        self.cursor.position() as usize
    }

    pub fn data_len(&self) -> usize {
        self.cursor.get_ref().len()
    }

    pub fn remaining(&self) -> usize {
        self.data_len().saturating_sub(self.position())
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Advances by `count` bytes and returns them.
    pub fn take(&mut self, count: usize) -> Result<&'a [u8]> {
        let start = self.position();
        if count > self.remaining() {
            return Err(self.truncated(count));
        }
        let data: &'a [u8] = *self.cursor.get_ref();
        self.cursor.set_position((start + count) as u64);
        Ok(&data[start..start + count])
    }

    pub fn skip(&mut self, count: usize) -> Result<()> {
        self.take(count).map(|_| ())
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        let start = self.position();
        self.cursor.read_u8().map_err(|_| self.truncated_from(start, 1))
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        let start = self.position();
        self.cursor.read_i8().map_err(|_| self.truncated_from(start, 1))
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        let start = self.position();
        self.cursor
            .read_u16::<LittleEndian>()
            .map_err(|_| self.truncated_from(start, 2))
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        let start = self.position();
        self.cursor
            .read_u32::<LittleEndian>()
            .map_err(|_| self.truncated_from(start, 4))
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        let start = self.position();
        self.cursor
            .read_f32::<LittleEndian>()
            .map_err(|_| self.truncated_from(start, 4))
    }

    pub fn read_vec3(&mut self) -> Result<[f32; 3]> {
        Ok([self.read_f32()?, self.read_f32()?, self.read_f32()?])
    }

    fn truncated(&self, wanted: usize) -> MeshError {
        self.truncated_from(self.position(), wanted)
    }

    // byteorder may consume a partial value before failing, so the error
    // reports the position the read started from.
    fn truncated_from(&self, start: usize, wanted: usize) -> MeshError {
        MeshError::MalformedRecord(format!(
            "unexpected end of data: wanted {} bytes at offset {}, buffer is {} bytes",
            wanted,
            start,
            self.data_len()
        ))
    }
}
