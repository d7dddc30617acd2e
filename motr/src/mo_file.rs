/* Copyright (C) 2018 Olivier Goffart <ogoffart@woboq.com>

Permission is hereby granted, free of charge, to any person obtaining a copy of this software and
associated documentation files (the "Software"), to deal in the Software without restriction,
including without limitation the rights to use, copy, modify, merge, publish, distribute, sublicense,
and/or sell copies of the Software, and to permit persons to whom the Software is furnished to do so,
subject to the following conditions:

The above copyright notice and this permission notice shall be included in all copies or substantial
portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR IMPLIED, INCLUDING BUT
NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES
OR OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.
*/

//! Low level reader for the GNU `.mo` binary format.
//!
//! A `.mo` file starts with a 28 byte header, followed (at offsets given in the
//! header) by two tables of `(length, offset)` records: one for the original
//! strings and one for their translations. Records at the same index belong
//! together. The strings themselves live anywhere else in the file.

use std::io::{Read, Seek, SeekFrom};

use byteorder::{BigEndian, LittleEndian, ReadBytesExt};

use crate::MoError;

/// Magic number of a file written in little-endian byte order.
pub const MAGIC_LE: u32 = 0x950412de;

/// Magic number of a file written in big-endian byte order, as read in
/// little-endian order.
pub const MAGIC_BE: u32 = 0xde120495;

/// Byte order of the words in a `.mo` file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
    Little,
    Big,
}

impl Endianness {
    fn read_u32<R: Read>(self, reader: &mut R) -> std::io::Result<u32> {
        match self {
            Endianness::Little => reader.read_u32::<LittleEndian>(),
            Endianness::Big => reader.read_u32::<BigEndian>(),
        }
    }
}

/// The fixed header at the start of every `.mo` file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawHeader {
    /// Magic number, as read in little-endian order.
    pub magic: u32,
    /// File format revision, always 0.
    pub revision: u32,
    /// Number of entries in each of the two string tables.
    pub string_count: u32,
    /// Offset of the table describing the original strings.
    pub orig_table_offset: u32,
    /// Offset of the table describing the translated strings.
    pub trans_table_offset: u32,
    /// Size of the hash table. Not used for lookups.
    pub hash_table_size: u32,
    /// Offset of the hash table. Not used for lookups.
    pub hash_table_offset: u32,
}

impl RawHeader {
    /// Size of the header in bytes.
    pub const SIZE: u64 = 28;

    /// The byte order of the file this header was read from.
    pub fn endianness(&self) -> Endianness {
        if self.magic == MAGIC_BE {
            Endianness::Big
        } else {
            Endianness::Little
        }
    }
}

/// One `(length, offset)` record of a string table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableEntry {
    /// Length of the string in bytes, not counting the trailing NUL.
    pub length: u32,
    /// Absolute offset of the string in the file.
    pub offset: u32,
}

impl TableEntry {
    /// Size of a record in bytes.
    pub const SIZE: u64 = 8;
}

/// Reads the structures of a `.mo` file from a seekable byte source.
///
/// The size of the source is determined once, up front, and every read is
/// checked against it before it happens.
pub struct MoReader<R> {
    reader: R,
    size: u64,
    endianness: Endianness,
}

impl<R: Read + Seek> MoReader<R> {
    pub fn new(mut reader: R) -> Result<Self, MoError> {
        let size = reader.seek(SeekFrom::End(0))?;
        Ok(Self {
            reader,
            size,
            endianness: Endianness::Little,
        })
    }

    /// Byte order detected by [`Self::read_header`].
    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// Reads and validates the header.
    ///
    /// This also selects the byte order used by every later read.
    pub fn read_header(&mut self) -> Result<RawHeader, MoError> {
        self.require(RawHeader::SIZE)?;
        self.seek(0)?;

        let magic = self.reader.read_u32::<LittleEndian>()?;
        self.endianness = match magic {
            MAGIC_LE => Endianness::Little,
            MAGIC_BE => Endianness::Big,
            _ => return Err(MoError::InvalidFormat(magic)),
        };
        let revision = self.read_u32()?;
        if revision != 0 {
            return Err(MoError::UnsupportedVersion(revision));
        }

        Ok(RawHeader {
            magic,
            revision,
            string_count: self.read_u32()?,
            orig_table_offset: self.read_u32()?,
            trans_table_offset: self.read_u32()?,
            hash_table_size: self.read_u32()?,
            hash_table_offset: self.read_u32()?,
        })
    }

    /// Reads `count` records of the string table starting at `offset`.
    ///
    /// The records are returned in file order, which is what pairs an
    /// original string with its translation.
    pub fn read_offset_table(
        &mut self,
        offset: u32,
        count: u32,
    ) -> Result<Vec<TableEntry>, MoError> {
        let table_size = TableEntry::SIZE * u64::from(count);
        self.require(RawHeader::SIZE + table_size)?;
        self.seek(offset.into())?;
        self.require(u64::from(offset) + table_size)?;

        let mut table = Vec::with_capacity(count as usize);
        for _ in 0..count {
            table.push(TableEntry {
                length: self.read_u32()?,
                offset: self.read_u32()?,
            });
        }
        Ok(table)
    }

    /// Reads the raw bytes a table record points to.
    pub fn read_entry(&mut self, entry: TableEntry) -> Result<Vec<u8>, MoError> {
        self.seek(entry.offset.into())?;
        if entry.length == 0 {
            return Ok(Vec::new());
        }
        self.require(u64::from(entry.offset) + u64::from(entry.length))?;

        let mut data = vec![0; entry.length as usize];
        self.reader.read_exact(&mut data)?;
        Ok(data)
    }

    fn read_u32(&mut self) -> Result<u32, MoError> {
        Ok(self.endianness.read_u32(&mut self.reader)?)
    }

    fn seek(&mut self, offset: u64) -> Result<(), MoError> {
        if offset > self.size {
            return Err(MoError::SeekError {
                offset,
                size: self.size,
            });
        }
        self.reader.seek(SeekFrom::Start(offset))?;
        Ok(())
    }

    fn require(&self, required: u64) -> Result<(), MoError> {
        if self.size < required {
            return Err(MoError::TooSmall {
                size: self.size,
                required,
            });
        }
        Ok(())
    }
}
