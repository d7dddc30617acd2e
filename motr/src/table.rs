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

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Cursor, ErrorKind, Read, Seek};
use std::path::Path;
use std::sync::Arc;

use crate::mo_file::MoReader;
use crate::MoError;

/// The translated forms of one message: the singular first, then each plural form.
pub type Forms = Arc<[Box<[u8]>]>;

/// Lookup table built from one `.mo` file.
///
/// Original strings are split on NUL, so a plural message `"file\0files"`
/// is reachable through both `"file"` and `"files"`. All the keys of one
/// message share the same [`Forms`]. When two messages produce the same key,
/// the one that comes later in the file wins.
///
/// Keys and forms are kept as raw bytes. The file format does not declare an
/// encoding; [`crate::MoCatalog`] reads them as UTF-8.
#[derive(Debug, Clone, Default)]
pub struct TranslationTable {
    entries: HashMap<Box<[u8]>, Forms>,
}

impl TranslationTable {
    /// Parses the `.mo` file at `path`.
    ///
    /// The file is closed before this returns, whether parsing succeeded or not.
    pub fn from_path(path: &Path) -> Result<Self, MoError> {
        let file = File::open(path).map_err(|error| match error.kind() {
            ErrorKind::NotFound => MoError::FileNotFound(path.to_owned()),
            _ => MoError::Io(error),
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parses the `.mo` file contained in `data`.
    pub fn from_bytes(data: &[u8]) -> Result<Self, MoError> {
        Self::from_reader(Cursor::new(data))
    }

    /// Parses a `.mo` file from any seekable reader.
    ///
    /// Either the whole file is decoded, or an error is returned; there is no
    /// partially filled table.
    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self, MoError> {
        let mut mo = MoReader::new(reader)?;
        let header = mo.read_header()?;
        let originals = mo.read_offset_table(header.orig_table_offset, header.string_count)?;
        let translations = mo.read_offset_table(header.trans_table_offset, header.string_count)?;

        let mut entries = HashMap::with_capacity(originals.len());
        for (original, translation) in originals.into_iter().zip(translations) {
            let original = mo.read_entry(original)?;
            let translation = mo.read_entry(translation)?;

            let forms: Forms = split_forms(&translation).collect();
            for source in split_forms(&original) {
                entries.insert(source, Arc::clone(&forms));
            }
        }

        Ok(Self { entries })
    }

    /// Returns the translated forms of `key`.
    pub fn get(&self, key: &[u8]) -> Option<&Forms> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &[u8]) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.entries.keys().map(|key| &**key)
    }
}

fn split_forms(data: &[u8]) -> impl Iterator<Item = Box<[u8]>> + '_ {
    data.split(|&byte| byte == 0).map(Box::from)
}
