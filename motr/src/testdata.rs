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

//! Synthetic `.mo` files for unit tests.

/// Lays out a `.mo` file the way `msgfmt` does: header, original table,
/// translation table, then the NUL terminated strings.
#[derive(Default)]
pub(crate) struct MoBuilder {
    messages: Vec<(Vec<u8>, Vec<u8>)>,
    big_endian: bool,
}

impl MoBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn big_endian(mut self) -> Self {
        self.big_endian = true;
        self
    }

    pub(crate) fn message(mut self, original: &str, translation: &str) -> Self {
        self.messages
            .push((original.as_bytes().to_vec(), translation.as_bytes().to_vec()));
        self
    }

    pub(crate) fn build(&self) -> Vec<u8> {
        let count = self.messages.len() as u32;
        let orig_table = 28;
        let trans_table = orig_table + 8 * count;
        let mut string_offset = trans_table + 8 * count;

        let mut orig = Vec::new();
        let mut trans = Vec::new();
        let mut strings = Vec::new();
        for (original, translation) in &self.messages {
            for (table, string) in [(&mut orig, original), (&mut trans, translation)] {
                table.push([string.len() as u32, string_offset]);
                strings.extend_from_slice(string);
                strings.push(0);
                string_offset += string.len() as u32 + 1;
            }
        }

        let words = [0x950412de, 0, count, orig_table, trans_table, 0, 0]
            .into_iter()
            .chain(orig.into_iter().flatten())
            .chain(trans.into_iter().flatten());
        let mut data: Vec<u8> = if self.big_endian {
            words.flat_map(u32::to_be_bytes).collect()
        } else {
            words.flat_map(u32::to_le_bytes).collect()
        };
        data.extend(strings);
        data
    }
}
