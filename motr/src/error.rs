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

use std::path::PathBuf;

/// Error returned when a `.mo` catalog cannot be decoded.
///
/// [`crate::MoCatalog`] never surfaces this to lookups: a catalog that fails
/// to load behaves like an empty one. The error stays available through
/// [`crate::MoCatalog::load_error`], and the strict constructors of
/// [`crate::TranslationTable`] return it directly.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum MoError {
    /// The catalog file does not exist.
    #[error("catalog file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    /// The file is shorter than its header or tables require.
    #[error("file is too small: {size} bytes, at least {required} required")]
    TooSmall {
        /// Actual size of the file.
        size: u64,
        /// Number of bytes the structure being read needs.
        required: u64,
    },
    /// The magic number is not one of the two `.mo` magic numbers.
    #[error("not a gettext catalog (magic number 0x{0:08x})")]
    InvalidFormat(u32),
    /// The file format revision is not 0.
    #[error("unsupported catalog revision {0}")]
    UnsupportedVersion(u32),
    /// A table or string offset points past the end of the file.
    #[error("offset {offset} is outside of the file ({size} bytes)")]
    SeekError {
        /// The offset that was requested.
        offset: u64,
        /// Actual size of the file.
        size: u64,
    },
    /// Any other I/O failure while reading the catalog.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
