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

use std::borrow::Cow;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::{catalog_path, Metadata, MoError, TranslationTable};

/// Use this type to load `.mo` files directly in your application for translations.
///
/// Construct the `MoCatalog` from a directory, domain and locale via [`Self::new`],
/// from a path via [`Self::from_path`] or from a vec of data via [`Self::from_vec_u8`].
///
/// Nothing is read until the first lookup. The file is then parsed once and
/// the resulting [`TranslationTable`] is kept for the lifetime of the catalog;
/// concurrent first lookups from several threads still parse only once.
///
/// A catalog that is missing or cannot be decoded behaves like an empty one:
/// every lookup returns its untranslated input. This is indistinguishable from
/// a message that has no translation, so the failure is logged with
/// `log::warn!` (missing files only with `log::debug!`) and can be inspected
/// with [`Self::load_error`].
///
/// `MoCatalog` implements the [`crate::Translator`] trait.
pub struct MoCatalog {
    source: Source,
    loaded: OnceLock<Loaded>,
}

enum Source {
    Path(PathBuf),
    Bytes(Vec<u8>),
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Path(path) => write!(f, "{}", path.display()),
            Source::Bytes(data) => write!(f, "<{} bytes in memory>", data.len()),
        }
    }
}

struct Loaded {
    table: TranslationTable,
    error: Option<MoError>,
}

impl MoCatalog {
    /// Catalog for `domain` in `locale`, read from
    /// `{directory}/{locale}/LC_MESSAGES/{domain}.mo`.
    pub fn new(directory: impl AsRef<Path>, domain: &str, locale: &str) -> Self {
        Self::from_path(catalog_path(directory, domain, locale))
    }

    /// Catalog read from the `.mo` file at `path`.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self::with_source(Source::Path(path.into()))
    }

    /// Catalog read from `data`, which must be valid `.mo` file contents.
    pub fn from_vec_u8(data: Vec<u8>) -> Self {
        Self::with_source(Source::Bytes(data))
    }

    fn with_source(source: Source) -> Self {
        Self {
            source,
            loaded: OnceLock::new(),
        }
    }

    /// The file this catalog reads, if it was constructed from a path.
    pub fn path(&self) -> Option<&Path> {
        match &self.source {
            Source::Path(path) => Some(path),
            Source::Bytes(_) => None,
        }
    }

    /// The lookup table, parsing the catalog if that did not happen yet.
    pub fn table(&self) -> &TranslationTable {
        &self.loaded().table
    }

    /// Why the catalog could not be loaded, if it could not.
    pub fn load_error(&self) -> Option<&MoError> {
        self.loaded().error.as_ref()
    }

    /// Number of distinct lookup keys.
    pub fn len(&self) -> usize {
        self.table().len()
    }

    pub fn is_empty(&self) -> bool {
        self.table().is_empty()
    }

    /// The parsed catalog header. Empty if the catalog has none.
    pub fn metadata(&self) -> Metadata {
        self.table()
            .get(b"")
            .and_then(|forms| forms.first())
            .map(|header| Metadata::from_header(&String::from_utf8_lossy(header)))
            .unwrap_or_default()
    }

    /// Returns the translation of `message`, or `message` itself if there is none.
    ///
    /// For a plural message this is its first form.
    pub fn translate<'a>(&'a self, message: &'a str) -> Cow<'a, str> {
        self.table()
            .get(message.as_bytes())
            .and_then(|forms| forms.first())
            .map_or(Cow::Borrowed(message), |form| String::from_utf8_lossy(form))
    }

    /// Returns the `count`-th form (1-based) of the translation of `singular`.
    ///
    /// A `count` lower than 1 or higher than the number of forms selects the
    /// last form. If `singular` has no translation, `singular` is returned when
    /// `count` is 1 and `plural` otherwise.
    pub fn translate_plural<'a>(
        &'a self,
        singular: &'a str,
        plural: &'a str,
        count: i64,
    ) -> Cow<'a, str> {
        match self.table().get(singular.as_bytes()) {
            Some(forms) => {
                let form = usize::try_from(count)
                    .ok()
                    .filter(|&n| n >= 1)
                    .and_then(|n| forms.get(n - 1))
                    .or_else(|| forms.last());
                match form {
                    Some(form) => String::from_utf8_lossy(form),
                    None => Cow::Borrowed(singular),
                }
            }
            None if count == 1 => Cow::Borrowed(singular),
            None => Cow::Borrowed(plural),
        }
    }

    fn loaded(&self) -> &Loaded {
        self.loaded.get_or_init(|| self.load())
    }

    fn load(&self) -> Loaded {
        let result = match &self.source {
            Source::Path(path) => TranslationTable::from_path(path),
            Source::Bytes(data) => TranslationTable::from_bytes(data),
        };
        match result {
            Ok(table) => {
                log::debug!("loaded {} messages from {}", table.len(), self.source);
                Loaded { table, error: None }
            }
            Err(error) => {
                if let MoError::FileNotFound(_) = error {
                    log::debug!("no catalog at {}", self.source);
                } else {
                    log::warn!("ignoring catalog {}: {}", self.source, error);
                }
                Loaded {
                    table: TranslationTable::default(),
                    error: Some(error),
                }
            }
        }
    }
}

impl fmt::Debug for MoCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MoCatalog")
            .field("source", &format_args!("{}", self.source))
            .field("loaded", &self.loaded.get().is_some())
            .finish()
    }
}

impl crate::Translator for MoCatalog {
    fn translate<'a>(&'a self, message: &'a str) -> Cow<'a, str> {
        MoCatalog::translate(self, message)
    }

    fn translate_plural<'a>(
        &'a self,
        singular: &'a str,
        plural: &'a str,
        count: i64,
    ) -> Cow<'a, str> {
        MoCatalog::translate_plural(self, singular, plural, count)
    }
}
