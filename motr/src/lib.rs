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

//! # Gettext catalogs without gettext
//!
//! This crate reads the compiled message catalogs (`.mo` files) produced by
//! GNU gettext's `msgfmt` and answers translation lookups from them.
//!
//! The main type is [`MoCatalog`]. It parses its file on the first lookup and
//! keeps the resulting [`TranslationTable`] afterwards. Lookups never fail: a
//! message without translation, as well as a catalog that is missing or
//! corrupt, yields the untranslated text.
//!
//! Both [`MoCatalog`] and, with the `gettext-rs` feature, [`NativeTranslator`]
//! implement the [`Translator`] trait, so they can be swapped for one another.
//! The [`instance`] module picks one of them and caches the instances.
//!
//! Example:
//!
//! ```
//! use motr::MoCatalog;
//!
//! // reads /usr/share/locale/de/LC_MESSAGES/motr-example.mo, if it exists
//! let catalog = MoCatalog::new("/usr/share/locale", "motr-example", "de");
//! let files = 3;
//! println!("{}", catalog.translate("Hello world!"));
//! println!("{}", catalog.translate_plural("One file", "Several files", files));
//! ```
//!
//! The plural lookup takes the message's singular form as key and returns the
//! `count`-th translated form; it does not evaluate the catalog's plural rule.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

mod catalog;
mod error;
pub mod instance;
mod metadata;
pub mod mo_file;
#[cfg(feature = "gettext-rs")]
mod native;
mod table;
#[cfg(test)]
mod testdata;

pub use catalog::MoCatalog;
pub use error::MoError;
pub use instance::Backend;
pub use metadata::Metadata;
#[cfg(feature = "gettext-rs")]
pub use native::NativeTranslator;
pub use table::{Forms, TranslationTable};

/// The lookup interface shared by all the backends.
///
/// Both methods always return a string: when there is no translation, the
/// input is returned.
pub trait Translator: Send + Sync {
    /// Returns the translation of `message`, or `message` itself.
    fn translate<'a>(&'a self, message: &'a str) -> Cow<'a, str>;

    /// Returns the translation of `singular` to use for `count`.
    ///
    /// Without translation, `singular` is returned if `count` is 1 and `plural`
    /// otherwise.
    fn translate_plural<'a>(
        &'a self,
        singular: &'a str,
        plural: &'a str,
        count: i64,
    ) -> Cow<'a, str>;
}

/// Location of the catalog for `domain` in `locale`:
/// `{directory}/{locale}/LC_MESSAGES/{domain}.mo`.
pub fn catalog_path(directory: impl AsRef<Path>, domain: &str, locale: &str) -> PathBuf {
    directory
        .as_ref()
        .join(locale)
        .join("LC_MESSAGES")
        .join(format!("{}.mo", domain))
}
