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

//! Translator backed by the system's gettext implementation.

use std::borrow::Cow;
use std::path::Path;

/// Looks messages up through the C library's `dgettext`/`dngettext`.
///
/// The catalog location follows the same `{directory}/{locale}/LC_MESSAGES/{domain}.mo`
/// layout as [`crate::MoCatalog`]. Creating a `NativeTranslator` changes process
/// wide state: it binds `domain` to `directory` and sets the `LC_MESSAGES`
/// locale category to `locale`.
///
/// Plural forms are chosen by gettext from the catalog's `Plural-Forms`
/// rule rather than taken as an ordinal, which matches [`crate::MoCatalog`]
/// for catalogs using the usual `n != 1` rule.
pub struct NativeTranslator {
    domain: String,
}

impl NativeTranslator {
    pub fn new(directory: impl AsRef<Path>, domain: &str, locale: &str) -> Self {
        let directory = directory.as_ref();
        if let Err(error) = gettextrs::bindtextdomain(domain, directory) {
            log::warn!(
                "cannot bind domain '{}' to {}: {}",
                domain,
                directory.display(),
                error
            );
        }
        if let Err(error) = gettextrs::bind_textdomain_codeset(domain, "UTF-8") {
            log::warn!("cannot set codeset of domain '{}': {}", domain, error);
        }
        if gettextrs::setlocale(gettextrs::LocaleCategory::LcMessages, locale).is_none() {
            log::warn!("locale '{}' is not available", locale);
        }
        Self {
            domain: domain.to_owned(),
        }
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }
}

// gettextrs panics on strings containing NUL; they cannot be message ids anyway.
fn has_nul(s: &str) -> bool {
    s.as_bytes().contains(&0)
}

impl crate::Translator for NativeTranslator {
    fn translate<'a>(&'a self, message: &'a str) -> Cow<'a, str> {
        if has_nul(message) {
            return Cow::Borrowed(message);
        }
        gettextrs::dgettext(self.domain.as_str(), message).into()
    }

    fn translate_plural<'a>(
        &'a self,
        singular: &'a str,
        plural: &'a str,
        count: i64,
    ) -> Cow<'a, str> {
        if has_nul(singular) || has_nul(plural) {
            return Cow::Borrowed(if count == 1 { singular } else { plural });
        }
        // negative and oversized counts both mean "many", never 1
        let n = u32::try_from(count).unwrap_or(u32::MAX);
        gettextrs::dngettext(self.domain.as_str(), singular, plural, n).into()
    }
}
