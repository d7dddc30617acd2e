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

//! Selection between the translator backends.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use crate::{MoCatalog, Translator};

/// Which implementation answers lookups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Backend {
    /// [`Backend::Native`] when the `gettext-rs` feature is enabled,
    /// [`Backend::Pure`] otherwise.
    #[default]
    Auto,
    /// The system gettext, through `gettext-rs`.
    Native,
    /// [`MoCatalog`], which decodes the `.mo` file itself.
    Pure,
}

impl Backend {
    /// The backend that is actually used for this request.
    pub fn resolve(self) -> Backend {
        match self {
            Backend::Auto if cfg!(feature = "gettext-rs") => Backend::Native,
            Backend::Auto => Backend::Pure,
            Backend::Native if !cfg!(feature = "gettext-rs") => {
                log::warn!("native gettext backend not compiled in, using the .mo decoder");
                Backend::Pure
            }
            backend => backend,
        }
    }
}

#[derive(PartialEq, Eq, Hash)]
struct InstanceKey {
    backend: Backend,
    directory: PathBuf,
    domain: String,
    locale: String,
}

fn instances() -> &'static Mutex<HashMap<InstanceKey, Arc<dyn Translator>>> {
    static INSTANCES: OnceLock<Mutex<HashMap<InstanceKey, Arc<dyn Translator>>>> =
        OnceLock::new();
    INSTANCES.get_or_init(Default::default)
}

/// Returns the translator for `domain` in `locale`, using the best available backend.
///
/// See [`translator_with_backend`].
pub fn translator(directory: impl AsRef<Path>, domain: &str, locale: &str) -> Arc<dyn Translator> {
    translator_with_backend(Backend::Auto, directory, domain, locale)
}

/// Returns the translator for `domain` in `locale`.
///
/// Instances are created on first use and shared afterwards: asking twice for
/// the same backend, directory, domain and locale returns the same translator.
pub fn translator_with_backend(
    backend: Backend,
    directory: impl AsRef<Path>,
    domain: &str,
    locale: &str,
) -> Arc<dyn Translator> {
    let backend = backend.resolve();
    let directory = directory.as_ref();
    let key = InstanceKey {
        backend,
        directory: directory.to_owned(),
        domain: domain.to_owned(),
        locale: locale.to_owned(),
    };
    let mut instances = instances().lock().unwrap_or_else(PoisonError::into_inner);
    Arc::clone(
        instances
            .entry(key)
            .or_insert_with(|| create(backend, directory, domain, locale)),
    )
}

fn create(backend: Backend, directory: &Path, domain: &str, locale: &str) -> Arc<dyn Translator> {
    log::debug!(
        "creating {:?} translator for domain '{}', locale '{}' in {}",
        backend,
        domain,
        locale,
        directory.display()
    );
    match backend {
        #[cfg(feature = "gettext-rs")]
        Backend::Native => Arc::new(crate::NativeTranslator::new(directory, domain, locale)),
        _ => Arc::new(MoCatalog::new(directory, domain, locale)),
    }
}
