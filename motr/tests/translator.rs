mod common;

use std::borrow::Cow;
use std::sync::Arc;

use common::{data_dir, write_catalog, MoBuilder};
use motr::instance::{translator, translator_with_backend};
use motr::{Backend, MoCatalog, Translator};

struct UpperCaseTranslator;
impl Translator for UpperCaseTranslator {
    fn translate<'a>(&'a self, message: &'a str) -> Cow<'a, str> {
        message.to_uppercase().into()
    }

    fn translate_plural<'a>(
        &'a self,
        singular: &'a str,
        plural: &'a str,
        count: i64,
    ) -> Cow<'a, str> {
        if count == 1 {
            singular.to_uppercase().into()
        } else {
            plural.to_uppercase().into()
        }
    }
}

fn greet(translator: &dyn Translator, files: i64) -> String {
    format!(
        "{} {}",
        translator.translate("Hello"),
        translator.translate_plural("{n} file", "{n} files", files)
    )
}

#[test]
fn interchangeable() {
    let catalog = MoCatalog::new(data_dir(), "gettext", "de");
    let untranslated = MoCatalog::from_vec_u8(Vec::new());

    assert_eq!(greet(&UpperCaseTranslator, 1), "HELLO {N} FILE");
    assert_eq!(greet(&UpperCaseTranslator, 42), "HELLO {N} FILES");
    assert_eq!(greet(&catalog, 1), "Hello {n} Datei");
    assert_eq!(greet(&catalog, 42), "Hello {n} Dateien");
    assert_eq!(greet(&untranslated, 1), "Hello {n} file");
    assert_eq!(greet(&untranslated, 42), "Hello {n} files");

    let translators: [Arc<dyn Translator>; 2] = [Arc::new(UpperCaseTranslator), Arc::new(catalog)];
    assert_eq!(translators[0].translate("Big Error"), "BIG ERROR");
    assert_eq!(translators[1].translate("Big Error"), "Großer Fehler");
}

#[test]
fn pure_instance() {
    let directory = tempfile::tempdir().unwrap();
    write_catalog(
        directory.path(),
        "motr",
        "de",
        &MoBuilder::new()
            .message("cat", "Katze")
            .message("file\0files", "Datei\0Dateien")
            .build(),
    );

    let pure = translator_with_backend(Backend::Pure, directory.path(), "motr", "de");
    assert_eq!(pure.translate("cat"), "Katze");
    assert_eq!(pure.translate_plural("file", "files", 2), "Dateien");
    assert_eq!(pure.translate_plural("file", "files", -5), "Dateien");

    let again = translator_with_backend(Backend::Pure, directory.path(), "motr", "de");
    assert!(Arc::ptr_eq(&pure, &again));

    let other_locale = translator_with_backend(Backend::Pure, directory.path(), "motr", "fr");
    assert!(!Arc::ptr_eq(&pure, &other_locale));
    assert_eq!(other_locale.translate("cat"), "cat");
}

#[test]
fn default_instance_is_cached() {
    let directory = tempfile::tempdir().unwrap();
    let a = translator(directory.path(), "motr-missing", "C");
    let b = translator(directory.path(), "motr-missing", "C");
    assert!(Arc::ptr_eq(&a, &b));
}

#[cfg(feature = "gettext-rs")]
#[test]
fn native_untranslated() {
    let directory = tempfile::tempdir().unwrap();
    let native = motr::NativeTranslator::new(directory.path(), "motr-missing", "C");
    assert_eq!(native.domain(), "motr-missing");
    assert_eq!(native.translate("anything"), "anything");
    assert_eq!(native.translate_plural("a", "bs", 1), "a");
    assert_eq!(native.translate_plural("a", "bs", 3), "bs");
    assert_eq!(native.translate("with\0nul"), "with\0nul");
}

#[cfg(feature = "gettext-rs")]
#[test]
fn native_and_pure_agree_on_large_counts() {
    let directory = tempfile::tempdir().unwrap();
    let native = motr::NativeTranslator::new(directory.path(), "motr-counts", "C");
    let pure = MoCatalog::new(directory.path(), "motr-counts", "C");
    for count in [1, 2, (1i64 << 32) + 1, i64::MAX, -1, -(1i64 << 32) + 1, i64::MIN] {
        assert_eq!(
            native.translate_plural("a", "bs", count),
            pure.translate_plural("a", "bs", count),
            "count {count}"
        );
    }
}
