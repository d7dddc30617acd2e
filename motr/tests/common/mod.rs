#![allow(dead_code)]

use std::path::{Path, PathBuf};

// the unit tests' builder, so both describe the `.mo` layout the same way
#[path = "../../src/testdata.rs"]
mod testdata;

pub(crate) use testdata::MoBuilder;

/// Directory holding the `msgfmt` compiled fixtures.
pub fn data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data")
}

/// Writes `data` where [`motr::catalog_path`] expects the catalog and returns its path.
pub fn write_catalog(directory: &Path, domain: &str, locale: &str, data: &[u8]) -> PathBuf {
    let path = motr::catalog_path(directory, domain, locale);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, data).unwrap();
    path
}
