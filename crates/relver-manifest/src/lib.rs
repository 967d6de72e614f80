//! Version token access for project manifests.
//!
//! The manifest is treated as opaque text holding a single
//! `version = "MAJOR.MINOR.PATCH"` token. Reading extracts the current
//! value; writing substitutes the first token occurrence and leaves the
//! rest of the file untouched.

mod error;
mod reader;
mod writer;

pub use error::ManifestError;
pub use reader::read_version;
pub use writer::write_version;

use std::sync::LazyLock;

use regex::Regex;

pub(crate) static VERSION_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"version\s*=\s*"(\d+\.\d+\.\d+)""#).expect("version token pattern is valid")
});
