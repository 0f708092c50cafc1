//! Schema input adapters.
//!
//! Every supported input format is turned into the same generic
//! [`SchemaElement`] tree, which is all the model builder looks at.

pub mod element;
pub mod xml;

pub use element::SchemaElement;
pub use xml::parse_xml;

use crate::core::{GenError, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// File holding the model inside an `.xcdatamodel` bundle directory
pub const MODEL_CONTENTS_FILE: &str = "contents";

/// Parse a JSON rendition of the element tree:
/// `{"tag": "model", "attributes": {..}, "children": [..]}`.
pub fn parse_json(source: &str) -> Result<SchemaElement> {
    Ok(serde_json::from_str(source)?)
}

/// Resolve the file that actually holds the schema. A model bundle directory
/// is read through its `contents` file.
pub fn resolve_input(path: &Path) -> PathBuf {
    if path.is_dir() {
        path.join(MODEL_CONTENTS_FILE)
    } else {
        path.to_path_buf()
    }
}

/// Read and parse a schema file; `.json` files are read as JSON, everything
/// else as XML.
pub fn load(path: &Path) -> Result<SchemaElement> {
    let path = resolve_input(path);
    let source = fs::read_to_string(&path).map_err(|err| GenError::io(&path, err))?;
    debug!("Read schema '{}' ({} bytes)", path.display(), source.len());

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        parse_json(&source)
    } else {
        parse_xml(&source)
    }
}
