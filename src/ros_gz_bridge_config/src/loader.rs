//! Bridge configuration document loading

use crate::{
    bridge::BridgeSpec,
    entry::parse_entry,
    error::{ConfigError, Result},
    yaml::load_first_document,
};
use serde_yaml::Value;
use std::{
    fs::File,
    io::{self, BufReader, Read},
    path::Path,
};

/// Collect the valid bridges from an already-parsed document.
///
/// Entries that fail to parse are logged and skipped; the rest keep their
/// document order. A top level that is not a sequence yields no bridges.
pub fn bridges_from_value(document: &Value) -> Vec<BridgeSpec> {
    let Some(entries) = document.as_sequence() else {
        log::error!("Could not parse config, top level must be a YAML sequence");
        return Vec::new();
    };

    let bridges: Vec<BridgeSpec> = entries.iter().filter_map(parse_entry).collect();

    log::debug!(
        "Loaded {} of {} bridge entries",
        bridges.len(),
        entries.len()
    );
    bridges
}

/// Parse the first YAML document from a reader.
///
/// Syntax errors are returned to the caller; per-entry problems are not.
/// Any documents after the first are ignored.
pub fn parse_document<R: Read>(mut reader: R) -> Result<Value> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;

    if content.trim().is_empty() {
        return Ok(Value::Null);
    }

    Ok(load_first_document(&content)?)
}

/// Load bridges from any byte stream
pub fn read_from_yaml<R: Read>(reader: R) -> Result<Vec<BridgeSpec>> {
    let document = parse_document(reader)?;
    Ok(bridges_from_value(&document))
}

/// Open a configuration file, reporting a missing file distinctly
pub fn open_config_file(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ConfigError::FileNotFound(path.display().to_string()),
        _ => ConfigError::IoError(e),
    })?;
    Ok(BufReader::new(file))
}

/// Load bridges from a YAML file
pub fn read_from_yaml_file(path: &Path) -> Result<Vec<BridgeSpec>> {
    read_from_yaml(open_config_file(path)?)
}

/// Load bridges from an in-memory YAML string
pub fn read_from_yaml_string(data: &str) -> Result<Vec<BridgeSpec>> {
    read_from_yaml(data.as_bytes())
}
