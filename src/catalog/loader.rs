//! Reads the YAML links file and normalizes each record into a [`LinkItem`].
//!
//! Source records are loosely typed: any field may be missing, null, a
//! number, or (for `tags`) either a scalar or a list. Each field has one
//! normalization function with a fixed default so the result is always a
//! fully-populated, strongly typed record.

use std::fs;
use std::path::Path;

use serde_yaml::{Mapping, Value};
use tracing::{debug, info};

use crate::constants::{DEFAULT_CATEGORY, DEFAULT_STATUS, ID_PREFIX, UNNAMED};
use crate::domain::LinkItem;
use crate::error::{Result, WizardError};

/// Load and normalize the links file at `path`.
pub fn load_links(path: &Path) -> Result<Vec<LinkItem>> {
    let content = fs::read_to_string(path).map_err(|e| WizardError::io(path, e))?;
    let links = parse_links(&content)?;
    info!(path = %path.display(), count = links.len(), "Loaded links file");
    Ok(links)
}

/// Parse YAML text whose top-level value must be a list of records.
pub fn parse_links(content: &str) -> Result<Vec<LinkItem>> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    let mut document: Value = serde_yaml::from_str(content)?;
    // Resolve `<<: *anchor` so records inherit shared fields
    document.apply_merge()?;
    normalize_document(document)
}

/// Normalize an already-parsed document. `null` counts as an empty list.
pub fn normalize_document(document: Value) -> Result<Vec<LinkItem>> {
    let records = match untag(document) {
        Value::Null => return Ok(Vec::new()),
        Value::Sequence(records) => records,
        other => {
            return Err(WizardError::Format(format!(
                "links file must contain a YAML list of items, found {}",
                kind(&other)
            )))
        }
    };

    let raw_len = records.len();
    let links: Vec<LinkItem> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match untag(record) {
            Value::Mapping(map) => Some(normalize_record(index, &map)),
            other => {
                debug!(index = index + 1, kind = kind(&other), "Skipping non-mapping record");
                None
            }
        })
        .collect();

    if links.len() < raw_len {
        debug!(dropped = raw_len - links.len(), "Dropped records that were not mappings");
    }
    Ok(links)
}

/// Normalize one mapping. `index` is the 0-based position in the raw list.
pub fn normalize_record(index: usize, record: &Mapping) -> LinkItem {
    let field = |name: &str| record.get(name);

    LinkItem {
        id: normalize_id(field("id"), index),
        name: text_or(field("name"), UNNAMED),
        url: normalize_url(field("url")),
        description: text_or(field("description"), ""),
        category: text_or(field("category"), DEFAULT_CATEGORY),
        tags: normalize_tags(field("tags")),
        status: normalize_status(field("status")),
        note: text_or(field("note"), ""),
    }
}

fn normalize_id(value: Option<&Value>, index: usize) -> String {
    scalar_text(value)
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| format!("{}{}", ID_PREFIX, index + 1))
}

fn normalize_url(value: Option<&Value>) -> Option<String> {
    scalar_text(value).filter(|url| !url.is_empty())
}

fn normalize_tags(value: Option<&Value>) -> Vec<String> {
    match value.map(untag_ref) {
        Some(Value::Sequence(items)) => items
            .iter()
            .filter_map(|tag| scalar_text(Some(tag)))
            .filter(|tag| !tag.is_empty())
            .collect(),
        other => scalar_text(other)
            .filter(|tag| !tag.is_empty())
            .into_iter()
            .collect(),
    }
}

fn normalize_status(value: Option<&Value>) -> String {
    scalar_text(value)
        .map(|status| status.to_lowercase())
        .filter(|status| !status.is_empty())
        .unwrap_or_else(|| DEFAULT_STATUS.to_string())
}

/// Trimmed text of a scalar field, or `default` when missing or blank.
fn text_or(value: Option<&Value>, default: &str) -> String {
    scalar_text(value)
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Stringify and trim a scalar. Null, sequences and mappings yield `None`.
fn scalar_text(value: Option<&Value>) -> Option<String> {
    match value.map(untag_ref)? {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn untag(value: Value) -> Value {
    match value {
        Value::Tagged(tagged) => untag(tagged.value),
        other => other,
    }
}

fn untag_ref(value: &Value) -> &Value {
    match value {
        Value::Tagged(tagged) => untag_ref(&tagged.value),
        other => other,
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "list",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
