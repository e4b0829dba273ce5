//! Loaders for the bundled JSON data files.
//!
//! The files are hand-authored, so parsing is lenient: object keys are
//! matched case-insensitively and comments and trailing commas are accepted.
//! Failures never escape the `load_*` functions; they are logged and the
//! caller gets empty data, so one broken file only blanks its own section.

use std::fs;
use std::path::Path;

use log::{debug, error, info, warn};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::logutil::escape_log;
use crate::tracker::player::ProgressSnapshot;
use crate::tracker::types::{DrawerFile, NewsRoot, TocEntry};
use crate::tracker::TrackerError;

/// Read and deserialize one data file, surfacing the failure reason.
pub fn read_document<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T, TrackerError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(TrackerError::NotFound(path.to_path_buf()));
    }
    let contents = fs::read_to_string(path)?;
    parse_document(path, &contents)
}

/// Deserialize already-read file contents. `path` is only used for error reporting.
pub fn parse_document<T: DeserializeOwned>(path: &Path, contents: &str) -> Result<T, TrackerError> {
    if contents.trim().is_empty() {
        return Err(TrackerError::EmptyFile(path.to_path_buf()));
    }

    let raw: Value = json5::from_str(contents).map_err(|e| TrackerError::Malformed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    if raw.is_null() {
        return Err(TrackerError::EmptyFile(path.to_path_buf()));
    }

    serde_json::from_value(lowercase_keys(raw)).map_err(|e| TrackerError::Malformed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Lowercase every object key, recursively. Later duplicates win, matching
/// a case-insensitive property lookup.
fn lowercase_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut out = Map::with_capacity(map.len());
            for (key, inner) in map {
                out.insert(key.to_lowercase(), lowercase_keys(inner));
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(lowercase_keys).collect()),
        other => other,
    }
}

fn report(what: &str, err: &TrackerError) {
    if err.is_missing_data() {
        warn!("{} unavailable: {}", what, err);
    } else {
        error!("Error loading {}: {}", what, escape_log(&err.to_string()));
    }
}

/// Load `toc.json`. Missing or broken files yield an empty list.
pub fn load_toc<P: AsRef<Path>>(path: P) -> Vec<TocEntry> {
    match read_document::<Vec<TocEntry>, _>(&path) {
        Ok(entries) => {
            info!("Loaded {} table-of-contents entries", entries.len());
            entries
        }
        Err(e) => {
            report("table of contents", &e);
            Vec::new()
        }
    }
}

/// Load one quest drawer. Quests without any id are dropped.
pub fn load_drawer<P: AsRef<Path>>(path: P) -> Option<DrawerFile> {
    let path = path.as_ref();
    let mut drawer = match read_document::<DrawerFile, _>(path) {
        Ok(drawer) => drawer,
        Err(e) => {
            report("quest drawer", &e);
            return None;
        }
    };

    let before = drawer.quests.len();
    drawer.quests.retain(|q| !q.id.is_empty());
    if drawer.quests.len() != before {
        warn!(
            "Dropped {} quest(s) without ids from {}",
            before - drawer.quests.len(),
            path.display()
        );
    }
    Some(drawer)
}

/// Load `news.json`.
pub fn load_news<P: AsRef<Path>>(path: P) -> Option<NewsRoot> {
    match read_document::<NewsRoot, _>(&path) {
        Ok(root) => {
            info!(
                "Loaded news.json: {} countdowns, {} news entries",
                root.countdowns.len(),
                root.news.len()
            );
            if let Some(latest) = root.news.first() {
                debug!("Latest news: {}", escape_log(&latest.title));
            }
            Some(root)
        }
        Err(e) => {
            report("news feed", &e);
            None
        }
    }
}

/// Load an exported player progress snapshot.
pub fn load_progress<P: AsRef<Path>>(path: P) -> Option<ProgressSnapshot> {
    match read_document::<ProgressSnapshot, _>(&path) {
        Ok(snapshot) => {
            info!("Loaded progress snapshot: {} completed quests", snapshot.completed.len());
            Some(snapshot)
        }
        Err(e) => {
            report("progress snapshot", &e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_lowercased_recursively() {
        let raw: Value = serde_json::json!({"Quests": [{"Title": "x", "Id": [1]}]});
        let lowered = lowercase_keys(raw);
        assert_eq!(lowered, serde_json::json!({"quests": [{"title": "x", "id": [1]}]}));
    }

    #[test]
    fn null_document_counts_as_empty() {
        let err = parse_document::<NewsRoot>(Path::new("news.json"), "null").unwrap_err();
        assert!(err.is_missing_data());
    }
}
