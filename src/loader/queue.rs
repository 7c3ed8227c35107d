//! Queue exports: one CSV per call queue, joined to the main export by CallGUID.

use crate::errors::LoadError;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// CallGUID → queue name.
pub type QueueMap = HashMap<String, String>;

/// True for file names the phone system uses for queue exports.
pub fn is_queue_export(path: &Path) -> bool {
    path.file_name()
        .map(|n| n.to_string_lossy().to_lowercase().starts_with("callqueue"))
        .unwrap_or(false)
}

/// Derive the queue name from `CallQueue_20260105_20260118_General_Enquiries.csv`:
/// everything after the two 8-digit date parts, joined by spaces.
pub fn queue_name_from_filename(file_name: &str) -> String {
    let stem = if file_name.to_ascii_lowercase().ends_with(".csv") {
        &file_name[..file_name.len() - 4]
    } else {
        file_name
    };

    let mut found_dates = 0;
    let mut parts = Vec::new();

    for part in stem.split('_') {
        if part.len() == 8 && part.chars().all(|c| c.is_ascii_digit()) {
            found_dates += 1;
        } else if found_dates >= 2 {
            parts.push(part);
        }
    }

    if parts.is_empty() {
        "Unknown".to_string()
    } else {
        parts.join(" ")
    }
}

/// Load one queue export from disk.
pub fn load_queue_file(path: &Path) -> Result<QueueMap, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Unreadable {
        path: path.display().to_string(),
        source,
    })?;

    let fallback = path
        .file_name()
        .map(|n| queue_name_from_filename(&n.to_string_lossy()))
        .unwrap_or_else(|| "Unknown".to_string());

    let map = parse_queue_export(file, &fallback)?;
    info!(path = %path.display(), entries = map.len(), "loaded queue export");
    Ok(map)
}

/// Parse a queue export. `CallQueueName` wins over the name derived from the file.
pub fn parse_queue_export<R: Read>(reader: R, fallback_name: &str) -> Result<QueueMap, LoadError> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = rdr.headers()?.clone();

    let guid_idx = headers
        .iter()
        .position(|h| h.trim() == "CallGUID")
        .ok_or_else(|| LoadError::MissingColumn("CallGUID".to_string()))?;
    let name_idx = headers.iter().position(|h| h.trim() == "CallQueueName");

    let mut map = QueueMap::new();

    for row in rdr.records() {
        let row = row?;
        let guid = match row.get(guid_idx).map(str::trim) {
            Some(g) if !g.is_empty() => g,
            _ => continue,
        };

        let name = name_idx
            .and_then(|i| row.get(i))
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(fallback_name);

        map.insert(guid.to_string(), name.to_string());
    }

    debug!(queue = fallback_name, entries = map.len(), "parsed queue export");
    Ok(map)
}

/// Merge several queue exports; later files win on duplicate GUIDs.
pub fn merge_queue_maps<I: IntoIterator<Item = QueueMap>>(maps: I) -> QueueMap {
    let mut merged = QueueMap::new();
    for map in maps {
        merged.extend(map);
    }
    merged
}
