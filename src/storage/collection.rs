//! Loading a roster collection from disk.
//!
//! Two formats are understood:
//! - `.json`: an array of strings, each the inner markup of one entry;
//! - anything else: markup where every top-level `<li>` element is one entry.

use super::Result;
use crate::core::entry::{Collection, Entry};
use crate::error::StorageError;
use std::fs;
use std::path::Path;

const LI_OPEN: &str = "<li";
const LI_CLOSE: &str = "</li>";

/// Read a collection file, choosing the format by extension.
pub fn load_collection(path: &Path) -> Result<Collection> {
    let content = fs::read_to_string(path).map_err(|source| StorageError::FileIo {
        path: path.to_string_lossy().to_string(),
        source,
    })?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let parsed = if is_json {
        parse_json_collection(&content)
    } else {
        parse_markup_collection(&content)
    };
    let collection = parsed.map_err(|message| StorageError::CollectionFormat {
        path: path.to_string_lossy().to_string(),
        message,
    })?;

    let unnamed = collection
        .entries()
        .iter()
        .filter(|entry| entry.name().is_none())
        .count();
    if unnamed > 0 {
        log::warn!(
            "{} entries in {} have no <h3> name and will never match a search",
            unnamed,
            path.display()
        );
    }

    log::debug!(
        "Loaded {} entries from {}",
        collection.len(),
        path.display()
    );
    Ok(collection)
}

pub fn parse_json_collection(content: &str) -> std::result::Result<Collection, String> {
    let items: Vec<String> = serde_json::from_str(content).map_err(|err| err.to_string())?;
    Ok(items.into_iter().map(Entry::new).collect())
}

/// Collect the inner markup of every top-level `<li>` element.
///
/// Nested list items stay inside their parent entry.
pub fn parse_markup_collection(content: &str) -> std::result::Result<Collection, String> {
    let mut entries = Vec::new();
    let mut cursor = 0;

    while let Some(found) = find_li_open(content, cursor) {
        let body_start = content[found..]
            .find('>')
            .map(|offset| found + offset + 1)
            .ok_or_else(|| format!("unterminated <li> tag at byte {}", found))?;

        let mut depth = 1;
        let mut scan = body_start;
        let body_end = loop {
            let next_open = find_li_open(content, scan);
            let next_close = content[scan..].find(LI_CLOSE).map(|offset| scan + offset);

            match (next_open, next_close) {
                (Some(open), Some(close)) if open < close => {
                    depth += 1;
                    scan = open + LI_OPEN.len();
                }
                (_, Some(close)) => {
                    depth -= 1;
                    if depth == 0 {
                        break close;
                    }
                    scan = close + LI_CLOSE.len();
                }
                (_, None) => {
                    return Err(format!("<li> at byte {} is never closed", found));
                }
            }
        };

        entries.push(Entry::new(content[body_start..body_end].trim()));
        cursor = body_end + LI_CLOSE.len();
    }

    Ok(Collection::new(entries))
}

/// Next `<li` that starts a list item tag (not `<link`, for example).
fn find_li_open(content: &str, from: usize) -> Option<usize> {
    let mut scan = from;
    while let Some(offset) = content[scan..].find(LI_OPEN) {
        let at = scan + offset;
        let after = content[at + LI_OPEN.len()..].chars().next();
        if matches!(after, Some('>') | Some(' ') | Some('\t') | Some('\n') | Some('\r')) {
            return Some(at);
        }
        scan = at + LI_OPEN.len();
    }
    None
}
