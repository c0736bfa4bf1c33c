//! HTML page extraction.

use std::path::Path;

use super::{IndexError, href};
use crate::page::PageRecord;
use crate::utils::text::plain_content;

/// Build an index record for an HTML file.
///
/// The title comes from the filename, the href is the file's path under
/// the content root (extension kept). Every HTML file is indexed; there
/// is no draft concept.
pub fn extract(root: &Path, path: &Path, filename: &str) -> Result<PageRecord, IndexError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| IndexError::Io(path.to_path_buf(), e))?;

    let title = filename.strip_suffix(".html").unwrap_or(filename);
    let href = href::site_path(root, path)?;

    Ok(PageRecord {
        title: title.to_string(),
        tags: None,
        href,
        content: plain_content(&raw),
    })
}
