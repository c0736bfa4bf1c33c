//! Markdown page extraction.

use std::path::Path;

use super::{IndexError, frontmatter, href};
use crate::config::{HrefMode, IndexSection};
use crate::log;
use crate::page::PageRecord;
use crate::utils::text::plain_content;

/// Build an index record for a Markdown file.
///
/// Title and tags come from the front-matter verbatim; the href depends
/// on the configured [`HrefMode`]. Returns `Ok(None)` for draft pages
/// when draft skipping is enabled.
pub fn extract(
    root: &Path,
    path: &Path,
    filename: &str,
    section: &IndexSection,
) -> Result<Option<PageRecord>, IndexError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| IndexError::Io(path.to_path_buf(), e))?;

    let (meta, body) = frontmatter::extract_frontmatter(&raw)
        .map_err(|e| IndexError::InvalidFrontmatter {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .ok_or_else(|| IndexError::MissingFrontmatter(path.to_path_buf()))?;

    if section.skip_drafts && meta.draft {
        log!("index"; "skipping draft: {}", path.display());
        return Ok(None);
    }

    let href = match section.href_mode {
        HrefMode::Path => {
            let site_path = href::site_path(root, path)?;
            href::markdown_path_href(&site_path, filename, &section.post_prefix)
        }
        HrefMode::Slug => meta
            .slug
            .clone()
            .ok_or_else(|| IndexError::MissingSlug(path.to_path_buf()))?,
    };

    Ok(Some(PageRecord {
        title: meta.title.unwrap_or_default(),
        tags: Some(meta.categories),
        href,
        content: plain_content(body),
    }))
}
