//! Pages index assembly and emission.
//!
//! # Pipeline
//!
//! ```text
//! content root
//!   └─ scan        (recursive file collection, sorted)
//!        └─ dispatch by extension (.html / .md, others skipped)
//!             └─ extract PageRecord (html.rs / markdown.rs)
//!                  └─ serialize as one JSON array -> output file
//! ```
//!
//! One bad file aborts the whole build; drafts and unrecognized
//! extensions are intentional skips.

mod error;
mod frontmatter;
mod href;
mod html;
mod markdown;
mod scan;

pub use error::IndexError;

use anyhow::{Context, Result};
use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use crate::config::{IndexConfig, IndexSection};
use crate::debug;
use crate::page::PageRecord;

/// The assembled pages index.
#[derive(Debug)]
pub struct PageIndex {
    records: Vec<PageRecord>,
}

impl PageIndex {
    /// Walk the content root and extract a record for every qualifying file.
    pub fn build(config: &IndexConfig) -> Result<Self> {
        let root = config.content_dir();
        let mut records = Vec::new();

        for path in scan::collect_content_files(&root) {
            debug!("index"; "parse {}", path.display());
            if let Some(record) = process_file(&root, &path, &config.index)? {
                records.push(record);
            }
        }

        Ok(Self { records })
    }

    /// Number of indexed pages.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Indexed records, in traversal order.
    #[allow(dead_code)]
    pub fn records(&self) -> &[PageRecord] {
        &self.records
    }

    /// Serialize the index as one JSON array.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(&self.records)?
        } else {
            serde_json::to_string(&self.records)?
        };
        Ok(json)
    }

    /// Write the index to the configured output path.
    pub fn write(&self, config: &IndexConfig) -> Result<()> {
        let output = config.output_path();
        if let Some(parent) = output.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let json = self.to_json(config.index.pretty)?;
        fs::write(&output, json)
            .with_context(|| format!("Failed to write index to {}", output.display()))?;
        Ok(())
    }
}

/// Classify a file by extension and dispatch to its extractor.
///
/// Unrecognized extensions yield no record.
fn process_file(
    root: &Path,
    path: &Path,
    section: &IndexSection,
) -> Result<Option<PageRecord>, IndexError> {
    let Some(filename) = path.file_name().and_then(OsStr::to_str) else {
        return Ok(None);
    };

    if filename.ends_with(".html") {
        html::extract(root, path, filename).map(Some)
    } else if filename.ends_with(".md") {
        markdown::extract(root, path, filename, section)
    } else {
        Ok(None)
    }
}
