//! Extraction error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning a content file into an index record.
///
/// All variants are fatal: one bad file aborts the whole run so the
/// build task fails visibly. (Drafts and unknown extensions are skips,
/// not errors.)
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("missing front-matter in `{0}`")]
    MissingFrontmatter(PathBuf),

    #[error("invalid front-matter in `{path}`: {message}")]
    InvalidFrontmatter { path: PathBuf, message: String },

    #[error("missing `slug` in front-matter of `{0}` (required by href_mode = \"slug\")")]
    MissingSlug(PathBuf),

    #[error("`{0}` is outside the content root")]
    OutsideRoot(PathBuf),
}
