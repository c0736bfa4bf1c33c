//! Index record - one entry of the emitted JSON array.

use serde::{Deserialize, Serialize};

/// One indexed page in `PagesIndex.json`
///
/// # Example
///
/// ```json
/// {
///   "title": "hello",
///   "tags": ["rust"],
///   "href": "/foo/hello",
///   "content": "Plain text with markup and punctuation removed"
/// }
/// ```
///
/// `tags` is present for Markdown pages (possibly empty) and absent for
/// HTML pages. `href` is never empty; `content` may be.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    /// Page display title
    pub title: String,
    /// Category labels from front-matter (Markdown only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Site-relative URL path
    pub href: String,
    /// Plain-text page body
    pub content: String,
}
