//! Page metadata from Markdown front-matter.

use serde::Deserialize;

/// Deserialize categories, treating `null` as empty vec
fn deserialize_categories<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<Vec<String>> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// Page metadata from front-matter in Markdown files
///
/// # Recognized Fields
///
/// | Field        | Type           | Description                           |
/// |--------------|----------------|---------------------------------------|
/// | `title`      | `String`       | Page title                            |
/// | `categories` | `Vec<String>`  | Category labels (alias: `tags`)       |
/// | `slug`       | `String`       | Custom URL path (slug href mode only) |
/// | `draft`      | `bool`         | Draft status (default: false)         |
///
/// Unrecognized fields are ignored.
#[derive(Debug, Clone, Default, serde::Serialize, Deserialize)]
#[serde(default)]
pub struct PageMeta {
    pub title: Option<String>,
    /// Category labels for the page.
    #[serde(alias = "tags", deserialize_with = "deserialize_categories")]
    pub categories: Vec<String>,
    /// Explicit URL path, overrides the filesystem-derived href.
    pub slug: Option<String>,
    #[serde(default)]
    pub draft: bool,
}
