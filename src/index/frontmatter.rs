//! Front-matter detection and parsing.
//!
//! Supports YAML-like (`---`) and TOML (`+++`) header blocks. The YAML
//! flavor is parsed line-wise (enough for the flat key/value headers
//! that content files actually carry), TOML goes through serde.

use anyhow::Result;

use crate::page::PageMeta;

/// Detect and parse front-matter, returning `(metadata, body)`.
///
/// Returns `None` when the content carries no front-matter block.
pub fn extract_frontmatter(content: &str) -> Result<Option<(PageMeta, &str)>> {
    match detect_frontmatter(content) {
        Some((fm, body, is_toml)) => {
            let meta = if is_toml {
                parse_toml(fm)?
            } else {
                parse_yaml_like(fm)
            };
            Ok(Some((meta, body)))
        }
        None => Ok(None),
    }
}

/// Detect and split off the front-matter block.
/// Returns `(frontmatter, body, is_toml)` if found.
fn detect_frontmatter(content: &str) -> Option<(&str, &str, bool)> {
    let trimmed = content.trim_start();

    // YAML: ---...---
    if trimmed.starts_with("---")
        && let Some(end) = trimmed[3..].find("\n---")
    {
        let fm = trimmed[3..3 + end].trim();
        let body = trimmed[3 + end + 4..].trim_start_matches('\n');
        return Some((fm, body, false));
    }

    // TOML: +++...+++
    if trimmed.starts_with("+++")
        && let Some(end) = trimmed[3..].find("\n+++")
    {
        let fm = trimmed[3..3 + end].trim();
        let body = trimmed[3 + end + 4..].trim_start_matches('\n');
        return Some((fm, body, true));
    }

    None
}

/// Parse TOML front-matter.
fn parse_toml(content: &str) -> Result<PageMeta> {
    toml::from_str(content).map_err(|e| anyhow::anyhow!("Invalid TOML front-matter: {}", e))
}

/// Parse simple YAML-like front-matter (key: value).
///
/// Handles scalar values, inline lists (`a, b` or `[a, b]`) and block
/// sequences (`- item` lines) for the categories field.
fn parse_yaml_like(content: &str) -> PageMeta {
    let mut meta = PageMeta::default();
    let mut in_categories = false;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Block sequence items belong to the preceding `categories:` key
        if in_categories {
            if let Some(item) = line.strip_prefix("- ") {
                let item = unquote(item.trim());
                if !item.is_empty() {
                    meta.categories.push(item.to_string());
                }
                continue;
            }
            in_categories = false;
        }

        if let Some((key, value)) = line.split_once(':') {
            let key_lower = key.trim().to_lowercase();
            let value = value.trim();

            match key_lower.as_str() {
                "title" => meta.title = Some(unquote(value).to_string()),
                "slug" => meta.slug = Some(unquote(value).to_string()),
                "draft" => meta.draft = value.eq_ignore_ascii_case("true"),
                "categories" | "tags" => {
                    if value.is_empty() {
                        in_categories = true;
                    } else {
                        meta.categories = parse_inline_list(value);
                    }
                }
                _ => {} // Unrecognized field
            }
        }
    }

    meta
}

/// Parse an inline list value: `a, b` or `[a, b]`.
fn parse_inline_list(value: &str) -> Vec<String> {
    let value = value
        .strip_prefix('[')
        .and_then(|v| v.strip_suffix(']'))
        .unwrap_or(value);

    value
        .split(',')
        .map(|item| unquote(item.trim()).to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

/// Strip one pair of matching surrounding quotes.
fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2
        && (bytes[0] == b'"' || bytes[0] == b'\'')
        && bytes[bytes.len() - 1] == bytes[0]
    {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_frontmatter() {
        let content = "---\ntitle: Hello\ncategories: a, b\n---\n\n# Body";
        let (meta, body) = extract_frontmatter(content).unwrap().unwrap();

        assert_eq!(meta.title, Some("Hello".to_string()));
        assert_eq!(meta.categories, vec!["a", "b"]);
        assert!(body.starts_with("# Body"));
    }

    #[test]
    fn test_yaml_block_sequence_categories() {
        let content = "---\ntitle: Post\ncategories:\n- rust\n- \"web dev\"\ndraft: true\n---\nbody";
        let (meta, body) = extract_frontmatter(content).unwrap().unwrap();

        assert_eq!(meta.categories, vec!["rust", "web dev"]);
        assert!(meta.draft);
        assert_eq!(body, "body");
    }

    #[test]
    fn test_yaml_flow_list() {
        let content = "---\ntags: [rust, cli]\n---\n";
        let (meta, _) = extract_frontmatter(content).unwrap().unwrap();
        assert_eq!(meta.categories, vec!["rust", "cli"]);
    }

    #[test]
    fn test_yaml_quoted_slug() {
        let content = "---\ntitle: \"My Page\"\nslug: \"/my-page\"\n---\n";
        let (meta, _) = extract_frontmatter(content).unwrap().unwrap();

        assert_eq!(meta.title, Some("My Page".to_string()));
        assert_eq!(meta.slug, Some("/my-page".to_string()));
    }

    #[test]
    fn test_yaml_draft_false() {
        let content = "---\ndraft: false\n---\n";
        let (meta, _) = extract_frontmatter(content).unwrap().unwrap();
        assert!(!meta.draft);
    }

    #[test]
    fn test_toml_frontmatter() {
        let content = "+++\ntitle = \"Hello\"\ncategories = [\"a\", \"b\"]\n+++\n\n# Body";
        let (meta, body) = extract_frontmatter(content).unwrap().unwrap();

        assert_eq!(meta.title, Some("Hello".to_string()));
        assert_eq!(meta.categories, vec!["a", "b"]);
        assert!(body.starts_with("# Body"));
    }

    #[test]
    fn test_toml_invalid_is_error() {
        let content = "+++\ntitle = [unclosed\n+++\n";
        assert!(extract_frontmatter(content).is_err());
    }

    #[test]
    fn test_no_frontmatter() {
        assert!(extract_frontmatter("# Just content").unwrap().is_none());
    }

    #[test]
    fn test_unrecognized_fields_ignored() {
        let content = "---\ntitle: T\nauthor: someone\ndate: 2018-01-01\n---\n";
        let (meta, _) = extract_frontmatter(content).unwrap().unwrap();
        assert_eq!(meta.title, Some("T".to_string()));
    }
}
