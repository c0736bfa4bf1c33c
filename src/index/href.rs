//! Href derivation - file path to site-relative URL path.

use std::path::Path;

use super::IndexError;

/// Site-relative path of a file under the content root.
///
/// Always starts with `/` and uses forward slashes regardless of the
/// platform separator.
///
/// # Example
///
/// `content/post/foo/bar.md` under root `content` -> `/post/foo/bar.md`
pub fn site_path(root: &Path, path: &Path) -> Result<String, IndexError> {
    let rel = path
        .strip_prefix(root)
        .map_err(|_| IndexError::OutsideRoot(path.to_path_buf()))?;

    let mut out = String::new();
    for component in rel.components() {
        out.push('/');
        out.push_str(&component.as_os_str().to_string_lossy());
    }
    Ok(out)
}

/// Derive the href of a path-mode Markdown page.
///
/// The `post_prefix` segment is dropped from the left when present.
/// `index.md` files resolve to their directory (trailing slash kept);
/// other files drop the `.md` suffix.
///
/// # Examples
///
/// - `/post/foo/bar.md` -> `/foo/bar`
/// - `/post/foo/index.md` -> `/foo/`
/// - `/about.md` -> `/about`
pub fn markdown_path_href(site_path: &str, filename: &str, post_prefix: &str) -> String {
    let rel = site_path.strip_prefix(post_prefix).unwrap_or(site_path);

    // index.md files stop at the folder name
    if filename == "index.md" {
        rel.strip_suffix(filename).unwrap_or(rel).to_string()
    } else {
        rel.strip_suffix(".md").unwrap_or(rel).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_site_path() {
        let root = PathBuf::from("content");
        let path = root.join("post").join("foo").join("bar.md");
        assert_eq!(site_path(&root, &path).unwrap(), "/post/foo/bar.md");
    }

    #[test]
    fn test_site_path_top_level() {
        let root = PathBuf::from("content");
        assert_eq!(
            site_path(&root, &root.join("about.html")).unwrap(),
            "/about.html"
        );
    }

    #[test]
    fn test_site_path_outside_root() {
        let root = PathBuf::from("content");
        let err = site_path(&root, Path::new("elsewhere/about.html")).unwrap_err();
        assert!(matches!(err, IndexError::OutsideRoot(_)));
    }

    #[test]
    fn test_markdown_href_post() {
        assert_eq!(
            markdown_path_href("/post/foo/bar.md", "bar.md", "/post"),
            "/foo/bar"
        );
    }

    #[test]
    fn test_markdown_href_index() {
        assert_eq!(
            markdown_path_href("/post/foo/index.md", "index.md", "/post"),
            "/foo/"
        );
    }

    #[test]
    fn test_markdown_href_outside_prefix() {
        assert_eq!(markdown_path_href("/about.md", "about.md", "/post"), "/about");
    }

    #[test]
    fn test_markdown_href_custom_prefix() {
        assert_eq!(
            markdown_path_href("/blog/a.md", "a.md", "/blog"),
            "/a"
        );
    }
}
