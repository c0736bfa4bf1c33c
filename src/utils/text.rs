//! Plain-text extraction for indexed content.
//!
//! Search widgets tokenize on whitespace, so indexed content carries no
//! markup and no punctuation:
//! - `strip_tags()` - remove markup, keep text nodes
//! - `strip_punctuation()` - remove punctuation, collapse whitespace
//! - `plain_content()` - the full trim -> tags -> punctuation pipeline

use regex::Regex;
use std::sync::LazyLock;

/// Fallback tag stripper for fragments `tl` refuses to parse.
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Punctuation: anything that is neither a word character nor whitespace.
static PUNCT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s]|_").unwrap());

/// Whitespace runs left behind by removed markup.
static SPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s{2,}").unwrap());

/// Remove markup tags, keeping the text content.
///
/// Parses with `tl` and concatenates the text of the top-level nodes.
/// Falls back to regex removal if the fragment cannot be parsed.
pub fn strip_tags(input: &str) -> String {
    match tl::parse(input, tl::ParserOptions::default()) {
        Ok(dom) => {
            let parser = dom.parser();
            let mut out = String::with_capacity(input.len());
            for handle in dom.children() {
                if let Some(node) = handle.get(parser) {
                    out.push_str(&node.inner_text(parser));
                }
            }
            out
        }
        Err(_) => TAG_RE.replace_all(input, "").into_owned(),
    }
}

/// Remove punctuation characters and collapse whitespace runs.
pub fn strip_punctuation(input: &str) -> String {
    let stripped = PUNCT_RE.replace_all(input, "");
    SPACE_RE.replace_all(&stripped, " ").into_owned()
}

/// Reduce raw page text to indexable plain text:
/// trim, then strip markup tags, then strip punctuation.
pub fn plain_content(input: &str) -> String {
    strip_punctuation(&strip_tags(input.trim()))
}
