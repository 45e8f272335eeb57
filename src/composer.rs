//! Renders a [`ProjectMapping`] as a spec document.

use crate::mapping::ProjectMapping;

/// The rule on each side of a separator line. Twenty characters when
/// composing; the splitter accepts any run of ten or more.
const RULE: &str = "====================";

/// Serializes a mapping as a spec document.
///
/// Entries are emitted in canonical path order, so packaging the same tree
/// twice produces byte-identical documents. Each entry is a separator line,
/// the raw content, and one blank line. No quote fencing is added: the
/// splitter's unfencing exists for externally authored documents, and
/// round-tripping composed output does not rely on it.
///
/// `split_document(compose_document(&m))` reproduces `m` exactly as long as
/// no content string contains a line of separator shape (an inherent format
/// limitation) and content is whitespace-trimmed (the splitter trims).
pub fn compose_document(mapping: &ProjectMapping) -> String {
    let mut parts = Vec::with_capacity(mapping.len() * 3);
    for (path, content) in mapping.iter() {
        parts.push(format!("# {RULE} {path} {RULE}"));
        parts.push(content.to_string());
        parts.push(String::new());
    }
    parts.join("\n")
}
