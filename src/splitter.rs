//! Splits a spec document into its (path, content) entries.

use crate::error::Error;
use crate::mapping::{ProjectMapping, RelPath};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

/// A separator line is `# `, ten or more `=`, one space, the path, one
/// space, ten or more `=`, and nothing else.
static SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^# ={10,} (.+?) ={10,}$").unwrap());

/// Parses a spec document into a [`ProjectMapping`].
///
/// Text before the first separator is discarded. Each separator starts the
/// content of the path it names, running to the next separator or the end of
/// the document. Path and content are whitespace-trimmed, and a content
/// block fenced in matching triple quotes is unfenced once. If a path occurs
/// more than once, the later occurrence wins. A document with no separators
/// yields an empty mapping.
pub fn split_document(document: &str) -> Result<ProjectMapping, Error> {
    let mut mapping = ProjectMapping::new();

    let separators: Vec<(usize, usize, &str)> = SEPARATOR
        .captures_iter(document)
        .map(|caps| {
            let whole = caps.get(0).unwrap();
            let path = caps.get(1).unwrap().as_str();
            (whole.start(), whole.end(), path)
        })
        .collect();

    for (i, &(_, end, raw_path)) in separators.iter().enumerate() {
        let content_end = separators
            .get(i + 1)
            .map_or(document.len(), |&(next_start, _, _)| next_start);

        let path = RelPath::parse(raw_path)?;
        let content = unfence(document[end..content_end].trim());
        debug!("parsed {path}");
        mapping.insert(path, content.to_string());
    }

    Ok(mapping)
}

/// Strips one pair of matching triple-quote delimiters from a trimmed
/// content block, re-trimming the inner text. A block shorter than two
/// delimiters (e.g. a lone `"""`) is not a fence and is left alone.
fn unfence(content: &str) -> &str {
    for delim in [r#"""""#, "'''"] {
        if content.len() >= 2 * delim.len()
            && content.starts_with(delim)
            && content.ends_with(delim)
        {
            return content[delim.len()..content.len() - delim.len()].trim();
        }
    }
    content
}
