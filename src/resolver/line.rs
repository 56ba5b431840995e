//! Line-oriented `$ref` detection and re-indentation.
//!
//! A line is split on the indentation unit; the index of a token in that
//! split is its indentation depth. The first token that starts with a
//! reference key, optionally behind a `- ` list marker, makes the line a
//! reference line:
//!
//! ```text
//! "    $ref: ./child.yaml"      -> depth 2, not a list item, target "./child.yaml"
//! "  - '$ref': 'item.yaml'"     -> depth 1, list item,       target "item.yaml"
//! "  $ref: '#/definitions/x'"   -> anchor, left untouched
//! ```
//!
//! This is a textual heuristic, not a YAML tokenizer: a token such as
//! `$refs: 3` at the start of an indentation segment is also taken for a
//! reference.

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

/// The list-item marker a reference may be prefixed with.
pub const LIST_MARKER: &str = "- ";

/// A reference extracted from a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// Number of indentation units in front of the reference token
    pub depth: usize,
    /// Whether the token carried a `- ` list marker
    pub list_item: bool,
    /// The target file, with quote characters removed
    pub target: String,
}

/// What a line turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// No reference key on the line
    Plain,
    /// A reference to an in-document anchor (`#/...`), passed through verbatim
    Anchor(String),
    /// A reference to another file
    Reference(Reference),
}

/// A reference key without a usable target.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct MalformedReference {
    /// What is wrong with the reference
    pub reason: String,
}

fn reference_key() -> &'static Regex {
    static KEY: OnceLock<Regex> = OnceLock::new();
    KEY.get_or_init(|| {
        Regex::new(r#"^(- )?(?:\$ref|"\$ref"|'\$ref')"#).expect("reference key pattern is valid")
    })
}

/// Classify `line`, splitting it on `unit`.
///
/// Only the first token carrying a reference key is considered; later
/// tokens on the same line are never examined.
///
/// # Errors
///
/// Returns [`MalformedReference`] when the key is not followed by a
/// whitespace-separated target.
pub fn classify(line: &str, unit: &str) -> Result<LineKind, MalformedReference> {
    for (depth, token) in line.split(unit).enumerate() {
        let Some(captures) = reference_key().captures(token) else {
            continue;
        };

        let list_item = captures.get(1).is_some();
        let body = if list_item {
            &token[LIST_MARKER.len()..]
        } else {
            token
        };

        let target = extract_target(body)?;
        if target.starts_with('#') {
            return Ok(LineKind::Anchor(target));
        }

        return Ok(LineKind::Reference(Reference {
            depth,
            list_item,
            target,
        }));
    }

    Ok(LineKind::Plain)
}

/// The value following the key, quote characters removed.
fn extract_target(body: &str) -> Result<String, MalformedReference> {
    let Some(value) = body.split(' ').nth(1) else {
        return Err(MalformedReference {
            reason: "missing target after the $ref key".to_string(),
        });
    };

    let target = clean_target(value);
    if target.is_empty() {
        return Err(MalformedReference {
            reason: "empty $ref target".to_string(),
        });
    }
    Ok(target)
}

/// Remove every quote character and trailing whitespace (including a CR left
/// over from CRLF line endings) from a reference value.
#[must_use]
pub fn clean_target(value: &str) -> String {
    value.replace(['"', '\''], "").trim_end().to_string()
}

/// Re-indent a resolved sub-document so it can replace the reference line.
///
/// Every line receives `depth` indentation units. For list-item references
/// the first line is prefixed with the list marker and the following lines
/// are indented by the marker width on top, which nests the item body under
/// the dash.
#[must_use]
pub fn indent_block(block: &str, reference: &Reference, unit: &str) -> String {
    let base = unit.repeat(reference.depth);
    let continuation = format!("{base}{}", " ".repeat(LIST_MARKER.len()));

    block
        .split('\n')
        .enumerate()
        .map(|(index, line)| match (reference.list_item, index) {
            (true, 0) => format!("{base}{LIST_MARKER}{line}"),
            (true, _) => format!("{continuation}{line}"),
            (false, _) => format!("{base}{line}"),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
