//! Delimited example blocks.
//!
//! Example payloads ship as a single text blob with each payload wrapped in
//! `---BEGIN <NAME>---` / `---END <NAME>---` marker lines. Markers must be
//! balanced, names unique, and blocks must not nest.

const BEGIN_PREFIX: &str = "---BEGIN ";
const END_PREFIX: &str = "---END ";
const MARKER_SUFFIX: &str = "---";

/// One named example extracted from a delimited blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleBlock {
    pub name: String,
    pub body: String,
}

#[derive(Debug, thiserror::Error)]
pub enum BlockError {
    #[error("block never terminated: {0}")]
    Unterminated(String),
    #[error("end marker without matching begin: {0}")]
    UnmatchedEnd(String),
    #[error("end marker {found} does not match open block {expected}")]
    MismatchedEnd { expected: String, found: String },
    #[error("duplicate block name: {0}")]
    DuplicateName(String),
    #[error("block {inner} opened inside {outer}")]
    NestedBlock { outer: String, inner: String },
    #[error("malformed marker line: {0}")]
    MalformedMarker(String),
    #[error("block not found: {0}")]
    NotFound(String),
}

/// Parse a delimited blob into its named blocks, in order of appearance.
///
/// Text outside any block (surrounding prose, blank lines) is ignored.
pub fn parse_blocks(text: &str) -> Result<Vec<ExampleBlock>, BlockError> {
    let mut blocks: Vec<ExampleBlock> = Vec::new();
    let mut open: Option<(String, Vec<&str>)> = None;

    for line in text.lines() {
        let trimmed = line.trim();
        if let Some(name) = marker_name(trimmed, BEGIN_PREFIX)? {
            if let Some((outer, _)) = &open {
                return Err(BlockError::NestedBlock { outer: outer.clone(), inner: name });
            }
            if blocks.iter().any(|b| b.name == name) {
                return Err(BlockError::DuplicateName(name));
            }
            open = Some((name, Vec::new()));
        } else if let Some(name) = marker_name(trimmed, END_PREFIX)? {
            match open.take() {
                None => return Err(BlockError::UnmatchedEnd(name)),
                Some((opened, lines)) => {
                    if opened != name {
                        return Err(BlockError::MismatchedEnd { expected: opened, found: name });
                    }
                    blocks.push(ExampleBlock { name, body: lines.join("\n") });
                }
            }
        } else if let Some((_, lines)) = &mut open {
            lines.push(line);
        }
    }

    if let Some((name, _)) = open {
        return Err(BlockError::Unterminated(name));
    }

    Ok(blocks)
}

/// Extract a single block by name.
pub fn find_block(text: &str, name: &str) -> Result<ExampleBlock, BlockError> {
    parse_blocks(text)?
        .into_iter()
        .find(|b| b.name == name)
        .ok_or_else(|| BlockError::NotFound(name.to_string()))
}

fn marker_name(line: &str, prefix: &str) -> Result<Option<String>, BlockError> {
    let Some(rest) = line.strip_prefix(prefix) else {
        return Ok(None);
    };
    match rest.strip_suffix(MARKER_SUFFIX) {
        Some(name) if !name.is_empty() && !name.contains(char::is_whitespace) => {
            Ok(Some(name.to_string()))
        }
        _ => Err(BlockError::MalformedMarker(line.to_string())),
    }
}
