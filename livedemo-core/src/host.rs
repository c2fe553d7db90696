//! Host document seam and a minimal AsciiDoc page adapter.
//!
//! The extension only needs three things from a host document engine: the
//! document attributes, a way to create an open block under the macro's
//! parent, and a way to parse rendered text into that block. [`BlockParent`]
//! captures exactly that. [`AdocPage`] is a line-oriented implementation used
//! by the CLI: it reads header attributes, finds block macro lines and stores
//! parsed content as lines.

use crate::error::HostError;
use crate::types::Attributes;

/// Name of the block macro handled by this extension.
pub const MACRO_NAME: &str = "liveDemo";

/// Open block delimiter.
pub const OPEN_BLOCK_DELIMITER: &str = "--";

// ---------------------------------------------------------------------------
// BlockParent
// ---------------------------------------------------------------------------

/// The node a block macro was found under.
pub trait BlockParent {
    type Block;

    /// Attributes of the enclosing document.
    fn document_attributes(&self) -> Attributes;

    /// Create an empty open block attached under this parent.
    fn create_open_block(&mut self) -> Self::Block;

    /// Parse `source` with the host's native syntax into `block`.
    fn parse_content(&mut self, block: &mut Self::Block, source: &str) -> Result<(), HostError>;
}

// ---------------------------------------------------------------------------
// Block macros
// ---------------------------------------------------------------------------

/// One `name::target[attributes]` occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockMacro {
    /// 1-based source line.
    pub line: usize,
    pub name: String,
    pub target: String,
    pub attributes: Attributes,
}

/// Parse `line` as a block macro called `name`.
///
/// Returns `Ok(None)` when the line is not that macro at all, and an error when
/// it starts like one but is malformed.
pub fn parse_block_macro(
    line: &str,
    name: &str,
    line_no: usize,
) -> Result<Option<BlockMacro>, HostError> {
    let trimmed = line.trim();
    let Some(rest) = trimmed
        .strip_prefix(name)
        .and_then(|r| r.strip_prefix("::"))
    else {
        return Ok(None);
    };

    let malformed = |message: &str| HostError::MalformedMacro {
        line: line_no,
        message: message.to_string(),
    };

    let open = rest.find('[').ok_or_else(|| malformed("missing '['"))?;
    let body = rest[open + 1..]
        .strip_suffix(']')
        .ok_or_else(|| malformed("missing closing ']'"))?;
    let target = rest[..open].trim();
    if target.is_empty() {
        return Err(malformed("missing target"));
    }

    Ok(Some(BlockMacro {
        line: line_no,
        name: name.to_string(),
        target: target.to_string(),
        attributes: parse_attribute_list(body),
    }))
}

/// Parse an AsciiDoc attribute list (`a=1,b="two, three",positional`).
///
/// Positional entries are keyed by their 1-based index.
pub fn parse_attribute_list(body: &str) -> Attributes {
    let mut attrs = Attributes::new();
    for (idx, entry) in split_unquoted(body).into_iter().enumerate() {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        match entry.split_once('=') {
            Some((key, value)) => {
                attrs.insert(key.trim(), unquote(value.trim()));
            }
            None => {
                attrs.insert((idx + 1).to_string(), unquote(entry));
            }
        }
    }
    attrs
}

fn split_unquoted(body: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut quote: Option<char> = None;
    let mut start = 0;
    for (i, c) in body.char_indices() {
        match (quote, c) {
            (None, '"' | '\'') => quote = Some(c),
            (Some(q), c) if c == q => quote = None,
            (None, ',') => {
                parts.push(&body[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&body[start..]);
    parts
}

fn unquote(value: &str) -> String {
    for q in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(q)
            .and_then(|v| v.strip_suffix(q))
        {
            return inner.to_string();
        }
    }
    value.to_string()
}

// ---------------------------------------------------------------------------
// AdocPage
// ---------------------------------------------------------------------------

/// Open block produced for a macro occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenBlock {
    pub lines: Vec<String>,
}

impl OpenBlock {
    /// Delimited AsciiDoc form of this block.
    pub fn to_asciidoc(&self) -> String {
        let mut out = String::new();
        out.push_str(OPEN_BLOCK_DELIMITER);
        out.push('\n');
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out.push_str(OPEN_BLOCK_DELIMITER);
        out
    }
}

/// A single AsciiDoc page held as lines.
#[derive(Debug, Clone)]
pub struct AdocPage {
    attributes: Attributes,
    lines: Vec<String>,
}

impl AdocPage {
    /// Parse `source`, layering its header attribute entries over `defaults`.
    pub fn parse(source: &str, defaults: &Attributes) -> Self {
        let lines: Vec<String> = source.lines().map(str::to_string).collect();
        let mut attributes = defaults.clone();
        attributes.merge(&header_attributes(&lines));
        Self { attributes, lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Every `name::` block macro on the page, in source order.
    pub fn block_macros(&self, name: &str) -> Result<Vec<BlockMacro>, HostError> {
        let mut found = Vec::new();
        for (idx, line) in self.lines.iter().enumerate() {
            if let Some(m) = parse_block_macro(line, name, idx + 1)? {
                found.push(m);
            }
        }
        Ok(found)
    }
}

/// `:name: value` entries from the document header (lines before the first blank line).
fn header_attributes(lines: &[String]) -> Attributes {
    let mut attrs = Attributes::new();
    for line in lines.iter().take_while(|l| !l.trim().is_empty()) {
        let Some(rest) = line.strip_prefix(':') else { continue };
        let Some((name, value)) = rest.split_once(':') else { continue };
        if name.is_empty() || name.contains(char::is_whitespace) {
            continue;
        }
        attrs.insert(name, value.trim());
    }
    attrs
}

impl BlockParent for AdocPage {
    type Block = OpenBlock;

    fn document_attributes(&self) -> Attributes {
        self.attributes.clone()
    }

    fn create_open_block(&mut self) -> OpenBlock {
        OpenBlock::default()
    }

    fn parse_content(&mut self, block: &mut OpenBlock, source: &str) -> Result<(), HostError> {
        for line in source.lines() {
            if line.trim_end() == OPEN_BLOCK_DELIMITER {
                return Err(HostError::Rejected(
                    "content contains a bare open block delimiter".to_string(),
                ));
            }
            block.lines.push(line.trim_end_matches('\r').to_string());
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
