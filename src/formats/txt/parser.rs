//! Text document segmentation and block parsing

use super::{
    BlockBody, EMPTY_MARKER, Fragment, HEADER_PREFIX, INVALID_MARKER, LINE_BREAK_TAG,
    REFERENCE_MARK, TextBlock,
};

/// Parser state while walking a block body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    Normal,
    InReference,
}

/// Split a document into blocks at every `[String ID:` header line.
///
/// Lines before the first header end up in a headerless leading group,
/// which [`parse_block`] rejects.
#[must_use]
pub fn split_blocks(content: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in content.lines() {
        if line.starts_with(HEADER_PREFIX) && !current.is_empty() {
            blocks.push(std::mem::take(&mut current));
        }
        current.push(line);
    }
    if !current.is_empty() {
        blocks.push(current);
    }
    blocks
}

/// Parse one block's lines (header line first) into a [`TextBlock`].
///
/// Returns `None` when the first line is not a well-formed header. An
/// `{EMPTY}` or `{INVALID}` body line finishes the block immediately;
/// any remaining lines are ignored. Lines inside an open `//...//`
/// reference annotation are discarded whatever they contain, and blank
/// lines outside one are skipped.
#[must_use]
pub fn parse_block(lines: &[&str]) -> Option<TextBlock> {
    let (&header, body) = lines.split_first()?;
    let id = parse_header_id(header)?;

    let mut fragments = Vec::new();
    let mut state = ParseState::Normal;
    for &line in body {
        match state {
            ParseState::InReference => {
                if line.ends_with(REFERENCE_MARK) {
                    state = ParseState::Normal;
                }
            }
            ParseState::Normal => {
                if line.is_empty() {
                    continue;
                }
                if line == EMPTY_MARKER {
                    return Some(TextBlock {
                        id,
                        body: BlockBody::Text(Vec::new()),
                    });
                }
                if line == INVALID_MARKER {
                    return Some(TextBlock {
                        id,
                        body: BlockBody::Invalid,
                    });
                }
                if line.starts_with(REFERENCE_MARK) {
                    // A line that also ends with the mark opens and
                    // closes the reference in one go.
                    if !line.ends_with(REFERENCE_MARK) {
                        state = ParseState::InReference;
                    }
                    continue;
                }
                if let Some(text) = line.strip_suffix(LINE_BREAK_TAG) {
                    fragments.push(Fragment {
                        text: text.to_string(),
                        needs_break: true,
                    });
                } else {
                    fragments.push(Fragment {
                        text: line.to_string(),
                        needs_break: false,
                    });
                }
            }
        }
    }

    Some(TextBlock {
        id,
        body: BlockBody::Text(fragments),
    })
}

/// Pull the string ID out of a `[String ID: <n>]` header line.
fn parse_header_id(line: &str) -> Option<u32> {
    let rest = line.strip_prefix("[String ID: ")?;
    let digits = &rest[..rest.find(']')?];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fragment(text: &str, needs_break: bool) -> Fragment {
        Fragment {
            text: text.to_string(),
            needs_break,
        }
    }

    #[test]
    fn test_leading_lines_form_headerless_group() {
        let doc = "stray line\n[String ID: 0] [A]\nHello\n\n[String ID: 1] [B]\nWorld\n";
        let blocks = split_blocks(doc);
        assert_eq!(blocks.len(), 3);
        // The stray leading group has no header and parses to nothing.
        assert_eq!(parse_block(&blocks[0]), None);
        assert_eq!(parse_block(&blocks[1]).unwrap().id, 0);
        assert_eq!(parse_block(&blocks[2]).unwrap().id, 1);
    }

    #[test]
    fn test_header_id_forms() {
        assert_eq!(parse_header_id("[String ID: 42] [Name]"), Some(42));
        assert_eq!(parse_header_id("[String ID: 0]"), Some(0));
        assert_eq!(parse_header_id("[String ID: x]"), None);
        assert_eq!(parse_header_id("[String ID: ]"), None);
        assert_eq!(parse_header_id("[String ID: +3]"), None);
        assert_eq!(parse_header_id("String ID: 3]"), None);
    }

    #[test]
    fn test_line_break_tags() {
        let lines = vec!["[String ID: 5] [X]", "Line1{LF}", "Line2"];
        let block = parse_block(&lines).unwrap();
        assert_eq!(
            block.body,
            BlockBody::Text(vec![fragment("Line1", true), fragment("Line2", false)])
        );
        assert_eq!(block.body.assemble(), "Line1\nLine2");
    }

    #[test]
    fn test_empty_marker_stops_parsing() {
        let lines = vec!["[String ID: 1] [X]", "{EMPTY}", "ignored tail"];
        let block = parse_block(&lines).unwrap();
        assert_eq!(block.body, BlockBody::Text(vec![]));
        assert_eq!(block.body.assemble(), "");
    }

    #[test]
    fn test_invalid_marker_distinct_from_empty() {
        let lines = vec!["[String ID: 1] [X]", "{INVALID}", "ignored"];
        let block = parse_block(&lines).unwrap();
        assert_eq!(block.body, BlockBody::Invalid);
        assert_eq!(block.body.assemble(), "");
    }

    #[test]
    fn test_single_line_reference_discarded() {
        let lines = vec!["[String ID: 2] [X]", "//old text//", "new text"];
        let block = parse_block(&lines).unwrap();
        assert_eq!(block.body, BlockBody::Text(vec![fragment("new text", false)]));
    }

    #[test]
    fn test_multi_line_reference_discarded() {
        let lines = vec![
            "[String ID: 2] [X]",
            "//old line 1{LF}",
            "old line 2//",
            "new text",
        ];
        let block = parse_block(&lines).unwrap();
        assert_eq!(block.body, BlockBody::Text(vec![fragment("new text", false)]));
    }

    #[test]
    fn test_sentinels_inside_reference_are_discarded() {
        let lines = vec![
            "[String ID: 2] [X]",
            "//opening{LF}",
            "{INVALID}",
            "closing//",
            "kept",
        ];
        let block = parse_block(&lines).unwrap();
        assert_eq!(block.body, BlockBody::Text(vec![fragment("kept", false)]));
    }

    #[test]
    fn test_bare_mark_is_a_single_line_reference() {
        // "//" both opens and closes; the next line is ordinary text.
        let lines = vec!["[String ID: 3] [X]", "//", "kept"];
        let block = parse_block(&lines).unwrap();
        assert_eq!(block.body, BlockBody::Text(vec![fragment("kept", false)]));
    }

    #[test]
    fn test_blank_lines_skipped() {
        let lines = vec!["[String ID: 4] [X]", "", "text", ""];
        let block = parse_block(&lines).unwrap();
        assert_eq!(block.body, BlockBody::Text(vec![fragment("text", false)]));
    }

    #[test]
    fn test_lone_line_break_tag_keeps_empty_fragment() {
        let lines = vec!["[String ID: 6] [X]", "{LF}"];
        let block = parse_block(&lines).unwrap();
        assert_eq!(block.body, BlockBody::Text(vec![fragment("", true)]));
        assert_eq!(block.body.assemble(), "\n");
    }
}
