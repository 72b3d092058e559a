//! Text document emission

use std::collections::HashMap;

use super::{EMPTY_MARKER, INVALID_MARKER, LINE_BREAK_TAG, REFERENCE_MARK};

/// Emit one block: header line, optional reference annotation, body, and
/// the blank terminator line.
///
/// Multi-line strings get the `[Do not remove {LF} tags]` header suffix
/// and their interior breaks rendered as trailing `{LF}` tags; an empty
/// string becomes a literal `{EMPTY}` line.
pub fn emit_block(out: &mut String, id: u32, name: &str, text: &str, reference: Option<&str>) {
    if text.contains('\n') {
        out.push_str(&format!(
            "[String ID: {id}] [{name}] [Do not remove {LINE_BREAK_TAG} tags]\n"
        ));
    } else {
        out.push_str(&format!("[String ID: {id}] [{name}]\n"));
    }

    if let Some(original) = reference {
        emit_reference(out, original);
    }

    if text.is_empty() {
        out.push_str(EMPTY_MARKER);
        out.push('\n');
    } else {
        let lines: Vec<&str> = text.split('\n').collect();
        for (i, line) in lines.iter().enumerate() {
            out.push_str(line);
            if i < lines.len() - 1 {
                out.push_str(LINE_BREAK_TAG);
                out.push('\n');
            } else if !line.is_empty() {
                out.push('\n');
            }
        }
    }

    out.push('\n');
}

/// Render the original text between `//` marks, using the same `{LF}`
/// convention as block bodies. The annotation exists purely for
/// translator context and is discarded again on packing.
fn emit_reference(out: &mut String, original: &str) {
    if original.is_empty() {
        out.push_str(&format!("{REFERENCE_MARK}{EMPTY_MARKER}{REFERENCE_MARK}\n"));
        return;
    }
    if original == INVALID_MARKER {
        out.push_str(&format!(
            "{REFERENCE_MARK}{INVALID_MARKER}{REFERENCE_MARK}\n"
        ));
        return;
    }
    out.push_str(REFERENCE_MARK);
    let lines: Vec<&str> = original.split('\n').collect();
    for (i, line) in lines.iter().enumerate() {
        out.push_str(line);
        if i < lines.len() - 1 {
            out.push_str(LINE_BREAK_TAG);
            out.push('\n');
        }
    }
    out.push_str(REFERENCE_MARK);
    out.push('\n');
}

/// Emit a whole document: one block per string in ID order, labels taken
/// from `names` with a `String_<id>` fallback, and reference text paired
/// by index where the reference container has one.
#[must_use]
pub fn emit_document(
    strings: &[String],
    names: &HashMap<u32, String>,
    reference: Option<&[String]>,
) -> String {
    let mut out = String::new();
    for (index, text) in strings.iter().enumerate() {
        let id = index as u32;
        let name = names
            .get(&id)
            .cloned()
            .unwrap_or_else(|| format!("String_{id}"));
        let original = reference
            .and_then(|strings| strings.get(index))
            .map(String::as_str);
        emit_block(&mut out, id, &name, text, original);
    }
    out
}
