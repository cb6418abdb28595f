//! Export extraction from reference source text.
//!
//! Scans a file line by line for `__all__` declarations and collects the
//! names listed in them. This is plain text scanning: nothing is tokenized
//! and malformed input simply yields fewer (or no) names.

/// Marker that opens a public-export declaration.
pub const EXPORT_MARKER: &str = "__all__";

/// Items starting with this character are comments, not exports.
const COMMENT_MARKER: char = '#';

/// Scanner state between lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum ScanState {
    /// Not inside any declaration.
    #[default]
    Outside,

    /// Inside a declaration whose closing bracket has not been seen yet.
    InsideBlock,
}

/// Extract the exported names declared in `content`.
///
/// Both the single-line form (`__all__ = ["A", "B"]`) and the bracketed
/// multi-line form are recognized. The scanner re-arms after each
/// declaration closes, so every declaration in the file contributes, in the
/// order encountered. Duplicates are kept.
pub fn extract_exports(content: &str) -> Vec<String> {
    let mut exports = Vec::new();
    let mut state = ScanState::Outside;

    for line in content.lines().map(str::trim) {
        state = match state {
            _ if line.starts_with(EXPORT_MARKER) => open_declaration(line, &mut exports),
            ScanState::InsideBlock => continue_declaration(line, &mut exports),
            ScanState::Outside => ScanState::Outside,
        };
    }

    exports
}

/// Handle a line that starts with the export marker.
fn open_declaration(line: &str, exports: &mut Vec<String>) -> ScanState {
    match (line.find('['), line.find(']')) {
        (Some(open), Some(close)) => {
            if close > open {
                exports.extend(parse_list_items(&line[open + 1..close]));
            }
            ScanState::Outside
        }
        _ => ScanState::InsideBlock,
    }
}

/// Handle a line inside an open declaration block.
fn continue_declaration(line: &str, exports: &mut Vec<String>) -> ScanState {
    match line.find(']') {
        Some(close) => {
            exports.extend(parse_list_items(&line[..close]));
            ScanState::Outside
        }
        None => {
            exports.extend(parse_list_items(line));
            ScanState::InsideBlock
        }
    }
}

/// Split a comma-separated fragment into export names.
fn parse_list_items(items: &str) -> impl Iterator<Item = String> + '_ {
    items
        .split(',')
        .map(|item| item.trim().trim_matches('"').trim_matches('\'').trim())
        .filter(|item| !item.is_empty() && !item.starts_with(COMMENT_MARKER))
        .map(str::to_string)
}
