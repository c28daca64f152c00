//! Text codec for TODO.md
//!
//! One item per non-blank line, each starting with a checkbox marker:
//!
//! ```text
//! - [ ] Buy milk
//! - [x] Walk the dog
//! ```
//!
//! Only a lowercase `x` inside the brackets marks an item as checked. Lines
//! without a marker are skipped with a warning rather than guessed at. They
//! are not part of the decoded list, so the next write drops them from the
//! file.

use crate::types::TodoItem;

const MARKER_OPEN: &str = "- [";
const CHECKED_MARK: char = 'x';

/// Parse checklist text into items, preserving order
pub fn decode(text: &str) -> Vec<TodoItem> {
    text.split('\n')
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .filter_map(|(index, line)| {
            let item = parse_line(line);
            if item.is_none() {
                tracing::warn!(line = index + 1, "Skipping line without checkbox marker");
            }
            item
        })
        .collect()
}

/// Render items back to checklist text.
///
/// Lines are joined with `\n` and no trailing newline is written, so an empty
/// list encodes to an empty string.
pub fn encode(items: &[TodoItem]) -> String {
    items
        .iter()
        .map(|item| {
            let mark = if item.is_checked { CHECKED_MARK } else { ' ' };
            format!("{MARKER_OPEN}{mark}] {}", item.name)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `- [?]` followed by end of line or whitespace, then the name
fn parse_line(line: &str) -> Option<TodoItem> {
    let rest = line.strip_prefix(MARKER_OPEN)?;
    let mut chars = rest.chars();
    let mark = chars.next()?;
    let rest = chars.as_str().strip_prefix(']')?;

    if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
        return None;
    }

    Some(TodoItem {
        name: rest.trim().to_string(),
        is_checked: mark == CHECKED_MARK,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_basic() {
        let items = decode("- [ ] Buy milk\n- [x] Walk the dog");
        assert_eq!(
            items,
            vec![TodoItem::new("Buy milk"), TodoItem::checked("Walk the dog")]
        );
    }

    #[test]
    fn test_decode_empty() {
        assert!(decode("").is_empty());
        assert!(decode("\n\n   \n\t\n").is_empty());
    }

    #[test]
    fn test_decode_skips_blank_lines() {
        let items = decode("\n- [ ] a\n\n   \n- [x] b\n");
        assert_eq!(items, vec![TodoItem::new("a"), TodoItem::checked("b")]);
    }

    #[test]
    fn test_uppercase_x_is_unchecked() {
        let items = decode("- [X] shouted");
        assert_eq!(items, vec![TodoItem::new("shouted")]);
    }

    #[test]
    fn test_other_bracket_content_is_unchecked() {
        let items = decode("- [-] dashed\n- [é] accented");
        assert_eq!(
            items,
            vec![TodoItem::new("dashed"), TodoItem::new("accented")]
        );
    }

    #[test]
    fn test_name_is_trimmed() {
        let items = decode("- [x]    spaced out   \r");
        assert_eq!(items, vec![TodoItem::checked("spaced out")]);
    }

    #[test]
    fn test_crlf_input() {
        let items = decode("- [ ] one\r\n- [x] two\r\n");
        assert_eq!(items, vec![TodoItem::new("one"), TodoItem::checked("two")]);
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let items = decode("- [\n# Heading\nplain text\n- [x]nospace\n- [ ] kept\nx");
        assert_eq!(items, vec![TodoItem::new("kept")]);
    }

    #[test]
    fn test_bare_marker_is_empty_name() {
        assert_eq!(decode("- [ ]"), vec![TodoItem::new("")]);
        assert_eq!(decode("- [x] "), vec![TodoItem::checked("")]);
    }

    #[test]
    fn test_encode() {
        let text = encode(&[TodoItem::new("Buy milk"), TodoItem::checked("Walk the dog")]);
        assert_eq!(text, "- [ ] Buy milk\n- [x] Walk the dog");
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode(&[]), "");
    }

    #[test]
    fn test_round_trip() {
        let items = vec![
            TodoItem::new("Buy milk"),
            TodoItem::checked("Walk the dog"),
            TodoItem::new("Call [x] back"),
            TodoItem::checked("emoji ✅ inside"),
            TodoItem::new("Buy milk"),
        ];
        assert_eq!(decode(&encode(&items)), items);
    }

    #[test]
    fn test_reencode_is_byte_identical() {
        let text = "- [ ] a\n- [x] b\n- [ ] c";
        assert_eq!(encode(&decode(text)), text);
    }
}
