//! Backward abbreviation scan: given a buffer and a caret offset, find the
//! longest trailing substring that forms a balanced abbreviation token.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

/// Characters stripped from the front of an accepted token; they are operator
/// prefixes, not part of the abbreviation body.
const OPERATOR_PREFIX: [char; 4] = ['*', '+', '>', '^'];

/// Character-class grammar for abbreviation tokens. Both predicates come from
/// the surrounding expansion engine; the extractor itself only knows about
/// delimiter nesting.
pub trait AbbreviationGrammar {
    /// Whether `ch` may appear in an abbreviation outside any delimiter pair.
    fn is_allowed_char(&self, ch: char) -> bool;

    /// Whether `prefix` ends with a closed markup tag. Consulted only when the
    /// scan meets a `>` outside delimiters, to keep tag ends from being
    /// swallowed into the token.
    fn ends_with_tag(&self, prefix: &str) -> bool;
}

static CLOSED_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"</?[\w:\-]+(?:\s+[\w\-:]+(?:\s*=\s*(?:"[^"]*"|'[^']*'|[^>\s]+))?)*\s*/?>$"#)
        .expect("closed-tag regex is valid")
});

/// Grammar used by the stock HTML/CSS expansion profiles.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultGrammar;

impl AbbreviationGrammar for DefaultGrammar {
    fn is_allowed_char(&self, ch: char) -> bool {
        ch.is_ascii_alphanumeric()
            || matches!(
                ch,
                '#' | '.' | '>' | '+' | '*' | ':' | '$' | '-' | '_' | '!' | '@' | '|' | '^'
            )
    }

    fn ends_with_tag(&self, prefix: &str) -> bool {
        CLOSED_TAG_RE.is_match(prefix)
    }
}

/// Depth counters for the three nestable delimiter pairs. Closers seen while
/// moving right-to-left increment, openers decrement; a counter below zero
/// means the caret sat inside a construct that never closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct NestingDepth {
    bracket: i32,
    brace: i32,
    group: i32,
}

impl NestingDepth {
    #[inline]
    fn is_balanced(&self) -> bool {
        self.bracket == 0 && self.brace == 0 && self.group == 0
    }

    /// Inside an attribute set or text node, where arbitrary characters are
    /// token content.
    #[inline]
    fn in_content(&self) -> bool {
        self.bracket > 0 || self.brace > 0
    }
}

/// Extracts the abbreviation ending at byte offset `end_offset`, scanning
/// backward toward the start of `text`. Returns the empty string when no
/// balanced, non-empty token ends there.
///
/// The balance check runs once, when the scan terminates: a counter may go
/// positive mid-scan as long as it is back to zero by the time a stop
/// condition fires.
pub fn extract_abbreviation<'a, G>(text: &'a str, end_offset: usize, grammar: &G) -> &'a str
where
    G: AbbreviationGrammar + ?Sized,
{
    if end_offset == 0 || end_offset > text.len() || !text.is_char_boundary(end_offset) {
        return "";
    }

    let head = &text[..end_offset];
    let mut depth = NestingDepth::default();
    let mut start = 0usize;

    for (idx, ch) in head.char_indices().rev() {
        let after = idx + ch.len_utf8();

        match ch {
            ']' => depth.bracket += 1,
            '[' => {
                depth.bracket -= 1;
                if depth.bracket < 0 {
                    start = after;
                    break;
                }
            }
            '}' => depth.brace += 1,
            '{' => {
                depth.brace -= 1;
                if depth.brace < 0 {
                    start = after;
                    break;
                }
            }
            ')' => depth.group += 1,
            '(' => {
                depth.group -= 1;
                if depth.group < 0 {
                    start = after;
                    break;
                }
            }
            _ => {
                if depth.in_content() {
                    continue;
                }
                if !grammar.is_allowed_char(ch)
                    || (ch == '>' && grammar.ends_with_tag(&head[..after]))
                {
                    start = after;
                    break;
                }
            }
        }
    }

    if !depth.is_balanced() {
        trace!(end_offset, ?depth, "abbreviation scan ended unbalanced");
        return "";
    }

    head[start..].trim_start_matches(OPERATOR_PREFIX)
}

/// Widens an expression outward from `caret`: left while `accept` holds, then
/// right the same way. `None` when no character on either side is accepted.
pub fn expression_bounds<F>(text: &str, caret: usize, accept: F) -> Option<Range<usize>>
where
    F: Fn(char) -> bool,
{
    if caret > text.len() || !text.is_char_boundary(caret) {
        return None;
    }

    let mut start = caret;
    for (idx, ch) in text[..caret].char_indices().rev() {
        if !accept(ch) {
            break;
        }
        start = idx;
    }

    let mut end = caret;
    for (idx, ch) in text[caret..].char_indices() {
        if !accept(ch) {
            break;
        }
        end = caret + idx + ch.len_utf8();
    }

    (end > start).then_some(start..end)
}
