//! Re-indent compact text for display.
//!
//! The inverse of normalization as far as layout goes: one statement per
//! line, blocks indented, operators padded. Quoted text is copied as is.

use crate::config::DEFAULT_INDENT;

const OPERATORS: &[char] = &['<', '>', '=', '&', '|', '+', '-', '*', '/', '%'];

fn is_operator(ch: char) -> bool {
    OPERATORS.contains(&ch)
}

/// Lay out `compact` inside a block opened by `header`, using the default
/// indent.
pub fn beautify(compact: &str, header: &str) -> String {
    beautify_with_indent(compact, header, DEFAULT_INDENT)
}

/// Lay out `compact` inside a block opened by `header`.
///
/// `{` ends a line and indents the following ones by `indent` more columns;
/// `}` goes on a line of its own one step out; `;` ends a line. An operator
/// character gets a space on each side that touches a non-operator, except
/// at the very start or end of the text. A closing `}` line ends the block.
pub fn beautify_with_indent(compact: &str, header: &str, indent: usize) -> String {
    let chars: Vec<char> = compact.chars().collect();
    let mut out = String::with_capacity(header.len() + compact.len() * 2);
    out.push_str(header);
    out.push('\n');

    let mut level = indent;
    let mut in_quotes = false;
    let mut line_start = true;
    for (i, &ch) in chars.iter().enumerate() {
        let prev = i.checked_sub(1).map(|p| chars[p]);
        let next = chars.get(i + 1).copied();

        if ch == '"' && prev != Some('\\') {
            in_quotes = !in_quotes;
        } else if in_quotes {
            out.push(ch);
            continue;
        }

        match ch {
            '{' => {
                if line_start {
                    push_indent(&mut out, level);
                    out.push_str("{\n");
                } else {
                    out.push_str(" {\n");
                }
                level += indent;
                line_start = true;
            }
            '}' => {
                if !line_start {
                    out.push('\n');
                }
                level = level.saturating_sub(indent);
                push_indent(&mut out, level);
                out.push_str("}\n");
                line_start = true;
            }
            ';' => {
                out.push_str(";\n");
                line_start = true;
            }
            _ => {
                let padded = is_operator(ch) && prev.is_some() && next.is_some();
                if line_start {
                    push_indent(&mut out, level);
                    line_start = false;
                } else if padded && prev.is_some_and(|p| !is_operator(p)) {
                    out.push(' ');
                }
                out.push(ch);
                if padded && next.is_some_and(|n| !is_operator(n)) {
                    out.push(' ');
                }
            }
        }
    }

    if !line_start {
        out.push('\n');
    }
    out.push_str("}\n");
    out
}

fn push_indent(out: &mut String, width: usize) {
    out.push_str(&" ".repeat(width));
}
