//! Plain-text layout helpers.

/// Left (and right) margin applied to issue and comment bodies.
pub const DEFAULT_INDENT: usize = 2;

/// Re-flow `text` so it fits `columns` minus an `indent`-wide margin on both sides.
///
/// Existing line breaks are kept. Lines that already fit are emitted verbatim;
/// longer lines are packed greedily word by word. A word wider than the
/// available space gets a line of its own rather than being split.
pub fn wrap(text: &str, indent: usize, columns: usize) -> String {
    let budget = columns.saturating_sub(indent * 2).max(1);
    let margin = " ".repeat(indent);
    let mut out = String::new();

    for line in text.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if width(line) <= budget {
            push_line(&mut out, &margin, line);
            continue;
        }

        let mut current = String::new();
        for word in line.split_whitespace() {
            if !current.is_empty() && width(&current) + 1 + width(word) > budget {
                push_line(&mut out, &margin, &current);
                current.clear();
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        if !current.is_empty() {
            push_line(&mut out, &margin, &current);
        }
    }

    if out.ends_with('\n') {
        out.pop();
    }
    out
}

/// Pad `text` on the right to `target` visible columns.
pub fn pad_right(text: &str, target: usize) -> String {
    let len = width(text);
    if len >= target {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(target - len))
    }
}

/// Pad `text` on the left to `target` visible columns.
pub fn pad_left(text: &str, target: usize) -> String {
    let len = width(text);
    if len >= target {
        text.to_string()
    } else {
        format!("{}{}", " ".repeat(target - len), text)
    }
}

pub fn width(text: &str) -> usize {
    text.chars().count()
}

fn push_line(out: &mut String, margin: &str, line: &str) {
    out.push_str(margin);
    out.push_str(line);
    out.push('\n');
}
