//! Small text helpers shared by the UI components.

/// ANSI sequence moving the cursor to a 0-based `(row, col)`.
#[must_use]
pub fn cursor_to(row: usize, col: usize) -> String {
    format!("\u{1b}[{};{}H", row + 1, col + 1)
}

/// Truncates `text` to `width` characters, ending with `…` when cut.
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(width - 1).collect();
    out.push('…');
    out
}

/// Greedy word wrap into at most `max_lines` lines of `width` characters.
/// The last line is truncated if text remains.
#[must_use]
pub fn wrap(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return Vec::new();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut words = text.split_whitespace().peekable();

    while let Some(word) = words.next() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };

        if needed <= width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if lines.len() == max_lines {
            break;
        }
        current = word.to_string();
        if words.peek().is_none() {
            break;
        }
    }

    if !current.is_empty() && lines.len() < max_lines {
        lines.push(current);
    }

    let consumed: usize = lines.iter().map(|l| l.split_whitespace().count()).sum();
    if consumed < text.split_whitespace().count() {
        if let Some(last) = lines.last_mut() {
            let mut cut = truncate(last, width.saturating_sub(1));
            if !cut.ends_with('…') {
                cut.push('…');
            }
            *last = cut;
        }
    }

    lines.iter().map(|line| truncate(line, width)).collect()
}
