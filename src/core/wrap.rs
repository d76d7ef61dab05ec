//! Greedy pixel-bounded word wrapping for axis labels.

/// Wraps `label` into lines whose measured width stays within `width`.
///
/// `measure` is supplied by the rendering surface, which keeps the wrapping
/// logic testable without one. Words are accumulated greedily: when adding
/// the next whitespace-delimited word pushes the line past `width`, that
/// word starts a new line instead. A line exceeds `width` only when a single
/// word alone does; words are never split or dropped.
pub fn wrap_label<F>(label: &str, width: f64, mut measure: F) -> Vec<String>
where
    F: FnMut(&str) -> f64,
{
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in label.split_whitespace() {
        if line.is_empty() {
            line.push_str(word);
            continue;
        }

        let candidate = format!("{line} {word}");
        if measure(&candidate) > width {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
        } else {
            line = candidate;
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
