use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate to at most `max_cells` terminal cells, ending with `…` when cut.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 0 {
        return String::new();
    }
    let budget = max_cells - 1;
    let mut used = 0;
    let mut out = String::new();
    for g in s.graphemes(true) {
        let w = display_width(g);
        if used + w > budget {
            break;
        }
        used += w;
        out.push_str(g);
    }
    out.push('\u{2026}');
    out
}

/// Byte offset of the grapheme after the one at `at`, or None at the end.
pub fn next_grapheme_boundary(s: &str, at: usize) -> Option<usize> {
    let rest = s.get(at..)?;
    rest.graphemes(true).next().map(|g| at + g.len())
}

/// Byte offset of the grapheme before `at`, or None at the start.
pub fn prev_grapheme_boundary(s: &str, at: usize) -> Option<usize> {
    let head = s.get(..at)?;
    head.graphemes(true).next_back().map(|g| at - g.len())
}

/// Terminal column of a byte offset
pub fn byte_offset_to_display_col(s: &str, at: usize) -> usize {
    display_width(&s[..at.min(s.len())])
}

/// Suffix of `s` starting at the first grapheme at or after display column `cols`
pub fn skip_display_cols(s: &str, cols: usize) -> &str {
    let mut col = 0;
    for (i, g) in s.grapheme_indices(true) {
        if col >= cols {
            return &s[i..];
        }
        col += display_width(g);
    }
    ""
}

fn is_blank(g: &str) -> bool {
    g.chars().all(char::is_whitespace)
}

/// Start of the word left of `at` (whitespace-delimited)
pub fn word_boundary_left(s: &str, at: usize) -> usize {
    let head = &s[..at.min(s.len())];
    let mut pos = head.len();
    let mut seen_word = false;
    for (i, g) in head.grapheme_indices(true).rev() {
        if is_blank(g) {
            if seen_word {
                break;
            }
        } else {
            seen_word = true;
        }
        pos = i;
    }
    if seen_word { pos } else { 0 }
}

/// Start of the next word right of `at` (or the end of the string)
pub fn word_boundary_right(s: &str, at: usize) -> usize {
    if at >= s.len() {
        return s.len();
    }
    let mut left_word = false;
    for (i, g) in s[at..].grapheme_indices(true) {
        if is_blank(g) {
            left_word = true;
        } else if left_word {
            return at + i;
        }
    }
    s.len()
}
