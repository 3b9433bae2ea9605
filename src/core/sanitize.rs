// src/core/sanitize.rs
//
// Text clean-up that mirrors how a browser renders cell text. Only ASCII
// whitespace collapses (CSS white-space rules); U+00A0 survives as-is.

/// Collapse each run of ASCII whitespace to a single space and trim the ends.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_ascii_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim_matches(' ').to_string()
}

/// One rendered line made of table-cell segments: each segment normalized,
/// joined with '\t'. A line whose segments are all blank comes out empty.
pub fn normalize_cells<S: AsRef<str>>(segments: &[S]) -> String {
    let cells: Vec<String> = segments.iter().map(|c| normalize_ws(c.as_ref())).collect();
    if cells.iter().all(String::is_empty) { s!() } else { cells.join("\t") }
}

/// Normalize every line, drop the ones left empty, rejoin with '\n'.
pub fn normalize_lines<S: AsRef<str>>(lines: &[Vec<S>]) -> String {
    lines
        .iter()
        .map(|l| normalize_cells(l.as_slice()))
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// True for an inline `style` that hides the element (`display: none`).
pub fn style_hides(style: &str) -> bool {
    let compact: String = style
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect::<String>()
        .to_ascii_lowercase();
    compact.split(';').any(|decl| decl == "display:none")
}

/// Class names usable unescaped in a `.class` selector: letters, digits,
/// '-', '_' and any non-ASCII char, not starting with a digit (or "-digit").
/// Backslash escapes are not accepted.
pub fn is_css_ident(s: &str) -> bool {
    let body = s.strip_prefix('-').unwrap_or(s);
    let Some(first) = body.chars().next() else { return false };
    if first.is_ascii_digit() { return false; }
    s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || !c.is_ascii())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_ascii_whitespace_only() {
        assert_eq!(normalize_ws("  a \t\n b  "), "a b");
        assert_eq!(normalize_ws("1\u{a0}000"), "1\u{a0}000");
        assert_eq!(normalize_ws("   "), "");
    }

    #[test]
    fn lines_drop_blanks() {
        let lines = vec![vec!["  a "], vec![""], vec![" b  c"], vec![" ", "\t"]];
        assert_eq!(normalize_lines(&lines), "a\nb c");
        assert_eq!(normalize_lines::<String>(&[]), "");
    }

    #[test]
    fn cells_join_with_tabs() {
        assert_eq!(normalize_cells(&[" a ", "b\t\tc"]), "a\tb c");
        assert_eq!(normalize_cells(&["a", "", "b"]), "a\t\tb");
        assert_eq!(normalize_cells(&["", " "]), "");
    }

    #[test]
    fn hidden_styles() {
        assert!(style_hides("display:none"));
        assert!(style_hides("color: red; DISPLAY : none;"));
        assert!(!style_hides("display: block"));
        assert!(!style_hides(""));
    }

    #[test]
    fn css_idents() {
        assert!(is_css_ident("wikitable"));
        assert!(is_css_ident("sortable-table_2"));
        assert!(is_css_ident("-x"));
        assert!(is_css_ident("città"));
        assert!(is_css_ident("表格"));
        assert!(!is_css_ident(""));
        assert!(!is_css_ident("-"));
        assert!(!is_css_ident("2col"));
        assert!(!is_css_ident("wiki table"));
        assert!(!is_css_ident("a.b"));
    }
}
