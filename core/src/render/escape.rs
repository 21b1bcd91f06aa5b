// ## 📂 File: `src/render/escape.rs`

use std::borrow::Cow;

/// Characters with special meaning in LaTeX text mode.
pub const LATEX_RESERVED: &[char] = &['&', '%', '$', '#', '_', '{', '}', '°', '~', '^', '\\'];

/// Escape LaTeX control characters in a single pass.
///
/// Borrows the input when nothing needs escaping.
pub fn latex_escape(text: &str) -> Cow<'_, str> {
    if !text.contains(LATEX_RESERVED) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&'  => out.push_str(r"\&"),
            '%'  => out.push_str(r"\%"),
            '$'  => out.push_str(r"\$"),
            '#'  => out.push_str(r"\#"),
            '_'  => out.push_str(r"\_"),
            '{'  => out.push_str(r"\{"),
            '}'  => out.push_str(r"\}"),
            '°'  => out.push_str(r"\textdegree{}"),
            '~'  => out.push_str(r"\textasciitilde{}"),
            '^'  => out.push_str(r"\textasciicircum{}"),
            '\\' => out.push_str(r"\textbackslash{}"),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}
