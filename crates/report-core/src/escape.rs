//! LaTeX escaping for free-form text.
//!
//! Headline titles arrive as HTML text and may contain characters LaTeX treats
//! specially. [`escape_latex`] maps them in a single left-to-right pass, trying
//! the HTML entity forms before the bare characters so `&amp;` becomes `\&`
//! rather than `\&amp;`.
//!
//! Escaping is not idempotent: the output of one pass contains `\&`, whose `&`
//! a second pass would escape again. Escape each string exactly once.

/// Replacement table, longest (entity) patterns first.
const ESCAPES: [(&str, &str); 9] = [
    ("&amp;", r"\&"),
    ("&gt;", r"\textgreater{}"),
    ("&lt;", r"\textless{}"),
    ("&", r"\&"),
    (">", r"\textgreater{}"),
    ("<", r"\textless{}"),
    ("$", r"\$"),
    ("%", r"\%"),
    ("#", r"\#"),
];

/// Escapes `text` for embedding in a LaTeX document.
#[must_use]
pub fn escape_latex(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    'outer: while let Some(c) = rest.chars().next() {
        for (pattern, replacement) in ESCAPES {
            if let Some(tail) = rest.strip_prefix(pattern) {
                out.push_str(replacement);
                rest = tail;
                continue 'outer;
            }
        }
        out.push(c);
        rest = &rest[c.len_utf8()..];
    }

    out
}
