//! Line-counting strategies for analyzed files.
//!
//! Both counters are pure functions of a file's full text: they split on any
//! line-ending variant and drop blank lines. The strict counter additionally
//! drops `use` import lines and is applied to Rust sources; the generic
//! counter applies to everything else.

/// Splits on every line-ending variant (`\r\n`, `\n\r`, `\r`, `\n`) so files
/// with mixed or legacy endings still count correctly.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(['\r', '\n']).filter(|l| !l.is_empty())
}

/// Count non-blank lines, excluding `use` import statements.
pub fn count_strict(text: &str) -> usize {
    split_lines(text)
        .filter(|l| {
            let t = l.trim();
            !t.is_empty() && !t.starts_with("use ")
        })
        .count()
}

/// Count non-blank lines with no language-specific filtering.
pub fn count_generic(text: &str) -> usize {
    split_lines(text).filter(|l| !l.trim().is_empty()).count()
}

#[cfg(test)]
#[path = "loc_test.rs"]
mod tests;
