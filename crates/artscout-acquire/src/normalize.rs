use unicode_normalization::UnicodeNormalization;

/// Normalize extracted page text to NFC and squeeze it onto one line.
///
/// Each line is trimmed, then split on double spaces (what is left of
/// layout indentation after tag stripping), and the surviving phrases are
/// joined with single spaces. Empty lines and phrases disappear.
pub fn normalize_text(input: &str) -> String {
    let nfc: String = input.nfc().collect();

    nfc.lines()
        .map(str::trim)
        .flat_map(|line| line.split("  "))
        .map(str::trim)
        .filter(|phrase| !phrase.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Truncate to at most `max_chars` characters without splitting a code point.
pub fn truncate_chars(input: &str, max_chars: usize) -> &str {
    match input.char_indices().nth(max_chars) {
        Some((idx, _)) => &input[..idx],
        None => input,
    }
}
