// ## 📂 File: `src/utils.rs`

/// Upper-case the first character and lower-case the rest.
///
/// This is the import-side half of the category name normalization:
/// `"normal"` → `"Normal"`, `"INTRO"` → `"Intro"`.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
        None => String::new(),
    }
}

/// Short printable form of a byte string for diagnostics.
pub fn fmt_bytes(b: &[u8]) -> String {
    if b.iter().all(|c| c.is_ascii_graphic() || *c == b' ') {
        format!("b\"{}\"", String::from_utf8_lossy(b))
    } else {
        format!("0x{}", hex::encode(b))
    }
}
