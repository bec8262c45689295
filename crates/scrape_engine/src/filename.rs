/// Longest basename we will derive from a title.
const MAX_BASENAME_CHARS: usize = 80;

/// Derive a filesystem-safe basename from an article title: replace each
/// character rejected by common filesystems with `_`, trim surrounding
/// whitespace, and bound the length. The substitution is strictly
/// one-for-one and order-preserving.
pub fn safe_basename(title: &str) -> String {
    let replaced: String = title
        .chars()
        .map(|c| if is_forbidden(c) { '_' } else { c })
        .collect();
    let mut base: String = replaced.trim().chars().take(MAX_BASENAME_CHARS).collect();
    if is_reserved_windows_name(&base) {
        base.push('_');
    }
    base
}

fn is_forbidden(c: char) -> bool {
    matches!(c, '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*')
}

fn is_reserved_windows_name(name: &str) -> bool {
    const RESERVED: &[&str] = &[
        "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7",
        "COM8", "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
    ];
    RESERVED.iter().any(|r| r.eq_ignore_ascii_case(name))
}
