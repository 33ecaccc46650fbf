use pwref_types::Protocol;

/// Accent color per protocol, shared by the console views and the TUI.
pub fn protocol_rgb(protocol: Protocol) -> (u8, u8, u8) {
    match protocol {
        Protocol::Mcp => (79, 70, 229),
        Protocol::Cli => (5, 150, 105),
        Protocol::TestRunner => (217, 119, 6),
    }
}

/// Parse a `#rrggbb` string (the catalog's category colors).
pub fn hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Truncate to `max_chars`, respecting UTF-8 character boundaries.
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

/// Left-pad `s` with spaces to `width` characters, truncating first if it
/// is too long. Width is counted in chars, which is close enough for the
/// catalog's mostly-ASCII cell text.
pub fn pad(s: &str, width: usize) -> String {
    let cell = truncate(s, width.saturating_sub(1));
    let len = cell.chars().count();
    let padding = width.saturating_sub(len);
    format!("{}{}", cell, " ".repeat(padding))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parses_catalog_colors() {
        assert_eq!(hex_rgb("#b45309"), Some((180, 83, 9)));
        assert_eq!(hex_rgb("#ffffff"), Some((255, 255, 255)));
        assert_eq!(hex_rgb("b45309"), None);
        assert_eq!(hex_rgb("#xyzxyz"), None);
    }

    #[test]
    fn pad_is_stable_for_short_and_long_cells() {
        assert_eq!(pad("abc", 6), "abc   ");
        assert_eq!(pad("abcdefgh", 6), "ab... ");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("héllo wörld", 8), "héllo...");
        assert_eq!(truncate("short", 8), "short");
    }
}
