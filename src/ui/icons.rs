//! Category icon keys to terminal glyphs.

pub const FALLBACK: &str = "○";

/// Glyph for an icon key. Unknown keys get [`FALLBACK`].
pub fn glyph(icon: &str) -> &'static str {
    match icon {
        "mouse-pointer-click" => "➚",
        "square" => "□",
        "text-cursor-input" => "⌶",
        "panel-top" => "▔",
        "menu" => "☰",
        "table" => "▦",
        "bell" => "♪",
        "tag" => "⌗",
        "image" => "▣",
        "video" => "▶",
        _ => FALLBACK,
    }
}
