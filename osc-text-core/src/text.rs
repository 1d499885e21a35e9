//! Small text clean-up helpers applied before segmentation or synthesis

use std::sync::OnceLock;

use regex::Regex;

static EMOJI: OnceLock<Regex> = OnceLock::new();

fn emoji_regex() -> &'static Regex {
    EMOJI.get_or_init(|| {
        // emoticons, pictographs, transport, flags, misc symbols, dingbats
        Regex::new(
            r"[\x{1F600}-\x{1F64F}\x{1F300}-\x{1F5FF}\x{1F680}-\x{1F6FF}\x{1F1E6}-\x{1F1FF}\x{2600}-\x{26FF}\x{2700}-\x{27BF}]",
        )
        .expect("emoji pattern is a valid regex")
    })
}

/// Strip common emoji code points
pub fn remove_emojis(input: &str) -> String {
    emoji_regex().replace_all(input, "").into_owned()
}

/// Fold full-width ASCII variants and the ideographic space to half width
pub fn to_half_width(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            '\u{3000}' => ' ',
            '\u{FF01}'..='\u{FF5E}' => char::from_u32(c as u32 - 0xFEE0).unwrap_or(c),
            _ => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_emojis() {
        assert_eq!(remove_emojis("你好😀世界🚀！"), "你好世界！");
        assert_eq!(remove_emojis("sunny ☀ day ✂"), "sunny  day ");
        assert_eq!(remove_emojis("plain text"), "plain text");
    }

    #[test]
    fn test_to_half_width() {
        assert_eq!(to_half_width("ＡＢＣ１２３"), "ABC123");
        assert_eq!(to_half_width("你好，世界！"), "你好,世界!");
        assert_eq!(to_half_width("a\u{3000}b"), "a b");
        assert_eq!(to_half_width("。"), "。");
    }
}
