use std::sync::OnceLock;

use regex::Regex;

/// `##name|` opens a color span, a bare `##` closes it.
pub struct Color;

impl Color {
    pub const END: &'static str = "##";

    fn head_regex() -> &'static Regex {
        static HEAD_REGEX: OnceLock<Regex> = OnceLock::new();
        HEAD_REGEX.get_or_init(|| {
            Regex::new(r"^##(#?[A-Za-z0-9]+)\|").expect("Invalid color head regex")
        })
    }

    /// Matches a color head at the start of `rest`, returning its length
    /// and the color name.
    pub fn scan_head(rest: &str) -> Option<(usize, &str)> {
        let caps = Self::head_regex().captures(rest)?;
        let len = caps.get(0)?.end();
        Some((len, caps.get(1)?.as_str()))
    }

    /// Turns a color name into a CSS value.
    ///
    /// Six hex digits become a lower-cased `#rrggbb`; anything else is
    /// passed through as a CSS color keyword.
    pub fn css_value(name: &str) -> String {
        if name.len() == 6 && name.chars().all(|c| c.is_ascii_hexdigit()) {
            format!("#{}", name.to_ascii_lowercase())
        } else {
            name.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("##red|text##", Some((6, "red")))]
    #[case("##FF00aa|x", Some((9, "FF00aa")))]
    #[case("###f00|x", Some((7, "#f00")))]
    #[case("##|x", None)]
    #[case("## red|x", None)]
    #[case("##", None)]
    fn head(#[case] rest: &str, #[case] expected: Option<(usize, &str)>) {
        assert_eq!(Color::scan_head(rest), expected);
    }

    #[rstest]
    #[case("FF00AA", "#ff00aa")]
    #[case("blue", "blue")]
    #[case("#F00", "#F00")]
    #[case("facade", "#facade")]
    fn css(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(Color::css_value(name), expected);
    }
}
