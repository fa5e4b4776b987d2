use serde::{Deserialize, Serialize};

/// Knobs that change generated identifiers.
///
/// The defaults reproduce the legacy output byte for byte. Embedding
/// callers may deserialize these from their own settings; missing fields
/// keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// Prepended to every user supplied `id` attribute (divs and spans).
    pub div_id_prefix: String,
    /// Headings get `id="<prefix><n>"`.
    pub heading_id_prefix: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            div_id_prefix: "u-".to_string(),
            heading_id_prefix: "toc".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_legacy_output() {
        let options = ConvertOptions::default();
        assert_eq!(options.div_id_prefix, "u-");
        assert_eq!(options.heading_id_prefix, "toc");
    }

    #[test]
    fn partial_options_keep_defaults() {
        let options: ConvertOptions = toml::from_str(r#"heading_id_prefix = "section-""#).unwrap();
        assert_eq!(options.heading_id_prefix, "section-");
        assert_eq!(options.div_id_prefix, "u-");
    }

    #[test]
    fn empty_options_are_default() {
        let options: ConvertOptions = toml::from_str("").unwrap();
        assert_eq!(options, ConvertOptions::default());
    }
}
