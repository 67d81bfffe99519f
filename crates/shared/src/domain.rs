use serde::{Deserialize, Serialize};

/// Timeline marker icons the experience feed is allowed to reference.
///
/// The wire carries a free-form string key; anything outside this set
/// resolves to no icon at all rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconKey {
    Rocket,
    Briefcase,
    Code2,
}

impl IconKey {
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "Rocket" => Some(Self::Rocket),
            "Briefcase" => Some(Self::Briefcase),
            "Code2" => Some(Self::Code2),
            _ => None,
        }
    }

    /// Glyph used when rendering the marker.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Rocket => "\u{1F680}",
            Self::Briefcase => "\u{1F4BC}",
            Self::Code2 => "\u{2328}",
        }
    }
}

/// One entry of the static technology grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub glyph: &'static str,
    /// sRGB tint applied to the glyph.
    pub tint: (u8, u8, u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_known_icon_key() {
        assert_eq!(IconKey::parse("Rocket"), Some(IconKey::Rocket));
        assert_eq!(IconKey::parse("Briefcase"), Some(IconKey::Briefcase));
        assert_eq!(IconKey::parse("Code2"), Some(IconKey::Code2));
    }

    #[test]
    fn unknown_icon_key_resolves_to_none() {
        assert_eq!(IconKey::parse("Unknown"), None);
        assert_eq!(IconKey::parse(""), None);
        assert_eq!(IconKey::parse("rocket"), None);
    }
}
