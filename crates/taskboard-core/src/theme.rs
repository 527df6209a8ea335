use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// UI theme persisted in the singleton config row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Desert,
    Oasis,
    Forest,
    Snow,
}

impl Theme {
    pub const ALL: [Theme; 4] = [Self::Desert, Self::Oasis, Self::Forest, Self::Snow];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Desert => "Desert",
            Self::Oasis => "Oasis",
            Self::Forest => "Forest",
            Self::Snow => "Snow",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme: {0}")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    /// Case-sensitive: only the exact names are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownTheme(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_desert() {
        assert_eq!(Theme::default(), Theme::Desert);
    }

    #[test]
    fn parse_every_variant() {
        for theme in Theme::ALL {
            assert_eq!(theme.as_str().parse::<Theme>().unwrap(), theme);
        }
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!("forest".parse::<Theme>(), Err(UnknownTheme("forest".into())));
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "Purple".parse::<Theme>().unwrap_err();
        assert_eq!(err.to_string(), "unknown theme: Purple");
    }

    #[test]
    fn parse_rejects_empty() {
        assert!("".parse::<Theme>().is_err());
    }

    #[test]
    fn serializes_as_name() {
        assert_eq!(serde_json::to_string(&Theme::Snow).unwrap(), "\"Snow\"");
    }
}
