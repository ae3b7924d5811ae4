//! Card categories: truth or dare.

use serde::{Deserialize, Serialize};

/// The two card categories a player can draw from.
///
/// Each category is exhausted and reshuffled independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// A question the player must answer honestly.
    Truth,
    /// A challenge the player must act out.
    Dare,
}

impl Category {
    /// Uppercase label shown on a drawn card.
    pub fn label(self) -> &'static str {
        match self {
            Self::Truth => "TRUTH",
            Self::Dare => "DARE",
        }
    }

    /// Parse user input ("truth"/"t", "dare"/"d"), case-insensitive.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "truth" | "t" => Some(Self::Truth),
            "dare" | "d" => Some(Self::Dare),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Truth => write!(f, "truth"),
            Self::Dare => write!(f, "dare"),
        }
    }
}
