//! The closed set of intents the assistant understands.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What the user wants from the assistant.
///
/// The set is closed; anything the extractor or classifier cannot map onto
/// one of the first four variants becomes [`Intent::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Look up information about a movie.
    GetInfo,
    /// Mark a movie as watched.
    MarkWatched,
    /// Show usage help.
    Help,
    /// List the user's watched movies.
    ListWatched,
    /// Could not determine what the user wants.
    Unknown,
}

impl Intent {
    /// Whether this intent is only actionable with a movie title attached.
    pub fn requires_entity(self) -> bool {
        matches!(self, Intent::GetInfo | Intent::MarkWatched)
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Intent::GetInfo => "get_info",
            Intent::MarkWatched => "mark_watched",
            Intent::Help => "help",
            Intent::ListWatched => "list_watched",
            Intent::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Intent {
    type Err = crate::DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "get_info" => Ok(Intent::GetInfo),
            "mark_watched" => Ok(Intent::MarkWatched),
            "help" => Ok(Intent::Help),
            "list_watched" => Ok(Intent::ListWatched),
            "unknown" => Ok(Intent::Unknown),
            other => Err(crate::DomainError::UnknownIntent(other.to_string())),
        }
    }
}
