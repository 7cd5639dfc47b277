//! Application-level settings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which understanding path handles inbound messages.
///
/// Chosen once per process; the two paths are never mixed within a single
/// request. `Rules` is the default and needs no external model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnderstandingMode {
    /// Regex-table extraction with deterministic template replies.
    #[default]
    Rules,
    /// LLM classification with generated replies.
    Model,
}

impl fmt::Display for UnderstandingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnderstandingMode::Rules => write!(f, "rules"),
            UnderstandingMode::Model => write!(f, "model"),
        }
    }
}

impl FromStr for UnderstandingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rules" | "rule" => Ok(UnderstandingMode::Rules),
            "model" | "llm" => Ok(UnderstandingMode::Model),
            other => Err(format!(
                "unknown understanding mode '{}' (expected 'rules' or 'model')",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_rules() {
        assert_eq!(UnderstandingMode::default(), UnderstandingMode::Rules);
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("llm".parse::<UnderstandingMode>().unwrap(), UnderstandingMode::Model);
        assert_eq!("Rules".parse::<UnderstandingMode>().unwrap(), UnderstandingMode::Rules);
        assert!("magic".parse::<UnderstandingMode>().is_err());
    }
}
