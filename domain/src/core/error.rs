//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Unknown intent: {0}")]
    UnknownIntent(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = DomainError::UnknownIntent("dance".to_string());
        assert_eq!(error.to_string(), "Unknown intent: dance");
    }
}
