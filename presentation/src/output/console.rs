//! Console output formatting

use colored::Colorize;
use reelbot_application::Reply;

/// Formats replies for terminal display.
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// The reply text, with a colored status marker.
    pub fn format(reply: &Reply) -> String {
        let marker = if reply.success {
            "ok".green()
        } else {
            "!!".yellow()
        };
        format!("[{}] {}", marker, reply.text)
    }

    /// Just the text, for piping or delivery.
    pub fn format_plain(reply: &Reply) -> &str {
        &reply.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_includes_text() {
        let reply = Reply {
            text: "Title: Inception (2010)".to_string(),
            success: true,
        };
        assert!(ConsoleFormatter::format(&reply).contains("Title: Inception (2010)"));
        assert_eq!(ConsoleFormatter::format_plain(&reply), "Title: Inception (2010)");
    }
}
