//! REPL (Read-Eval-Print Loop) for chatting with the assistant

use crate::output::ConsoleFormatter;
use reelbot_application::{ConversationalClassifier, HandleMessageUseCase};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::sync::Arc;

/// Interactive chat REPL
pub struct ChatRepl {
    use_case: Arc<HandleMessageUseCase>,
    user: String,
    classifier: Option<Arc<ConversationalClassifier>>,
}

impl ChatRepl {
    pub fn new(use_case: Arc<HandleMessageUseCase>, user: impl Into<String>) -> Self {
        Self {
            use_case,
            user: user.into(),
            classifier: None,
        }
    }

    /// Attach the classifier so `/clear` can reset conversation history.
    pub fn with_classifier(mut self, classifier: Arc<ConversationalClassifier>) -> Self {
        self.classifier = Some(classifier);
        self
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = dirs::data_dir().map(|p| p.join("reelbot").join("history.txt"));
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            let readline = rl.readline(">>> ");

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    if line.is_empty() {
                        continue;
                    }

                    if line.starts_with('/') {
                        if self.handle_command(line).await {
                            break;
                        }
                        continue;
                    }

                    let _ = rl.add_history_entry(line);

                    let reply = self.use_case.handle(line, &self.user).await;
                    println!("{}", ConsoleFormatter::format(&reply));
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("Reelbot - chat mode ({} engine)", self.use_case.mode());
        println!();
        println!("Try: 'Tell me about Inception', 'I watched Heat',");
        println!("     'which movies have I watched', 'help'");
        println!();
        println!("Commands:");
        println!("  /clear  - Forget this conversation");
        println!("  /quit   - Exit chat");
        println!();
    }

    /// Handle slash commands. Returns true if the REPL should exit.
    async fn handle_command(&self, cmd: &str) -> bool {
        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                true
            }
            "/clear" => {
                if let Some(classifier) = &self.classifier {
                    classifier.clear(&self.user).await;
                    println!("Conversation history cleared.");
                } else {
                    println!("Nothing to clear: the rules engine keeps no history.");
                }
                false
            }
            "/help" | "/h" | "/?" => {
                println!();
                println!("Commands:");
                println!("  /help, /h, /?    - Show this help");
                println!("  /clear           - Forget this conversation");
                println!("  /quit, /exit, /q - Exit chat");
                println!();
                false
            }
            other => {
                println!("Unknown command: {}", other);
                false
            }
        }
    }
}
