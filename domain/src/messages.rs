//! Fixed strings shown to the user.

pub const APP_TITLE: &str = "IT Company FAQ Chatbot";

pub const GREETING: &str = "Hello! I'm an IT Company FAQ Chatbot. How can I help you today?";

pub const FAREWELL: &str = "Goodbye! Feel free to reach out if you have more questions.";

/// Returned whenever no stored question scores above the similarity threshold.
pub const FALLBACK_ANSWER: &str = "I'm sorry, I couldn't find a direct answer to that. Please try rephrasing your question or contact our support team.";

/// Inputs that end the session, compared case-insensitively.
pub const EXIT_COMMANDS: [&str; 2] = ["exit", "quit"];

pub fn is_exit_command(input: &str) -> bool {
    EXIT_COMMANDS
        .iter()
        .any(|cmd| input.trim().eq_ignore_ascii_case(cmd))
}
